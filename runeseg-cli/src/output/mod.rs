//! Output formatting module

use crate::input::InputSource;
use anyhow::Result;
use runeseg_api::{Counts, Output};
use std::borrow::Cow;

/// Trait for output formatters
pub trait OutputFormatter: Send + Sync {
    /// Format the segments of one input
    fn format_output(&mut self, source: &InputSource, output: &Output) -> Result<()>;

    /// Format the summary counts of one input
    fn format_counts(&mut self, source: &InputSource, counts: &Counts) -> Result<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

pub mod json;
pub mod text;

pub use json::JsonFormatter;
pub use text::TextFormatter;

/// Make control characters visible so each segment stays on one line
pub fn escape_controls(text: &str) -> Cow<'_, str> {
    if !text.chars().any(char::is_control) {
        return Cow::Borrowed(text);
    }
    let mut escaped = String::with_capacity(text.len() + 8);
    for c in text.chars() {
        match c {
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            '\t' => escaped.push_str("\\t"),
            c if c.is_control() => escaped.push_str(&format!("\\u{{{:X}}}", c as u32)),
            c => escaped.push(c),
        }
    }
    Cow::Owned(escaped)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_controls() {
        assert!(matches!(escape_controls("plain"), Cow::Borrowed("plain")));
        assert_eq!(escape_controls("\r\n"), "\\r\\n");
        assert_eq!(escape_controls("a\u{7}b"), "a\\u{7}b");
        assert_eq!(escape_controls("e\u{301}"), "e\u{301}");
    }
}
