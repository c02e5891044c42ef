//! Plain text output formatter

use super::{escape_controls, OutputFormatter};
use crate::input::InputSource;
use anyhow::Result;
use runeseg_api::{Counts, Output};
use std::io::{self, Write};

/// Plain text formatter - outputs one segment per line
pub struct TextFormatter<W: Write> {
    writer: W,
    headers: bool,
    include_metadata: bool,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            headers: false,
            include_metadata: false,
        }
    }

    /// Print a `==> name <==` line before each input's segments
    pub fn with_headers(mut self, headers: bool) -> Self {
        self.headers = headers;
        self
    }

    /// Print a summary line after each input's segments
    pub fn with_metadata(mut self, include_metadata: bool) -> Self {
        self.include_metadata = include_metadata;
        self
    }
}

impl TextFormatter<io::Stdout> {
    /// Create a formatter that writes to stdout
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write + Send + Sync> OutputFormatter for TextFormatter<W> {
    fn format_output(&mut self, source: &InputSource, output: &Output) -> Result<()> {
        if self.headers {
            writeln!(self.writer, "==> {source} <==")?;
        }
        for segment in &output.segments {
            writeln!(self.writer, "{}", escape_controls(&segment.text))?;
        }
        if self.include_metadata {
            let meta = &output.metadata;
            writeln!(
                self.writer,
                "# {} {} segments, {} code points, {} replacements",
                meta.segment_count, meta.mode, meta.code_points, meta.replacements
            )?;
        }
        Ok(())
    }

    fn format_counts(&mut self, source: &InputSource, counts: &Counts) -> Result<()> {
        writeln!(
            self.writer,
            "{source}: code_points={} graphemes={} words={} replacements={}",
            counts.code_points, counts.graphemes, counts.words, counts.replacements
        )?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use runeseg_api::process_text;

    #[test]
    fn test_one_segment_per_line() {
        let output = process_text("ab\n").unwrap();
        let mut formatter = TextFormatter::new(Vec::new()).with_metadata(true);
        formatter
            .format_output(&InputSource::Stdin, &output)
            .unwrap();
        formatter.finish().unwrap();

        let written = String::from_utf8(formatter.writer).unwrap();
        assert_eq!(
            written,
            "a\nb\n\\n\n# 3 grapheme segments, 3 code points, 0 replacements\n"
        );
    }

    #[test]
    fn test_counts_line() {
        let counts = Counts {
            code_units: 4,
            code_points: 3,
            graphemes: 2,
            words: 1,
            replacements: 0,
        };
        let mut formatter = TextFormatter::new(Vec::new());
        formatter
            .format_counts(&InputSource::File("a.txt".into()), &counts)
            .unwrap();

        let written = String::from_utf8(formatter.writer).unwrap();
        assert_eq!(written, "a.txt: code_points=3 graphemes=2 words=1 replacements=0\n");
    }
}
