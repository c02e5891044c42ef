//! JSON output formatter

use super::OutputFormatter;
use crate::input::InputSource;
use anyhow::Result;
use runeseg_api::{Counts, Metadata, Output, Segment};
use serde::{Deserialize, Serialize};
use std::io::Write;

/// JSON formatter - outputs one entry per input as a JSON array
pub struct JsonFormatter<W: Write> {
    writer: W,
    entries: Vec<JsonEntry>,
    include_metadata: bool,
    pretty: bool,
}

/// Data structure for JSON output
#[derive(Debug, Serialize, Deserialize)]
#[serde(untagged)]
pub enum JsonEntry {
    /// Segments of one input
    Segments {
        /// Input name
        source: String,
        /// Segments in order
        segments: Vec<Segment>,
        /// Processing metadata
        #[serde(default, skip_serializing_if = "Option::is_none")]
        metadata: Option<Metadata>,
    },
    /// Counts of one input
    Counts {
        /// Input name
        source: String,
        /// Summary counts
        #[serde(flatten)]
        counts: Counts,
    },
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            entries: Vec::new(),
            include_metadata: false,
            pretty: true,
        }
    }

    /// Attach processing metadata to each entry
    pub fn with_metadata(mut self, include_metadata: bool) -> Self {
        self.include_metadata = include_metadata;
        self
    }

    /// Pretty print instead of writing a single line
    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }
}

impl<W: Write + Send + Sync> OutputFormatter for JsonFormatter<W> {
    fn format_output(&mut self, source: &InputSource, output: &Output) -> Result<()> {
        self.entries.push(JsonEntry::Segments {
            source: source.to_string(),
            segments: output.segments.clone(),
            metadata: self.include_metadata.then(|| output.metadata.clone()),
        });
        Ok(())
    }

    fn format_counts(&mut self, source: &InputSource, counts: &Counts) -> Result<()> {
        self.entries.push(JsonEntry::Counts {
            source: source.to_string(),
            counts: *counts,
        });
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, &self.entries)?;
        } else {
            serde_json::to_writer(&mut self.writer, &self.entries)?;
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use runeseg_api::{Config, Input, TextProcessor};

    #[test]
    fn test_segments_array() {
        let output = TextProcessor::new(Config::words())
            .process(Input::from_text("hi there"))
            .unwrap();
        let mut formatter = JsonFormatter::new(Vec::new()).with_pretty(false);
        formatter
            .format_output(&InputSource::File("in.txt".into()), &output)
            .unwrap();
        formatter.finish().unwrap();

        let value: serde_json::Value = serde_json::from_slice(&formatter.writer).unwrap();
        assert_eq!(value[0]["source"], "in.txt");
        assert_eq!(value[0]["segments"][1]["text"], "there");
        assert_eq!(value[0]["segments"][1]["start"], 3);
        assert_eq!(value[0]["segments"][1]["word_like"], true);
        assert!(value[0].get("metadata").is_none());
    }

    #[test]
    fn test_counts_are_flattened() {
        let counts = Counts {
            code_units: 5,
            code_points: 5,
            graphemes: 5,
            words: 1,
            replacements: 0,
        };
        let mut formatter = JsonFormatter::new(Vec::new());
        formatter
            .format_counts(&InputSource::Stdin, &counts)
            .unwrap();
        formatter.finish().unwrap();

        let value: serde_json::Value = serde_json::from_slice(&formatter.writer).unwrap();
        assert_eq!(value[0]["source"], "<stdin>");
        assert_eq!(value[0]["words"], 1);
    }
}
