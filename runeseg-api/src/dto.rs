//! Data Transfer Objects for API

use crate::error::{ApiError, Result};
use std::fs;
use std::io::Read;
use std::path::PathBuf;

/// Input source for processing
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Input {
    /// Already decoded text, always read as UTF-8
    Text(String),
    /// File path
    File(PathBuf),
    /// Raw bytes in the configured encoding
    Bytes(Vec<u8>),
    /// Reader (not serializable)
    #[cfg_attr(feature = "serde", serde(skip))]
    Reader(Box<dyn Read>),
}

impl std::fmt::Debug for Input {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Input::Text(text) => f.debug_tuple("Text").field(text).finish(),
            Input::File(path) => f.debug_tuple("File").field(path).finish(),
            Input::Bytes(bytes) => f.debug_tuple("Bytes").field(&bytes.len()).finish(),
            Input::Reader(_) => f.debug_tuple("Reader").field(&"<dyn Read>").finish(),
        }
    }
}

impl Input {
    /// Create input from text
    pub fn from_text(text: impl Into<String>) -> Self {
        Input::Text(text.into())
    }

    /// Create input from file path
    pub fn from_file(path: impl Into<PathBuf>) -> Self {
        Input::File(path.into())
    }

    /// Create input from bytes
    pub fn from_bytes(bytes: impl Into<Vec<u8>>) -> Self {
        Input::Bytes(bytes.into())
    }

    /// Create input from a reader
    pub fn from_reader<R: Read + 'static>(reader: R) -> Self {
        Input::Reader(Box::new(reader))
    }

    /// Whether the content is decoded text rather than raw bytes
    pub fn is_text(&self) -> bool {
        matches!(self, Input::Text(_))
    }

    /// Read the raw content
    pub fn read_bytes(self) -> Result<Vec<u8>> {
        match self {
            Input::Text(text) => Ok(text.into_bytes()),
            Input::File(path) => fs::read(&path).map_err(ApiError::Io),
            Input::Bytes(bytes) => Ok(bytes),
            Input::Reader(mut reader) => {
                let mut buffer = Vec::new();
                reader.read_to_end(&mut buffer).map_err(ApiError::Io)?;
                Ok(buffer)
            }
        }
    }
}

/// One segment of the input
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Segment {
    /// Start offset in input code units
    pub start: usize,
    /// End offset in input code units (exclusive)
    pub end: usize,
    /// Decoded content, with U+FFFD for ill-formed units
    pub text: String,
    /// Word-likeness, present in word mode only
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub word_like: Option<bool>,
}

impl Segment {
    /// Create a new segment
    pub fn new(start: usize, end: usize, text: String) -> Self {
        Self {
            start,
            end,
            text,
            word_like: None,
        }
    }
}

/// Processing metadata
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Metadata {
    /// Source encoding name
    pub encoding: String,
    /// Segmentation mode name
    pub mode: String,
    /// Input length in code units
    pub code_units: usize,
    /// Decoded code points, replacements included
    pub code_points: usize,
    /// U+FFFD substitutions made
    pub replacements: usize,
    /// Segments returned
    pub segment_count: usize,
    /// Word-like word segments in the whole input
    pub word_count: usize,
    /// Processing time in milliseconds
    pub processing_time_ms: u64,
}

/// Complete output with segments and metadata
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Output {
    /// Segments in input order
    pub segments: Vec<Segment>,
    /// Processing metadata
    pub metadata: Metadata,
}

impl Output {
    /// Segment texts in order
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().map(|s| s.text.as_str())
    }

    /// Serialize as JSON
    #[cfg(feature = "serde")]
    pub fn to_json(&self, pretty: bool) -> Result<String> {
        let json = if pretty {
            serde_json::to_string_pretty(self)?
        } else {
            serde_json::to_string(self)?
        };
        Ok(json)
    }
}

/// Summary counts of one input
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Counts {
    /// Input length in code units
    pub code_units: usize,
    /// Decoded code points, replacements included
    pub code_points: usize,
    /// Extended grapheme clusters
    pub graphemes: usize,
    /// Word-like word segments
    pub words: usize,
    /// U+FFFD substitutions made
    pub replacements: usize,
}
