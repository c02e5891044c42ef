//! Public API for runeseg Unicode transcoding and segmentation
//!
//! This crate wraps the codec and segmentation engine of `runeseg-core`
//! behind a configuration object and serializable output types.

#![warn(missing_docs)]

pub mod config;
pub mod dto;
pub mod error;
mod units;

use error::Result;
use runeseg_core::convert::{self, Stats};
use runeseg_core::segment::{GraphemeSegments, WordSegments};
use runeseg_core::{CodePoints, CodeUnit, ConversionError, REPLACEMENT_CHARACTER};
use std::time::Instant;
use units::{dispatch, SourceUnits};

// Re-export key types
pub use config::{Config, ConfigBuilder, Encoding, ErrorPolicy, SegmentMode};
pub use dto::{Counts, Input, Metadata, Output, Segment};
pub use error::ApiError;

/// Main entry point for transcoding and segmentation
#[derive(Debug, Clone, Default)]
pub struct TextProcessor {
    config: Config,
}

impl TextProcessor {
    /// Create a processor with the given configuration
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Get the current configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Segment the input according to the configured mode
    pub fn process(&self, input: Input) -> Result<Output> {
        let start = Instant::now();
        let source = self.load(input)?;

        let stats = self.check(&source)?;
        let mode = self.config.mode();
        let words_only = self.config.words_only();
        let mut segments = dispatch!(&source.units, segment_units(mode, words_only));
        if source.trailing > 0 && !(words_only && mode == SegmentMode::Word) {
            let mut tail = Segment::new(
                source.len(),
                source.reported_len(),
                REPLACEMENT_CHARACTER.to_string(),
            );
            if mode == SegmentMode::Word {
                tail.word_like = Some(false);
            }
            segments.push(tail);
        }
        let word_count = dispatch!(&source.units, count_words());

        log::debug!(
            "{} {} segments, {} replacements",
            segments.len(),
            mode.name(),
            stats.replacements
        );

        let metadata = Metadata {
            encoding: source_encoding_name(&source, &self.config),
            mode: mode.name().to_string(),
            code_units: source.reported_len(),
            code_points: stats.code_points,
            replacements: stats.replacements,
            segment_count: segments.len(),
            word_count,
            processing_time_ms: start.elapsed().as_millis() as u64,
        };

        Ok(Output { segments, metadata })
    }

    /// Re-encode the input as `target`, without a byte order mark
    pub fn transcode(&self, input: Input, target: Encoding) -> Result<Vec<u8>> {
        let source = self.load(input)?;
        let (text, stats) = self.decode(&source)?;
        log::debug!(
            "transcoding {} code points to {}, {} replacements",
            stats.code_points,
            target,
            stats.replacements
        );
        Ok(units::encode_text(&text, target))
    }

    /// Decode the input into a `String` under the configured policy
    pub fn decode_text(&self, input: Input) -> Result<String> {
        let source = self.load(input)?;
        self.decode(&source).map(|(text, _)| text)
    }

    /// Check that the input is well-formed in the configured encoding
    pub fn validate(&self, input: Input) -> Result<()> {
        let source = self.load(input)?;
        dispatch!(&source.units, validate_units())?;
        if source.trailing > 0 {
            return Err(ConversionError::new(source.len()).into());
        }
        Ok(())
    }

    /// Code point, grapheme, word and replacement counts of the input
    pub fn count(&self, input: Input) -> Result<Counts> {
        let source = self.load(input)?;
        let stats = self.check(&source)?;
        let tail = usize::from(source.trailing > 0);
        Ok(Counts {
            code_units: source.reported_len(),
            code_points: stats.code_points,
            graphemes: dispatch!(&source.units, count_graphemes()) + tail,
            words: dispatch!(&source.units, count_words()),
            replacements: stats.replacements,
        })
    }

    fn load(&self, input: Input) -> Result<SourceUnits> {
        // Text is already decoded, whatever the configured encoding
        let encoding = if input.is_text() {
            Encoding::Utf8
        } else {
            self.config.encoding()
        };
        log::debug!("reading {input:?} as {encoding}");
        let bytes = input.read_bytes()?;
        log::trace!("read {} bytes", bytes.len());
        Ok(SourceUnits::from_bytes(bytes, encoding))
    }

    /// Apply the policy and gather decode statistics without output
    fn check(&self, source: &SourceUnits) -> Result<Stats> {
        let policy: runeseg_core::ErrorPolicy = self.config.policy().into();
        let mut stats = dispatch!(&source.units, count_units(policy))?;
        self.account_trailing(source, &mut stats)?;
        Ok(stats)
    }

    fn decode(&self, source: &SourceUnits) -> Result<(String, Stats)> {
        let policy: runeseg_core::ErrorPolicy = self.config.policy().into();
        let mut text = String::with_capacity(source.len());
        let mut stats = dispatch!(&source.units, decode_units(policy, &mut text))?;
        if self.account_trailing(source, &mut stats)? {
            text.push(REPLACEMENT_CHARACTER);
        }
        Ok((text, stats))
    }

    /// Fold a trailing partial unit into `stats`; true if it was replaced
    fn account_trailing(&self, source: &SourceUnits, stats: &mut Stats) -> Result<bool> {
        if source.trailing == 0 {
            return Ok(false);
        }
        if self.config.policy() == ErrorPolicy::Strict {
            return Err(ConversionError::new(source.len()).into());
        }
        stats.code_points += 1;
        stats.replacements += 1;
        Ok(true)
    }
}

fn source_encoding_name(source: &SourceUnits, config: &Config) -> String {
    match source.units {
        units::Units::Utf8(_) => Encoding::Utf8.name().to_string(),
        _ => config.encoding().name().to_string(),
    }
}

fn validate_units<E: runeseg_core::Encoding, U: CodeUnit>(
    units: &[U],
) -> std::result::Result<(), ConversionError> {
    convert::validate::<E, U>(units)
}

fn count_units<E: runeseg_core::Encoding, U: CodeUnit>(
    units: &[U],
    policy: runeseg_core::ErrorPolicy,
) -> std::result::Result<Stats, ConversionError> {
    convert::decode::<E, U, _>(units, policy, &mut runeseg_core::Discard)
}

fn decode_units<E: runeseg_core::Encoding, U: CodeUnit>(
    units: &[U],
    policy: runeseg_core::ErrorPolicy,
    out: &mut String,
) -> std::result::Result<Stats, ConversionError> {
    convert::decode::<E, U, _>(units, policy, out)
}

fn count_graphemes<E: runeseg_core::Encoding, U: CodeUnit>(units: &[U]) -> usize {
    GraphemeSegments::<E, U>::new(units).count()
}

fn count_words<E: runeseg_core::Encoding, U: CodeUnit>(units: &[U]) -> usize {
    WordSegments::<E, U>::new(units).words_only().count()
}

fn segment_units<E: runeseg_core::Encoding, U: CodeUnit>(
    units: &[U],
    mode: SegmentMode,
    words_only: bool,
) -> Vec<Segment> {
    let text_of = |start: usize, end: usize| convert::decode_and_collect::<E, U>(&units[start..end]);
    match mode {
        SegmentMode::Grapheme => GraphemeSegments::<E, U>::new(units)
            .map(|r| Segment::new(r.start, r.end, text_of(r.start, r.end)))
            .collect(),
        SegmentMode::Word => WordSegments::<E, U>::new(units)
            .filter(|s| s.word_like || !words_only)
            .map(|s| Segment {
                word_like: Some(s.word_like),
                ..Segment::new(s.range.start, s.range.end, text_of(s.range.start, s.range.end))
            })
            .collect(),
        SegmentMode::CodePoint => {
            let mut iter = CodePoints::<E, U>::new(units);
            let mut segments = Vec::new();
            loop {
                let start = iter.offset();
                let Some(c) = iter.next() else {
                    break;
                };
                segments.push(Segment::new(start, iter.offset(), c.to_string()));
            }
            segments
        }
    }
}

// Convenience functions

/// Grapheme clusters of `text` with default configuration
pub fn process_text(text: &str) -> Result<Output> {
    TextProcessor::default().process(Input::from_text(text))
}

/// Process a file with the given configuration
pub fn process_file<P: AsRef<std::path::Path>>(path: P, config: Config) -> Result<Output> {
    TextProcessor::new(config).process(Input::from_file(path.as_ref().to_path_buf()))
}

/// Re-encode `bytes` from one encoding to another, substituting U+FFFD
pub fn transcode_bytes(bytes: &[u8], from: Encoding, to: Encoding) -> Result<Vec<u8>> {
    let config = Config::builder().encoding(from).build()?;
    TextProcessor::new(config).transcode(Input::from_bytes(bytes), to)
}
