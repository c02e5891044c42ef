//! Segment command implementation

use super::{ill_formed, open_output, CommonArgs, OutputFormat};
use crate::config::CliConfig;
use crate::error::CliError;
use crate::input::resolve_patterns;
use anyhow::Result;
use clap::Args;
use runeseg_api::{Config, Encoding, ErrorPolicy, SegmentMode, TextProcessor};
use std::path::PathBuf;

/// Arguments for the segment command
#[derive(Debug, Args)]
pub struct SegmentArgs {
    /// Input files or patterns (supports glob, `-` for stdin)
    #[arg(short, long, value_name = "FILE/PATTERN", required = true)]
    pub input: Vec<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Segmentation mode
    #[arg(short, long, value_enum)]
    pub mode: Option<ModeArg>,

    /// Only print word-like segments (implies word mode)
    #[arg(short, long)]
    pub words_only: bool,

    /// Input encoding: utf-8, utf-16le, utf-16be, utf-32le, utf-32be
    #[arg(short, long, value_name = "ENCODING")]
    pub encoding: Option<Encoding>,

    /// Fail on ill-formed input instead of substituting U+FFFD
    #[arg(short, long)]
    pub strict: bool,

    #[command(flatten)]
    pub common: CommonArgs,
}

/// Segmentation modes
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ModeArg {
    /// Extended grapheme clusters
    Grapheme,
    /// Words, spaces and punctuation
    Word,
    /// Individual code points
    CodePoint,
}

impl From<ModeArg> for SegmentMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Grapheme => SegmentMode::Grapheme,
            ModeArg::Word => SegmentMode::Word,
            ModeArg::CodePoint => SegmentMode::CodePoint,
        }
    }
}

impl SegmentArgs {
    /// Execute the segment command
    pub fn execute(&self) -> Result<()> {
        let config = self.common.setup()?;

        log::info!("Starting segmentation");
        log::debug!("Arguments: {:?}", self);

        let processor = TextProcessor::new(self.processor_config(&config)?);
        let sources = resolve_patterns(&self.input)?;
        let format = OutputFormat::resolve(self.format, &config)?;
        let writer = open_output(self.output.as_deref())?;
        let mut formatter = format.formatter(writer, &config, sources.len() > 1);

        for source in &sources {
            let output = processor
                .process(source.read()?)
                .map_err(|e| ill_formed(source, e))?;
            log::info!(
                "{source}: {} segments, {} replacements",
                output.metadata.segment_count,
                output.metadata.replacements
            );
            formatter.format_output(source, &output)?;
        }

        formatter.finish()
    }

    /// Merge flags over the config file into an API configuration
    pub fn processor_config(&self, config: &CliConfig) -> Result<Config> {
        let processing = &config.processing;
        let words_only = self.words_only || processing.words_only;
        let mode = match self.mode {
            Some(mode) => mode.into(),
            None if self.words_only => SegmentMode::Word,
            None => processing.mode,
        };
        let policy = if self.strict {
            ErrorPolicy::Strict
        } else {
            processing.policy
        };

        Config::builder()
            .encoding(self.encoding.unwrap_or(processing.encoding))
            .policy(policy)
            .mode(mode)
            .words_only(words_only)
            .build()
            .map_err(|e| CliError::ConfigError(e.to_string()).into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args() -> SegmentArgs {
        SegmentArgs {
            input: vec!["test.txt".to_string()],
            output: None,
            format: None,
            mode: None,
            words_only: false,
            encoding: None,
            strict: false,
            common: CommonArgs::default(),
        }
    }

    #[test]
    fn test_defaults_from_config() {
        let config = args().processor_config(&CliConfig::default()).unwrap();
        assert_eq!(config, Config::graphemes());
    }

    #[test]
    fn test_words_only_implies_word_mode() {
        let mut args = args();
        args.words_only = true;
        let config = args.processor_config(&CliConfig::default()).unwrap();
        assert_eq!(config, Config::words());
    }

    #[test]
    fn test_flags_override_file() {
        let mut file = CliConfig::default();
        file.processing.encoding = Encoding::Utf16Be;
        file.processing.mode = SegmentMode::Word;

        let mut args = args();
        args.mode = Some(ModeArg::CodePoint);
        args.strict = true;
        let config = args.processor_config(&file).unwrap();
        assert_eq!(config.mode(), SegmentMode::CodePoint);
        assert_eq!(config.encoding(), Encoding::Utf16Be);
        assert_eq!(config.policy(), ErrorPolicy::Strict);
    }

    #[test]
    fn test_words_only_conflicts_with_explicit_mode() {
        let mut args = args();
        args.words_only = true;
        args.mode = Some(ModeArg::Grapheme);
        let err = args.processor_config(&CliConfig::default()).unwrap_err();
        assert!(err.to_string().contains("words_only requires word mode"));
    }
}
