//! CLI command implementations

use crate::config::CliConfig;
use crate::error::CliError;
use crate::input::InputSource;
use crate::output::{JsonFormatter, OutputFormatter, TextFormatter};
use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use runeseg_api::ApiError;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

pub mod convert;
pub mod count;
pub mod segment;
pub mod validate;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Split text into grapheme clusters, words or code points
    Segment(segment::SegmentArgs),

    /// Convert between UTF-8, UTF-16 and UTF-32
    Convert(convert::ConvertArgs),

    /// Check that inputs are well-formed
    Validate(validate::ValidateArgs),

    /// Count code points, graphemes, words and replacements
    Count(count::CountArgs),
}

impl Commands {
    /// Execute the selected command
    pub fn execute(&self) -> Result<()> {
        match self {
            Commands::Segment(args) => args.execute(),
            Commands::Convert(args) => args.execute(),
            Commands::Validate(args) => args.execute(),
            Commands::Count(args) => args.execute(),
        }
    }
}

/// Options shared by every command
#[derive(Debug, Clone, Default, Args)]
pub struct CommonArgs {
    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Suppress log output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl CommonArgs {
    /// Initialize logging and load the configuration file
    pub fn setup(&self) -> Result<CliConfig> {
        self.init_logging();
        CliConfig::load(self.config.as_deref())
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        if !self.quiet {
            // Already installed when commands run more than once per process
            let _ = env_logger::Builder::from_env(
                env_logger::Env::default().default_filter_or(log_level),
            )
            .try_init();
        }
    }
}

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Plain text, one item per line
    Text,
    /// JSON array with one entry per input
    Json,
}

impl OutputFormat {
    /// Resolve the format from a flag, falling back to the config file value
    pub fn resolve(flag: Option<Self>, config: &CliConfig) -> Result<Self> {
        if let Some(format) = flag {
            return Ok(format);
        }
        match config.output.format.to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => {
                Err(CliError::ConfigError(format!("unknown output format: {other}")).into())
            }
        }
    }

    /// Build the formatter for this format
    pub fn formatter(
        self,
        writer: Box<dyn Write + Send + Sync>,
        config: &CliConfig,
        headers: bool,
    ) -> Box<dyn OutputFormatter> {
        match self {
            OutputFormat::Text => Box::new(
                TextFormatter::new(writer)
                    .with_headers(headers)
                    .with_metadata(config.output.include_metadata),
            ),
            OutputFormat::Json => Box::new(
                JsonFormatter::new(writer)
                    .with_metadata(config.output.include_metadata)
                    .with_pretty(config.output.pretty_json),
            ),
        }
    }
}

/// Open `path` for writing, or stdout when absent
pub fn open_output(path: Option<&Path>) -> Result<Box<dyn Write + Send + Sync>> {
    match path {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create output file: {}", path.display()))?;
            Ok(Box::new(BufWriter::new(file)))
        }
        None => Ok(Box::new(io::stdout())),
    }
}

/// Name the input and offset of a strict-mode failure
pub(crate) fn ill_formed(source: &InputSource, err: ApiError) -> anyhow::Error {
    match err.position() {
        Some(position) => CliError::IllFormed {
            input: source.to_string(),
            position,
        }
        .into(),
        None => anyhow::Error::new(err).context(format!("Failed to process {source}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_flag_wins() {
        let mut config = CliConfig::default();
        config.output.format = "json".to_string();
        assert_eq!(
            OutputFormat::resolve(Some(OutputFormat::Text), &config).unwrap(),
            OutputFormat::Text
        );
        assert_eq!(OutputFormat::resolve(None, &config).unwrap(), OutputFormat::Json);
    }

    #[test]
    fn test_unknown_config_format() {
        let mut config = CliConfig::default();
        config.output.format = "markdown".to_string();
        let err = OutputFormat::resolve(None, &config).unwrap_err();
        assert!(err.to_string().contains("unknown output format: markdown"));
    }
}
