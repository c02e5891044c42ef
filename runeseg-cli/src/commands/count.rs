//! Count command implementation

use super::{open_output, CommonArgs, OutputFormat};
use crate::error::CliError;
use crate::input::resolve_patterns;
use anyhow::{Context, Result};
use clap::Args;
use runeseg_api::{Config, Encoding, TextProcessor};
use std::path::PathBuf;

/// Arguments for the count command
#[derive(Debug, Args)]
pub struct CountArgs {
    /// Input files or patterns (supports glob, `-` for stdin)
    #[arg(short, long, value_name = "FILE/PATTERN", required = true)]
    pub input: Vec<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Input encoding: utf-8, utf-16le, utf-16be, utf-32le, utf-32be
    #[arg(short, long, value_name = "ENCODING")]
    pub encoding: Option<Encoding>,

    #[command(flatten)]
    pub common: CommonArgs,
}

impl CountArgs {
    /// Execute the count command
    pub fn execute(&self) -> Result<()> {
        let config = self.common.setup()?;
        log::debug!("Arguments: {:?}", self);

        // Counting always substitutes; mode settings do not apply
        let encoding = self.encoding.unwrap_or(config.processing.encoding);
        let processor = TextProcessor::new(
            Config::builder()
                .encoding(encoding)
                .build()
                .map_err(|e| CliError::ConfigError(e.to_string()))?,
        );

        let sources = resolve_patterns(&self.input)?;
        let format = OutputFormat::resolve(self.format, &config)?;
        let mut formatter = format.formatter(open_output(self.output.as_deref())?, &config, false);

        for source in &sources {
            let counts = processor
                .count(source.read()?)
                .with_context(|| format!("Failed to count {source}"))?;
            formatter.format_counts(source, &counts)?;
        }

        formatter.finish()
    }
}
