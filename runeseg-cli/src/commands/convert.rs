//! Convert command implementation

use super::{ill_formed, open_output, CommonArgs};
use crate::error::CliError;
use crate::input::{resolve_patterns, InputSource};
use anyhow::{Context, Result};
use clap::Args;
use runeseg_api::{Config, Encoding, ErrorPolicy, TextProcessor};
use std::io::Write;
use std::path::PathBuf;

/// Arguments for the convert command
#[derive(Debug, Args)]
pub struct ConvertArgs {
    /// Input file (`-` for stdin)
    #[arg(short, long, value_name = "FILE")]
    pub input: String,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Source encoding (default: from config, else utf-8)
    #[arg(long, value_name = "ENCODING")]
    pub from: Option<Encoding>,

    /// Target encoding
    #[arg(long, value_name = "ENCODING")]
    pub to: Encoding,

    /// Fail on ill-formed input instead of substituting U+FFFD
    #[arg(short, long)]
    pub strict: bool,

    #[command(flatten)]
    pub common: CommonArgs,
}

impl ConvertArgs {
    /// Execute the convert command
    pub fn execute(&self) -> Result<()> {
        let config = self.common.setup()?;
        log::debug!("Arguments: {:?}", self);

        let from = self.from.unwrap_or(config.processing.encoding);
        let policy = if self.strict {
            ErrorPolicy::Strict
        } else {
            config.processing.policy
        };
        let processor = TextProcessor::new(
            Config::builder()
                .encoding(from)
                .policy(policy)
                .build()
                .map_err(|e| CliError::ConfigError(e.to_string()))?,
        );

        let source = self.source()?;
        log::info!("Converting {source} from {from} to {}", self.to);
        let converted = processor
            .transcode(source.read()?, self.to)
            .map_err(|e| ill_formed(&source, e))?;

        let mut writer = open_output(self.output.as_deref())?;
        writer
            .write_all(&converted)
            .context("Failed to write converted output")?;
        writer.flush()?;
        Ok(())
    }

    fn source(&self) -> Result<InputSource> {
        let mut sources = resolve_patterns(std::slice::from_ref(&self.input))?;
        if sources.len() != 1 {
            anyhow::bail!(
                "convert takes exactly one input, {} matched {}",
                self.input,
                sources.len()
            );
        }
        Ok(sources.remove(0))
    }
}
