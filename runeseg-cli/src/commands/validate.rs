//! Validate command implementation

use super::{ill_formed, CommonArgs};
use crate::error::CliError;
use crate::input::resolve_patterns;
use anyhow::Result;
use clap::Args;
use runeseg_api::{Config, Encoding, TextProcessor};

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Input files or patterns (supports glob, `-` for stdin)
    #[arg(short, long, value_name = "FILE/PATTERN", required = true)]
    pub input: Vec<String>,

    /// Expected encoding (default: from config, else utf-8)
    #[arg(short, long, value_name = "ENCODING")]
    pub encoding: Option<Encoding>,

    #[command(flatten)]
    pub common: CommonArgs,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> Result<()> {
        let config = self.common.setup()?;
        let encoding = self.encoding.unwrap_or(config.processing.encoding);
        let processor = TextProcessor::new(
            Config::builder()
                .encoding(encoding)
                .strict()
                .build()
                .map_err(|e| CliError::ConfigError(e.to_string()))?,
        );

        let sources = resolve_patterns(&self.input)?;
        let mut first_failure = None;
        let mut failures = 0;

        for source in &sources {
            match processor.validate(source.read()?) {
                Ok(()) => println!("✓ {source}"),
                Err(err) => {
                    let err = ill_formed(source, err);
                    println!("✗ {err}");
                    failures += 1;
                    first_failure.get_or_insert(err);
                }
            }
        }

        log::info!(
            "{} of {} input(s) valid {encoding}",
            sources.len() - failures,
            sources.len()
        );

        match first_failure {
            Some(err) if failures > 1 => Err(err.context(format!(
                "{failures} of {} inputs are not valid {encoding}",
                sources.len()
            ))),
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}
