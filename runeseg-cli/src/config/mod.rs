//! Configuration module

use anyhow::{Context, Result};
use runeseg_api::{Encoding, ErrorPolicy, SegmentMode};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// CLI configuration structure
#[derive(Debug, Deserialize, Serialize, Default, PartialEq)]
pub struct CliConfig {
    /// Processing configuration
    #[serde(default)]
    pub processing: ProcessingConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,
}

/// Processing-related configuration
#[derive(Debug, Deserialize, Serialize, Default, PartialEq)]
#[serde(default)]
pub struct ProcessingConfig {
    /// Encoding of input files
    pub encoding: Encoding,

    /// Handling of ill-formed input
    pub policy: ErrorPolicy,

    /// Segmentation mode
    pub mode: SegmentMode,

    /// Skip whitespace and punctuation in word mode
    pub words_only: bool,
}

/// Output-related configuration
#[derive(Debug, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct OutputConfig {
    /// Default output format
    pub format: String,

    /// Include metadata in output
    pub include_metadata: bool,

    /// Pretty print JSON output
    pub pretty_json: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: "text".to_string(),
            include_metadata: false,
            pretty_json: true,
        }
    }
}

impl CliConfig {
    /// Load a TOML configuration file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Invalid config file: {}", path.display()))
    }

    /// Load `path` if given, defaults otherwise
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => {
                log::debug!("Loading configuration from {}", path.display());
                Self::from_file(path)
            }
            None => Ok(Self::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = CliConfig::load(None).unwrap();
        assert_eq!(config.processing.encoding, Encoding::Utf8);
        assert_eq!(config.processing.mode, SegmentMode::Grapheme);
        assert_eq!(config.output.format, "text");
        assert!(config.output.pretty_json);
    }

    #[test]
    fn test_partial_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("runeseg.toml");
        fs::write(
            &path,
            r#"
[processing]
encoding = "utf-16le"
mode = "word"
words_only = true
"#,
        )
        .unwrap();

        let config = CliConfig::load(Some(path.as_path())).unwrap();
        assert_eq!(config.processing.encoding, Encoding::Utf16Le);
        assert_eq!(config.processing.mode, SegmentMode::Word);
        assert!(config.processing.words_only);
        assert_eq!(config.processing.policy, ErrorPolicy::Replace);
        assert_eq!(config.output, OutputConfig::default());
    }

    #[test]
    fn test_invalid_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("bad.toml");
        fs::write(&path, "[processing]\nmode = \"sentence\"\n").unwrap();

        let err = CliConfig::load(Some(path.as_path())).unwrap_err();
        assert!(err.to_string().contains("Invalid config file"));
    }

    #[test]
    fn test_missing_file() {
        let err = CliConfig::load(Some(Path::new("/nonexistent/runeseg.toml"))).unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }
}
