//! High-level configuration API

use crate::error::{ApiError, Result};
use std::fmt;
use std::str::FromStr;

/// Encoding form and byte order of raw input or output
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Encoding {
    /// UTF-8
    #[default]
    #[cfg_attr(feature = "serde", serde(rename = "utf-8", alias = "utf8"))]
    Utf8,
    /// UTF-16, little endian
    #[cfg_attr(feature = "serde", serde(rename = "utf-16le", alias = "utf16le"))]
    Utf16Le,
    /// UTF-16, big endian
    #[cfg_attr(feature = "serde", serde(rename = "utf-16be", alias = "utf16be"))]
    Utf16Be,
    /// UTF-32, little endian
    #[cfg_attr(feature = "serde", serde(rename = "utf-32le", alias = "utf32le"))]
    Utf32Le,
    /// UTF-32, big endian
    #[cfg_attr(feature = "serde", serde(rename = "utf-32be", alias = "utf32be"))]
    Utf32Be,
}

impl Encoding {
    /// Every supported encoding
    pub const ALL: [Encoding; 5] = [
        Encoding::Utf8,
        Encoding::Utf16Le,
        Encoding::Utf16Be,
        Encoding::Utf32Le,
        Encoding::Utf32Be,
    ];

    /// Canonical name, as accepted by [`FromStr`]
    pub fn name(&self) -> &'static str {
        match self {
            Encoding::Utf8 => "utf-8",
            Encoding::Utf16Le => "utf-16le",
            Encoding::Utf16Be => "utf-16be",
            Encoding::Utf32Le => "utf-32le",
            Encoding::Utf32Be => "utf-32be",
        }
    }

    /// Bytes per code unit
    pub fn unit_size(&self) -> usize {
        match self {
            Encoding::Utf8 => 1,
            Encoding::Utf16Le | Encoding::Utf16Be => 2,
            Encoding::Utf32Le | Encoding::Utf32Be => 4,
        }
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Encoding {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self> {
        let normalized: String = s
            .chars()
            .filter(|c| !matches!(c, '-' | '_'))
            .flat_map(char::to_lowercase)
            .collect();
        match normalized.as_str() {
            "utf8" => Ok(Encoding::Utf8),
            "utf16" | "utf16le" => Ok(Encoding::Utf16Le),
            "utf16be" => Ok(Encoding::Utf16Be),
            "utf32" | "utf32le" => Ok(Encoding::Utf32Le),
            "utf32be" => Ok(Encoding::Utf32Be),
            _ => Err(ApiError::Config(format!("unknown encoding: {s}"))),
        }
    }
}

/// How ill-formed input is handled
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ErrorPolicy {
    /// Substitute U+FFFD and continue
    #[default]
    Replace,
    /// Fail at the first ill-formed subsequence
    Strict,
}

impl From<ErrorPolicy> for runeseg_core::ErrorPolicy {
    fn from(policy: ErrorPolicy) -> Self {
        match policy {
            ErrorPolicy::Replace => runeseg_core::ErrorPolicy::Replace,
            ErrorPolicy::Strict => runeseg_core::ErrorPolicy::Strict,
        }
    }
}

impl FromStr for ErrorPolicy {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "replace" => Ok(ErrorPolicy::Replace),
            "strict" => Ok(ErrorPolicy::Strict),
            _ => Err(ApiError::Config(format!("unknown error policy: {s}"))),
        }
    }
}

/// Unit of segmentation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum SegmentMode {
    /// Extended grapheme clusters
    #[default]
    Grapheme,
    /// Word boundaries
    Word,
    /// Individual code points
    CodePoint,
}

impl SegmentMode {
    /// Name used in output metadata
    pub fn name(&self) -> &'static str {
        match self {
            SegmentMode::Grapheme => "grapheme",
            SegmentMode::Word => "word",
            SegmentMode::CodePoint => "code-point",
        }
    }
}

impl FromStr for SegmentMode {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "grapheme" | "graphemes" => Ok(SegmentMode::Grapheme),
            "word" | "words" => Ok(SegmentMode::Word),
            "code-point" | "codepoint" | "code-points" => Ok(SegmentMode::CodePoint),
            _ => Err(ApiError::Config(format!("unknown segment mode: {s}"))),
        }
    }
}

/// High-level configuration for text processing
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    encoding: Encoding,
    policy: ErrorPolicy,
    mode: SegmentMode,
    words_only: bool,
}

impl Config {
    /// Grapheme segmentation of UTF-8 with replacement
    pub fn graphemes() -> Self {
        Self::default()
    }

    /// Word-like word segments of UTF-8 with replacement
    pub fn words() -> Self {
        Self {
            mode: SegmentMode::Word,
            words_only: true,
            ..Self::default()
        }
    }

    /// Grapheme segmentation that rejects ill-formed input
    pub fn strict() -> Self {
        Self {
            policy: ErrorPolicy::Strict,
            ..Self::default()
        }
    }

    /// Create a builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Source encoding
    pub fn encoding(&self) -> Encoding {
        self.encoding
    }

    /// Ill-formed input policy
    pub fn policy(&self) -> ErrorPolicy {
        self.policy
    }

    /// Segmentation mode
    pub fn mode(&self) -> SegmentMode {
        self.mode
    }

    /// Whether non-word-like word segments are skipped
    pub fn words_only(&self) -> bool {
        self.words_only
    }
}

/// Configuration builder
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the source encoding
    pub fn encoding(mut self, encoding: Encoding) -> Self {
        self.config.encoding = encoding;
        self
    }

    /// Set the source encoding by name
    pub fn encoding_name(self, name: &str) -> Result<Self> {
        Ok(self.encoding(name.parse()?))
    }

    /// Set the ill-formed input policy
    pub fn policy(mut self, policy: ErrorPolicy) -> Self {
        self.config.policy = policy;
        self
    }

    /// Shorthand for [`ErrorPolicy::Strict`]
    pub fn strict(self) -> Self {
        self.policy(ErrorPolicy::Strict)
    }

    /// Set the segmentation mode
    pub fn mode(mut self, mode: SegmentMode) -> Self {
        self.config.mode = mode;
        self
    }

    /// Keep only word-like segments (word mode only)
    pub fn words_only(mut self, words_only: bool) -> Self {
        self.config.words_only = words_only;
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<Config> {
        if self.config.words_only && self.config.mode != SegmentMode::Word {
            return Err(ApiError::Config(format!(
                "words_only requires word mode, not {}",
                self.config.mode.name()
            )));
        }

        Ok(self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encoding_names_round_trip() {
        for encoding in Encoding::ALL {
            assert_eq!(encoding.name().parse::<Encoding>().unwrap(), encoding);
        }
        assert_eq!("UTF_16".parse::<Encoding>().unwrap(), Encoding::Utf16Le);
        assert!("latin1".parse::<Encoding>().is_err());
    }

    #[test]
    fn test_words_only_requires_word_mode() {
        let err = Config::builder().words_only(true).build().unwrap_err();
        assert!(matches!(err, ApiError::Config(_)));

        let config = Config::builder()
            .mode(SegmentMode::Word)
            .words_only(true)
            .build()
            .unwrap();
        assert_eq!(config, Config::words());
    }

    #[test]
    fn test_presets() {
        assert_eq!(Config::graphemes().mode(), SegmentMode::Grapheme);
        assert_eq!(Config::strict().policy(), ErrorPolicy::Strict);
        assert!(Config::words().words_only());
    }

    #[test]
    fn test_policy_maps_to_core() {
        let core: runeseg_core::ErrorPolicy = ErrorPolicy::Strict.into();
        assert_eq!(core, runeseg_core::ErrorPolicy::Strict);
    }
}
