//! Input handling module

pub mod file_reader;
pub mod glob_resolver;

pub use file_reader::FileReader;
pub use glob_resolver::resolve_patterns;

use anyhow::Result;
use runeseg_api::Input;
use std::fmt;
use std::path::PathBuf;

/// Pattern that reads standard input
pub const STDIN_PATTERN: &str = "-";

/// One resolved input
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum InputSource {
    /// Standard input
    Stdin,
    /// A file on disk
    File(PathBuf),
}

impl InputSource {
    /// Read the whole source into an API input
    pub fn read(&self) -> Result<Input> {
        let bytes = match self {
            InputSource::Stdin => FileReader::read_stdin()?,
            InputSource::File(path) => FileReader::read_bytes(path)?,
        };
        Ok(Input::from_bytes(bytes))
    }
}

impl fmt::Display for InputSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputSource::Stdin => f.write_str("<stdin>"),
            InputSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}
