//! runeseg CLI library
//!
//! This library provides the command-line interface for the runeseg
//! transcoding and segmentation engine.

pub mod commands;
pub mod config;
pub mod error;
pub mod input;
pub mod output;

pub use error::{CliError, CliResult};
