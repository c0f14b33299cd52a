//! Error types for the test runner
//!
//! Only runner defects live here. A test script failing, timing out, or
//! refusing to launch is recorded data (`runner::Outcome`), not an error.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the test runner
#[derive(Error, Debug)]
pub enum Error {
    #[error("Failed to read test directory '{path}': {source}")]
    Discovery {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid configuration file: {0}")]
    ConfigParse(String),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}
