//! Configuration file handling

use serde::Deserialize;
use std::path::{Path, PathBuf};

use super::{Error, Result};

/// Config file looked up in the working directory when no path is given
pub const CONFIG_FILE: &str = "uitest.toml";

/// Main configuration structure
#[derive(Debug, Deserialize, Default)]
pub struct Config {
    /// Test script discovery settings
    #[serde(default)]
    pub discovery: Discovery,

    /// Timeout settings
    #[serde(default)]
    pub timeouts: Timeouts,
}

/// Test script discovery settings
#[derive(Debug, Deserialize)]
pub struct Discovery {
    /// Directory to enumerate for test scripts
    #[serde(default = "default_dir")]
    pub dir: PathBuf,

    /// Filename prefix a script must carry to be discovered
    #[serde(default = "default_prefix")]
    pub prefix: String,
}

impl Default for Discovery {
    fn default() -> Self {
        Self {
            dir: default_dir(),
            prefix: default_prefix(),
        }
    }
}

/// Timeout settings
#[derive(Debug, Deserialize)]
pub struct Timeouts {
    /// Wall-clock budget per test script, in seconds
    #[serde(default = "default_unit_secs")]
    pub unit_secs: u64,
}

impl Default for Timeouts {
    fn default() -> Self {
        Self {
            unit_secs: default_unit_secs(),
        }
    }
}

fn default_dir() -> PathBuf {
    PathBuf::from(".")
}

fn default_prefix() -> String {
    "TC".to_string()
}

fn default_unit_secs() -> u64 {
    120
}

impl Config {
    /// Load configuration from the given path, or from `uitest.toml` in the
    /// working directory.
    ///
    /// A missing default file yields the built-in defaults; an explicitly
    /// named file must exist. A file that exists but does not parse is a
    /// fatal configuration error.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(p) => {
                if !p.exists() {
                    return Err(Error::Config(format!(
                        "Config file not found: {}",
                        p.display()
                    )));
                }
                p.to_path_buf()
            }
            None => {
                let default = PathBuf::from(CONFIG_FILE);
                if !default.exists() {
                    return Ok(Self::default());
                }
                default
            }
        };

        let content = std::fs::read_to_string(&path).map_err(|e| {
            Error::Config(format!("Failed to read '{}': {}", path.display(), e))
        })?;

        toml::from_str(&content).map_err(|e| Error::ConfigParse(e.to_string()))
    }
}
