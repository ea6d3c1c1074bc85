//! TOML configuration.
//!
//! Separated from struct definitions so the loading and path-resolution
//! logic stays independent of the serde schema. There is no config-file
//! auto-discovery and no environment lookup; the caller says where the
//! config lives.

mod structs;

pub use structs::{FileConfig, GeneralConfig, RetentionConfig};

use crate::error::Error;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// An empty config file still yields working loggers: every field carries
/// a `#[serde(default)]` fallback.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Identity and timezone apply to every log kind.
    pub general: GeneralConfig,
    /// Where the three log files live.
    pub file: FileConfig,
    /// What happens to rotated backups over time.
    pub retention: RetentionConfig,
}

impl Config {
    /// Parses TOML content.
    ///
    /// # Errors
    /// The content is not valid TOML for this schema.
    pub fn parse(content: &str) -> Result<Self, Error> {
        toml::from_str(content).map_err(Error::from)
    }

    /// Reads and parses a TOML config file.
    ///
    /// # Errors
    /// The file cannot be read or is not valid TOML for this schema.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, Error> {
        Self::parse(&fs::read_to_string(path)?)
    }

    /// Log directory with `~` expanded.
    #[must_use]
    pub fn log_dir(&self) -> PathBuf {
        PathBuf::from(shellexpand::tilde(&self.file.base_dir).into_owned())
    }

    /// Base path the kind suffixes attach to: `<log_dir>/<name>`.
    ///
    /// # Errors
    /// `file.name` is empty; the kind suffixes need a name to attach to.
    pub fn log_base(&self) -> Result<String, Error> {
        if self.file.name.is_empty() {
            return Err(Error::InvalidPath("file.name is empty".to_string()));
        }
        Ok(self
            .log_dir()
            .join(&self.file.name)
            .to_string_lossy()
            .into_owned())
    }
}
