//! Level tags stamped into the second field of record lines.
//!
//! There is no severity filtering anywhere in the crate: a level is purely
//! the text that lands between the first two pipes of a record line.

use std::fmt;
use std::str::FromStr;

/// The three record kinds a line can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Level {
    /// Development-time diagnostics.
    Debug,
    /// Normal operational milestones.
    #[default]
    Info,
    /// Failures worth an operator's attention.
    Error,
}

impl Level {
    /// Uppercase because the pipe-delimited line format carries uppercase tags.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Debug => "DEBUG",
            Self::Info => "INFO",
            Self::Error => "ERROR",
        }
    }

    /// Convenience for iteration in tests and dispatch helpers.
    #[must_use]
    pub const fn all() -> [Self; 3] {
        [Self::Debug, Self::Info, Self::Error]
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned by `FromStr` so callers can distinguish "unknown level" from other parse failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseLevelError(String);

impl fmt::Display for ParseLevelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown log level: '{}'", self.0)
    }
}

impl std::error::Error for ParseLevelError {}

impl FromStr for Level {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "debug" => Ok(Self::Debug),
            "info" => Ok(Self::Info),
            "error" | "err" => Ok(Self::Error),
            _ => Err(ParseLevelError(s.to_string())),
        }
    }
}
