//! Configuration struct definitions.

use serde::Deserialize;

/// General configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Source system id stamped into every record line.
    pub source_system: String,
    /// IANA timezone name for timestamps and rotation dates.
    pub timezone: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            source_system: String::new(),
            timezone: "Asia/Bangkok".to_string(),
        }
    }
}

/// Log file placement.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Base directory for log files (`~` expanded).
    pub base_dir: String,
    /// Base name the `_Debug.log`/`_Transaction.log`/`_Endpoint.log`
    /// suffixes attach to.
    pub name: String,
}

impl Default for FileConfig {
    fn default() -> Self {
        let base_dir = directories::ProjectDirs::from("", "", "pipelog").map_or_else(
            || "logs".to_string(),
            |dirs| {
                dirs.state_dir()
                    .unwrap_or_else(|| dirs.data_dir())
                    .join("logs")
                    .to_string_lossy()
                    .into_owned()
            },
        );

        Self {
            base_dir,
            name: "app".to_string(),
        }
    }
}

/// Retention for rotated backups.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RetentionConfig {
    /// Backups older than this many days are processed.
    pub max_age_days: Option<u32>,
    /// The N newest backups per log file survive regardless of age.
    pub keep_last: Option<usize>,
    /// Gzip expired backups instead of deleting them.
    pub compress: bool,
}
