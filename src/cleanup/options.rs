//! Retention policy, kept apart from the engine so callers can build one
//! without touching filesystem internals.

use crate::config::RetentionConfig;

/// Every filter defaults to off: an unconfigured run deletes nothing.
#[derive(Debug, Clone, Default)]
pub struct CleanupOptions {
    /// Backups older than this many days are processed.
    pub max_age_days: Option<u32>,
    /// The N newest backups per log file survive regardless of age.
    pub keep_last: Option<usize>,
    /// Compress expired backups instead of removing them.
    pub compress: bool,
    /// Report instead of act.
    pub dry_run: bool,
}

impl CleanupOptions {
    /// Starts with every filter off.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Expires backups whose date suffix is more than `days` days old.
    #[must_use]
    pub const fn max_age_days(mut self, days: u32) -> Self {
        self.max_age_days = Some(days);
        self
    }

    /// The N newest backups per log file survive any age limit.
    #[must_use]
    pub const fn keep_last(mut self, n: usize) -> Self {
        self.keep_last = Some(n);
        self
    }

    /// Gzip expired backups in place instead of deleting them.
    #[must_use]
    pub const fn compress(mut self, compress: bool) -> Self {
        self.compress = compress;
        self
    }

    /// Report what a run would touch without touching it.
    #[must_use]
    pub const fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }
}

impl From<&RetentionConfig> for CleanupOptions {
    fn from(retention: &RetentionConfig) -> Self {
        Self {
            max_age_days: retention.max_age_days,
            keep_last: retention.keep_last,
            compress: retention.compress,
            dry_run: false,
        }
    }
}
