//! Retention for rotated backups.
//!
//! Rotation alone renames one file per day forever; without retention the
//! log directory grows until the disk fills. This module walks a directory
//! for `<file>.<YYYY-MM-DD>` backups and expires them by age, either
//! deleting or gzip-compressing each one.

mod compress;
mod options;
mod result;

pub use options::CleanupOptions;
pub use result::CleanupResult;

use crate::clock::{Clock, DATE_FORMAT};
use crate::error::Error;
use crate::internal;
use chrono::NaiveDate;
use compress::compress_file;
use regex::Regex;
use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

/// Matches the suffix rotation appends: `service_Debug.log.2018-01-18`.
static BACKUP_SUFFIX_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(.+)\.(\d{4}-\d{2}-\d{2})$").expect("Invalid backup regex"));

/// A rotated backup found on disk, keyed back to the log file it came from.
#[derive(Debug, Clone)]
struct BackupFile {
    path: PathBuf,
    /// Name of the log file this backup rotated out of.
    base: String,
    /// The calendar date in the suffix.
    date: NaiveDate,
    size: u64,
}

/// Expires rotated backups in `dir` by the given policy. Age is computed
/// from the date suffix against the injected clock, so tests don't need to
/// fake file timestamps.
///
/// # Errors
/// Directory traversal fails. Per-file failures are collected in the
/// result, not returned.
pub fn cleanup(
    dir: &Path,
    options: &CleanupOptions,
    clock: &dyn Clock,
) -> Result<CleanupResult, Error> {
    let mut result = CleanupResult::default();
    if !dir.is_dir() {
        internal::debug("CLEANUP", "directory does not exist, nothing to clean");
        return Ok(result);
    }

    let today = clock.today();
    let mut backups = collect_backups(dir)?;
    internal::debug("CLEANUP", &format!("found {} backups", backups.len()));

    // Newest first, so keep_last protection is a prefix per base file
    backups.sort_by(|a, b| b.date.cmp(&a.date));

    let mut protected: HashSet<PathBuf> = HashSet::new();
    if let Some(keep) = options.keep_last {
        let mut seen: HashMap<&str, usize> = HashMap::new();
        for backup in &backups {
            let n = seen.entry(backup.base.as_str()).or_insert(0);
            if *n < keep {
                protected.insert(backup.path.clone());
            }
            *n += 1;
        }
    }

    for backup in &backups {
        if protected.contains(&backup.path) {
            continue;
        }
        let age_days = (today - backup.date).num_days();
        let expired = options
            .max_age_days
            .is_some_and(|max| age_days > i64::from(max));
        if !expired {
            continue;
        }

        let shown = backup.path.display().to_string();
        if options.compress {
            if options.dry_run {
                result.would_compress.push(shown);
            } else {
                internal::debug("CLEANUP", &format!("compressing {shown}"));
                match compress_file(&backup.path) {
                    Ok(saved) => {
                        result.compressed.push(shown);
                        result.compressed_saved += saved;
                    }
                    Err(e) => result.failed.push((shown, e.to_string())),
                }
            }
        } else if options.dry_run {
            result.would_delete.push(shown);
            result.would_free += backup.size;
        } else {
            internal::debug("CLEANUP", &format!("deleting {shown}"));
            match fs::remove_file(&backup.path) {
                Ok(()) => {
                    result.deleted.push(shown);
                    result.freed += backup.size;
                }
                Err(e) => result.failed.push((shown, e.to_string())),
            }
        }
    }

    internal::debug(
        "CLEANUP",
        &format!("done: {} backups processed", result.count()),
    );
    Ok(result)
}

/// Non-recursive scan: rotation writes backups next to the log file, never
/// into subdirectories.
fn collect_backups(dir: &Path) -> Result<Vec<BackupFile>, Error> {
    let mut backups = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        if path.is_dir() {
            continue;
        }
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        let Some(caps) = BACKUP_SUFFIX_REGEX.captures(name) else {
            continue;
        };
        let (Some(base), Some(suffix)) = (caps.get(1), caps.get(2)) else {
            continue;
        };
        let Ok(date) = NaiveDate::parse_from_str(suffix.as_str(), DATE_FORMAT) else {
            continue;
        };
        let size = entry.metadata().map_or(0, |meta| meta.len());
        backups.push(BackupFile {
            path: path.clone(),
            base: base.as_str().to_string(),
            date,
            size,
        });
    }
    Ok(backups)
}
