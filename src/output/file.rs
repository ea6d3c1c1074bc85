//! Append-mode file sink with daily rotation.
//!
//! Rotation happens in two places: once at open, against the existing file's
//! modification date, and lazily at write time when the clock crosses a
//! calendar-day boundary. Both compare dates in the clock's timezone at
//! local midnight.

use super::Sink;
use crate::clock::{self, Clock};
use crate::error::Error;
use crate::internal;
use chrono::{DateTime, NaiveDate, Utc};
use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, PoisonError};

/// File sink that archives the previous day's file as `<path>.<YYYY-MM-DD>`
/// before appending across a day boundary. At most one rotation per write.
pub struct RotatingFile {
    path: PathBuf,
    clock: Arc<dyn Clock>,
    state: Mutex<WriterState>,
}

struct WriterState {
    file: File,
    /// Calendar date of the last write, and the rotation suffix when the
    /// next write lands on a later day.
    last_write: NaiveDate,
}

impl RotatingFile {
    /// Opens `path` for append, archiving it first when its modification
    /// date belongs to an earlier day than the clock's today.
    ///
    /// A missing file is normal: no rotation, the file is created. A failed
    /// archive rename is reported to the diagnostic stream and writing
    /// continues against the existing file.
    ///
    /// # Errors
    /// The open itself failing; logging cannot continue without a destination.
    pub fn open(path: impl Into<PathBuf>, clock: Arc<dyn Clock>) -> Result<Self, Error> {
        let path = path.into();
        let today = clock.today();

        if let Ok(meta) = fs::metadata(&path)
            && let Ok(modified) = meta.modified()
        {
            let zone = clock.now().timezone();
            let modified_date = DateTime::<Utc>::from(modified)
                .with_timezone(&zone)
                .date_naive();
            if modified_date != today {
                archive(&path, modified_date);
            }
        }

        let file = open_append(&path)?;
        Ok(Self {
            path,
            clock,
            state: Mutex::new(WriterState {
                file,
                last_write: today,
            }),
        })
    }

    /// The path lines are appended to.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Sink for RotatingFile {
    fn write_line(&self, line: &str) -> Result<(), Error> {
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        let today = self.clock.today();

        if today != state.last_write {
            state.file.flush()?;
            archive(&self.path, state.last_write);
            state.file = open_append(&self.path)?;
        }

        state.file.write_all(line.as_bytes())?;
        state.file.write_all(b"\n")?;
        state.last_write = today;
        Ok(())
    }

    fn flush(&self) -> Result<(), Error> {
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        state.file.flush().map_err(Error::from)
    }
}

fn open_append(path: &Path) -> Result<File, Error> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(Error::from)
}

/// Renames `path` to `path.<date>`. Best-effort: a failed rename leaves the
/// current file in place and subsequent writes keep appending to it.
fn archive(path: &Path, date: NaiveDate) {
    let backup = backup_path(path, date);
    match fs::rename(path, &backup) {
        Ok(()) => internal::debug(
            "ROTATE",
            &format!("archived {} as {}", path.display(), backup.display()),
        ),
        Err(e) => internal::warn(
            "ROTATE",
            &format!("failed to archive {} as {}: {e}", path.display(), backup.display()),
        ),
    }
}

/// `service_Debug.log` rotated on 2018-01-18 becomes `service_Debug.log.2018-01-18`.
#[must_use]
pub fn backup_path(path: &Path, date: NaiveDate) -> PathBuf {
    let mut name = path.as_os_str().to_os_string();
    name.push(format!(".{}", clock::format_date(date)));
    PathBuf::from(name)
}
