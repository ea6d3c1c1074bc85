//! Line destinations. The loggers render complete lines and hand them to a
//! [`Sink`]; the only sink the crate opens itself is the rotating file.

mod buffer;
mod file;

pub use buffer::BufferSink;
pub use file::{RotatingFile, backup_path};

use crate::error::Error;

/// Destination accepting rendered lines. `Send + Sync` so one handle can be
/// shared by the three level tags of a record logger.
pub trait Sink: Send + Sync {
    /// Writes one line; the sink supplies the terminator.
    ///
    /// # Errors
    /// I/O errors from the underlying destination.
    fn write_line(&self, line: &str) -> Result<(), Error>;

    /// Buffered sinks may lose tail data on abrupt exit without an explicit flush.
    ///
    /// # Errors
    /// I/O errors from the underlying destination.
    fn flush(&self) -> Result<(), Error>;
}
