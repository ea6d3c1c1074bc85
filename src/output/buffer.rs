//! In-memory sink for tests and embedding.

use super::Sink;
use crate::error::Error;
use std::sync::{Mutex, PoisonError};

/// Collects lines in memory. Keep a clone of the `Arc` handed to a logger to
/// read back what was written.
#[derive(Debug, Default)]
pub struct BufferSink {
    buf: Mutex<String>,
}

impl BufferSink {
    /// Empty buffer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything written so far, newline-terminated per line.
    #[must_use]
    pub fn contents(&self) -> String {
        self.buf
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl Sink for BufferSink {
    fn write_line(&self, line: &str) -> Result<(), Error> {
        let mut buf = self.buf.lock().unwrap_or_else(PoisonError::into_inner);
        buf.push_str(line);
        buf.push('\n');
        Ok(())
    }

    fn flush(&self) -> Result<(), Error> {
        Ok(())
    }
}
