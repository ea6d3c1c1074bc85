#![forbid(unsafe_code)]

//! `pipelog` - Pipe-delimited transaction logging with daily file rotation.
//!
//! A structured logging helper for service-style applications:
//! - Fixed-order, pipe-delimited record and transaction-audit lines
//! - Phased field binding: identifiers freeze at construction, per-unit
//!   identifiers per unit of work, timestamp and message per call
//! - Daily file rotation (`file.log` -> `file.log.2018-01-18`)
//! - Timestamps localized to one fixed timezone
//! - Retention for rotated backups (delete or gzip by age)
//!
//! # Example
//!
//! ```no_run
//! use pipelog::{Level, RecordLog};
//!
//! # fn main() -> Result<(), pipelog::Error> {
//! let log = RecordLog::open("/var/log/voucher/service", "EVOUCHER")?
//!     .with_session("session-77", "trn-12345")
//!     .with_record("66987654321");
//!
//! log.info("redeeming voucher")?;
//! log.println(Level::Debug, "balance checked")?;
//! # Ok(())
//! # }
//! ```

pub mod cleanup;
pub mod clock;
pub mod config;
pub mod error;
pub mod fmt;
pub mod internal;
pub mod level;
pub mod logger;
pub mod output;

// Re-exports for convenience
pub use cleanup::{CleanupOptions, CleanupResult, cleanup};
pub use clock::{Clock, ManualClock, SystemClock};
pub use config::Config;
pub use error::Error;
pub use fmt::{Field, FieldTemplate, FieldValues, FormatSegment};
pub use level::Level;
pub use logger::{
    EndpointLog, EndpointOutcome, RecordLog, TrnsContext, TrnsLog, TrnsOutcome, hostname,
};
pub use output::{BufferSink, RotatingFile, Sink};
