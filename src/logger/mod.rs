//! The three logger kinds and their file-opening conventions.
//!
//! A base name `N` maps to `N_Debug.log`, `N_Transaction.log` and
//! `N_Endpoint.log`; each logger owns its sink handle and its compiled
//! templates, and detail binding returns a new value instead of mutating in
//! place.

mod from_config;
mod record;
mod trns;

pub use record::RecordLog;
pub use trns::{EndpointLog, EndpointOutcome, TrnsContext, TrnsLog, TrnsOutcome};

use crate::clock::{Clock, SystemClock};
use crate::error::Error;
use crate::output::{RotatingFile, Sink};
use std::sync::Arc;

/// Suffix for Debug/Info/Error record files.
pub const DEBUG_FILE_SUFFIX: &str = "_Debug.log";

/// Suffix for transaction-audit files.
pub const TRNS_FILE_SUFFIX: &str = "_Transaction.log";

/// Suffix for endpoint-transaction files.
pub const ENDPOINT_FILE_SUFFIX: &str = "_Endpoint.log";

/// Hostname stamped into transaction lines. Resolution failure is tolerated:
/// the field renders empty.
#[must_use]
pub fn hostname() -> String {
    gethostname::gethostname().into_string().unwrap_or_default()
}

/// Rotating file sink at `<base><suffix>` on the system clock.
fn open_sink(base: &str, suffix: &str) -> Result<(Arc<dyn Sink>, Arc<dyn Clock>), Error> {
    let clock: Arc<dyn Clock> = Arc::new(SystemClock::new());
    let sink = RotatingFile::open(format!("{base}{suffix}"), clock.clone())?;
    Ok((Arc::new(sink), clock))
}
