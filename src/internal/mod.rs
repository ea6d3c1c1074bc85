//! Pipelog's own diagnostic stream.
//!
//! Failures inside a logging library can't be reported through the library
//! itself, so warnings (timezone fallback, failed rotation renames) and
//! cleanup progress go straight to stderr. `warn`/`error` are always on;
//! `debug` is opt-in via [`set_debug`].

use std::sync::atomic::{AtomicBool, Ordering};

static DEBUG_ENABLED: AtomicBool = AtomicBool::new(false);

/// Turns verbose internal diagnostics on or off for the whole process.
pub fn set_debug(enabled: bool) {
    DEBUG_ENABLED.store(enabled, Ordering::Relaxed);
}

/// Progress detail; silent unless [`set_debug`] was called.
pub fn debug(scope: &str, msg: &str) {
    if DEBUG_ENABLED.load(Ordering::Relaxed) {
        emit("DEBUG", scope, msg);
    }
}

/// Tolerated anomalies the operator should still see.
pub fn warn(scope: &str, msg: &str) {
    emit("WARN", scope, msg);
}

/// Failures that were surfaced to the caller but deserve a trace here too.
pub fn error(scope: &str, msg: &str) {
    emit("ERROR", scope, msg);
}

fn emit(tag: &str, scope: &str, msg: &str) {
    eprintln!("pipelog [{tag}] {scope}: {msg}");
}
