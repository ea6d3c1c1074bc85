//! Logger construction from pipelog config files.

use super::{
    DEBUG_FILE_SUFFIX, ENDPOINT_FILE_SUFFIX, TRNS_FILE_SUFFIX, EndpointLog, RecordLog, TrnsContext,
    TrnsLog,
};
use crate::clock::{Clock, SystemClock};
use crate::config::Config;
use crate::error::Error;
use crate::internal;
use crate::output::{RotatingFile, Sink};
use std::fs;
use std::sync::Arc;

/// Rotating sink at `<config base><suffix>` on the configured timezone's
/// clock, creating the log directory on the way.
fn open_configured(config: &Config, suffix: &str) -> Result<(Arc<dyn Sink>, Arc<dyn Clock>), Error> {
    let base = config.log_base()?;
    internal::debug("CONFIG", &format!("log base: {base}"));
    fs::create_dir_all(config.log_dir())?;

    let clock: Arc<dyn Clock> = Arc::new(SystemClock::with_zone(&config.general.timezone));
    let sink = RotatingFile::open(format!("{base}{suffix}"), clock.clone())?;
    Ok((Arc::new(sink), clock))
}

impl RecordLog {
    /// Record logger placed and localized per the config.
    ///
    /// # Errors
    /// The config names an unusable path or the log file cannot be opened.
    pub fn from_config(config: &Config) -> Result<Self, Error> {
        let (sink, clock) = open_configured(config, DEBUG_FILE_SUFFIX)?;
        Ok(Self::new(sink, clock, &config.general.source_system))
    }
}

impl TrnsLog {
    /// Transaction logger placed and localized per the config.
    ///
    /// # Errors
    /// The config names an unusable path or the log file cannot be opened.
    pub fn from_config(config: &Config, ctx: &TrnsContext) -> Result<Self, Error> {
        let (sink, clock) = open_configured(config, TRNS_FILE_SUFFIX)?;
        Ok(Self::new(sink, clock, ctx))
    }
}

impl EndpointLog {
    /// Endpoint logger placed and localized per the config.
    ///
    /// # Errors
    /// The config names an unusable path or the log file cannot be opened.
    pub fn from_config(config: &Config) -> Result<Self, Error> {
        let (sink, clock) = open_configured(config, ENDPOINT_FILE_SUFFIX)?;
        Ok(Self::new(sink, clock))
    }
}
