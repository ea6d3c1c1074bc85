//! Debug/Info/Error record logger.
//!
//! One instance serves all three level tags: the level is bound at render
//! time, so there is no triplicated template state to keep in sync. Detail
//! binding (`with_session`, `with_record`) returns a new value, so the caller
//! holds the latest instance instead of watching a logger mutate under it.

use super::{DEBUG_FILE_SUFFIX, open_sink};
use crate::clock::{self, Clock};
use crate::error::Error;
use crate::fmt::{Field, FieldTemplate, FieldValues, RECORD_FIELDS};
use crate::internal;
use crate::level::Level;
use crate::output::Sink;
use std::fmt;
use std::process;
use std::sync::Arc;

/// Logger for `date|level|sourceSystemID|sessionID|trnsID|subrnumb|message`
/// lines.
#[derive(Clone)]
pub struct RecordLog {
    sink: Arc<dyn Sink>,
    clock: Arc<dyn Clock>,
    /// Construction-time identifiers bound; level, date, per-record and
    /// per-call fields open.
    init: FieldTemplate,
    /// Init template with the sub-record number additionally bound. `None`
    /// until the first `with_record`.
    record: Option<FieldTemplate>,
}

impl RecordLog {
    /// Binds the source system id; everything else stays open for later
    /// phases.
    #[must_use]
    pub fn new(sink: Arc<dyn Sink>, clock: Arc<dyn Clock>, source_system: &str) -> Self {
        let init = FieldTemplate::compile(
            RECORD_FIELDS,
            &FieldValues::new().with(Field::SourceSystem, source_system),
        );
        Self {
            sink,
            clock,
            init,
            record: None,
        }
    }

    /// Record logger appending to `<base>_Debug.log` on the system clock.
    ///
    /// # Errors
    /// Opening the log file fails.
    pub fn open(base: &str, source_system: &str) -> Result<Self, Error> {
        let (sink, clock) = open_sink(base, DEBUG_FILE_SUFFIX)?;
        Ok(Self::new(sink, clock, source_system))
    }

    /// Binds the session and transaction identifiers into the init template.
    /// Drops any derived record template: a new session starts a new
    /// record lineage.
    #[must_use]
    pub fn with_session(mut self, session_id: &str, trns_id: &str) -> Self {
        self.init = self.init.bind(
            &FieldValues::new()
                .with(Field::SessionId, session_id)
                .with(Field::TrnsId, trns_id),
        );
        self.record = None;
        self
    }

    /// Binds the sub-record number for the current unit of work. Always
    /// derived from the init template, so calling again with a different
    /// number yields that number alone, never a mix of both.
    #[must_use]
    pub fn with_record(mut self, subrnumb: &str) -> Self {
        self.record = Some(
            self.init
                .bind(&FieldValues::new().with(Field::Subrnumb, subrnumb)),
        );
        self
    }

    /// Writes one line under the given level tag with a fresh timestamp.
    /// Without a record binding the sub-record field renders empty.
    ///
    /// # Errors
    /// The sink rejects the write.
    pub fn println(&self, level: Level, msg: &str) -> Result<(), Error> {
        self.sink.write_line(&self.render(level, msg))
    }

    /// Renders the arguments, then writes them as one line.
    ///
    /// # Errors
    /// The sink rejects the write.
    pub fn printf(&self, level: Level, args: fmt::Arguments<'_>) -> Result<(), Error> {
        self.println(level, &args.to_string())
    }

    /// `println` under the DEBUG tag.
    ///
    /// # Errors
    /// The sink rejects the write.
    pub fn debug(&self, msg: &str) -> Result<(), Error> {
        self.println(Level::Debug, msg)
    }

    /// `println` under the INFO tag.
    ///
    /// # Errors
    /// The sink rejects the write.
    pub fn info(&self, msg: &str) -> Result<(), Error> {
        self.println(Level::Info, msg)
    }

    /// `println` under the ERROR tag.
    ///
    /// # Errors
    /// The sink rejects the write.
    pub fn error(&self, msg: &str) -> Result<(), Error> {
        self.println(Level::Error, msg)
    }

    /// Writes an ERROR line, flushes, and terminates the process. For
    /// states the caller has decided are unrecoverable.
    pub fn fatalln(&self, msg: &str) -> ! {
        if let Err(e) = self.println(Level::Error, msg) {
            internal::error("FATAL", &format!("failed to write final line: {e}"));
        }
        let _ = self.sink.flush();
        process::exit(1);
    }

    /// Renders the arguments, then behaves as [`fatalln`](Self::fatalln).
    pub fn fatalf(&self, args: fmt::Arguments<'_>) -> ! {
        self.fatalln(&args.to_string())
    }

    fn render(&self, level: Level, msg: &str) -> String {
        let values = FieldValues::new()
            .with(Field::Date, clock::format_timestamp(&self.clock.now()))
            .with(Field::Level, level.as_str())
            .with(Field::Msg, msg);
        self.record.as_ref().unwrap_or(&self.init).render(&values)
    }
}
