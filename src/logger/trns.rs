//! Transaction and endpoint-transaction loggers.
//!
//! Both render their whole field set in a single binding pass per line; the
//! difference is when the request context freezes. The transaction logger
//! binds it at construction (one logger per request), the endpoint logger
//! binds everything per call (one logger shared across requests).

use super::{ENDPOINT_FILE_SUFFIX, TRNS_FILE_SUFFIX, hostname, open_sink};
use crate::clock::{self, Clock};
use crate::error::Error;
use crate::fmt::{ENDPOINT_FIELDS, Field, FieldTemplate, FieldValues, TRNS_FIELDS};
use crate::output::Sink;
use std::sync::Arc;

/// Identifiers of the request a transaction line belongs to.
#[derive(Debug, Clone, Default)]
pub struct TrnsContext {
    pub source_system: String,
    pub session_id: String,
    pub trns_id: String,
    pub subrnumb: String,
    pub request_ip: String,
    pub service_name: String,
    pub func_name: String,
}

impl TrnsContext {
    #[must_use]
    pub fn new(
        source_system: impl Into<String>,
        session_id: impl Into<String>,
        trns_id: impl Into<String>,
        subrnumb: impl Into<String>,
        request_ip: impl Into<String>,
        service_name: impl Into<String>,
        func_name: impl Into<String>,
    ) -> Self {
        Self {
            source_system: source_system.into(),
            session_id: session_id.into(),
            trns_id: trns_id.into(),
            subrnumb: subrnumb.into(),
            request_ip: request_ip.into(),
            service_name: service_name.into(),
            func_name: func_name.into(),
        }
    }

    fn values(&self) -> FieldValues {
        FieldValues::new()
            .with(Field::SourceSystem, self.source_system.as_str())
            .with(Field::SessionId, self.session_id.as_str())
            .with(Field::TrnsId, self.trns_id.as_str())
            .with(Field::Subrnumb, self.subrnumb.as_str())
            .with(Field::RequestIp, self.request_ip.as_str())
            .with(Field::ServiceName, self.service_name.as_str())
            .with(Field::FuncName, self.func_name.as_str())
    }
}

/// How a transaction ended.
#[derive(Debug, Clone, Default)]
pub struct TrnsOutcome {
    pub status_type: String,
    pub err_code: String,
    pub err_msg: String,
    pub endpoint_err_code: String,
    pub response_time: String,
}

impl TrnsOutcome {
    #[must_use]
    pub fn new(
        status_type: impl Into<String>,
        err_code: impl Into<String>,
        err_msg: impl Into<String>,
        endpoint_err_code: impl Into<String>,
        response_time: impl Into<String>,
    ) -> Self {
        Self {
            status_type: status_type.into(),
            err_code: err_code.into(),
            err_msg: err_msg.into(),
            endpoint_err_code: endpoint_err_code.into(),
            response_time: response_time.into(),
        }
    }

    fn values(&self) -> FieldValues {
        FieldValues::new()
            .with(Field::StatusType, self.status_type.as_str())
            .with(Field::ErrCode, self.err_code.as_str())
            .with(Field::ErrMsg, self.err_msg.as_str())
            .with(Field::EndpointErrCode, self.endpoint_err_code.as_str())
            .with(Field::ResponseTime, self.response_time.as_str())
    }
}

/// How a downstream endpoint call ended.
#[derive(Debug, Clone, Default)]
pub struct EndpointOutcome {
    pub service_type: String,
    pub endpoint_service_name: String,
    pub endpoint_status_type: String,
    pub endpoint_status_code: String,
    pub endpoint_err_code: String,
    pub response_time: String,
}

impl EndpointOutcome {
    #[must_use]
    pub fn new(
        service_type: impl Into<String>,
        endpoint_service_name: impl Into<String>,
        endpoint_status_type: impl Into<String>,
        endpoint_status_code: impl Into<String>,
        endpoint_err_code: impl Into<String>,
        response_time: impl Into<String>,
    ) -> Self {
        Self {
            service_type: service_type.into(),
            endpoint_service_name: endpoint_service_name.into(),
            endpoint_status_type: endpoint_status_type.into(),
            endpoint_status_code: endpoint_status_code.into(),
            endpoint_err_code: endpoint_err_code.into(),
            response_time: response_time.into(),
        }
    }

    fn values(&self) -> FieldValues {
        FieldValues::new()
            .with(Field::ServiceType, self.service_type.as_str())
            .with(
                Field::EndpointServiceName,
                self.endpoint_service_name.as_str(),
            )
            .with(
                Field::EndpointStatusType,
                self.endpoint_status_type.as_str(),
            )
            .with(
                Field::EndpointStatusCode,
                self.endpoint_status_code.as_str(),
            )
            .with(Field::EndpointErrCode, self.endpoint_err_code.as_str())
            .with(Field::ResponseTime, self.response_time.as_str())
    }
}

/// Logger for transaction-audit lines. The request context (and the
/// hostname, resolved once) freezes into the template at construction; each
/// [`print`](Self::print) binds the outcome and a fresh timestamp.
#[derive(Clone)]
pub struct TrnsLog {
    sink: Arc<dyn Sink>,
    clock: Arc<dyn Clock>,
    template: FieldTemplate,
}

impl TrnsLog {
    #[must_use]
    pub fn new(sink: Arc<dyn Sink>, clock: Arc<dyn Clock>, ctx: &TrnsContext) -> Self {
        let template = FieldTemplate::compile(
            TRNS_FIELDS,
            &ctx.values().with(Field::Hostname, hostname()),
        );
        Self {
            sink,
            clock,
            template,
        }
    }

    /// Transaction logger appending to `<base>_Transaction.log` on the
    /// system clock.
    ///
    /// # Errors
    /// Opening the log file fails.
    pub fn open(base: &str, ctx: &TrnsContext) -> Result<Self, Error> {
        let (sink, clock) = open_sink(base, TRNS_FILE_SUFFIX)?;
        Ok(Self::new(sink, clock, ctx))
    }

    /// Binds the outcome fields and a fresh timestamp in one pass and
    /// writes the line.
    ///
    /// # Errors
    /// The sink rejects the write.
    pub fn print(&self, outcome: &TrnsOutcome) -> Result<(), Error> {
        let values = outcome
            .values()
            .with(Field::Date, clock::format_timestamp(&self.clock.now()));
        self.sink.write_line(&self.template.render(&values))
    }
}

/// Logger for endpoint-transaction lines. Nothing is pre-bound: one
/// instance serves any number of requests, with the full field set supplied
/// per call.
#[derive(Clone)]
pub struct EndpointLog {
    sink: Arc<dyn Sink>,
    clock: Arc<dyn Clock>,
    template: FieldTemplate,
}

impl EndpointLog {
    #[must_use]
    pub fn new(sink: Arc<dyn Sink>, clock: Arc<dyn Clock>) -> Self {
        Self {
            sink,
            clock,
            template: FieldTemplate::from_fields(ENDPOINT_FIELDS),
        }
    }

    /// Endpoint logger appending to `<base>_Endpoint.log` on the system
    /// clock.
    ///
    /// # Errors
    /// Opening the log file fails.
    pub fn open(base: &str) -> Result<Self, Error> {
        let (sink, clock) = open_sink(base, ENDPOINT_FILE_SUFFIX)?;
        Ok(Self::new(sink, clock))
    }

    /// Binds the request context, the endpoint outcome, the hostname and a
    /// fresh timestamp in one pass and writes the line.
    ///
    /// # Errors
    /// The sink rejects the write.
    pub fn print(&self, ctx: &TrnsContext, outcome: &EndpointOutcome) -> Result<(), Error> {
        let values = ctx
            .values()
            .merge(&outcome.values())
            .with(Field::Hostname, hostname())
            .with(Field::Date, clock::format_timestamp(&self.clock.now()));
        self.sink.write_line(&self.template.render(&values))
    }
}
