//! Every log kind lays its fields out in one fixed, pipe-delimited order.
//! The catalogs here are that order, and nothing downstream may reorder them.

/// Closed set of fields that can appear in a line. Typed slots instead of
/// textual markers: a field value can never collide with a placeholder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Date,
    Level,
    Hostname,
    SourceSystem,
    SessionId,
    TrnsId,
    Subrnumb,
    Msg,
    RequestIp,
    ServiceName,
    FuncName,
    StatusType,
    ErrCode,
    ErrMsg,
    EndpointErrCode,
    ServiceType,
    EndpointServiceName,
    EndpointStatusType,
    EndpointStatusCode,
    ResponseTime,
}

impl Field {
    /// Stable token name, used in diagnostics and tests.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Date => "date",
            Self::Level => "level",
            Self::Hostname => "hostname",
            Self::SourceSystem => "source_system",
            Self::SessionId => "session_id",
            Self::TrnsId => "trns_id",
            Self::Subrnumb => "subrnumb",
            Self::Msg => "msg",
            Self::RequestIp => "request_ip",
            Self::ServiceName => "service_name",
            Self::FuncName => "func_name",
            Self::StatusType => "status_type",
            Self::ErrCode => "err_code",
            Self::ErrMsg => "err_msg",
            Self::EndpointErrCode => "endpoint_err_code",
            Self::ServiceType => "service_type",
            Self::EndpointServiceName => "endpoint_service_name",
            Self::EndpointStatusType => "endpoint_status_type",
            Self::EndpointStatusCode => "endpoint_status_code",
            Self::ResponseTime => "response_time",
        }
    }

    /// Iteration over all variants avoids forgetting a field when matching by name.
    pub const ALL: &'static [Self] = &[
        Self::Date,
        Self::Level,
        Self::Hostname,
        Self::SourceSystem,
        Self::SessionId,
        Self::TrnsId,
        Self::Subrnumb,
        Self::Msg,
        Self::RequestIp,
        Self::ServiceName,
        Self::FuncName,
        Self::StatusType,
        Self::ErrCode,
        Self::ErrMsg,
        Self::EndpointErrCode,
        Self::ServiceType,
        Self::EndpointServiceName,
        Self::EndpointStatusType,
        Self::EndpointStatusCode,
        Self::ResponseTime,
    ];

    /// Number of distinct fields; sizes the value-bag backing array.
    pub const COUNT: usize = Self::ALL.len();
}

/// Debug/Info/Error record lines:
/// `date|level|sourceSystemID|sessionID|trnsID|subrnumb|message`.
pub const RECORD_FIELDS: &[Field] = &[
    Field::Date,
    Field::Level,
    Field::SourceSystem,
    Field::SessionId,
    Field::TrnsId,
    Field::Subrnumb,
    Field::Msg,
];

/// Transaction-audit lines:
/// `date|hostname|sourceSystemID|sessionID|trnsID|subrnumb|requestIP|serviceName|funcName|statusType|errCode|errMsg|endpointErrCode|responseTime`.
pub const TRNS_FIELDS: &[Field] = &[
    Field::Date,
    Field::Hostname,
    Field::SourceSystem,
    Field::SessionId,
    Field::TrnsId,
    Field::Subrnumb,
    Field::RequestIp,
    Field::ServiceName,
    Field::FuncName,
    Field::StatusType,
    Field::ErrCode,
    Field::ErrMsg,
    Field::EndpointErrCode,
    Field::ResponseTime,
];

/// Endpoint-transaction lines:
/// `date|hostname|sourceSystemID|sessionID|trnsID|subrnumb|requestIP|serviceName|funcName|serviceType|endpointServiceName|endpointStatusType|endpointStatusCode|endpointErrCode|responseTime`.
pub const ENDPOINT_FIELDS: &[Field] = &[
    Field::Date,
    Field::Hostname,
    Field::SourceSystem,
    Field::SessionId,
    Field::TrnsId,
    Field::Subrnumb,
    Field::RequestIp,
    Field::ServiceName,
    Field::FuncName,
    Field::ServiceType,
    Field::EndpointServiceName,
    Field::EndpointStatusType,
    Field::EndpointStatusCode,
    Field::EndpointErrCode,
    Field::ResponseTime,
];
