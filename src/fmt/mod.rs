//! Field catalogs and the line-template engine.
//!
//! A catalog fixes which fields a log kind carries and in what pipe-delimited
//! order; a template is that catalog compiled into segments with some slots
//! bound early and the rest filled per line.

mod field;
mod format;

pub use field::{ENDPOINT_FIELDS, Field, RECORD_FIELDS, TRNS_FIELDS};
pub use format::{FieldTemplate, FieldValues, FormatSegment};
