//! Deterministic audit identifier generation for datacenter audit records.
//!
//! This crate produces the human-readable, sortable business identifiers
//! stamped onto audit records, of the form `YYYYMMDD-AUD-QXX-NN`:
//! - **Date**: zero-padded calendar date of the record
//! - **Tag**: the fixed `AUD` literal
//! - **Quarter**: `Q01`..`Q04`, derived from the date's month
//! - **Sequence**: `01`..`99`, counted per (date, quarter) and wrapping
//!   back to `01` after `99`
//!
//! # Core Types
//!
//! - [`AuditIdGenerator`]: issues identifiers and owns the sequence counters
//! - [`IdRequest`]: per-call options (date, sequence override, location label)
//! - [`AuditId`]: the typed identifier; renders and strictly parses the
//!   canonical form
//! - [`Quarter`]: calendar quarter derived from a month
//! - [`SequenceKey`] / [`SequenceTable`]: the counter scope and store
//!
//! # Examples
//!
//! ```
//! use audit_id::{AuditIdGenerator, IdRequest};
//! use chrono::NaiveDate;
//!
//! let mut generator = AuditIdGenerator::new();
//! let date = NaiveDate::from_ymd_opt(2025, 7, 19).unwrap();
//!
//! // Counters are scoped per (date, quarter) and start at 01
//! let id = generator.generate(IdRequest::for_date(date));
//! assert_eq!(id.to_string(), "20250719-AUD-Q03-01");
//!
//! // An explicit sequence override replays a known value
//! let replayed = generator.generate(IdRequest::for_date(date).with_sequence(5));
//! assert_eq!(replayed.to_string(), "20250719-AUD-Q03-05");
//!
//! // The canonical form parses back losslessly
//! let parsed: audit_id::AuditId = "20250719-AUD-Q03-05".parse().unwrap();
//! assert_eq!(parsed, replayed);
//! ```
//!
//! Identifiers are unique only within one generator instance's memory:
//! see [`AuditIdGenerator`] for the cross-process caveat.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod error;
mod generator;
mod id;
mod quarter;
mod sequence;

pub use error::ParseIdError;
pub use generator::{AuditIdGenerator, IdRequest};
pub use id::{AuditId, AUDIT_TAG, MAX_SEQUENCE};
pub use quarter::Quarter;
pub use sequence::{SequenceKey, SequenceTable};
