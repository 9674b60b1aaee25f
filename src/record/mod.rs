//! Record Module
//!
//! A record (keyword) is one named, typed payload from a parsed restart
//! file. This module gives positional access to its fields and turns the
//! DAY/MONTH/YEAR fields of a header keyword into a [`SimTime`].
//!
//! ## Responsibilities
//! - Typed payloads with a fixed logical type per record
//! - Integer field decode with type and bounds checks
//! - Single-value equality for value lookups (`SEQNUM == 10`)
//! - Calendar date to timestamp conversion

mod keyword;
mod time;

pub use keyword::{Record, RecordData, RecordType, Scalar};
pub use time::{decode_date, SimTime};
