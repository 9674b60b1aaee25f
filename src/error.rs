//! Error types for rstmap
//!
//! Absence of a report step or simulation time is never an error; lookups
//! report it as `Ok(None)` or `false`. The variants here cover records that
//! cannot be decoded the way the locator needs them, and bad configuration.

use thiserror::Error;

use crate::record::RecordType;

/// Result type alias using RstError
pub type Result<T> = std::result::Result<T, RstError>;

/// Unified error type for rstmap operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RstError {
    // -------------------------------------------------------------------------
    // Record Access Errors
    // -------------------------------------------------------------------------
    #[error("Keyword {keyword}: expected {expected} data, found {found}")]
    TypeMismatch {
        keyword: String,
        expected: RecordType,
        found: RecordType,
    },

    #[error("Keyword {keyword}: field {index} out of range (len {len})")]
    FieldOutOfRange {
        keyword: String,
        index: usize,
        len: usize,
    },

    // -------------------------------------------------------------------------
    // Date Errors
    // -------------------------------------------------------------------------
    #[error("Invalid calendar date: day={day} month={month} year={year}")]
    InvalidDate { day: i32, month: i32, year: i32 },

    // -------------------------------------------------------------------------
    // Configuration Errors
    // -------------------------------------------------------------------------
    #[error("Configuration error: {0}")]
    Config(String),
}
