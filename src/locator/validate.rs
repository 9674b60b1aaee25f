//! Structural checks
//!
//! Lookups assume the n-th date keyword belongs to the n-th block and that
//! dates never decrease. Neither is verified on the query path; this pass
//! reports where a file breaks them.

use std::fmt;

use crate::catalog::RecordCatalog;
use crate::config::LocatorConfig;
use crate::error::RstError;
use crate::record::{decode_date, SimTime};

/// A structural irregularity found in a restart stream
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// Records precede the first block keyword
    LeadingRecords { count: usize },

    /// Block and date keywords do not pair up one-to-one
    DateCountMismatch { steps: usize, dates: usize },

    /// The date keyword with the block's occurrence does not directly
    /// follow the block keyword
    MisplacedDate {
        occurrence: usize,
        step_index: usize,
        date_index: Option<usize>,
    },

    /// A date header whose DAY/MONTH/YEAR cannot be decoded
    UndecodableDate { occurrence: usize, error: RstError },

    /// A date is earlier than the one before it
    DatesOutOfOrder {
        occurrence: usize,
        previous: SimTime,
        current: SimTime,
    },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::LeadingRecords { count } => {
                write!(f, "{} record(s) before the first block", count)
            }
            Diagnostic::DateCountMismatch { steps, dates } => {
                write!(f, "{} block(s) but {} date header(s)", steps, dates)
            }
            Diagnostic::MisplacedDate {
                occurrence,
                step_index,
                date_index: Some(date_index),
            } => write!(
                f,
                "block {} opens at {} but its date header is at {}",
                occurrence, step_index, date_index
            ),
            Diagnostic::MisplacedDate {
                occurrence,
                step_index,
                date_index: None,
            } => write!(
                f,
                "block {} opens at {} and has no date header",
                occurrence, step_index
            ),
            Diagnostic::UndecodableDate { occurrence, error } => {
                write!(f, "date header {} cannot be decoded: {}", occurrence, error)
            }
            Diagnostic::DatesOutOfOrder {
                occurrence,
                previous,
                current,
            } => write!(
                f,
                "date header {} ({}) is earlier than its predecessor ({})",
                occurrence, current, previous
            ),
        }
    }
}

pub(crate) fn run<C: RecordCatalog + ?Sized>(
    catalog: &C,
    config: &LocatorConfig,
) -> Vec<Diagnostic> {
    let steps = catalog.occurrence_list(&config.step_keyword);
    let dates = catalog.occurrence_list(&config.date_keyword);
    let mut diagnostics = Vec::new();

    if let Some(&first) = steps.first() {
        if first > 0 {
            diagnostics.push(Diagnostic::LeadingRecords { count: first });
        }
    }

    if steps.len() != dates.len() {
        diagnostics.push(Diagnostic::DateCountMismatch {
            steps: steps.len(),
            dates: dates.len(),
        });
    }

    for (occurrence, &step_index) in steps.iter().enumerate() {
        let date_index = dates.get(occurrence).copied();
        if date_index != Some(step_index + 1) {
            diagnostics.push(Diagnostic::MisplacedDate {
                occurrence,
                step_index,
                date_index,
            });
        }
    }

    let mut previous: Option<SimTime> = None;
    for (occurrence, &raw_index) in dates.iter().enumerate() {
        let Some(record) = catalog.record_at(raw_index) else {
            continue;
        };
        // An undecodable header restarts the order check
        let current = match decode_date(record, config) {
            Ok(current) => current,
            Err(error) => {
                diagnostics.push(Diagnostic::UndecodableDate { occurrence, error });
                previous = None;
                continue;
            }
        };
        if let Some(previous) = previous.filter(|&previous| current < previous) {
            diagnostics.push(Diagnostic::DatesOutOfOrder {
                occurrence,
                previous,
                current,
            });
        }
        previous = Some(current);
    }

    diagnostics
}
