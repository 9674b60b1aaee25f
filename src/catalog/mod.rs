//! Catalog Module
//!
//! Ordered record streams with a name → occurrence index.
//!
//! ## Responsibilities
//! - Hold the records of one parsed file in original order
//! - Map each keyword name to the raw positions where it occurs
//! - Value lookups and occurrence ↔ raw position conversion
//! - Cut read-only views ("block maps") out of a stream
//!
//! ## Addressing
//! ```text
//!  raw | name      occurrence
//!  ----+---------------------
//!    0 | SEQNUM    SEQNUM#0
//!    1 | INTEHEAD  INTEHEAD#0
//!    2 | PRESSURE  PRESSURE#0
//!    3 | SEQNUM    SEQNUM#1
//!    4 | INTEHEAD  INTEHEAD#1
//!    5 | PRESSURE  PRESSURE#1
//! ```
//! Raw positions are local to the catalog they are asked of; a
//! [`BlockMap`] numbers its records from 0 and reports its own
//! [`offset`](RecordCatalog::offset) into the file.

mod block_map;
mod file;
mod index;

use std::ops::Range;

pub use block_map::BlockMap;
pub use file::RecordFile;
pub use index::NameIndex;

use crate::record::{Record, Scalar};

/// Read access to an ordered, immutable record stream
pub trait RecordCatalog {
    /// Number of records
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// File position of local raw index 0
    fn offset(&self) -> usize;

    fn record_at(&self, raw_index: usize) -> Option<&Record>;

    /// Raw positions of every record named `name`, ascending.
    /// Empty if the name does not occur.
    fn occurrence_list(&self, name: &str) -> &[usize];

    /// Read-only view over `span`; `None` if the span is out of bounds
    fn view(&self, span: Range<usize>) -> Option<BlockMap<'_>>;

    fn count_by_name(&self, name: &str) -> usize {
        self.occurrence_list(name).len()
    }

    fn has_name(&self, name: &str) -> bool {
        !self.occurrence_list(name).is_empty()
    }

    /// The `occurrence`-th record named `name`
    fn named_record(&self, name: &str, occurrence: usize) -> Option<&Record> {
        let raw_index = *self.occurrence_list(name).get(occurrence)?;
        self.record_at(raw_index)
    }

    /// Raw position of the first record named `name` whose payload is
    /// exactly `value`
    fn find_by_name_and_value(&self, name: &str, value: &Scalar) -> Option<usize> {
        self.occurrence_list(name)
            .iter()
            .copied()
            .find(|&raw_index| {
                self.record_at(raw_index)
                    .is_some_and(|record| record.is_scalar(value))
            })
    }

    /// Occurrence of the record at `raw_index` among records named `name`
    fn occurrence_of(&self, raw_index: usize, name: &str) -> Option<usize> {
        let record = self.record_at(raw_index)?;
        if record.name() != name {
            return None;
        }
        self.occurrence_list(name).binary_search(&raw_index).ok()
    }

    /// View from the `occurrence`-th `name` record up to (excluding) the
    /// next record of the same name, or the end of the catalog
    fn extract_block(&self, name: &str, occurrence: usize) -> Option<BlockMap<'_>> {
        let positions = self.occurrence_list(name);
        let start = *positions.get(occurrence)?;
        let end = positions
            .get(occurrence + 1)
            .copied()
            .unwrap_or_else(|| self.len());
        self.view(start..end)
    }
}
