//! Block map
//!
//! A borrowed, read-only window over a contiguous run of records. Answers
//! the same name-based queries as the file it was cut from, numbering its
//! records from 0.
//!
//! Opening a view costs nothing beyond the slice: its name index is built
//! on the first name query, or borrowed when the view is the whole file.

use std::ops::Range;
use std::sync::OnceLock;

use crate::record::Record;

use super::{NameIndex, RecordCatalog};

/// Read-only view over a span of a record stream
#[derive(Debug, Clone)]
pub struct BlockMap<'a> {
    records: &'a [Record],
    /// File position of `records[0]`
    start: usize,
    index: ViewIndex<'a>,
}

#[derive(Debug, Clone)]
enum ViewIndex<'a> {
    /// Index of the owning file, valid because the view starts at 0
    Shared(&'a NameIndex),
    Lazy(OnceLock<NameIndex>),
}

impl<'a> BlockMap<'a> {
    pub(crate) fn new(records: &'a [Record], start: usize) -> Self {
        Self {
            records,
            start,
            index: ViewIndex::Lazy(OnceLock::new()),
        }
    }

    /// View whose local positions match `index` one-to-one
    pub(crate) fn with_index(records: &'a [Record], start: usize, index: &'a NameIndex) -> Self {
        Self {
            records,
            start,
            index: ViewIndex::Shared(index),
        }
    }

    fn index(&self) -> &NameIndex {
        match &self.index {
            ViewIndex::Shared(index) => *index,
            ViewIndex::Lazy(cell) => {
                cell.get_or_init(|| NameIndex::build(self.records.iter().map(Record::name)))
            }
        }
    }

    /// File position of the first record
    pub fn start(&self) -> usize {
        self.start
    }

    /// File position one past the last record
    pub fn end(&self) -> usize {
        self.start + self.records.len()
    }

    pub fn span(&self) -> Range<usize> {
        self.start..self.end()
    }

    pub fn records(&self) -> &'a [Record] {
        self.records
    }

    pub fn first(&self) -> Option<&'a Record> {
        self.records.first()
    }

    /// File position of local record `raw_index`
    pub fn global_index(&self, raw_index: usize) -> Option<usize> {
        (raw_index < self.records.len()).then(|| self.start + raw_index)
    }

    pub fn iter(&self) -> std::slice::Iter<'a, Record> {
        self.records.iter()
    }

    /// Distinct keyword names in order of first appearance
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.index().names()
    }
}

impl RecordCatalog for BlockMap<'_> {
    fn len(&self) -> usize {
        self.records.len()
    }

    fn offset(&self) -> usize {
        self.start
    }

    fn record_at(&self, raw_index: usize) -> Option<&Record> {
        self.records.get(raw_index)
    }

    fn occurrence_list(&self, name: &str) -> &[usize] {
        self.index().positions(name)
    }

    fn view(&self, span: Range<usize>) -> Option<BlockMap<'_>> {
        let records = self.records.get(span.clone())?;
        Some(BlockMap::new(records, self.start + span.start))
    }
}

impl<'a> IntoIterator for &BlockMap<'a> {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
