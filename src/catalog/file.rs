//! Record file
//!
//! Owns every record of one parsed file together with its name index.

use std::ops::Range;

use crate::record::Record;

use super::{BlockMap, NameIndex, RecordCatalog};

/// All records of one file, in file order
#[derive(Debug, Clone, Default)]
pub struct RecordFile {
    records: Vec<Record>,
    index: NameIndex,
}

impl RecordFile {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            records: Vec::with_capacity(capacity),
            index: NameIndex::new(),
        }
    }

    /// Append a record and return its raw position
    pub fn push(&mut self, record: Record) -> usize {
        let raw_index = self.records.len();
        self.index.insert(record.name(), raw_index);
        self.records.push(record);
        raw_index
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    /// Distinct keyword names in order of first appearance
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.index.names()
    }

    /// View over the whole file
    pub fn as_map(&self) -> BlockMap<'_> {
        BlockMap::with_index(&self.records, 0, &self.index)
    }
}

impl RecordCatalog for RecordFile {
    fn len(&self) -> usize {
        self.records.len()
    }

    fn offset(&self) -> usize {
        0
    }

    fn record_at(&self, raw_index: usize) -> Option<&Record> {
        self.records.get(raw_index)
    }

    fn occurrence_list(&self, name: &str) -> &[usize] {
        self.index.positions(name)
    }

    fn view(&self, span: Range<usize>) -> Option<BlockMap<'_>> {
        if span == (0..self.records.len()) {
            return Some(self.as_map());
        }
        let records = self.records.get(span.clone())?;
        Some(BlockMap::new(records, span.start))
    }
}

impl FromIterator<Record> for RecordFile {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        let mut file = Self::new();
        file.extend(iter);
        file
    }
}

impl Extend<Record> for RecordFile {
    fn extend<I: IntoIterator<Item = Record>>(&mut self, iter: I) {
        for record in iter {
            self.push(record);
        }
    }
}

impl<'a> IntoIterator for &'a RecordFile {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
