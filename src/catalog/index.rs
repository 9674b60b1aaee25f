//! Name index
//!
//! Keyword name → ascending raw positions.

use std::collections::HashMap;

/// Name → occurrence list for one record stream
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NameIndex {
    positions: HashMap<String, Vec<usize>>,
    /// Distinct names in order of first appearance
    order: Vec<String>,
}

impl NameIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Index a stream of names; position `i` is the `i`-th name
    pub fn build<'a>(names: impl IntoIterator<Item = &'a str>) -> Self {
        let mut index = Self::new();
        for (raw_index, name) in names.into_iter().enumerate() {
            index.insert(name, raw_index);
        }
        index
    }

    /// Append `raw_index` to the occurrence list of `name`.
    /// Positions must be inserted in ascending order.
    pub fn insert(&mut self, name: &str, raw_index: usize) {
        match self.positions.get_mut(name) {
            Some(list) => {
                debug_assert!(list.last().map_or(true, |&last| last < raw_index));
                list.push(raw_index);
            }
            None => {
                self.positions.insert(name.to_string(), vec![raw_index]);
                self.order.push(name.to_string());
            }
        }
    }

    pub fn positions(&self, name: &str) -> &[usize] {
        self.positions.get(name).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    /// Number of distinct names
    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}
