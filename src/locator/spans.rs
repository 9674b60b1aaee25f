//! Block spans
//!
//! Occurrence index of the block-opening keyword → raw span of the block.
//! Built once from the keyword's occurrence list so that block lookups
//! never recount occurrences.

use std::ops::Range;

/// Arena of block spans, indexed by block occurrence
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BlockSpans {
    spans: Vec<Range<usize>>,
}

impl BlockSpans {
    /// `starts` are the ascending raw positions of the block-opening
    /// keyword; `len` is the length of the stream they index into
    pub fn build(starts: &[usize], len: usize) -> Self {
        let spans = starts
            .iter()
            .enumerate()
            .map(|(occurrence, &start)| {
                let end = starts.get(occurrence + 1).copied().unwrap_or(len);
                start..end
            })
            .collect();
        Self { spans }
    }

    pub fn get(&self, occurrence: usize) -> Option<Range<usize>> {
        self.spans.get(occurrence).cloned()
    }

    /// Occurrence of the block containing `raw_index`.
    /// Records before the first block belong to none.
    pub fn containing(&self, raw_index: usize) -> Option<usize> {
        let after = self.spans.partition_point(|span| span.start <= raw_index);
        let occurrence = after.checked_sub(1)?;
        self.spans[occurrence]
            .contains(&raw_index)
            .then_some(occurrence)
    }

    /// Number of blocks
    pub fn len(&self) -> usize {
        self.spans.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Range<usize>> {
        self.spans.iter()
    }
}
