//! Locator Module
//!
//! Finds restart blocks by report step, simulation time or raw position.
//!
//! ## Block Structure
//! A restart file is a flat keyword stream. Each block starts at a
//! `SEQNUM` keyword and runs up to the next one; the `INTEHEAD` right
//! after `SEQNUM` carries the block date.
//!
//! ```text
//!  0 | SEQNUM   [0]           \  A
//!  1 | INTEHEAD [01.01.2005]  |
//!  2 | PRESSURE [...]         |
//!  3 | SWAT     [...]         |
//!    |------------------------+
//!  4 | SEQNUM   [5]           |  B
//!  5 | INTEHEAD [01.06.2005]  |
//!  6 | PRESSURE [...]         |
//!  7 | SWAT     [...]         /
//! ```
//!
//! ## Coordinates
//! - report step: the value of `SEQNUM` (sparse, e.g. 0, 5, 10, 20, 40)
//! - simulation time: the date decoded from `INTEHEAD`
//! - occurrence: the rank of a block's `SEQNUM` among all `SEQNUM`s
//! - raw index: the position of a record in the stream
//!
//! ## Ordering Contract
//! Time lookups walk the date headers in order and stop as soon as they
//! pass the target, so `INTEHEAD` dates must be non-decreasing. This holds
//! for restart files written by a simulator; use
//! [`BlockLocator::validate`] to check a file from elsewhere.

mod spans;
mod validate;

use std::ops::Range;

pub use spans::BlockSpans;
pub use validate::Diagnostic;

use crate::catalog::{BlockMap, RecordCatalog};
use crate::config::LocatorConfig;
use crate::error::Result;
use crate::record::{decode_date, Scalar, SimTime};

/// Any of the coordinates a block can be addressed by
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKey {
    /// Value of the block-opening keyword
    ReportStep(i32),
    /// Exact date of the block
    SimTime(SimTime),
    /// Rank of the block among all blocks
    Occurrence(usize),
    /// Raw position of any record inside the block
    RawIndex(usize),
}

/// One block with all of its coordinates resolved
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockSummary {
    pub occurrence: usize,
    pub report_step: i32,
    /// `None` if the block has no date header at its occurrence
    pub sim_time: Option<SimTime>,
    /// Raw span within the located catalog
    pub span: Range<usize>,
}

/// Block index over a record catalog
///
/// Every lookup is a read over the borrowed catalog; a locator can be
/// shared between threads whenever the catalog can.
pub struct BlockLocator<'a, C: RecordCatalog + ?Sized> {
    catalog: &'a C,
    config: LocatorConfig,
    spans: BlockSpans,
}

impl<'a, C: RecordCatalog + ?Sized> BlockLocator<'a, C> {
    /// Open a locator with ECLIPSE keyword names
    pub fn new(catalog: &'a C) -> Self {
        Self::open(catalog, LocatorConfig::default())
    }

    /// Open a locator with custom keyword names or date layout
    ///
    /// With `validate_on_open` set, each finding of [`validate`](Self::validate)
    /// is logged at WARN level; findings never fail the open.
    pub fn with_config(catalog: &'a C, config: LocatorConfig) -> Result<Self> {
        config.validate()?;
        let locator = Self::open(catalog, config);

        if locator.config.validate_on_open {
            for diagnostic in locator.validate() {
                tracing::warn!("Restart structure: {}", diagnostic);
            }
        }

        Ok(locator)
    }

    fn open(catalog: &'a C, config: LocatorConfig) -> Self {
        let spans = BlockSpans::build(
            catalog.occurrence_list(&config.step_keyword),
            catalog.len(),
        );

        tracing::debug!(
            "Block locator opened: {} records, {} {} blocks, {} {} headers",
            catalog.len(),
            spans.len(),
            config.step_keyword,
            catalog.count_by_name(&config.date_keyword),
            config.date_keyword
        );

        Self {
            catalog,
            config,
            spans,
        }
    }

    // =========================================================================
    // Report Step Lookups
    // =========================================================================

    /// Whether any block-opening keyword carries `report_step`
    pub fn has_report_step(&self, report_step: i32) -> bool {
        self.find_report_step(report_step).is_some()
    }

    /// Raw position of the block-opening keyword carrying `report_step`
    pub fn find_report_step(&self, report_step: i32) -> Option<usize> {
        self.catalog
            .find_by_name_and_value(&self.config.step_keyword, &Scalar::Int(report_step))
    }

    pub fn block_map_by_report_step(&self, report_step: i32) -> Option<BlockMap<'a>> {
        let step_keyword = &self.config.step_keyword;
        let raw_index = self.find_report_step(report_step)?;
        let occurrence = self.catalog.occurrence_of(raw_index, step_keyword)?;
        self.block_map_by_occurrence(occurrence)
    }

    /// Report step of block `occurrence`
    pub fn report_step_at(&self, occurrence: usize) -> Result<Option<i32>> {
        match self.catalog.named_record(&self.config.step_keyword, occurrence) {
            Some(record) => record.int_at(0).map(Some),
            None => Ok(None),
        }
    }

    /// Report steps of all blocks, in file order
    pub fn report_steps(&self) -> Result<Vec<i32>> {
        (0..self.spans.len())
            .filter_map(|occurrence| self.report_step_at(occurrence).transpose())
            .collect()
    }

    // =========================================================================
    // Simulation Time Lookups
    // =========================================================================

    /// Raw position of the first date header equal to `sim_time`
    ///
    /// Scans every header; unlike [`restart_index_for_time`](Self::restart_index_for_time)
    /// this makes no ordering assumption.
    pub fn find_sim_time(&self, sim_time: SimTime) -> Result<Option<usize>> {
        let date_keyword = &self.config.date_keyword;
        if !self.catalog.has_name(date_keyword) {
            tracing::trace!("No {} headers, {} not present", date_keyword, sim_time);
            return Ok(None);
        }

        for &raw_index in self.catalog.occurrence_list(date_keyword) {
            let Some(record) = self.catalog.record_at(raw_index) else {
                continue;
            };
            if decode_date(record, &self.config)? == sim_time {
                return Ok(Some(raw_index));
            }
        }

        Ok(None)
    }

    pub fn has_sim_time(&self, sim_time: SimTime) -> Result<bool> {
        Ok(self.find_sim_time(sim_time)?.is_some())
    }

    /// Occurrence of the date header equal to `sim_time`
    ///
    /// Walks the headers from the first and gives up at the first one later
    /// than `sim_time`; dates must be non-decreasing. Returns `None` when the
    /// stream has no date headers at all.
    pub fn restart_index_for_time(&self, sim_time: SimTime) -> Result<Option<usize>> {
        let count = self.catalog.count_by_name(&self.config.date_keyword);
        if count == 0 {
            tracing::trace!("No {} headers, not a restart stream", self.config.date_keyword);
            return Ok(None);
        }

        for occurrence in 0..count {
            let Some(header_time) = self.date_at_occurrence(occurrence)? else {
                break;
            };
            if header_time == sim_time {
                return Ok(Some(occurrence));
            }
            if header_time > sim_time {
                tracing::trace!(
                    "Passed {} at header {} ({}), not present",
                    sim_time,
                    occurrence,
                    header_time
                );
                return Ok(None);
            }
        }

        Ok(None)
    }

    /// Date of header `occurrence`, `None` past the last header
    pub fn date_at_occurrence(&self, occurrence: usize) -> Result<Option<SimTime>> {
        match self.catalog.named_record(&self.config.date_keyword, occurrence) {
            Some(record) => decode_date(record, &self.config).map(Some),
            None => Ok(None),
        }
    }

    /// Dates of all headers, in file order
    pub fn sim_times(&self) -> Result<Vec<SimTime>> {
        let count = self.catalog.count_by_name(&self.config.date_keyword);
        (0..count)
            .filter_map(|occurrence| self.date_at_occurrence(occurrence).transpose())
            .collect()
    }

    pub fn block_map_by_time(&self, sim_time: SimTime) -> Result<Option<BlockMap<'a>>> {
        Ok(self
            .restart_index_for_time(sim_time)?
            .and_then(|occurrence| self.block_map_by_occurrence(occurrence)))
    }

    // =========================================================================
    // Positional Lookups
    // =========================================================================

    /// View over block `occurrence`
    pub fn block_map_by_occurrence(&self, occurrence: usize) -> Option<BlockMap<'a>> {
        let span = self.spans.get(occurrence)?;
        self.catalog.view(span)
    }

    /// Occurrence of the block containing raw position `raw_index`
    pub fn block_of(&self, raw_index: usize) -> Option<usize> {
        self.spans.containing(raw_index)
    }

    /// View over the block addressed by `key`
    pub fn block_map(&self, key: BlockKey) -> Result<Option<BlockMap<'a>>> {
        match key {
            BlockKey::ReportStep(report_step) => Ok(self.block_map_by_report_step(report_step)),
            BlockKey::SimTime(sim_time) => self.block_map_by_time(sim_time),
            BlockKey::Occurrence(occurrence) => Ok(self.block_map_by_occurrence(occurrence)),
            BlockKey::RawIndex(raw_index) => Ok(self
                .block_of(raw_index)
                .and_then(|occurrence| self.block_map_by_occurrence(occurrence))),
        }
    }

    // =========================================================================
    // Inspection
    // =========================================================================

    /// Every block with its report step, date and span
    pub fn blocks(&self) -> Result<Vec<BlockSummary>> {
        let mut blocks = Vec::with_capacity(self.spans.len());
        for (occurrence, span) in self.spans.iter().enumerate() {
            let Some(report_step) = self.report_step_at(occurrence)? else {
                continue;
            };
            blocks.push(BlockSummary {
                occurrence,
                report_step,
                sim_time: self.date_at_occurrence(occurrence)?,
                span: span.clone(),
            });
        }
        Ok(blocks)
    }

    /// Check the block/date pairing and date order this locator relies on
    ///
    /// Never fails; an undecodable date header is reported as a finding.
    pub fn validate(&self) -> Vec<Diagnostic> {
        validate::run(self.catalog, &self.config)
    }

    /// Number of blocks
    pub fn block_count(&self) -> usize {
        self.spans.len()
    }

    pub fn spans(&self) -> &BlockSpans {
        &self.spans
    }

    pub fn catalog(&self) -> &'a C {
        self.catalog
    }

    pub fn config(&self) -> &LocatorConfig {
        &self.config
    }
}
