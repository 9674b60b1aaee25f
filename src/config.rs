//! Configuration for the block locator
//!
//! Names the keyword that opens each block, the keyword carrying the
//! simulation date, and where in that keyword the date fields live.
//! Defaults match ECLIPSE unified restart files.

use crate::error::{Result, RstError};

/// Keyword opening every restart block; its single value is the report step.
pub const SEQNUM_KW: &str = "SEQNUM";

/// Integer header keyword following `SEQNUM`; carries the simulation date.
pub const INTEHEAD_KW: &str = "INTEHEAD";

pub const INTEHEAD_DAY_INDEX: usize = 64;
pub const INTEHEAD_MONTH_INDEX: usize = 65;
pub const INTEHEAD_YEAR_INDEX: usize = 66;

/// Configuration for a [`BlockLocator`](crate::BlockLocator)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocatorConfig {
    // -------------------------------------------------------------------------
    // Keyword Names
    // -------------------------------------------------------------------------
    /// Keyword whose occurrences open blocks (value = report step)
    pub step_keyword: String,

    /// Keyword carrying the DAY/MONTH/YEAR of the block
    pub date_keyword: String,

    // -------------------------------------------------------------------------
    // Date Field Layout
    // -------------------------------------------------------------------------
    /// Integer field holding the day of month
    pub day_index: usize,

    /// Integer field holding the month (1-12)
    pub month_index: usize,

    /// Integer field holding the year
    pub year_index: usize,

    // -------------------------------------------------------------------------
    // Diagnostics
    // -------------------------------------------------------------------------
    /// Run the structural validation pass when a locator is opened and log
    /// every finding at WARN level
    pub validate_on_open: bool,
}

impl Default for LocatorConfig {
    fn default() -> Self {
        Self {
            step_keyword: SEQNUM_KW.to_string(),
            date_keyword: INTEHEAD_KW.to_string(),
            day_index: INTEHEAD_DAY_INDEX,
            month_index: INTEHEAD_MONTH_INDEX,
            year_index: INTEHEAD_YEAR_INDEX,
            validate_on_open: false,
        }
    }
}

impl LocatorConfig {
    /// Create a new config builder
    pub fn builder() -> LocatorConfigBuilder {
        LocatorConfigBuilder::default()
    }

    /// Check that the configuration can describe a block structure
    pub fn validate(&self) -> Result<()> {
        if self.step_keyword.is_empty() || self.date_keyword.is_empty() {
            return Err(RstError::Config("keyword names must not be empty".to_string()));
        }
        if self.step_keyword == self.date_keyword {
            return Err(RstError::Config(format!(
                "step and date keyword are both {}",
                self.step_keyword
            )));
        }
        if self.day_index == self.month_index
            || self.day_index == self.year_index
            || self.month_index == self.year_index
        {
            return Err(RstError::Config(format!(
                "date fields overlap: day={} month={} year={}",
                self.day_index, self.month_index, self.year_index
            )));
        }
        Ok(())
    }
}

/// Builder for LocatorConfig
#[derive(Default)]
pub struct LocatorConfigBuilder {
    config: LocatorConfig,
}

impl LocatorConfigBuilder {
    /// Set the keyword that opens each block
    pub fn step_keyword(mut self, name: impl Into<String>) -> Self {
        self.config.step_keyword = name.into();
        self
    }

    /// Set the keyword carrying the block date
    pub fn date_keyword(mut self, name: impl Into<String>) -> Self {
        self.config.date_keyword = name.into();
        self
    }

    /// Set the positions of the DAY, MONTH and YEAR fields
    pub fn date_fields(mut self, day: usize, month: usize, year: usize) -> Self {
        self.config.day_index = day;
        self.config.month_index = month;
        self.config.year_index = year;
        self
    }

    /// Enable or disable validation when a locator is opened
    pub fn validate_on_open(mut self, enabled: bool) -> Self {
        self.config.validate_on_open = enabled;
        self
    }

    pub fn build(self) -> LocatorConfig {
        self.config
    }
}
