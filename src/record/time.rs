//! Simulation time
//!
//! Restart headers store the report date as three integers. Lookups compare
//! dates as whole seconds since the Unix epoch, so two headers match only
//! on exact equality.

use std::fmt;

use chrono::{DateTime, Datelike, NaiveDate, Utc};

use crate::config::LocatorConfig;
use crate::error::{Result, RstError};

use super::Record;

/// Calendar timestamp of a restart block (seconds since epoch, UTC)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SimTime(i64);

impl SimTime {
    /// Midnight UTC of the given calendar date
    pub fn from_ymd(year: i32, month: i32, day: i32) -> Result<Self> {
        make_timestamp(day, month, year)
    }

    pub fn from_timestamp(secs: i64) -> Self {
        Self(secs)
    }

    pub fn from_date(date: NaiveDate) -> Option<Self> {
        date.and_hms_opt(0, 0, 0)
            .map(|dt| Self(dt.and_utc().timestamp()))
    }

    /// Seconds since the Unix epoch
    pub fn timestamp(&self) -> i64 {
        self.0
    }

    /// `None` if the timestamp is outside chrono's representable range
    pub fn datetime(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.0, 0)
    }

    pub fn date(&self) -> Option<NaiveDate> {
        self.datetime().map(|dt| dt.date_naive())
    }

    /// The (day, month, year) triple as stored in a header keyword
    pub fn day_month_year(&self) -> Option<(i32, i32, i32)> {
        self.date()
            .map(|d| (d.day() as i32, d.month() as i32, d.year()))
    }
}

impl fmt::Display for SimTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.datetime() {
            Some(dt) => write!(f, "{}", dt.format("%Y-%m-%d %H:%M:%S")),
            None => write!(f, "{}s", self.0),
        }
    }
}

/// Combine DAY, MONTH and YEAR into a timestamp at midnight UTC
///
/// Takes the fields in header order; [`SimTime::from_ymd`] is the public
/// constructor.
pub(crate) fn make_timestamp(day: i32, month: i32, year: i32) -> Result<SimTime> {
    let invalid = || RstError::InvalidDate { day, month, year };

    let month_u = u32::try_from(month).map_err(|_| invalid())?;
    let day_u = u32::try_from(day).map_err(|_| invalid())?;

    NaiveDate::from_ymd_opt(year, month_u, day_u)
        .and_then(SimTime::from_date)
        .ok_or_else(invalid)
}

/// Read the date fields configured in `config` from a header record
pub fn decode_date(record: &Record, config: &LocatorConfig) -> Result<SimTime> {
    make_timestamp(
        record.int_at(config.day_index)?,
        record.int_at(config.month_index)?,
        record.int_at(config.year_index)?,
    )
}
