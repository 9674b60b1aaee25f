//! Shared fixtures for rstmap tests
//!
//! Builds restart-shaped record streams:
//! SEQNUM, INTEHEAD, PRESSURE, SWAT per block.

#![allow(dead_code)]

use std::io;
use std::sync::{Arc, Mutex};

use rstmap::config::{INTEHEAD_DAY_INDEX, INTEHEAD_MONTH_INDEX, INTEHEAD_YEAR_INDEX};
use rstmap::{Record, RecordFile, SimTime};
use tracing_subscriber::EnvFilter;

/// Length of a synthetic INTEHEAD keyword (must exceed the year field)
pub const INTEHEAD_LEN: usize = 95;

/// Report steps of the reference file
pub const REFERENCE_STEPS: [i32; 5] = [0, 5, 10, 20, 40];

/// Dates (year, month, day) of the reference file
pub const REFERENCE_DATES: [(i32, i32, i32); 5] = [
    (2005, 1, 1),
    (2005, 6, 1),
    (2006, 12, 1),
    (2007, 12, 1),
    (2009, 12, 1),
];

/// Raw positions of the SEQNUM keywords in the reference file
pub const REFERENCE_STARTS: [usize; 5] = [0, 4, 8, 12, 17];

/// Total record count of the reference file
pub const REFERENCE_LEN: usize = 21;

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Run `f` under a subscriber that keeps WARN and above in memory
///
/// Returns the result of `f` together with the formatted log lines.
pub fn capture_warnings<T>(f: impl FnOnce() -> T) -> (T, String) {
    let buffer = Arc::new(Mutex::new(Vec::new()));
    let writer = {
        let buffer = Arc::clone(&buffer);
        move || LogBuffer(Arc::clone(&buffer))
    };
    let subscriber = tracing_subscriber::fmt()
        .with_writer(writer)
        .with_ansi(false)
        .with_max_level(tracing::Level::WARN)
        .finish();

    let result = tracing::subscriber::with_default(subscriber, f);
    let logs = String::from_utf8_lossy(&buffer.lock().unwrap()).into_owned();
    (result, logs)
}

struct LogBuffer(Arc<Mutex<Vec<u8>>>);

impl io::Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

pub fn date(year: i32, month: i32, day: i32) -> SimTime {
    SimTime::from_ymd(year, month, day).unwrap()
}

pub fn seqnum(report_step: i32) -> Record {
    Record::int("SEQNUM", vec![report_step])
}

/// INTEHEAD with DAY/MONTH/YEAR at the standard positions
pub fn intehead(year: i32, month: i32, day: i32) -> Record {
    let mut values = vec![0; INTEHEAD_LEN];
    values[INTEHEAD_DAY_INDEX] = day;
    values[INTEHEAD_MONTH_INDEX] = month;
    values[INTEHEAD_YEAR_INDEX] = year;
    Record::int("INTEHEAD", values)
}

pub fn pressure() -> Record {
    Record::float("PRESSURE", vec![250.0; 8])
}

pub fn swat() -> Record {
    Record::float("SWAT", vec![0.2; 8])
}

/// Push one standard block (SEQNUM, INTEHEAD, PRESSURE, SWAT)
pub fn push_block(file: &mut RecordFile, report_step: i32, (year, month, day): (i32, i32, i32)) {
    file.push(seqnum(report_step));
    file.push(intehead(year, month, day));
    file.push(pressure());
    file.push(swat());
}

/// A restart file with one standard block per entry
pub fn restart_file(blocks: &[(i32, (i32, i32, i32))]) -> RecordFile {
    let mut file = RecordFile::new();
    for &(report_step, ymd) in blocks {
        push_block(&mut file, report_step, ymd);
    }
    file
}

/// The five-block reference file:
///
/// ```text
///  0 SEQNUM [0]   2005-01-01  A
///  4 SEQNUM [5]   2005-06-01  B
///  8 SEQNUM [10]  2006-12-01  C
/// 12 SEQNUM [20]  2007-12-01  D (extra OIL_DEN at 16)
/// 17 SEQNUM [40]  2009-12-01  E
/// ```
pub fn reference_file() -> RecordFile {
    let mut file = RecordFile::new();
    for (i, (&step, &ymd)) in REFERENCE_STEPS.iter().zip(REFERENCE_DATES.iter()).enumerate() {
        push_block(&mut file, step, ymd);
        if i == 3 {
            file.push(Record::float("OIL_DEN", vec![800.0; 8]));
        }
    }
    file
}
