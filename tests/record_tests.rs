//! Tests for records, dates and configuration
//!
//! These tests verify:
//! - Integer field decode with type and bounds checks
//! - Single-value equality used by value lookups
//! - Calendar date ↔ timestamp conversion
//! - Config defaults, builder and validation

mod common;

use common::{date, intehead};
use rstmap::record::{decode_date, RecordType};
use rstmap::{LocatorConfig, Record, RecordData, RstError, Scalar, SimTime};

// =============================================================================
// Field Access Tests
// =============================================================================

#[test]
fn test_int_at_reads_field() {
    let record = Record::int("SEQNUM", vec![42]);

    assert_eq!(record.int_at(0).unwrap(), 42);
    assert_eq!(record.len(), 1);
    assert_eq!(record.record_type(), RecordType::Int);
}

#[test]
fn test_int_at_out_of_range() {
    let record = Record::int("SEQNUM", vec![42]);

    let err = record.int_at(3).unwrap_err();
    assert_eq!(
        err,
        RstError::FieldOutOfRange {
            keyword: "SEQNUM".to_string(),
            index: 3,
            len: 1,
        }
    );
}

#[test]
fn test_int_at_wrong_type() {
    let record = Record::double("TIME", vec![1.5]);

    match record.int_at(0) {
        Err(RstError::TypeMismatch {
            keyword,
            expected,
            found,
        }) => {
            assert_eq!(keyword, "TIME");
            assert_eq!(expected, RecordType::Int);
            assert_eq!(found, RecordType::Double);
        }
        other => panic!("Expected TypeMismatch, got {:?}", other),
    }
}

#[test]
fn test_record_type_tags() {
    assert_eq!(RecordType::Int.to_string(), "INTE");
    assert_eq!(RecordType::Float.to_string(), "REAL");
    assert_eq!(RecordType::Double.to_string(), "DOUB");
    assert_eq!(RecordType::Logical.to_string(), "LOGI");
    assert_eq!(RecordType::Char.to_string(), "CHAR");
}

#[test]
fn test_empty_record() {
    let record = Record::new("ENDSOL", RecordData::Int(vec![]));

    assert!(record.is_empty());
    assert!(matches!(record.int_at(0), Err(RstError::FieldOutOfRange { len: 0, .. })));
}

// =============================================================================
// Scalar Equality Tests
// =============================================================================

#[test]
fn test_is_scalar_matches_single_value() {
    assert!(Record::int("SEQNUM", vec![10]).is_scalar(&Scalar::Int(10)));
    assert!(!Record::int("SEQNUM", vec![10]).is_scalar(&Scalar::Int(11)));
    assert!(Record::logical("FLAG", vec![true]).is_scalar(&true.into()));
    assert!(Record::chars("NAME", ["PROD1"]).is_scalar(&"PROD1".into()));
    assert!(Record::double("TIME", vec![2.5]).is_scalar(&2.5f64.into()));
}

#[test]
fn test_is_scalar_rejects_multi_value_records() {
    let record = Record::int("ITIME", vec![10, 10]);
    assert!(!record.is_scalar(&Scalar::Int(10)));
}

#[test]
fn test_is_scalar_rejects_other_types() {
    let record = Record::float("SEQNUM", vec![10.0]);
    assert!(!record.is_scalar(&Scalar::Int(10)));
}

// =============================================================================
// Date Tests
// =============================================================================

#[test]
fn test_from_ymd_midnight_utc() {
    let epoch = SimTime::from_ymd(1970, 1, 1).unwrap();
    assert_eq!(epoch.timestamp(), 0);

    let next_day = SimTime::from_ymd(1970, 1, 2).unwrap();
    assert_eq!(next_day.timestamp(), 86_400);
}

#[test]
fn test_from_ymd_rejects_impossible_dates() {
    assert_eq!(
        SimTime::from_ymd(2005, 2, 30),
        Err(RstError::InvalidDate {
            day: 30,
            month: 2,
            year: 2005
        })
    );
    assert!(SimTime::from_ymd(2005, 13, 1).is_err());
    assert!(SimTime::from_ymd(2005, 1, -1).is_err());
    assert!(SimTime::from_ymd(0, 0, 0).is_err());
}

#[test]
fn test_from_ymd_takes_year_first() {
    let time = SimTime::from_ymd(2005, 6, 1).unwrap();

    assert_eq!(time.day_month_year(), Some((1, 6, 2005)));
    assert_eq!(time.to_string(), "2005-06-01 00:00:00");
    assert_eq!(time, decode_date(&intehead(2005, 6, 1), &LocatorConfig::default()).unwrap());
}

#[test]
fn test_leap_day() {
    assert!(SimTime::from_ymd(2008, 2, 29).is_ok());
    assert!(SimTime::from_ymd(2007, 2, 29).is_err());
}

#[test]
fn test_day_month_year_round_trip() {
    let time = SimTime::from_ymd(2006, 12, 1).unwrap();
    assert_eq!(time.day_month_year(), Some((1, 12, 2006)));
}

#[test]
fn test_sim_time_ordering() {
    assert!(date(2005, 1, 1) < date(2005, 6, 1));
    assert!(date(2009, 12, 1) > date(2007, 12, 1));
    assert_eq!(date(2005, 6, 1), date(2005, 6, 1));
}

#[test]
fn test_sim_time_display() {
    assert_eq!(date(2005, 6, 1).to_string(), "2005-06-01 00:00:00");
    assert_eq!(SimTime::from_timestamp(90).to_string(), "1970-01-01 00:01:30");
}

#[test]
fn test_decode_date_from_intehead() {
    let config = LocatorConfig::default();
    let decoded = decode_date(&intehead(2007, 12, 1), &config).unwrap();

    assert_eq!(decoded, date(2007, 12, 1));
}

#[test]
fn test_decode_date_short_header() {
    let config = LocatorConfig::default();
    let short = Record::int("INTEHEAD", vec![0; 10]);

    assert!(matches!(
        decode_date(&short, &config),
        Err(RstError::FieldOutOfRange { index: 64, len: 10, .. })
    ));
}

#[test]
fn test_decode_date_custom_layout() {
    let config = LocatorConfig::builder()
        .date_keyword("DATE")
        .date_fields(0, 1, 2)
        .build();
    let record = Record::int("DATE", vec![15, 3, 2010]);

    assert_eq!(decode_date(&record, &config).unwrap(), date(2010, 3, 15));
}

// =============================================================================
// Config Tests
// =============================================================================

#[test]
fn test_config_defaults() {
    let config = LocatorConfig::default();

    assert_eq!(config.step_keyword, "SEQNUM");
    assert_eq!(config.date_keyword, "INTEHEAD");
    assert_eq!((config.day_index, config.month_index, config.year_index), (64, 65, 66));
    assert!(!config.validate_on_open);
    assert!(config.validate().is_ok());
}

#[test]
fn test_config_builder() {
    let config = LocatorConfig::builder()
        .step_keyword("STEP")
        .date_keyword("DATE")
        .date_fields(0, 1, 2)
        .validate_on_open(true)
        .build();

    assert_eq!(config.step_keyword, "STEP");
    assert_eq!(config.date_keyword, "DATE");
    assert_eq!(config.year_index, 2);
    assert!(config.validate_on_open);
}

#[test]
fn test_config_rejects_same_keyword() {
    let config = LocatorConfig::builder()
        .step_keyword("INTEHEAD")
        .build();

    assert!(matches!(config.validate(), Err(RstError::Config(_))));
}

#[test]
fn test_config_rejects_empty_keyword() {
    let config = LocatorConfig::builder().date_keyword("").build();
    assert!(matches!(config.validate(), Err(RstError::Config(_))));
}

#[test]
fn test_config_rejects_overlapping_fields() {
    let config = LocatorConfig::builder().date_fields(5, 5, 6).build();
    assert!(matches!(config.validate(), Err(RstError::Config(_))));
}
