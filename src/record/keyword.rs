//! Record definitions
//!
//! Defines the structure of individual keywords in the record stream.

use std::fmt;

use crate::error::{Result, RstError};

/// Logical element type of a record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordType {
    Int,
    Float,
    Double,
    Logical,
    Char,
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self {
            RecordType::Int => "INTE",
            RecordType::Float => "REAL",
            RecordType::Double => "DOUB",
            RecordType::Logical => "LOGI",
            RecordType::Char => "CHAR",
        };
        f.write_str(tag)
    }
}

/// Decoded payload of a record
#[derive(Debug, Clone, PartialEq)]
pub enum RecordData {
    Int(Vec<i32>),
    Float(Vec<f32>),
    Double(Vec<f64>),
    Logical(Vec<bool>),
    Char(Vec<String>),
}

impl RecordData {
    pub fn record_type(&self) -> RecordType {
        match self {
            RecordData::Int(_) => RecordType::Int,
            RecordData::Float(_) => RecordType::Float,
            RecordData::Double(_) => RecordType::Double,
            RecordData::Logical(_) => RecordType::Logical,
            RecordData::Char(_) => RecordType::Char,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            RecordData::Int(v) => v.len(),
            RecordData::Float(v) => v.len(),
            RecordData::Double(v) => v.len(),
            RecordData::Logical(v) => v.len(),
            RecordData::Char(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A single value to compare a record's payload against
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    Int(i32),
    Float(f32),
    Double(f64),
    Logical(bool),
    Char(String),
}

impl From<i32> for Scalar {
    fn from(value: i32) -> Self {
        Scalar::Int(value)
    }
}

impl From<f32> for Scalar {
    fn from(value: f32) -> Self {
        Scalar::Float(value)
    }
}

impl From<f64> for Scalar {
    fn from(value: f64) -> Self {
        Scalar::Double(value)
    }
}

impl From<bool> for Scalar {
    fn from(value: bool) -> Self {
        Scalar::Logical(value)
    }
}

impl From<&str> for Scalar {
    fn from(value: &str) -> Self {
        Scalar::Char(value.to_string())
    }
}

/// A named keyword with its decoded payload
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    /// Keyword name, e.g. `SEQNUM`
    name: String,

    /// Payload; the type never changes after parse
    data: RecordData,
}

impl Record {
    pub fn new(name: impl Into<String>, data: RecordData) -> Self {
        Self {
            name: name.into(),
            data,
        }
    }

    /// Integer keyword, e.g. `SEQNUM` or `INTEHEAD`
    pub fn int(name: impl Into<String>, values: impl Into<Vec<i32>>) -> Self {
        Self::new(name, RecordData::Int(values.into()))
    }

    pub fn float(name: impl Into<String>, values: impl Into<Vec<f32>>) -> Self {
        Self::new(name, RecordData::Float(values.into()))
    }

    pub fn double(name: impl Into<String>, values: impl Into<Vec<f64>>) -> Self {
        Self::new(name, RecordData::Double(values.into()))
    }

    pub fn logical(name: impl Into<String>, values: impl Into<Vec<bool>>) -> Self {
        Self::new(name, RecordData::Logical(values.into()))
    }

    pub fn chars<S: Into<String>>(name: impl Into<String>, values: impl IntoIterator<Item = S>) -> Self {
        Self::new(
            name,
            RecordData::Char(values.into_iter().map(Into::into).collect()),
        )
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn data(&self) -> &RecordData {
        &self.data
    }

    pub fn record_type(&self) -> RecordType {
        self.data.record_type()
    }

    /// Number of elements in the payload
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Decode integer field `index`
    ///
    /// Returns:
    /// - `Err(TypeMismatch)` — the record is not an integer keyword
    /// - `Err(FieldOutOfRange)` — `index >= len()`
    pub fn int_at(&self, index: usize) -> Result<i32> {
        let values = match &self.data {
            RecordData::Int(values) => values,
            other => {
                return Err(RstError::TypeMismatch {
                    keyword: self.name.clone(),
                    expected: RecordType::Int,
                    found: other.record_type(),
                })
            }
        };

        values
            .get(index)
            .copied()
            .ok_or_else(|| RstError::FieldOutOfRange {
                keyword: self.name.clone(),
                index,
                len: values.len(),
            })
    }

    /// True if the payload is exactly one element equal to `value`.
    /// Records of a different type never match.
    pub fn is_scalar(&self, value: &Scalar) -> bool {
        match (&self.data, value) {
            (RecordData::Int(v), Scalar::Int(x)) => v.as_slice() == [*x],
            (RecordData::Float(v), Scalar::Float(x)) => v.as_slice() == [*x],
            (RecordData::Double(v), Scalar::Double(x)) => v.as_slice() == [*x],
            (RecordData::Logical(v), Scalar::Logical(x)) => v.as_slice() == [*x],
            (RecordData::Char(v), Scalar::Char(x)) => v.len() == 1 && v[0] == *x,
            _ => false,
        }
    }
}
