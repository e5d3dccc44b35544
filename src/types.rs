//! Core data model types for the statistics pipeline.
//!
//! Ingestion turns text into a [`Dataset`] of validated [`NumericValue`]s plus a list of
//! [`Diagnostic`]s. Processing derives a [`SortedDataset`] from it once.

use std::fmt;

use serde::Serialize;

use crate::error::IngestionError;
use crate::processing::sort::merge_sort;

/// A finite decimal value (never NaN, never infinite).
///
/// Only [`crate::ingestion::validate::parse_numeric`] and [`NumericValue::new`] create these.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct NumericValue(f64);

impl NumericValue {
    /// Wrap `value` if it is finite.
    pub fn new(value: f64) -> Option<Self> {
        value.is_finite().then_some(Self(value))
    }

    /// The underlying `f64`.
    pub fn get(self) -> f64 {
        self.0
    }
}

impl From<NumericValue> for f64 {
    fn from(v: NumericValue) -> Self {
        v.0
    }
}

/// One invalid token, with its 1-based line number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParseError {
    /// 1-based line number in the input file.
    pub line: usize,
    /// Raw token text as it appeared in the file.
    pub token: String,
    /// Why the token was rejected.
    pub reason: String,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Error on line {}: value '{}' invalid ({})",
            self.line, self.token, self.reason
        )
    }
}

/// An entry of the error log carried into the final report.
#[derive(Debug)]
pub enum Diagnostic {
    /// A token that failed validation. Counted as an invalid value.
    Token(ParseError),
    /// A structural input failure. Not counted as an invalid value.
    Input(IngestionError),
}

impl Diagnostic {
    /// Returns the token error, if this is one.
    pub fn as_parse_error(&self) -> Option<&ParseError> {
        match self {
            Self::Token(e) => Some(e),
            Self::Input(_) => None,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Token(e) => write!(f, "{e}"),
            Self::Input(e) => write!(f, "Input error: {e}"),
        }
    }
}

impl From<ParseError> for Diagnostic {
    fn from(e: ParseError) -> Self {
        Self::Token(e)
    }
}

impl From<IngestionError> for Diagnostic {
    fn from(e: IngestionError) -> Self {
        Self::Input(e)
    }
}

/// All successfully parsed values of one input, in file order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    values: Vec<f64>,
}

impl Dataset {
    /// Create an empty dataset.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a validated value.
    pub fn push(&mut self, value: NumericValue) {
        self.values.push(value.get());
    }

    /// Number of values.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if no value was ingested.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Values in insertion (file) order.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Sort a copy of the values with [`merge_sort`].
    pub fn sorted(&self) -> SortedDataset {
        SortedDataset {
            values: merge_sort(&self.values),
        }
    }
}

impl FromIterator<NumericValue> for Dataset {
    fn from_iter<I: IntoIterator<Item = NumericValue>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().map(NumericValue::get).collect(),
        }
    }
}

/// A non-decreasing permutation of a [`Dataset`].
///
/// Only obtainable through [`Dataset::sorted`], so `values()[i] <= values()[i + 1]` always holds.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SortedDataset {
    values: Vec<f64>,
}

impl SortedDataset {
    /// Number of values.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if there are no values.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Values in non-decreasing order.
    pub fn values(&self) -> &[f64] {
        &self.values
    }
}
