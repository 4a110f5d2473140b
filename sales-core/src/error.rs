//! Errors raised while loading and parsing the sales dataset.

use std::fmt;

/// A failure to parse the source CSV into a valid sales table.
///
/// Any of these is fatal at startup: the dashboard refuses to serve UI
/// state from a partially-loaded table. Row numbers are 1-based and count
/// data rows only (the header row is row 0).
#[derive(Debug)]
pub enum DataFormatError {
    /// The underlying CSV reader failed.
    Csv(csv::Error),
    /// A required column is missing from the header row.
    MissingColumn { name: &'static str },
    /// A data row has fewer fields than the header declares.
    ShortRow { row: usize, len: usize },
    /// A `Date` value did not parse as `YYYY-MM-DD`.
    InvalidDate { row: usize, value: String },
    /// A `Sales` value does not start with the expected currency marker.
    ///
    /// The upstream dataset always prefixes amounts with `$`. A value
    /// without the marker is rejected rather than sliced blindly, since
    /// dropping the first character of a bare number would silently
    /// corrupt it.
    MissingCurrencyMarker { row: usize, value: String },
    /// A `Sales` value after the currency marker is not a number.
    InvalidAmount { row: usize, value: String },
    /// A `Units` value is not a non-negative integer.
    InvalidUnits { row: usize, value: String },
    /// The CSV contained a header but no data rows.
    EmptyTable,
}

impl fmt::Display for DataFormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataFormatError::Csv(e) => write!(f, "CSV read error: {}", e),
            DataFormatError::MissingColumn { name } => {
                write!(f, "missing required column '{}'", name)
            }
            DataFormatError::ShortRow { row, len } => {
                write!(f, "row {}: expected 5 fields, found {}", row, len)
            }
            DataFormatError::InvalidDate { row, value } => {
                write!(f, "row {}: invalid date '{}'", row, value)
            }
            DataFormatError::MissingCurrencyMarker { row, value } => {
                write!(f, "row {}: sales value '{}' lacks currency marker", row, value)
            }
            DataFormatError::InvalidAmount { row, value } => {
                write!(f, "row {}: invalid sales amount '{}'", row, value)
            }
            DataFormatError::InvalidUnits { row, value } => {
                write!(f, "row {}: invalid unit count '{}'", row, value)
            }
            DataFormatError::EmptyTable => write!(f, "sales CSV contains no data rows"),
        }
    }
}

impl std::error::Error for DataFormatError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DataFormatError::Csv(e) => Some(e),
            _ => None,
        }
    }
}

impl From<csv::Error> for DataFormatError {
    fn from(e: csv::Error) -> Self {
        DataFormatError::Csv(e)
    }
}
