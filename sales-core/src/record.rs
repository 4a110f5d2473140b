//! A single row of the sales dataset and its CSV parsing.

use crate::error::DataFormatError;
use chrono::NaiveDate;
use csv::StringRecord;
use serde::Serialize;

/// Date format used in the sales CSV: "YYYY-MM-DD"
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// The currency marker that prefixes every `Sales` value (e.g. "$123.45").
pub const CURRENCY_MARKER: char = '$';

/// Expected number of columns in a sales CSV row.
pub const CSV_ROW_LENGTH: usize = 5;

/// Column positions within a sales CSV row: `Date,Region,Color,Units,Sales`.
pub const COLUMNS: [&str; CSV_ROW_LENGTH] = ["Date", "Region", "Color", "Units", "Sales"];

/// One paper sale: a date, two categorical dimensions, a unit count,
/// and a monetary amount. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SalesRecord {
    pub date: NaiveDate,
    pub region: String,
    pub color: String,
    pub units: u32,
    pub sales: f64,
}

impl SalesRecord {
    /// Parse one CSV data row. `row` is the 1-based data row number,
    /// used only for error reporting.
    pub fn from_record(record: &StringRecord, row: usize) -> Result<Self, DataFormatError> {
        if record.len() < CSV_ROW_LENGTH {
            return Err(DataFormatError::ShortRow {
                row,
                len: record.len(),
            });
        }

        let date_raw = record.get(0).unwrap_or("").trim();
        let date = NaiveDate::parse_from_str(date_raw, DATE_FORMAT).map_err(|_| {
            DataFormatError::InvalidDate {
                row,
                value: date_raw.to_string(),
            }
        })?;

        let region = record.get(1).unwrap_or("").trim().to_string();
        let color = record.get(2).unwrap_or("").trim().to_string();

        let units_raw = record.get(3).unwrap_or("").trim();
        let units: u32 = units_raw.parse().map_err(|_| DataFormatError::InvalidUnits {
            row,
            value: units_raw.to_string(),
        })?;

        let sales = parse_sales_amount(record.get(4).unwrap_or(""), row)?;

        Ok(SalesRecord {
            date,
            region,
            color,
            units,
            sales,
        })
    }
}

/// Parse a `Sales` value such as "$123.45" into its numeric amount.
///
/// The leading currency marker is required. Values without it are rejected
/// with [`DataFormatError::MissingCurrencyMarker`] instead of having their
/// first character stripped regardless, which would turn "123.45" into
/// "23.45" without any indication that the data was malformed.
pub fn parse_sales_amount(raw: &str, row: usize) -> Result<f64, DataFormatError> {
    let trimmed = raw.trim();
    let rest = match trimmed.strip_prefix(CURRENCY_MARKER) {
        Some(rest) => rest,
        None => {
            return Err(DataFormatError::MissingCurrencyMarker {
                row,
                value: trimmed.to_string(),
            })
        }
    };
    rest.parse::<f64>()
        .map_err(|_| DataFormatError::InvalidAmount {
            row,
            value: trimmed.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(fields: &[&str]) -> StringRecord {
        StringRecord::from(fields.to_vec())
    }

    #[test]
    fn parses_a_valid_row() {
        let r = record(&["2021-01-01", "East", "Red", "10", "$5.00"]);
        let parsed = SalesRecord::from_record(&r, 1).unwrap();
        assert_eq!(parsed.date, NaiveDate::from_ymd_opt(2021, 1, 1).unwrap());
        assert_eq!(parsed.region, "East");
        assert_eq!(parsed.color, "Red");
        assert_eq!(parsed.units, 10);
        assert!((parsed.sales - 5.0).abs() < f64::EPSILON);
    }

    #[test]
    fn trims_whitespace_in_fields() {
        let r = record(&[" 2021-01-01 ", " East ", " Red ", " 10 ", " $5.00 "]);
        let parsed = SalesRecord::from_record(&r, 1).unwrap();
        assert_eq!(parsed.region, "East");
        assert_eq!(parsed.units, 10);
    }

    #[test]
    fn rejects_sales_value_without_marker() {
        // The original pipeline sliced the first character unconditionally,
        // silently turning "123.45" into 23.45. We fail loudly instead.
        let err = parse_sales_amount("123.45", 7).unwrap_err();
        match err {
            DataFormatError::MissingCurrencyMarker { row, value } => {
                assert_eq!(row, 7);
                assert_eq!(value, "123.45");
            }
            other => panic!("expected MissingCurrencyMarker, got {:?}", other),
        }
    }

    #[test]
    fn rejects_non_numeric_amount() {
        let err = parse_sales_amount("$abc", 2).unwrap_err();
        assert!(matches!(err, DataFormatError::InvalidAmount { row: 2, .. }));
    }

    #[test]
    fn rejects_bad_date() {
        let r = record(&["01/02/2021", "East", "Red", "10", "$5.00"]);
        let err = SalesRecord::from_record(&r, 3).unwrap_err();
        assert!(matches!(err, DataFormatError::InvalidDate { row: 3, .. }));
    }

    #[test]
    fn rejects_negative_units() {
        let r = record(&["2021-01-01", "East", "Red", "-4", "$5.00"]);
        let err = SalesRecord::from_record(&r, 1).unwrap_err();
        assert!(matches!(err, DataFormatError::InvalidUnits { row: 1, .. }));
    }

    #[test]
    fn rejects_short_row() {
        let r = record(&["2021-01-01", "East", "Red"]);
        let err = SalesRecord::from_record(&r, 5).unwrap_err();
        assert!(matches!(err, DataFormatError::ShortRow { row: 5, len: 3 }));
    }
}
