//! The loaded sales table: all records plus the metadata the UI needs.

use crate::date_range::DateRange;
use crate::error::DataFormatError;
use crate::record::{SalesRecord, COLUMNS};
use chrono::NaiveDate;
use csv::ReaderBuilder;

/// The cleaned sales dataset, loaded once at startup and read-only
/// thereafter.
///
/// Date bounds and the distinct category values are computed at load time
/// so the UI can populate its date picker and region dropdown without
/// re-scanning. Regions and colors keep first-encounter order; the first
/// region is the dashboard's default selection.
#[derive(Debug, Clone, PartialEq)]
pub struct SalesTable {
    records: Vec<SalesRecord>,
    min_date: NaiveDate,
    max_date: NaiveDate,
    regions: Vec<String>,
    colors: Vec<String>,
}

impl SalesTable {
    /// Parse the sales CSV (`Date,Region,Color,Units,Sales`, with header).
    ///
    /// Every row must parse; a single malformed value fails the whole
    /// load. An input with no data rows is [`DataFormatError::EmptyTable`].
    pub fn from_csv(csv_data: &str) -> Result<Self, DataFormatError> {
        let mut rdr = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(csv_data.as_bytes());

        let headers = rdr.headers()?.clone();
        for (i, name) in COLUMNS.iter().enumerate() {
            let found = headers.get(i).map(str::trim);
            if found != Some(*name) {
                return Err(DataFormatError::MissingColumn { name });
            }
        }

        let mut records = Vec::new();
        for (i, result) in rdr.records().enumerate() {
            let raw = result?;
            records.push(SalesRecord::from_record(&raw, i + 1)?);
        }

        let (min_date, max_date) = match date_bounds(&records) {
            Some(bounds) => bounds,
            None => return Err(DataFormatError::EmptyTable),
        };
        let regions = distinct(records.iter().map(|r| r.region.as_str()));
        let colors = distinct(records.iter().map(|r| r.color.as_str()));

        log::info!(
            "loaded {} sales records, {} regions, {} colors, {} to {}",
            records.len(),
            regions.len(),
            colors.len(),
            min_date,
            max_date
        );

        Ok(SalesTable {
            records,
            min_date,
            max_date,
            regions,
            colors,
        })
    }

    pub fn records(&self) -> &[SalesRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Earliest date observed in the table.
    pub fn min_date(&self) -> NaiveDate {
        self.min_date
    }

    /// Latest date observed in the table.
    pub fn max_date(&self) -> NaiveDate {
        self.max_date
    }

    /// The full span of the table as an inclusive range.
    pub fn date_bounds(&self) -> DateRange {
        DateRange(self.min_date, self.max_date)
    }

    /// Distinct regions in first-encounter order.
    pub fn regions(&self) -> &[String] {
        &self.regions
    }

    /// Distinct colors in first-encounter order.
    pub fn colors(&self) -> &[String] {
        &self.colors
    }

    /// The default region selection: the first distinct region.
    pub fn default_region(&self) -> &str {
        &self.regions[0]
    }
}

fn date_bounds(records: &[SalesRecord]) -> Option<(NaiveDate, NaiveDate)> {
    let min = records.iter().map(|r| r.date).min()?;
    let max = records.iter().map(|r| r.date).max()?;
    Some((min, max))
}

fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for v in values {
        if !out.iter().any(|seen| seen == v) {
            out.push(v.to_string());
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_CSV: &str = "\
Date,Region,Color,Units,Sales
2021-01-03,East,Red,10,$5.00
2021-01-01,West,Blue,20,$7.50
2021-01-02,East,Blue,5,$2.25
2021-01-05,North,Red,8,$4.00
";

    #[test]
    fn loads_all_rows() {
        let table = SalesTable::from_csv(SAMPLE_CSV).unwrap();
        assert_eq!(table.len(), 4);
        assert!(!table.is_empty());
    }

    #[test]
    fn computes_date_bounds() {
        let table = SalesTable::from_csv(SAMPLE_CSV).unwrap();
        assert_eq!(table.min_date(), NaiveDate::from_ymd_opt(2021, 1, 1).unwrap());
        assert_eq!(table.max_date(), NaiveDate::from_ymd_opt(2021, 1, 5).unwrap());
    }

    #[test]
    fn regions_keep_first_encounter_order() {
        let table = SalesTable::from_csv(SAMPLE_CSV).unwrap();
        assert_eq!(table.regions(), &["East", "West", "North"]);
        assert_eq!(table.default_region(), "East");
    }

    #[test]
    fn colors_are_distinct() {
        let table = SalesTable::from_csv(SAMPLE_CSV).unwrap();
        assert_eq!(table.colors(), &["Red", "Blue"]);
    }

    #[test]
    fn empty_csv_is_an_error() {
        let err = SalesTable::from_csv("Date,Region,Color,Units,Sales\n").unwrap_err();
        assert!(matches!(err, DataFormatError::EmptyTable));
    }

    #[test]
    fn wrong_header_is_an_error() {
        let err = SalesTable::from_csv("Day,Region,Color,Units,Sales\n").unwrap_err();
        assert!(matches!(err, DataFormatError::MissingColumn { name: "Date" }));
    }

    #[test]
    fn bad_row_reports_its_row_number() {
        let csv = "\
Date,Region,Color,Units,Sales
2021-01-01,East,Red,10,$5.00
2021-01-02,West,Blue,20,7.50
";
        let err = SalesTable::from_csv(csv).unwrap_err();
        assert!(matches!(
            err,
            DataFormatError::MissingCurrencyMarker { row: 2, .. }
        ));
    }
}
