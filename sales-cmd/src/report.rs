//! Text report over a sales CSV: the same three aggregations the
//! dashboard charts show, printed to stdout.

use anyhow::Context;
use chrono::NaiveDate;
use log::info;
use sales_core::date_range::DateRange;
use sales_core::record::DATE_FORMAT;
use sales_core::table::SalesTable;
use sales_data::{aggregate, filter};
use std::fmt::Write as _;

/// Load, filter, aggregate, and print the report.
///
/// Missing range endpoints default to the dataset bounds; explicit
/// endpoints are clamped into them. An unknown region prints an empty
/// color section rather than failing.
pub fn run_report(
    sales_csv: &str,
    start_date: Option<&str>,
    end_date: Option<&str>,
    region: Option<&str>,
) -> anyhow::Result<()> {
    let table = load_table(sales_csv)?;

    let start = match start_date {
        Some(s) => parse_arg_date(s)?,
        None => table.min_date(),
    };
    let end = match end_date {
        Some(s) => parse_arg_date(s)?,
        None => table.max_date(),
    };
    let range = DateRange(start, end).clamp_to(table.min_date(), table.max_date());

    let region = region.unwrap_or_else(|| table.default_region()).to_string();

    info!(
        "report: {} rows, range {} to {}, region {}",
        table.len(),
        range.start(),
        range.end(),
        region
    );

    print!("{}", format_report(&table, range, &region));
    Ok(())
}

/// Print the distinct regions and the date bounds of the dataset.
pub fn run_regions(sales_csv: &str) -> anyhow::Result<()> {
    let table = load_table(sales_csv)?;
    println!(
        "{} records from {} to {}",
        table.len(),
        table.min_date(),
        table.max_date()
    );
    println!("Regions:");
    for region in table.regions() {
        println!("  {}", region);
    }
    Ok(())
}

fn load_table(sales_csv: &str) -> anyhow::Result<SalesTable> {
    let data = std::fs::read_to_string(sales_csv)
        .with_context(|| format!("failed to read {}", sales_csv))?;
    let table = SalesTable::from_csv(&data)
        .with_context(|| format!("failed to parse {}", sales_csv))?;
    Ok(table)
}

fn parse_arg_date(s: &str) -> anyhow::Result<NaiveDate> {
    NaiveDate::parse_from_str(s, DATE_FORMAT)
        .with_context(|| format!("invalid date '{}', expected YYYY-MM-DD", s))
}

/// Render the report as a string (separated from printing for testability).
pub fn format_report(table: &SalesTable, range: DateRange, region: &str) -> String {
    let subset = filter::by_date_range(table, range);

    let mut out = String::new();
    let _ = writeln!(
        out,
        "Sales report, {} to {}",
        range.start(),
        range.end()
    );
    let _ = writeln!(out);

    let _ = writeln!(out, "Sales by Region");
    let by_region = aggregate::sales_by_region(&subset);
    for (name, sum) in &by_region {
        let _ = writeln!(out, "  {:<10} ${:.2}", name, sum);
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "Units by Region");
    let units = aggregate::units_by_region(&subset);
    let total = aggregate::total_units(&subset);
    for (name, sum) in &units {
        let share = if total > 0 {
            100.0 * *sum as f64 / total as f64
        } else {
            0.0
        };
        let _ = writeln!(out, "  {:<10} {:>6} ({:.1}%)", name, sum, share);
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "Units by Color in {}", region);
    let colors = aggregate::units_by_color(&subset, region);
    for (name, sum) in &colors {
        let _ = writeln!(out, "  {:<10} {:>6}", name, sum);
    }

    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "{} Units Sold in Total Over this Time Period",
        total
    );
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use sales_core::table::SalesTable;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn sample_table() -> SalesTable {
        SalesTable::from_csv(
            "\
Date,Region,Color,Units,Sales
2021-01-01,East,Red,10,$5.00
2021-01-02,West,Blue,20,$7.50
2021-01-03,East,Blue,5,$2.25
",
        )
        .unwrap()
    }

    #[test]
    fn report_lists_all_three_aggregations() {
        let table = sample_table();
        let report = format_report(&table, table.date_bounds(), "East");
        assert!(report.contains("Sales by Region"));
        assert!(report.contains("East       $7.25"));
        assert!(report.contains("West       $7.50"));
        assert!(report.contains("Units by Color in East"));
        assert!(report.contains("Red            10"));
        assert!(report.contains("35 Units Sold in Total Over this Time Period"));
    }

    #[test]
    fn report_over_narrow_range() {
        let table = sample_table();
        let report = format_report(&table, DateRange(d(2021, 1, 1), d(2021, 1, 1)), "East");
        assert!(report.contains("East       $5.00"));
        assert!(!report.contains("West"));
        assert!(report.contains("10 Units Sold in Total Over this Time Period"));
    }

    #[test]
    fn report_with_unknown_region_is_not_an_error() {
        let table = sample_table();
        let report = format_report(&table, table.date_bounds(), "Midlands");
        assert!(report.contains("Units by Color in Midlands"));
        assert!(report.contains("35 Units Sold in Total Over this Time Period"));
    }

    #[test]
    fn report_over_empty_range_shows_zero_total() {
        let table = sample_table();
        let report = format_report(&table, DateRange(d(2022, 1, 1), d(2022, 1, 2)), "East");
        assert!(report.contains("0 Units Sold in Total Over this Time Period"));
    }
}
