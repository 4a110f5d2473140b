//! Pure filter and aggregation stages over the sales table.
//!
//! Both stages are deterministic functions with no shared state: the
//! filter returns an explicit [`filter::FilteredSales`] value which is
//! then passed into each aggregator. The cached dashboard variant stores
//! exactly one such value at a time (last range wins); the uncached
//! variant simply recomputes it per chart.

/// Date-range filtering of the loaded table.
pub mod filter {
    use sales_core::date_range::DateRange;
    use sales_core::record::SalesRecord;
    use sales_core::table::SalesTable;

    /// The rows of the source table whose date falls within an inclusive
    /// date range, together with the range they were computed for.
    ///
    /// This is the one intermediate value threaded from the filter stage
    /// into the aggregators. It is produced fresh per range change and
    /// never outlives the render cycle that requested it.
    #[derive(Debug, Clone, PartialEq)]
    pub struct FilteredSales {
        range: DateRange,
        records: Vec<SalesRecord>,
    }

    impl FilteredSales {
        /// An empty subset for the given range.
        pub fn empty(range: DateRange) -> Self {
            FilteredSales {
                range,
                records: Vec::new(),
            }
        }

        /// The range this subset was computed for.
        pub fn range(&self) -> DateRange {
            self.range
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
    }

    /// Select the rows whose date lies within `range`, inclusive on both
    /// ends.
    ///
    /// Out-of-bounds endpoints simply match fewer rows, and an inverted
    /// range (`start > end`) yields an empty subset; neither is an error.
    pub fn by_date_range(table: &SalesTable, range: DateRange) -> FilteredSales {
        if range.is_empty() {
            return FilteredSales::empty(range);
        }
        let records: Vec<SalesRecord> = table
            .records()
            .iter()
            .filter(|r| range.contains(r.date))
            .cloned()
            .collect();
        log::info!(
            "filter: {} of {} records in {} to {}",
            records.len(),
            table.len(),
            range.start(),
            range.end()
        );
        FilteredSales { range, records }
    }
}

/// Group-by-sum reducers over a filtered subset.
pub mod aggregate {
    use super::filter::FilteredSales;
    use sales_core::record::SalesRecord;
    use std::collections::BTreeMap;
    use std::ops::AddAssign;

    /// Sum `measure(record)` per distinct `key(record)`.
    ///
    /// Groups with no matching rows are absent from the result, never
    /// emitted with a zero value. Key order in the returned map carries
    /// no meaning for consumers; `BTreeMap` just keeps iteration stable.
    pub fn group_sum<V, K, M>(records: &[SalesRecord], key: K, measure: M) -> BTreeMap<String, V>
    where
        V: Copy + Default + AddAssign,
        K: Fn(&SalesRecord) -> &str,
        M: Fn(&SalesRecord) -> V,
    {
        let mut sums: BTreeMap<String, V> = BTreeMap::new();
        for record in records {
            *sums.entry(key(record).to_string()).or_default() += measure(record);
        }
        sums
    }

    /// Total sales amount per region.
    pub fn sales_by_region(filtered: &FilteredSales) -> BTreeMap<String, f64> {
        group_sum(filtered.records(), |r| r.region.as_str(), |r| r.sales)
    }

    /// Total units sold per region.
    pub fn units_by_region(filtered: &FilteredSales) -> BTreeMap<String, u64> {
        group_sum(filtered.records(), |r| r.region.as_str(), |r| {
            u64::from(r.units)
        })
    }

    /// Units sold per color within one region.
    ///
    /// A region with no rows in the subset yields an empty series, which
    /// the dashboard renders as an empty chart.
    pub fn units_by_color(filtered: &FilteredSales, region: &str) -> BTreeMap<String, u64> {
        let in_region: Vec<SalesRecord> = filtered
            .records()
            .iter()
            .filter(|r| r.region == region)
            .cloned()
            .collect();
        group_sum(&in_region, |r| r.color.as_str(), |r| u64::from(r.units))
    }

    /// Total units sold over the whole subset; 0 when it is empty.
    pub fn total_units(filtered: &FilteredSales) -> u64 {
        filtered.records().iter().map(|r| u64::from(r.units)).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::{aggregate, filter};
    use chrono::NaiveDate;
    use sales_core::date_range::DateRange;
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
2021-01-04,West,Red,8,$4.00
2021-01-05,North,Green,12,$6.50
",
        )
        .unwrap()
    }

    #[test]
    fn filter_is_inclusive_on_both_ends() {
        let table = sample_table();
        let subset = filter::by_date_range(&table, DateRange(d(2021, 1, 2), d(2021, 1, 4)));
        assert_eq!(subset.len(), 3);
        assert!(subset
            .records()
            .iter()
            .all(|r| d(2021, 1, 2) <= r.date && r.date <= d(2021, 1, 4)));
    }

    #[test]
    fn filter_with_out_of_bounds_dates_just_matches_less() {
        let table = sample_table();
        let subset = filter::by_date_range(&table, DateRange(d(2020, 1, 1), d(2030, 1, 1)));
        assert_eq!(subset.len(), table.len());

        let none = filter::by_date_range(&table, DateRange(d(2025, 1, 1), d(2026, 1, 1)));
        assert!(none.is_empty());
    }

    #[test]
    fn inverted_range_yields_empty_subset() {
        let table = sample_table();
        let subset = filter::by_date_range(&table, DateRange(d(2021, 1, 4), d(2021, 1, 2)));
        assert!(subset.is_empty());
    }

    #[test]
    fn partition_of_the_span_reconstructs_the_table() {
        // Splitting the full span into disjoint sub-ranges must cover each
        // row exactly once: no duplicates, no omissions.
        let table = sample_table();
        let first = filter::by_date_range(&table, DateRange(d(2021, 1, 1), d(2021, 1, 2)));
        let second = filter::by_date_range(&table, DateRange(d(2021, 1, 3), d(2021, 1, 3)));
        let third = filter::by_date_range(&table, DateRange(d(2021, 1, 4), d(2021, 1, 5)));

        let total = first.len() + second.len() + third.len();
        assert_eq!(total, table.len());

        let mut rebuilt: Vec<_> = first
            .records()
            .iter()
            .chain(second.records())
            .chain(third.records())
            .cloned()
            .collect();
        rebuilt.sort_by_key(|r| r.date);
        assert_eq!(rebuilt.as_slice(), table.records());
    }

    #[test]
    fn group_sums_conserve_the_direct_total() {
        let table = sample_table();
        let subset = filter::by_date_range(&table, table.date_bounds());

        let by_region = aggregate::sales_by_region(&subset);
        let grouped: f64 = by_region.values().sum();
        let direct: f64 = subset.records().iter().map(|r| r.sales).sum();
        assert!((grouped - direct).abs() < 1e-9);

        let units = aggregate::units_by_region(&subset);
        let grouped_units: u64 = units.values().sum();
        assert_eq!(grouped_units, aggregate::total_units(&subset));
    }

    #[test]
    fn absent_groups_are_not_emitted() {
        let table = sample_table();
        // Jan 1-2 only touches East and West; North must not appear.
        let subset = filter::by_date_range(&table, DateRange(d(2021, 1, 1), d(2021, 1, 2)));
        let by_region = aggregate::sales_by_region(&subset);
        assert_eq!(by_region.len(), 2);
        assert!(!by_region.contains_key("North"));
    }

    #[test]
    fn region_without_rows_yields_empty_color_series() {
        let table = sample_table();
        let subset = filter::by_date_range(&table, DateRange(d(2021, 1, 1), d(2021, 1, 2)));
        let colors = aggregate::units_by_color(&subset, "North");
        assert!(colors.is_empty());
    }

    #[test]
    fn total_units_is_zero_for_empty_subset() {
        let table = sample_table();
        let subset = filter::by_date_range(&table, DateRange(d(2025, 1, 1), d(2025, 1, 2)));
        assert_eq!(aggregate::total_units(&subset), 0);
    }

    #[test]
    fn worked_example_from_two_rows() {
        let table = SalesTable::from_csv(
            "\
Date,Region,Color,Units,Sales
2021-01-01,East,Red,10,$5.00
2021-01-02,West,Blue,20,$7.50
",
        )
        .unwrap();
        let subset = filter::by_date_range(&table, DateRange(d(2021, 1, 1), d(2021, 1, 1)));
        assert_eq!(subset.len(), 1);

        let by_region = aggregate::sales_by_region(&subset);
        assert_eq!(by_region.len(), 1);
        assert!((by_region["East"] - 5.0).abs() < f64::EPSILON);
        assert_eq!(aggregate::total_units(&subset), 10);
    }

    #[test]
    fn pipeline_is_deterministic() {
        let table = sample_table();
        let range = DateRange(d(2021, 1, 1), d(2021, 1, 5));

        let first = filter::by_date_range(&table, range);
        let second = filter::by_date_range(&table, range);
        assert_eq!(first, second);
        assert_eq!(
            aggregate::sales_by_region(&first),
            aggregate::sales_by_region(&second)
        );
        assert_eq!(
            aggregate::units_by_color(&first, "East"),
            aggregate::units_by_color(&second, "East")
        );
    }
}
