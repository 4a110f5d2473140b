use chrono::{NaiveDate, TimeDelta};
use std::mem::replace;

/// An inclusive date range: `start` through `end`.
///
/// A range with `start > end` is a valid value denoting the empty range;
/// filtering with it matches no rows. Iterating yields each date from the
/// start date through the end date (inclusive).
#[derive(Clone, Eq, PartialEq, Copy, Debug)]
pub struct DateRange(pub NaiveDate, pub NaiveDate);

impl DateRange {
    /// The start of the range.
    pub fn start(&self) -> NaiveDate {
        self.0
    }

    /// The end of the range.
    pub fn end(&self) -> NaiveDate {
        self.1
    }

    /// True when the range covers no dates (`start > end`).
    pub fn is_empty(&self) -> bool {
        self.0 > self.1
    }

    /// Inclusive containment on both ends.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.0 <= date && date <= self.1
    }

    /// Clamp both ends into `[min, max]`.
    ///
    /// Clamping an already-empty range keeps it empty.
    pub fn clamp_to(&self, min: NaiveDate, max: NaiveDate) -> DateRange {
        DateRange(self.0.clamp(min, max), self.1.clamp(min, max))
    }
}

impl Iterator for DateRange {
    type Item = NaiveDate;
    fn next(&mut self) -> Option<Self::Item> {
        if self.0 <= self.1 {
            let next = self.0 + TimeDelta::try_days(1).unwrap();
            Some(replace(&mut self.0, next))
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::DateRange;
    use chrono::NaiveDate;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_date_range_iteration() {
        let range = DateRange(d(2022, 1, 1), d(2022, 1, 5));
        let dates: Vec<NaiveDate> = range.collect();
        assert_eq!(dates.len(), 5);
        assert_eq!(dates[0], d(2022, 1, 1));
        assert_eq!(dates[4], d(2022, 1, 5));
    }

    #[test]
    fn test_date_range_single_day() {
        let start = d(2022, 3, 15);
        let range = DateRange(start, start);
        let dates: Vec<NaiveDate> = range.collect();
        assert_eq!(dates.len(), 1);
        assert_eq!(dates[0], start);
    }

    #[test]
    fn test_date_range_empty() {
        let range = DateRange(d(2022, 3, 15), d(2022, 3, 14));
        assert!(range.is_empty());
        let dates: Vec<NaiveDate> = range.collect();
        assert_eq!(dates.len(), 0);
    }

    #[test]
    fn test_contains_is_inclusive_on_both_ends() {
        let range = DateRange(d(2021, 1, 1), d(2021, 1, 31));
        assert!(range.contains(d(2021, 1, 1)));
        assert!(range.contains(d(2021, 1, 31)));
        assert!(range.contains(d(2021, 1, 15)));
        assert!(!range.contains(d(2020, 12, 31)));
        assert!(!range.contains(d(2021, 2, 1)));
    }

    #[test]
    fn test_empty_range_contains_nothing() {
        let range = DateRange(d(2021, 1, 2), d(2021, 1, 1));
        assert!(!range.contains(d(2021, 1, 1)));
        assert!(!range.contains(d(2021, 1, 2)));
    }

    #[test]
    fn test_clamp_to_dataset_bounds() {
        let range = DateRange(d(2020, 1, 1), d(2022, 12, 31));
        let clamped = range.clamp_to(d(2021, 1, 1), d(2021, 6, 30));
        assert_eq!(clamped, DateRange(d(2021, 1, 1), d(2021, 6, 30)));
    }

    #[test]
    fn test_clamp_keeps_inner_range() {
        let range = DateRange(d(2021, 2, 1), d(2021, 3, 1));
        let clamped = range.clamp_to(d(2021, 1, 1), d(2021, 12, 31));
        assert_eq!(clamped, range);
    }
}
