//! Chart series model structs.
//!
//! All structs derive `Serialize` so they can be passed to D3.js as JSON
//! from the Dioxus WASM frontend.

use serde::Serialize;
use std::collections::BTreeMap;

/// A single (label, value) pair used for bar and pie chart data points.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CategoryValue {
    pub label: String,
    pub value: f64,
}

/// Convert a sales aggregation (region -> dollars) into chart points.
pub fn from_sales(sums: &BTreeMap<String, f64>) -> Vec<CategoryValue> {
    sums.iter()
        .map(|(label, value)| CategoryValue {
            label: label.clone(),
            value: *value,
        })
        .collect()
}

/// Convert a unit aggregation (category -> units) into chart points.
pub fn from_units(sums: &BTreeMap<String, u64>) -> Vec<CategoryValue> {
    sums.iter()
        .map(|(label, value)| CategoryValue {
            label: label.clone(),
            value: *value as f64,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_unit_sums_to_points() {
        let mut sums = BTreeMap::new();
        sums.insert("East".to_string(), 10u64);
        sums.insert("West".to_string(), 20u64);
        let points = from_units(&sums);
        assert_eq!(points.len(), 2);
        assert_eq!(points[0].label, "East");
        assert_eq!(points[0].value, 10.0);
    }

    #[test]
    fn serializes_for_d3() {
        let points = vec![CategoryValue {
            label: "East".to_string(),
            value: 5.0,
        }];
        let json = serde_json::to_string(&points).unwrap();
        assert_eq!(json, r#"[{"label":"East","value":5.0}]"#);
    }
}
