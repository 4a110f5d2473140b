//! Application state managed via Dioxus context.
//!
//! `AppState` bundles all reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with `use_context::<AppState>()`.

use dioxus::prelude::*;
use sales_core::table::SalesTable;
use sales_data::filter::FilteredSales;

/// Shared application state for the sales dashboard apps.
#[derive(Clone, Copy)]
pub struct AppState {
    /// The loaded sales table (None until loaded)
    pub table: Signal<Option<SalesTable>>,
    /// Whether the app is still loading
    pub loading: Signal<bool>,
    /// Error message if something went wrong
    pub error_msg: Signal<Option<String>>,
    /// Distinct regions, first-encounter order
    pub regions: Signal<Vec<String>>,
    /// Currently selected region for the color breakdown chart
    pub selected_region: Signal<String>,
    /// Start date for date range filtering (YYYY-MM-DD, HTML input format)
    pub start_date: Signal<String>,
    /// End date for date range filtering (YYYY-MM-DD)
    pub end_date: Signal<String>,
    /// Dataset minimum date, bounds the date picker
    pub min_date: Signal<String>,
    /// Dataset maximum date, bounds the date picker
    pub max_date: Signal<String>,
    /// Total units sold over the current range (for the summary line)
    pub total_units: Signal<u64>,
    /// The one cached filtered subset (cached variant only; last range wins)
    pub filtered: Signal<Option<FilteredSales>>,
}

impl AppState {
    /// Create a new AppState with default signal values.
    pub fn new() -> Self {
        Self {
            table: Signal::new(None),
            loading: Signal::new(true),
            error_msg: Signal::new(None),
            regions: Signal::new(Vec::new()),
            selected_region: Signal::new(String::new()),
            start_date: Signal::new(String::new()),
            end_date: Signal::new(String::new()),
            min_date: Signal::new(String::new()),
            max_date: Signal::new(String::new()),
            total_units: Signal::new(0),
            filtered: Signal::new(None),
        }
    }
}
