//! Colored Paper Sales Analytics Dashboard
//!
//! Interactive dashboard over a static paper-sales CSV: a date-range
//! picker and a region dropdown drive three charts (regional sales bar
//! chart, unit-share pie chart, per-region color breakdown) plus a
//! total-units summary line.
//!
//! This is the uncached variant: every chart effect recomputes the date
//! filter independently. See `dashboard-sales-cached` for the variant
//! that shares one filtered subset between the chart effects.
//!
//! Data flow:
//! 1. `build.rs` copies `sales_data.csv` into `OUT_DIR`.
//! 2. `include_str!` embeds the CSV into the WASM binary.
//! 3. On mount, the CSV is parsed into an immutable `SalesTable`.
//! 4. Whenever the date range or region selection changes, each chart
//!    effect filters the table, aggregates, and hands JSON to D3.js.

use chrono::NaiveDate;
use dioxus::prelude::*;
use sales_chart_ui::components::{
    ChartContainer, ChartHeader, DateRangePicker, ErrorDisplay, LoadingSpinner, RegionSelector,
};
use sales_chart_ui::js_bridge;
use sales_chart_ui::series;
use sales_chart_ui::state::AppState;
use sales_core::date_range::DateRange;
use sales_core::record::DATE_FORMAT;
use sales_core::table::SalesTable;
use sales_data::{aggregate, filter};

/// The full sales dataset, embedded at compile time.
const SALES_CSV: &str = include_str!(concat!(env!("OUT_DIR"), "/sales_data.csv"));

/// Chart container DOM element IDs used by D3.js to render into.
const SALES_CHART_ID: &str = "regional-sales-chart";
const UNITS_CHART_ID: &str = "unit-share-chart";
const COLOR_CHART_ID: &str = "color-breakdown-chart";

/// Chart transition duration in milliseconds.
const TRANSITION_MS: u32 = 300;

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("sales-dashboard-root"))
        .launch(App);
}

/// Parse the two HTML date-input strings into an inclusive range.
///
/// Returns None while either input is empty or mid-edit; an inverted
/// range is returned as-is and downstream simply filters to nothing.
fn parse_range(start: &str, end: &str) -> Option<DateRange> {
    let start = NaiveDate::parse_from_str(start, DATE_FORMAT).ok()?;
    let end = NaiveDate::parse_from_str(end, DATE_FORMAT).ok()?;
    Some(DateRange(start, end))
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);

    // Parse the embedded CSV on mount
    use_effect(move || {
        match SalesTable::from_csv(SALES_CSV) {
            Ok(table) => {
                state.regions.set(table.regions().to_vec());
                state.selected_region.set(table.default_region().to_string());

                let min = table.min_date().format(DATE_FORMAT).to_string();
                let max = table.max_date().format(DATE_FORMAT).to_string();
                state.start_date.set(min.clone());
                state.end_date.set(max.clone());
                state.min_date.set(min);
                state.max_date.set(max);

                state.table.set(Some(table));
                state.loading.set(false);
            }
            Err(e) => {
                log::error!("Failed to load sales data: {}", e);
                state
                    .error_msg
                    .set(Some(format!("Failed to load sales data: {}", e)));
                state.loading.set(false);
            }
        }
        js_bridge::init_charts();
    });

    // Total Regional Sales: horizontal bar chart, $-prefixed value axis
    use_effect(move || {
        let table = match &*state.table.read() {
            Some(table) => table.clone(),
            None => return,
        };
        let range = match parse_range(&(state.start_date)(), &(state.end_date)()) {
            Some(range) => range,
            None => return,
        };

        let subset = filter::by_date_range(&table, range);
        let by_region = aggregate::sales_by_region(&subset);
        if by_region.is_empty() {
            js_bridge::destroy_chart(SALES_CHART_ID);
            return;
        }

        let data_json = serde_json::to_string(&series::from_sales(&by_region)).unwrap_or_default();
        let config_json = serde_json::to_string(&serde_json::json!({
            "title": "Total Regional Sales",
            "orientation": "horizontal",
            "tickPrefix": "$",
            "valueLabel": "Sales",
            "barColor": "#1565C0",
            "transitionMs": TRANSITION_MS,
        }))
        .unwrap_or_default();

        js_bridge::render_bar_chart(SALES_CHART_ID, &data_json, &config_json);
    });

    // Total units summary line
    use_effect(move || {
        let table = match &*state.table.read() {
            Some(table) => table.clone(),
            None => return,
        };
        let range = match parse_range(&(state.start_date)(), &(state.end_date)()) {
            Some(range) => range,
            None => return,
        };

        let subset = filter::by_date_range(&table, range);
        state.total_units.set(aggregate::total_units(&subset));
    });

    // Unit share pie chart
    use_effect(move || {
        let table = match &*state.table.read() {
            Some(table) => table.clone(),
            None => return,
        };
        let range = match parse_range(&(state.start_date)(), &(state.end_date)()) {
            Some(range) => range,
            None => return,
        };

        let subset = filter::by_date_range(&table, range);
        let units = aggregate::units_by_region(&subset);
        if units.is_empty() {
            js_bridge::destroy_chart(UNITS_CHART_ID);
            return;
        }

        let data_json = serde_json::to_string(&series::from_units(&units)).unwrap_or_default();
        let config_json = serde_json::to_string(&serde_json::json!({
            "title": "Units Sold by Region",
            "transitionMs": TRANSITION_MS,
        }))
        .unwrap_or_default();

        js_bridge::render_pie_chart(UNITS_CHART_ID, &data_json, &config_json);
    });

    // Color breakdown for the selected region
    use_effect(move || {
        let table = match &*state.table.read() {
            Some(table) => table.clone(),
            None => return,
        };
        let range = match parse_range(&(state.start_date)(), &(state.end_date)()) {
            Some(range) => range,
            None => return,
        };
        let region = (state.selected_region)();
        if region.is_empty() {
            return;
        }

        let subset = filter::by_date_range(&table, range);
        let colors = aggregate::units_by_color(&subset, &region);
        if colors.is_empty() {
            js_bridge::destroy_chart(COLOR_CHART_ID);
            return;
        }

        let data_json = serde_json::to_string(&series::from_units(&colors)).unwrap_or_default();
        let config_json = serde_json::to_string(&serde_json::json!({
            "title": format!("Units by Color in {}", region),
            "orientation": "vertical",
            "valueLabel": "Units",
            "barColor": "#2E7D32",
            "transitionMs": TRANSITION_MS,
        }))
        .unwrap_or_default();

        js_bridge::render_bar_chart(COLOR_CHART_ID, &data_json, &config_json);
    });

    let total_units = (state.total_units)();

    rsx! {
        div {
            style: "padding: 16px; font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;",

            div {
                style: "display: flex; justify-content: center;",
                h2 { "Colored Paper Sales Analytics Dashboard" }
            }

            if let Some(err) = (state.error_msg)() {
                ErrorDisplay { message: err }
            } else if (state.loading)() {
                LoadingSpinner {}
            } else {
                div {
                    style: "display: flex; justify-content: center;",
                    DateRangePicker {}
                }

                div {
                    style: "display: flex; flex-wrap: wrap; gap: 24px;",

                    div {
                        style: "flex: 1; min-width: 320px;",
                        ChartHeader {
                            title: "Percentage of Total Units Sold By Region".to_string(),
                        }
                        h4 {
                            style: "margin: 4px 0;",
                            "{total_units} Units Sold in Total Over this Time Period"
                        }
                        ChartContainer {
                            id: UNITS_CHART_ID.to_string(),
                            loading: false,
                            min_height: 360,
                        }
                    }

                    div {
                        style: "flex: 1; min-width: 320px;",
                        ChartHeader {
                            title: "Color Sold by Region".to_string(),
                        }
                        RegionSelector {}
                        ChartContainer {
                            id: COLOR_CHART_ID.to_string(),
                            loading: false,
                            min_height: 360,
                        }
                    }
                }

                div {
                    style: "margin-top: 16px;",
                    ChartHeader {
                        title: "Total Regional Sales".to_string(),
                        unit_description: "US Dollars ($)".to_string(),
                    }
                    ChartContainer {
                        id: SALES_CHART_ID.to_string(),
                        loading: false,
                        min_height: 400,
                    }
                }
            }
        }
    }
}
