//! Dropdown selector for choosing a region.

use crate::state::AppState;
use dioxus::prelude::*;

/// Region dropdown selector.
/// Reads available regions from AppState and updates selected_region on change.
#[component]
pub fn RegionSelector() -> Element {
    let mut state = use_context::<AppState>();
    let regions = state.regions.read().clone();
    let selected = (state.selected_region)();

    let on_change = move |evt: Event<FormData>| {
        let value = evt.value();
        state.selected_region.set(value);
    };

    rsx! {
        div {
            style: "margin: 8px 0;",
            label {
                r#for: "region-select",
                style: "font-weight: bold; margin-right: 8px;",
                "Region: "
            }
            select {
                id: "region-select",
                onchange: on_change,
                for region in regions.iter() {
                    option {
                        value: "{region}",
                        selected: *region == selected,
                        "{region}"
                    }
                }
            }
        }
    }
}
