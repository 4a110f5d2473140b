//! Shared Dioxus components and D3.js bridge for the sales dashboards.
//!
//! This crate provides:
//! - `js_bridge`: Rust wrappers for D3.js chart functions via `js_sys::eval()`
//! - `state`: Reactive AppState with Dioxus Signals
//! - `series`: Serializable chart series models
//! - `components`: Reusable RSX components (pickers, containers, etc.)

pub mod components;
pub mod js_bridge;
pub mod series;
pub mod state;
