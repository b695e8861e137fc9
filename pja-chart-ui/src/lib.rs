//! Shared Dioxus components and JS bridge for the youth panel.
//!
//! This crate provides:
//! - `js_bridge`: Rust wrappers for Leaflet and Chart.js via `js_sys::eval()`
//! - `state`: Reactive AppState with Dioxus Signals
//! - `chart_config` / `map_render`: pure builders turning API payloads into
//!   the JSON handed across the bridge
//! - `components`: Reusable RSX components (filters, cards, containers)

pub mod chart_config;
pub mod components;
pub mod js_bridge;
pub mod map_render;
pub mod state;
