//! Shared Dioxus components and Plotly.js bridge for the Gap Minder dashboard.
//!
//! This crate provides:
//! - `js_bridge`: Rust wrappers that hand serialized figures to Plotly.js via `js_sys::eval()`
//! - `state`: Reactive AppState with Dioxus Signals (dataset handle + control values)
//! - `components`: Reusable RSX components (selectors, slider, table, containers)

pub mod js_bridge;
pub mod state;
pub mod components;
