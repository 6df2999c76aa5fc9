//! Application state managed via Dioxus context.
//!
//! `AppState` bundles all reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with `use_context::<AppState>()`.
//! The two control signals (`country`, `years`) are the only state mutated by
//! user interaction.

use dioxus::prelude::*;
use gmd_data::{ControlState, Country, YearRange};
use gmd_db::Database;
use gmd_figures::views::StaticViews;

#[derive(Clone, Copy)]
pub struct AppState {
    /// Dataset handle (None until loaded)
    pub db: Signal<Option<Database>>,
    /// Table, line chart and map, built once after the dataset loads
    pub views: Signal<Option<StaticViews>>,
    /// Whether the app is still loading
    pub loading: Signal<bool>,
    /// Error message if something went wrong
    pub error_msg: Signal<Option<String>>,
    /// Country dropdown value
    pub country: Signal<Country>,
    /// Year range slider value, always normalized (low <= high)
    pub years: Signal<YearRange>,
}

impl AppState {
    /// Create a new AppState with the initial widget values.
    pub fn new() -> Self {
        let controls = ControlState::default();
        Self {
            db: Signal::new(None),
            views: Signal::new(None),
            loading: Signal::new(true),
            error_msg: Signal::new(None),
            country: Signal::new(controls.country),
            years: Signal::new(controls.years),
        }
    }

    /// Snapshot of the current control values. Reading subscribes the
    /// calling scope to both control signals.
    pub fn controls(&self) -> ControlState {
        ControlState::new((self.country)(), (self.years)())
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
