//! Reusable Dioxus RSX components for the Gap Minder dashboard.

mod chart_container;
mod country_selector;
mod data_table;
mod error_display;
mod loading_spinner;
mod page_header;
mod year_range_slider;

pub use chart_container::ChartContainer;
pub use country_selector::CountrySelector;
pub use data_table::DataTable;
pub use error_display::ErrorDisplay;
pub use loading_spinner::LoadingSpinner;
pub use page_header::{CountryBanner, PageHeader};
pub use year_range_slider::YearRangeSlider;
