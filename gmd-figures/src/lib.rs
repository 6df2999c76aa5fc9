//! Plotly figure builders for the Gap Minder dashboard.
//!
//! Figures are plain serializable descriptions in the plotly.js JSON schema
//! (`{data, layout, frames}`); the browser side hands them to `Plotly.react`
//! unchanged. Every builder is a pure function of its input records plus
//! the fixed styling in [`theme`].
//!
//! - [`bar`]: grouped life-expectancy bars, one group per country
//! - [`line`]: life-expectancy line with markers
//! - [`choropleth`]: animated life-expectancy map over Europe
//! - [`table`]: column definitions and styles for the data table
//! - [`binder`]: control state -> bar figure, the dashboard's one callback
//! - [`views`]: the static figures built once at startup

pub mod bar;
pub mod binder;
pub mod choropleth;
pub mod figure;
pub mod line;
pub mod table;
pub mod theme;
pub mod views;

pub use figure::Figure;
