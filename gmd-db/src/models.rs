//! Query result models.
//!
//! All structs derive `Serialize` so they can be handed to Plotly or the
//! HTTP API as JSON.

use serde::Serialize;

/// One row of the Germany table: the four numeric gapminder columns.
///
/// Field names serialize to the gapminder column ids so the table's column
/// definitions can reference them directly.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TableRow {
    pub year: i32,
    #[serde(rename = "lifeExp")]
    pub life_exp: f64,
    pub pop: i64,
    #[serde(rename = "gdpPercap")]
    pub gdp_percap: f64,
}
