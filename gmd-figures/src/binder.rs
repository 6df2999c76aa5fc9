//! The dashboard's single reactive update rule.
//!
//! When the country dropdown or the year slider changes, the bar chart is
//! recomputed from the dataset filtered by both controls and replaces the
//! figure in its slot. The update is a pure function of the control state:
//! running it twice with the same state yields the same figure.

use crate::bar::life_expectancy_bars;
use crate::figure::Figure;
use gmd_data::ControlState;
use gmd_db::Database;

/// Recompute the bar chart for `controls`.
///
/// Filters to `country == controls.country` and
/// `controls.years.low() <= year <= controls.years.high()`. A combination
/// with no data yields an empty but fully styled chart.
pub fn update_bar_chart(db: &Database, controls: &ControlState) -> anyhow::Result<Figure> {
    let records = db.query_country_years(controls.country, controls.years)?;
    log::info!(
        "[GMD] binder: {} {}..={} -> {} bars",
        controls.country,
        controls.years.low(),
        controls.years.high(),
        records.len()
    );
    Ok(life_expectancy_bars(&records))
}
