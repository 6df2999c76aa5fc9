//! Gap Minder Analysis of Germany
//!
//! Single-page dashboard over the gapminder dataset: a Germany table, a
//! country/year-filtered bar chart, a Germany life-expectancy line chart and
//! an animated choropleth of the three dashboard countries.
//!
//! Data flow:
//! 1. `gmd-data` embeds `fixtures/gapminder.csv` at compile time.
//! 2. On mount, the CSV is loaded into an in-memory SQLite database and the
//!    static views (table, line, map) are built once.
//! 3. The country dropdown and year slider write to two signals. A memo
//!    combines them into a `ControlState`; the bar-chart effect re-runs only
//!    when that snapshot changes and replaces the figure in the bar slot.

use anyhow::Context;
use dioxus::prelude::*;
use gmd_chart_ui::components::{
    ChartContainer, CountryBanner, CountrySelector, DataTable, ErrorDisplay, LoadingSpinner,
    PageHeader, YearRangeSlider,
};
use gmd_chart_ui::js_bridge;
use gmd_chart_ui::state::AppState;
use gmd_db::Database;
use gmd_figures::binder::update_bar_chart;
use gmd_figures::views::{StaticViews, PROFILE_COUNTRY};

const BAR_CHART_ID: &str = "life-exp-bar-chart";
const LINE_CHART_ID: &str = "life-exp-line-chart";
const MAP_CHART_ID: &str = "life-exp-map";

const PAGE_TITLE: &str = "Gap Minder Analysis of Germany";
const PAGE_DESCRIPTION: &str = "Using the gapminder data we take a look at Germany's profile";

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("gapminder-root"))
        .launch(App);
}

/// Load the embedded dataset and build everything that never changes.
fn load_dashboard() -> anyhow::Result<(Database, StaticViews)> {
    let db = Database::with_gapminder().context("Failed to load gapminder data")?;
    let views = StaticViews::build(&db).context("Failed to build dashboard views")?;
    Ok((db, views))
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);

    // ─── Effect 1: load dataset and static views once on mount ───
    use_effect(move || {
        match load_dashboard() {
            Ok((db, views)) => {
                state.views.set(Some(views));
                state.db.set(Some(db));
                js_bridge::init_charts();
            }
            Err(e) => {
                log::error!("[GMD] {:#}", e);
                state.error_msg.set(Some(format!("{:#}", e)));
            }
        }
        state.loading.set(false);
    });

    // ─── Effect 2: render the static line chart and map ───
    // Runs once the views exist; nothing it reads changes afterwards.
    use_effect(move || {
        if (state.loading)() {
            return;
        }
        let Some(views) = state.views.read().clone() else {
            return;
        };
        for (id, figure) in [(LINE_CHART_ID, &views.line), (MAP_CHART_ID, &views.map)] {
            match figure.to_json() {
                Ok(json) => js_bridge::render_figure(id, &json),
                Err(e) => log::error!("[GMD] failed to serialize {}: {}", id, e),
            }
        }
    });

    // ─── Binder: control state -> bar chart ───
    // The memo only notifies when the (country, years) snapshot actually
    // changes, so the effect runs once per distinct combination.
    let controls = use_memo(move || state.controls());

    use_effect(move || {
        let controls = controls();
        if (state.loading)() {
            return;
        }
        let Some(db) = state.db.read().clone() else {
            return;
        };

        match update_bar_chart(&db, &controls).and_then(|fig| fig.to_json()) {
            Ok(json) => js_bridge::render_figure(BAR_CHART_ID, &json),
            Err(e) => {
                log::error!("[GMD] bar chart update failed: {:#}", e);
                js_bridge::destroy_chart(BAR_CHART_ID);
            }
        }
    });

    // ─── Render ───
    let table = state.views.read().as_ref().map(|v| v.table.clone());

    rsx! {
        div {
            style: "padding: 8px 0 32px 0; font-family: system-ui, -apple-system, sans-serif; background-color: #222222; color: white; min-height: 100vh;",

            PageHeader {
                title: PAGE_TITLE.to_string(),
                description: PAGE_DESCRIPTION.to_string(),
            }

            div {
                CountryBanner { name: PROFILE_COUNTRY.name().to_string() }

                if let Some(err) = (state.error_msg)() {
                    ErrorDisplay { message: err }
                } else if (state.loading)() {
                    LoadingSpinner {}
                } else {
                    if let Some(model) = table {
                        DataTable { model }
                    }

                    YearRangeSlider {}
                    CountrySelector {}

                    ChartContainer {
                        id: BAR_CHART_ID.to_string(),
                        min_height: 300,
                    }
                    ChartContainer {
                        id: LINE_CHART_ID.to_string(),
                        min_height: 300,
                    }
                    ChartContainer {
                        id: MAP_CHART_ID.to_string(),
                        min_height: 450,
                    }
                }
            }
        }
    }
}
