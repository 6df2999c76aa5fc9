use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;

use axum::{
    extract::{Query, State},
    routing::get,
    Json,
};
use gmd_data::{ControlState, Country, Record, YearRange};
use gmd_db::Database;
use gmd_figures::{binder, table::TableModel, views::StaticViews, Figure};
use serde::Deserialize;
use tower_http::services::{ServeDir, ServeFile};

use crate::error::ApiError;

#[derive(Clone)]
pub struct AppState {
    db: Database,
    views: Arc<StaticViews>,
}

impl AppState {
    pub fn new(db: Database) -> anyhow::Result<Self> {
        let views = StaticViews::build(&db)?;
        Ok(Self {
            db,
            views: Arc::new(views),
        })
    }
}

/// Query string of the bar-chart endpoint. Missing values fall back to the
/// dashboard's initial widget values.
#[derive(Debug, Default, Deserialize)]
pub struct BarQuery {
    pub country: Option<String>,
    pub start: Option<i32>,
    pub end: Option<i32>,
}

impl BarQuery {
    fn controls(&self) -> Result<ControlState, ApiError> {
        let defaults = ControlState::default();
        let country = match &self.country {
            Some(name) => name.parse::<Country>()?,
            None => defaults.country,
        };
        let years = YearRange::new(
            self.start.unwrap_or(defaults.years.low()),
            self.end.unwrap_or(defaults.years.high()),
        );
        Ok(ControlState::new(country, years))
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct RecordsQuery {
    pub country: Option<String>,
}

async fn bar_figure(
    State(state): State<AppState>,
    Query(query): Query<BarQuery>,
) -> Result<Json<Figure>, ApiError> {
    let controls = query.controls()?;
    Ok(Json(binder::update_bar_chart(&state.db, &controls)?))
}

async fn line_figure(State(state): State<AppState>) -> Json<Figure> {
    Json(state.views.line.clone())
}

async fn map_figure(State(state): State<AppState>) -> Json<Figure> {
    Json(state.views.map.clone())
}

async fn table(State(state): State<AppState>) -> Json<TableModel> {
    Json(state.views.table.clone())
}

async fn records(
    State(state): State<AppState>,
    Query(query): Query<RecordsQuery>,
) -> Result<Json<Vec<Record>>, ApiError> {
    let rows = match &query.country {
        Some(name) => state.db.query_country(name.parse::<Country>()?)?,
        None => state.db.query_all()?,
    };
    Ok(Json(rows))
}

async fn healthz() -> &'static str {
    "ok"
}

pub struct Server {
    router: axum::Router,
}

impl Server {
    /// API routes plus the dashboard bundle in `dist`; unknown paths fall
    /// back to `index.html`.
    pub fn new(state: AppState, dist: &Path) -> Self {
        let bundle = ServeDir::new(dist).fallback(ServeFile::new(dist.join("index.html")));
        let router = Self::api_router()
            .with_state(state)
            .fallback_service(bundle);
        let router = Self::add_common_layers(router);
        Self { router }
    }

    fn api_router() -> axum::Router<AppState> {
        axum::Router::new()
            .route("/api/figures/bar", get(bar_figure))
            .route("/api/figures/line", get(line_figure))
            .route("/api/figures/map", get(map_figure))
            .route("/api/table", get(table))
            .route("/api/records", get(records))
            .route("/healthz", get(healthz))
    }

    pub async fn run(self, addr: SocketAddr) -> anyhow::Result<()> {
        let listener = tokio::net::TcpListener::bind(addr).await?;
        log::info!("[GMD] serving dashboard on http://{}", listener.local_addr()?);
        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;
        log::info!("[GMD] server stopped");
        Ok(())
    }

    fn add_common_layers(router: axum::Router) -> axum::Router {
        router.layer(tower_http::catch_panic::CatchPanicLayer::new())
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        log::warn!("[GMD] failed to listen for ctrl-c: {}", e);
        std::future::pending::<()>().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::response::IntoResponse;
    use gmd_figures::figure::Trace;

    fn state() -> AppState {
        AppState::new(Database::with_gapminder().unwrap()).unwrap()
    }

    fn bar_years(fig: &Figure) -> Vec<i32> {
        fig.data
            .iter()
            .flat_map(|t| match t {
                Trace::Bar(bar) => bar.x.clone(),
                _ => Vec::new(),
            })
            .collect()
    }

    #[tokio::test]
    async fn bar_figure_filters_by_query() {
        let query = BarQuery {
            country: Some("Belgium".to_string()),
            start: Some(1987),
            end: Some(2007),
        };
        let Json(fig) = bar_figure(State(state()), Query(query)).await.unwrap();
        assert_eq!(bar_years(&fig), vec![1987, 1992, 1997, 2002, 2007]);
    }

    #[tokio::test]
    async fn bar_figure_defaults_to_initial_controls() {
        let Json(fig) = bar_figure(State(state()), Query(BarQuery::default()))
            .await
            .unwrap();
        let Trace::Bar(bar) = &fig.data[0] else {
            panic!("expected a bar trace");
        };
        assert_eq!(bar.name, "Belgium");
        assert_eq!(bar.x, vec![1987, 1992, 1997, 2002, 2007]);
    }

    #[tokio::test]
    async fn bar_figure_swaps_reversed_range() {
        let query = BarQuery {
            country: Some("Germany".to_string()),
            start: Some(1957),
            end: Some(1952),
        };
        let Json(fig) = bar_figure(State(state()), Query(query)).await.unwrap();
        assert_eq!(bar_years(&fig), vec![1952, 1957]);
    }

    #[tokio::test]
    async fn bar_figure_out_of_span_is_empty() {
        let query = BarQuery {
            country: Some("Denmark".to_string()),
            start: Some(2010),
            end: Some(2020),
        };
        let Json(fig) = bar_figure(State(state()), Query(query)).await.unwrap();
        assert!(fig.data.is_empty());
    }

    #[tokio::test]
    async fn bar_figure_rejects_unknown_country() {
        let query = BarQuery {
            country: Some("Atlantis".to_string()),
            ..Default::default()
        };
        let err = bar_figure(State(state()), Query(query)).await.unwrap_err();
        assert_eq!(
            err.into_response().status(),
            axum::http::StatusCode::BAD_REQUEST
        );
    }

    #[tokio::test]
    async fn static_endpoints_serve_prebuilt_views() {
        let state = state();
        let Json(line) = line_figure(State(state.clone())).await;
        assert_eq!(line, state.views.line);
        let Json(map) = map_figure(State(state.clone())).await;
        assert_eq!(map.frames.len(), 12);
        let Json(model) = table(State(state)).await;
        assert_eq!(model.data.len(), 12);
    }

    #[tokio::test]
    async fn records_endpoint_filters_by_country() {
        let Json(all) = records(State(state()), Query(RecordsQuery::default()))
            .await
            .unwrap();
        assert_eq!(all.len(), 36);

        let query = RecordsQuery {
            country: Some("Denmark".to_string()),
        };
        let Json(denmark) = records(State(state()), Query(query)).await.unwrap();
        assert_eq!(denmark.len(), 12);
        assert!(denmark
            .iter()
            .all(|r| r.iso_alpha == Country::Denmark.iso_alpha()));
    }

    #[tokio::test]
    async fn healthz_is_ok() {
        assert_eq!(healthz().await, "ok");
    }

    #[test]
    fn server_builds_with_missing_bundle_dir() {
        let _server = Server::new(state(), Path::new("does-not-exist"));
    }
}
