//! gmd-serve - HTTP entry point for the Gap Minder dashboard.
//!
//! Serves the built Dioxus bundle and a small JSON API exposing the same
//! figures the page renders, including the country/year bar-chart binder.

mod cli;
mod error;
mod http_server;

use std::net::SocketAddr;

use clap::Parser;
use gmd_db::Database;

use crate::cli::Args;
use crate::http_server::{AppState, Server};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let db = Database::with_gapminder()?;
    if let Some((first, last)) = db.query_year_span()? {
        log::info!("[GMD] gapminder data spans {}..={}", first, last);
    }
    let state = AppState::new(db)?;
    if !args.dist.join("index.html").exists() {
        log::warn!(
            "[GMD] no index.html in {}; only the API will respond",
            args.dist.display()
        );
    }

    let server = Server::new(state, &args.dist);
    server.run(SocketAddr::new(args.host, args.port)).await
}
