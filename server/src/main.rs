mod config;
mod error;
mod handlers;
mod routes;
mod state;

use std::sync::Arc;

use anyhow::Context;
use article_parser::observability::{init_logging, LogConfig};
use article_parser::HttpFetcher;
use axum::Router;
use clap::Parser;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;

use config::Config;
use routes::parse::parse_routes;
use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = Config::parse();

    init_logging(LogConfig {
        format: config.log_format,
        default_filter: "info,tower_http=debug",
    })?;

    let fetcher = HttpFetcher::new(&config.fetch_config())?;
    let state = AppState::new(Arc::new(fetcher));

    let app = Router::new()
        .merge(parse_routes(state))
        .layer(TraceLayer::new_for_http())
        .layer(config.cors_layer()?);

    let listener = TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;
    info!(addr = %config.bind_addr, "listening");
    axum::serve(listener, app).await?;
    Ok(())
}
