use std::net::SocketAddr;
use std::time::Duration;

use anyhow::Context;
use article_parser::observability::LogFormat;
use article_parser::FetchConfig;
use axum::http::{header, HeaderValue, Method};
use clap::Parser;
use tower_http::cors::{Any, CorsLayer};

/// Server settings, read from flags or the environment (`.env` included).
#[derive(Parser, Debug, Clone)]
#[command(name = "server", version, about = "HTTP front for the article parser")]
pub struct Config {
    /// Address to listen on
    #[arg(long, env = "BIND_ADDR", default_value = "127.0.0.1:3000")]
    pub bind_addr: SocketAddr,

    /// Origin allowed by CORS; any origin when unset
    #[arg(long, env = "CLIENT_URL")]
    pub client_url: Option<String>,

    /// Upper bound on fetching one page, in seconds
    #[arg(long, env = "FETCH_TIMEOUT_SECS", default_value_t = 30)]
    pub fetch_timeout_secs: u64,

    /// Log encoding: text or json
    #[arg(long, env = "LOG_FORMAT", default_value = "text")]
    pub log_format: LogFormat,
}

impl Config {
    pub fn fetch_config(&self) -> FetchConfig {
        FetchConfig::default().with_timeout(Duration::from_secs(self.fetch_timeout_secs))
    }

    pub fn cors_layer(&self) -> anyhow::Result<CorsLayer> {
        let cors = CorsLayer::new()
            .allow_methods([Method::POST, Method::OPTIONS])
            .allow_headers([header::CONTENT_TYPE]);

        Ok(match &self.client_url {
            Some(origin) => cors.allow_origin(
                origin
                    .parse::<HeaderValue>()
                    .with_context(|| format!("CLIENT_URL is not a valid origin: {origin}"))?,
            ),
            None => cors.allow_origin(Any),
        })
    }
}
