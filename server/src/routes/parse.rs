use axum::{routing::post, Router};

use crate::handlers::parse_handlers::parse_url;
use crate::state::AppState;

pub fn parse_routes(state: AppState) -> Router {
    Router::new()
        .route("/parse", post(parse_url))
        .with_state(state)
}
