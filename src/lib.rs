pub mod config;
pub mod error;
pub mod models;
pub mod routes;
pub mod sheets;
pub mod state;

use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::http::{HeaderName, HeaderValue};
use tower_http::services::ServeDir;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

use crate::state::SharedState;

pub fn build_app(state: SharedState) -> Router {
    let body_limit = DefaultBodyLimit::max(state.config.max_body_size);

    Router::new()
        .merge(routes::api_routes())
        .route("/health", axum::routing::get(health))
        // Static assets (registration/submission pages) from the working dir
        .fallback_service(ServeDir::new("."))
        .layer(body_limit)
        .layer(TraceLayer::new_for_http())
        .layer(SetResponseHeaderLayer::overriding(
            HeaderName::from_static("x-content-type-options"),
            HeaderValue::from_static("nosniff"),
        ))
        .with_state(state)
}

async fn health() -> &'static str {
    "ok"
}
