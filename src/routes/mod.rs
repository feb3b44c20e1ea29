pub mod register;
pub mod submit;

use axum::Router;
use axum::routing::post;

use crate::state::SharedState;

pub fn api_routes() -> Router<SharedState> {
    Router::new()
        .route("/api/register", post(register::register))
        .route("/api/submit", post(submit::submit))
}
