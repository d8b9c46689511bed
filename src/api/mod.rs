mod handlers;
mod models;

use axum::{routing::post, Router};

use crate::AppState;

pub use handlers::{ask, method_not_allowed, not_found, parse_question};
pub use models::{AskRequest, AskResponse, ErrorResponse};

pub const ASK_PATH: &str = "/api/ask";

pub fn router(state: AppState) -> Router {
    Router::new()
        .route(ASK_PATH, post(ask).fallback(method_not_allowed))
        .fallback(not_found)
        .with_state(state)
}
