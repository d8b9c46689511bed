//! Caller-visible failures of an ask and their HTTP mapping.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::api::ErrorResponse;

#[derive(Debug, Error)]
pub enum AskError {
    #[error("Method not allowed")]
    MethodNotAllowed,

    #[error("Missing question (string expected)")]
    MissingQuestion,

    #[error("Empty question")]
    EmptyQuestion,

    #[error("OpenAI API key not configured (OPENAI_API_KEY)")]
    MissingApiKey,

    #[error("OpenAI API returned an error")]
    Upstream { status: u16 },

    /// Detail is for the log only; the caller sees a generic message.
    #[error("Internal server error")]
    Internal(String),
}

impl AskError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Self::MissingQuestion | Self::EmptyQuestion => StatusCode::BAD_REQUEST,
            Self::MissingApiKey | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Upstream { .. } => StatusCode::BAD_GATEWAY,
        }
    }
}

impl IntoResponse for AskError {
    fn into_response(self) -> Response {
        (
            self.status(),
            Json(ErrorResponse {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
