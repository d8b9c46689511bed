use axum::{
    body::Bytes,
    extract::State,
    http::{header::CONTENT_TYPE, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::Value;

use crate::apod::fetch_apod;
use crate::error::AskError;
use crate::openai::{OpenAiClient, OpenAiError};
use crate::AppState;

use super::models::{AskRequest, AskResponse, ErrorResponse};

/// `POST /api/ask`
///
/// Validation and configuration are checked before any outbound call. The
/// answer call is mandatory; the APOD lookup only runs after it succeeds and
/// can never fail the request.
#[tracing::instrument(name = "ask", skip_all)]
pub async fn ask(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<AskResponse>, AskError> {
    if !is_json(&headers) {
        return Err(AskError::MissingQuestion);
    }
    let question = parse_question(&body)?;

    let api_key = state
        .config
        .openai_api_key
        .as_deref()
        .ok_or(AskError::MissingApiKey)?;

    let client = OpenAiClient {
        http: &state.http,
        base_url: &state.config.openai_base_url,
        model: &state.config.openai_model,
        api_key,
    };

    let answer = client.ask(&question).await.map_err(|err| match err {
        OpenAiError::Status { status, body } => {
            tracing::error!(status, body = %body, "OpenAI error");
            AskError::Upstream { status }
        }
        other => {
            tracing::error!(error = %other, "Server error");
            AskError::Internal(other.to_string())
        }
    })?;
    tracing::debug!(chars = answer.len(), "answer received");

    let apod = fetch_apod(
        &state.http,
        &state.config.apod_url,
        state.config.nasa_api_key.as_deref(),
    )
    .await;

    Ok(Json(AskResponse { answer, apod }))
}

/// Returns the trimmed question or the matching validation error.
pub fn parse_question(body: &[u8]) -> Result<String, AskError> {
    let request: AskRequest = serde_json::from_slice(body).unwrap_or_default();

    let question = match request.question {
        Some(Value::String(question)) if !question.is_empty() => question,
        _ => return Err(AskError::MissingQuestion),
    };

    let trimmed = question.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}');
    if trimmed.is_empty() {
        return Err(AskError::EmptyQuestion);
    }

    Ok(trimmed.to_string())
}

/// Only `application/json` and `+json` bodies carry a question; anything else
/// is treated as if the field were absent.
fn is_json(headers: &HeaderMap) -> bool {
    headers
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(';').next())
        .map(|mime| {
            let mime = mime.trim().to_ascii_lowercase();
            mime == "application/json" || mime.ends_with("+json")
        })
        .unwrap_or(false)
}

pub async fn method_not_allowed() -> AskError {
    AskError::MethodNotAllowed
}

pub async fn not_found() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse {
            error: "Not found".to_string(),
        }),
    )
        .into_response()
}
