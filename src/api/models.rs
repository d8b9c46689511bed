use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Inbound body. `question` stays untyped so a wrong type is reported as a
/// validation error instead of an extractor rejection.
#[derive(Debug, Default, Deserialize)]
pub struct AskRequest {
    #[serde(default)]
    pub question: Option<Value>,
}

#[derive(Debug, Serialize)]
pub struct AskResponse {
    pub answer: String,
    pub apod: Option<Value>,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
