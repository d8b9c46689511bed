//! NASA Astronomy Picture of the Day lookup.
//!
//! Imagery is decoration: every failure here ends as `None` plus a warning,
//! never as an error seen by the caller.

use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApodError {
    #[error("NASA API non-OK status {0}")]
    Status(u16),

    #[error("NASA fetch failed: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("NASA response was not JSON: {0}")]
    Decode(#[source] reqwest::Error),
}

/// Returns today's APOD record verbatim, or `None` when no key is configured
/// or the lookup fails for any reason.
pub async fn fetch_apod(
    http: &reqwest::Client,
    url: &str,
    api_key: Option<&str>,
) -> Option<Value> {
    let api_key = api_key?;

    match try_fetch_apod(http, url, api_key).await {
        Ok(record) => Some(record),
        Err(err) => {
            tracing::warn!(error = %err, "APOD unavailable, answering without imagery");
            None
        }
    }
}

async fn try_fetch_apod(
    http: &reqwest::Client,
    url: &str,
    api_key: &str,
) -> Result<Value, ApodError> {
    let response = http
        .get(url)
        .query(&[("api_key", api_key)])
        .send()
        .await
        .map_err(ApodError::Transport)?;

    if !response.status().is_success() {
        return Err(ApodError::Status(response.status().as_u16()));
    }

    response.json::<Value>().await.map_err(ApodError::Decode)
}
