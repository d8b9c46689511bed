use std::env;

pub const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_OPENAI_MODEL: &str = "gpt-4o-mini";
pub const DEFAULT_APOD_URL: &str = "https://api.nasa.gov/planetary/apod";

/// Process configuration, read once at startup.
///
/// | Variable          | Default                                       |
/// |-------------------|-----------------------------------------------|
/// | `PORT`            | `3000`                                        |
/// | `OPENAI_API_KEY`  | unset (asks fail with 500)                    |
/// | `OPENAI_BASE_URL` | `https://api.openai.com/v1`                   |
/// | `OPENAI_MODEL`    | `gpt-4o-mini`                                 |
/// | `NASA_API_KEY`    | unset (imagery disabled)                      |
/// | `NASA_APOD_URL`   | `https://api.nasa.gov/planetary/apod`         |
#[derive(Clone, Debug)]
pub struct AppConfig {
    pub port: u16,
    pub openai_api_key: Option<String>,
    /// API root; `/chat/completions` is appended per call.
    pub openai_base_url: String,
    pub openai_model: String,
    pub nasa_api_key: Option<String>,
    pub apod_url: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let port = env::var("PORT")
            .ok()
            .and_then(|value| value.parse::<u16>().ok())
            .unwrap_or(3000);

        Self {
            port,
            openai_api_key: non_empty_var("OPENAI_API_KEY"),
            openai_base_url: env::var("OPENAI_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_OPENAI_BASE_URL.to_string()),
            openai_model: env::var("OPENAI_MODEL")
                .unwrap_or_else(|_| DEFAULT_OPENAI_MODEL.to_string()),
            nasa_api_key: non_empty_var("NASA_API_KEY"),
            apod_url: env::var("NASA_APOD_URL").unwrap_or_else(|_| DEFAULT_APOD_URL.to_string()),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: 3000,
            openai_api_key: None,
            openai_base_url: DEFAULT_OPENAI_BASE_URL.to_string(),
            openai_model: DEFAULT_OPENAI_MODEL.to_string(),
            nasa_api_key: None,
            apod_url: DEFAULT_APOD_URL.to_string(),
        }
    }
}

// An exported-but-empty credential is treated as missing.
fn non_empty_var(name: &str) -> Option<String> {
    env::var(name)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}
