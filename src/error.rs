use thiserror::Error;

/// Errors surfaced by lyric generation.
///
/// Rendering and instruction building never fail; only validation of the
/// incoming request and the provider call itself produce these.
#[derive(Debug, Error)]
pub enum LyricError {
    /// A required provider setting (usually the API key) is missing.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// The text-generation provider failed or timed out.
    #[error("provider error: {0}")]
    Provider(String),

    /// The request is malformed for the requested operation.
    #[error("invalid request: {0}")]
    Validation(String),
}

impl From<reqwest::Error> for LyricError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            LyricError::Provider(format!("request timed out: {err}"))
        } else {
            LyricError::Provider(err.to_string())
        }
    }
}

impl From<serde_json::Error> for LyricError {
    fn from(err: serde_json::Error) -> Self {
        LyricError::Validation(err.to_string())
    }
}
