// crates/riskglobe-core/src/error.rs
use thiserror::Error;

/// Errors produced while loading or interpreting globe data.
///
/// Missing or invalid scores are *not* errors: they fall back to the default
/// color and an empty detail string. Everything here concerns documents that
/// could not be read at all.
#[derive(Debug, Error)]
pub enum GlobeError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[cfg(feature = "json")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid data: {0}")]
    InvalidData(String),

    /// The request never produced a response (DNS, CORS, offline).
    #[error("Network error: {0}")]
    Network(String),

    #[cfg(feature = "fetch")]
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

pub type Result<T> = std::result::Result<T, GlobeError>;
