use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    // Request validation errors
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    // Upstream errors. Transport, status and parse failures all collapse into
    // UpstreamUnavailable; the URL and cause are only logged, never shown to clients.
    #[error("Upstream data provider unavailable")]
    UpstreamUnavailable { url: String },

    #[error("Upstream returned malformed data: {message}")]
    UpstreamDataMalformed { message: String },

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Log setup error: {0}")]
    LogSetup(String),
}

impl AppError {
    /// Create an invalid request error (bad date or season parameter)
    pub fn invalid_request(msg: impl Into<String>) -> Self {
        Self::InvalidRequest(msg.into())
    }

    /// Create an upstream unavailable error for the given URL
    pub fn upstream_unavailable(url: impl Into<String>) -> Self {
        Self::UpstreamUnavailable { url: url.into() }
    }

    /// Create a malformed upstream data error (empty or headerless result set)
    pub fn upstream_malformed(message: impl Into<String>) -> Self {
        Self::UpstreamDataMalformed {
            message: message.into(),
        }
    }

    /// Create a not found error
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    /// Create a configuration error with context
    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a log setup error with context
    pub fn log_setup_error(msg: impl Into<String>) -> Self {
        Self::LogSetup(msg.into())
    }

    /// HTTP status reported to gateway clients for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            AppError::UpstreamUnavailable { .. } | AppError::UpstreamDataMalformed { .. } => {
                StatusCode::BAD_GATEWAY
            }
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Check if the upstream answered but had nothing usable for the query.
    /// Season fallback only triggers on this condition.
    pub fn is_no_data(&self) -> bool {
        matches!(self, AppError::UpstreamDataMalformed { .. })
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        match &self {
            AppError::UpstreamUnavailable { url } => {
                tracing::warn!("Request failed with {}: {} ({})", status.as_u16(), self, url);
            }
            _ if status.is_server_error() => {
                tracing::warn!("Request failed with {}: {}", status.as_u16(), self);
            }
            _ => {}
        }
        (
            status,
            Json(json!({
                "error": self.to_string(),
                "status": status.as_u16(),
            })),
        )
            .into_response()
    }
}
