//! Single-attempt JSON fetching with uniform error collapsing

use reqwest::Client;
use serde_json::Value;
use tracing::{debug, error, info, instrument};

use crate::error::AppError;

/// Fetches `url` once and parses the body as JSON.
///
/// Transport errors, timeouts, non-success statuses and unparsable bodies are
/// all reported as [`AppError::UpstreamUnavailable`]; the specific cause is only
/// logged. No retries are attempted.
#[instrument(skip(client))]
pub async fn fetch_json(client: &Client, url: &str) -> Result<Value, AppError> {
    info!("Fetching data from URL: {url}");

    let response = client.get(url).send().await.map_err(|e| {
        if e.is_timeout() {
            error!("Request timed out for URL {}: {}", url, e);
        } else if e.is_connect() {
            error!("Connection failed for URL {}: {}", url, e);
        } else {
            error!("Request failed for URL {}: {}", url, e);
        }
        AppError::upstream_unavailable(url)
    })?;

    let status = response.status();
    debug!("Response status: {status}");

    if !status.is_success() {
        let reason = status.canonical_reason().unwrap_or("Unknown error");
        error!("HTTP {} - {} (URL: {})", status.as_u16(), reason, url);
        return Err(AppError::upstream_unavailable(url));
    }

    let response_text = response.text().await.map_err(|e| {
        error!("Failed to read response text from URL {}: {}", url, e);
        AppError::upstream_unavailable(url)
    })?;

    debug!("Response length: {} bytes", response_text.len());

    serde_json::from_str::<Value>(&response_text).map_err(|e| {
        error!("Failed to parse API response: {} (URL: {})", e, url);
        error!(
            "Response text (first 200 chars): {}",
            &response_text.chars().take(200).collect::<String>()
        );
        AppError::upstream_unavailable(url)
    })
}
