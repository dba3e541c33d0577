//! Client for the remote sentiment analysis endpoint (`POST {base}/analyze`).

use std::time::Duration;

use serde_json::Value;

use crate::config::DEFAULT_REQUEST_TIMEOUT_SECS;
use crate::http_client;

/// Path appended to the configured base URL.
pub const ANALYZE_PATH: &str = "/analyze";
/// Deadline for the whole analyze call; inference over a comment batch is slow.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS);

pub(crate) const MAX_PAYLOAD_BYTES: usize = 32 * 1024 * 1024;
pub(crate) const MAX_ERROR_BODY_BYTES: usize = 64 * 1024;

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// The base URL was blank once whitespace and trailing slashes were removed.
    #[error("Base URL must not be empty")]
    EmptyBaseUrl,
    /// The server answered with a non-2xx status.
    #[error("HTTP {status}")]
    Http { status: u16, body: String },
    /// The request never produced a response (timeout, refused, DNS).
    #[error("HTTP error: {0}")]
    Transport(String),
    /// The response body could not be read or decoded as JSON.
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

impl FetchError {
    /// Single inline message shown to the user.
    pub fn user_message(&self) -> String {
        match self {
            Self::EmptyBaseUrl => "Base URL must not be empty.".to_string(),
            Self::Http { status, body } if body.trim().is_empty() => {
                format!("Request failed: HTTP {status}")
            }
            Self::Http { status, body } => format!("Request failed: HTTP {status}\n{body}"),
            Self::Transport(message) | Self::InvalidResponse(message) => {
                format!("Failed to call API: {message}")
            }
        }
    }
}

/// Trim whitespace and trailing slashes; reject what is left if empty.
pub fn normalize_base_url(raw: &str) -> Result<String, FetchError> {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        return Err(FetchError::EmptyBaseUrl);
    }
    Ok(trimmed.to_string())
}

/// Full analyze URL for an already-normalized base.
pub fn analyze_endpoint(base_url: &str) -> String {
    format!("{base_url}{ANALYZE_PATH}")
}

/// Run the analysis on the server and return the decoded JSON payload.
///
/// The payload shape is not checked here; the presenter tolerates anything.
pub fn fetch_analysis(base_url: &str, timeout: Duration) -> Result<Value, FetchError> {
    let base = normalize_base_url(base_url)?;
    let endpoint = analyze_endpoint(&base);
    let parsed = url::Url::parse(&endpoint)
        .map_err(|err| FetchError::Transport(format!("Invalid URL {endpoint}: {err}")))?;
    tracing::info!(
        "Requesting analysis from {} (timeout {}s)",
        parsed.host_str().unwrap_or("unknown host"),
        timeout.as_secs()
    );

    let response = match http_client::agent()
        .post(parsed.as_str())
        .timeout(timeout)
        .set("Accept", "application/json")
        .call()
    {
        Ok(response) => response,
        Err(ureq::Error::Status(status, response)) => {
            let body = http_client::read_response_text(response, MAX_ERROR_BODY_BYTES);
            tracing::warn!("Analyze request failed with HTTP {status}");
            return Err(FetchError::Http { status, body });
        }
        Err(ureq::Error::Transport(err)) => {
            tracing::warn!("Analyze request failed: {err}");
            return Err(FetchError::Transport(err.to_string()));
        }
    };

    let bytes = http_client::read_response_bytes(response, MAX_PAYLOAD_BYTES)
        .map_err(|err| FetchError::InvalidResponse(err.to_string()))?;
    parse_payload(&bytes)
}

fn parse_payload(bytes: &[u8]) -> Result<Value, FetchError> {
    serde_json::from_slice(bytes).map_err(|err| FetchError::InvalidResponse(err.to_string()))
}
