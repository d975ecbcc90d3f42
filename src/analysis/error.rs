use std::path::PathBuf;

use thiserror::Error;

/// Errors from talking to the analysis service.
///
/// `Display` is the message shown to the user, so `Service` renders the
/// server's `detail` verbatim.
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("Invalid analysis service URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    #[error("Failed to build request: {0}")]
    Request(#[source] reqwest::Error),

    #[error("Failed to read image '{path}': {source}")]
    ReadImage {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Connection to analysis service failed: {0}")]
    Connection(#[source] reqwest::Error),

    /// Non-2xx response from the service.
    #[error("{message}")]
    Service { status: u16, message: String },

    #[error("Malformed analysis response: {0}")]
    MalformedResponse(String),
}

impl AnalysisError {
    /// Build the error for a non-2xx response.
    ///
    /// Uses the JSON `detail` string when there is a non-empty one, otherwise
    /// a generic message naming the status code.
    pub fn from_error_body(status: u16, body: &[u8]) -> Self {
        let detail = serde_json::from_slice::<serde_json::Value>(body)
            .ok()
            .and_then(|value| {
                value
                    .get("detail")
                    .and_then(|detail| detail.as_str())
                    .map(str::to_owned)
            })
            .filter(|detail| !detail.is_empty());

        AnalysisError::Service {
            status,
            message: detail.unwrap_or_else(|| format!("HTTP error, status {}", status)),
        }
    }

    /// HTTP status of the failed response, when there was one.
    pub fn status(&self) -> Option<u16> {
        match self {
            AnalysisError::Service { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn error_type(&self) -> &'static str {
        match self {
            AnalysisError::InvalidBaseUrl { .. } => "invalid_base_url",
            AnalysisError::Request(_) => "request_error",
            AnalysisError::ReadImage { .. } => "read_image",
            AnalysisError::Connection(_) => "connection_error",
            AnalysisError::Service { .. } => "service_error",
            AnalysisError::MalformedResponse(_) => "malformed_response",
        }
    }
}
