use std::time::Duration;

use reqwest::multipart::{Form, Part};
use reqwest::{Client, Url};

use crate::analysis::error::AnalysisError;
use crate::analysis::types::{AnalysisResult, AnalyzeResponse, ServiceHealth};
use crate::analysis::validate::ImageFile;

/// `status` values a successful analysis is known to carry.
const SUCCESS_STATUSES: [&str; 2] = ["ok", "success"];

/// Upper bound for one `/health` request. Uploads have no timeout.
pub const HEALTH_TIMEOUT: Duration = Duration::from_secs(5);

/// Multipart field holding the uploaded image.
pub const UPLOAD_FIELD: &str = "file";

/// Image bytes ready to be sent.
#[derive(Debug, Clone)]
pub struct ImageUpload {
    pub file_name: String,
    pub mime: String,
    pub bytes: Vec<u8>,
}

impl ImageUpload {
    pub async fn read(file: &ImageFile) -> Result<Self, AnalysisError> {
        let bytes = tokio::fs::read(&file.path)
            .await
            .map_err(|source| AnalysisError::ReadImage {
                path: file.path.clone(),
                source,
            })?;
        Ok(Self {
            file_name: file.file_name(),
            mime: file.mime.clone(),
            bytes,
        })
    }
}

/// Client for the SkinSense analysis service.
///
/// Each call is a single attempt with no timeout and no retry; a failed
/// upload has to be started again by the user.
#[derive(Debug, Clone)]
pub struct AnalysisClient {
    client: Client,
    base_url: String,
}

impl AnalysisClient {
    pub fn new(base_url: &str) -> Result<Self, AnalysisError> {
        let parsed = Url::parse(base_url).map_err(|e| AnalysisError::InvalidBaseUrl {
            url: base_url.to_string(),
            reason: e.to_string(),
        })?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(AnalysisError::InvalidBaseUrl {
                url: base_url.to_string(),
                reason: format!("unsupported scheme '{}'", parsed.scheme()),
            });
        }

        let client = Client::builder().build().map_err(AnalysisError::Request)?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn analyze_url(&self) -> String {
        format!("{}/analyze/", self.base_url)
    }

    pub fn health_url(&self) -> String {
        format!("{}/health", self.base_url)
    }

    /// Upload one image and return the service's analysis.
    pub async fn analyze(&self, upload: ImageUpload) -> Result<AnalysisResult, AnalysisError> {
        let size = upload.bytes.len();
        let part = Part::bytes(upload.bytes)
            .file_name(upload.file_name.clone())
            .mime_str(&upload.mime)
            .map_err(AnalysisError::Request)?;
        let form = Form::new().part(UPLOAD_FIELD, part);

        tracing::debug!(
            file = %upload.file_name,
            mime = %upload.mime,
            bytes = size,
            "POST {}",
            self.analyze_url()
        );

        let response = self
            .client
            .post(self.analyze_url())
            .multipart(form)
            .send()
            .await
            .map_err(AnalysisError::Connection)?;

        let status = response.status();
        if !status.is_success() {
            // An unreadable error body is treated like an unparseable one.
            let body = response.bytes().await.unwrap_or_default();
            let err = AnalysisError::from_error_body(status.as_u16(), &body);
            tracing::warn!(status = status.as_u16(), "Analysis rejected: {}", err);
            return Err(err);
        }

        let body = response.bytes().await.map_err(AnalysisError::Connection)?;
        let parsed: AnalyzeResponse = serde_json::from_slice(&body)
            .map_err(|e| AnalysisError::MalformedResponse(e.to_string()))?;

        if !SUCCESS_STATUSES.contains(&parsed.status.as_str()) {
            tracing::warn!(
                status = %parsed.status,
                message = ?parsed.message,
                "Analysis returned HTTP {} with unrecognized status; using data as-is",
                status.as_u16()
            );
        }

        tracing::info!(
            faces = parsed.data.faces_detected,
            hex = %parsed.data.skin_tone.hex,
            "Analysis completed"
        );
        Ok(parsed.data)
    }

    /// Query `GET /health`.
    pub async fn health(&self) -> Result<ServiceHealth, AnalysisError> {
        let response = self
            .client
            .get(self.health_url())
            .timeout(HEALTH_TIMEOUT)
            .send()
            .await
            .map_err(AnalysisError::Connection)?;

        let status = response.status();
        let body = response.bytes().await.map_err(AnalysisError::Connection)?;
        if !status.is_success() {
            return Err(AnalysisError::from_error_body(status.as_u16(), &body));
        }
        serde_json::from_slice(&body).map_err(|e| AnalysisError::MalformedResponse(e.to_string()))
    }
}
