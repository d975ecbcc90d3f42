use serde::{Deserialize, Serialize};

/// Average skin color sampled by the analysis service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkinTone {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub hex: String,
}

impl SkinTone {
    /// Mean of the three channels.
    pub fn brightness(&self) -> f64 {
        (u32::from(self.r) + u32::from(self.g) + u32::from(self.b)) as f64 / 3.0
    }
}

/// Result of one analysis run.
///
/// The service has shipped both camelCase and snake_case field names, so
/// both are accepted on input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    #[serde(alias = "faces_detected")]
    pub faces_detected: u32,
    #[serde(alias = "skin_tone")]
    pub skin_tone: SkinTone,
    #[serde(default)]
    pub interpretation: String,
}

/// Envelope of a successful `POST /analyze/` response.
#[derive(Debug, Clone, Deserialize)]
pub struct AnalyzeResponse {
    pub status: String,
    pub data: AnalysisResult,
    #[serde(default)]
    pub message: Option<String>,
}

/// Body of `GET /health`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ServiceHealth {
    pub status: String,
    #[serde(default)]
    pub service: Option<String>,
}

impl ServiceHealth {
    pub fn is_healthy(&self) -> bool {
        self.status == "healthy"
    }
}
