//! Talking to the analysis service and making sense of its answers.
//!
//! ```text
//! ImageFile ──validate──→ ImageUpload ──AnalysisClient::analyze──→ AnalysisResult
//!                                                                     │
//!                                                            Interpretation
//! ```

mod client;
mod error;
mod interpretation;
mod types;
mod validate;

pub use client::{AnalysisClient, ImageUpload, HEALTH_TIMEOUT, UPLOAD_FIELD};
pub use error::AnalysisError;
pub use interpretation::Interpretation;
pub use types::{AnalysisResult, AnalyzeResponse, ServiceHealth, SkinTone};
pub use validate::{
    validate_image, ImageFile, ValidationRejection, ALLOWED_MIME_TYPES, MAX_IMAGE_BYTES,
};
