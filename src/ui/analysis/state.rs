use crate::analysis::AnalysisResult;
use crate::ui::mvi::UiState;
use crate::ui::preview::ImagePreview;

/// Upload/analysis lifecycle as seen by the views.
///
/// `result` and `error` are never both set; the reducer clears one when the
/// other is written.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AnalysisState {
    pub is_uploading: bool,
    pub is_analyzing: bool,
    pub result: Option<AnalysisResult>,
    pub error: Option<String>,
    pub uploaded_image_preview: Option<ImagePreview>,
}

impl UiState for AnalysisState {}

/// Presentation-level phase derived from the flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Uploading,
    Analyzing,
    Result,
    Error,
}

/// Which card the body shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    UploadPrompt,
    ResultCard,
    ErrorCard,
}

impl AnalysisState {
    pub fn phase(&self) -> Phase {
        if self.error.is_some() {
            Phase::Error
        } else if self.result.is_some() {
            Phase::Result
        } else if self.is_analyzing {
            Phase::Analyzing
        } else if self.is_uploading {
            Phase::Uploading
        } else {
            Phase::Idle
        }
    }

    pub fn view(&self) -> View {
        if self.error.is_some() {
            View::ErrorCard
        } else if self.result.is_some() {
            View::ResultCard
        } else {
            View::UploadPrompt
        }
    }

    /// True while a submission is in flight and the drop target is closed.
    pub fn is_busy(&self) -> bool {
        self.is_uploading || self.is_analyzing
    }
}
