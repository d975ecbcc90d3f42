use crate::analysis::AnalysisResult;
use crate::ui::mvi::Intent;
use crate::ui::preview::ImagePreview;

#[derive(Debug, Clone)]
pub enum AnalysisIntent {
    SetUploading(bool),
    SetAnalyzing(bool),
    /// Store a result and clear any error.
    SetResult(AnalysisResult),
    /// Store or clear the error. Always clears the result.
    SetError(Option<String>),
    SetUploadedImagePreview(Option<ImagePreview>),
    /// Back to the initial state, dropping the preview.
    Reset,
}

impl Intent for AnalysisIntent {}
