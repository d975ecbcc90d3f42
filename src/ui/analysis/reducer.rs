//! Reducer for the upload/analysis lifecycle.

use crate::ui::mvi::Reducer;

use super::intent::AnalysisIntent;
use super::state::AnalysisState;

/// Applies setters without checking their order; sequencing is the upload
/// controller's job.
pub struct AnalysisReducer;

impl Reducer for AnalysisReducer {
    type State = AnalysisState;
    type Intent = AnalysisIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            AnalysisIntent::SetUploading(is_uploading) => AnalysisState {
                is_uploading,
                ..state
            },
            AnalysisIntent::SetAnalyzing(is_analyzing) => AnalysisState {
                is_analyzing,
                ..state
            },
            AnalysisIntent::SetResult(result) => AnalysisState {
                result: Some(result),
                error: None,
                ..state
            },
            AnalysisIntent::SetError(error) => AnalysisState {
                error,
                result: None,
                ..state
            },
            AnalysisIntent::SetUploadedImagePreview(uploaded_image_preview) => AnalysisState {
                uploaded_image_preview,
                ..state
            },
            AnalysisIntent::Reset => AnalysisState::default(),
        }
    }
}
