//! Upload orchestration: validation, state transitions and the network call.
//!
//! `begin_upload` and `finish_upload` run on the UI thread and are the only
//! places the analysis store is written during a submission. The network call
//! in between (`run_analysis`) touches no UI state.

use std::path::{Path, PathBuf};

use reqwest::Url;
use uuid::Uuid;

use crate::analysis::{
    AnalysisClient, AnalysisError, AnalysisResult, ImageFile, ImageUpload, ValidationRejection,
};
use crate::i18n::Translator;
use crate::ui::analysis::{AnalysisIntent, AnalysisReducer};
use crate::ui::preview::ImagePreview;
use crate::ui::store::Store;

/// A submission that passed validation and now needs its network call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingAnalysis {
    pub request_id: Uuid,
    pub file: ImageFile,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Started(PendingAnalysis),
    Rejected(ValidationRejection),
    /// The path could not be stat'ed or is not a file.
    Unreadable,
    /// Another submission is in flight; nothing changed.
    Busy,
}

/// Validate the file at `path` and, if it passes, move the store into the
/// uploading/analyzing phase.
pub fn begin_upload(
    store: &mut Store<AnalysisReducer>,
    translator: &Translator,
    path: &Path,
) -> SubmitOutcome {
    if store.state().is_busy() {
        tracing::debug!("Ignoring {}: analysis in flight", path.display());
        return SubmitOutcome::Busy;
    }

    let file = match ImageFile::from_path(path) {
        Ok(file) => file,
        Err(err) => {
            tracing::warn!("Cannot open {}: {}", path.display(), err);
            store.dispatch(AnalysisIntent::SetError(Some(format!(
                "{} ({})",
                translator.t("errors.fileUnreadable"),
                err
            ))));
            return SubmitOutcome::Unreadable;
        }
    };

    if let Some(rejection) = file.validate() {
        tracing::info!(
            reason = rejection.error_type(),
            size = file.size,
            mime = %file.mime,
            "Rejected {}",
            path.display()
        );
        store.dispatch(AnalysisIntent::SetError(Some(
            translator.t(rejection.locale_key()).to_string(),
        )));
        return SubmitOutcome::Rejected(rejection);
    }

    store.dispatch(AnalysisIntent::SetUploading(true));
    store.dispatch(AnalysisIntent::SetError(None));
    store.dispatch(AnalysisIntent::SetUploadedImagePreview(Some(
        ImagePreview::load(&file),
    )));
    store.dispatch(AnalysisIntent::SetAnalyzing(true));

    let request_id = Uuid::new_v4();
    tracing::info!(%request_id, size = file.size, "Submitting {}", path.display());
    SubmitOutcome::Started(PendingAnalysis { request_id, file })
}

/// Read the file and send it to the service.
pub async fn run_analysis(
    client: &AnalysisClient,
    file: &ImageFile,
) -> Result<AnalysisResult, AnalysisError> {
    let upload = ImageUpload::read(file).await?;
    client.analyze(upload).await
}

/// Record the outcome and clear both progress flags.
pub fn finish_upload(
    store: &mut Store<AnalysisReducer>,
    outcome: Result<AnalysisResult, AnalysisError>,
) {
    match outcome {
        Ok(result) => {
            store.dispatch(AnalysisIntent::SetResult(result));
        }
        Err(err) => {
            tracing::warn!(error_type = err.error_type(), "Analysis failed: {}", err);
            store.dispatch(AnalysisIntent::SetError(Some(err.to_string())));
        }
    }
    store.dispatch(AnalysisIntent::SetUploading(false));
    store.dispatch(AnalysisIntent::SetAnalyzing(false));
}

/// Turn text from a terminal drop or the path field into a path.
///
/// Terminals paste dropped files as a plain path, a quoted path, a path with
/// backslash-escaped spaces, or a `file://` URL.
pub fn parse_dropped_path(input: &str) -> Option<PathBuf> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }

    for quote in ['\'', '"'] {
        if trimmed.len() >= 2 && trimmed.starts_with(quote) && trimmed.ends_with(quote) {
            let inner = &trimmed[1..trimmed.len() - 1];
            return (!inner.is_empty()).then(|| PathBuf::from(inner));
        }
    }

    if trimmed.starts_with("file://") {
        return Url::parse(trimmed).ok()?.to_file_path().ok();
    }

    if cfg!(windows) {
        return Some(PathBuf::from(trimmed));
    }

    let mut unescaped = String::with_capacity(trimmed.len());
    let mut chars = trimmed.chars();
    while let Some(ch) = chars.next() {
        if ch == '\\' {
            if let Some(next) = chars.next() {
                unescaped.push(next);
                continue;
            }
        }
        unescaped.push(ch);
    }
    Some(PathBuf::from(unescaped))
}
