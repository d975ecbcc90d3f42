//! File validation and the upload state transitions around it.

mod common;

use common::*;
use skinsense::analysis::{
    validate_image, AnalysisError, ImageFile, ValidationRejection, MAX_IMAGE_BYTES,
};
use skinsense::i18n::{Locale, Translator};
use skinsense::ui::analysis::{AnalysisReducer, Phase, View};
use skinsense::ui::store::Store;
use skinsense::ui::upload::{begin_upload, finish_upload, SubmitOutcome};

#[test]
fn test_limit_is_inclusive() {
    assert_eq!(validate_image(MAX_IMAGE_BYTES, "image/jpeg"), None);
    assert_eq!(
        validate_image(MAX_IMAGE_BYTES + 1, "image/jpeg"),
        Some(ValidationRejection::FileTooLarge)
    );
}

#[test]
fn test_every_allowed_type_passes() {
    for mime in ["image/jpeg", "image/jpg", "image/png", "image/webp"] {
        assert_eq!(validate_image(1, mime), None, "{}", mime);
    }
}

#[test]
fn test_other_types_are_invalid() {
    for mime in ["image/gif", "image/svg+xml", "application/pdf", "text/plain", ""] {
        assert_eq!(
            validate_image(1, mime),
            Some(ValidationRejection::InvalidFormat),
            "{}",
            mime
        );
    }
}

#[test]
fn test_size_is_checked_before_type() {
    assert_eq!(
        validate_image(MAX_IMAGE_BYTES + 1, "application/pdf"),
        Some(ValidationRejection::FileTooLarge)
    );
}

#[test]
fn test_declared_type_comes_from_extension() {
    let dir = temp_dir();
    let jpg = write_bytes(dir.path(), "Photo.JPG", 10);
    let webp = write_bytes(dir.path(), "photo.webp", 10);
    let gif = write_bytes(dir.path(), "photo.gif", 10);
    let none = write_bytes(dir.path(), "photo", 10);

    assert_eq!(ImageFile::from_path(&jpg).unwrap().mime, "image/jpeg");
    assert_eq!(ImageFile::from_path(&webp).unwrap().mime, "image/webp");
    assert_eq!(
        ImageFile::from_path(&gif).unwrap().validate(),
        Some(ValidationRejection::InvalidFormat)
    );
    assert_eq!(
        ImageFile::from_path(&none).unwrap().validate(),
        Some(ValidationRejection::InvalidFormat)
    );
}

#[test]
fn test_directory_is_not_an_image() {
    let dir = temp_dir();
    assert!(ImageFile::from_path(dir.path()).is_err());
}

#[test]
fn test_oversized_file_sets_localized_error() {
    let dir = temp_dir();
    let path = write_bytes(dir.path(), "huge.png", MAX_IMAGE_BYTES as usize + 1);
    let translator = Translator::new(Locale::Es);
    let mut store: Store<AnalysisReducer> = Store::new();

    let outcome = begin_upload(&mut store, &translator, &path);

    assert_eq!(
        outcome,
        SubmitOutcome::Rejected(ValidationRejection::FileTooLarge)
    );
    assert_eq!(
        store.state().error.as_deref(),
        Some(translator.t("errors.fileTooLarge"))
    );
    assert!(!store.state().is_busy());
    assert_eq!(store.state().view(), View::ErrorCard);
}

#[test]
fn test_file_at_limit_is_accepted() {
    let dir = temp_dir();
    let path = write_bytes(dir.path(), "big.jpg", MAX_IMAGE_BYTES as usize);
    let translator = Translator::new(Locale::En);
    let mut store: Store<AnalysisReducer> = Store::new();

    let outcome = begin_upload(&mut store, &translator, &path);
    assert!(matches!(outcome, SubmitOutcome::Started(_)));
}

#[test]
fn test_accepted_file_enters_analyzing() {
    let dir = temp_dir();
    let path = write_png(dir.path(), "face.png", 8, 6);
    let translator = Translator::new(Locale::En);
    let mut store: Store<AnalysisReducer> = Store::new();

    let outcome = begin_upload(&mut store, &translator, &path);
    let SubmitOutcome::Started(pending) = outcome else {
        panic!("expected Started, got {:?}", outcome);
    };
    assert_eq!(pending.file.path, path);

    let state = store.state();
    assert!(state.is_uploading);
    assert!(state.is_analyzing);
    assert_eq!(state.phase(), Phase::Analyzing);
    assert!(state.error.is_none());
    let preview = state.uploaded_image_preview.as_ref().unwrap();
    assert_eq!(preview.dimensions, Some((8, 6)));
    assert_eq!(preview.file_name, "face.png");
}

#[test]
fn test_second_submission_while_busy_is_refused() {
    let dir = temp_dir();
    let first = write_png(dir.path(), "one.png", 2, 2);
    let second = write_png(dir.path(), "two.png", 2, 2);
    let translator = Translator::new(Locale::En);
    let mut store: Store<AnalysisReducer> = Store::new();

    assert!(matches!(
        begin_upload(&mut store, &translator, &first),
        SubmitOutcome::Started(_)
    ));
    let before = store.state().clone();
    assert_eq!(
        begin_upload(&mut store, &translator, &second),
        SubmitOutcome::Busy
    );
    assert_eq!(*store.state(), before);
}

#[test]
fn test_missing_file_is_unreadable() {
    let dir = temp_dir();
    let translator = Translator::new(Locale::En);
    let mut store: Store<AnalysisReducer> = Store::new();

    let outcome = begin_upload(&mut store, &translator, &dir.path().join("gone.png"));

    assert_eq!(outcome, SubmitOutcome::Unreadable);
    let error = store.state().error.clone().unwrap();
    assert!(error.starts_with(translator.t("errors.fileUnreadable")));
}

#[test]
fn test_failed_analysis_clears_flags_and_keeps_preview() {
    let dir = temp_dir();
    let path = write_png(dir.path(), "face.png", 2, 2);
    let translator = Translator::new(Locale::En);
    let mut store: Store<AnalysisReducer> = Store::new();
    begin_upload(&mut store, &translator, &path);

    finish_upload(
        &mut store,
        Err(AnalysisError::Service {
            status: 400,
            message: "bad image".to_string(),
        }),
    );

    let state = store.state();
    assert!(!state.is_uploading);
    assert!(!state.is_analyzing);
    assert!(state.result.is_none());
    assert_eq!(state.error.as_deref(), Some("bad image"));
    assert!(state.uploaded_image_preview.is_some());
}
