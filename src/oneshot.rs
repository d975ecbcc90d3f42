//! Non-interactive mode: analyze one image and print the result card.

use std::path::Path;

use crate::analysis::AnalysisClient;
use crate::i18n::Translator;
use crate::ui::analysis::{AnalysisReducer, View};
use crate::ui::error_card::ErrorCard;
use crate::ui::layout::card_height;
use crate::ui::render::CARD_WIDTH;
use crate::ui::result_card::ResultCard;
use crate::ui::snapshot::render_lines;
use crate::ui::store::Store;
use crate::ui::upload::{begin_upload, finish_upload, run_analysis, SubmitOutcome};

/// What a one-shot run produced, already rendered as text rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Report {
    Result(Vec<String>),
    Error(Vec<String>),
}

impl Report {
    pub fn exit_code(&self) -> i32 {
        match self {
            Report::Result(_) => 0,
            Report::Error(_) => 1,
        }
    }

    pub fn lines(&self) -> &[String] {
        match self {
            Report::Result(lines) | Report::Error(lines) => lines,
        }
    }
}

/// Run the same validate, upload and analyze flow as the interactive UI.
pub async fn analyze_once(client: &AnalysisClient, translator: &Translator, path: &Path) -> Report {
    let mut store: Store<AnalysisReducer> = Store::new();

    if let SubmitOutcome::Started(pending) = begin_upload(&mut store, translator, path) {
        let outcome = run_analysis(client, &pending.file).await;
        finish_upload(&mut store, outcome);
    }

    let state = store.state();
    match (state.view(), state.result.as_ref(), state.error.as_deref()) {
        (View::ResultCard, Some(result), _) => {
            let card = ResultCard::new(translator, result, state.uploaded_image_preview.as_ref());
            let height = card_height(&card.lines(), CARD_WIDTH);
            Report::Result(render_lines(card, CARD_WIDTH, height))
        }
        (_, _, Some(message)) => {
            let card = ErrorCard::new(translator, message);
            let height = card_height(&card.lines(), CARD_WIDTH);
            Report::Error(render_lines(card, CARD_WIDTH, height))
        }
        _ => Report::Error(vec![translator.t("errors.analysisFailed").to_string()]),
    }
}

/// Print `report` (results to stdout, errors to stderr) and return the exit code.
pub fn print_report(report: &Report) -> i32 {
    match report {
        Report::Result(lines) => {
            for line in lines {
                println!("{}", line);
            }
        }
        Report::Error(lines) => {
            for line in lines {
                eprintln!("{}", line);
            }
        }
    }
    report.exit_code()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Locale;

    #[tokio::test]
    async fn rejected_file_never_reaches_the_service() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.txt");
        std::fs::write(&path, b"hello").unwrap();

        // Nothing listens here; a request would surface as a connection error.
        let client = AnalysisClient::new("http://127.0.0.1:9").unwrap();
        let translator = Translator::new(Locale::En);
        let report = analyze_once(&client, &translator, &path).await;

        assert_eq!(report.exit_code(), 1);
        let text = report.lines().join("\n");
        assert!(text.contains(translator.t("errors.invalidFormat")), "{}", text);
    }

    #[tokio::test]
    async fn missing_file_is_reported() {
        let client = AnalysisClient::new("http://127.0.0.1:9").unwrap();
        let translator = Translator::new(Locale::Es);
        let report = analyze_once(&client, &translator, Path::new("/nonexistent/face.png")).await;
        assert_eq!(report.exit_code(), 1);
    }
}
