//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_service;

use skinsense::analysis::AnalysisClient;
use skinsense::i18n::{Locale, Translator};
use skinsense::ui::app::App;
use skinsense::ui::events::AppEvent;
use std::path::{Path, PathBuf};
use std::sync::mpsc;
use std::time::Duration;
use tempfile::TempDir;

pub use mock_service::{CapturedRequest, MockResponse, MockService};

/// Write a real `width`x`height` PNG into `dir`.
pub fn write_png(dir: &Path, name: &str, width: u32, height: u32) -> PathBuf {
    let path = dir.join(name);
    image::RgbImage::from_pixel(width, height, image::Rgb([200, 160, 130]))
        .save(&path)
        .expect("Failed to write png");
    path
}

/// Write `len` zero bytes to `dir/name`.
pub fn write_bytes(dir: &Path, name: &str, len: usize) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, vec![0u8; len]).expect("Failed to write file");
    path
}

pub fn temp_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp dir")
}

// -- App helpers --------------------------------------------------------------

/// Build an `App` talking to `base_url` on the current tokio runtime.
///
/// Call from a multi-threaded `#[tokio::test]` so spawned requests progress
/// while the test awaits [`next_event`].
pub fn make_app(base_url: &str, locale: Locale) -> (App, mpsc::Receiver<AppEvent>) {
    let (tx, rx) = mpsc::channel();
    let client = AnalysisClient::new(base_url).expect("Failed to build client");
    let app = App::new(
        client,
        Translator::new(locale),
        tokio::runtime::Handle::current(),
        tx,
        Duration::from_secs(30),
    );
    (app, rx)
}

/// Wait for the next event sent by a background task.
pub async fn next_event(rx: &mpsc::Receiver<AppEvent>, timeout: Duration) -> Option<AppEvent> {
    let start = std::time::Instant::now();
    while start.elapsed() < timeout {
        match rx.try_recv() {
            Ok(event) => return Some(event),
            Err(mpsc::TryRecvError::Empty) => {
                tokio::time::sleep(Duration::from_millis(10)).await;
            }
            Err(mpsc::TryRecvError::Disconnected) => return None,
        }
    }
    None
}

/// Wait for the analysis outcome and feed it back into the app.
pub async fn deliver_analysis(app: &mut App, rx: &mpsc::Receiver<AppEvent>) {
    loop {
        match next_event(rx, Duration::from_secs(5)).await {
            Some(AppEvent::AnalysisFinished {
                request_id,
                outcome,
            }) => {
                app.on_analysis_finished(request_id, outcome);
                return;
            }
            Some(AppEvent::ServiceHealth { check_id, health }) => {
                app.on_service_health(check_id, health)
            }
            Some(_) => {}
            None => panic!("Timed out waiting for analysis outcome"),
        }
    }
}

/// Wait for the next health result and feed it back into the app.
pub async fn deliver_health(app: &mut App, rx: &mpsc::Receiver<AppEvent>) {
    match next_event(rx, Duration::from_secs(10)).await {
        Some(AppEvent::ServiceHealth { check_id, health }) => {
            app.on_service_health(check_id, health)
        }
        other => panic!("expected health event, got {:?}", other),
    }
}
