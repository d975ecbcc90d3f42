use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc;
use std::sync::Arc;
use std::time::{Duration, Instant};

use tokio::runtime::Handle;
use uuid::Uuid;

use crate::analysis::{AnalysisClient, AnalysisError, AnalysisResult, ServiceHealth};
use crate::i18n::Translator;
use crate::ui::analysis::{AnalysisIntent, AnalysisReducer, AnalysisState, View};
use crate::ui::events::AppEvent;
use crate::ui::store::Store;
use crate::ui::toast::Toast;
use crate::ui::upload::{begin_upload, finish_upload, parse_dropped_path, run_analysis, SubmitOutcome};

/// Reachability of the analysis service, from the last `/health` check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServiceStatus {
    Unknown,
    Online,
    Offline(String),
}

pub struct App {
    should_quit: bool,
    /// Upload/analysis lifecycle (MVI store).
    store: Store<AnalysisReducer>,
    translator: Translator,
    /// Path typed into the drop target.
    input: String,
    toast: Option<Toast>,
    service: ServiceStatus,
    /// Request id of the submission whose outcome we are waiting for.
    in_flight: Option<Uuid>,
    spinner_frame: usize,
    needs_redraw: Arc<AtomicBool>,
    client: Arc<AnalysisClient>,
    runtime: Handle,
    events: mpsc::Sender<AppEvent>,
    health_interval: Duration,
    last_health_check: Option<Instant>,
    /// Id of the pending `/health` check, if any.
    pending_health: Option<Uuid>,
}

impl App {
    pub fn new(
        client: AnalysisClient,
        translator: Translator,
        runtime: Handle,
        events: mpsc::Sender<AppEvent>,
        health_interval: Duration,
    ) -> Self {
        let needs_redraw = Arc::new(AtomicBool::new(true));
        let mut store: Store<AnalysisReducer> = Store::new();

        let redraw = Arc::clone(&needs_redraw);
        store.subscribe(move |_: &AnalysisState, _: &AnalysisState| {
            redraw.store(true, Ordering::Release);
        });
        store.subscribe(|prev: &AnalysisState, next: &AnalysisState| {
            if prev.phase() != next.phase() {
                tracing::debug!(from = ?prev.phase(), to = ?next.phase(), "Phase changed");
            }
        });

        Self {
            should_quit: false,
            store,
            translator,
            input: String::new(),
            toast: None,
            service: ServiceStatus::Unknown,
            in_flight: None,
            spinner_frame: 0,
            needs_redraw,
            client: Arc::new(client),
            runtime,
            events,
            health_interval,
            last_health_check: None,
            pending_health: None,
        }
    }

    pub fn state(&self) -> &AnalysisState {
        self.store.state()
    }

    pub fn view(&self) -> View {
        self.store.state().view()
    }

    pub fn translator(&self) -> &Translator {
        &self.translator
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn toast(&self) -> Option<&Toast> {
        self.toast.as_ref()
    }

    pub fn service(&self) -> &ServiceStatus {
        &self.service
    }

    pub fn spinner_frame(&self) -> usize {
        self.spinner_frame
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn mark_dirty(&self) {
        self.needs_redraw.store(true, Ordering::Release);
    }

    /// Returns whether a redraw is due and clears the flag.
    pub fn take_redraw(&self) -> bool {
        self.needs_redraw.swap(false, Ordering::AcqRel)
    }

    // ========================================================================
    // Drop target
    // ========================================================================

    pub fn push_input(&mut self, ch: char) {
        if self.accepts_input() {
            self.input.push(ch);
            self.mark_dirty();
        }
    }

    pub fn pop_input(&mut self) {
        if self.accepts_input() && self.input.pop().is_some() {
            self.mark_dirty();
        }
    }

    pub fn clear_input(&mut self) {
        if self.accepts_input() && !self.input.is_empty() {
            self.input.clear();
            self.mark_dirty();
        }
    }

    /// Submit the typed path.
    pub fn submit_input(&mut self) -> Option<SubmitOutcome> {
        if !self.accepts_input() {
            return None;
        }
        let path = parse_dropped_path(&self.input)?;
        Some(self.submit_path(&path))
    }

    /// A terminal drop arrives as pasted text.
    pub fn on_paste(&mut self, text: &str) -> Option<SubmitOutcome> {
        if !self.accepts_input() {
            return None;
        }
        let path = parse_dropped_path(text)?;
        Some(self.submit_path(&path))
    }

    /// Validate and, if accepted, start analyzing the file at `path`.
    ///
    /// The outcome comes back later as [`AppEvent::AnalysisFinished`].
    pub fn submit_path(&mut self, path: &Path) -> SubmitOutcome {
        let outcome = begin_upload(&mut self.store, &self.translator, path);
        if let SubmitOutcome::Started(pending) = &outcome {
            self.in_flight = Some(pending.request_id);
            self.input.clear();

            let client = Arc::clone(&self.client);
            let events = self.events.clone();
            let request_id = pending.request_id;
            let file = pending.file.clone();
            self.runtime.spawn(async move {
                let outcome = run_analysis(&client, &file).await;
                if events
                    .send(AppEvent::AnalysisFinished {
                        request_id,
                        outcome,
                    })
                    .is_err()
                {
                    tracing::trace!(%request_id, "Analysis outcome dropped (UI gone)");
                }
            });
        }
        self.mark_dirty();
        outcome
    }

    pub fn on_analysis_finished(
        &mut self,
        request_id: Uuid,
        outcome: Result<AnalysisResult, AnalysisError>,
    ) {
        if self.in_flight != Some(request_id) {
            tracing::debug!(%request_id, "Ignoring stale analysis outcome");
            return;
        }
        self.in_flight = None;

        let now = Instant::now();
        self.toast = Some(match &outcome {
            Ok(result) => Toast::success(
                self.translator.t("analysis.results"),
                format!(
                    "{}: {}",
                    self.translator.t("analysis.facesDetected"),
                    result.faces_detected
                ),
                now,
            ),
            Err(err) => Toast::failure(self.translator.t("errors.analysisFailed"), err.to_string(), now),
        });
        finish_upload(&mut self.store, outcome);
        self.mark_dirty();
    }

    /// Leave the result or error card ("upload another" / "try again").
    pub fn reset(&mut self) {
        if self.view() == View::UploadPrompt {
            return;
        }
        self.store.dispatch(AnalysisIntent::Reset);
        self.input.clear();
    }

    fn accepts_input(&self) -> bool {
        let state = self.store.state();
        state.view() == View::UploadPrompt && !state.is_busy()
    }

    // ========================================================================
    // Language, ticks, health
    // ========================================================================

    pub fn toggle_locale(&mut self) {
        let locale = self.translator.locale().toggled();
        self.translator.set_locale(locale);
        tracing::debug!("Locale switched to {}", locale);
        self.mark_dirty();
    }

    pub fn on_tick(&mut self, now: Instant) {
        if self.toast.as_ref().is_some_and(|toast| toast.is_expired(now)) {
            self.toast = None;
            self.mark_dirty();
        }

        if self.store.state().is_busy() {
            self.spinner_frame = self.spinner_frame.wrapping_add(1);
            self.mark_dirty();
        }

        let due = self.pending_health.is_none()
            && self
                .last_health_check
                .is_some_and(|last| now.duration_since(last) >= self.health_interval);
        if due {
            self.request_health_check();
        }
    }

    /// Check `/health` in the background.
    ///
    /// A new check supersedes any pending one; only the latest result is
    /// applied.
    pub fn request_health_check(&mut self) {
        let check_id = Uuid::new_v4();
        self.pending_health = Some(check_id);
        self.last_health_check = Some(Instant::now());
        let client = Arc::clone(&self.client);
        let events = self.events.clone();
        self.runtime.spawn(async move {
            let health = client.health().await.map_err(|err| err.to_string());
            if events
                .send(AppEvent::ServiceHealth { check_id, health })
                .is_err()
            {
                tracing::trace!(%check_id, "Health result dropped (UI gone)");
            }
        });
    }

    pub fn on_service_health(&mut self, check_id: Uuid, health: Result<ServiceHealth, String>) {
        if self.pending_health != Some(check_id) {
            tracing::debug!(%check_id, "Ignoring superseded health result");
            return;
        }
        self.pending_health = None;

        let status = match health {
            Ok(health) if health.is_healthy() => ServiceStatus::Online,
            Ok(health) => ServiceStatus::Offline(format!("status '{}'", health.status)),
            Err(err) => ServiceStatus::Offline(err),
        };
        if status != self.service {
            tracing::info!(?status, "Analysis service status changed");
            self.service = status;
            self.mark_dirty();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::SkinTone;
    use crate::i18n::Locale;

    fn make_app() -> (App, mpsc::Receiver<AppEvent>, tokio::runtime::Runtime) {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        let (tx, rx) = mpsc::channel();
        let client = AnalysisClient::new("http://127.0.0.1:9").unwrap();
        let app = App::new(
            client,
            Translator::new(Locale::En),
            runtime.handle().clone(),
            tx,
            Duration::from_secs(30),
        );
        (app, rx, runtime)
    }

    fn sample_result(faces: u32) -> AnalysisResult {
        AnalysisResult {
            faces_detected: faces,
            skin_tone: SkinTone {
                r: 210,
                g: 180,
                b: 150,
                hex: "#d2b496".to_string(),
            },
            interpretation: String::new(),
        }
    }

    fn start_in_flight(app: &mut App) -> Uuid {
        let id = Uuid::new_v4();
        app.store.dispatch(AnalysisIntent::SetUploading(true));
        app.store.dispatch(AnalysisIntent::SetAnalyzing(true));
        app.in_flight = Some(id);
        id
    }

    #[test]
    fn typing_edits_input() {
        let (mut app, _rx, _rt) = make_app();
        app.push_input('a');
        app.push_input('b');
        app.pop_input();
        assert_eq!(app.input(), "a");
        app.clear_input();
        assert_eq!(app.input(), "");
    }

    #[test]
    fn input_is_ignored_while_busy() {
        let (mut app, _rx, _rt) = make_app();
        start_in_flight(&mut app);
        app.push_input('x');
        assert_eq!(app.input(), "");
        assert!(app.on_paste("/tmp/face.png").is_none());
        assert!(app.submit_input().is_none());
    }

    #[test]
    fn finished_outcome_sets_result_and_toast() {
        let (mut app, _rx, _rt) = make_app();
        let id = start_in_flight(&mut app);
        app.on_analysis_finished(id, Ok(sample_result(1)));

        assert_eq!(app.view(), View::ResultCard);
        assert!(!app.state().is_busy());
        let toast = app.toast().unwrap();
        assert_eq!(toast.description, "Faces detected: 1");
    }

    #[test]
    fn failed_outcome_sets_error() {
        let (mut app, _rx, _rt) = make_app();
        let id = start_in_flight(&mut app);
        app.on_analysis_finished(
            id,
            Err(AnalysisError::Service {
                status: 400,
                message: "bad image".to_string(),
            }),
        );
        assert_eq!(app.state().error.as_deref(), Some("bad image"));
        assert!(!app.state().is_busy());
        assert_eq!(app.toast().unwrap().title, "Analysis failed");
    }

    #[test]
    fn stale_outcome_is_ignored() {
        let (mut app, _rx, _rt) = make_app();
        start_in_flight(&mut app);
        app.on_analysis_finished(Uuid::new_v4(), Ok(sample_result(1)));
        assert!(app.state().is_busy());
        assert!(app.state().result.is_none());
    }

    #[test]
    fn reset_only_from_cards() {
        let (mut app, _rx, _rt) = make_app();
        let id = start_in_flight(&mut app);
        app.reset();
        assert!(app.state().is_busy());

        app.on_analysis_finished(id, Ok(sample_result(0)));
        app.reset();
        assert_eq!(*app.state(), AnalysisState::default());
    }

    #[test]
    fn toast_expires_on_tick() {
        let (mut app, _rx, _rt) = make_app();
        let id = start_in_flight(&mut app);
        app.on_analysis_finished(id, Ok(sample_result(1)));
        app.on_tick(Instant::now() + Duration::from_secs(4));
        assert!(app.toast().is_none());
    }

    #[test]
    fn health_status_transitions() {
        let (mut app, _rx, _rt) = make_app();
        assert_eq!(*app.service(), ServiceStatus::Unknown);
        let check = Uuid::new_v4();
        app.pending_health = Some(check);
        app.on_service_health(
            check,
            Ok(ServiceHealth {
                status: "healthy".to_string(),
                service: Some("skinsense-api".to_string()),
            }),
        );
        assert_eq!(*app.service(), ServiceStatus::Online);

        let check = Uuid::new_v4();
        app.pending_health = Some(check);
        app.on_service_health(check, Err("connection refused".to_string()));
        assert!(matches!(app.service(), ServiceStatus::Offline(_)));
    }

    #[test]
    fn superseded_health_result_is_ignored() {
        let (mut app, _rx, _rt) = make_app();
        let latest = Uuid::new_v4();
        app.pending_health = Some(latest);
        app.on_service_health(Uuid::new_v4(), Err("timed out".to_string()));
        assert_eq!(*app.service(), ServiceStatus::Unknown);
        assert_eq!(app.pending_health, Some(latest));
    }

    #[test]
    fn tick_does_not_stack_health_checks() {
        let (mut app, _rx, _rt) = make_app();
        let pending = Uuid::new_v4();
        let start = Instant::now();
        app.pending_health = Some(pending);
        app.last_health_check = Some(start);

        app.on_tick(start + Duration::from_secs(120));
        assert_eq!(app.pending_health, Some(pending));
    }

    #[test]
    fn redraw_flag_is_consumed() {
        let (app, _rx, _rt) = make_app();
        assert!(app.take_redraw());
        assert!(!app.take_redraw());
        app.mark_dirty();
        assert!(app.take_redraw());
    }

    #[test]
    fn toggle_locale_switches_language() {
        let (mut app, _rx, _rt) = make_app();
        app.toggle_locale();
        assert_eq!(app.translator().locale(), Locale::Es);
    }
}
