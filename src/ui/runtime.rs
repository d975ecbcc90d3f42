use crate::analysis::AnalysisClient;
use crate::config::Config;
use crate::i18n::Translator;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use std::io;
use std::path::PathBuf;
use std::sync::mpsc::RecvTimeoutError;
use std::time::{Duration, Instant};
use tokio::runtime::Handle;

/// Run the interactive UI until the user quits.
///
/// `initial_image`, when given, is submitted as if it had been dropped.
pub fn run(
    config: &Config,
    client: AnalysisClient,
    runtime: Handle,
    initial_image: Option<PathBuf>,
) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    let tick_rate = Duration::from_millis(config.ui.tick_rate_ms);
    let events = EventHandler::new(tick_rate);
    let mut app = App::new(
        client,
        Translator::new(config.ui.locale),
        runtime,
        events.sender(),
        Duration::from_secs(config.api.health_check_interval_seconds),
    );
    app.request_health_check();
    if let Some(path) = initial_image {
        app.submit_path(&path);
    }

    loop {
        if app.take_redraw() {
            terminal.draw(|frame| draw(frame, &app))?;
        }
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Paste(text)) => {
                app.on_paste(&text);
            }
            Ok(AppEvent::Tick) => app.on_tick(Instant::now()),
            Ok(AppEvent::Resize(_, _)) => app.mark_dirty(),
            Ok(AppEvent::AnalysisFinished {
                request_id,
                outcome,
            }) => app.on_analysis_finished(request_id, outcome),
            Ok(AppEvent::ServiceHealth { check_id, health }) => {
                app.on_service_health(check_id, health)
            }
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    drop(guard);
    Ok(())
}
