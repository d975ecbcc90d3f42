use std::sync::mpsc::{self, Receiver};
use std::thread;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyEvent};
use uuid::Uuid;

use crate::analysis::{AnalysisError, AnalysisResult, ServiceHealth};

/// Everything the UI loop reacts to, from the terminal and from background
/// tasks, funneled through one channel so state is only touched on the UI
/// thread.
#[derive(Debug)]
pub enum AppEvent {
    Key(KeyEvent),
    /// Bracketed paste; terminals deliver dropped files this way.
    Paste(String),
    Tick,
    Resize(u16, u16),
    AnalysisFinished {
        request_id: Uuid,
        outcome: Result<AnalysisResult, AnalysisError>,
    },
    ServiceHealth {
        check_id: Uuid,
        health: Result<ServiceHealth, String>,
    },
}

pub struct EventHandler {
    rx: Receiver<AppEvent>,
    tx: mpsc::Sender<AppEvent>,
}

impl EventHandler {
    /// Spawn the terminal reader thread. It exits once the receiver is gone.
    pub fn new(tick_rate: Duration) -> Self {
        let (tx, rx) = mpsc::channel();
        let event_tx = tx.clone();

        let spawned = thread::Builder::new()
            .name("terminal-events".to_string())
            .spawn(move || {
                let mut last_tick = Instant::now();
                loop {
                    let timeout = tick_rate.saturating_sub(last_tick.elapsed());
                    let event = match event::poll(timeout) {
                        Ok(true) => match event::read() {
                            Ok(Event::Key(key)) => Some(AppEvent::Key(key)),
                            Ok(Event::Paste(text)) => Some(AppEvent::Paste(text)),
                            Ok(Event::Resize(cols, rows)) => Some(AppEvent::Resize(cols, rows)),
                            Ok(_) => None,
                            Err(err) => {
                                tracing::error!("Terminal read failed: {}", err);
                                break;
                            }
                        },
                        Ok(false) => None,
                        Err(err) => {
                            tracing::error!("Terminal poll failed: {}", err);
                            break;
                        }
                    };

                    if let Some(event) = event {
                        if event_tx.send(event).is_err() {
                            break;
                        }
                    }

                    if last_tick.elapsed() >= tick_rate {
                        if event_tx.send(AppEvent::Tick).is_err() {
                            break;
                        }
                        last_tick = Instant::now();
                    }
                }
            });
        if let Err(err) = spawned {
            tracing::error!("Failed to spawn event thread: {}", err);
        }

        Self { rx, tx }
    }

    pub fn next(&self, timeout: Duration) -> Result<AppEvent, mpsc::RecvTimeoutError> {
        self.rx.recv_timeout(timeout)
    }

    pub fn sender(&self) -> mpsc::Sender<AppEvent> {
        self.tx.clone()
    }
}
