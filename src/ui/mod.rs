//! Terminal UI: an MVI store for the analysis lifecycle and the ratatui
//! views that render it.

pub mod analysis;
pub mod app;
pub mod error_card;
pub mod events;
pub mod footer;
pub mod header;
pub mod input;
pub mod layout;
pub mod mvi;
pub mod preview;
pub mod render;
pub mod result_card;
pub mod runtime;
pub mod snapshot;
pub mod store;
pub mod terminal_guard;
pub mod theme;
pub mod toast;
pub mod upload;
pub mod upload_prompt;
