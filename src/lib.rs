//! SkinSense terminal client.
//!
//! Validates a local photo, uploads it to the SkinSense analysis service and
//! renders the returned face count and skin tone in a ratatui interface.

pub mod analysis;
pub mod config;
pub mod i18n;
pub mod logging;
pub mod oneshot;
pub mod ui;
