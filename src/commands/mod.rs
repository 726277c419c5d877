//! Tauri command handlers for the frontend.
//!
//! This module exposes commands that can be invoked from the drop-target UI:
//! - [`process_screenshot`]: Transform a dropped screenshot file
//! - [`process_screenshot_payload`]: Transform a raw dropped byte payload

mod screenshot;

pub use screenshot::*;
