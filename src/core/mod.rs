//! Core application types and state management.
//!
//! This module contains the fundamental types used throughout the application:
//! - [`AppState`]: Application state managed by Tauri
//! - [`TransformMode`]: Selects the resize or mockup transform
//! - [`TransformResult`]: Result of a completed transform

mod state;
mod types;

pub use state::AppState;
pub use types::{TransformMode, TransformResult};
