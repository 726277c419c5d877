// Module declarations in dependency order
pub mod commands;
pub mod core;
pub mod processing;
pub mod utils;

// Public exports for external consumers
pub use core::{AppState, TransformMode, TransformResult};
pub use processing::{
    render_app_store, render_mockup, transform_screenshot, DeviceFrame, APP_STORE_HEIGHT,
    APP_STORE_WIDTH, VIEWPORT_HEIGHT, VIEWPORT_WIDTH,
};
pub use utils::{derive_output_path, FramerError, FramerResult};
pub use commands::*;

// This library file is used as a public API for consuming this crate as a library.
// The actual application entry point is in main.rs.
