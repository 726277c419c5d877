//! Application state management for Tauri.

use std::path::PathBuf;
use std::sync::{Arc, OnceLock};
use tauri::Manager;
use tauri::path::BaseDirectory;
use tokio::sync::{Mutex, OwnedMutexGuard};
use tracing::debug;

use crate::processing::DeviceFrame;
use crate::utils::{FramerError, FramerResult};

/// Name of the device-frame asset inside the bundled resource directory.
const FRAME_ASSET: &str = "resources/iphone_frame.png";

/// Application state managed by Tauri.
///
/// Holds the app handle, the lazily decoded device-frame asset, and the
/// single-slot job guard that rejects overlapping drops.
#[derive(Clone)]
pub struct AppState {
    app_handle: Arc<tauri::AppHandle>,
    /// Decoded once on first mockup, shared read-only afterwards.
    frame_cache: Arc<OnceLock<Arc<DeviceFrame>>>,
    /// One transform in flight at a time; a second drop is rejected, not queued.
    job_slot: Arc<Mutex<()>>,
}

impl AppState {
    pub fn new(app: tauri::AppHandle) -> Self {
        Self {
            app_handle: Arc::new(app),
            frame_cache: Arc::new(OnceLock::new()),
            job_slot: Arc::new(Mutex::new(())),
        }
    }

    /// Tries to claim the single job slot.
    ///
    /// Returns the guard on success; the slot is released when the guard
    /// drops, unconditionally, including on panic or error paths.
    pub fn try_begin_job(&self) -> FramerResult<OwnedMutexGuard<()>> {
        self.job_slot
            .clone()
            .try_lock_owned()
            .map_err(|_| FramerError::busy("A screenshot is already being processed"))
    }

    /// Returns the decoded device-frame asset, loading it on first use.
    ///
    /// Decodes from the bundled resource directory. A missing or corrupt
    /// asset fails the mockup invocation only; resize mode never calls this.
    pub fn device_frame(&self) -> FramerResult<Arc<DeviceFrame>> {
        if let Some(frame) = self.frame_cache.get() {
            return Ok(frame.clone());
        }

        let path = self.frame_asset_path()?;
        let frame = Arc::new(DeviceFrame::load(&path)?);
        debug!(
            "Device frame loaded: {}×{} from {}",
            frame.width(),
            frame.height(),
            path.display()
        );

        // A concurrent first load may have won the race; use whichever stuck.
        Ok(self.frame_cache.get_or_init(|| frame).clone())
    }

    /// Resolves the frame asset inside the application's resource bundle.
    fn frame_asset_path(&self) -> FramerResult<PathBuf> {
        self.app_handle
            .path()
            .resolve(FRAME_ASSET, BaseDirectory::Resource)
            .map_err(|e| {
                FramerError::decode(format!("Device frame asset could not be resolved: {e}"))
            })
    }
}
