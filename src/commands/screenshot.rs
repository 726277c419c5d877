//! Tauri command handlers for screenshot transforms.

use std::path::{Path, PathBuf};
use tauri::State;
use tauri_plugin_fs::FsExt;
use tracing::{debug, info, warn};

use crate::core::{AppState, TransformMode, TransformResult};
use crate::processing::transform_screenshot;
use crate::utils::{
    derive_output_path, extract_filename, payload_temp_path, validate_input_path, FramerError,
    FramerResult,
};

/// Transforms a dropped screenshot file.
///
/// Claims the single job slot for the duration of the call, so a second
/// drop while one transform is in flight is rejected with a `Busy` error
/// instead of racing on shared state.
///
/// # Arguments
/// * `app` - Tauri app handle for scope grants and the file-browser reveal
/// * `state` - Application state holding the frame cache and job slot
/// * `input_path` - Path to the dropped screenshot
/// * `mode` - Which transform to apply (resize or mockup)
///
/// # Returns
/// The transform result with output path and dimensions.
#[tauri::command]
pub async fn process_screenshot(
    app: tauri::AppHandle,
    state: State<'_, AppState>,
    input_path: String,
    mode: TransformMode,
) -> FramerResult<TransformResult> {
    debug!(
        "Received process_screenshot ({}) for '{}'",
        mode.label(),
        extract_filename(&input_path)
    );

    let _slot = state.try_begin_job()?;
    run_transform(&app, state.inner().clone(), PathBuf::from(input_path), mode).await
}

/// Transforms a raw dropped byte payload (e.g. an image dragged out of
/// another application rather than from disk).
///
/// The bytes are written to a fixed temporary file first, then run through
/// the same pipeline; the output lands next to that temporary file.
#[tauri::command]
pub async fn process_screenshot_payload(
    app: tauri::AppHandle,
    state: State<'_, AppState>,
    bytes: Vec<u8>,
    mode: TransformMode,
) -> FramerResult<TransformResult> {
    debug!(
        "Received process_screenshot_payload ({}) with {} bytes",
        mode.label(),
        bytes.len()
    );

    let _slot = state.try_begin_job()?;

    let temp_path = payload_temp_path();
    tokio::fs::write(&temp_path, &bytes).await?;

    run_transform(&app, state.inner().clone(), temp_path, mode).await
}

/// Shared pipeline: validate, grant scope access, transform on the blocking
/// pool, reveal the output in the OS file browser.
async fn run_transform(
    app: &tauri::AppHandle,
    state: AppState,
    input: PathBuf,
    mode: TransformMode,
) -> FramerResult<TransformResult> {
    let input_str = input.to_string_lossy().to_string();
    validate_input_path(&input_str)?;

    let output = derive_output_path(&input, mode);
    grant_scope_access(app, &input, &output);

    let result = tokio::task::spawn_blocking(move || {
        // Frame decode happens here so the first mockup does not stall the
        // UI thread; subsequent calls hit the cache.
        let frame = match mode {
            TransformMode::Mockup => Some(state.device_frame()?),
            TransformMode::Resize => None,
        };

        transform_screenshot(&input, mode, frame.as_deref())
    })
    .await
    .map_err(|e| FramerError::render(format!("Transform task panicked: {e}")))??;

    info!(
        "{} complete: '{}' → '{}' ({}×{})",
        mode.label(),
        extract_filename(&result.input_path),
        extract_filename(&result.output_path),
        result.width,
        result.height
    );

    // Reveal is a convenience, not part of the contract; log and move on.
    if let Err(e) = tauri_plugin_opener::reveal_item_in_dir(&result.output_path) {
        warn!("Could not reveal '{}' in file browser: {e}", result.output_path);
    }

    Ok(result)
}

/// Extends the fs scope to the input and output paths.
///
/// Grant failures are logged and the operation proceeds; the write itself
/// reports any real permission problem.
fn grant_scope_access(app: &tauri::AppHandle, input: &Path, output: &Path) {
    let scope = app.fs_scope();
    for path in [input, output] {
        if let Err(e) = scope.allow_file(path) {
            warn!(
                "Access scope grant failed for '{}': {e} (continuing)",
                path.display()
            );
        }
    }
}
