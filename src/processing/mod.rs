//! The two leaf image transforms and their shared plumbing.
//!
//! Everything here is synchronous and CPU-bound; callers dispatch through
//! `tokio::task::spawn_blocking` so the UI thread stays responsive.

mod frame;
mod mockup;
mod resizer;
mod scale;

use std::path::Path;
use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder, RgbaImage};
use tracing::debug;

use crate::core::{TransformMode, TransformResult};
use crate::utils::{derive_output_path, extract_filename, FramerError, FramerResult};

pub use frame::DeviceFrame;
pub use mockup::{render_mockup, VIEWPORT_HEIGHT, VIEWPORT_WIDTH};
pub use resizer::{render_app_store, APP_STORE_HEIGHT, APP_STORE_WIDTH};

/// Loads, transforms, encodes and writes one screenshot synchronously.
///
/// `frame` is required for mockup mode only. The PNG is encoded fully in
/// memory before the single filesystem write, so a failed write never
/// leaves a partial output file.
pub fn transform_screenshot(
    input: &Path,
    mode: TransformMode,
    frame: Option<&DeviceFrame>,
) -> FramerResult<TransformResult> {
    let shot = load_screenshot(input)?;
    debug!(
        "Loaded '{}': {}×{}",
        extract_filename(&input.to_string_lossy()),
        shot.width(),
        shot.height()
    );

    let rendered = match mode {
        TransformMode::Resize => render_app_store(&shot)?,
        TransformMode::Mockup => {
            let frame = frame
                .ok_or_else(|| FramerError::decode("Device frame asset is not available"))?;
            render_mockup(&shot, frame)?
        }
    };

    let output_path = derive_output_path(input, mode);
    let encoded = encode_png(&rendered)?;
    std::fs::write(&output_path, &encoded)?;

    debug!(
        "Wrote '{}': {}×{}, {} bytes",
        output_path.display(),
        rendered.width(),
        rendered.height(),
        encoded.len()
    );

    Ok(TransformResult {
        input_path: input.to_string_lossy().to_string(),
        output_path: output_path.to_string_lossy().to_string(),
        width: rendered.width(),
        height: rendered.height(),
        output_bytes: encoded.len() as u64,
        mode,
    })
}

/// Decodes a screenshot from disk into an RGBA buffer.
pub fn load_screenshot(path: &Path) -> FramerResult<RgbaImage> {
    let decoded = image::open(path).map_err(|e| {
        FramerError::decode(format!("Failed to decode '{}': {e}", path.display()))
    })?;

    Ok(decoded.to_rgba8())
}

/// Serializes an RGBA buffer to PNG bytes in memory.
fn encode_png(image: &RgbaImage) -> FramerResult<Vec<u8>> {
    let mut buf = Vec::new();
    PngEncoder::new(&mut buf)
        .write_image(
            image.as_raw(),
            image.width(),
            image.height(),
            ExtendedColorType::Rgba8,
        )
        .map_err(|e| FramerError::encode(format!("PNG encoding failed: {e}")))?;

    Ok(buf)
}
