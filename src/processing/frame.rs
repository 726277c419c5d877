//! The bundled device-frame asset.

use std::path::Path;
use image::RgbaImage;

use crate::utils::{FramerError, FramerResult};

/// A decoded device-frame image: a phone bezel with a transparent screen
/// cutout that the scaled screenshot shows through.
///
/// Shipped with the application, decoded once, and shared read-only across
/// mockup invocations.
pub struct DeviceFrame {
    image: RgbaImage,
}

impl DeviceFrame {
    /// Loads and decodes the frame asset from disk.
    pub fn load(path: &Path) -> FramerResult<Self> {
        let decoded = image::open(path).map_err(|e| {
            FramerError::decode(format!(
                "Failed to decode device frame '{}': {e}",
                path.display()
            ))
        })?;

        Ok(Self::from_image(decoded.to_rgba8()))
    }

    /// Wraps an already decoded frame image.
    pub fn from_image(image: RgbaImage) -> Self {
        Self { image }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }
}
