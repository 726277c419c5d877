//! High-quality non-aspect-preserving stretch.
//!
//! Uses `fast_image_resize` (Lanczos3 convolution) for the hot path and falls
//! back to `image::imageops::resize` if buffer construction or resizing fails.

use fast_image_resize as fr;
use image::{imageops, ImageBuffer, Rgba, RgbaImage};
use tracing::warn;

use crate::utils::{FramerError, FramerResult};

/// Stretches `src` to exactly `target_width`×`target_height`, ignoring aspect ratio.
pub fn stretch_to(src: &RgbaImage, target_width: u32, target_height: u32) -> FramerResult<RgbaImage> {
    if target_width == 0 || target_height == 0 {
        return Err(FramerError::render(format!(
            "Invalid target size: {target_width}×{target_height}"
        )));
    }

    if src.dimensions() == (target_width, target_height) {
        return Ok(src.clone());
    }

    match resize_convolution(src, target_width, target_height) {
        Ok(resized) => Ok(resized),
        Err(err) => {
            warn!("fast_image_resize failed, falling back to image::imageops::resize: {err}");
            Ok(imageops::resize(
                src,
                target_width,
                target_height,
                imageops::FilterType::Lanczos3,
            ))
        }
    }
}

fn resize_convolution(
    src: &RgbaImage,
    target_width: u32,
    target_height: u32,
) -> FramerResult<RgbaImage> {
    let (src_width, src_height) = src.dimensions();

    let src_image = fr::images::Image::from_vec_u8(
        src_width,
        src_height,
        src.as_raw().clone(),
        fr::PixelType::U8x4,
    )
    .map_err(|e| FramerError::render(format!("Source buffer construction failed: {e}")))?;

    let mut dst_image = fr::images::Image::new(target_width, target_height, fr::PixelType::U8x4);

    let mut resizer = fr::Resizer::new();
    let options = fr::ResizeOptions::new()
        .resize_alg(fr::ResizeAlg::Convolution(fr::FilterType::Lanczos3));

    resizer
        .resize(&src_image, &mut dst_image, Some(&options))
        .map_err(|e| FramerError::render(format!("Resize failed: {e}")))?;

    ImageBuffer::<Rgba<u8>, Vec<u8>>::from_raw(target_width, target_height, dst_image.into_vec())
        .ok_or_else(|| FramerError::render("Resize output buffer has unexpected length".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stretch_hits_exact_target_dimensions() {
        let src = RgbaImage::from_pixel(100, 50, Rgba([40, 80, 120, 255]));
        let out = stretch_to(&src, 33, 77).unwrap();
        assert_eq!(out.dimensions(), (33, 77));
    }

    #[test]
    fn stretch_to_same_size_is_identity() {
        let src = RgbaImage::from_pixel(8, 8, Rgba([1, 2, 3, 255]));
        let out = stretch_to(&src, 8, 8).unwrap();
        assert_eq!(out, src);
    }

    #[test]
    fn zero_target_is_rejected() {
        let src = RgbaImage::new(4, 4);
        assert!(stretch_to(&src, 0, 10).is_err());
    }
}
