//! Device-frame mockup compositing.
//!
//! Layering order: scaled screenshot with rounded corners, then the frame
//! bezel on top (its screen cutout is transparent), then a fixed crop down
//! to the marketing viewport.

use image::{imageops, RgbaImage};
use tracing::debug;

use super::frame::DeviceFrame;
use super::scale::stretch_to;
use crate::utils::{FramerError, FramerResult};

/// Fraction of the frame height the screenshot occupies.
const SCREEN_FILL_RATIO: f64 = 0.84;

/// Downward shift aligning the screenshot with the frame's screen cutout.
/// Specific to the bundled frame asset, like the crop rectangle below.
const VERTICAL_NUDGE: f64 = 12.0;

/// Screen corner radius before scaling.
const BASE_CORNER_RADIUS: f64 = 85.0;

/// Fixed crop rectangle matched to the bundled frame's proportions.
const VIEWPORT_X: u32 = 150;
const VIEWPORT_Y: u32 = 0;
pub const VIEWPORT_WIDTH: u32 = 800;
pub const VIEWPORT_HEIGHT: u32 = 1500;

/// Placement of the scaled screenshot inside the frame canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Layout {
    pub scale: f64,
    pub width: u32,
    pub height: u32,
    pub x: i64,
    pub y: i64,
    pub corner_radius: f64,
}

/// Computes where the screenshot lands inside the frame.
///
/// The screenshot is scaled so its height fills [`SCREEN_FILL_RATIO`] of the
/// frame height, centered horizontally and vertically, then nudged down by
/// [`VERTICAL_NUDGE`] pixels.
pub(crate) fn layout(
    frame_width: u32,
    frame_height: u32,
    shot_width: u32,
    shot_height: u32,
) -> FramerResult<Layout> {
    if shot_width == 0 || shot_height == 0 {
        return Err(FramerError::render(format!(
            "Screenshot has degenerate dimensions: {shot_width}×{shot_height}"
        )));
    }

    let scale = frame_height as f64 / shot_height as f64 * SCREEN_FILL_RATIO;
    let width = (shot_width as f64 * scale).round().max(1.0) as u32;
    let height = (shot_height as f64 * scale).round().max(1.0) as u32;

    let x = ((frame_width as f64 - width as f64) / 2.0).round() as i64;
    let y = ((frame_height as f64 - height as f64) / 2.0 + VERTICAL_NUDGE).round() as i64;

    Ok(Layout {
        scale,
        width,
        height,
        x,
        y,
        corner_radius: BASE_CORNER_RADIUS * scale,
    })
}

/// Composites `shot` into `frame` and crops to the marketing viewport.
///
/// The output is always [`VIEWPORT_WIDTH`]×[`VIEWPORT_HEIGHT`] regardless of
/// the input aspect ratio.
pub fn render_mockup(shot: &RgbaImage, frame: &DeviceFrame) -> FramerResult<RgbaImage> {
    let (frame_width, frame_height) = (frame.width(), frame.height());

    // The crop constants assume the bundled asset; a smaller frame means the
    // asset was replaced with something incompatible.
    if VIEWPORT_X + VIEWPORT_WIDTH > frame_width || VIEWPORT_Y + VIEWPORT_HEIGHT > frame_height {
        return Err(FramerError::render(format!(
            "Device frame {frame_width}×{frame_height} is smaller than the \
             {VIEWPORT_WIDTH}×{VIEWPORT_HEIGHT} viewport"
        )));
    }

    let layout = layout(frame_width, frame_height, shot.width(), shot.height())?;
    debug!(
        "Mockup layout: scale {:.4}, screen {}×{} at ({}, {})",
        layout.scale, layout.width, layout.height, layout.x, layout.y
    );

    let mut screen = stretch_to(shot, layout.width, layout.height)?;
    round_corners(&mut screen, layout.corner_radius);

    let mut canvas = RgbaImage::new(frame_width, frame_height);
    imageops::overlay(&mut canvas, &screen, layout.x, layout.y);
    imageops::overlay(&mut canvas, frame.image(), 0, 0);

    Ok(imageops::crop_imm(&canvas, VIEWPORT_X, VIEWPORT_Y, VIEWPORT_WIDTH, VIEWPORT_HEIGHT)
        .to_image())
}

/// Clips the image to a rounded rectangle by zeroing alpha outside the
/// corner arcs, with one pixel of coverage-based antialiasing on the edge.
fn round_corners(image: &mut RgbaImage, radius: f64) {
    let (width, height) = image.dimensions();
    let radius = radius
        .min(width as f64 / 2.0)
        .min(height as f64 / 2.0);

    if radius <= 0.0 {
        return;
    }

    for (x, y, pixel) in image.enumerate_pixels_mut() {
        // Pixel center coordinates
        let px = x as f64 + 0.5;
        let py = y as f64 + 0.5;

        // Only pixels inside one of the four corner squares can be clipped.
        let cx = if px < radius {
            radius
        } else if px > width as f64 - radius {
            width as f64 - radius
        } else {
            continue;
        };
        let cy = if py < radius {
            radius
        } else if py > height as f64 - radius {
            height as f64 - radius
        } else {
            continue;
        };

        let dist = ((px - cx).powi(2) + (py - cy).powi(2)).sqrt();
        let coverage = (radius - dist + 0.5).clamp(0.0, 1.0);
        if coverage < 1.0 {
            pixel[3] = (pixel[3] as f64 * coverage).round() as u8;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    #[test]
    fn layout_matches_reference_geometry() {
        // 1170×2532 screenshot in a 1200×2461 frame
        let l = layout(1200, 2461, 1170, 2532).unwrap();

        let expected_scale = 2461.0 / 2532.0 * 0.84;
        assert!((l.scale - expected_scale).abs() < 1e-12);

        // frame_height * 0.84 = 2067.24 → screenshot height rounds to 2067
        assert_eq!(l.height, 2067);
        assert_eq!(l.width, 955);
        assert_eq!(l.x, 123); // (1200 - 955) / 2 = 122.5, rounds up
        assert_eq!(l.y, 209); // (2461 - 2067) / 2 + 12
        assert!((l.corner_radius - 85.0 * expected_scale).abs() < 1e-9);
    }

    #[test]
    fn layout_rejects_empty_screenshot() {
        assert!(layout(1200, 2461, 0, 100).is_err());
        assert!(layout(1200, 2461, 100, 0).is_err());
    }

    #[test]
    fn wide_screenshot_centers_with_negative_offset() {
        // Wider than the frame after scaling: x offset goes negative and the
        // overlay clips at the canvas edges instead of failing.
        let l = layout(1200, 2461, 5000, 2532).unwrap();
        assert!(l.x < 0);
    }

    #[test]
    fn output_is_always_viewport_sized() {
        let shot = RgbaImage::from_pixel(1170, 2532, Rgba([50, 100, 150, 255]));
        let frame = DeviceFrame::from_image(RgbaImage::from_pixel(
            1200,
            2461,
            Rgba([0, 0, 0, 255]),
        ));

        let out = render_mockup(&shot, &frame).unwrap();
        assert_eq!(out.dimensions(), (VIEWPORT_WIDTH, VIEWPORT_HEIGHT));
    }

    #[test]
    fn undersized_frame_is_a_render_error() {
        let shot = RgbaImage::from_pixel(100, 200, Rgba([0, 0, 0, 255]));
        let frame = DeviceFrame::from_image(RgbaImage::new(400, 400));
        let err = render_mockup(&shot, &frame).unwrap_err();
        assert!(err.to_string().contains("smaller than"));
    }

    #[test]
    fn screenshot_shows_through_transparent_cutout() {
        // Fully transparent frame: the composite at the screen center must
        // carry the screenshot's color.
        let shot = RgbaImage::from_pixel(1170, 2532, Rgba([200, 10, 10, 255]));
        let frame = DeviceFrame::from_image(RgbaImage::new(1200, 2461));

        let out = render_mockup(&shot, &frame).unwrap();
        let center = out.get_pixel(VIEWPORT_WIDTH / 2, VIEWPORT_HEIGHT / 2);
        assert_eq!(center[0], 200);
        assert_eq!(center[3], 255);
    }

    #[test]
    fn corners_are_clipped_transparent() {
        let mut img = RgbaImage::from_pixel(200, 200, Rgba([255, 255, 255, 255]));
        round_corners(&mut img, 50.0);

        // Far corner pixel is outside the arc, center of an edge is not.
        assert_eq!(img.get_pixel(0, 0)[3], 0);
        assert_eq!(img.get_pixel(199, 199)[3], 0);
        assert_eq!(img.get_pixel(100, 0)[3], 255);
        assert_eq!(img.get_pixel(100, 100)[3], 255);
    }

    #[test]
    fn zero_radius_leaves_alpha_untouched() {
        let mut img = RgbaImage::from_pixel(10, 10, Rgba([1, 1, 1, 255]));
        round_corners(&mut img, 0.0);
        assert!(img.pixels().all(|p| p[3] == 255));
    }
}
