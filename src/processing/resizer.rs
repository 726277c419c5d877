//! App Store resize: force a screenshot into the fixed store resolution.

use image::RgbaImage;

use super::scale::stretch_to;
use crate::utils::FramerResult;

/// Fixed App Store Connect screenshot resolution (6.9" display class).
pub const APP_STORE_WIDTH: u32 = 1260;
pub const APP_STORE_HEIGHT: u32 = 2736;

/// Stretches `shot` to exactly 1260×2736.
///
/// Non-aspect-preserving: the store requires exact pixel dimensions, so the
/// source fills the canvas even when its aspect ratio differs slightly.
pub fn render_app_store(shot: &RgbaImage) -> FramerResult<RgbaImage> {
    stretch_to(shot, APP_STORE_WIDTH, APP_STORE_HEIGHT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    #[test]
    fn output_is_exactly_app_store_sized() {
        let shot = RgbaImage::from_pixel(1170, 2532, Rgba([10, 20, 30, 255]));
        let out = render_app_store(&shot).unwrap();
        assert_eq!(out.dimensions(), (APP_STORE_WIDTH, APP_STORE_HEIGHT));
    }

    #[test]
    fn dimensions_are_idempotent() {
        let shot = RgbaImage::from_pixel(300, 500, Rgba([0, 0, 0, 255]));
        let once = render_app_store(&shot).unwrap();
        let twice = render_app_store(&once).unwrap();
        assert_eq!(twice.dimensions(), (APP_STORE_WIDTH, APP_STORE_HEIGHT));
    }

    #[test]
    fn wide_input_is_stretched_not_cropped() {
        // Landscape input still fills the portrait canvas completely.
        let shot = RgbaImage::from_pixel(2000, 400, Rgba([200, 100, 50, 255]));
        let out = render_app_store(&shot).unwrap();
        assert_eq!(out.dimensions(), (APP_STORE_WIDTH, APP_STORE_HEIGHT));
        assert_eq!(out.get_pixel(0, 0)[3], 255);
        assert_eq!(out.get_pixel(APP_STORE_WIDTH - 1, APP_STORE_HEIGHT - 1)[3], 255);
    }
}
