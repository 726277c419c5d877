use std::path::{Path, PathBuf};
use crate::core::TransformMode;

/// Derives the output path for a transform: same directory as the input,
/// `<stem><suffix>.png`. Pure function of the input path and mode, so
/// re-running a transform overwrites its previous output.
pub fn derive_output_path(input: &Path, mode: TransformMode) -> PathBuf {
    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("screenshot");

    let parent = input.parent().unwrap_or(Path::new(""));
    parent.join(format!("{stem}{}.png", mode.output_suffix()))
}

/// Fixed temporary path raw dropped byte payloads are written to before processing.
pub fn payload_temp_path() -> PathBuf {
    std::env::temp_dir().join("dropped_screenshot.png")
}

/// Returns just the file name component of a path, for log messages.
pub fn extract_filename(path: &str) -> &str {
    Path::new(path)
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_names_are_pure_functions_of_input_and_mode() {
        let input = Path::new("/shots/foo.png");
        assert_eq!(
            derive_output_path(input, TransformMode::Resize),
            Path::new("/shots/foo_appstore.png")
        );
        assert_eq!(
            derive_output_path(input, TransformMode::Mockup),
            Path::new("/shots/foo_iphone_mockup.png")
        );
    }

    #[test]
    fn output_extension_is_always_png() {
        let input = Path::new("/shots/photo.jpeg");
        assert_eq!(
            derive_output_path(input, TransformMode::Resize),
            Path::new("/shots/photo_appstore.png")
        );
    }

    #[test]
    fn relative_inputs_stay_relative() {
        let input = Path::new("shot.png");
        assert_eq!(
            derive_output_path(input, TransformMode::Mockup),
            Path::new("shot_iphone_mockup.png")
        );
    }

    #[test]
    fn filename_extraction() {
        assert_eq!(extract_filename("/a/b/shot.png"), "shot.png");
        assert_eq!(extract_filename("shot.png"), "shot.png");
    }
}
