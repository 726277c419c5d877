use std::path::Path;
use crate::utils::{FramerResult, ValidationError};

/// Extensions the `image` crate can decode that make sense as screenshot input.
const SUPPORTED_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "webp", "bmp", "tiff", "tif", "gif"];

/// Validates the input file path and extension.
///
/// The actual decodability check happens when the transform loads the file;
/// this only rejects paths that obviously cannot work.
pub fn validate_input_path(path: &str) -> FramerResult<()> {
    let path = Path::new(path);

    if !path.exists() {
        return Err(ValidationError::path_not_found(path).into());
    }

    if !path.is_file() {
        return Err(ValidationError::not_a_file(path).into());
    }

    validate_extension(path)?;
    Ok(())
}

/// Rejects files whose extension is not a known raster image format.
fn validate_extension(path: &Path) -> FramerResult<()> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
        .ok_or_else(|| {
            ValidationError::unsupported(format!("File has no extension: {}", path.display()))
        })?;

    if !SUPPORTED_EXTENSIONS.contains(&ext.as_str()) {
        return Err(ValidationError::unsupported(format!(
            "Not a raster image extension: .{ext}"
        ))
        .into());
    }

    Ok(())
}
