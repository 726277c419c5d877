//! Core types for screenshot transforms and their results.

use serde::{Deserialize, Serialize};

/// Which of the two deterministic transforms to apply to a dropped screenshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransformMode {
    /// Stretch to the fixed App Store resolution (1260×2736).
    Resize,
    /// Composite into the bundled device frame and crop to the viewport.
    Mockup,
}

impl TransformMode {
    /// Output filename suffix appended to the input stem.
    pub fn output_suffix(&self) -> &'static str {
        match self {
            Self::Resize => "_appstore",
            Self::Mockup => "_iphone_mockup",
        }
    }

    /// Human-readable name used in log messages.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Resize => "resize",
            Self::Mockup => "mockup",
        }
    }
}

/// Result of a completed screenshot transform.
///
/// Returned to the frontend, which shows a transient status message.
#[derive(Debug, Clone, Serialize)]
pub struct TransformResult {
    /// Path to the original input file
    #[serde(rename = "inputPath")]
    pub input_path: String,
    /// Path the transformed PNG was written to
    #[serde(rename = "outputPath")]
    pub output_path: String,
    /// Output image width in pixels
    pub width: u32,
    /// Output image height in pixels
    pub height: u32,
    /// Encoded PNG size in bytes
    #[serde(rename = "outputBytes")]
    pub output_bytes: u64,
    /// Which transform produced this result
    pub mode: TransformMode,
}
