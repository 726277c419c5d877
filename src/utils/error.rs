//! Error types for the screenshot framer.
//!
//! Provides a hierarchy of error types using `thiserror` for ergonomic error handling.

use std::io;
use std::path::PathBuf;
use thiserror::Error;
use serde::Serialize;

/// Validation errors for input paths.
#[derive(Error, Debug, Serialize)]
pub enum ValidationError {
    /// Path-related validation error
    #[error("Path error: {0}")]
    Path(#[from] PathError),
    /// Input is not a supported raster image
    #[error("Unsupported input: {0}")]
    Unsupported(String),
}

/// File path errors.
#[derive(Error, Debug, Serialize)]
pub enum PathError {
    /// File does not exist
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    /// Path exists but is not a file
    #[error("Not a file: {0}")]
    NotFile(PathBuf),
    /// IO error accessing the path
    #[error("IO error: {0}")]
    IO(String),
}

/// Main error type for the framer application.
///
/// All errors in the application are converted to this type before being
/// returned to the frontend.
#[derive(Error, Debug, Serialize)]
pub enum FramerError {
    /// Input validation failed
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Input or frame asset could not be decoded
    #[error("Decode error: {0}")]
    Decode(String),

    /// Compositing or geometry failure
    #[error("Render error: {0}")]
    Render(String),

    /// PNG serialization failure
    #[error("Encode error: {0}")]
    Encode(String),

    /// File IO error
    #[error("IO error: {0}")]
    IO(String),

    /// A transform is already in flight
    #[error("Busy: {0}")]
    Busy(String),
}

/// Convenience result type for framer operations.
pub type FramerResult<T> = Result<T, FramerError>;

// Helper methods for error creation
impl FramerError {
    pub fn decode<T: Into<String>>(msg: T) -> Self {
        Self::Decode(msg.into())
    }

    pub fn render<T: Into<String>>(msg: T) -> Self {
        Self::Render(msg.into())
    }

    pub fn encode<T: Into<String>>(msg: T) -> Self {
        Self::Encode(msg.into())
    }

    pub fn busy<T: Into<String>>(msg: T) -> Self {
        Self::Busy(msg.into())
    }
}

// Helper methods for validation error creation
impl ValidationError {
    pub fn path_not_found(path: impl Into<PathBuf>) -> Self {
        Self::Path(PathError::NotFound(path.into()))
    }

    pub fn not_a_file(path: impl Into<PathBuf>) -> Self {
        Self::Path(PathError::NotFile(path.into()))
    }

    pub fn unsupported(msg: impl Into<String>) -> Self {
        Self::Unsupported(msg.into())
    }
}

// Convert std::io::Error to FramerError
impl From<io::Error> for FramerError {
    fn from(err: io::Error) -> Self {
        Self::IO(err.to_string())
    }
}

// Convert io::Error to PathError
impl From<io::Error> for PathError {
    fn from(err: io::Error) -> Self {
        Self::IO(err.to_string())
    }
}

// Convert PathError to FramerError
impl From<PathError> for FramerError {
    fn from(err: PathError) -> Self {
        Self::Validation(ValidationError::Path(err))
    }
}
