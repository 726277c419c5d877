pub mod error;
pub mod validation;
pub mod fs;

pub use error::{FramerError, FramerResult, PathError, ValidationError};
pub use validation::validate_input_path;
pub use fs::{derive_output_path, extract_filename, payload_temp_path};
