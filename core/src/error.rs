use std::path::PathBuf;
use thiserror::Error;

/// Result type for scoutmod operations
pub type Result<T> = std::result::Result<T, ScoutmodError>;

/// Error types for scoutmod operations
#[derive(Error, Debug)]
pub enum ScoutmodError {
    /// File could not be opened or parsed as a DICOM record
    #[error("Could not read {}: {message}", path.display())]
    Read { path: PathBuf, message: String },

    /// A required attribute is absent when a computation needs it
    #[error("Missing field {field} in {}", path.display())]
    MissingField { field: &'static str, path: PathBuf },

    /// No usable input was found (no files, no reference, no slices)
    #[error("No input: {0}")]
    NoInput(String),

    /// Invalid tag value
    #[error("Invalid value: {0}")]
    InvalidValue(String),

    /// I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV serialization error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Image encoding error
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
}

impl ScoutmodError {
    /// Builds a read error for `path` from any displayable cause
    pub fn read(path: impl Into<PathBuf>, cause: impl std::fmt::Display) -> Self {
        ScoutmodError::Read {
            path: path.into(),
            message: cause.to_string(),
        }
    }

    /// Returns true for errors raised while opening or parsing a file
    pub fn is_read_error(&self) -> bool {
        matches!(self, ScoutmodError::Read { .. })
    }
}
