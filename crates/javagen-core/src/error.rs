//! Error types for javagen source generators

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for generator operations
pub type GenResult<T> = Result<T, GenError>;

/// Error type for generator operations
#[derive(Error, Debug)]
pub enum GenError {
    /// A declared catalog file does not exist
    #[error("input file not found: {}", .0.display())]
    MissingInputFile(PathBuf),

    /// A message catalog lacks a required metadata key
    #[error("{}: required key '{key}' not found", .path.display())]
    MissingRequiredMetadataKey { path: PathBuf, key: String },

    /// A package directory could not be created
    #[error("cannot create directory {}: {source}", .path.display())]
    DirectoryCreation {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Reading or writing a file failed
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A catalog file is not a well-formed XML property list
    #[error("{}: malformed catalog: {message}", .path.display())]
    Xml { path: PathBuf, message: String },

    /// Two distinct keys normalize to the same identifier
    #[error("identifier {identifier} generated by both '{first}' and '{second}'")]
    IdentifierCollision {
        identifier: String,
        first: String,
        second: String,
    },

    /// A key normalizes to something that is not a legal Java identifier
    #[error("key '{key}' normalizes to '{identifier}', which is not a valid Java identifier")]
    InvalidIdentifier { key: String, identifier: String },

    /// An entry cannot be emitted for the requested artifact kind
    #[error("invalid entry '{key}': {reason}")]
    InvalidEntry { key: String, reason: String },

    /// The mandatory default media-type catalog is missing
    #[error("default media types not found: {}", .0.display())]
    MissingDefaultMediaTypes(PathBuf),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),
}

impl GenError {
    /// Returns a stable numeric code for this kind of error
    pub fn error_code(&self) -> u32 {
        match self {
            GenError::MissingInputFile(_) => 1,
            GenError::MissingRequiredMetadataKey { .. } => 2,
            GenError::DirectoryCreation { .. } => 3,
            GenError::Io { .. } => 4,
            GenError::Xml { .. } => 5,
            GenError::IdentifierCollision { .. } => 6,
            GenError::InvalidIdentifier { .. } => 7,
            GenError::InvalidEntry { .. } => 8,
            GenError::MissingDefaultMediaTypes(_) => 9,
            GenError::Config(_) => 10,
        }
    }

    /// Whether a batch run may skip the offending file and continue
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            GenError::MissingInputFile(_) | GenError::MissingRequiredMetadataKey { .. }
        )
    }

    /// Wrap an I/O error, mapping `NotFound` to [`GenError::MissingInputFile`]
    pub fn from_read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::NotFound {
            GenError::MissingInputFile(path)
        } else {
            GenError::Io { path, source }
        }
    }

    /// Wrap an I/O error raised while writing or reading a file
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        GenError::Io {
            path: path.into(),
            source,
        }
    }
}
