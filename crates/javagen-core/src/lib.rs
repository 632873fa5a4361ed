//! javagen-core - Entry model, identifier normalization, and errors
//!
//! This crate provides the foundational types shared by the javagen source generators:
//! - [`CatalogEntry`] and [`ArtifactSpec`] describing what gets generated
//! - [`naming`] for turning catalog keys into Java identifiers
//! - [`GenError`] for error handling
//! - [`GeneratorConfig`] for generator configuration
//! - [`MessageCode`] for the codes attached to log messages

mod config;
mod error;
mod message_code;
mod model;

pub mod naming;

pub use config::GeneratorConfig;
pub use error::{GenError, GenResult};
pub use message_code::MessageCode;
pub use model::{ArtifactKind, ArtifactSpec, CatalogEntry, GeneratedIdentifier};

/// Catalog key that names the class generated from a message catalog.
pub const MESSAGE_CLASS_NAME_KEY: &str = "message-class-name";

/// Name of the constant holding the message bundle name.
pub const BUNDLE_FIELD: &str = "BUNDLE";

/// Class name of the generated media-type enumeration.
pub const MEDIA_TYPE_CLASS_NAME: &str = "MediaType";

/// Javadoc marker placed on every generated class.
///
/// Checkstyle and similar tools can be configured to skip files carrying it.
pub const GENERATED_MARKER: &str = "BEGIN GENERATED CODE";

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        ArtifactKind, ArtifactSpec, CatalogEntry, GenError, GenResult, GeneratedIdentifier,
        GeneratorConfig, MessageCode,
    };
}
