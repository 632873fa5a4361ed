//! # javagen
//!
//! Generates Java sources from plain-data catalogs during a build:
//! - a constants class per XML message catalog (one `String` constant per message code)
//! - a `MediaType` enum from `mime.types` files, with extension and URI lookups
//!
//! ## Quick Start
//!
//! ```no_run
//! use javagen::prelude::*;
//! use std::path::Path;
//!
//! fn main() -> GenResult<()> {
//!     let mut config = GeneratorConfig::new();
//!     config.media_type_package = Some("com.example.media".to_string());
//!     let config = config.resolve(Path::new("/path/to/project"));
//!
//!     let codes = javagen::generate_message_codes(&config)?;
//!     let media = javagen::generate_media_types(&config)?;
//!
//!     println!("{} classes, {} media types", codes.generated.len(), media.media_types);
//!     Ok(())
//! }
//! ```
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports from:
//! - [`javagen_core`] - Entry model, naming rules, errors, and configuration
//! - [`javagen_catalog`] - Message catalog and `mime.types` loaders
//! - [`javagen_java`] - Java source rendering and writing

mod codes;
mod media_types;

pub use codes::{CodesReport, FailedCatalog, GeneratedClass, generate_message_codes};
pub use media_types::{MediaTypeReport, generate_media_types, load_media_types};

// Re-export core types
pub use javagen_core::{
    ArtifactKind, ArtifactSpec, CatalogEntry, GenError, GenResult, GeneratedIdentifier,
    GeneratorConfig, MessageCode, naming,
};

// Re-export loaders and the emitter
pub use javagen_catalog::{
    MediaTypeCatalog, MediaTypeIndex, MediaTypeSource, MessageCatalog, discover_message_files,
    write_properties_file,
};
pub use javagen_java::{emit, render};

/// Prelude module for convenient imports.
///
/// Use `use javagen::prelude::*;` to import commonly used types.
pub mod prelude {
    pub use crate::{
        CodesReport, GenError, GenResult, GeneratorConfig, MediaTypeIndex, MediaTypeReport,
        generate_media_types, generate_message_codes,
    };
}
