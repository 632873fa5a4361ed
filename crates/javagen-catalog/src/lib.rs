//! javagen-catalog - Catalog loaders for javagen
//!
//! This crate reads the external definitions that source generation starts from:
//! - [`MessageCatalog`] for XML property-list message catalogs
//! - [`properties`] for transcoding a catalog to a flat `.properties` file
//! - [`MediaTypeCatalog`] for merged `mime.types` files
//! - [`MediaTypeIndex`] for looking media types up the way the generated enum does

pub mod index;
pub mod media_types;
pub mod messages;
pub mod properties;

pub use index::MediaTypeIndex;
pub use media_types::{MediaTypeCatalog, MediaTypeSource};
pub use messages::{MessageCatalog, discover_message_files};
pub use properties::write_properties_file;
