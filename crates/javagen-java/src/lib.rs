//! javagen-java - Java source emitter
//!
//! Renders an [`ArtifactSpec`] to Java source and writes it under a generated-sources
//! root:
//! - [`ArtifactKind::ConstantsClass`] becomes a `final` class of `String` constants
//! - [`ArtifactKind::TypeEnum`] becomes an enum with lookup methods
//!
//! Rendering is deterministic: the same spec always yields byte-identical source.

mod constants;
mod media_type;
mod source;

use javagen_core::{ArtifactKind, ArtifactSpec, GenError, GenResult};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Render `spec` to Java source text.
///
/// Identifiers are derived and checked for collisions before any text is produced.
///
/// # Examples
///
/// ```
/// use javagen_core::{ArtifactSpec, CatalogEntry};
///
/// let spec = ArtifactSpec::constants(
///     "com.example.Codes",
///     "app_messages",
///     vec![CatalogEntry::message("APP-001", "Hello {}")],
/// );
///
/// let source = javagen_java::render(&spec).unwrap();
/// assert!(source.contains("public static final String APP_001 = \"APP-001\";"));
/// ```
pub fn render(spec: &ArtifactSpec) -> GenResult<String> {
    let identifiers = spec.identifiers()?;

    match spec.kind {
        ArtifactKind::ConstantsClass => Ok(constants::render_constants_class(spec, &identifiers)),
        ArtifactKind::TypeEnum => media_type::render_type_enum(spec, &identifiers),
    }
}

/// Render `spec` and write it beneath `generated_sources`, replacing any previous file.
///
/// Package directories are created as needed. Returns the path written.
pub fn emit(spec: &ArtifactSpec, generated_sources: &Path) -> GenResult<PathBuf> {
    let code = render(spec)?;
    let output_file = generated_sources.join(spec.relative_path());

    if let Some(package_dir) = output_file.parent() {
        fs::create_dir_all(package_dir).map_err(|source| GenError::DirectoryCreation {
            path: package_dir.to_path_buf(),
            source,
        })?;
    }

    fs::write(&output_file, code).map_err(|e| GenError::io(&output_file, e))?;
    debug!(path = %output_file.display(), class = %spec.qualified_name(), "wrote source file");

    Ok(output_file)
}
