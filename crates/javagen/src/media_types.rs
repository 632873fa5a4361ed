//! `mime.types` to `MediaType` enum pipeline.

use javagen_catalog::media_types::override_paths;
use javagen_catalog::{MediaTypeCatalog, MediaTypeSource};
use javagen_core::{GenResult, GeneratorConfig, MessageCode};
use serde::Serialize;
use std::path::PathBuf;
use tracing::{info, warn};

/// Outcome of [`generate_media_types`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaTypeReport {
    /// Fully qualified enum name
    pub class_name: String,

    /// Path of the written `.java` file
    pub source_file: PathBuf,

    /// Number of enum constants
    pub media_types: usize,

    /// Override files that existed and were merged, in merge order
    pub merged_files: Vec<PathBuf>,
}

/// Build the merged media-type catalog described by `config`.
///
/// Returns the catalog and the override files that were actually read.
pub fn load_media_types(config: &GeneratorConfig) -> GenResult<(MediaTypeCatalog, Vec<PathBuf>)> {
    let source = match &config.default_media_types {
        Some(path) => MediaTypeSource::File(path.clone()),
        None => MediaTypeSource::Bundled,
    };

    let mut catalog = MediaTypeCatalog::with_defaults(&source)?;
    let mut merged_files = Vec::new();

    if config.include_system_media_types {
        for path in override_paths() {
            if catalog.merge_file(&path)?.is_some() {
                merged_files.push(path);
            }
        }
    }

    for path in &config.media_type_files {
        match catalog.merge_file(path)? {
            Some(_) => merged_files.push(path.clone()),
            None => warn!(
                code = %MessageCode::MediaTypesNotFound,
                "{}",
                MessageCode::MediaTypesNotFound.format(&[&path.display()])
            ),
        }
    }

    Ok((catalog, merged_files))
}

/// Generate the `MediaType` enum into `mediaTypePackage`.
///
/// Every failure here is fatal: a missing package, a missing replacement defaults file,
/// an unreadable override file, or an output directory that cannot be created.
pub fn generate_media_types(config: &GeneratorConfig) -> GenResult<MediaTypeReport> {
    config.validate()?;
    let package = config.require_media_type_package()?;

    let (catalog, merged_files) = load_media_types(config)?;
    let spec = catalog.into_artifact(package);
    let source_file = javagen_java::emit(&spec, &config.generated_sources_directory)?;

    info!(
        code = %MessageCode::MediaTypeGenerated,
        "{}",
        MessageCode::MediaTypeGenerated.format(&[&spec.qualified_name(), &spec.entries.len()])
    );

    Ok(MediaTypeReport {
        class_name: spec.qualified_name(),
        source_file,
        media_types: spec.entries.len(),
        merged_files,
    })
}

#[cfg(test)]
#[path = "media_types/media_types_tests.rs"]
mod media_types_tests;
