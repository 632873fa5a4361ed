//! Message catalog to constants class pipeline.

use javagen_catalog::{MessageCatalog, discover_message_files, write_properties_file};
use javagen_core::{GenError, GenResult, GeneratorConfig, MESSAGE_CLASS_NAME_KEY, MessageCode};
use serde::Serialize;
use std::path::PathBuf;
use tracing::{debug, error, info, warn};

/// One generated constants class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedClass {
    /// Catalog the class was generated from
    pub catalog: PathBuf,

    /// Fully qualified class name
    pub class_name: String,

    /// Path of the written `.java` file
    pub source_file: PathBuf,

    /// Number of message constants, excluding `BUNDLE`
    pub constants: usize,

    /// Transcoded properties file, when requested
    pub properties_file: Option<PathBuf>,
}

/// A catalog whose generation was abandoned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FailedCatalog {
    pub catalog: PathBuf,
    pub error_code: u32,
    pub message: String,
}

/// Outcome of [`generate_message_codes`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CodesReport {
    pub generated: Vec<GeneratedClass>,

    /// Configured catalogs that do not exist
    pub missing: Vec<PathBuf>,

    /// Catalogs without a `message-class-name` entry
    pub skipped: Vec<PathBuf>,

    pub failed: Vec<FailedCatalog>,
}

impl CodesReport {
    /// Whether any catalog was processed at all.
    pub fn is_empty(&self) -> bool {
        self.generated.is_empty()
            && self.missing.is_empty()
            && self.skipped.is_empty()
            && self.failed.is_empty()
    }
}

/// Generate one constants class per message catalog.
///
/// Catalogs come from `message_files`, or are discovered in `resources_directory` when
/// that list is empty. Catalogs are processed in order and independently: a missing
/// file, a missing class name, or an unreadable catalog is logged and recorded in the
/// report while the remaining catalogs are still generated. A properties file that
/// cannot be written is recorded as a failure next to the generated class.
///
/// Directory creation failures and identifier problems abort the run.
pub fn generate_message_codes(config: &GeneratorConfig) -> GenResult<CodesReport> {
    let files = if config.message_files.is_empty() {
        discover_message_files(&config.resources_directory)?
    } else {
        config.message_files.clone()
    };

    let mut report = CodesReport::default();

    if files.is_empty() {
        warn!(
            code = %MessageCode::NoMessageFiles,
            "{}",
            MessageCode::NoMessageFiles.format(&[])
        );
        return Ok(report);
    }

    for path in files {
        debug!(path = %path.display(), "Using message file");

        let catalog = match MessageCatalog::load(&path) {
            Ok(catalog) => catalog,
            Err(GenError::MissingInputFile(missing)) => {
                let message = MessageCode::MessageFileNotFound.format(&[&missing.display()]);
                if config.ignore_missing {
                    debug!(code = %MessageCode::MessageFileNotFound, "{message}");
                } else {
                    warn!(code = %MessageCode::MessageFileNotFound, "{message}");
                }
                report.missing.push(missing);
                continue;
            }
            Err(e @ (GenError::Xml { .. } | GenError::Io { .. })) => {
                abandon(&mut report, path, &e);
                continue;
            }
            Err(e) => return Err(e),
        };

        let spec = match catalog.to_artifact() {
            Ok(spec) => spec,
            Err(GenError::MissingRequiredMetadataKey { .. }) => {
                warn!(
                    code = %MessageCode::MissingClassName,
                    "{}",
                    MessageCode::MissingClassName.format(&[&path.display(), &MESSAGE_CLASS_NAME_KEY])
                );
                report.skipped.push(path);
                continue;
            }
            Err(e) => return Err(e),
        };

        let source_file = javagen_java::emit(&spec, &config.generated_sources_directory)?;
        info!(
            code = %MessageCode::SourceGenerated,
            "{}",
            MessageCode::SourceGenerated.format(&[&spec.qualified_name(), &path.display()])
        );

        let properties_file = if config.create_properties_file {
            match write_properties_file(&catalog, &config.properties_output_directory) {
                Ok(written) => {
                    info!(
                        code = %MessageCode::PropertiesWritten,
                        "{}",
                        MessageCode::PropertiesWritten.format(&[&written.display()])
                    );
                    Some(written)
                }
                Err(e @ GenError::Io { .. }) => {
                    abandon(&mut report, path.clone(), &e);
                    None
                }
                Err(e) => return Err(e),
            }
        } else {
            None
        };

        report.generated.push(GeneratedClass {
            catalog: path,
            class_name: spec.qualified_name(),
            source_file,
            constants: spec.entries.len(),
            properties_file,
        });
    }

    Ok(report)
}

fn abandon(report: &mut CodesReport, path: PathBuf, err: &GenError) {
    error!(
        code = %MessageCode::MessageFileUnreadable,
        error_code = err.error_code(),
        "{}",
        MessageCode::MessageFileUnreadable.format(&[&path.display(), err])
    );

    report.failed.push(FailedCatalog {
        catalog: path,
        error_code: err.error_code(),
        message: err.to_string(),
    });
}
