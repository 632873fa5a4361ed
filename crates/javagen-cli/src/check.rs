//! Check command implementation

use anyhow::Result;
use javagen::{GenError, GeneratorConfig, MessageCatalog, discover_message_files};
use std::path::PathBuf;

/// Result of checking one message catalog.
#[derive(Debug)]
pub enum CatalogStatus {
    /// Catalog would generate `class_name` with `constants` entries.
    Valid { class_name: String, constants: usize },
    Missing,
    Invalid(GenError),
}

/// Everything `check` looked at.
#[derive(Debug, Default)]
pub struct CheckSummary {
    pub catalogs: Vec<(PathBuf, CatalogStatus)>,

    /// `Some` when a media-type package is configured
    pub media_types: Option<std::result::Result<usize, GenError>>,
}

impl CheckSummary {
    /// Whether a generate run would hit any error.
    ///
    /// Missing catalogs only count when `ignore_missing` is off.
    pub fn has_problems(&self, ignore_missing: bool) -> bool {
        let catalog_problem = self.catalogs.iter().any(|(_, status)| match status {
            CatalogStatus::Valid { .. } => false,
            CatalogStatus::Missing => !ignore_missing,
            CatalogStatus::Invalid(_) => true,
        });

        catalog_problem || matches!(self.media_types, Some(Err(_)))
    }
}

/// Parse and render every configured artifact without writing it.
pub fn inspect(config: &GeneratorConfig) -> Result<CheckSummary> {
    let files = if config.message_files.is_empty() {
        discover_message_files(&config.resources_directory)?
    } else {
        config.message_files.clone()
    };

    let mut summary = CheckSummary::default();

    for path in files {
        let status = match check_catalog(&path) {
            Ok((class_name, constants)) => CatalogStatus::Valid {
                class_name,
                constants,
            },
            Err(GenError::MissingInputFile(_)) => CatalogStatus::Missing,
            Err(e) => CatalogStatus::Invalid(e),
        };
        summary.catalogs.push((path, status));
    }

    if let Some(package) = &config.media_type_package {
        summary.media_types = Some(check_media_types(config, package));
    }

    Ok(summary)
}

fn check_catalog(path: &std::path::Path) -> javagen::GenResult<(String, usize)> {
    let spec = MessageCatalog::load(path)?.to_artifact()?;
    javagen::render(&spec)?;

    Ok((spec.qualified_name(), spec.entries.len()))
}

fn check_media_types(config: &GeneratorConfig, package: &str) -> javagen::GenResult<usize> {
    let (catalog, _) = javagen::load_media_types(config)?;
    let spec = catalog.into_artifact(package);
    javagen::render(&spec)?;

    Ok(spec.entries.len())
}

/// Check command implementation
pub fn run(config: &GeneratorConfig) -> Result<()> {
    println!(
        "Checking catalogs in: {}",
        config.resources_directory.display()
    );

    let summary = inspect(config)?;

    for (path, status) in &summary.catalogs {
        match status {
            CatalogStatus::Valid {
                class_name,
                constants,
            } => println!("✓ {}: {class_name} ({constants} constants)", path.display()),
            CatalogStatus::Missing => println!("- {}: not found", path.display()),
            CatalogStatus::Invalid(e) => println!("✗ {}: {e}", path.display()),
        }
    }

    if summary.catalogs.is_empty() {
        println!("- No message files found");
    }

    match &summary.media_types {
        Some(Ok(count)) => println!("✓ Media types: {count}"),
        Some(Err(e)) => println!("✗ Media types: {e}"),
        None => println!("- Media types: mediaTypePackage not set"),
    }

    if summary.has_problems(config.ignore_missing) {
        anyhow::bail!("Check found problems");
    }

    println!("\nConfiguration is valid!");

    Ok(())
}

#[cfg(test)]
#[path = "check/check_tests.rs"]
mod check_tests;
