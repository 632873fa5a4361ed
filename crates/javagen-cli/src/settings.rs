//! Configuration loading for the CLI

use anyhow::{Context, Result};
use javagen::GeneratorConfig;
use std::path::{Path, PathBuf};

/// Name of the configuration file looked for in the project directory.
pub const CONFIG_FILE_NAME: &str = "javagen.toml";

/// Command-line values that take precedence over the configuration file.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub message_files: Vec<PathBuf>,
    pub generated_sources_directory: Option<PathBuf>,
    pub ignore_missing: bool,
    pub create_properties_file: bool,
    pub media_type_package: Option<String>,
    pub default_media_types: Option<PathBuf>,
    pub no_system_media_types: bool,
    pub media_type_files: Vec<PathBuf>,
}

impl Overrides {
    /// Apply the overrides that were given; flags only ever switch behavior on.
    pub fn apply(self, mut config: GeneratorConfig) -> GeneratorConfig {
        if !self.message_files.is_empty() {
            config.message_files = self.message_files;
        }
        if let Some(dir) = self.generated_sources_directory {
            config.generated_sources_directory = dir;
        }
        if self.ignore_missing {
            config.ignore_missing = true;
        }
        if self.create_properties_file {
            config.create_properties_file = true;
        }
        if self.media_type_package.is_some() {
            config.media_type_package = self.media_type_package;
        }
        if self.default_media_types.is_some() {
            config.default_media_types = self.default_media_types;
        }
        if self.no_system_media_types {
            config.include_system_media_types = false;
        }
        if !self.media_type_files.is_empty() {
            config.media_type_files = self.media_type_files;
        }

        config
    }
}

/// The project directory, defaulting to the current directory.
pub fn project_dir(arg: Option<PathBuf>) -> Result<PathBuf> {
    match arg {
        Some(dir) => Ok(dir),
        None => std::env::current_dir().context("Failed to determine the current directory"),
    }
}

/// Load, override, resolve, and validate the configuration.
///
/// An explicit `config_path` must exist; otherwise `javagen.toml` in the project
/// directory is used when present, and built-in defaults when not.
pub fn load(
    project_dir: &Path,
    config_path: Option<&Path>,
    overrides: Overrides,
) -> Result<GeneratorConfig> {
    let config = match config_path {
        Some(path) => GeneratorConfig::from_file(path)
            .with_context(|| format!("Failed to load configuration: {path:?}"))?,
        None => {
            let default_path = project_dir.join(CONFIG_FILE_NAME);
            if default_path.is_file() {
                GeneratorConfig::from_file(&default_path)
                    .with_context(|| format!("Failed to load configuration: {default_path:?}"))?
            } else {
                GeneratorConfig::new()
            }
        }
    };

    let config = overrides.apply(config).resolve(project_dir);
    config.validate().context("Invalid configuration")?;

    Ok(config)
}
