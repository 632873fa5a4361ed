//! Generator configuration

use crate::naming::is_package_name;
use crate::{GenError, GenResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Options recognized by the generators.
///
/// Keys use the host build tool's camelCase spelling, so a `javagen.toml` reads:
///
/// ```toml
/// messageFiles = ["src/main/resources/app_messages.xml"]
/// generatedSourcesDirectory = "src/main/generated"
/// createPropertiesFile = true
/// mediaTypePackage = "com.example.media"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Message catalogs to generate code classes from
    ///
    /// When empty, catalogs are discovered in `resources_directory`.
    pub message_files: Vec<PathBuf>,

    /// Directory searched for `*_messages.xml` catalogs
    pub resources_directory: PathBuf,

    /// Root of the generated-sources tree
    pub generated_sources_directory: PathBuf,

    /// Where transcoded properties files are written
    pub properties_output_directory: PathBuf,

    /// Do not warn about catalog files that don't exist
    pub ignore_missing: bool,

    /// Also write each catalog as a flat `.properties` file
    pub create_properties_file: bool,

    /// Package of the generated media-type enumeration
    pub media_type_package: Option<String>,

    /// Replacement for the bundled default `mime.types`
    pub default_media_types: Option<PathBuf>,

    /// Merge `/etc/mime.types` and `~/.mime.types`
    pub include_system_media_types: bool,

    /// Extra `mime.types` files, merged after the system ones
    pub media_type_files: Vec<PathBuf>,
}

fn default_resources_directory() -> PathBuf {
    PathBuf::from("src/main/resources")
}

fn default_generated_sources_directory() -> PathBuf {
    PathBuf::from("src/main/generated")
}

fn default_properties_output_directory() -> PathBuf {
    PathBuf::from("target/classes")
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            message_files: Vec::new(),
            resources_directory: default_resources_directory(),
            generated_sources_directory: default_generated_sources_directory(),
            properties_output_directory: default_properties_output_directory(),
            ignore_missing: false,
            create_properties_file: false,
            media_type_package: None,
            default_media_types: None,
            include_system_media_types: true,
            media_type_files: Vec::new(),
        }
    }
}

impl GeneratorConfig {
    /// Create a configuration with every option at its default
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: impl AsRef<Path>) -> GenResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| GenError::io(path, e))?;

        Self::from_toml(&content)
    }

    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> GenResult<Self> {
        toml::from_str(content).map_err(|e| GenError::Config(e.to_string()))
    }

    /// Resolve relative paths against a project directory
    pub fn resolve(mut self, project_dir: &Path) -> Self {
        let join = |p: &mut PathBuf| {
            if p.is_relative() {
                *p = project_dir.join(&*p);
            }
        };

        self.message_files.iter_mut().for_each(join);
        self.media_type_files.iter_mut().for_each(join);
        join(&mut self.resources_directory);
        join(&mut self.generated_sources_directory);
        join(&mut self.properties_output_directory);
        if let Some(path) = self.default_media_types.as_mut() {
            join(path);
        }

        self
    }

    /// The media-type package, which must be configured for that generator
    pub fn require_media_type_package(&self) -> GenResult<&str> {
        self.media_type_package
            .as_deref()
            .ok_or_else(|| GenError::Config("mediaTypePackage is not set".to_string()))
    }

    /// Validate the configuration
    pub fn validate(&self) -> GenResult<()> {
        if let Some(package) = &self.media_type_package {
            if package.is_empty() || !is_package_name(package) {
                return Err(GenError::Config(format!(
                    "mediaTypePackage '{package}' is not a valid Java package name"
                )));
            }
        }

        if self.generated_sources_directory.as_os_str().is_empty() {
            return Err(GenError::Config(
                "generatedSourcesDirectory cannot be empty".to_string(),
            ));
        }

        Ok(())
    }
}
