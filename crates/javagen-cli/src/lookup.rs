//! Lookup command implementation

use anyhow::{Context, Result};
use javagen::naming::media_type_to_identifier;
use javagen::{CatalogEntry, GeneratorConfig, MediaTypeIndex};
use serde::Serialize;

/// A resolved media type, as printed by `lookup`.
#[derive(Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LookupMatch {
    pub constant: String,
    pub media_type: String,
    pub extensions: Vec<String>,
}

impl From<&CatalogEntry> for LookupMatch {
    fn from(entry: &CatalogEntry) -> Self {
        Self {
            constant: media_type_to_identifier(&entry.key),
            media_type: entry.key.clone(),
            extensions: entry.extensions.clone(),
        }
    }
}

/// Resolve `value` the way the generated `MediaType.parse` does, then as a bare extension.
pub fn resolve<'a>(
    index: &MediaTypeIndex<'a>,
    value: &str,
    hint: Option<&str>,
) -> Option<&'a CatalogEntry> {
    index
        .parse_with_hint(value, hint)
        .or_else(|| index.from_ext_with_hint(value, hint))
}

/// Lookup command implementation
pub fn run(config: &GeneratorConfig, value: &str, hint: Option<&str>, json: bool) -> Result<()> {
    let (catalog, _) = javagen::load_media_types(config).context("Failed to load media types")?;
    let index = MediaTypeIndex::new(catalog.entries());

    let Some(entry) = resolve(&index, value, hint) else {
        anyhow::bail!("No media type matches '{value}'");
    };
    let found = LookupMatch::from(entry);

    if json {
        println!("{}", serde_json::to_string_pretty(&found)?);
    } else {
        println!(
            "{} ({}) [{}]",
            found.media_type,
            found.constant,
            found.extensions.join(", ")
        );
    }

    Ok(())
}
