//! Transcoding of message catalogs to the flat `.properties` format.
//!
//! Output is escaped the way `java.util.Properties#store` escapes, so it loads back
//! into the same key/value pairs. No timestamp is written; regenerating from the same
//! catalog produces identical bytes.

use crate::messages::MessageCatalog;
use javagen_core::{GenError, GenResult};
use std::fs;
use std::path::{Path, PathBuf};

/// Render key/value pairs as a `.properties` document.
pub fn to_properties<'a, I>(source_name: &str, pairs: I) -> String
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    let mut out = String::new();

    out.push('#');
    out.push_str(&escape(&format!("Transcoded from {source_name}"), false));
    out.push('\n');

    for (key, value) in pairs {
        out.push_str(&escape(key, true));
        out.push('=');
        out.push_str(&escape(value, false));
        out.push('\n');
    }

    out
}

/// Write `catalog` as `<bundle>.properties` in `output_dir`, returning the file path.
pub fn write_properties_file(catalog: &MessageCatalog, output_dir: &Path) -> GenResult<PathBuf> {
    fs::create_dir_all(output_dir).map_err(|source| GenError::DirectoryCreation {
        path: output_dir.to_path_buf(),
        source,
    })?;

    let source_name = catalog
        .path()
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    let content = to_properties(
        &source_name,
        catalog
            .properties()
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str())),
    );

    let output_file = output_dir.join(format!("{}.properties", catalog.bundle_name()));
    fs::write(&output_file, content).map_err(|e| GenError::io(&output_file, e))?;

    Ok(output_file)
}

/// Escape text for a key or value.
///
/// Every space in a key is escaped; in a value only a leading one is. Characters outside
/// printable ASCII become `\uXXXX` UTF-16 escapes.
fn escape(text: &str, is_key: bool) -> String {
    let mut out = String::with_capacity(text.len());

    for (index, c) in text.chars().enumerate() {
        match c {
            ' ' if index == 0 || is_key => out.push_str("\\ "),
            '\\' => out.push_str("\\\\"),
            '\t' => out.push_str("\\t"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\x0c' => out.push_str("\\f"),
            '=' | ':' | '#' | '!' => {
                out.push('\\');
                out.push(c);
            }
            ' '..='~' => out.push(c),
            _ => {
                let mut units = [0u16; 2];
                for unit in c.encode_utf16(&mut units) {
                    out.push_str(&format!("\\u{unit:04X}"));
                }
            }
        }
    }

    out
}

#[cfg(test)]
#[path = "properties/properties_tests.rs"]
mod properties_tests;
