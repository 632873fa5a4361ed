//! Message catalog loading.
//!
//! A message catalog is a Java XML property list:
//!
//! ```xml
//! <?xml version="1.0" encoding="UTF-8"?>
//! <!DOCTYPE properties SYSTEM "http://java.sun.com/dtd/properties.dtd">
//! <properties>
//!   <comment>Application messages</comment>
//!   <entry key="message-class-name">com.example.MessageCodes</entry>
//!   <entry key="APP-001">Could not open {}</entry>
//! </properties>
//! ```
//!
//! The `message-class-name` entry names the constants class to generate; every other
//! entry becomes one constant. The file name minus its extension is the bundle name.

use javagen_core::{ArtifactSpec, CatalogEntry, GenError, GenResult, MESSAGE_CLASS_NAME_KEY};
use roxmltree::{Document, Node, ParsingOptions};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// File name suffix of catalogs picked up by auto-discovery.
pub const MESSAGE_FILE_SUFFIX: &str = "_messages.xml";

/// A parsed message catalog.
#[derive(Debug, Clone)]
pub struct MessageCatalog {
    path: PathBuf,
    properties: Vec<(String, String)>,
}

impl MessageCatalog {
    /// Read and parse a catalog file.
    ///
    /// A file that does not exist yields [`GenError::MissingInputFile`].
    pub fn load(path: impl AsRef<Path>) -> GenResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| GenError::from_read(path, e))?;

        Self::parse(path, &content)
    }

    /// Parse catalog text; `path` supplies the bundle name and error context.
    pub fn parse(path: impl Into<PathBuf>, content: &str) -> GenResult<Self> {
        let path = path.into();
        let properties = parse_properties_xml(&path, content)?;

        Ok(Self { path, properties })
    }

    /// Path the catalog was read from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Every key/value pair in document order, including the class-name key.
    pub fn properties(&self) -> &[(String, String)] {
        &self.properties
    }

    /// Value stored under `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.properties
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Fully qualified name of the class to generate.
    pub fn class_name(&self) -> Option<&str> {
        self.get(MESSAGE_CLASS_NAME_KEY)
            .map(str::trim)
            .filter(|name| !name.is_empty())
    }

    /// File name without its extension.
    pub fn bundle_name(&self) -> String {
        self.path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    /// Message entries, excluding the class-name key.
    pub fn entries(&self) -> Vec<CatalogEntry> {
        self.properties
            .iter()
            .filter(|(key, _)| key != MESSAGE_CLASS_NAME_KEY)
            .map(|(key, value)| CatalogEntry::message(key, value))
            .collect()
    }

    /// Describe the constants class this catalog generates.
    pub fn to_artifact(&self) -> GenResult<ArtifactSpec> {
        let class_name =
            self.class_name()
                .ok_or_else(|| GenError::MissingRequiredMetadataKey {
                    path: self.path.clone(),
                    key: MESSAGE_CLASS_NAME_KEY.to_string(),
                })?;

        Ok(ArtifactSpec::constants(
            class_name,
            self.bundle_name(),
            self.entries(),
        ))
    }
}

/// Parse a Java XML property list into ordered key/value pairs.
///
/// A key defined twice keeps its first value.
pub fn parse_properties_xml(path: &Path, content: &str) -> GenResult<Vec<(String, String)>> {
    let xml_error = |message: String| GenError::Xml {
        path: path.to_path_buf(),
        message,
    };

    let options = ParsingOptions {
        allow_dtd: true,
        ..ParsingOptions::default()
    };
    let doc =
        Document::parse_with_options(content, options).map_err(|e| xml_error(e.to_string()))?;

    let root = doc.root_element();
    if root.tag_name().name() != "properties" {
        return Err(xml_error(format!(
            "expected <properties> root element, found <{}>",
            root.tag_name().name()
        )));
    }

    let mut seen = HashSet::new();
    let mut properties = Vec::new();

    for node in root.children().filter(Node::is_element) {
        match node.tag_name().name() {
            "comment" => {}
            "entry" => {
                let key = node
                    .attribute("key")
                    .ok_or_else(|| xml_error("<entry> without a key attribute".to_string()))?;

                if key.is_empty() {
                    return Err(xml_error("<entry> with an empty key".to_string()));
                }

                if seen.insert(key.to_string()) {
                    properties.push((key.to_string(), text_content(node)));
                }
            }
            other => return Err(xml_error(format!("unexpected element <{other}>"))),
        }
    }

    Ok(properties)
}

/// Concatenated text of an element's children.
fn text_content(node: Node<'_, '_>) -> String {
    node.children()
        .filter(Node::is_text)
        .filter_map(|child| child.text())
        .collect()
}

/// Find `*_messages.xml` catalogs directly inside `dir`, sorted by path.
///
/// A directory that does not exist yields no files.
pub fn discover_message_files(dir: &Path) -> GenResult<Vec<PathBuf>> {
    let pattern = format!(
        "{}/*{MESSAGE_FILE_SUFFIX}",
        glob::Pattern::escape(&dir.to_string_lossy())
    );

    let paths = glob::glob(&pattern).map_err(|e| GenError::Config(e.to_string()))?;
    let mut files = Vec::new();

    for entry in paths {
        let path = entry.map_err(|e| {
            let path = e.path().to_path_buf();
            GenError::io(path, e.into())
        })?;

        if path.is_file() {
            files.push(path);
        }
    }

    files.sort();
    Ok(files)
}
