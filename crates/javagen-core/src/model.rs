//! Entry model for generated artifacts.
//!
//! Loaders produce [`CatalogEntry`] values in first-seen order and wrap them in an
//! [`ArtifactSpec`]; the emitter consumes each artifact once to render a source file.

use crate::naming::{
    is_java_identifier, is_package_name, media_type_to_identifier, message_key_to_identifier,
    split_qualified_name,
};
use crate::{BUNDLE_FIELD, GenError, GenResult, MEDIA_TYPE_CLASS_NAME, MESSAGE_CLASS_NAME_KEY};
use serde::Serialize;
use std::collections::HashMap;
use std::fmt;
use std::path::PathBuf;

/// One row from a source catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogEntry {
    /// Raw catalog key (message code or media type).
    pub key: String,

    /// Message template; empty for media types.
    pub value: String,

    /// File extensions of a media type, preferred first.
    pub extensions: Vec<String>,
}

impl CatalogEntry {
    /// Create a message catalog entry.
    pub fn message(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
            extensions: Vec::new(),
        }
    }

    /// Create a media-type entry.
    pub fn media_type<I, S>(media_type: impl Into<String>, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            key: media_type.into(),
            value: String::new(),
            extensions: extensions.into_iter().map(Into::into).collect(),
        }
    }
}

/// What kind of source file an [`ArtifactSpec`] renders to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ArtifactKind {
    /// A final class of `public static final String` constants.
    ConstantsClass,

    /// An enum of types with lookup methods.
    TypeEnum,
}

/// A valid, normalized Java identifier derived from a catalog key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct GeneratedIdentifier(String);

impl GeneratedIdentifier {
    /// Normalize `key` according to the rules for `kind`.
    ///
    /// Fails when the result is not a legal Java identifier.
    pub fn derive(kind: ArtifactKind, key: &str) -> GenResult<Self> {
        let identifier = match kind {
            ArtifactKind::ConstantsClass => message_key_to_identifier(key),
            ArtifactKind::TypeEnum => media_type_to_identifier(key),
        };

        if !is_java_identifier(&identifier) {
            return Err(GenError::InvalidIdentifier {
                key: key.to_string(),
                identifier,
            });
        }

        Ok(Self(identifier))
    }

    /// The identifier text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for GeneratedIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Target description for one generated source file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArtifactSpec {
    /// Dotted package name; empty for the default package.
    pub package_name: String,

    /// Simple class name.
    pub class_name: String,

    /// Resource bundle base name (message catalogs only).
    pub bundle_name: Option<String>,

    /// Kind of source to render.
    pub kind: ArtifactKind,

    /// Entries in first-seen order.
    pub entries: Vec<CatalogEntry>,
}

impl ArtifactSpec {
    /// Describe a constants class named by a fully qualified class name.
    pub fn constants(
        qualified_name: &str,
        bundle_name: impl Into<String>,
        entries: Vec<CatalogEntry>,
    ) -> Self {
        let (package, class) = split_qualified_name(qualified_name);

        Self {
            package_name: package.to_string(),
            class_name: class.to_string(),
            bundle_name: Some(bundle_name.into()),
            kind: ArtifactKind::ConstantsClass,
            entries,
        }
    }

    /// Describe the media-type enumeration in `package`.
    pub fn media_types(package: impl Into<String>, entries: Vec<CatalogEntry>) -> Self {
        Self {
            package_name: package.into(),
            class_name: MEDIA_TYPE_CLASS_NAME.to_string(),
            bundle_name: None,
            kind: ArtifactKind::TypeEnum,
            entries,
        }
    }

    /// Fully qualified class name.
    pub fn qualified_name(&self) -> String {
        if self.package_name.is_empty() {
            self.class_name.clone()
        } else {
            format!("{}.{}", self.package_name, self.class_name)
        }
    }

    /// Source path relative to the generated-sources root, e.g. `a/b/Codes.java`.
    pub fn relative_path(&self) -> PathBuf {
        let mut path: PathBuf = self
            .package_name
            .split('.')
            .filter(|segment| !segment.is_empty())
            .collect();
        path.push(format!("{}.java", self.class_name));
        path
    }

    /// Check that the package and class names are legal Java names.
    ///
    /// The class name must be an identifier; the package may be empty.
    pub fn validate_names(&self) -> GenResult<()> {
        if !is_java_identifier(&self.class_name) {
            return Err(GenError::InvalidIdentifier {
                key: self.qualified_name(),
                identifier: self.class_name.clone(),
            });
        }

        if !is_package_name(&self.package_name) {
            return Err(GenError::InvalidIdentifier {
                key: self.qualified_name(),
                identifier: self.package_name.clone(),
            });
        }

        Ok(())
    }

    /// Normalize every entry key, in entry order.
    ///
    /// Fails if the class or package name is not legal, if a key does not yield a legal
    /// identifier, or if two keys collide. For constants classes the `BUNDLE` field is
    /// reserved as well.
    pub fn identifiers(&self) -> GenResult<Vec<GeneratedIdentifier>> {
        self.validate_names()?;

        let mut seen: HashMap<GeneratedIdentifier, &str> = HashMap::new();
        let mut identifiers = Vec::with_capacity(self.entries.len());

        if self.bundle_name.is_some() {
            seen.insert(
                GeneratedIdentifier(BUNDLE_FIELD.to_string()),
                MESSAGE_CLASS_NAME_KEY,
            );
        }

        for entry in &self.entries {
            let identifier = GeneratedIdentifier::derive(self.kind, &entry.key)?;

            if let Some(first) = seen.get(&identifier) {
                return Err(GenError::IdentifierCollision {
                    identifier: identifier.0,
                    first: (*first).to_string(),
                    second: entry.key.clone(),
                });
            }

            seen.insert(identifier.clone(), &entry.key);
            identifiers.push(identifier);
        }

        Ok(identifiers)
    }
}
