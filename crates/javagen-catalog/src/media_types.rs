//! Media-type catalog loading.
//!
//! Reads `mime.types` style mapping files (`type ext1 ext2 ...`) and merges them into a
//! single ordered list. Files are merged in priority order: the bundled defaults first,
//! then `/etc/mime.types`, then `~/.mime.types`. A type already present is never
//! replaced by a later file, so the built-in definitions win over same-named overrides.

use javagen_core::{ArtifactSpec, CatalogEntry, GenError, GenResult, MessageCode};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tracing::{debug, trace};

/// The default media types compiled into javagen.
pub const DEFAULT_MIME_TYPES: &str = include_str!("../resources/mime.types");

/// System-wide override file.
pub const SYSTEM_MIME_TYPES: &str = "/etc/mime.types";

/// Per-user override file name, relative to the home directory.
pub const USER_MIME_TYPES: &str = ".mime.types";

/// Where the default media types come from.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum MediaTypeSource {
    /// The catalog compiled into javagen.
    #[default]
    Bundled,

    /// A replacement file; it must exist.
    File(PathBuf),
}

/// Parse one line of a `mime.types` file.
///
/// Returns `None` for blank lines, comments, and types listed without extensions.
///
/// # Examples
///
/// ```
/// use javagen_catalog::media_types::parse_line;
///
/// let entry = parse_line("image/jpeg\tjpeg jpg jpe").unwrap();
/// assert_eq!(entry.key, "image/jpeg");
/// assert_eq!(entry.extensions, vec!["jpeg", "jpg", "jpe"]);
///
/// assert!(parse_line("# image/png png").is_none());
/// assert!(parse_line("multipart/mixed").is_none());
/// ```
pub fn parse_line(line: &str) -> Option<CatalogEntry> {
    let line = line.trim();

    if line.is_empty() || line.starts_with('#') {
        return None;
    }

    let mut parts = line.split_whitespace();
    let media_type = parts.next()?;
    let extensions: Vec<&str> = parts.collect();

    if extensions.is_empty() {
        return None;
    }

    Some(CatalogEntry::media_type(media_type, extensions))
}

/// An ordered, de-duplicated accumulation of media types.
#[derive(Debug, Clone, Default)]
pub struct MediaTypeCatalog {
    entries: Vec<CatalogEntry>,
    seen: HashSet<String>,
}

impl MediaTypeCatalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a catalog holding the default media types.
    ///
    /// A missing replacement file is fatal: [`GenError::MissingDefaultMediaTypes`].
    pub fn with_defaults(source: &MediaTypeSource) -> GenResult<Self> {
        let mut catalog = Self::new();

        match source {
            MediaTypeSource::Bundled => {
                let added = catalog.merge_str(DEFAULT_MIME_TYPES);
                debug!(
                    code = %MessageCode::MediaTypesRead,
                    "{}",
                    MessageCode::MediaTypesRead.format(&[&added, &"bundled defaults"])
                );
            }
            MediaTypeSource::File(path) => match catalog.merge_file(path)? {
                Some(_) => {}
                None => return Err(GenError::MissingDefaultMediaTypes(path.clone())),
            },
        }

        Ok(catalog)
    }

    /// Add an entry unless its type (compared case-insensitively) is already present.
    pub fn insert(&mut self, entry: CatalogEntry) -> bool {
        if self.seen.insert(entry.key.to_lowercase()) {
            self.entries.push(entry);
            true
        } else {
            false
        }
    }

    /// Merge every valid line of `content`, returning how many types were new.
    pub fn merge_str(&mut self, content: &str) -> usize {
        let mut added = 0;

        for entry in content.lines().filter_map(parse_line) {
            if self.insert(entry) {
                added += 1;
            }
        }

        added
    }

    /// Merge a file, returning how many types were new.
    ///
    /// A file that does not exist is not an error and yields `None`.
    pub fn merge_file(&mut self, path: &Path) -> GenResult<Option<usize>> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                trace!(
                    code = %MessageCode::MediaTypesNotFound,
                    "{}",
                    MessageCode::MediaTypesNotFound.format(&[&path.display()])
                );
                return Ok(None);
            }
            Err(e) => return Err(GenError::io(path, e)),
        };

        let added = self.merge_str(&content);
        debug!(
            code = %MessageCode::MediaTypesRead,
            "{}",
            MessageCode::MediaTypesRead.format(&[&added, &path.display()])
        );

        Ok(Some(added))
    }

    /// Whether `media_type` is present, ignoring case.
    pub fn contains(&self, media_type: &str) -> bool {
        self.seen.contains(&media_type.to_lowercase())
    }

    /// Entries in merge order.
    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    /// Number of media types.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the catalog has no media types.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Take the entries out of the catalog.
    pub fn into_entries(self) -> Vec<CatalogEntry> {
        self.entries
    }

    /// Describe the `MediaType` enumeration in `package`.
    pub fn into_artifact(self, package: &str) -> ArtifactSpec {
        ArtifactSpec::media_types(package, self.entries)
    }
}

/// The well-known override files, in the order they are merged.
pub fn override_paths() -> Vec<PathBuf> {
    let mut paths = vec![PathBuf::from(SYSTEM_MIME_TYPES)];

    if let Some(home) = dirs::home_dir() {
        paths.push(home.join(USER_MIME_TYPES));
    }

    paths
}

#[cfg(test)]
#[path = "media_types/media_types_tests.rs"]
mod media_types_tests;
