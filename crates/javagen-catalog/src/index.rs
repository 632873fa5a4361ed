//! In-process media-type lookups.
//!
//! [`MediaTypeIndex`] answers the same questions as the generated `MediaType` enum
//! (`fromString`, `fromExt`, `getTypes`, `parse`) with the same matching rules, so a
//! lookup can be checked before the Java source is ever compiled.

use javagen_core::CatalogEntry;

/// Lookup view over an ordered list of media-type entries.
#[derive(Debug, Clone, Copy)]
pub struct MediaTypeIndex<'a> {
    entries: &'a [CatalogEntry],
}

impl<'a> MediaTypeIndex<'a> {
    /// Index `entries`; earlier entries win ties.
    pub fn new(entries: &'a [CatalogEntry]) -> Self {
        Self { entries }
    }

    /// Entry whose type equals `media_type`, ignoring case (Unicode-aware, like Java's
    /// `equalsIgnoreCase`).
    pub fn from_string(&self, media_type: &str) -> Option<&'a CatalogEntry> {
        let media_type = media_type.to_lowercase();

        self.entries
            .iter()
            .find(|entry| entry.key.to_lowercase() == media_type)
    }

    /// First entry listing `ext`, ignoring case.
    pub fn from_ext(&self, ext: &str) -> Option<&'a CatalogEntry> {
        self.from_ext_with_hint(ext, None)
    }

    /// Entry listing `ext`, preferring one whose type starts with `hint`.
    ///
    /// Without a hinted match the first entry listing the extension is returned.
    pub fn from_ext_with_hint(&self, ext: &str, hint: Option<&str>) -> Option<&'a CatalogEntry> {
        let hint = hint.map(str::to_lowercase);
        let mut chosen = None;

        for entry in self.entries {
            if entry.extensions.iter().any(|e| e.eq_ignore_ascii_case(ext)) {
                if let Some(hint) = &hint {
                    if entry.key.to_lowercase().starts_with(hint.as_str()) {
                        return Some(entry);
                    }
                }

                if chosen.is_none() {
                    chosen = Some(entry);
                }
            }
        }

        chosen
    }

    /// Every entry whose type is in the `class` top-level type, e.g. `image`.
    pub fn types_of_class(&self, class: &str) -> Vec<&'a CatalogEntry> {
        let prefix = format!("{}/", class.to_lowercase());

        self.entries
            .iter()
            .filter(|entry| entry.key.to_lowercase().starts_with(&prefix))
            .collect()
    }

    /// Resolve a URI or path by its file extension.
    pub fn parse(&self, uri: &str) -> Option<&'a CatalogEntry> {
        self.parse_with_hint(uri, None)
    }

    /// Resolve a URI or path by its file extension, preferring types starting with `hint`.
    ///
    /// The `#fragment` is dropped first. When there is no extension the remaining text is
    /// looked up as a type string.
    pub fn parse_with_hint(&self, uri: &str, hint: Option<&str>) -> Option<&'a CatalogEntry> {
        let uri = strip_fragment(uri);

        match extension_of(uri) {
            Some(ext) => self.from_ext_with_hint(ext, hint),
            None => self.from_string(uri),
        }
    }
}

/// Text before the first `#`.
pub fn strip_fragment(uri: &str) -> &str {
    uri.split_once('#').map_or(uri, |(before, _)| before)
}

/// File extension of the last path segment of a URI or path.
///
/// The query string is ignored, as is the authority of a `scheme://` URI.
///
/// # Examples
///
/// ```
/// use javagen_catalog::index::extension_of;
///
/// assert_eq!(extension_of("http://example.com/a/image.svg?v=2"), Some("svg"));
/// assert_eq!(extension_of("http://example.com"), None);
/// assert_eq!(extension_of("http:/thing.com/image"), None);
/// ```
pub fn extension_of(uri: &str) -> Option<&str> {
    let mut path = uri.split_once('?').map_or(uri, |(before, _)| before);

    if let Some(scheme_end) = path.find("://") {
        let rest = &path[scheme_end + 3..];
        path = rest.find('/').map_or("", |start| &rest[start..]);
    }

    let name = path.rsplit('/').next().unwrap_or(path);
    let (_, ext) = name.rsplit_once('.')?;
    let ext = ext.trim();

    if ext.is_empty() { None } else { Some(ext) }
}
