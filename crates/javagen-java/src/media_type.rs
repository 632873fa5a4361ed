//! Media-type enum rendering.
//!
//! The generated enum depends only on the JDK. Its lookup methods follow the same rules
//! as `javagen_catalog::MediaTypeIndex`:
//!
//! | Java method                    | Behavior                                               |
//! |--------------------------------|--------------------------------------------------------|
//! | `fromString(type)`             | case-insensitive exact match                           |
//! | `fromExt(ext[, hint])`         | first extension match, hinted type prefix wins         |
//! | `getTypes(class)`              | every type under `class/`                              |
//! | `parse(uri[, hint])`           | drop `#fragment`, look up by extension or by type      |

use crate::source::{INDENT, push_generated_header, push_javadoc, push_package, string_literal};
use javagen_core::{ArtifactSpec, GenError, GenResult, GeneratedIdentifier};

const IMPORTS: &[&str] = &[
    "java.net.URI",
    "java.util.ArrayList",
    "java.util.List",
    "java.util.Locale",
    "java.util.Optional",
];

/// Fields, constructor, and lookup methods following the constant list.
///
/// `{class}` is replaced by the enum's simple name.
const MEMBERS: &str = r#"
    private final String myType;

    private final String[] myExts;

    {class}(final String aType, final String[] aExts) {
        myType = aType;
        myExts = aExts;
    }

    /**
     * Gets the string form of the media type.
     *
     * @return The media type
     */
    @Override
    public String toString() {
        return myType;
    }

    /**
     * Gets the preferred file extension of the media type.
     *
     * @return The preferred file extension
     */
    public String getExt() {
        return myExts[0];
    }

    /**
     * Gets every file extension of the media type, preferred first.
     *
     * @return The file extensions
     */
    public String[] getExts() {
        return myExts.clone();
    }

    /**
     * Looks up a media type by its string form, ignoring case.
     *
     * @param aType A media type string
     * @return The matching media type, if any
     */
    public static Optional<{class}> fromString(final String aType) {
        for (final {class} mediaType : values()) {
            if (mediaType.myType.equalsIgnoreCase(aType)) {
                return Optional.of(mediaType);
            }
        }

        return Optional.empty();
    }

    /**
     * Looks up the first media type using a file extension, ignoring case.
     *
     * @param aExt A file extension
     * @return The matching media type, if any
     */
    public static Optional<{class}> fromExt(final String aExt) {
        return fromExt(aExt, null);
    }

    /**
     * Looks up a media type using a file extension, preferring a type that starts with the
     * supplied hint (e.g. "image"). Without a hinted match the first match is returned.
     *
     * @param aExt A file extension
     * @param aHint A media type prefix; may be null
     * @return The matching media type, if any
     */
    public static Optional<{class}> fromExt(final String aExt, final String aHint) {
        final String hint = aHint == null ? null : aHint.toLowerCase(Locale.ROOT);
        {class} chosen = null;

        for (final {class} mediaType : values()) {
            for (final String ext : mediaType.myExts) {
                if (ext.equalsIgnoreCase(aExt)) {
                    if (hint != null && mediaType.myType.toLowerCase(Locale.ROOT).startsWith(hint)) {
                        return Optional.of(mediaType);
                    }

                    if (chosen == null) {
                        chosen = mediaType;
                    }

                    break;
                }
            }
        }

        return Optional.ofNullable(chosen);
    }

    /**
     * Gets every media type in the supplied class (e.g. "image").
     *
     * @param aClass A top-level media type
     * @return The media types in that class
     */
    public static List<{class}> getTypes(final String aClass) {
        final String prefix = aClass.toLowerCase(Locale.ROOT) + "/";
        final List<{class}> types = new ArrayList<>();

        for (final {class} mediaType : values()) {
            if (mediaType.myType.toLowerCase(Locale.ROOT).startsWith(prefix)) {
                types.add(mediaType);
            }
        }

        return types;
    }

    /**
     * Looks up a media type from the file extension of a URI.
     *
     * @param aURI A URI
     * @return The matching media type, if any
     */
    public static Optional<{class}> parse(final URI aURI) {
        return parse(aURI.toString(), null);
    }

    /**
     * Looks up a media type from the file extension of a URI, preferring the hinted class.
     *
     * @param aURI A URI
     * @param aHint A media type prefix; may be null
     * @return The matching media type, if any
     */
    public static Optional<{class}> parse(final URI aURI, final String aHint) {
        return parse(aURI.toString(), aHint);
    }

    /**
     * Looks up a media type from the file extension of a URI or path. A string without an
     * extension is looked up as a media type string.
     *
     * @param aURI A URI or path
     * @return The matching media type, if any
     */
    public static Optional<{class}> parse(final String aURI) {
        return parse(aURI, null);
    }

    /**
     * Looks up a media type from the file extension of a URI or path, preferring the hinted
     * class. A string without an extension is looked up as a media type string.
     *
     * @param aURI A URI or path
     * @param aHint A media type prefix; may be null
     * @return The matching media type, if any
     */
    public static Optional<{class}> parse(final String aURI, final String aHint) {
        final int hash = aURI.indexOf('#');
        final String uri = hash == -1 ? aURI : aURI.substring(0, hash);
        final String ext = getExtension(uri);

        return ext == null ? fromString(uri) : fromExt(ext, aHint);
    }

    private static String getExtension(final String aURI) {
        final int query = aURI.indexOf('?');
        String path = query == -1 ? aURI : aURI.substring(0, query);
        final int scheme = path.indexOf("://");

        if (scheme != -1) {
            final String rest = path.substring(scheme + 3);
            final int slash = rest.indexOf('/');

            path = slash == -1 ? "" : rest.substring(slash);
        }

        final String name = path.substring(path.lastIndexOf('/') + 1);
        final int dot = name.lastIndexOf('.');

        if (dot == -1) {
            return null;
        }

        final String ext = name.substring(dot + 1).trim();

        return ext.isEmpty() ? null : ext;
    }
}
"#;

/// Render the media-type enum.
///
/// Every entry needs at least one extension; `getExt()` reads the first.
pub(crate) fn render_type_enum(
    spec: &ArtifactSpec,
    identifiers: &[GeneratedIdentifier],
) -> GenResult<String> {
    if let Some(entry) = spec.entries.iter().find(|e| e.extensions.is_empty()) {
        return Err(GenError::InvalidEntry {
            key: entry.key.clone(),
            reason: "media type has no file extensions".to_string(),
        });
    }

    let mut code = String::new();

    push_package(&mut code, &spec.package_name);
    for import in IMPORTS {
        code.push_str(&format!("import {import};\n"));
    }
    code.push('\n');

    push_generated_header(&mut code);
    code.push_str(&format!("public enum {} {{\n", spec.class_name));

    let last = spec.entries.len().saturating_sub(1);
    for (index, (entry, identifier)) in spec.entries.iter().zip(identifiers).enumerate() {
        let exts: Vec<String> = entry.extensions.iter().map(|e| string_literal(e)).collect();
        let terminator = if index == last { ';' } else { ',' };

        code.push('\n');
        push_javadoc(&mut code, INDENT, &[format!("Media-type for {}", entry.key)]);
        code.push_str(&format!(
            "{INDENT}{identifier}({}, new String[] {{ {} }}){terminator}\n",
            string_literal(&entry.key),
            exts.join(", ")
        ));
    }

    if spec.entries.is_empty() {
        code.push('\n');
        code.push_str(INDENT);
        code.push_str(";\n");
    }

    code.push_str(&MEMBERS.replace("{class}", &spec.class_name));

    Ok(code)
}
