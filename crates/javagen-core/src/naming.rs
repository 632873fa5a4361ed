//! Identifier normalization for generated Java members.
//!
//! Catalog keys are not always legal Java identifiers. This module maps them onto
//! constant and enum-value names deterministically; the result depends on the key
//! alone, never on other entries or on file order.
//!
//! # Supported Conversions
//!
//! | Input | Function | Output |
//! |-------|----------|--------|
//! | `MVN-010` | [`message_key_to_identifier`] | `MVN_010` |
//! | `image/svg+xml` | [`media_type_to_identifier`] | `IMAGE_SVG_PLUS_XML` |
//! | `a.b.Codes` | [`split_qualified_name`] | `("a.b", "Codes")` |

/// Java reserved words and literals that cannot be used as identifiers.
const JAVA_KEYWORDS: &[&str] = &[
    "abstract",
    "assert",
    "boolean",
    "break",
    "byte",
    "case",
    "catch",
    "char",
    "class",
    "const",
    "continue",
    "default",
    "do",
    "double",
    "else",
    "enum",
    "extends",
    "false",
    "final",
    "finally",
    "float",
    "for",
    "goto",
    "if",
    "implements",
    "import",
    "instanceof",
    "int",
    "interface",
    "long",
    "native",
    "new",
    "null",
    "package",
    "private",
    "protected",
    "public",
    "return",
    "short",
    "static",
    "strictfp",
    "super",
    "switch",
    "synchronized",
    "this",
    "throw",
    "throws",
    "transient",
    "true",
    "try",
    "void",
    "volatile",
    "while",
    "_",
];

/// Convert a message key to a constant name.
///
/// Replaces dots and dashes with underscores.
///
/// # Examples
///
/// ```
/// use javagen_core::naming::message_key_to_identifier;
///
/// assert_eq!(message_key_to_identifier("MVN-010"), "MVN_010");
/// assert_eq!(message_key_to_identifier("app.error-1"), "app_error_1");
/// ```
pub fn message_key_to_identifier(key: &str) -> String {
    key.replace(['.', '-'], "_")
}

/// Convert a media type to an enum value name.
///
/// Each run of `/`, `.` and `-` becomes a single underscore, the result is upper-cased,
/// and `+` becomes `_PLUS_`.
///
/// # Examples
///
/// ```
/// use javagen_core::naming::media_type_to_identifier;
///
/// assert_eq!(media_type_to_identifier("image/svg+xml"), "IMAGE_SVG_PLUS_XML");
/// assert_eq!(media_type_to_identifier("application/vnd.ms-excel"), "APPLICATION_VND_MS_EXCEL");
/// ```
pub fn media_type_to_identifier(media_type: &str) -> String {
    let mut collapsed = String::with_capacity(media_type.len());
    let mut in_separator_run = false;

    for c in media_type.chars() {
        if matches!(c, '/' | '.' | '-') {
            if !in_separator_run {
                collapsed.push('_');
                in_separator_run = true;
            }
        } else {
            collapsed.push(c);
            in_separator_run = false;
        }
    }

    collapsed.to_ascii_uppercase().replace('+', "_PLUS_")
}

/// Check whether a string can be used as a Java identifier.
///
/// Only ASCII identifiers are accepted; generated sources stay plain ASCII.
///
/// # Examples
///
/// ```
/// use javagen_core::naming::is_java_identifier;
///
/// assert!(is_java_identifier("MVN_010"));
/// assert!(!is_java_identifier("010_MVN"));
/// assert!(!is_java_identifier("class"));
/// ```
pub fn is_java_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    let Some(first) = chars.next() else {
        return false;
    };

    if !(first.is_ascii_alphabetic() || first == '_' || first == '$') {
        return false;
    }

    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$') && !JAVA_KEYWORDS.contains(&s)
}

/// Check whether a string is a dotted Java package name.
///
/// The empty string is the default package and is accepted.
pub fn is_package_name(s: &str) -> bool {
    s.is_empty() || s.split('.').all(is_java_identifier)
}

/// Split a fully qualified class name into package and simple name.
///
/// # Examples
///
/// ```
/// use javagen_core::naming::split_qualified_name;
///
/// assert_eq!(split_qualified_name("a.b.Codes"), ("a.b", "Codes"));
/// assert_eq!(split_qualified_name("Codes"), ("", "Codes"));
/// ```
pub fn split_qualified_name(name: &str) -> (&str, &str) {
    match name.rsplit_once('.') {
        Some((package, class)) => (package, class),
        None => ("", name),
    }
}

#[cfg(test)]
mod tests {
    #![allow(non_snake_case)]

    use super::*;
    use test_case::test_case;

    #[test]
    fn message_key_to_identifier___replaces_dashes() {
        assert_eq!(message_key_to_identifier("MVN-010"), "MVN_010");
        assert_eq!(message_key_to_identifier("a-b-c"), "a_b_c");
    }

    #[test]
    fn message_key_to_identifier___replaces_dots() {
        assert_eq!(message_key_to_identifier("user.create"), "user_create");
    }

    #[test]
    fn message_key_to_identifier___does_not_collapse_runs() {
        assert_eq!(message_key_to_identifier("a--b"), "a__b");
        assert_eq!(message_key_to_identifier("a.-b"), "a__b");
    }

    #[test]
    fn message_key_to_identifier___preserves_case() {
        assert_eq!(message_key_to_identifier("Foo-bar"), "Foo_bar");
    }

    #[test_case("image/jp2", "IMAGE_JP2")]
    #[test_case("image/svg+xml", "IMAGE_SVG_PLUS_XML")]
    #[test_case("image/jpeg", "IMAGE_JPEG")]
    #[test_case("application/vnd.ms-excel", "APPLICATION_VND_MS_EXCEL")]
    #[test_case("application/vnd.oasis.opendocument.text", "APPLICATION_VND_OASIS_OPENDOCUMENT_TEXT")]
    #[test_case("application/atom+xml", "APPLICATION_ATOM_PLUS_XML")]
    #[test_case("application/x-.-weird", "APPLICATION_X_WEIRD")]
    fn media_type_to_identifier___normalizes(input: &str, expected: &str) {
        assert_eq!(media_type_to_identifier(input), expected);
    }

    #[test]
    fn media_type_to_identifier___is_case_insensitive_in_output() {
        assert_eq!(
            media_type_to_identifier("Image/JPEG"),
            media_type_to_identifier("image/jpeg")
        );
    }

    #[test]
    fn is_java_identifier___accepts_constant_names() {
        assert!(is_java_identifier("IMAGE_JP2"));
        assert!(is_java_identifier("_private"));
        assert!(is_java_identifier("$dollar"));
    }

    #[test]
    fn is_java_identifier___rejects_invalid_names() {
        assert!(!is_java_identifier(""));
        assert!(!is_java_identifier("1ST"));
        assert!(!is_java_identifier("has space"));
        assert!(!is_java_identifier("caf\u{e9}"));
        assert!(!is_java_identifier("new"));
        assert!(!is_java_identifier("_"));
    }

    #[test]
    fn is_package_name___checks_every_segment() {
        assert!(is_package_name("info.freelibrary.util"));
        assert!(is_package_name(""));
        assert!(!is_package_name("info..util"));
        assert!(!is_package_name("info.1bad"));
        assert!(!is_package_name("com.example.package"));
    }

    #[test]
    fn split_qualified_name___splits_on_last_dot() {
        assert_eq!(split_qualified_name("a.b.C"), ("a.b", "C"));
        assert_eq!(split_qualified_name("C"), ("", "C"));
    }
}
