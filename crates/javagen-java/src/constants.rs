//! Constants class rendering for message catalogs.

use crate::source::{
    INDENT, push_generated_header, push_javadoc, push_package, string_literal, text_lines,
};
use javagen_core::{ArtifactSpec, BUNDLE_FIELD, GeneratedIdentifier};

/// Render a `public final class` with one `String` constant per entry.
///
/// Each constant's value is the raw catalog key and its Javadoc carries the message text.
/// When a bundle name is set a trailing `BUNDLE` constant holds it.
pub(crate) fn render_constants_class(
    spec: &ArtifactSpec,
    identifiers: &[GeneratedIdentifier],
) -> String {
    let mut code = String::new();

    push_package(&mut code, &spec.package_name);
    push_generated_header(&mut code);
    code.push_str(&format!("public final class {} {{\n", spec.class_name));

    for (entry, identifier) in spec.entries.iter().zip(identifiers) {
        code.push('\n');
        push_javadoc(&mut code, INDENT, &text_lines("Message: ", &entry.value));
        code.push_str(&format!(
            "{INDENT}public static final String {identifier} = {};\n",
            string_literal(&entry.key)
        ));
    }

    if let Some(bundle) = &spec.bundle_name {
        code.push('\n');
        push_javadoc(&mut code, INDENT, &["Message bundle name.".to_string()]);
        code.push_str(&format!(
            "{INDENT}public static final String {BUNDLE_FIELD} = {};\n",
            string_literal(bundle)
        ));
    }

    code.push('\n');
    code.push_str(&format!("{INDENT}private {}() {{\n", spec.class_name));
    code.push_str(&format!("{INDENT}{INDENT}super();\n"));
    code.push_str(&format!("{INDENT}}}\n"));
    code.push_str("}\n");

    code
}
