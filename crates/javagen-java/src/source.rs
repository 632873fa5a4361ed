//! Java source text helpers shared by the renderers.

use javagen_core::GENERATED_MARKER;

/// One level of indentation in generated code.
pub(crate) const INDENT: &str = "    ";

/// Write the package declaration, if any, followed by a blank line.
pub(crate) fn push_package(code: &mut String, package: &str) {
    if !package.is_empty() {
        code.push_str(&format!("package {package};\n\n"));
    }
}

/// Write the class-level Javadoc carrying the generated-code marker.
pub(crate) fn push_generated_header(code: &mut String) {
    code.push_str("/**\n");
    code.push_str(&format!(" * {GENERATED_MARKER}\n"));
    code.push_str(" */\n");
}

/// Write a Javadoc block at `indent`.
///
/// `lines` are raw text; each is escaped. An empty line yields a bare ` *`.
pub(crate) fn push_javadoc(code: &mut String, indent: &str, lines: &[String]) {
    code.push_str(indent);
    code.push_str("/**\n");

    for line in lines {
        code.push_str(indent);
        if line.is_empty() {
            code.push_str(" *\n");
        } else {
            code.push_str(" * ");
            code.push_str(&javadoc_text(line));
            code.push('\n');
        }
    }

    code.push_str(indent);
    code.push_str(" */\n");
}

/// Quote `s` as a Java string literal.
///
/// Output is pure ASCII: non-ASCII characters become `\uXXXX` escapes and control
/// characters use the escape sequences javac accepts inside a literal.
pub(crate) fn string_literal(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');

    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\x08' => out.push_str("\\b"),
            '\x0c' => out.push_str("\\f"),
            c if c.is_ascii_control() => out.push_str(&format!("\\{:03o}", c as u32)),
            c if c.is_ascii() => out.push(c),
            c => {
                let mut units = [0u16; 2];
                for unit in c.encode_utf16(&mut units) {
                    out.push_str(&format!("\\u{unit:04x}"));
                }
            }
        }
    }

    out.push('"');
    out
}

/// Escape text for use inside a Javadoc comment.
///
/// Neutralizes comment terminators, HTML markup, tags at the start of a line, and
/// backslashes (javac decodes `\u` escapes even inside comments).
pub(crate) fn javadoc_text(s: &str) -> String {
    let mut out = String::with_capacity(s.len());

    for (index, c) in s.chars().enumerate() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '\\' => out.push_str("&#92;"),
            '@' if index == 0 => out.push_str("&#64;"),
            '/' if out.ends_with('*') => out.push_str("&#47;"),
            c => out.push(c),
        }
    }

    out
}

/// Split message text into Javadoc lines, dropping surrounding blank lines.
pub(crate) fn text_lines(prefix: &str, text: &str) -> Vec<String> {
    let mut lines: Vec<String> = text.trim().lines().map(|l| l.trim().to_string()).collect();

    match lines.first_mut() {
        Some(first) => first.insert_str(0, prefix),
        None => lines.push(prefix.trim_end().to_string()),
    }

    lines
}

#[cfg(test)]
#[path = "source/source_tests.rs"]
mod source_tests;
