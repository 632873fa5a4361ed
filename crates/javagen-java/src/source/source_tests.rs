#![allow(non_snake_case)]

use super::*;
use test_case::test_case;

#[test_case("FOO-1", r#""FOO-1""# ; "plain key")]
#[test_case(r#"say "hi""#, r#""say \"hi\"""# ; "quotes escaped")]
#[test_case(r"C:\dir", r#""C:\\dir""# ; "backslash doubled")]
#[test_case("a\nb", r#""a\nb""# ; "newline escaped")]
#[test_case("\u{1}", r#""\001""# ; "control as octal")]
#[test_case("caf\u{e9}", r#""caf\u00e9""# ; "non ascii as unicode escape")]
fn string_literal___escapes(input: &str, expected: &str) {
    assert_eq!(string_literal(input), expected);
}

#[test_case("Hello {}", "Hello {}" ; "placeholders kept")]
#[test_case("a */ b", "a *&#47; b" ; "comment terminator broken")]
#[test_case("<b>&</b>", "&lt;b&gt;&amp;&lt;/b&gt;" ; "html escaped")]
#[test_case("@deprecated", "&#64;deprecated" ; "leading tag escaped")]
#[test_case("mail me@host", "mail me@host" ; "inner at kept")]
#[test_case(r"\u000a", "&#92;u000a" ; "unicode escape neutralized")]
fn javadoc_text___escapes(input: &str, expected: &str) {
    assert_eq!(javadoc_text(input), expected);
}

#[test]
fn push_javadoc___indents_every_line() {
    let mut code = String::new();

    push_javadoc(&mut code, INDENT, &["First".to_string(), String::new(), "Second".to_string()]);

    assert_eq!(
        code,
        "    /**\n     * First\n     *\n     * Second\n     */\n"
    );
}

#[test]
fn push_package___default_package___writes_nothing() {
    let mut code = String::new();

    push_package(&mut code, "");

    assert!(code.is_empty());
}

#[test]
fn text_lines___prefixes_first_line_and_trims() {
    let lines = text_lines("Message: ", "  first line\n      second line\n");

    assert_eq!(lines, vec!["Message: first line", "second line"]);
}

#[test]
fn text_lines___empty_text___keeps_prefix() {
    assert_eq!(text_lines("Message: ", ""), vec!["Message:"]);
}
