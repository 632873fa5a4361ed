#![allow(non_snake_case)]

use super::*;
use tempfile::TempDir;
use test_case::test_case;

#[test_case("plain", "plain" ; "plain text unchanged")]
#[test_case(" lead", "\\ lead" ; "leading space escaped")]
#[test_case("a b", "a b" ; "inner space kept in values")]
#[test_case("a=b:c", "a\\=b\\:c" ; "separators escaped")]
#[test_case("#!", "\\#\\!" ; "comment markers escaped")]
#[test_case("back\\slash", "back\\\\slash" ; "backslash doubled")]
#[test_case("line\nbreak\ttab", "line\\nbreak\\ttab" ; "control characters escaped")]
#[test_case("caf\u{e9}", "caf\\u00E9" ; "latin1 as unicode escape")]
#[test_case("\u{1F600}", "\\uD83D\\uDE00" ; "astral plane as surrogate pair")]
fn escape___value___matches_java_properties(input: &str, expected: &str) {
    assert_eq!(escape(input, false), expected);
}

#[test]
fn escape___key___escapes_every_space() {
    assert_eq!(escape("a b c", true), "a\\ b\\ c");
}

#[test]
fn to_properties___writes_header_and_pairs_in_order() {
    let text = to_properties(
        "app_messages.xml",
        [("message-class-name", "a.b.Codes"), ("FOO-1", "Hello {}")],
    );

    assert_eq!(
        text,
        "#Transcoded from app_messages.xml\nmessage-class-name=a.b.Codes\nFOO-1=Hello {}\n"
    );
}

#[test]
fn write_properties_file___uses_bundle_name_and_creates_directory() {
    let dir = TempDir::new().unwrap();
    let output_dir = dir.path().join("target").join("classes");
    let catalog = MessageCatalog::parse(
        "res/app_messages.xml",
        r#"<properties><entry key="FOO-1">Hi</entry></properties>"#,
    )
    .unwrap();

    let written = write_properties_file(&catalog, &output_dir).unwrap();

    assert_eq!(written, output_dir.join("app_messages.properties"));
    let content = fs::read_to_string(&written).unwrap();
    assert!(content.ends_with("FOO-1=Hi\n"));
}

#[test]
fn write_properties_file___is_reproducible() {
    let dir = TempDir::new().unwrap();
    let catalog = MessageCatalog::parse(
        "app_messages.xml",
        r#"<properties><entry key="A">x</entry><entry key="B">y</entry></properties>"#,
    )
    .unwrap();

    let first = fs::read(write_properties_file(&catalog, dir.path()).unwrap()).unwrap();
    let second = fs::read(write_properties_file(&catalog, dir.path()).unwrap()).unwrap();

    assert_eq!(first, second);
}
