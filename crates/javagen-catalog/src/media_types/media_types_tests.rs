#![allow(non_snake_case)]

use super::*;
use std::fs;
use tempfile::TempDir;
use test_case::test_case;

// parse_line tests

#[test_case("" ; "empty line")]
#[test_case("   \t  " ; "whitespace only")]
#[test_case("# image/png png" ; "comment")]
#[test_case("  # indented comment" ; "indented comment")]
#[test_case("multipart/mixed" ; "type without extensions")]
#[test_case("  multipart/mixed   " ; "padded type without extensions")]
fn parse_line___skips(line: &str) {
    assert!(parse_line(line).is_none());
}

#[test]
fn parse_line___splits_on_whitespace_runs() {
    let entry = parse_line("  image/jp2 \t\t jp2   jpg2  ").unwrap();

    assert_eq!(entry, CatalogEntry::media_type("image/jp2", ["jp2", "jpg2"]));
}

// Merge tests

#[test]
fn MediaTypeCatalog___merge_str___first_occurrence_wins() {
    let mut catalog = MediaTypeCatalog::new();

    catalog.merge_str("image/jpeg jpeg jpg\n");
    let added = catalog.merge_str("IMAGE/JPEG jfif\nimage/png png\n");

    assert_eq!(added, 1);
    assert_eq!(catalog.len(), 2);
    assert_eq!(catalog.entries()[0].extensions, vec!["jpeg", "jpg"]);
    assert_eq!(catalog.entries()[1].key, "image/png");
}

#[test]
fn MediaTypeCatalog___merge_str___keeps_first_seen_order() {
    let mut catalog = MediaTypeCatalog::new();

    catalog.merge_str("text/plain txt\napplication/json json\naudio/ogg ogg\n");

    let keys: Vec<&str> = catalog.entries().iter().map(|e| e.key.as_str()).collect();
    assert_eq!(keys, vec!["text/plain", "application/json", "audio/ogg"]);
}

#[test]
fn MediaTypeCatalog___contains___ignores_case() {
    let mut catalog = MediaTypeCatalog::new();
    catalog.merge_str("image/SVG+xml svg\n");

    assert!(catalog.contains("image/svg+xml"));
    assert!(!catalog.contains("image/svg"));
}

#[test]
fn MediaTypeCatalog___merge_file___missing___is_not_an_error() {
    let mut catalog = MediaTypeCatalog::new();

    let result = catalog.merge_file(Path::new("/nonexistent/.mime.types")).unwrap();

    assert_eq!(result, None);
    assert!(catalog.is_empty());
}

#[test]
fn MediaTypeCatalog___merge_file___default_wins_over_override() {
    let dir = TempDir::new().unwrap();
    let user_file = dir.path().join(".mime.types");
    fs::write(&user_file, "image/jpeg jfif\nimage/x-custom cst cust\n").unwrap();

    let mut catalog = MediaTypeCatalog::with_defaults(&MediaTypeSource::Bundled).unwrap();
    let before = catalog.len();
    let added = catalog.merge_file(&user_file).unwrap();

    assert_eq!(added, Some(1));
    assert_eq!(catalog.len(), before + 1);
    let jpeg = catalog
        .entries()
        .iter()
        .find(|e| e.key == "image/jpeg")
        .unwrap();
    assert_eq!(jpeg.extensions, vec!["jpeg", "jpg", "jpe"]);
    assert_eq!(catalog.entries().last().unwrap().key, "image/x-custom");
}

// Defaults tests

#[test]
fn MediaTypeCatalog___with_defaults___bundled___has_common_types() {
    let catalog = MediaTypeCatalog::with_defaults(&MediaTypeSource::Bundled).unwrap();

    assert!(catalog.contains("image/jp2"));
    assert!(catalog.contains("image/svg+xml"));
    assert!(catalog.contains("application/json"));
    assert!(!catalog.contains("multipart/mixed"));
}

#[test]
fn MediaTypeCatalog___with_defaults___bundled___never_yields_empty_extensions() {
    let catalog = MediaTypeCatalog::with_defaults(&MediaTypeSource::Bundled).unwrap();

    assert!(catalog.entries().iter().all(|e| !e.extensions.is_empty()));
}

#[test]
fn MediaTypeCatalog___with_defaults___bundled___normalizes_without_collisions() {
    let catalog = MediaTypeCatalog::with_defaults(&MediaTypeSource::Bundled).unwrap();

    let spec = catalog.into_artifact("info.example");

    assert!(spec.identifiers().is_ok());
}

#[test]
fn MediaTypeCatalog___with_defaults___missing_file___is_fatal() {
    let source = MediaTypeSource::File(PathBuf::from("/nonexistent/mime.types"));

    let err = MediaTypeCatalog::with_defaults(&source).unwrap_err();

    assert!(matches!(err, GenError::MissingDefaultMediaTypes(_)));
    assert!(!err.is_recoverable());
}

#[test]
fn MediaTypeCatalog___with_defaults___replacement_file___is_used() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("mime.types");
    fs::write(&file, "# custom\napplication/x-thing thg\n").unwrap();

    let catalog = MediaTypeCatalog::with_defaults(&MediaTypeSource::File(file)).unwrap();

    assert_eq!(
        catalog.into_entries(),
        vec![CatalogEntry::media_type("application/x-thing", ["thg"])]
    );
}

#[test]
fn override_paths___starts_with_system_file() {
    let paths = override_paths();

    assert_eq!(paths[0], PathBuf::from(SYSTEM_MIME_TYPES));
}
