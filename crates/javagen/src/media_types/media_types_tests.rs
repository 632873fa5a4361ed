#![allow(non_snake_case)]

use super::*;
use javagen_core::GenError;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn config_in(dir: &Path) -> GeneratorConfig {
    let mut config = GeneratorConfig::new();
    config.include_system_media_types = false;
    config.media_type_package = Some("info.example".to_string());
    config.resolve(dir)
}

#[test]
fn generate_media_types___bundled_defaults___writes_enum() {
    let dir = TempDir::new().unwrap();
    let config = config_in(dir.path());

    let report = generate_media_types(&config).unwrap();

    assert_eq!(report.class_name, "info.example.MediaType");
    assert_eq!(
        report.source_file,
        dir.path().join("src/main/generated/info/example/MediaType.java")
    );
    assert!(report.merged_files.is_empty());
    let code = fs::read_to_string(&report.source_file).unwrap();
    assert!(code.contains("IMAGE_SVG_PLUS_XML(\"image/svg+xml\", new String[] { \"svg\", \"svgz\" })"));
}

#[test]
fn generate_media_types___without_package___is_config_error() {
    let dir = TempDir::new().unwrap();
    let mut config = config_in(dir.path());
    config.media_type_package = None;

    let err = generate_media_types(&config).unwrap_err();

    assert!(matches!(err, GenError::Config(_)));
}

#[test]
fn generate_media_types___missing_replacement_defaults___is_fatal() {
    let dir = TempDir::new().unwrap();
    let mut config = config_in(dir.path());
    config.default_media_types = Some(dir.path().join("nope.types"));

    let err = generate_media_types(&config).unwrap_err();

    assert!(matches!(err, GenError::MissingDefaultMediaTypes(_)));
    assert!(!dir.path().join("src/main/generated").exists());
}

#[test]
fn load_media_types___extra_files___merge_after_defaults() {
    let dir = TempDir::new().unwrap();
    let extra = dir.path().join("extra.types");
    fs::write(&extra, "image/jpeg jfif\napplication/x-thing thg\n").unwrap();
    let mut config = config_in(dir.path());
    config.media_type_files = vec![extra.clone()];

    let (catalog, merged) = load_media_types(&config).unwrap();

    assert_eq!(merged, vec![extra]);
    let jpeg = catalog.entries().iter().find(|e| e.key == "image/jpeg").unwrap();
    assert_eq!(jpeg.extensions[0], "jpeg");
    assert_eq!(catalog.entries().last().unwrap().key, "application/x-thing");
}

#[test]
fn load_media_types___missing_extra_file___is_skipped() {
    let dir = TempDir::new().unwrap();
    let mut config = config_in(dir.path());
    config.media_type_files = vec![dir.path().join("absent.types")];

    let (catalog, merged) = load_media_types(&config).unwrap();

    assert!(merged.is_empty());
    assert!(!catalog.is_empty());
}

#[test]
fn load_media_types___replacement_defaults___replace_bundled() {
    let dir = TempDir::new().unwrap();
    let defaults = dir.path().join("mime.types");
    fs::write(&defaults, "text/x-only only\n").unwrap();
    let mut config = config_in(dir.path());
    config.default_media_types = Some(defaults);

    let (catalog, _) = load_media_types(&config).unwrap();

    assert_eq!(catalog.len(), 1);
    assert!(catalog.contains("text/x-only"));
}
