#![allow(non_snake_case)]

use super::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const CATALOG: &str = r#"<properties>
  <entry key="message-class-name">a.b.Codes</entry>
  <entry key="FOO-1">Hello {}</entry>
  <entry key="FOO-2">Bye {}</entry>
</properties>"#;

fn config_in(dir: &Path) -> GeneratorConfig {
    let mut config = GeneratorConfig::new();
    config.include_system_media_types = false;
    config.resolve(dir)
}

#[test]
fn inspect___valid_catalog___reports_class_and_writes_nothing() {
    let dir = TempDir::new().unwrap();
    let catalog = dir.path().join("test_messages.xml");
    fs::write(&catalog, CATALOG).unwrap();
    let mut config = config_in(dir.path());
    config.message_files = vec![catalog];

    let summary = inspect(&config).unwrap();

    assert!(matches!(
        &summary.catalogs[0].1,
        CatalogStatus::Valid { class_name, constants: 2 } if class_name == "a.b.Codes"
    ));
    assert!(!summary.has_problems(false));
    assert!(!config.generated_sources_directory.exists());
}

#[test]
fn inspect___missing_catalog___is_problem_unless_ignored() {
    let dir = TempDir::new().unwrap();
    let mut config = config_in(dir.path());
    config.message_files = vec![dir.path().join("gone_messages.xml")];

    let summary = inspect(&config).unwrap();

    assert!(matches!(summary.catalogs[0].1, CatalogStatus::Missing));
    assert!(summary.has_problems(false));
    assert!(!summary.has_problems(true));
}

#[test]
fn inspect___catalog_without_class_name___is_invalid() {
    let dir = TempDir::new().unwrap();
    let catalog = dir.path().join("x_messages.xml");
    fs::write(&catalog, "<properties><entry key=\"A\">a</entry></properties>").unwrap();
    let mut config = config_in(dir.path());
    config.message_files = vec![catalog];

    let summary = inspect(&config).unwrap();

    assert!(matches!(
        summary.catalogs[0].1,
        CatalogStatus::Invalid(GenError::MissingRequiredMetadataKey { .. })
    ));
}

#[test]
fn inspect___media_type_package___renders_enum_in_memory() {
    let dir = TempDir::new().unwrap();
    let mut config = config_in(dir.path());
    config.media_type_package = Some("info.example".to_string());

    let summary = inspect(&config).unwrap();

    assert!(matches!(summary.media_types, Some(Ok(count)) if count > 50));
}

#[test]
fn run___missing_default_media_types___fails() {
    let dir = TempDir::new().unwrap();
    let mut config = config_in(dir.path());
    config.media_type_package = Some("info.example".to_string());
    config.default_media_types = Some(dir.path().join("absent.types"));

    assert!(run(&config).is_err());
}
