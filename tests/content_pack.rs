//! Content Pack Integration Tests
//!
//! Tests for loading providers and mapping tables from disk, and auditing
//! the loaded registry.

use std::path::Path;

use sailcheck::{Category, ContentRegistry, RegistryError};
use tempfile::TempDir;

fn write(dir: &Path, name: &str, content: &str) {
    std::fs::write(dir.join(name), content).unwrap();
}

fn sample_pack() -> TempDir {
    let temp = TempDir::new().unwrap();

    write(
        temp.path(),
        "weather.yaml",
        r#"
weather_window:
  title: Weather window
  brief: Pick a window with steady breeze and no fronts.
  academy_links:
    - title: Reading a forecast
      url: /academy/weather/forecast
      lesson_id: lesson-13-1-1
"#,
    );
    write(
        temp.path(),
        "crew.yaml",
        r#"
roles:
  brief: Agree who trims, who calls, who steers.
pre_start:
  brief: Crew view of the pre-start.
"#,
    );
    write(
        temp.path(),
        "tactics.yaml",
        r#"
pre_start:
  brief: Tactical view of the pre-start.
"#,
    );

    temp
}

#[tokio::test]
async fn test_load_pack_with_builtin_mappings() {
    let pack = sample_pack();
    let registry = ContentRegistry::load(pack.path(), None).await.unwrap();

    let content = registry.resolve_item("Check Forecast").unwrap();
    assert_eq!(content.title.as_deref(), Some("Weather window"));
    assert_eq!(
        content.academy_links[0].lesson_id.as_ref().map(|id| id.as_str()),
        Some("lesson-13-1-1")
    );

    assert_eq!(
        registry.brief("Crew Roles").as_deref(),
        Some("Agree who trims, who calls, who steers.")
    );

    // Rig pack file is absent, so mapped rig items have no content
    assert_eq!(registry.category_of("mast_rake"), Some(Category::Rig));
    assert!(!registry.has_content("mast_rake"));
}

#[tokio::test]
async fn test_load_pack_with_external_mappings() {
    let pack = sample_pack();
    write(
        pack.path(),
        "mappings.yaml",
        r#"
- item: Forecast
  category: weather
  key: weather_window
- item: Who Does What
  category: crew
  key: roles
  lesson_id: lesson-11-1-2
"#,
    );

    let mappings = pack.path().join("mappings.yaml");
    let registry = ContentRegistry::load(pack.path(), Some(mappings.as_path()))
        .await
        .unwrap();

    assert_eq!(registry.mappings().len(), 2);
    assert!(registry.has_content("forecast"));
    assert_eq!(
        registry.lesson_id_of("who does what").map(|id| id.as_str()),
        Some("lesson-11-1-2")
    );
    // Built-in items are gone, but the sweep still reaches raw content keys
    assert!(registry.category_of("check_forecast").is_none());
    assert!(registry.has_content("weather_window"));
}

#[tokio::test]
async fn test_duplicate_external_mapping_is_rejected() {
    let pack = sample_pack();
    write(
        pack.path(),
        "mappings.yaml",
        r#"
- item: Forecast
  category: weather
  key: weather_window
- item: forecast
  category: crew
  key: roles
"#,
    );

    let mappings = pack.path().join("mappings.yaml");
    let err = ContentRegistry::load(pack.path(), Some(mappings.as_path()))
        .await
        .unwrap_err();

    match err.downcast_ref::<RegistryError>() {
        Some(RegistryError::DuplicateMapping(item)) => assert_eq!(item, "forecast"),
        other => panic!("Expected DuplicateMapping, got {:?}", other),
    }
}

#[tokio::test]
async fn test_malformed_content_file_is_error() {
    let pack = sample_pack();
    write(pack.path(), "rules.yaml", "port_starboard: [1, 2");

    assert!(ContentRegistry::load(pack.path(), None).await.is_err());
}

#[tokio::test]
async fn test_audit_loaded_pack() {
    let pack = sample_pack();
    let registry = ContentRegistry::load(pack.path(), None).await.unwrap();

    let report = registry.audit_keys(["pre_start", "roles", "crew_roles"]);

    // Only weather_window and roles exist among mapped content keys
    assert!(report
        .dangling
        .iter()
        .all(|d| d.key != "weather_window" && d.key != "roles"));
    assert!(report.dangling.iter().any(|d| d.item == "mast_rake"));
    assert!(!report.dangling.iter().any(|d| d.item == "check_forecast"));

    assert_eq!(report.ambiguous.len(), 1);
    assert_eq!(report.ambiguous[0].key, "pre_start");
    assert_eq!(report.ambiguous[0].winner(), Some(Category::Tactics));
    assert_eq!(
        registry.brief("pre_start").as_deref(),
        Some("Tactical view of the pre-start.")
    );
}
