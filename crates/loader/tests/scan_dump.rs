use ecamap_api::{ModuleLoader, ModuleMetadata, RegistryEntry};
use ecamap_core::{MetadataScanner, ScanConfig, ScanUnit};
use ecamap_loader::JsonModuleLoader;
use std::fs;

const GAME_DUMP: &str = r#"{
  "name": "Game.Logic",
  "version": "1.0.0",
  "types": [
    {
      "full_name": "T",
      "methods": [
        { "name": "Zero", "markers": [{ "kind": "ActionAttribute" }] },
        {
          "name": "One",
          "parameters": ["Int32"],
          "markers": [{ "kind": "ActionAttribute", "fields": { "Key": "one" } }]
        },
        {
          "name": "Nested",
          "parameters": [
            { "name": "System.Collections.Generic.List`1",
              "args": [{ "name": "System.Collections.Generic.List`1", "args": ["System.Int32"] }] }
          ],
          "markers": [{ "kind": "CheckerAttribute" }, { "kind": "ActionAttribute", "fields": { "Key": "nested" } }]
        },
        { "name": "ToString", "markers": [] }
      ]
    },
    { "full_name": "Broken", "methods": [{ "parameters": [] }] }
  ]
}"#;

#[test]
fn test_dump_scans_into_registry_entries() {
    let dir = tempfile::tempdir().unwrap();
    let artifact = dir.path().join("Game.Logic.dll");
    fs::write(&artifact, GAME_DUMP).unwrap();

    let module = JsonModuleLoader::new().load(&artifact).unwrap();
    assert_eq!(module.name(), "Game.Logic");

    let modules: Vec<Box<dyn ModuleMetadata>> = vec![module];
    let report = MetadataScanner::new(&ScanConfig::default()).scan(&modules);

    assert_eq!(
        report.entries,
        vec![
            RegistryEntry::new("T.Zero", "T", "Zero", vec![]),
            RegistryEntry::new("one", "T", "One", vec!["Int32".to_string()]),
            RegistryEntry::new(
                "nested",
                "T",
                "Nested",
                vec!["System.Collections.Generic.List<System.Collections.Generic.List<System.Int32>>".to_string()]
            ),
        ]
    );
    assert_eq!(report.failures.len(), 1);
    assert_eq!(report.failures[0].unit, ScanUnit::Type);
    assert_eq!(report.failures[0].subject, "Broken");
}

#[test]
fn test_missing_artifact_fails_to_load() {
    let dir = tempfile::tempdir().unwrap();
    let err = JsonModuleLoader::new()
        .load(&dir.path().join("Nope.dll"))
        .err()
        .unwrap();
    assert!(err.to_string().contains("Nope.dll"));
}
