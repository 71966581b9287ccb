// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

use confshift::config::VersionedConfig;
use confshift::mapping::{convert, ConfigHolder, PathPolicy, SpecDocument};
use serde_json::{json, Value};
use tempfile::TempDir;

#[test]
fn test_versioned_config_deserialization() {
    let json = r##"{
        "version": 2,
        "config": {
            "labels": {
                "a": {"name": "Movies", "color": "#ff0000"},
                "b": {"name": "Music"}
            }
        }
    }"##;

    let config = VersionedConfig::from_json_str(json).expect("Should deserialize from JSON");

    assert_eq!(config.version(), 2);
    assert_eq!(config.tree()["labels"]["a"]["name"], json!("Movies"));
}

#[test]
fn test_versioned_config_serialization() {
    let config = VersionedConfig::from_json_str(r#"{"version": 1, "config": {"k": 1}}"#).unwrap();
    let json = config.to_json_string().expect("Should serialize to JSON");

    assert!(json.contains("\"version\": 1"));
    assert!(json.contains("\"config\""));
}

#[test]
fn test_convert_file_with_toml_spec() {
    let temp_dir = TempDir::new().unwrap();
    let spec_path = temp_dir.path().join("1_to_2.toml");
    std::fs::write(
        &spec_path,
        r#"
source_version = 1
target_version = 2

[defaults]
move_completed = false

[defaults.labels]

[map]
"labels/*/name" = "labels/*/display/name"
"options/move_completed" = "move_completed"
"#,
    )
    .unwrap();

    let config_path = temp_dir.path().join("labels.json");
    std::fs::write(
        &config_path,
        r##"{
            "version": 1,
            "config": {
                "labels": {
                    "a": {"name": "Movies", "color": "#ff0000"},
                    "b": {"color": "#00ff00"}
                },
                "options": {"move_completed": true}
            }
        }"##,
    )
    .unwrap();

    let spec = SpecDocument::load_from(&spec_path).unwrap().into_spec().unwrap();
    let mut config = VersionedConfig::load_from(&config_path).unwrap();
    convert(&spec, &mut config, PathPolicy::Lenient).unwrap();
    config.save_to(&config_path).unwrap();

    let reloaded = VersionedConfig::load_from(&config_path).unwrap();
    assert_eq!(reloaded.version, 2);
    assert_eq!(
        Value::Object(reloaded.config),
        json!({
            "labels": {"a": {"display": {"name": "Movies"}}},
            "move_completed": true
        })
    );
}

#[test]
fn test_chained_conversions() {
    let first = SpecDocument::from_json_str(
        r#"{"source_version": 1, "target_version": 2, "map": {"a": "b"}}"#,
    )
    .unwrap()
    .into_spec()
    .unwrap();
    let second = SpecDocument::from_json_str(
        r#"{"source_version": 2, "target_version": 3, "defaults": {"c": 0}, "map": {"b": "c"}}"#,
    )
    .unwrap()
    .into_spec()
    .unwrap();

    let mut config = VersionedConfig::from_json_str(r#"{"version": 1, "config": {"a": 7}}"#).unwrap();

    // Applying out of order is rejected without touching the config.
    assert!(convert(&second, &mut config, PathPolicy::Strict).is_err());
    assert_eq!(config.version, 1);

    convert(&first, &mut config, PathPolicy::Strict).unwrap();
    convert(&second, &mut config, PathPolicy::Strict).unwrap();

    assert_eq!(config.version, 3);
    assert_eq!(Value::Object(config.config), json!({"c": 7}));
}
