// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Declarative spec files
//!
//! A spec file carries everything but the post-processing hook:
//!
//! ```toml
//! source_version = 1
//! target_version = 2
//!
//! [defaults]
//! extra = true
//!
//! [map]
//! "old/name" = "new/name"
//! "a/*/value" = "b/*/v"
//! ```
//!
//! `map` is either a table read in document order, or an array of
//! `[source, destination]` pairs. JSON files use the same field names.

use std::path::Path;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::error::{Result, ShiftError};
use crate::tree::Tree;

use super::path::PathMapping;
use super::processor::MappingSpec;

/// On-disk form of a [`MappingSpec`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpecDocument {
    /// Version the input configuration must be at
    #[serde(alias = "version_in")]
    pub source_version: u32,

    /// Version recorded after conversion
    #[serde(alias = "version_out")]
    pub target_version: u32,

    /// Complete tree for the target version
    #[serde(default)]
    pub defaults: Tree,

    /// Ordered (source, destination) path pairs
    #[serde(default, deserialize_with = "deserialize_pairs")]
    pub map: Vec<(String, String)>,
}

impl SpecDocument {
    /// Load a spec file; `.toml` files are parsed as TOML, anything else as
    /// JSON.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let is_toml = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"));

        let document = if is_toml {
            Self::from_toml_str(&content)?
        } else {
            Self::from_json_str(&content)?
        };
        debug!(
            path = %path.display(),
            pairs = document.map.len(),
            "Loaded spec document"
        );
        Ok(document)
    }

    pub fn from_json_str(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Build the executable spec, validating every pair.
    pub fn into_spec(self) -> Result<MappingSpec> {
        let mut spec =
            MappingSpec::new(self.source_version, self.target_version).with_defaults(self.defaults);
        for (source, dest) in &self.map {
            spec = spec.with_mapping(PathMapping::new(source, dest)?);
        }
        Ok(spec)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawPairs {
    Pairs(Vec<(String, String)>),
    Table(Tree),
}

fn deserialize_pairs<'de, D>(deserializer: D) -> std::result::Result<Vec<(String, String)>, D::Error>
where
    D: Deserializer<'de>,
{
    match RawPairs::deserialize(deserializer)? {
        RawPairs::Pairs(pairs) => Ok(pairs),
        RawPairs::Table(table) => table
            .into_iter()
            .map(|(source, dest)| match dest {
                Value::String(dest) => Ok((source, dest)),
                other => Err(serde::de::Error::custom(format!(
                    "destination for {source:?} must be a path string, found {other}"
                ))),
            })
            .collect(),
    }
}

impl TryFrom<SpecDocument> for MappingSpec {
    type Error = ShiftError;

    fn try_from(document: SpecDocument) -> Result<Self> {
        document.into_spec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mapping::PathPolicy;
    use serde_json::json;
    use tempfile::TempDir;

    #[test]
    fn test_json_table_keeps_document_order() {
        let doc = SpecDocument::from_json_str(
            r#"{
                "source_version": 1,
                "target_version": 2,
                "map": {"z": "out", "a": "out", "m/*": "n/*"}
            }"#,
        )
        .unwrap();
        assert_eq!(
            doc.map,
            vec![
                ("z".to_string(), "out".to_string()),
                ("a".to_string(), "out".to_string()),
                ("m/*".to_string(), "n/*".to_string()),
            ]
        );
        assert!(doc.defaults.is_empty());
    }

    #[test]
    fn test_json_pairs_and_version_aliases() {
        let doc = SpecDocument::from_json_str(
            r#"{
                "version_in": 4,
                "version_out": 5,
                "defaults": {"k": 1},
                "map": [["a", "b"], ["c/*", "d/*"]]
            }"#,
        )
        .unwrap();
        assert_eq!(doc.source_version, 4);
        assert_eq!(doc.target_version, 5);
        assert_eq!(doc.map.len(), 2);
        assert_eq!(doc.defaults["k"], json!(1));
    }

    #[test]
    fn test_table_rejects_non_string_destination() {
        let err = SpecDocument::from_json_str(
            r#"{"source_version": 1, "target_version": 2, "map": {"a": 3}}"#,
        )
        .unwrap_err();
        assert!(matches!(err, ShiftError::Json(_)));
    }

    #[test]
    fn test_toml_document() {
        let doc = SpecDocument::from_toml_str(
            r#"
source_version = 1
target_version = 2

[defaults]
extra = true

[defaults.new]
name = 0

[map]
"old/name" = "new/name"
"#,
        )
        .unwrap();
        assert_eq!(doc.defaults["new"], json!({"name": 0}));
        assert_eq!(doc.map, vec![("old/name".to_string(), "new/name".to_string())]);
    }

    #[test]
    fn test_into_spec_validates_pairs() {
        let doc = SpecDocument {
            source_version: 1,
            target_version: 2,
            defaults: Tree::new(),
            map: vec![("a/*/b".to_string(), "c".to_string())],
        };
        let err = doc.into_spec().unwrap_err();
        assert!(matches!(err, ShiftError::WildcardMismatch { .. }));
    }

    #[test]
    fn test_into_spec_runs() {
        let doc = SpecDocument::from_json_str(
            r#"{
                "source_version": 1,
                "target_version": 2,
                "defaults": {"new": {"name": 0}, "extra": true},
                "map": {"old/name": "new/name"}
            }"#,
        )
        .unwrap();
        let spec = MappingSpec::try_from(doc).unwrap();
        assert_eq!(spec.mappings().len(), 1);

        let input = serde_json::from_value(json!({"old": {"name": 5}})).unwrap();
        let out = spec.process(&input, PathPolicy::Lenient).unwrap();
        assert_eq!(Value::Object(out), json!({"new": {"name": 5}, "extra": true}));
    }

    #[test]
    fn test_load_from_picks_format_by_extension() {
        let temp_dir = TempDir::new().unwrap();
        let toml_path = temp_dir.path().join("v1_to_v2.toml");
        std::fs::write(
            &toml_path,
            "source_version = 1\ntarget_version = 2\n[map]\n\"a\" = \"b\"\n",
        )
        .unwrap();
        let json_path = temp_dir.path().join("v1_to_v2.json");
        std::fs::write(
            &json_path,
            r#"{"source_version": 1, "target_version": 2, "map": [["a", "b"]]}"#,
        )
        .unwrap();

        let from_toml = SpecDocument::load_from(&toml_path).unwrap();
        let from_json = SpecDocument::load_from(&json_path).unwrap();
        assert_eq!(from_toml, from_json);
    }

    #[test]
    fn test_load_from_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let err = SpecDocument::load_from(&temp_dir.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, ShiftError::Io(_)));
    }
}
