// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! confshift - structural migration of configuration trees between schema
//! versions.
//!
//! A spec pairs slash-delimited source paths with destination paths (with
//! `*` wildcards for repeated substructures), plus a complete defaults tree
//! for the target version. Converting runs every pair over the input tree,
//! applies an optional post-processing hook, and lays the result over the
//! defaults.
//!
//! This crate exposes:
//! - `mapping`: the path-mapping engine, spec processor, and conversion entry point
//! - `config`: a versioned configuration file that conversions read and write
//! - `cli`, `commands`: the `confshift` command-line surface (`src/main.rs`)
//!
//! ```
//! use confshift::mapping::{MappingSpec, PathPolicy};
//! use serde_json::json;
//!
//! let spec = MappingSpec::new(1, 2)
//!     .map("a/*/value", "b/*/v")
//!     .unwrap();
//! let input = serde_json::from_value(json!({"a": {"x": {"value": 1}}})).unwrap();
//! let out = spec.process(&input, PathPolicy::Lenient).unwrap();
//! assert_eq!(serde_json::Value::Object(out), json!({"b": {"x": {"v": 1}}}));
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod mapping;
pub mod tree;

pub use error::{Result, ShiftError};
pub use tree::Tree;
