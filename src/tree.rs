// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Configuration trees
//!
//! A tree is a JSON object: string keys mapping to scalars, arrays, or
//! further objects. No schema is assumed.

use serde_json::{Map, Value};

use crate::error::{Result, ShiftError};

/// Nested string-keyed mapping.
pub type Tree = Map<String, Value>;

/// Unwrap a value that must be a mapping at the top level.
pub fn into_tree(value: Value, what: &str) -> Result<Tree> {
    match value {
        Value::Object(map) => Ok(map),
        other => Err(ShiftError::InvalidInput(format!(
            "{what} must be a mapping, found {}",
            kind(&other)
        ))),
    }
}

/// Read the value at a literal slash-delimited path.
pub fn lookup<'t>(tree: &'t Tree, path: &str) -> Option<&'t Value> {
    let mut parts = path.split('/');
    let first = tree.get(parts.next()?)?;
    parts.try_fold(first, |node, key| node.as_object()?.get(key))
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "a mapping",
    }
}
