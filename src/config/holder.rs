// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Versioned configuration holder
//!
//! Stored as `{"version": N, "config": {...}}`.

use serde::{Deserialize, Serialize};

use crate::mapping::ConfigHolder;
use crate::tree::Tree;

mod io;

/// A configuration tree together with the schema version it conforms to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VersionedConfig {
    /// Schema version of `config`
    pub version: u32,

    /// The configuration tree
    #[serde(default)]
    pub config: Tree,
}

impl VersionedConfig {
    pub fn new(version: u32, config: Tree) -> Self {
        Self { version, config }
    }
}

impl ConfigHolder for VersionedConfig {
    fn version(&self) -> u32 {
        self.version
    }

    fn tree(&self) -> &Tree {
        &self.config
    }

    fn replace(&mut self, version: u32, tree: Tree) {
        self.version = version;
        self.config = tree;
    }
}
