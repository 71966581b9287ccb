// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Spec processor
//!
//! Runs every path pair of a [`MappingSpec`], merges the fragments into one
//! working tree, hands it to the optional post-processing hook, and lays the
//! result over a copy of the target version's defaults.

use std::fmt;

use tracing::{debug, info};

use crate::error::Result;
use crate::tree::Tree;

use super::mapper::PathPolicy;
use super::path::PathMapping;

/// Value-level edits the path language cannot express: computed renames,
/// type coercion, splitting one key into several.
///
/// Receives the spec and the merged working tree, returns the replacement.
pub trait PostProcess: Send + Sync {
    fn apply(&self, spec: &MappingSpec, tree: Tree) -> Result<Tree>;
}

impl<F> PostProcess for F
where
    F: Fn(&MappingSpec, Tree) -> Result<Tree> + Send + Sync,
{
    fn apply(&self, spec: &MappingSpec, tree: Tree) -> Result<Tree> {
        self(spec, tree)
    }
}

/// One version-to-version conversion.
pub struct MappingSpec {
    source_version: u32,
    target_version: u32,
    defaults: Tree,
    mappings: Vec<PathMapping>,
    post: Option<Box<dyn PostProcess>>,
}

impl MappingSpec {
    pub fn new(source_version: u32, target_version: u32) -> Self {
        Self {
            source_version,
            target_version,
            defaults: Tree::new(),
            mappings: Vec::new(),
            post: None,
        }
    }

    /// Complete tree for the target version.
    pub fn with_defaults(mut self, defaults: Tree) -> Self {
        self.defaults = defaults;
        self
    }

    /// Append a path pair. Pairs run in the order they were added.
    pub fn map(mut self, source: &str, dest: &str) -> Result<Self> {
        self.mappings.push(PathMapping::new(source, dest)?);
        Ok(self)
    }

    pub fn with_mapping(mut self, mapping: PathMapping) -> Self {
        self.mappings.push(mapping);
        self
    }

    pub fn with_post_process(mut self, post: impl PostProcess + 'static) -> Self {
        self.post = Some(Box::new(post));
        self
    }

    /// Closure form of [`with_post_process`](Self::with_post_process).
    pub fn with_post_fn<F>(self, post: F) -> Self
    where
        F: Fn(&MappingSpec, Tree) -> Result<Tree> + Send + Sync + 'static,
    {
        self.with_post_process(post)
    }

    pub fn source_version(&self) -> u32 {
        self.source_version
    }

    pub fn target_version(&self) -> u32 {
        self.target_version
    }

    pub fn defaults(&self) -> &Tree {
        &self.defaults
    }

    pub fn mappings(&self) -> &[PathMapping] {
        &self.mappings
    }

    pub fn has_post_process(&self) -> bool {
        self.post.is_some()
    }

    /// Re-check wildcard counts on every pair.
    pub fn validate(&self) -> Result<()> {
        for mapping in &self.mappings {
            super::path::check_wildcards(mapping.source(), mapping.dest())?;
        }
        Ok(())
    }

    /// Produce the target-version tree for `input`.
    pub fn process(&self, input: &Tree, policy: PathPolicy) -> Result<Tree> {
        process(self, input, policy)
    }
}

impl fmt::Debug for MappingSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MappingSpec")
            .field("source_version", &self.source_version)
            .field("target_version", &self.target_version)
            .field("defaults", &self.defaults)
            .field("mappings", &self.mappings)
            .field("post", &self.post.as_ref().map(|_| "<post-process>"))
            .finish()
    }
}

/// Run `spec` against `input`.
///
/// Later pairs overwrite earlier ones on top-level key collisions. Keys left
/// untouched by mapping and post-processing carry their defaults.
pub fn process(spec: &MappingSpec, input: &Tree, policy: PathPolicy) -> Result<Tree> {
    spec.validate()?;

    let mut working = Tree::new();
    for mapping in spec.mappings() {
        let fragment = mapping.apply(input, policy)?;
        if fragment.is_empty() {
            info!(mapping = %mapping, "Path pair mapped nothing");
        } else {
            debug!(mapping = %mapping, keys = fragment.len(), "Mapped path pair");
        }
        working.extend(fragment);
    }

    if let Some(post) = spec.post.as_deref() {
        working = post.apply(spec, working)?;
    }

    let mut output = spec.defaults().clone();
    output.extend(working);
    Ok(output)
}
