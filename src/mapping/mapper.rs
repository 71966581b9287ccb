// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Path mapper
//!
//! Walks the input tree along a source pattern and builds the matching
//! output fragment along a destination pattern. Each recursion level
//! consumes one wildcard from both patterns. A branch that copies nothing
//! produces no output at all, so a failed or empty fan-out never leaves
//! hollow skeleton mappings behind.

use serde_json::Value;
use tracing::debug;

use crate::error::{Result, ShiftError};
use crate::tree::Tree;

use super::path::{check_wildcards, Binding, PathMapping, PathPattern};

/// What to do when a key along a source path is missing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PathPolicy {
    /// A miss nullifies the contribution of that path pair only.
    #[default]
    Lenient,
    /// A miss aborts the whole conversion.
    Strict,
}

impl PathPolicy {
    pub fn from_strict(strict: bool) -> Self {
        if strict {
            PathPolicy::Strict
        } else {
            PathPolicy::Lenient
        }
    }

    pub fn is_strict(self) -> bool {
        self == PathPolicy::Strict
    }
}

/// Map one source pattern onto one destination pattern.
///
/// Returns the output fragment, empty when nothing was copied. Wildcard
/// counts are checked before the input is looked at.
pub fn map_path(
    input: &Tree,
    source: &PathPattern,
    dest: &PathPattern,
    policy: PathPolicy,
) -> Result<Tree> {
    check_wildcards(source, dest)?;
    let mapper = PathMapper {
        source,
        dest,
        policy,
    };
    Ok(mapper.expand(input, 0, 0, None)?.unwrap_or_default())
}

impl PathMapping {
    /// Apply this pair to `input`.
    pub fn apply(&self, input: &Tree, policy: PathPolicy) -> Result<Tree> {
        map_path(input, self.source(), self.dest(), policy)
    }
}

/// Source positions are indices into `source`, output positions into `dest`.
struct PathMapper<'p> {
    source: &'p PathPattern,
    dest: &'p PathPattern,
    policy: PathPolicy,
}

impl PathMapper<'_> {
    /// Map `node` starting at the given pattern positions.
    ///
    /// The returned tree sits at the level of `pos_out`, with the literal
    /// destination prefix already wrapped around the copied data. `None`
    /// means nothing was copied.
    fn expand(
        &self,
        node: &Tree,
        pos_in: usize,
        pos_out: usize,
        bindings: Option<&Binding<'_>>,
    ) -> Result<Option<Tree>> {
        let (node, pos_in) = match self.descend(node, pos_in, bindings) {
            Ok(found) => found,
            Err(missed) => return self.miss(missed),
        };
        let stop_out = self.dest.next_stop(pos_out);

        // Equal wildcard counts mean both sides stop on a wildcard together,
        // or both stop on their final literal key.
        let mapped = if !self.source.is_wildcard(pos_in) {
            self.copy_leaf(node, pos_in, stop_out, bindings)?
        } else {
            match (self.source.is_last(pos_in), self.dest.is_last(stop_out)) {
                (true, true) => copy_all(node),
                (true, false) => self.fan_out(node, stop_out),
                (false, true) => self.fan_in(node, pos_in, bindings)?,
                (false, false) => self.recurse_each(node, pos_in, stop_out, bindings)?,
            }
        };

        Ok(mapped.map(|tree| self.wrap(tree, pos_out, stop_out)))
    }

    /// Follow literal source segments from `pos` up to the next wildcard or
    /// the final segment. On a miss, returns the path that failed.
    fn descend<'v>(
        &self,
        mut node: &'v Tree,
        mut pos: usize,
        bindings: Option<&Binding<'_>>,
    ) -> std::result::Result<(&'v Tree, usize), String> {
        while pos < self.source.last() && !self.source.is_wildcard(pos) {
            let value = node
                .get(self.source.segment(pos))
                .ok_or_else(|| self.source.render(pos, bindings))?;
            node = value
                .as_object()
                .ok_or_else(|| self.source.render(pos + 1, bindings))?;
            pos += 1;
        }
        Ok((node, pos))
    }

    fn miss(&self, path: String) -> Result<Option<Tree>> {
        if self.policy.is_strict() {
            return Err(ShiftError::PathNotFound(path));
        }
        debug!(
            source = %self.source,
            path = %path,
            "Source path missing, pair contributes nothing"
        );
        Ok(None)
    }

    /// Both patterns end on a literal key.
    fn copy_leaf(
        &self,
        node: &Tree,
        pos_in: usize,
        stop_out: usize,
        bindings: Option<&Binding<'_>>,
    ) -> Result<Option<Tree>> {
        match node.get(self.source.segment(pos_in)) {
            Some(value) => Ok(Some(singleton(self.dest.segment(stop_out), value.clone()))),
            None => self.miss(self.source.render(pos_in, bindings)),
        }
    }

    /// Source wildcard is final, destination continues: every child gets the
    /// rest of the destination structure with its value at the leaf.
    fn fan_out(&self, node: &Tree, stop_out: usize) -> Option<Tree> {
        let next = stop_out + 1;
        let leaf = self.dest.next_stop(next);
        let out: Tree = node
            .iter()
            .map(|(key, value)| {
                let inner = singleton(self.dest.segment(leaf), value.clone());
                (key.clone(), Value::Object(self.wrap(inner, next, leaf)))
            })
            .collect();
        non_empty(out)
    }

    /// Destination wildcard is final, source continues: every child is
    /// followed down the rest of the source path. Misses skip that child.
    fn fan_in(
        &self,
        node: &Tree,
        pos_in: usize,
        bindings: Option<&Binding<'_>>,
    ) -> Result<Option<Tree>> {
        let mut out = Tree::new();
        for (key, child) in node {
            let bound = Binding::new(pos_in, key, bindings);
            match self.follow(child, pos_in + 1, &bound) {
                Ok(value) => {
                    out.insert(key.clone(), value.clone());
                }
                Err(missed) => {
                    self.miss(missed)?;
                }
            }
        }
        Ok(non_empty(out))
    }

    /// Resolve `child` down to the final source segment.
    fn follow<'v>(
        &self,
        child: &'v Value,
        pos: usize,
        bound: &Binding<'_>,
    ) -> std::result::Result<&'v Value, String> {
        let child = child
            .as_object()
            .ok_or_else(|| self.source.render(pos, Some(bound)))?;
        let (end, leaf) = self.descend(child, pos, Some(bound))?;
        end.get(self.source.segment(leaf))
            .ok_or_else(|| self.source.render(self.source.last(), Some(bound)))
    }

    /// Both patterns continue past their wildcard: recurse into each child
    /// with the key bound on the source side and reused on the output side.
    fn recurse_each(
        &self,
        node: &Tree,
        pos_in: usize,
        stop_out: usize,
        bindings: Option<&Binding<'_>>,
    ) -> Result<Option<Tree>> {
        let mut out = Tree::new();
        for (key, child) in node {
            let bound = Binding::new(pos_in, key, bindings);
            let branch = match child.as_object() {
                Some(child) => self.expand(child, pos_in + 1, stop_out + 1, Some(&bound))?,
                None => self.miss(self.source.render(pos_in + 1, Some(&bound)))?,
            };
            // Pruned: a branch that copied nothing gets no key.
            if let Some(branch) = branch {
                out.insert(key.clone(), Value::Object(branch));
            }
        }
        Ok(non_empty(out))
    }

    /// Nest `tree` under the literal destination segments `from..to`.
    fn wrap(&self, tree: Tree, from: usize, to: usize) -> Tree {
        (from..to)
            .rev()
            .fold(tree, |inner, pos| singleton(self.dest.segment(pos), Value::Object(inner)))
    }
}

/// Both wildcards are final: children are copied with their names.
fn copy_all(node: &Tree) -> Option<Tree> {
    non_empty(node.clone())
}

fn singleton(key: &str, value: Value) -> Tree {
    let mut tree = Tree::new();
    tree.insert(key.to_string(), value);
    tree
}

fn non_empty(tree: Tree) -> Option<Tree> {
    (!tree.is_empty()).then_some(tree)
}
