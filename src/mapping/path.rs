// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Slash-delimited path patterns
//!
//! A pattern such as `plugins/*/enabled` is a route through a nested tree.
//! The `*` segment matches every key present at its level. There is no
//! escaping: a literal key containing `/` or equal to `*` cannot be written.

use std::fmt;

use crate::error::{Result, ShiftError};

/// Segment token matching every key at its level.
pub const WILDCARD: &str = "*";

/// Segment separator.
pub const SEPARATOR: char = '/';

/// A parsed path pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathPattern {
    raw: String,
    segments: Vec<String>,
}

impl PathPattern {
    /// Parse a pattern by splitting on `/`.
    ///
    /// Splitting always yields at least one segment, so an empty string is
    /// a single empty key.
    pub fn parse(raw: &str) -> Self {
        Self {
            raw: raw.to_string(),
            segments: raw.split(SEPARATOR).map(str::to_string).collect(),
        }
    }

    /// The pattern as originally written.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    pub fn segment(&self, pos: usize) -> &str {
        &self.segments[pos]
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Index of the final segment.
    pub fn last(&self) -> usize {
        self.segments.len() - 1
    }

    pub fn is_last(&self, pos: usize) -> bool {
        pos == self.last()
    }

    pub fn is_wildcard(&self, pos: usize) -> bool {
        self.segments[pos] == WILDCARD
    }

    pub fn wildcard_count(&self) -> usize {
        self.segments.iter().filter(|s| *s == WILDCARD).count()
    }

    /// First position at or after `pos` holding a wildcard or the final
    /// segment. Literal segments before it form a plain key prefix.
    pub fn next_stop(&self, pos: usize) -> usize {
        (pos..self.last())
            .find(|&p| self.is_wildcard(p))
            .unwrap_or_else(|| self.last())
    }

    /// Render segments `0..=upto`, with bound wildcard slots replaced by the
    /// concrete keys they matched.
    pub fn render(&self, upto: usize, bindings: Option<&Binding<'_>>) -> String {
        let upto = upto.min(self.last());
        let mut parts: Vec<&str> = self.segments[..=upto].iter().map(String::as_str).collect();
        let mut frame = bindings;
        while let Some(binding) = frame {
            if binding.pos <= upto {
                parts[binding.pos] = binding.key;
            }
            frame = binding.parent;
        }
        parts.join("/")
    }
}

impl fmt::Display for PathPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl From<&str> for PathPattern {
    fn from(raw: &str) -> Self {
        Self::parse(raw)
    }
}

/// A concrete key standing in for the wildcard at `pos` during one branch of
/// a fan-out. Frames chain towards the root of the recursion.
#[derive(Debug, Clone, Copy)]
pub struct Binding<'a> {
    pub pos: usize,
    pub key: &'a str,
    pub parent: Option<&'a Binding<'a>>,
}

impl<'a> Binding<'a> {
    pub fn new(pos: usize, key: &'a str, parent: Option<&'a Binding<'a>>) -> Self {
        Self { pos, key, parent }
    }
}

/// A source/destination pattern pair with matching wildcard counts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathMapping {
    source: PathPattern,
    dest: PathPattern,
}

impl PathMapping {
    /// Pair two raw path strings, rejecting mismatched wildcard counts.
    pub fn new(source: &str, dest: &str) -> Result<Self> {
        Self::from_patterns(PathPattern::parse(source), PathPattern::parse(dest))
    }

    pub fn from_patterns(source: PathPattern, dest: PathPattern) -> Result<Self> {
        check_wildcards(&source, &dest)?;
        Ok(Self { source, dest })
    }

    pub fn source(&self) -> &PathPattern {
        &self.source
    }

    pub fn dest(&self) -> &PathPattern {
        &self.dest
    }
}

impl fmt::Display for PathMapping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.source, self.dest)
    }
}

/// Both sides of a pair must carry the same number of wildcards.
pub fn check_wildcards(source: &PathPattern, dest: &PathPattern) -> Result<()> {
    if source.wildcard_count() != dest.wildcard_count() {
        return Err(ShiftError::WildcardMismatch {
            source_path: source.as_str().to_string(),
            dest_path: dest.as_str().to_string(),
        });
    }
    Ok(())
}
