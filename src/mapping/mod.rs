// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Path-mapping engine
//!
//! - `path`: slash-delimited patterns with `*` wildcards
//! - `mapper`: one source pattern onto one destination pattern
//! - `processor`: a whole spec, merged and laid over defaults
//! - `convert`: version check and commit into a [`ConfigHolder`]
//! - `document`: JSON/TOML spec files

pub mod convert;
pub mod document;
pub mod mapper;
pub mod path;
pub mod processor;

pub use convert::{convert, ConfigHolder};
pub use document::SpecDocument;
pub use mapper::{map_path, PathPolicy};
pub use path::{PathMapping, PathPattern, WILDCARD};
pub use processor::{process, MappingSpec, PostProcess};
