// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Run one path pair over a JSON tree

use crate::cli::args::{MapArgs, OutputFormat};
use crate::error::Result;
use crate::mapping::{PathMapping, PathPolicy};
use crate::tree::{into_tree, Tree};

/// Map `input` through a single source/destination pair.
pub fn map_tree(input: &Tree, source: &str, dest: &str, policy: PathPolicy) -> Result<Tree> {
    PathMapping::new(source, dest)?.apply(input, policy)
}

/// Execute the map command
pub fn execute(args: &MapArgs, format: &OutputFormat) -> Result<()> {
    let content = std::fs::read_to_string(&args.input)?;
    let input = into_tree(serde_json::from_str(&content)?, "input tree")?;
    let fragment = map_tree(&input, &args.source, &args.dest, args.policy())?;

    let rendered = match format {
        OutputFormat::Json => serde_json::to_string(&fragment)?,
        OutputFormat::Text => serde_json::to_string_pretty(&fragment)?,
    };
    println!("{rendered}");
    Ok(())
}
