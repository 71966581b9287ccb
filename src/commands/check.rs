// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Validate a spec file

use serde::Serialize;

use crate::cli::args::{CheckArgs, OutputFormat};
use crate::error::Result;
use crate::mapping::{MappingSpec, SpecDocument};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SpecSummary {
    source_version: u32,
    target_version: u32,
    default_keys: Vec<String>,
    mappings: Vec<(String, String)>,
}

impl From<&MappingSpec> for SpecSummary {
    fn from(spec: &MappingSpec) -> Self {
        Self {
            source_version: spec.source_version(),
            target_version: spec.target_version(),
            default_keys: spec.defaults().keys().cloned().collect(),
            mappings: spec
                .mappings()
                .iter()
                .map(|m| (m.source().to_string(), m.dest().to_string()))
                .collect(),
        }
    }
}

/// Execute the check command
pub fn execute(args: &CheckArgs, format: &OutputFormat) -> Result<()> {
    let spec = SpecDocument::load_from(&args.spec)?.into_spec()?;
    spec.validate()?;
    let summary = SpecSummary::from(&spec);

    if matches!(format, OutputFormat::Json) {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    println!(
        "{}: version {} -> {}",
        args.spec.display(),
        summary.source_version,
        summary.target_version
    );
    println!("Defaults: {} top-level keys", summary.default_keys.len());
    println!("Mappings:");
    for (source, dest) in &summary.mappings {
        println!("  {source} -> {dest}");
    }
    Ok(())
}
