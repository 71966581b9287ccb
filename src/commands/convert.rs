// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Convert a configuration file

use serde::Serialize;
use tracing::info;

use crate::cli::args::{ConvertArgs, OutputFormat};
use crate::config::VersionedConfig;
use crate::error::Result;
use crate::mapping::{convert, SpecDocument};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ConversionReport {
    from_version: u32,
    to_version: u32,
    written_to: Option<String>,
}

/// Execute the convert command
pub fn execute(args: &ConvertArgs, format: &OutputFormat) -> Result<()> {
    let spec = SpecDocument::load_from(&args.spec)?.into_spec()?;
    let mut config = VersionedConfig::load_from(&args.config)?;

    let from_version = config.version;
    convert(&spec, &mut config, args.policy())?;

    if args.dry_run {
        println!("{}", config.to_json_string()?);
        return Ok(());
    }

    let destination = args.destination();
    config.save_to(destination)?;
    info!(path = %destination.display(), "Wrote converted configuration");

    if matches!(format, OutputFormat::Json) {
        let report = ConversionReport {
            from_version,
            to_version: config.version,
            written_to: Some(destination.display().to_string()),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!(
        "Converted {} from version {} to {}",
        destination.display(),
        from_version,
        config.version
    );
    Ok(())
}
