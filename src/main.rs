// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! confshift - migrate configuration files between schema versions
//!
//! Entry point for the confshift CLI application.

use std::process::ExitCode;

use clap::Parser;

use confshift::cli::Cli;
use confshift::commands;

fn main() -> ExitCode {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize tracing
    let mut env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing::Level::WARN.into());

    // `-v` reports pairs that mapped nothing, `-vv` adds per-pair and per-key detail.
    // `RUST_LOG` still takes precedence.
    let directive = match cli.verbose {
        0 => None,
        1 => Some("confshift=info"),
        _ => Some("confshift=debug"),
    };
    if let Some(directive) = directive {
        if let Ok(parsed) = directive.parse() {
            env_filter = env_filter.add_directive(parsed);
        }
    }

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    match commands::run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}
