// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Subcommand implementations
//!
//! Each command loads its inputs, runs the mapping engine, and reports in the
//! requested output format. Files are only read before and written after a
//! conversion, never during one.

pub mod check;
pub mod convert;
pub mod map;

use crate::cli::{Cli, Commands};
use crate::error::Result;

/// Dispatch a parsed command line.
pub fn run(cli: &Cli) -> Result<()> {
    match &cli.command {
        Commands::Convert(args) => convert::execute(args, &cli.format),
        Commands::Check(args) => check::execute(args, &cli.format),
        Commands::Map(args) => map::execute(args, &cli.format),
    }
}
