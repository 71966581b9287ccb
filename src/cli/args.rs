// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! CLI argument definitions using Clap
//!
//! Defines all command-line arguments and subcommands for confshift.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::mapping::PathPolicy;

/// confshift - migrate configuration files between schema versions
#[derive(Parser, Debug)]
#[command(name = "confshift")]
#[command(version, about = "Migrate configuration files between schema versions")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Output format
    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Convert a configuration file with a spec
    Convert(ConvertArgs),

    /// Validate a spec file without converting anything
    Check(CheckArgs),

    /// Run a single path pair over a JSON tree
    Map(MapArgs),
}

/// Arguments for the convert subcommand
#[derive(clap::Args, Debug)]
pub struct ConvertArgs {
    /// Spec file (JSON, or TOML with a .toml extension)
    #[arg(short, long, value_name = "FILE")]
    pub spec: PathBuf,

    /// Versioned configuration file to convert
    #[arg(short, long, value_name = "FILE")]
    pub config: PathBuf,

    /// Abort on any missing source path instead of falling back to defaults
    #[arg(long)]
    pub strict: bool,

    /// Write the result here instead of overwriting the config file
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Print the converted configuration without writing anything
    #[arg(long, conflicts_with = "output")]
    pub dry_run: bool,
}

impl ConvertArgs {
    pub fn policy(&self) -> PathPolicy {
        PathPolicy::from_strict(self.strict)
    }

    /// Where the converted configuration is written.
    pub fn destination(&self) -> &PathBuf {
        self.output.as_ref().unwrap_or(&self.config)
    }
}

/// Arguments for the check subcommand
#[derive(clap::Args, Debug)]
pub struct CheckArgs {
    /// Spec file to validate
    #[arg(short, long, value_name = "FILE")]
    pub spec: PathBuf,
}

/// Arguments for the map subcommand
#[derive(clap::Args, Debug)]
pub struct MapArgs {
    /// Source path pattern (e.g. "plugins/*/enabled")
    pub source: String,

    /// Destination path pattern (e.g. "extensions/*/on")
    pub dest: String,

    /// JSON file holding the input tree
    #[arg(short, long, value_name = "FILE")]
    pub input: PathBuf,

    /// Fail on any missing source path
    #[arg(long)]
    pub strict: bool,
}

impl MapArgs {
    pub fn policy(&self) -> PathPolicy {
        PathPolicy::from_strict(self.strict)
    }
}

/// Output format for command results
#[derive(ValueEnum, Clone, Debug, Default, PartialEq)]
pub enum OutputFormat {
    /// Plain text output
    #[default]
    Text,

    /// JSON output
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    // ==================== CLI Global Arguments ====================

    #[test]
    fn test_cli_requires_command() {
        assert!(Cli::try_parse_from(["confshift"]).is_err());
    }

    #[test]
    fn test_cli_verbose_count() {
        let cli = Cli::parse_from(["confshift", "-vv", "check", "-s", "spec.json"]);
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.format, OutputFormat::Text);
    }

    #[test]
    fn test_cli_json_format_after_subcommand() {
        let cli = Cli::parse_from(["confshift", "check", "-s", "spec.json", "--format", "json"]);
        assert_eq!(cli.format, OutputFormat::Json);
    }

    // ==================== Convert ====================

    #[test]
    fn test_convert_defaults_to_in_place_lenient() {
        let cli = Cli::parse_from(["confshift", "convert", "-s", "s.toml", "-c", "c.json"]);
        let Commands::Convert(args) = cli.command else {
            panic!("Expected Convert command");
        };
        assert_eq!(args.policy(), PathPolicy::Lenient);
        assert_eq!(args.destination(), &PathBuf::from("c.json"));
        assert!(!args.dry_run);
    }

    #[test]
    fn test_convert_strict_with_output() {
        let cli = Cli::parse_from([
            "confshift", "convert", "--spec", "s.json", "--config", "c.json", "--strict", "-o",
            "out.json",
        ]);
        let Commands::Convert(args) = cli.command else {
            panic!("Expected Convert command");
        };
        assert_eq!(args.policy(), PathPolicy::Strict);
        assert_eq!(args.destination(), &PathBuf::from("out.json"));
    }

    #[test]
    fn test_convert_dry_run_conflicts_with_output() {
        let result = Cli::try_parse_from([
            "confshift", "convert", "-s", "s.json", "-c", "c.json", "--dry-run", "-o", "x.json",
        ]);
        assert!(result.is_err());
    }

    // ==================== Map ====================

    #[test]
    fn test_map_positional_patterns() {
        let cli = Cli::parse_from(["confshift", "map", "a/*/value", "b/*/v", "-i", "tree.json"]);
        let Commands::Map(args) = cli.command else {
            panic!("Expected Map command");
        };
        assert_eq!(args.source, "a/*/value");
        assert_eq!(args.dest, "b/*/v");
        assert_eq!(args.input, PathBuf::from("tree.json"));
        assert_eq!(args.policy(), PathPolicy::Lenient);
    }
}
