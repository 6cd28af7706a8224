//! # CLI Module
//!
//! This module defines the command-line interface for HostLens using `clap`.
//!
//! ## Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `check` | Audit host configuration files and print a report |
//! | `list` | List the available rules |
//!
//! ## Global Options
//!
//! - `-v, --verbose` - Increase verbosity level (use multiple times: -v, -vv, -vvv)
//! - `-c, --config <FILE>` - Path to configuration file
//!
//! ## Examples
//!
//! ```bash
//! # Audit the local sshd
//! hostlens check
//!
//! # Audit a copy of another host's config, as JSON
//! hostlens check --sshd-config ./sshd_config --format json -o report.json
//! ```

pub mod commands;
pub mod exit_codes;
pub mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use commands::{CheckArgs, ListArgs};

/// HostLens - Audit host configuration against security best practices
#[derive(Parser, Debug)]
#[command(name = "hostlens")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Audit configuration files and print a report
    Check(CheckArgs),

    /// List the available rules
    List(ListArgs),
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_check_args() {
        let cli = Cli::parse_from([
            "hostlens",
            "-vv",
            "check",
            "--format",
            "json",
            "--only",
            "ssh",
            "--sshd-config",
            "a",
            "--sshd-config",
            "b",
        ]);

        assert_eq!(cli.verbose, 2);
        match cli.command {
            Commands::Check(args) => {
                assert!(matches!(args.format, commands::OutputFormat::Json));
                assert_eq!(args.only, Some(vec!["ssh".to_string()]));
                assert_eq!(args.sshd_config, vec![PathBuf::from("a"), PathBuf::from("b")]);
            }
            Commands::List(_) => panic!("expected check"),
        }
    }
}
