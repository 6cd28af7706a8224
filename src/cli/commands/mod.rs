//! CLI commands module

pub mod check;
pub mod list;

use clap::{Args, ValueEnum};
use std::path::PathBuf;

/// Arguments for the check command
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Output format (terminal, json)
    #[arg(short, long, default_value = "terminal")]
    pub format: OutputFormat,

    /// Only run specific rules
    #[arg(long, value_delimiter = ',')]
    pub only: Option<Vec<String>>,

    /// Skip specific rules
    #[arg(long, value_delimiter = ',')]
    pub skip: Option<Vec<String>>,

    /// sshd configuration file to audit (repeatable, replaces configured paths)
    #[arg(long = "sshd-config", value_name = "FILE")]
    pub sshd_config: Vec<PathBuf>,

    /// Output file (defaults to stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

/// Arguments for the list command
#[derive(Args, Debug)]
pub struct ListArgs {}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    Terminal,
    Json,
}
