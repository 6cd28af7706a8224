//! Configuration module

pub mod loader;

pub use loader::Config;

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::rules::categories::ssh::DEFAULT_SSHD_CONFIG;

/// Rule configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleConfig {
    /// Whether the rule is enabled
    #[serde(default = "default_true")]
    pub enabled: bool,
}

impl Default for RuleConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}

fn default_true() -> bool {
    true
}

/// SSH rule configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SshConfig {
    /// sshd configuration files to audit, in order
    #[serde(default = "default_sshd_files")]
    pub required_files: Vec<PathBuf>,
}

impl Default for SshConfig {
    fn default() -> Self {
        Self {
            required_files: default_sshd_files(),
        }
    }
}

fn default_sshd_files() -> Vec<PathBuf> {
    vec![PathBuf::from(DEFAULT_SSHD_CONFIG)]
}
