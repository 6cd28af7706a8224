//! Configuration loader

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::error::{ConfigError, HostLensError};

use super::{RuleConfig, SshConfig};

pub const CONFIG_FILENAME: &str = ".hostlens.toml";

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Per-rule overrides, keyed by rule short name
    #[serde(default)]
    pub rules: HashMap<String, RuleConfig>,

    /// SSH rule configuration
    #[serde(default)]
    pub ssh: SshConfig,
}

impl Config {
    /// Load configuration from the working directory or return default
    pub fn load_or_default() -> Result<Self, HostLensError> {
        let config_path = Path::new(CONFIG_FILENAME);

        if config_path.exists() {
            Self::load_from_file(config_path)
        } else {
            tracing::debug!("No {} found, using defaults", CONFIG_FILENAME);
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific file
    pub fn load_from_file(path: &Path) -> Result<Self, HostLensError> {
        let content = fs::read_to_string(path).map_err(|e| {
            HostLensError::Config(ConfigError::FileRead {
                path: path.display().to_string(),
                source: e,
            })
        })?;

        toml::from_str(&content).map_err(Into::into)
    }

    /// Serialize configuration to TOML
    pub fn to_toml(&self) -> Result<String, HostLensError> {
        toml::to_string_pretty(self).map_err(Into::into)
    }

    /// Check if a rule is enabled
    pub fn is_rule_enabled(&self, rule: &str) -> bool {
        self.rules.get(rule).map(|r| r.enabled).unwrap_or(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.is_rule_enabled("ssh"));
        assert_eq!(
            config.ssh.required_files,
            vec![PathBuf::from("/etc/ssh/sshd_config")]
        );
    }

    #[test]
    fn test_parse_config() {
        let config: Config = toml::from_str(
            r#"
[rules.ssh]
enabled = false

[ssh]
required_files = ["/etc/ssh/sshd_config", "/srv/jail/etc/ssh/sshd_config"]
"#,
        )
        .unwrap();

        assert!(!config.is_rule_enabled("ssh"));
        assert!(config.is_rule_enabled("other"));
        assert_eq!(config.ssh.required_files.len(), 2);
    }

    #[test]
    fn test_empty_ssh_table_uses_default_files() {
        let config: Config = toml::from_str("[ssh]\n").unwrap();
        assert_eq!(config.ssh.required_files.len(), 1);
    }

    #[test]
    fn test_rule_table_without_enabled_defaults_to_true() {
        let config: Config = toml::from_str("[rules.ssh]\n").unwrap();
        assert!(config.is_rule_enabled("ssh"));
    }

    #[test]
    fn test_load_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(CONFIG_FILENAME);
        fs::write(&path, "[ssh]\nrequired_files = [\"/tmp/sshd_config\"]\n").unwrap();

        let config = Config::load_from_file(&path).unwrap();
        assert_eq!(
            config.ssh.required_files,
            vec![PathBuf::from("/tmp/sshd_config")]
        );
    }

    #[test]
    fn test_load_missing_file_is_error() {
        let temp_dir = TempDir::new().unwrap();
        let err = Config::load_from_file(&temp_dir.path().join("nope.toml")).unwrap_err();
        assert!(matches!(
            err,
            HostLensError::Config(ConfigError::FileRead { .. })
        ));
    }

    #[test]
    fn test_invalid_toml_is_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(CONFIG_FILENAME);
        fs::write(&path, "[ssh\n").unwrap();

        let err = Config::load_from_file(&path).unwrap_err();
        assert!(matches!(err, HostLensError::Config(ConfigError::Parse(_))));
    }

    #[test]
    fn test_to_toml_round_trip() {
        let config = Config::default();
        let toml = config.to_toml().unwrap();
        let parsed: Config = toml::from_str(&toml).unwrap();
        assert_eq!(parsed.ssh.required_files, config.ssh.required_files);
    }
}
