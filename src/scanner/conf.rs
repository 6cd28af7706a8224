//! Parser for `key value` configuration files (sshd_config syntax)
//!
//! One directive per line. The first whitespace-delimited token is the key and
//! the trimmed remainder of the line is the value. Comment lines (`#`) and blank
//! lines are skipped, lines without a value are ignored, and a repeated key
//! keeps its last value.

use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::error::ScanError;

/// Directives parsed from a configuration file, keyed by name as written
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Directives {
    entries: HashMap<String, String>,
}

impl Directives {
    /// Create an empty mapping
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a directive, replacing any earlier value
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), value.into());
    }

    /// Value of a directive, if present
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Whether a directive is present
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Directives {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut directives = Directives::new();
        for (key, value) in iter {
            directives.insert(key, value);
        }
        directives
    }
}

/// Parse configuration text into directives
pub fn parse_str(content: &str) -> Directives {
    let mut directives = Directives::new();

    for line in content.lines() {
        let line = line.trim();

        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        if let Some((key, value)) = line.split_once(char::is_whitespace) {
            directives.insert(key, value.trim());
        }
    }

    directives
}

/// Parse a configuration file into directives
///
/// A missing file yields an empty mapping; callers that care about the
/// difference check for existence first. Bytes that are not valid UTF-8 are
/// replaced rather than rejected.
pub fn parse_file(path: &Path) -> Result<Directives, ScanError> {
    match fs::read(path) {
        Ok(bytes) => Ok(parse_str(&String::from_utf8_lossy(&bytes))),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::debug!("No config file found at {}", path.display());
            Ok(Directives::new())
        }
        Err(e) => Err(ScanError::FileRead {
            path: path.display().to_string(),
            source: e,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_parse_key_value() {
        let directives = parse_str("Port 2222\nPermitRootLogin no\n");

        assert_eq!(directives.len(), 2);
        assert_eq!(directives.get("Port"), Some("2222"));
        assert_eq!(directives.get("PermitRootLogin"), Some("no"));
    }

    #[test]
    fn test_comments_and_blank_lines_only() {
        let directives = parse_str("# sshd config\n\n   \n#Port 22\n    # indented comment\n");
        assert!(directives.is_empty());
    }

    #[test]
    fn test_repeated_key_last_wins() {
        let directives = parse_str("Port 22\nPort 2222\n");
        assert_eq!(directives.get("Port"), Some("2222"));
        assert_eq!(directives.len(), 1);
    }

    #[test]
    fn test_value_keeps_inner_whitespace() {
        let directives = parse_str("AllowUsers  alice bob   \t\n");
        assert_eq!(directives.get("AllowUsers"), Some("alice bob"));
    }

    #[test]
    fn test_tab_separated() {
        let directives = parse_str("MaxAuthTries\t3\n");
        assert_eq!(directives.get("MaxAuthTries"), Some("3"));
    }

    #[test]
    fn test_key_without_value_is_ignored() {
        let directives = parse_str("Protocol\nPort 22\n");
        assert!(!directives.contains("Protocol"));
        assert_eq!(directives.get("Port"), Some("22"));
    }

    #[test]
    fn test_inline_comment_is_part_of_value() {
        let directives = parse_str("Port 22 # default\n");
        assert_eq!(directives.get("Port"), Some("22 # default"));
    }

    #[test]
    fn test_keys_are_case_sensitive() {
        let directives = parse_str("port 22\n");
        assert!(directives.contains("port"));
        assert!(!directives.contains("Port"));
    }

    #[test]
    fn test_crlf_line_endings() {
        let directives = parse_str("Port 2222\r\nProtocol 2\r\n");
        assert_eq!(directives.get("Port"), Some("2222"));
        assert_eq!(directives.get("Protocol"), Some("2"));
    }

    #[test]
    fn test_parse_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("sshd_config");
        std::fs::write(&path, "# header\nProtocol 2\n").unwrap();

        let directives = parse_file(&path).unwrap();
        assert_eq!(directives.get("Protocol"), Some("2"));
    }

    #[test]
    fn test_parse_file_with_latin1_comment() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("sshd_config");
        std::fs::write(&path, b"# Configuraci\xf3n del servidor\nPort 2222\nProtocol 2\n").unwrap();

        let directives = parse_file(&path).unwrap();
        assert_eq!(directives.get("Port"), Some("2222"));
        assert_eq!(directives.get("Protocol"), Some("2"));
        assert_eq!(directives.len(), 2);
    }

    #[test]
    fn test_parse_missing_file_is_empty() {
        let temp_dir = TempDir::new().unwrap();
        let directives = parse_file(&temp_dir.path().join("missing")).unwrap();
        assert!(directives.is_empty());
    }

    #[test]
    fn test_parse_directory_is_error() {
        let temp_dir = TempDir::new().unwrap();
        assert!(parse_file(temp_dir.path()).is_err());
    }

    #[test]
    fn test_from_iterator() {
        let directives: Directives = [("Port", "22"), ("Port", "2200")].into_iter().collect();
        assert_eq!(directives.get("Port"), Some("2200"));
    }
}
