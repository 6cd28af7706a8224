//! Scanner module - Reading the host files audited by rules

pub mod conf;

use std::path::Path;

pub use conf::Directives;

/// Check that `path` exists and is a regular file
pub fn is_regular_file(path: &Path) -> bool {
    path.is_file()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_is_regular_file() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("sshd_config");
        fs::write(&file, "Port 22\n").unwrap();

        assert!(is_regular_file(&file));
        assert!(!is_regular_file(temp_dir.path()));
        assert!(!is_regular_file(&temp_dir.path().join("missing")));
    }
}
