//! Error types for HostLens
//!
//! This module defines custom error types using `thiserror` for better error handling
//! and more descriptive error messages throughout the application.

use thiserror::Error;

/// Main error type for HostLens
#[derive(Error, Debug)]
pub enum HostLensError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Scan-related errors
    #[error("Scan error: {0}")]
    Scan(#[from] ScanError),

    /// Rule evaluation errors
    #[error("Rule error: {0}")]
    Rule(#[from] RuleError),

    /// Report rendering or writing errors
    #[error("Output error: {0}")]
    Output(#[from] OutputError),
}

/// Errors that occur while loading `.hostlens.toml`
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the configuration file
    #[error("Failed to read config file '{path}': {source}")]
    FileRead {
        /// Path to the configuration file
        path: String,
        /// The underlying I/O error
        source: std::io::Error,
    },

    /// The configuration file is not valid TOML
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    /// The configuration could not be serialized back to TOML
    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Errors that occur while reading audited files
#[derive(Error, Debug)]
pub enum ScanError {
    /// Failed to read a file
    #[error("Failed to read file '{path}': {source}")]
    FileRead {
        /// Path to the file that failed to read
        path: String,
        /// The underlying I/O error
        source: std::io::Error,
    },
}

/// Errors raised while a rule evaluates a parsed file
#[derive(Error, Debug, PartialEq, Eq)]
pub enum RuleError {
    /// A directive that is compared numerically holds a non-numeric value
    #[error("Directive '{directive}' expects an integer, found '{value}'")]
    InvalidInteger {
        /// Directive name as written in the file
        directive: String,
        /// The offending value
        value: String,
    },

    /// A rule failed on one of its required files
    #[error("{path}: {source}")]
    InFile {
        /// File being analyzed
        path: String,
        /// The failure
        source: Box<RuleError>,
    },
}

/// Errors that occur while rendering or writing a report
#[derive(Error, Debug)]
pub enum OutputError {
    /// JSON serialization failed
    #[error("Failed to serialize report: {0}")]
    Json(#[from] serde_json::Error),

    /// Failed to write the report file
    #[error("Failed to write report to '{path}': {source}")]
    FileWrite {
        /// Destination path
        path: String,
        /// The underlying I/O error
        source: std::io::Error,
    },
}

impl From<serde_json::Error> for HostLensError {
    fn from(err: serde_json::Error) -> Self {
        HostLensError::Output(OutputError::Json(err))
    }
}

impl From<toml::de::Error> for HostLensError {
    fn from(err: toml::de::Error) -> Self {
        HostLensError::Config(ConfigError::Parse(err))
    }
}

impl From<toml::ser::Error> for HostLensError {
    fn from(err: toml::ser::Error) -> Self {
        HostLensError::Config(ConfigError::Serialize(err))
    }
}
