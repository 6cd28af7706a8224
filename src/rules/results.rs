//! # Audit Results Structures
//!
//! This module defines the data structures for representing audit findings
//! and the severity buckets rules append them to.
//!
//! ## Overview
//!
//! - [`Severity`] - Finding severity buckets (Ok, Low, Medium, High)
//! - [`Finding`] - Individual observation produced by a check
//! - [`CheckResults`] - Messages grouped by severity, in evaluation order
//!
//! ## Examples
//!
//! ```rust
//! use hostlens::rules::results::{CheckResults, Finding, Severity};
//!
//! let mut results = CheckResults::new();
//! results.add_finding(Finding::new("SSH002", "Protocol", Severity::High, "SSH is not using protocol v2"));
//!
//! assert_eq!(results.count_by_severity(Severity::High), 1);
//! assert_eq!(results.worst(), Some(Severity::High));
//! ```

use serde::Serialize;
use std::fmt;

/// Severity buckets for findings, ordered from harmless to most severe.
///
/// # Examples
///
/// ```rust
/// use hostlens::rules::Severity;
///
/// assert!(Severity::High > Severity::Low);
/// assert_eq!(Severity::Medium.to_string(), "medium");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// The setting follows the recommendation.
    Ok,
    /// Minor hardening opportunity.
    Low,
    /// Should be addressed.
    Medium,
    /// Exposes the host to a known attack.
    High,
}

impl Severity {
    /// All severities, from harmless to most severe
    pub const ALL: [Severity; 4] = [Severity::Ok, Severity::Low, Severity::Medium, Severity::High];

    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Ok => "ok",
            Severity::Low => "low",
            Severity::Medium => "medium",
            Severity::High => "high",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single observation produced by a check.
///
/// Only the severity and message land in the result buckets; the check id and
/// directive are kept so renderers and logs can point at the offending line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Finding {
    /// Check identifier (e.g., "SSH001").
    pub check_id: String,

    /// Directive the check looked at (e.g., "Port").
    pub directive: String,

    /// Severity bucket of the finding.
    pub severity: Severity,

    /// Fixed, human-readable message.
    pub message: String,
}

impl Finding {
    /// Create a new finding
    pub fn new(
        check_id: impl Into<String>,
        directive: impl Into<String>,
        severity: Severity,
        message: impl Into<String>,
    ) -> Self {
        Self {
            check_id: check_id.into(),
            directive: directive.into(),
            severity,
            message: message.into(),
        }
    }
}

/// Finding messages grouped by severity.
///
/// Rules only ever append; within a bucket messages stay in the order the
/// checks were evaluated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CheckResults {
    pub ok: Vec<String>,
    pub low: Vec<String>,
    pub medium: Vec<String>,
    pub high: Vec<String>,
}

impl CheckResults {
    /// Create empty buckets
    pub fn new() -> Self {
        Self::default()
    }

    /// Messages in one bucket
    pub fn bucket(&self, severity: Severity) -> &[String] {
        match severity {
            Severity::Ok => &self.ok,
            Severity::Low => &self.low,
            Severity::Medium => &self.medium,
            Severity::High => &self.high,
        }
    }

    fn bucket_mut(&mut self, severity: Severity) -> &mut Vec<String> {
        match severity {
            Severity::Ok => &mut self.ok,
            Severity::Low => &mut self.low,
            Severity::Medium => &mut self.medium,
            Severity::High => &mut self.high,
        }
    }

    /// Append a message to a bucket
    pub fn push(&mut self, severity: Severity, message: impl Into<String>) {
        self.bucket_mut(severity).push(message.into());
    }

    /// Append a finding to its bucket
    pub fn add_finding(&mut self, finding: Finding) {
        self.bucket_mut(finding.severity).push(finding.message);
    }

    /// Append several findings, in order
    pub fn add_findings(&mut self, findings: impl IntoIterator<Item = Finding>) {
        for finding in findings {
            self.add_finding(finding);
        }
    }

    /// Count messages in a bucket
    pub fn count_by_severity(&self, severity: Severity) -> usize {
        self.bucket(severity).len()
    }

    /// Total number of messages across all buckets
    pub fn total_count(&self) -> usize {
        Severity::ALL
            .iter()
            .map(|s| self.count_by_severity(*s))
            .sum()
    }

    /// Check if no finding has been recorded
    pub fn is_empty(&self) -> bool {
        self.total_count() == 0
    }

    /// Most severe non-empty bucket
    pub fn worst(&self) -> Option<Severity> {
        Severity::ALL
            .iter()
            .rev()
            .copied()
            .find(|s| self.count_by_severity(*s) > 0)
    }
}
