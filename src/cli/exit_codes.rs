//! Exit codes for the CLI
//!
//! # Exit Code Reference
//!
//! | Code | Constant | Meaning |
//! |------|----------|---------|
//! | 0 | `SUCCESS` | Only `ok` or `low` findings |
//! | 1 | `HIGH_ISSUES` | At least one `high` finding |
//! | 2 | `MEDIUM_ISSUES` | At least one `medium` finding, no `high` |
//! | 3 | `ERROR` | Configuration error or a rule aborted |

use crate::rules::{AuditReport, Severity};

/// Audit completed with nothing above `low`.
pub const SUCCESS: i32 = 0;

/// High severity findings detected (empty passwords, protocol v1, ...).
pub const HIGH_ISSUES: i32 = 1;

/// Medium severity findings detected (root login allowed).
pub const MEDIUM_ISSUES: i32 = 2;

/// Runtime error.
///
/// Used when:
/// - Configuration file is unreadable or invalid
/// - A rule aborted, e.g. on a non-numeric value for a numeric directive
/// - The report could not be written
pub const ERROR: i32 = 3;

/// Exit code for a finished audit
pub fn for_report(report: &AuditReport) -> i32 {
    if report.has_errors() {
        return ERROR;
    }

    match report.results.worst() {
        Some(Severity::High) => HIGH_ISSUES,
        Some(Severity::Medium) => MEDIUM_ISSUES,
        Some(Severity::Low) | Some(Severity::Ok) | None => SUCCESS,
    }
}
