//! Output formatting module for CLI

pub mod json;
mod terminal;

pub use json::JsonOutput;
pub use terminal::TerminalOutput;

use crate::error::HostLensError;
use crate::rules::AuditReport;

/// Trait for rendering report output
pub trait ReportRenderer {
    fn render_report(&self, report: &AuditReport) -> Result<String, HostLensError>;
}
