//! JSON output formatting

use crate::error::HostLensError;
use serde::Serialize;

use super::ReportRenderer;
use crate::rules::{AuditReport, CheckResults, RuleFailure};

pub struct JsonOutput;

impl JsonOutput {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonOutput {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Serialize)]
struct ReportOutput<'a> {
    version: &'static str,
    rules: &'a [String],
    results: &'a CheckResults,
    errors: &'a [RuleFailure],
}

impl ReportRenderer for JsonOutput {
    fn render_report(&self, report: &AuditReport) -> Result<String, HostLensError> {
        let output = ReportOutput {
            version: env!("CARGO_PKG_VERSION"),
            rules: &report.rules,
            results: &report.results,
            errors: &report.errors,
        };

        Ok(serde_json::to_string_pretty(&output)?)
    }
}
