//! Terminal output formatting with colors

use crate::error::HostLensError;
use colored::{ColoredString, Colorize};

use super::ReportRenderer;
use crate::rules::{AuditReport, Severity};

pub struct TerminalOutput;

impl TerminalOutput {
    pub fn new() -> Self {
        Self
    }

    fn format_header(&self, report: &AuditReport) -> String {
        format!(
            "\n{} v{}\n\n{} {}\n",
            "hostlens".cyan().bold(),
            env!("CARGO_PKG_VERSION"),
            "Rules:".dimmed(),
            report.rules.join(", ").white().bold(),
        )
    }

    fn label(severity: Severity) -> ColoredString {
        match severity {
            Severity::High => "HIGH".red().bold(),
            Severity::Medium => "MEDIUM".yellow().bold(),
            Severity::Low => "LOW".blue().bold(),
            Severity::Ok => "OK".green().bold(),
        }
    }

    fn format_findings(&self, report: &AuditReport) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "\n{}\n{}\n\n",
            "━".repeat(50).dimmed(),
            "  AUDIT RESULTS".bold()
        ));

        for severity in Severity::ALL.iter().rev() {
            let messages = report.results.bucket(*severity);
            if messages.is_empty() {
                continue;
            }

            output.push_str(&format!("{} ({})\n", Self::label(*severity), messages.len()));
            for message in messages {
                output.push_str(&format!("  {} {}\n", "•".dimmed(), message));
            }
            output.push('\n');
        }

        if !report.errors.is_empty() {
            output.push_str(&format!(
                "{} ({})\n",
                "ERRORS".red().bold(),
                report.errors.len()
            ));
            for failure in &report.errors {
                output.push_str(&format!(
                    "  {} [{}] {}\n",
                    "✗".red(),
                    failure.rule.cyan(),
                    failure.message
                ));
            }
            output.push('\n');
        }

        output
    }

    fn format_summary(&self, report: &AuditReport) -> String {
        let results = &report.results;

        format!(
            "{}\n  High: {} │ Medium: {} │ Low: {} │ Ok: {}\n",
            "━".repeat(50).dimmed(),
            results.count_by_severity(Severity::High).to_string().red().bold(),
            results.count_by_severity(Severity::Medium).to_string().yellow().bold(),
            results.count_by_severity(Severity::Low).to_string().blue().bold(),
            results.count_by_severity(Severity::Ok).to_string().green().bold(),
        )
    }
}

impl Default for TerminalOutput {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportRenderer for TerminalOutput {
    fn render_report(&self, report: &AuditReport) -> Result<String, HostLensError> {
        let mut output = String::new();

        output.push_str(&self.format_header(report));
        output.push_str(&self.format_findings(report));
        output.push_str(&self.format_summary(report));

        Ok(output)
    }
}
