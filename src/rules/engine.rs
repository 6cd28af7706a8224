//! Rules evaluation engine

use serde::Serialize;
use std::path::PathBuf;
use tracing::{debug, info, span, warn, Level};

use super::categories::ssh::SshRule;
use super::results::{CheckResults, Severity};
use crate::config::Config;
use crate::error::HostLensError;

/// Kind of input a rule inspects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleType {
    /// Configuration files on disk
    Config,
}

impl RuleType {
    pub fn as_str(&self) -> &'static str {
        match self {
            RuleType::Config => "config",
        }
    }
}

/// Static description of a rule, fixed at construction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleInfo {
    /// Identifier used on the command line and in config (e.g., "ssh")
    pub short_name: &'static str,
    /// One-line description
    pub long_name: &'static str,
    pub rule_type: RuleType,
    /// Files the rule reads, processed in order
    pub required_files: Vec<PathBuf>,
}

/// Trait for audit rules
pub trait Rule: Send + Sync {
    /// Get the rule metadata
    fn info(&self) -> &RuleInfo;

    /// Files this rule needs
    fn requires(&self) -> &[PathBuf] {
        &self.info().required_files
    }

    /// Run the rule, appending findings to `results`
    fn analyze(&self, results: &mut CheckResults) -> Result<(), HostLensError>;
}

/// A rule that failed instead of producing findings
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuleFailure {
    pub rule: String,
    pub message: String,
}

/// Outcome of a complete audit run
#[derive(Debug, Clone, Default, Serialize)]
pub struct AuditReport {
    /// Short names of the rules that were run
    pub rules: Vec<String>,
    /// Findings from all rules
    pub results: CheckResults,
    /// Rules that aborted
    pub errors: Vec<RuleFailure>,
}

impl AuditReport {
    /// Check if any rule aborted
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

/// Main rules evaluation engine
pub struct RulesEngine {
    config: Config,
    only_categories: Option<Vec<String>>,
    skip_categories: Option<Vec<String>>,
}

impl RulesEngine {
    /// Create a new rules engine with the given configuration
    pub fn new(config: Config) -> Self {
        Self {
            config,
            only_categories: None,
            skip_categories: None,
        }
    }

    /// Set rules to exclusively run
    pub fn set_only_categories(&mut self, categories: Vec<String>) {
        self.only_categories = Some(categories);
    }

    /// Set rules to skip
    pub fn set_skip_categories(&mut self, categories: Vec<String>) {
        self.skip_categories = Some(categories);
    }

    /// Check if a rule should be run
    fn should_run_category(&self, category: &str) -> bool {
        if !self.config.is_rule_enabled(category) {
            return false;
        }

        if let Some(only) = &self.only_categories {
            return only.iter().any(|c| c == category);
        }

        if let Some(skip) = &self.skip_categories {
            return !skip.iter().any(|c| c == category);
        }

        true
    }

    /// All built-in rules, configured from `self.config`
    pub fn rules(&self) -> Vec<Box<dyn Rule>> {
        vec![Box::new(SshRule::with_required_files(
            self.config.ssh.required_files.clone(),
        ))]
    }

    /// Run all enabled rules and return the report
    pub fn run(&self) -> AuditReport {
        let rules = self.rules();
        self.run_rules(&rules)
    }

    /// Run the given rules sequentially into one set of buckets
    pub fn run_rules(&self, rules: &[Box<dyn Rule>]) -> AuditReport {
        let mut report = AuditReport::default();

        for rule in rules {
            let name = rule.info().short_name;

            if !self.should_run_category(name) {
                debug!(rule = name, "Skipping rule");
                continue;
            }

            let span = span!(Level::INFO, "rule", rule = name);
            let _guard = span.enter();

            debug!(rule = name, files = rule.requires().len(), "Running rule");
            report.rules.push(name.to_string());

            let before = report.results.total_count();
            match rule.analyze(&mut report.results) {
                Ok(()) => {
                    debug!(
                        rule = name,
                        findings_count = report.results.total_count() - before,
                        "Rule completed"
                    );
                }
                Err(e) => {
                    warn!(rule = name, error = %e, "Error running rule");
                    report.errors.push(RuleFailure {
                        rule: name.to_string(),
                        message: e.to_string(),
                    });
                }
            }
        }

        info!(
            "Audit complete: {} high, {} medium, {} low, {} ok",
            report.results.count_by_severity(Severity::High),
            report.results.count_by_severity(Severity::Medium),
            report.results.count_by_severity(Severity::Low),
            report.results.count_by_severity(Severity::Ok),
        );

        report
    }
}
