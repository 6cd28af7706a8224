//! Rules module - Audit rules and evaluation engine

pub mod categories;
pub mod engine;
pub mod results;

pub use engine::{AuditReport, Rule, RuleFailure, RuleInfo, RuleType, RulesEngine};
pub use results::{CheckResults, Finding, Severity};
