//! List command - Show the available rules

use colored::Colorize;
use std::path::Path;

use super::ListArgs;
use crate::cli::exit_codes;
use crate::config::Config;
use crate::error::HostLensError;
use crate::rules::RulesEngine;

pub fn execute(_args: ListArgs, config_path: Option<&Path>) -> Result<i32, HostLensError> {
    let config = match config_path {
        Some(path) => Config::load_from_file(path)?,
        None => Config::load_or_default()?,
    };

    let engine = RulesEngine::new(config.clone());
    for rule in engine.rules() {
        let info = rule.info();
        let status = if config.is_rule_enabled(info.short_name) {
            "enabled".green()
        } else {
            "disabled".dimmed()
        };

        println!(
            "{:<8} {:<8} {:<10} {}",
            info.short_name.cyan().bold(),
            info.rule_type.as_str(),
            status,
            info.long_name
        );
        for path in rule.requires() {
            println!("         {} {}", "└─".dimmed(), path.display());
        }
    }

    Ok(exit_codes::SUCCESS)
}
