//! Check command - Run the audit and print the report

use colored::Colorize;
use std::path::Path;

use super::{CheckArgs, OutputFormat};
use crate::cli::exit_codes;
use crate::cli::output::{JsonOutput, ReportRenderer, TerminalOutput};
use crate::config::Config;
use crate::error::{HostLensError, OutputError};
use crate::rules::RulesEngine;

pub fn execute(args: CheckArgs, config_path: Option<&Path>) -> Result<i32, HostLensError> {
    let mut config = match config_path {
        Some(path) => Config::load_from_file(path)?,
        None => Config::load_or_default()?,
    };

    if !args.sshd_config.is_empty() {
        config.ssh.required_files = args.sshd_config;
    }

    let mut engine = RulesEngine::new(config);
    if let Some(only) = args.only {
        engine.set_only_categories(only);
    }
    if let Some(skip) = args.skip {
        engine.set_skip_categories(skip);
    }

    let report = engine.run();

    let renderer: Box<dyn ReportRenderer> = match args.format {
        OutputFormat::Terminal => Box::new(TerminalOutput::new()),
        OutputFormat::Json => Box::new(JsonOutput::new()),
    };
    let rendered = renderer.render_report(&report)?;

    match args.output {
        Some(output_path) => {
            std::fs::write(&output_path, &rendered).map_err(|e| {
                HostLensError::Output(OutputError::FileWrite {
                    path: output_path.display().to_string(),
                    source: e,
                })
            })?;

            println!(
                "{} Report written to: {}",
                "Success:".green().bold(),
                output_path.display().to_string().cyan()
            );
        }
        None => println!("{}", rendered),
    }

    Ok(exit_codes::for_report(&report))
}
