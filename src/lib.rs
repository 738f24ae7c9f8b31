pub mod cli;
pub mod core;
pub mod tables;

pub use crate::core::config;

use anyhow::Result;
use rust_decimal::Decimal;
use std::path::PathBuf;
use tracing::{debug, info};

pub enum AppCommand {
    Convert {
        from: String,
        to: String,
        amount: Decimal,
    },
    Route {
        from: String,
        to: String,
    },
    Verify {
        fixture: PathBuf,
    },
}

/// Loads the configured tables, runs `command` and returns the rendered output.
pub fn execute(command: AppCommand, config_path: Option<&str>) -> Result<String> {
    let config = match config_path {
        Some(path) => config::AppConfig::load_from_path(path)?,
        None => config::AppConfig::load()?,
    };
    debug!("Loaded config: {config:#?}");

    let factory = tables::load_factory(&config)?;
    info!(
        currencies = factory.graph().currency_count(),
        edges = factory.graph().edge_count(),
        "Conversion graph ready"
    );

    match command {
        AppCommand::Convert { from, to, amount } => {
            let from = cli::currency_arg(&factory, &from);
            let to = cli::currency_arg(&factory, &to);
            cli::convert::run(&factory, &from, &to, amount, config.precision)
        }
        AppCommand::Route { from, to } => {
            let from = cli::currency_arg(&factory, &from);
            let to = cli::currency_arg(&factory, &to);
            cli::route::run(&factory, &from, &to)
        }
        AppCommand::Verify { fixture } => {
            let expectations = tables::load_expectations(&fixture)?;
            let report = cli::verify::run(&factory, &expectations);
            let table = report.display_as_table();
            if report.failures() > 0 {
                return Err(anyhow::anyhow!(table).context(format!(
                    "{} of {} expectations failed",
                    report.failures(),
                    report.outcomes.len()
                )));
            }
            Ok(table)
        }
    }
}

pub fn run_command(command: AppCommand, config_path: Option<&str>) -> Result<()> {
    let output = execute(command, config_path)?;
    println!("{output}");
    Ok(())
}
