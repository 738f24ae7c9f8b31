use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use currcvt::core::log::init_logging;
use rust_decimal::Decimal;
use std::path::PathBuf;

#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to optional configuration file
    #[arg(short, long, global = true)]
    config_path: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

impl From<Commands> for currcvt::AppCommand {
    fn from(cmd: Commands) -> currcvt::AppCommand {
        match cmd {
            Commands::Convert { from, to, amount } => {
                currcvt::AppCommand::Convert { from, to, amount }
            }
            Commands::Route { from, to } => currcvt::AppCommand::Route { from, to },
            Commands::Verify { fixture } => currcvt::AppCommand::Verify { fixture },
            Commands::Setup => unreachable!("Setup command should be handled separately"),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Create default configuration
    Setup,
    /// Convert an amount between two currencies
    Convert {
        /// Source currency code, e.g. USD
        from: String,
        /// Target currency code, e.g. EUR
        to: String,
        /// Amount in the source currency
        #[arg(allow_negative_numbers = true)]
        amount: Decimal,
    },
    /// Show the chain of rates used between two currencies
    Route { from: String, to: String },
    /// Check conversions against a JSON fixture of expected amounts
    Verify { fixture: PathBuf },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let result = match cli.command {
        Some(Commands::Setup) => currcvt::cli::setup::setup(),
        Some(cmd) => currcvt::run_command(cmd.into(), cli.config_path.as_deref()),
        None => {
            Cli::command().print_help()?;
            Ok(())
        }
    };

    if let Err(e) = &result {
        tracing::error!(error = %e, "Application failed");
    }
    result
}
