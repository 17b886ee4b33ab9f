// Restock CLI - headless replenishment planning runs

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use restock_cli::plan;

#[derive(Parser)]
#[command(name = "restock")]
#[command(about = "Reconcile sales and stock extracts into replenishment recommendations")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a replenishment plan from a TOML config file
    #[command(after_help = "\
Examples:
  restock run plan.toml
  restock run plan.toml --json
  restock run plan.toml --output result.json")]
    Run {
        /// Path to the .plan.toml config file
        config: PathBuf,

        /// Output JSON to stdout in addition to the human summary
        #[arg(long)]
        json: bool,

        /// Write JSON output to file
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Validate a plan config without running
    #[command(after_help = "\
Examples:
  restock validate plan.toml")]
    Validate {
        /// Path to the .plan.toml config file
        config: PathBuf,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Run {
            config,
            json,
            output,
        } => plan::cmd_run(&config, json, output.as_deref()),
        Commands::Validate { config } => plan::cmd_validate(&config),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e.message);
            ExitCode::from(e.code)
        }
    }
}
