//! trajsample - Trajectory Candidate Sampling CLI
//!
//! Loads a sampler configuration, enumerates candidate curves from a start
//! state and prints their evaluations, counts or validation results.

#![deny(static_mut_refs)]
#![deny(unused_must_use)]
#![deny(clippy::unwrap_used)]

mod commands;
mod config;
mod error;
mod output;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::commands::SampleArgs;

#[derive(Parser)]
#[command(name = "trajsample")]
#[command(about = "trajsample - Enumerate polynomial trajectory candidates")]
#[command(version)]
#[command(long_about = "
trajsample builds quartic, quintic and piecewise quintic candidate curves
from a start state and a sampler configuration file (YAML or JSON).

Use --json for machine-readable output suitable for scripting. Logs go to
stderr; set RUST_LOG or pass -v to raise the level.
")]
struct Cli {
    /// Output format (human-readable or JSON)
    #[arg(
        long,
        global = true,
        help = "Output in JSON format for machine parsing"
    )]
    json: bool,

    /// Verbose logging
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Sample candidate curves and evaluate them
    Sample(SampleArgs),

    /// Print the number of candidates without building any
    Count {
        /// Sampler configuration (.yaml, .yml or .json)
        #[arg(long, env = "TRAJSAMPLE_CONFIG")]
        config: PathBuf,
    },

    /// Check every time candidate in a configuration
    Validate {
        /// Sampler configuration (.yaml, .yml or .json)
        #[arg(long, env = "TRAJSAMPLE_CONFIG")]
        config: PathBuf,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("trajsample={}", log_level).into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    match execute_command(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            let code = error::exit_code(&e);
            if cli.json {
                output::print_error_json(&e, code);
            } else {
                output::print_error_human(&e);
            }
            ExitCode::from(code)
        }
    }
}

fn execute_command(cli: &Cli) -> Result<()> {
    match &cli.command {
        Commands::Sample(args) => commands::sample(args, cli.json),
        Commands::Count { config } => commands::count(config, cli.json),
        Commands::Validate { config } => commands::validate(config, cli.json),
    }
}
