//! tfmt - summarize token transfers in your terminal

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

mod commands;
mod output;

use commands::{config, summary, tokens};

/// tfmt - summarize token transfers
#[derive(Parser)]
#[command(name = "tfmt", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the gross total moved per token
    Gross {
        /// JSON file with transfer records (reads stdin if omitted)
        file: Option<PathBuf>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
        /// Output as a table
        #[arg(long, conflicts_with = "json")]
        table: bool,
    },

    /// Show the net change per token for one address
    Net {
        /// JSON file with transfer records (reads stdin if omitted)
        file: Option<PathBuf>,
        /// Address to net against (defaults to ourAddress from settings)
        #[arg(long, short)]
        address: Option<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
        /// Output as a table
        #[arg(long, conflicts_with = "json")]
        table: bool,
    },

    /// List configured token symbols
    Tokens {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Edit settings
    Config {
        #[command(subcommand)]
        command: config::ConfigCommands,
    },
}

fn main() -> ExitCode {
    // Logs go to stderr so summaries can be piped
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to initialize logging: {}", e);
    }

    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            output::say(output::Tone::Failure, &format!("{:#}", e));
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Gross { file, json, table } => {
            summary::run_gross(file.as_deref(), summary::OutputFormat::from_flags(json, table))
        }
        Commands::Net { file, address, json, table } => summary::run_net(
            file.as_deref(),
            address.as_deref(),
            summary::OutputFormat::from_flags(json, table),
        ),
        Commands::Tokens { json } => tokens::run(json),
        Commands::Config { command } => config::run(command),
    }
}
