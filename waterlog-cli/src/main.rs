//! Waterlog CLI - Water-consumption tracking in your terminal

use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod output;

use commands::{add, list, logs, record, remove, rename, show};

/// Waterlog - water-consumption tracking in your terminal
#[derive(Parser)]
#[command(name = "wl", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add a new user, optionally with initial consumption records
    Add {
        /// Unique user ID
        user_id: String,
        /// Display name
        name: String,
        /// Initial consumption amounts in liters; without at least one
        /// record the user is not written to the data file
        amounts: Vec<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Change a user's display name
    Rename {
        /// User ID
        user_id: String,
        /// New display name
        new_name: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Add a consumption record (in liters)
    Record {
        /// User ID
        user_id: String,
        /// Consumption amount in liters
        amount: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show one user's records and average
    Show {
        /// User ID
        user_id: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List all users with their averages
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Remove a user and their records
    Remove {
        /// User ID
        user_id: String,
        /// Skip confirmation prompt
        #[arg(long, short)]
        force: bool,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// View and manage application logs
    Logs {
        #[command(subcommand)]
        command: logs::LogsCommands,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = run(cli);

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Add { user_id, name, amounts, json } => add::run(&user_id, &name, &amounts, json),
        Commands::Rename { user_id, new_name, json } => rename::run(&user_id, &new_name, json),
        Commands::Record { user_id, amount, json } => record::run(&user_id, &amount, json),
        Commands::Show { user_id, json } => show::run(&user_id, json),
        Commands::List { json } => list::run(json),
        Commands::Remove { user_id, force, json } => remove::run(&user_id, force, json),
        Commands::Logs { command } => logs::run(command),
    }
}
