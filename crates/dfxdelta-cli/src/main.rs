//! dfxdelta CLI
//!
//! Command-line interface for snapshot differentials

use clap::{Parser, Subcommand};

mod commands;

#[derive(Debug, Parser)]
#[command(name = "dfxdelta")]
#[command(about = "dfxdelta - Differential reports between file-system metadata snapshots", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Reconcile two snapshot documents into a differential document
    Diff(commands::diff::DiffArgs),
    /// Re-emit every fileobject of one document under a fresh header
    Cat(commands::cat::CatArgs),
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Diff(args) => commands::diff::execute(args),
        Commands::Cat(args) => commands::cat::execute(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
