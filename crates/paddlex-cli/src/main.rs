//! PaddleX CLI
//!
//! Bulk import and local inspection of a paddle catalog database

use clap::{Parser, Subcommand};
use paddlex_core::logging_facility::{self, Profile};

mod commands;

#[derive(Debug, Parser)]
#[command(name = "paddlex")]
#[command(about = "PaddleX - pickleball paddle catalog", long_about = None)]
struct Cli {
    /// Emit store operation logs
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Import paddles from a JSON array file
    Import(commands::import::ImportArgs),
    /// List stored paddles
    List(commands::list::ListArgs),
    /// Print one paddle as JSON
    Show(commands::show::ShowArgs),
}

fn main() {
    let cli = Cli::parse();

    if cli.verbose {
        logging_facility::init(Profile::Development);
    }

    let result = match cli.command {
        Commands::Import(args) => commands::import::execute(args),
        Commands::List(args) => commands::list::execute(args),
        Commands::Show(args) => commands::show::execute(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
