//! CIRC CLI
//!
//! Command-line interface for CIRC - a small lending catalog.
//!
//! State lives for the duration of one invocation; longer sessions are
//! scripted through a catalog file's `[[transactions]]` list.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;
mod output;

use output::{Output, OutputFormat};

#[derive(Parser)]
#[command(name = "circ")]
#[command(about = "CIRC - circulation desk for a small lending catalog")]
#[command(version)]
#[command(propagate_version = true)]
struct Cli {
    /// Output as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Quiet mode - minimal output
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Catalog file (defaults to the configured path, then the built-in sample)
    #[arg(short, long, global = true)]
    file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Replay the built-in sample session and print the reports
    Demo,
    /// Apply the catalog's scripted transactions, printing each outcome
    Run,
    /// Print the library summary
    Summary,
    /// Print every member's borrowed items
    Members,
    /// List catalog items with availability
    Items,
    /// Borrow an item for a member
    Borrow {
        /// Member id (e.g. M1001)
        member_id: String,
        /// Item id (e.g. B001)
        item_id: String,
    },
    /// Return an item held by a member
    Return {
        /// Member id (e.g. M1001)
        member_id: String,
        /// Item id (e.g. B001)
        item_id: String,
    },
}

fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let output = Output::new(OutputFormat::from_flags(cli.json, cli.quiet));

    // The demo always runs against the built-in sample
    if matches!(cli.command, Commands::Demo) {
        return commands::demo::run(&output);
    }

    let catalog = commands::catalog_source(cli.file.as_deref())?;

    if matches!(cli.command, Commands::Run) {
        return commands::run::apply(catalog, &output);
    }

    // Remaining commands act on the catalog after its scripted
    // transactions have settled.
    let (mut library, _) = commands::settle(catalog);

    match cli.command {
        Commands::Demo | Commands::Run => unreachable!(), // handled above
        Commands::Summary => commands::report::summary(&library, &output),
        Commands::Members => commands::report::members(&library, &output),
        Commands::Items => commands::report::items(&library, &output),
        Commands::Borrow { member_id, item_id } => {
            commands::circulation::borrow(&mut library, &member_id, &item_id, &output)
        }
        Commands::Return { member_id, item_id } => {
            commands::circulation::give_back(&mut library, &member_id, &item_id, &output)
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
