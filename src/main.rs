//! cellarscout - compare scraped retail listings against a reference catalog

use clap::Parser;

use cellarscout::cli::{Cli, Commands};
use cellarscout::error::Result;
use cellarscout::report;

mod commands;

fn main() {
    report::init_colors();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        if let Some(hint) = e.hint() {
            eprintln!("\n{}", hint);
        }
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Check {
            target,
            from,
            size,
            json,
        } => commands::cmd_check(&target, from, size, json),
        Commands::Scan { target, json } => commands::cmd_scan(&target, json),
        Commands::Catalog { from, size, json } => commands::cmd_catalog(from, size, json),
        Commands::Init => commands::cmd_init(),
    }
}
