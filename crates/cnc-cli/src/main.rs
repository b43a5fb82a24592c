//! CNC tool inventory CLI
//!
//! Keeps the list of cutting tools loaded on each machine, stored as a JSON
//! file in the data directory.

mod cli;
mod commands;
mod context;
mod error;
mod logging;
mod render;

use clap::Parser;
use colored::Colorize;

use cli::{Cli, Commands};
use context::AppContext;
use error::Result;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let Some(command) = cli.command else {
        println!("{} CNC tool inventory", "cnc".green().bold());
        println!();
        println!("Run {} for available commands.", "cnc --help".cyan());
        return Ok(());
    };

    if command == Commands::Types {
        return commands::run_types();
    }

    let ctx = AppContext::resolve(cli.data_dir.as_deref())?;
    execute_command(&ctx, command)
}

fn execute_command(ctx: &AppContext, cmd: Commands) -> Result<()> {
    match cmd {
        Commands::List {
            search,
            type_filter,
            json,
        } => commands::run_list(ctx, &search, type_filter, json),
        Commands::Show { id, json } => commands::run_show(ctx, &id, json),
        Commands::Add { tool } => commands::run_add(ctx, tool),
        Commands::Edit { id, changes } => commands::run_edit(ctx, &id, changes),
        Commands::Remove { id, yes } => commands::run_remove(ctx, &id, yes),
        Commands::Export { output } => commands::run_export(ctx, output.as_deref()),
        Commands::Import { file } => commands::run_import(ctx, &file),
        Commands::Types => commands::run_types(),
    }
}
