//! vkreg CLI - Vulkan registry code generator

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;

use cli::{Cli, Commands};

fn main() {
    if let Err(e) = run() {
        eprintln!("error: {:#}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr; stdout is reserved for `inspect` output.
    let filter = if cli.verbose {
        EnvFilter::new("vkreg=debug")
    } else {
        EnvFilter::new("vkreg=info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();

    match cli.command {
        Commands::DispatchTable(args) => commands::dispatch_table::execute(args),
        Commands::ContextDispatcher(args) => commands::context_dispatcher::execute(args),
        Commands::Stype(args) => commands::stype::execute(args),
        Commands::Inspect(args) => commands::inspect::execute(args),
    }
}
