//! HOR CLI - Hands on React documentation site tooling.
//!
//! Provides commands for:
//! - `check`: Validate config, content pages and every sidebar
//! - `outline`: Print flattened sidebar entries
//! - `nav`: Print navigation JSON for the rendering engine
//! - `config`: Print the resolved site configuration

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{CheckArgs, ConfigArgs, NavArgs, OutlineArgs};
use output::Output;

/// HOR - documentation site configuration and outline tooling.
#[derive(Parser)]
#[command(name = "hor", version, about)]
struct Cli {
    /// Enable verbose output (info-level logs).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate configuration, content pages and sidebars.
    Check(CheckArgs),
    /// Print sidebar entries in display order.
    Outline(OutlineArgs),
    /// Print navigation tree and pagination as JSON.
    Nav(NavArgs),
    /// Print the resolved site configuration as JSON.
    Config(ConfigArgs),
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    // --verbose enables INFO level, otherwise use RUST_LOG (errors only when unset)
    let filter = if cli.verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Check(args) => args.execute(),
        Commands::Outline(args) => args.execute(),
        Commands::Nav(args) => args.execute(),
        Commands::Config(args) => args.execute(),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}
