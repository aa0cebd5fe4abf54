//! Toolkit - browse the banking transformation toolkit from the terminal
//!
//! Renders catalog cards and item details as plain text or HTML, parses
//! freeform descriptions into content blocks, and manages the persisted
//! theme preference.

use std::io::Write;

use anyhow::Result;
use clap::Parser;
use toolkit_cli::{run, App, Cli, ToolkitConfig};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = ToolkitConfig::load(cli.config.as_deref())?;

    // Initialize logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.output.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let format = cli.format.unwrap_or(config.output.format);
    let mut app = App::open(config)?;
    let output = run(&cli.command, &mut app, format)?;

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(output.as_bytes())?;
    stdout.flush()?;
    Ok(())
}
