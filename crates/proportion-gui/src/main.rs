//! Proportion GUI
//!
//! Usage:
//!   proportion-gui                   Open with the default config file
//!   proportion-gui --config <file>   Open with a specific config file

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use proportion_gui::{logging, CalculatorConfig};

#[derive(Parser)]
#[command(name = "proportion-gui")]
#[command(version = proportion_core::VERSION)]
#[command(about = "Rule-of-three calculator window", long_about = None)]
struct Args {
    /// Path to a TOML config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let (config, load_error) = CalculatorConfig::load_startup(args.config.as_deref());
    logging::init(&config.log_filter, args.verbose);
    if let Some(err) = load_error {
        tracing::warn!(%err, "using default configuration");
    }

    proportion_gui::launch(config).context("calculator window failed")
}
