//! # nvn CLI Entry Point
//!
//! Assembles subcommands and dispatches to handler modules.

use std::path::PathBuf;

use clap::Parser;

/// Nirvana compliance gate CLI.
///
/// Inspects and drives the persisted jurisdiction gate, and previews the
/// masking treatment applied to pre-consent data.
#[derive(Parser, Debug)]
#[command(name = "nvn", version, about)]
struct Cli {
    /// Directory holding the persisted gate record.
    #[arg(long, global = true)]
    store_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Inspect and drive the compliance gate.
    Gate(nvn_cli::gate::GateArgs),
    /// Render a value through the masking pipeline.
    Mask(nvn_cli::mask::MaskArgs),
}

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let store_dir = cli
        .store_dir
        .unwrap_or_else(nvn_cli::default_store_dir);

    let code = match cli.command {
        Commands::Gate(args) => nvn_cli::gate::run_gate(&args, &store_dir)?,
        Commands::Mask(args) => nvn_cli::mask::run_mask(&args, &store_dir)?,
    };

    if code != 0 {
        std::process::exit(i32::from(code));
    }
    Ok(())
}
