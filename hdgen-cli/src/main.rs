//! hdgen - Deterministic multi-chain wallet generator.
//!
//! Derive Solana and Ethereum wallets from a single BIP-39 mnemonic.

mod commands;

use clap::Parser;
use commands::{Cli, Commands};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

/// Install the log subscriber. Logs go to stderr so stdout stays clean.
fn init_tracing(verbose: bool) {
    let default = if verbose { "hdgen=debug" } else { "hdgen=warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default));
    let layer = fmt::layer().with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(filter)
        .with(layer)
        .init();
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Mnemonic(cmd) => cmd.execute()?,
        Commands::Derive(cmd) => cmd.execute()?,
        Commands::Session(cmd) => cmd.execute()?,
    }
    Ok(())
}
