//! CLI command definitions and handlers.

mod derive;
mod mnemonic;
mod session;

pub use derive::DeriveCommand;
pub use mnemonic::MnemonicCommand;
pub use session::SessionCommand;

use clap::{Parser, Subcommand, ValueEnum};
use hdgen::{ChainKind, Mnemonic};

/// hdgen - Deterministic multi-chain wallet generator.
#[derive(Parser)]
#[command(name = "hdgen")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable debug logging (overridden by RUST_LOG).
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands.
#[derive(Subcommand)]
pub enum Commands {
    /// Mnemonic operations.
    #[command(name = "mnemonic", alias = "mn")]
    Mnemonic(MnemonicCommand),

    /// Derive wallets for one chain.
    Derive(DeriveCommand),

    /// Generate interleaved wallets for several chains into a session.
    Session(SessionCommand),
}

/// CLI-compatible chain enum.
///
/// Maps to `hdgen::ChainKind` variants.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum CliChain {
    /// Solana: m/44'/501'/{index}'/0'
    #[value(alias = "solana")]
    Sol,

    /// Ethereum: m/44'/60'/{index}'/0'
    #[value(alias = "ethereum")]
    Eth,
}

impl From<CliChain> for ChainKind {
    fn from(chain: CliChain) -> Self {
        match chain {
            CliChain::Sol => Self::Sol,
            CliChain::Eth => Self::Eth,
        }
    }
}

/// Import the given phrase (prefixes allowed) or generate a fresh one.
pub(crate) fn load_mnemonic(phrase: Option<&str>, words: usize) -> Result<Mnemonic, hdgen::Error> {
    match phrase {
        Some(phrase) => {
            let expanded = hdgen::mnemonic::expand(phrase)?;
            Mnemonic::parse(&expanded)
        }
        None => Mnemonic::generate_words(words),
    }
}
