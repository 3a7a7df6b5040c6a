//! Multi-chain session command.

use clap::Args;
use colored::Colorize;
use hdgen::{ChainKind, Deriver, Mnemonic, WalletRegistry};
use tracing::warn;

use super::load_mnemonic;

/// Generate wallets for several chains into one registry.
///
/// Wallets are generated round-robin (one SOL, one ETH, ...) so each
/// chain's indices stay independent of the others.
#[derive(Args)]
pub struct SessionCommand {
    /// BIP39 mnemonic phrase to import (unique 4-letter prefixes allowed).
    #[arg(short, long)]
    mnemonic: Option<String>,

    /// Number of mnemonic words when generating (12, 15, 18, 21, or 24).
    #[arg(short, long, default_value = "12")]
    words: usize,

    /// BIP39 passphrase (optional extra security).
    #[arg(short, long, env = "HDGEN_PASSPHRASE", hide_env_values = true)]
    passphrase: Option<String>,

    /// Number of Solana wallets to generate.
    #[arg(long, default_value = "1")]
    sol: u32,

    /// Number of Ethereum wallets to generate.
    #[arg(long, default_value = "1")]
    eth: u32,

    /// Encoded public key of a wallet to remove afterwards (repeatable).
    #[arg(short, long)]
    remove: Vec<String>,
}

impl SessionCommand {
    /// Execute the session command.
    pub fn execute(self) -> Result<(), Box<dyn std::error::Error>> {
        let mnemonic = load_mnemonic(self.mnemonic.as_deref(), self.words)?;
        let passphrase = self.passphrase.unwrap_or_default();
        let seed = mnemonic.to_seed(&passphrase);
        let deriver = Deriver::new(&seed);

        let mut registry = WalletRegistry::new();
        for round in 0..self.sol.max(self.eth) {
            if round < self.sol {
                registry.generate(&deriver, ChainKind::Sol)?;
            }
            if round < self.eth {
                registry.generate(&deriver, ChainKind::Eth)?;
            }
        }

        for key in &self.remove {
            let removed = ChainKind::all()
                .iter()
                .find_map(|chain| registry.remove(*chain, key));
            if removed.is_none() {
                warn!(public_key = key.as_str(), "no wallet to remove");
            }
        }

        print_header(&mnemonic, !passphrase.is_empty());
        for chain in ChainKind::all() {
            print_chain(&registry, *chain);
        }
        println!();
        Ok(())
    }
}

#[rustfmt::skip]
fn print_header(mnemonic: &Mnemonic, has_passphrase: bool) {
    println!();
    println!("      {}     {}", "Mnemonic".cyan().bold(), mnemonic.phrase().as_str());
    if has_passphrase {
        println!("      {}   {}", "Passphrase".cyan().bold(), "(set)".dimmed());
    }
}

#[rustfmt::skip]
fn print_chain(registry: &WalletRegistry, chain: ChainKind) {
    let wallets = registry.list(chain);
    if wallets.is_empty() {
        return;
    }

    println!();
    println!("      {}        {} {}", "Chain".cyan().bold(), chain.name(), format!("({} wallets)", wallets.len()).dimmed());
    for wallet in wallets {
        println!();
        println!("      {}      {}", "Account".cyan().bold(), format!("[{}]", wallet.account_index()).dimmed());
        println!("      {}         {}", "Path".cyan().bold(), wallet.path());
        println!("      {}      {}", "Address".cyan().bold(), wallet.public_key().green());
        println!("      {}  {}", "Private Key".cyan().bold(), wallet.secret_key());
    }
}
