//! Single-chain derivation command.

use clap::Args;
use colored::Colorize;
use hdgen::{ChainKind, Deriver, Mnemonic, Wallet};
use tracing::debug;

use super::{CliChain, load_mnemonic};

/// Derive consecutive accounts for one chain.
///
/// Generates a new mnemonic unless one is given.
#[derive(Args)]
pub struct DeriveCommand {
    /// Chain to derive for.
    #[arg(short = 'C', long, default_value = "sol")]
    chain: CliChain,

    /// BIP39 mnemonic phrase to import (unique 4-letter prefixes allowed).
    #[arg(short, long)]
    mnemonic: Option<String>,

    /// Number of mnemonic words when generating (12, 15, 18, 21, or 24).
    #[arg(short, long, default_value = "12")]
    words: usize,

    /// BIP39 passphrase (optional extra security).
    #[arg(short, long, env = "HDGEN_PASSPHRASE", hide_env_values = true)]
    passphrase: Option<String>,

    /// First account index.
    #[arg(short, long, default_value = "0")]
    start: u32,

    /// Number of accounts to derive.
    #[arg(short, long, default_value = "1")]
    count: u32,
}

impl DeriveCommand {
    /// Execute the derive command.
    pub fn execute(self) -> Result<(), Box<dyn std::error::Error>> {
        let chain = ChainKind::from(self.chain);
        let mnemonic = load_mnemonic(self.mnemonic.as_deref(), self.words)?;
        let passphrase = self.passphrase.unwrap_or_default();

        debug!(
            %chain,
            start = self.start,
            count = self.count,
            words = mnemonic.word_count(),
            "deriving accounts"
        );
        let seed = mnemonic.to_seed(&passphrase);
        let deriver = Deriver::new(&seed);
        let wallets = deriver.derive_many(chain, self.start, self.count)?;

        print_wallets(chain, &mnemonic, !passphrase.is_empty(), &wallets);
        Ok(())
    }
}

#[rustfmt::skip]
fn print_wallets(chain: ChainKind, mnemonic: &Mnemonic, has_passphrase: bool, wallets: &[Wallet]) {
    println!();
    println!("      {}     {}", "Mnemonic".cyan().bold(), mnemonic.phrase().as_str());
    if has_passphrase {
        println!("      {}   {}", "Passphrase".cyan().bold(), "(set)".dimmed());
    }
    println!("      {}        {} ({})", "Chain".cyan().bold(), chain.name(), chain.curve().name().dimmed());
    println!();

    for (i, wallet) in wallets.iter().enumerate() {
        if wallets.len() > 1 {
            println!("      {}      {}", "Account".cyan().bold(), format!("[{}]", wallet.account_index()).dimmed());
        }
        println!("      {}         {}", "Path".cyan().bold(), wallet.path());
        println!("      {}      {}", "Address".cyan().bold(), wallet.public_key().green());
        println!("      {}  {}", "Private Key".cyan().bold(), wallet.secret_key());
        if i < wallets.len() - 1 {
            println!();
        }
    }
    println!();
}
