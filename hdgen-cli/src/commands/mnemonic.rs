//! Mnemonic CLI commands.

use clap::{Args, Subcommand};
use colored::Colorize;
use hdgen::Mnemonic;

/// Mnemonic operations.
#[derive(Args)]
pub struct MnemonicCommand {
    #[command(subcommand)]
    command: MnemonicSubcommand,
}

#[derive(Subcommand)]
enum MnemonicSubcommand {
    /// Generate a new mnemonic from system entropy.
    New {
        /// Number of mnemonic words (12, 15, 18, 21, or 24).
        #[arg(short, long, default_value = "12")]
        words: usize,
    },

    /// Check that a mnemonic has valid words and checksum.
    ///
    /// Unique prefixes of at least four letters are expanded first.
    Check {
        /// BIP39 mnemonic phrase.
        #[arg(short, long)]
        mnemonic: String,
    },
}

impl MnemonicCommand {
    /// Execute the mnemonic command.
    pub fn execute(self) -> Result<(), Box<dyn std::error::Error>> {
        match self.command {
            MnemonicSubcommand::New { words } => {
                let mnemonic = Mnemonic::generate_words(words)?;
                print_mnemonic("Generated", &mnemonic);
            }
            MnemonicSubcommand::Check { mnemonic } => {
                let expanded = hdgen::mnemonic::expand(&mnemonic)?;
                let mnemonic = Mnemonic::parse(&expanded)?;
                print_mnemonic("Valid", &mnemonic);
            }
        }
        Ok(())
    }
}

#[rustfmt::skip]
fn print_mnemonic(status: &str, mnemonic: &Mnemonic) {
    println!();
    println!("      {}       {}", "Status".cyan().bold(), status.green());
    println!("      {}        {} words", "Words".cyan().bold(), mnemonic.word_count());
    println!("      {}      {} bits", "Entropy".cyan().bold(), mnemonic.entropy_bits());
    println!("      {}     {}", "Mnemonic".cyan().bold(), mnemonic.phrase().as_str());
    println!();
}
