//! A generated per-chain wallet.

use core::fmt;

use zeroize::Zeroizing;

use crate::{ChainKind, DerivationPath, Keypair};

/// A derived wallet with its canonical string encodings.
///
/// Immutable once created. The secret encoding is zeroized on drop and
/// redacted from `Debug` output.
#[derive(Clone, PartialEq, Eq)]
pub struct Wallet {
    chain: ChainKind,
    account_index: u32,
    path: DerivationPath,
    public_key: String,
    secret_key: Zeroizing<String>,
}

impl Wallet {
    /// Build a wallet from a materialized keypair.
    #[must_use]
    pub fn new(
        chain: ChainKind,
        account_index: u32,
        path: DerivationPath,
        keypair: &Keypair,
    ) -> Self {
        Self {
            chain,
            account_index,
            path,
            public_key: keypair.public_key_encoded(),
            secret_key: keypair.secret_key_encoded(),
        }
    }

    /// Chain this wallet belongs to.
    #[inline]
    #[must_use]
    pub const fn chain(&self) -> ChainKind {
        self.chain
    }

    /// Zero-based account index within the chain.
    #[inline]
    #[must_use]
    pub const fn account_index(&self) -> u32 {
        self.account_index
    }

    /// Derivation path used (e.g., `m/44'/501'/0'/0'`).
    #[inline]
    #[must_use]
    pub fn path(&self) -> &DerivationPath {
        &self.path
    }

    /// Encoded public key: Solana base58 address or Ethereum `0x` address.
    #[inline]
    #[must_use]
    pub fn public_key(&self) -> &str {
        &self.public_key
    }

    /// Encoded secret key: Solana base58 keypair or Ethereum `0x` hex scalar.
    ///
    /// **Security Warning**: handle this value carefully.
    #[inline]
    #[must_use]
    pub fn secret_key(&self) -> &str {
        &self.secret_key
    }
}

impl fmt::Debug for Wallet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Wallet")
            .field("chain", &self.chain)
            .field("account_index", &self.account_index)
            .field("path", &self.path.to_string())
            .field("public_key", &self.public_key)
            .field("secret_key", &"[REDACTED]")
            .finish()
    }
}
