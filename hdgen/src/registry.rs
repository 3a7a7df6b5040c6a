//! Ordered per-chain collection of generated wallets.

use std::collections::BTreeMap;

use tracing::debug;

use crate::{ChainKind, Deriver, Result, Wallet};

#[derive(Debug, Clone, Default)]
struct ChainSlot {
    wallets: Vec<Wallet>,
    /// Number of account indices ever issued on this chain.
    issued: u32,
}

/// Wallets generated during a session, grouped by chain.
///
/// Each chain keeps its own index sequence: the first wallet on a chain gets
/// account 0, the next one account 1, independent of other chains. The
/// sequence is a high-water mark, so removing a wallet never frees its index
/// for reuse.
///
/// # Example
///
/// ```
/// use hdgen::{ChainKind, Deriver, Mnemonic, WalletRegistry};
///
/// let seed = Mnemonic::generate(128).unwrap().to_seed("");
/// let deriver = Deriver::new(&seed);
/// let mut registry = WalletRegistry::new();
///
/// registry.generate(&deriver, ChainKind::Sol).unwrap();
/// registry.generate(&deriver, ChainKind::Eth).unwrap();
/// let sol = registry.generate(&deriver, ChainKind::Sol).unwrap();
/// assert_eq!(sol.account_index(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct WalletRegistry {
    chains: BTreeMap<ChainKind, ChainSlot>,
}

impl WalletRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Account index the next wallet on `chain` will receive.
    #[must_use]
    pub fn next_index(&self, chain: ChainKind) -> u32 {
        self.chains.get(&chain).map_or(0, |slot| slot.issued)
    }

    /// Derive the wallet at the chain's next index and append it.
    ///
    /// The index is only consumed when derivation succeeds.
    ///
    /// # Errors
    ///
    /// Propagates any derivation error; the registry is left unchanged.
    pub fn generate(&mut self, deriver: &Deriver<'_>, chain: ChainKind) -> Result<&Wallet> {
        let wallet = deriver.derive(chain, self.next_index(chain))?;
        Ok(self.add(wallet))
    }

    /// Append an already derived wallet to its chain.
    ///
    /// The chain's next index moves past the wallet's account index if it is
    /// not already beyond it.
    pub fn add(&mut self, wallet: Wallet) -> &Wallet {
        let chain = wallet.chain();
        let slot = self.chains.entry(chain).or_default();
        slot.issued = slot.issued.max(wallet.account_index().saturating_add(1));
        debug!(
            %chain,
            account = wallet.account_index(),
            public_key = wallet.public_key(),
            "registered wallet"
        );
        slot.wallets.push(wallet);
        &slot.wallets[slot.wallets.len() - 1]
    }

    /// Remove the wallet on `chain` with the given encoded public key.
    ///
    /// Returns `None` without changing anything if no such wallet exists.
    pub fn remove(&mut self, chain: ChainKind, public_key: &str) -> Option<Wallet> {
        let slot = self.chains.get_mut(&chain)?;
        let position = slot
            .wallets
            .iter()
            .position(|wallet| wallet.public_key() == public_key)?;
        let wallet = slot.wallets.remove(position);
        debug!(%chain, account = wallet.account_index(), public_key, "removed wallet");
        Some(wallet)
    }

    /// Find the wallet on `chain` with the given encoded public key.
    #[must_use]
    pub fn find(&self, chain: ChainKind, public_key: &str) -> Option<&Wallet> {
        self.list(chain)
            .iter()
            .find(|wallet| wallet.public_key() == public_key)
    }

    /// Wallets on `chain` in insertion order.
    #[must_use]
    pub fn list(&self, chain: ChainKind) -> &[Wallet] {
        self.chains
            .get(&chain)
            .map_or(&[], |slot| slot.wallets.as_slice())
    }

    /// All wallets, grouped by chain and in insertion order within a chain.
    pub fn iter(&self) -> impl Iterator<Item = &Wallet> {
        self.chains.values().flat_map(|slot| slot.wallets.iter())
    }

    /// Total number of wallets across all chains.
    #[must_use]
    pub fn len(&self) -> usize {
        self.chains.values().map(|slot| slot.wallets.len()).sum()
    }

    /// Check whether the registry holds no wallets.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
