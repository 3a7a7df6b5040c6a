//! Wallet derivation from a seed.

use tracing::debug;

use crate::{ChainKind, DerivationPath, Error, Keypair, Result, Seed, Wallet, hd, keys};

/// Wallet deriver bound to a seed.
///
/// Runs the full pipeline for one account: build the chain's account path,
/// derive the node with the chain's curve, materialize the keypair and
/// encode it.
///
/// # Example
///
/// ```
/// use hdgen::{ChainKind, Deriver, Mnemonic};
///
/// let mnemonic = Mnemonic::generate(128).unwrap();
/// let seed = mnemonic.to_seed("");
/// let deriver = Deriver::new(&seed);
///
/// let wallet = deriver.derive(ChainKind::Eth, 0).unwrap();
/// assert!(wallet.public_key().starts_with("0x"));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Deriver<'a> {
    seed: &'a Seed,
}

impl<'a> Deriver<'a> {
    /// Create a new deriver from a seed.
    #[inline]
    #[must_use]
    pub const fn new(seed: &'a Seed) -> Self {
        Self { seed }
    }

    /// Derive the keypair for `chain` at `account`, along with its path.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDerivationPath`] if `account` cannot be
    /// hardened and [`Error::InvalidKeyMaterial`] if the derived bytes are not
    /// a valid key on the chain's curve.
    pub fn derive_keypair(
        &self,
        chain: ChainKind,
        account: u32,
    ) -> Result<(DerivationPath, Keypair)> {
        let path = DerivationPath::for_account(chain, account)?;
        let material = hd::derive(self.seed.as_bytes(), &path, chain.curve())?;
        let keypair = keys::materialize(&material, chain.curve())?;
        Ok((path, keypair))
    }

    /// Derive the wallet for `chain` at `account`.
    ///
    /// Uses path: `m/44'/{coin_type}'/{account}'/0'`
    ///
    /// # Errors
    ///
    /// See [`Deriver::derive_keypair`].
    pub fn derive(&self, chain: ChainKind, account: u32) -> Result<Wallet> {
        let (path, keypair) = self.derive_keypair(chain, account)?;
        let wallet = Wallet::new(chain, account, path, &keypair);
        debug!(
            %chain,
            account,
            path = %wallet.path(),
            public_key = wallet.public_key(),
            "derived wallet"
        );
        Ok(wallet)
    }

    /// Derive `count` consecutive wallets starting at account `start`.
    ///
    /// # Errors
    ///
    /// Returns an error if any derivation fails or the account range
    /// overflows.
    pub fn derive_many(&self, chain: ChainKind, start: u32, count: u32) -> Result<Vec<Wallet>> {
        (0..count)
            .map(|offset| {
                let account = start.checked_add(offset).ok_or_else(|| {
                    Error::InvalidDerivationPath(format!("account {start} + {offset} overflows"))
                })?;
                self.derive(chain, account)
            })
            .collect()
    }
}
