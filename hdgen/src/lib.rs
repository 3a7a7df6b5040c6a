//! # hdgen - Deterministic Multi-Chain Key Generation
//!
//! Turns a single BIP-39 mnemonic into an unbounded, reproducible sequence of
//! per-chain keypairs:
//!
//! - **Solana**: SLIP-0010 Ed25519 at `m/44'/501'/{account}'/0'`
//! - **Ethereum**: BIP-32 secp256k1 at `m/44'/60'/{account}'/0'`
//!
//! The pipeline is [`Mnemonic`] → [`Seed`] → [`DerivationPath`] →
//! [`hd::derive`] → [`keys::materialize`] → [`WalletRegistry`].
//!
//! # Example
//!
//! ```
//! use hdgen::{ChainKind, Deriver, Mnemonic, WalletRegistry};
//!
//! let mnemonic = Mnemonic::parse(
//!     "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about",
//! )?;
//! let seed = mnemonic.to_seed("");
//! let deriver = Deriver::new(&seed);
//!
//! let mut registry = WalletRegistry::new();
//! let sol = registry.generate(&deriver, ChainKind::Sol)?;
//! assert_eq!(sol.account_index(), 0);
//! assert_eq!(sol.path().to_string(), "m/44'/501'/0'/0'");
//! # Ok::<(), hdgen::Error>(())
//! ```

#![warn(
    missing_docs,
    rust_2018_idioms,
    clippy::all,
    clippy::pedantic,
    clippy::nursery
)]
#![allow(
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::missing_errors_doc,
    clippy::doc_markdown,
    clippy::missing_const_for_fn,
    clippy::similar_names
)]
#![forbid(unsafe_code)]

pub mod chain;
pub mod deriver;
pub mod error;
pub mod hd;
pub mod keys;
pub mod mnemonic;
pub mod path;
pub mod registry;
pub mod wallet;

pub use chain::{ChainKind, CurveKind};
pub use deriver::Deriver;
pub use error::{Error, Result};
pub use hd::KeyMaterial;
pub use keys::Keypair;
pub use mnemonic::{Mnemonic, Seed};
pub use path::{ChildIndex, DerivationPath};
pub use registry::WalletRegistry;
pub use wallet::Wallet;
