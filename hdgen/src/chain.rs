//! Supported chains and the elliptic curves behind them.
//!
//! The chain set is closed: every chain maps to a fixed BIP-44 coin type and
//! a curve, and curve-specific code dispatches on [`CurveKind`] with
//! exhaustive matches.

use core::fmt;
use core::str::FromStr;

use crate::Error;

/// Elliptic curve family used for key derivation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CurveKind {
    /// Ed25519 with SLIP-0010 (hardened-only) derivation.
    Ed25519,
    /// secp256k1 with BIP-32 derivation.
    Secp256k1,
}

impl CurveKind {
    /// HMAC key used to derive the master node from a seed.
    #[must_use]
    pub const fn master_hmac_key(self) -> &'static [u8] {
        match self {
            Self::Ed25519 => b"ed25519 seed",
            Self::Secp256k1 => b"Bitcoin seed",
        }
    }

    /// Whether the curve allows non-hardened child derivation.
    #[must_use]
    pub const fn supports_normal_derivation(self) -> bool {
        match self {
            Self::Ed25519 => false,
            Self::Secp256k1 => true,
        }
    }

    /// Get the human-readable curve name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ed25519 => "ed25519",
            Self::Secp256k1 => "secp256k1",
        }
    }
}

impl fmt::Display for CurveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A supported blockchain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ChainKind {
    /// Solana: coin type 501, Ed25519, base58 keys.
    Sol,
    /// Ethereum: coin type 60, secp256k1, `0x`-prefixed hex keys.
    Eth,
}

impl ChainKind {
    /// BIP-44 registered coin type.
    #[must_use]
    pub const fn coin_type(self) -> u32 {
        match self {
            Self::Sol => 501,
            Self::Eth => 60,
        }
    }

    /// Curve used by this chain's keys.
    #[must_use]
    pub const fn curve(self) -> CurveKind {
        match self {
            Self::Sol => CurveKind::Ed25519,
            Self::Eth => CurveKind::Secp256k1,
        }
    }

    /// Ticker symbol, also used as the short identifier.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Sol => "SOL",
            Self::Eth => "ETH",
        }
    }

    /// Get the human-readable chain name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sol => "Solana",
            Self::Eth => "Ethereum",
        }
    }

    /// Get all supported chains.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Sol, Self::Eth]
    }
}

impl fmt::Display for ChainKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for ChainKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "sol" | "solana" => Ok(Self::Sol),
            "eth" | "ethereum" => Ok(Self::Eth),
            _ => Err(Error::UnknownChain(s.into())),
        }
    }
}
