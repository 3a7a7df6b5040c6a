//! BIP-32 derivation paths and the per-chain BIP-44 account path builder.
//!
//! Every generated wallet lives at `m/44'/{coin_type}'/{account}'/0'`, with
//! all four segments hardened so the same path works on both curves.

use core::fmt;
use core::str::FromStr;

use crate::{ChainKind, Error, Result};

/// BIP-44 purpose constant.
pub const BIP44_PURPOSE: u32 = 44;

/// A child index in a derivation path.
///
/// Hardened indices are >= 2^31 in raw form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ChildIndex {
    /// Normal (non-hardened) index: 0 to 2^31 - 1
    Normal(u32),
    /// Hardened index: displayed as n', stored as n
    Hardened(u32),
}

impl ChildIndex {
    /// The offset for hardened indices (2^31).
    pub const HARDENED_OFFSET: u32 = 0x8000_0000;

    /// Create a normal (non-hardened) child index.
    pub fn normal(index: u32) -> Result<Self> {
        if index >= Self::HARDENED_OFFSET {
            Err(Error::InvalidDerivationPath(format!("index {index} out of range")))
        } else {
            Ok(Self::Normal(index))
        }
    }

    /// Create a hardened child index.
    pub fn hardened(index: u32) -> Result<Self> {
        if index >= Self::HARDENED_OFFSET {
            Err(Error::InvalidDerivationPath(format!("index {index}' out of range")))
        } else {
            Ok(Self::Hardened(index))
        }
    }

    /// Check if this is a hardened index.
    pub const fn is_hardened(&self) -> bool {
        matches!(self, Self::Hardened(_))
    }

    /// Get the raw index value (without hardened flag).
    pub const fn index(&self) -> u32 {
        match self {
            Self::Normal(i) | Self::Hardened(i) => *i,
        }
    }

    /// Convert to the raw u32 value fed into the derivation HMAC.
    pub const fn to_u32(&self) -> u32 {
        match self {
            Self::Normal(i) => *i,
            Self::Hardened(i) => *i | Self::HARDENED_OFFSET,
        }
    }
}

impl fmt::Display for ChildIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Normal(i) => write!(f, "{i}"),
            Self::Hardened(i) => write!(f, "{i}'"),
        }
    }
}

impl FromStr for ChildIndex {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        let invalid = || Error::InvalidDerivationPath(s.into());

        let (digits, hardened) = match s.strip_suffix(['\'', 'h', 'H']) {
            Some(digits) => (digits, true),
            None => (s, false),
        };
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        let index: u32 = digits.parse().map_err(|_| invalid())?;

        let child = if hardened {
            Self::hardened(index)
        } else {
            Self::normal(index)
        };
        child.map_err(|_| invalid())
    }
}

/// A BIP-32 derivation path such as `m/44'/501'/0'/0'`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Default)]
pub struct DerivationPath {
    indices: Vec<ChildIndex>,
}

impl DerivationPath {
    /// Create an empty derivation path (master key).
    pub fn master() -> Self {
        Self::default()
    }

    /// Build the account path for a chain: `m/44'/{coin_type}'/{account}'/0'`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDerivationPath`] if `account` is >= 2^31 and
    /// therefore cannot be hardened.
    pub fn for_account(chain: ChainKind, account: u32) -> Result<Self> {
        let path = Self {
            indices: vec![
                ChildIndex::Hardened(BIP44_PURPOSE),
                ChildIndex::Hardened(chain.coin_type()),
                ChildIndex::hardened(account)?,
                ChildIndex::Hardened(0),
            ],
        };
        tracing::trace!(%chain, account, %path, "built account path");
        Ok(path)
    }

    /// Parse a derivation path from a string.
    ///
    /// Supports formats like:
    /// - "m/44'/501'/0'/0'"
    /// - "m/44h/60h/0h/0h"
    /// - "44'/60'/0'/0"
    pub fn parse(path: &str) -> Result<Self> {
        let path = path.trim();

        if path.is_empty() || path == "m" || path == "M" {
            return Ok(Self::master());
        }

        let rest = path
            .strip_prefix("m/")
            .or_else(|| path.strip_prefix("M/"))
            .unwrap_or(path);

        let indices = rest
            .split('/')
            .map(|component| {
                component
                    .parse::<ChildIndex>()
                    .map_err(|_| Error::InvalidDerivationPath(path.into()))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { indices })
    }

    /// Get the child indices in this path.
    pub fn indices(&self) -> &[ChildIndex] {
        &self.indices
    }
}

impl fmt::Display for DerivationPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "m")?;
        for index in &self.indices {
            write!(f, "/{index}")?;
        }
        Ok(())
    }
}

impl FromStr for DerivationPath {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}
