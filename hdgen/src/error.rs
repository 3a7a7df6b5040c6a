//! Error types for mnemonic handling, key derivation and key encoding.

use core::fmt;

/// Errors that can occur while generating keys.
#[derive(Debug)]
#[non_exhaustive]
pub enum Error {
    /// Invalid mnemonic phrase (unknown word, bad checksum, bad length).
    InvalidMnemonic(bip39::Error),
    /// Entropy size is not one of 128, 160, 192, 224 or 256 bits.
    InvalidEntropyBits(usize),
    /// Invalid word count for mnemonic.
    InvalidWordCount(usize),
    /// The operating system RNG could not produce entropy.
    EntropySourceFailure,
    /// Derived bytes are not a valid key on the target curve.
    InvalidKeyMaterial(&'static str),
    /// Derivation path could not be parsed.
    InvalidDerivationPath(String),
    /// Mnemonic prefix is too short for unambiguous expansion.
    PrefixTooShort {
        /// The prefix that was too short.
        prefix: String,
        /// Minimum required prefix length.
        min_len: usize,
    },
    /// Mnemonic prefix does not match any word in the wordlist.
    UnknownPrefix(String),
    /// Chain identifier is not one of the supported chains.
    UnknownChain(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidMnemonic(e) => write!(f, "invalid mnemonic: {e}"),
            Self::InvalidEntropyBits(n) => write!(f, "unsupported entropy size {n} bits"),
            Self::InvalidWordCount(n) => {
                write!(f, "invalid word count {n}, must be 12, 15, 18, 21, or 24")
            }
            Self::EntropySourceFailure => write!(f, "system entropy source failed"),
            Self::InvalidKeyMaterial(reason) => write!(f, "invalid key material: {reason}"),
            Self::InvalidDerivationPath(path) => write!(f, "invalid derivation path: {path}"),
            Self::PrefixTooShort { prefix, min_len } => {
                write!(f, "prefix \"{prefix}\" shorter than {min_len} characters")
            }
            Self::UnknownPrefix(prefix) => {
                write!(f, "prefix \"{prefix}\" does not match any BIP-39 word")
            }
            Self::UnknownChain(name) => {
                write!(f, "unknown chain \"{name}\", expected one of: sol, eth")
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidMnemonic(e) => Some(e),
            _ => None,
        }
    }
}

impl From<bip39::Error> for Error {
    fn from(err: bip39::Error) -> Self {
        Self::InvalidMnemonic(err)
    }
}

/// A convenient Result type alias for hdgen operations.
pub type Result<T> = core::result::Result<T, Error>;
