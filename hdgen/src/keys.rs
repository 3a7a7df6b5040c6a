//! Turning derived key material into concrete keypairs and their encodings.
//!
//! | Curve     | Public encoding                       | Secret encoding                 |
//! |-----------|---------------------------------------|---------------------------------|
//! | Ed25519   | base58(32-byte public key)            | base58(seed 32B ‖ public 32B)   |
//! | secp256k1 | `0x` + hex(keccak256(X ‖ Y)[12..])    | `0x` + hex(32-byte scalar)      |

use core::fmt;

use ed25519_dalek::SigningKey;
use k256::SecretKey;
use k256::elliptic_curve::sec1::ToEncodedPoint;
use sha3::{Digest, Keccak256};
use zeroize::Zeroizing;

use crate::{CurveKind, Error, KeyMaterial, Result};

/// Compute Keccak-256 hash (used in Ethereum)
#[inline]
fn keccak256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Keccak256::new();
    hasher.update(data);
    hasher.finalize().into()
}

/// Ethereum address of an uncompressed SEC1 public key (`0x04 || X || Y`).
///
/// Returns the lowercase, `0x`-prefixed hex of the last 20 bytes of
/// `keccak256(X || Y)`.
#[must_use]
pub fn eth_address(uncompressed: &[u8; 65]) -> String {
    let hash = keccak256(&uncompressed[1..]);
    format!("0x{}", hex::encode(&hash[12..]))
}

/// A concrete keypair on one of the supported curves.
#[derive(Clone)]
pub enum Keypair {
    /// Ed25519 keypair (Solana).
    Ed25519(SigningKey),
    /// secp256k1 keypair (Ethereum).
    Secp256k1(SecretKey),
}

impl Keypair {
    /// Build a keypair from derived key material.
    ///
    /// Ed25519 treats the 32 bytes as a key seed; secp256k1 treats them as
    /// the private scalar.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidKeyMaterial`] if the bytes are not a valid
    /// secp256k1 scalar (zero or not below the curve order).
    pub fn from_key_material(material: &KeyMaterial, curve: CurveKind) -> Result<Self> {
        Self::from_bytes(material.key(), curve)
    }

    /// Build a keypair from a raw 32-byte secret.
    pub fn from_bytes(bytes: &[u8; 32], curve: CurveKind) -> Result<Self> {
        match curve {
            CurveKind::Ed25519 => Ok(Self::Ed25519(SigningKey::from_bytes(bytes))),
            CurveKind::Secp256k1 => SecretKey::from_slice(bytes)
                .map(Self::Secp256k1)
                .map_err(|_| Error::InvalidKeyMaterial("scalar outside secp256k1 order")),
        }
    }

    /// Curve this keypair lives on.
    #[must_use]
    pub const fn curve(&self) -> CurveKind {
        match self {
            Self::Ed25519(_) => CurveKind::Ed25519,
            Self::Secp256k1(_) => CurveKind::Secp256k1,
        }
    }

    /// Raw public key bytes: 32 bytes for Ed25519, 65-byte uncompressed SEC1
    /// for secp256k1.
    #[must_use]
    pub fn public_key_bytes(&self) -> Vec<u8> {
        match self {
            Self::Ed25519(signing_key) => signing_key.verifying_key().as_bytes().to_vec(),
            Self::Secp256k1(secret_key) => secret_key
                .public_key()
                .to_encoded_point(false)
                .as_bytes()
                .to_vec(),
        }
    }

    /// Public key in hex format without 0x prefix.
    #[must_use]
    pub fn public_key_hex(&self) -> String {
        hex::encode(self.public_key_bytes())
    }

    /// Chain-native public identifier: base58 public key or `0x` address.
    #[must_use]
    pub fn public_key_encoded(&self) -> String {
        match self {
            Self::Ed25519(signing_key) => {
                let public = signing_key.verifying_key();
                bs58::encode(public.as_bytes()).into_string()
            }
            Self::Secp256k1(secret_key) => {
                let point = secret_key.public_key().to_encoded_point(false);
                let mut uncompressed = [0u8; 65];
                uncompressed.copy_from_slice(point.as_bytes());
                eth_address(&uncompressed)
            }
        }
    }

    /// Chain-native secret encoding (zeroized on drop).
    ///
    /// Ed25519 yields the base58 64-byte keypair used by Solana wallets
    /// (Phantom, Backpack, Solflare); secp256k1 yields the `0x`-prefixed hex
    /// scalar.
    #[must_use]
    pub fn secret_key_encoded(&self) -> Zeroizing<String> {
        match self {
            Self::Ed25519(signing_key) => {
                let keypair_bytes = Zeroizing::new(signing_key.to_keypair_bytes());
                let encoded = bs58::encode(keypair_bytes.as_slice()).into_string();
                Zeroizing::new(encoded)
            }
            Self::Secp256k1(secret_key) => {
                let bytes: Zeroizing<[u8; 32]> = Zeroizing::new(secret_key.to_bytes().into());
                Zeroizing::new(format!("0x{}", hex::encode(bytes.as_slice())))
            }
        }
    }

    /// Raw 32-byte secret (Ed25519 seed or secp256k1 scalar) in hex without
    /// prefix (zeroized on drop).
    #[must_use]
    pub fn secret_hex(&self) -> Zeroizing<String> {
        match self {
            Self::Ed25519(signing_key) => Zeroizing::new(hex::encode(signing_key.as_bytes())),
            Self::Secp256k1(secret_key) => {
                let bytes: Zeroizing<[u8; 32]> = Zeroizing::new(secret_key.to_bytes().into());
                Zeroizing::new(hex::encode(bytes.as_slice()))
            }
        }
    }
}

impl fmt::Debug for Keypair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Keypair")
            .field("curve", &self.curve())
            .field("public_key", &self.public_key_encoded())
            .field("secret_key", &"[REDACTED]")
            .finish()
    }
}

/// Materialize a keypair from derived key material.
///
/// Equivalent to [`Keypair::from_key_material`].
pub fn materialize(material: &KeyMaterial, curve: CurveKind) -> Result<Keypair> {
    Keypair::from_key_material(material, curve)
}

#[cfg(test)]
mod tests {
    use super::*;
    use hex_literal::hex;

    #[test]
    fn test_ed25519_rfc8032_public_key() {
        let secret = hex!("9d61b19deffd5a60ba844af492ec2cc44449c5697b326919703bac031cae7f60");
        let keypair = Keypair::from_bytes(&secret, CurveKind::Ed25519).unwrap();
        let public = hex!("d75a980182b10ab7d54bfed3c964073a0ee172f3daa62325af021a68f707511a");

        assert_eq!(keypair.public_key_bytes(), public.to_vec());
        let public_b58 = bs58::encode(public).into_string();
        assert_eq!(keypair.public_key_encoded(), public_b58);
    }

    #[test]
    fn test_ed25519_secret_is_seed_then_public() {
        let secret = hex!("9d61b19deffd5a60ba844af492ec2cc44449c5697b326919703bac031cae7f60");
        let keypair = Keypair::from_bytes(&secret, CurveKind::Ed25519).unwrap();

        let decoded = bs58::decode(keypair.secret_key_encoded().as_str())
            .into_vec()
            .unwrap();
        assert_eq!(decoded.len(), 64);
        assert_eq!(&decoded[..32], &secret);
        assert_eq!(decoded[32..].to_vec(), keypair.public_key_bytes());
        assert_eq!(keypair.secret_hex().as_str(), hex::encode(secret));
    }

    #[test]
    fn test_secp256k1_known_address() {
        let mut secret = [0u8; 32];
        secret[31] = 1;
        let keypair = Keypair::from_bytes(&secret, CurveKind::Secp256k1).unwrap();

        assert_eq!(
            keypair.public_key_encoded(),
            "0x7e5f4552091a69125d5dfcb7b8c2659029395bdf"
        );
        assert_eq!(
            keypair.secret_key_encoded().as_str(),
            "0x0000000000000000000000000000000000000000000000000000000000000001"
        );
        assert_eq!(keypair.public_key_bytes().len(), 65);
        assert_eq!(keypair.public_key_bytes()[0], 0x04);
    }

    #[test]
    fn test_secp256k1_address_matches_reference() {
        let secret = hex!("4c0883a69102937d6231471b5dbb6204fe5129617082792ae468d01a3f362318");
        let keypair = Keypair::from_bytes(&secret, CurveKind::Secp256k1).unwrap();

        let public = keypair.public_key_bytes();
        let reference = alloy_primitives::Address::from_raw_public_key(&public[1..]);

        let address = keypair.public_key_encoded();
        assert_eq!(address.len(), 42);
        assert_eq!(address, format!("0x{}", hex::encode(reference.as_slice())));
        assert_eq!(address, address.to_lowercase());
    }

    #[test]
    fn test_secp256k1_rejects_invalid_scalar() {
        assert!(matches!(
            Keypair::from_bytes(&[0u8; 32], CurveKind::Secp256k1),
            Err(Error::InvalidKeyMaterial(_))
        ));
        assert!(matches!(
            Keypair::from_bytes(&[0xff; 32], CurveKind::Secp256k1),
            Err(Error::InvalidKeyMaterial(_))
        ));
    }

    #[test]
    fn test_curve_tag() {
        let keypair = Keypair::from_bytes(&[1u8; 32], CurveKind::Ed25519).unwrap();
        assert_eq!(keypair.curve(), CurveKind::Ed25519);
        let secret = keypair.secret_hex();
        assert!(!format!("{keypair:?}").contains(secret.as_str()));
    }
}
