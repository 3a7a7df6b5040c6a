//! Hierarchical deterministic key derivation.
//!
//! Implements SLIP-0010 for Ed25519 and BIP-32 for secp256k1 behind a single
//! curve-parameterized interface:
//!
//! - master: `HMAC-SHA512(key = curve constant, data = seed)`
//! - hardened child: `HMAC-SHA512(key = chain code, data = 0x00 || key || ser32(i))`
//! - normal child (secp256k1 only): `data = serP(point(key)) || ser32(i)`
//!
//! The left half of the HMAC output is the child key (added to the parent
//! scalar modulo n on secp256k1), the right half is the child chain code.
//!
//! References:
//! - <https://github.com/bitcoin/bips/blob/master/bip-0032.mediawiki>
//! - <https://github.com/satoshilabs/slips/blob/master/slip-0010.md>

use core::fmt;

use hmac::{Hmac, Mac};
use k256::elliptic_curve::ff::PrimeField;
use k256::elliptic_curve::sec1::ToEncodedPoint;
use k256::{FieldBytes, Scalar, SecretKey};
use sha2::Sha512;
use zeroize::{Zeroize, Zeroizing};

use crate::{ChildIndex, CurveKind, DerivationPath, Error, Result};

type HmacSha512 = Hmac<Sha512>;

/// A derivation node: 32-byte key plus 32-byte chain code (zeroized on drop).
#[derive(Clone)]
pub struct KeyMaterial {
    key: Zeroizing<[u8; 32]>,
    chain_code: Zeroizing<[u8; 32]>,
}

impl KeyMaterial {
    /// Split a 64-byte HMAC output into key (IL) and chain code (IR).
    fn from_hmac_output(output: &[u8]) -> Self {
        let mut key = Zeroizing::new([0u8; 32]);
        let mut chain_code = Zeroizing::new([0u8; 32]);

        key.copy_from_slice(&output[..32]);
        chain_code.copy_from_slice(&output[32..]);

        Self { key, chain_code }
    }

    /// The 32-byte derived key (Ed25519 seed or secp256k1 scalar).
    #[inline]
    #[must_use]
    pub fn key(&self) -> &[u8; 32] {
        &self.key
    }

    /// The 32-byte chain code.
    #[inline]
    #[must_use]
    pub fn chain_code(&self) -> &[u8; 32] {
        &self.chain_code
    }
}

impl fmt::Debug for KeyMaterial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyMaterial")
            .field("key", &"[REDACTED]")
            .field("chain_code", &"[REDACTED]")
            .finish()
    }
}

/// Run HMAC-SHA512 over `parts` and split the result into a node.
fn hmac_sha512(key: &[u8], parts: &[&[u8]]) -> Result<KeyMaterial> {
    let mut mac = HmacSha512::new_from_slice(key)
        .map_err(|_| Error::InvalidKeyMaterial("HMAC key rejected"))?;
    for part in parts {
        mac.update(part);
    }

    let mut output = mac.finalize().into_bytes();
    let node = KeyMaterial::from_hmac_output(&output);
    output.as_mut_slice().zeroize();
    Ok(node)
}

/// Parse 32 bytes as a secp256k1 scalar, rejecting values >= n.
fn parse_scalar(bytes: &[u8; 32]) -> Option<Scalar> {
    Option::from(Scalar::from_repr(*FieldBytes::from_slice(bytes)))
}

/// Derive the master node from a seed.
///
/// # Errors
///
/// Returns [`Error::InvalidKeyMaterial`] if, on secp256k1, the master key is
/// zero or not below the curve order.
pub fn derive_master(seed: &[u8], curve: CurveKind) -> Result<KeyMaterial> {
    let master = hmac_sha512(curve.master_hmac_key(), &[seed])?;

    match curve {
        CurveKind::Ed25519 => {}
        CurveKind::Secp256k1 => {
            SecretKey::from_slice(master.key())
                .map_err(|_| Error::InvalidKeyMaterial("master key outside secp256k1 order"))?;
        }
    }

    Ok(master)
}

/// Derive one child node from its parent.
///
/// # Errors
///
/// Returns [`Error::InvalidKeyMaterial`] on secp256k1 when IL is not below
/// the curve order or the resulting child key is zero.
///
/// # Panics
///
/// Panics when asked for a non-hardened child on Ed25519. SLIP-0010 defines
/// no such derivation and account paths are always fully hardened.
pub fn derive_child(
    parent: &KeyMaterial,
    index: ChildIndex,
    curve: CurveKind,
) -> Result<KeyMaterial> {
    assert!(
        index.is_hardened() || curve.supports_normal_derivation(),
        "unsupported derivation: {curve} only allows hardened children, got {index}"
    );

    let index_bytes = index.to_u32().to_be_bytes();
    let chain_code = parent.chain_code();

    match curve {
        CurveKind::Ed25519 => hmac_sha512(chain_code, &[&[0x00], parent.key(), &index_bytes]),
        CurveKind::Secp256k1 => {
            let parent_key = SecretKey::from_slice(parent.key())
                .map_err(|_| Error::InvalidKeyMaterial("parent key outside secp256k1 order"))?;

            let mut node = if index.is_hardened() {
                hmac_sha512(chain_code, &[&[0x00], parent.key(), &index_bytes])?
            } else {
                let public = parent_key.public_key().to_encoded_point(true);
                hmac_sha512(chain_code, &[public.as_bytes(), &index_bytes])?
            };

            // child = parse256(IL) + k_par (mod n)
            let il = parse_scalar(node.key())
                .map(Zeroizing::new)
                .ok_or(Error::InvalidKeyMaterial("IL outside secp256k1 order"))?;
            let parent_scalar = Zeroizing::new(*parent_key.to_nonzero_scalar());
            let child = Zeroizing::new(*il + *parent_scalar);
            if bool::from(child.is_zero()) {
                return Err(Error::InvalidKeyMaterial("derived secp256k1 key is zero"));
            }

            let mut child_bytes = child.to_bytes();
            node.key.copy_from_slice(&child_bytes);
            child_bytes.as_mut_slice().zeroize();
            Ok(node)
        }
    }
}

/// Derive the node at `path` from a seed.
///
/// Identical `(seed, path, curve)` inputs always produce identical output.
///
/// # Errors
///
/// Propagates [`Error::InvalidKeyMaterial`] from any step.
///
/// # Panics
///
/// Panics if `path` contains a non-hardened index and `curve` is Ed25519.
pub fn derive(seed: &[u8], path: &DerivationPath, curve: CurveKind) -> Result<KeyMaterial> {
    let mut node = derive_master(seed, curve)?;
    for &index in path.indices() {
        node = derive_child(&node, index, curve)?;
    }
    Ok(node)
}
