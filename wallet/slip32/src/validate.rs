//! secp256k1 checks applied to imported key bytes.

use crate::{
    types::{KeyBytes, KEY_BYTES_SIZE},
    Error, KeyKind, Result,
};
use secp256k1::{PublicKey, SecretKey};

/// Is `scalar` within `[1, n-1]`?
pub fn is_valid_private_key(scalar: &[u8]) -> bool {
    SecretKey::from_slice(scalar).is_ok()
}

/// Is `point` a compressed SEC1 encoding of a curve point?
pub fn is_valid_public_key(point: &[u8]) -> bool {
    point.len() == KEY_BYTES_SIZE && PublicKey::from_slice(point).is_ok()
}

/// Check the key field of a payload against the kind its prefix declares.
///
/// The leading padding byte of a private key is not part of the scalar and
/// is not checked.
pub fn validate_key_bytes(kind: KeyKind, key_bytes: &KeyBytes) -> Result<()> {
    let valid = match kind {
        KeyKind::Private => is_valid_private_key(&key_bytes[1..]),
        KeyKind::Public => is_valid_public_key(key_bytes),
    };

    if valid {
        Ok(())
    } else {
        Err(Error::InvalidKeyMaterial(kind))
    }
}
