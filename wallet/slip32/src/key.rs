//! Keys paired with chain codes.

use crate::{
    types::{ChainCode, KeyBytes, KEY_BYTES_SIZE},
    Error, Result,
};
use core::fmt::{self, Debug, Display};
use secp256k1::{PublicKey, SecretKey};
use zeroize::Zeroize;

/// Kind of key carried by an extended key.
#[derive(Copy, Clone, Debug, Eq, Hash, PartialEq)]
pub enum KeyKind {
    Private,
    Public,
}

impl Display for KeyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyKind::Private => f.write_str("private"),
            KeyKind::Public => f.write_str("public"),
        }
    }
}

/// Private or public key in its 33-byte serialized form.
///
/// A private key is a `0x00` padding byte followed by the 32-byte scalar,
/// a public key is a compressed SEC1 point.
#[derive(Clone, Eq, PartialEq)]
pub enum Key {
    Private(KeyBytes),
    Public(KeyBytes),
}

impl Key {
    /// Wrap a padded private key without validating it.
    pub fn private(bytes: KeyBytes) -> Self {
        Key::Private(bytes)
    }

    /// Wrap a compressed public key without validating it.
    pub fn public(bytes: KeyBytes) -> Self {
        Key::Public(bytes)
    }

    /// Private key from a secp256k1 secret key, adding the leading `0` byte.
    pub fn from_secret_key(secret_key: &SecretKey) -> Self {
        let mut bytes = [0u8; KEY_BYTES_SIZE];
        bytes[1..].copy_from_slice(&secret_key.secret_bytes());
        Key::Private(bytes)
    }

    /// Public key from a secp256k1 public key in compressed form.
    pub fn from_public_key(public_key: &PublicKey) -> Self {
        Key::Public(public_key.serialize())
    }

    pub fn kind(&self) -> KeyKind {
        match self {
            Key::Private(_) => KeyKind::Private,
            Key::Public(_) => KeyKind::Public,
        }
    }

    pub fn is_private(&self) -> bool {
        matches!(self, Key::Private(_))
    }

    /// The 33 bytes written to the key field.
    pub fn as_bytes(&self) -> &KeyBytes {
        match self {
            Key::Private(bytes) | Key::Public(bytes) => bytes,
        }
    }

    /// Parse the scalar of a private key.
    pub fn to_secret_key(&self) -> Result<SecretKey> {
        match self {
            Key::Private(bytes) => SecretKey::from_slice(&bytes[1..]).map_err(|_| Error::InvalidKeyMaterial(KeyKind::Private)),
            Key::Public(_) => Err(Error::InvalidKeyMaterial(KeyKind::Private)),
        }
    }

    /// Parse a public key, deriving it when this is a private key.
    pub fn to_public_key(&self) -> Result<PublicKey> {
        match self {
            Key::Private(_) => Ok(PublicKey::from_secret_key_global(&self.to_secret_key()?)),
            Key::Public(bytes) => PublicKey::from_slice(bytes).map_err(|_| Error::InvalidKeyMaterial(KeyKind::Public)),
        }
    }
}

impl Debug for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Private(_) => f.write_str("Key::Private(..)"),
            Key::Public(bytes) => f.debug_tuple("Key::Public").field(bytes).finish(),
        }
    }
}

impl Drop for Key {
    fn drop(&mut self) {
        if let Key::Private(bytes) = self {
            bytes.zeroize();
        }
    }
}

/// Key paired with a chain code, as introduced by BIP-0032.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ExtendedKey {
    pub key: Key,
    pub chain_code: ChainCode,
}

impl ExtendedKey {
    /// Extend a private or public key with the given chain code.
    pub fn new(key: Key, chain_code: ChainCode) -> Self {
        ExtendedKey { key, chain_code }
    }

    pub fn kind(&self) -> KeyKind {
        self.key.kind()
    }

    /// Extended public key matching this one. Fails on an invalid scalar.
    pub fn to_public(&self) -> Result<ExtendedKey> {
        let public_key = self.key.to_public_key()?;
        Ok(ExtendedKey { key: Key::from_public_key(&public_key), chain_code: self.chain_code })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn one() -> SecretKey {
        let mut scalar = [0u8; 32];
        scalar[31] = 1;
        SecretKey::from_slice(&scalar).unwrap()
    }

    #[test]
    fn private_key_is_padded() {
        let key = Key::from_secret_key(&one());
        assert_eq!(key.kind(), KeyKind::Private);
        assert_eq!(key.as_bytes()[0], 0);
        assert_eq!(key.as_bytes()[32], 1);
        assert_eq!(key.to_secret_key().unwrap(), one());
    }

    #[test]
    fn public_key_is_compressed() {
        let public_key = PublicKey::from_secret_key_global(&one());
        let key = Key::from_public_key(&public_key);
        assert_eq!(key.kind(), KeyKind::Public);
        assert_eq!(key.as_bytes()[0], 0x02);
        assert_eq!(key.to_public_key().unwrap(), public_key);
        assert_eq!(key.to_secret_key(), Err(Error::InvalidKeyMaterial(KeyKind::Private)));
    }

    #[test]
    fn neutered() {
        let xprv = ExtendedKey::new(Key::from_secret_key(&one()), [7u8; 32]);
        let xpub = xprv.to_public().unwrap();
        assert_eq!(xpub.kind(), KeyKind::Public);
        assert_eq!(xpub.chain_code, [7u8; 32]);
        assert_eq!(xpub.key, Key::from_public_key(&PublicKey::from_secret_key_global(&one())));
    }

    #[test]
    fn debug_hides_private_scalar() {
        let key = Key::from_secret_key(&one());
        assert_eq!(format!("{key:?}"), "Key::Private(..)");
    }
}
