//!
//! Export and import of extended keys in SLIP-0032 form.
//!

use crate::{
    layout,
    text::{self, PrefixedBuffer},
    validate::validate_key_bytes,
    ExtendedKey, Key, KeyPath, Prefix, Result,
};
use core::{
    fmt::{self, Display},
    str::FromStr,
};
use log::{debug, trace};
#[cfg(feature = "serde")]
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

/// Serialize a key path and extended key to a `xprv1…` / `xpub1…` string.
///
/// Fails with [`Error::DepthOutOfRange`](crate::Error::DepthOutOfRange) when the
/// path has more than 255 elements.
pub fn export_key(key_path: &KeyPath, extended_key: &ExtendedKey) -> Result<String> {
    let depth = key_path.depth()?;
    let prefix = Prefix::from(extended_key.kind());

    let buffer = PrefixedBuffer::new(prefix.as_str(), layout::pack(key_path, extended_key));
    trace!("slip32 export: {prefix} at depth {depth}");

    text::encode(&buffer)
}

/// Parse a SLIP-0032 string, validating the key against its prefix.
pub fn import_key(slip32: &str) -> Result<(KeyPath, ExtendedKey)> {
    let imported = decode_key(slip32);
    if let Err(err) = &imported {
        debug!("slip32 import rejected: {err}");
    }
    imported
}

fn decode_key(slip32: &str) -> Result<(KeyPath, ExtendedKey)> {
    let buffer = text::decode(slip32)?;
    let prefix = Prefix::try_from(buffer.hrp.as_str())?;

    let payload = layout::unpack(&buffer.bytes)?;
    validate_key_bytes(prefix.kind(), &payload.key_bytes)?;

    let key = match prefix {
        Prefix::XPRV => Key::private(payload.key_bytes),
        Prefix::XPUB => Key::public(payload.key_bytes),
    };
    trace!("slip32 import: {prefix} at depth {}", payload.depth);

    Ok((payload.key_path.clone(), ExtendedKey::new(key, payload.chain_code)))
}

/// Extended key together with the path it was derived at.
///
/// The path is known to fit the depth byte, so [`Display`] never fails.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Slip32Key {
    key_path: KeyPath,
    extended_key: ExtendedKey,
}

impl Slip32Key {
    pub fn new(key_path: KeyPath, extended_key: ExtendedKey) -> Result<Self> {
        key_path.depth()?;
        Ok(Slip32Key { key_path, extended_key })
    }

    pub fn key_path(&self) -> &KeyPath {
        &self.key_path
    }

    pub fn extended_key(&self) -> &ExtendedKey {
        &self.extended_key
    }

    pub fn into_parts(self) -> (KeyPath, ExtendedKey) {
        (self.key_path, self.extended_key)
    }

    /// Same path with the private key replaced by its public key.
    pub fn to_public(&self) -> Result<Self> {
        Ok(Slip32Key { key_path: self.key_path.clone(), extended_key: self.extended_key.to_public()? })
    }
}

impl Display for Slip32Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        export_key(&self.key_path, &self.extended_key).map_err(|_| fmt::Error).and_then(|slip32| f.write_str(&slip32))
    }
}

impl FromStr for Slip32Key {
    type Err = crate::Error;

    fn from_str(slip32: &str) -> Result<Self> {
        let (key_path, extended_key) = import_key(slip32)?;
        Ok(Slip32Key { key_path, extended_key })
    }
}

#[cfg(feature = "serde")]
impl Serialize for Slip32Key {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let slip32 = export_key(&self.key_path, &self.extended_key).map_err(serde::ser::Error::custom)?;
        serializer.serialize_str(&slip32)
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for Slip32Key {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Slip32Key, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct Slip32KeyVisitor;
        impl de::Visitor<'_> for Slip32KeyVisitor {
            type Value = Slip32Key;
            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a slip32 serialized key (xprv1... or xpub1...)")
            }

            fn visit_str<E>(self, value: &str) -> std::result::Result<Self::Value, E>
            where
                E: de::Error,
            {
                Slip32Key::from_str(value).map_err(|err| de::Error::custom(err.to_string()))
            }
        }

        deserializer.deserialize_str(Slip32KeyVisitor)
    }
}
