//!
//! # SLIP-0032 extended key serialization
//!
//! Exports BIP-0032 extended keys, together with the path they were derived
//! at, as bech32 strings prefixed `xprv` or `xpub`, and imports them back.
//!
//! ```
//! use kaspa_slip32::{export_key, import_key, ExtendedKey, Key, KeyPath};
//!
//! let mut key = [0u8; 33];
//! key[32] = 1;
//! let xprv = ExtendedKey::new(Key::private(key), [0u8; 32]);
//! let key_path = "m/44'/0'/0'".parse::<KeyPath>().unwrap();
//!
//! let slip32 = export_key(&key_path, &xprv).unwrap();
//! assert!(slip32.starts_with("xprv1"));
//! assert_eq!(import_key(&slip32).unwrap(), (key_path, xprv));
//! ```
//!

mod child_number;
pub mod error;
mod exchange;
mod key;
mod key_path;
pub mod layout;
mod prefix;
pub mod result;
pub mod text;
pub mod types;
pub mod validate;

pub use child_number::ChildNumber;
pub use error::Error;
pub use exchange::{export_key, import_key, Slip32Key};
pub use key::{ExtendedKey, Key, KeyKind};
pub use key_path::KeyPath;
pub use prefix::Prefix;
pub use result::Result;
pub use types::*;
