//!
//! Error types emitted while exporting and importing SLIP-0032 keys.
//!

use crate::key::KeyKind;
use thiserror::Error;

/// [`Error`](enum@Error) variants emitted by this crate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("malformed slip32 serialized key: invalid data length (expected: {expected}, was: {actual})")]
    LengthMismatch { expected: usize, actual: usize },

    #[error("malformed slip32 serialized key: invalid hrp `{0}` (must be one of: xprv|xpub)")]
    UnknownPrefix(String),

    #[error("import slip32 error: invalid {0} key")]
    InvalidKeyMaterial(KeyKind),

    #[error("bech32 decode -> {0}")]
    TextDecode(String),

    #[error("bech32 encode -> {0}")]
    TextEncode(String),

    #[error("key path depth {0} exceeds the maximum of 255")]
    DepthOutOfRange(usize),

    #[error("invalid child number `{0}`")]
    InvalidChildNumber(String),

    #[error("invalid key path: {0}")]
    InvalidKeyPath(String),
}

