//!
//! Byte layout of a SLIP-0032 payload.
//!
//! | offset        | length    | field                                  |
//! |---------------|-----------|----------------------------------------|
//! | 0             | 1         | depth                                  |
//! | 1             | 4 * depth | path elements, big-endian `u32`        |
//! | 1 + 4 * depth | 32        | chain code                             |
//! | 33 + 4 * depth| 33        | key (`0x00` + scalar, or SEC1 point)   |
//!

use crate::{
    types::{payload_length, ChainCode, KeyBytes, CHAIN_CODE_SIZE, CHILD_NUMBER_SIZE, DEPTH_SIZE, KEY_BYTES_SIZE, MAX_DEPTH},
    ChildNumber, Depth, Error, ExtendedKey, KeyPath, Result,
};
use zeroize::Zeroize;

/// Fields read back from a payload, before the key bytes are validated.
pub struct Payload {
    pub depth: Depth,
    pub key_path: KeyPath,
    pub chain_code: ChainCode,
    pub key_bytes: KeyBytes,
}

impl Drop for Payload {
    fn drop(&mut self) {
        self.key_bytes.zeroize();
    }
}

/// Serialize a key path and extended key into a payload.
///
/// # Panics
///
/// Panics if `key_path` is deeper than [`MAX_DEPTH`]; callers check
/// [`KeyPath::depth`] first.
pub fn pack(key_path: &KeyPath, extended_key: &ExtendedKey) -> Vec<u8> {
    assert!(key_path.len() <= MAX_DEPTH, "key path depth {} exceeds {MAX_DEPTH}", key_path.len());

    let depth = key_path.len();
    let mut bytes = Vec::with_capacity(payload_length(depth));
    bytes.push(depth as Depth);
    for child_number in key_path.iter() {
        bytes.extend_from_slice(&child_number.to_bytes());
    }
    bytes.extend_from_slice(&extended_key.chain_code);
    bytes.extend_from_slice(extended_key.key.as_bytes());

    debug_assert_eq!(bytes.len(), payload_length(depth));
    bytes
}

/// Parse a payload at the fixed offsets implied by its depth byte.
pub fn unpack(bytes: &[u8]) -> Result<Payload> {
    let depth = *bytes.first().ok_or(Error::LengthMismatch { expected: payload_length(0), actual: 0 })?;

    let expected = payload_length(depth as usize);
    if bytes.len() != expected {
        return Err(Error::LengthMismatch { expected, actual: bytes.len() });
    }

    let (path, rest) = bytes[DEPTH_SIZE..].split_at(depth as usize * CHILD_NUMBER_SIZE);
    let (chain, key) = rest.split_at(CHAIN_CODE_SIZE);

    let key_path = path.chunks_exact(CHILD_NUMBER_SIZE).map(|b| ChildNumber::from_bytes([b[0], b[1], b[2], b[3]])).collect();

    let mut chain_code = ChainCode::default();
    chain_code.copy_from_slice(chain);
    let mut key_bytes = [0u8; KEY_BYTES_SIZE];
    key_bytes.copy_from_slice(key);

    Ok(Payload { depth, key_path, chain_code, key_bytes })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{types::MAX_PAYLOAD_LENGTH, Key};

    fn xprv() -> ExtendedKey {
        let mut key = [0u8; 33];
        key[32] = 1;
        ExtendedKey::new(Key::private(key), [0xcc; 32])
    }

    #[test]
    fn pack_offsets() {
        let key_path = "m/44'/1".parse::<KeyPath>().unwrap();
        let bytes = pack(&key_path, &xprv());

        assert_eq!(bytes.len(), 1 + 8 + 32 + 33);
        assert_eq!(bytes[0], 2);
        assert_eq!(bytes[1..5], [0x80, 0x00, 0x00, 0x2c]);
        assert_eq!(bytes[5..9], [0x00, 0x00, 0x00, 0x01]);
        assert_eq!(bytes[9..41], [0xcc; 32]);
        assert_eq!(bytes[41], 0);
        assert_eq!(bytes[73], 1);
    }

    #[test]
    fn unpack_reverses_pack() {
        let key_path = "m/0/2147483647'/1/2147483646'/2".parse::<KeyPath>().unwrap();
        let payload = unpack(&pack(&key_path, &xprv())).unwrap();

        assert_eq!(payload.depth, 5);
        assert_eq!(payload.key_path, key_path);
        assert_eq!(payload.chain_code, [0xcc; 32]);
        assert_eq!(&payload.key_bytes, xprv().key.as_bytes());
    }

    #[test]
    fn root_path() {
        let bytes = pack(&KeyPath::default(), &xprv());
        assert_eq!(bytes.len(), 66);
        let payload = unpack(&bytes).unwrap();
        assert_eq!(payload.depth, 0);
        assert!(payload.key_path.is_empty());
    }

    #[test]
    fn length_must_match_depth() {
        for depth in 0..=MAX_DEPTH {
            let expected = payload_length(depth);
            let mut bytes = vec![0u8; expected + 1];
            bytes[0] = depth as u8;

            assert!(unpack(&bytes[..expected]).is_ok(), "depth {depth}");
            assert_eq!(unpack(&bytes).err(), Some(Error::LengthMismatch { expected, actual: expected + 1 }));
            assert_eq!(unpack(&bytes[..expected - 1]).err(), Some(Error::LengthMismatch { expected, actual: expected - 1 }));
        }
    }

    #[test]
    fn truncated_path_is_not_accepted() {
        // depth claims two elements but only one is present
        let key_path = "m/1".parse::<KeyPath>().unwrap();
        let mut bytes = pack(&key_path, &xprv());
        bytes[0] = 2;
        assert_eq!(unpack(&bytes).err(), Some(Error::LengthMismatch { expected: 74, actual: 70 }));
    }

    #[test]
    fn empty_buffer() {
        assert_eq!(unpack(&[]).err(), Some(Error::LengthMismatch { expected: 66, actual: 0 }));
    }

    #[test]
    fn deepest_path() {
        let key_path: KeyPath = (0..MAX_DEPTH as u32).map(ChildNumber).collect();
        let bytes = pack(&key_path, &xprv());
        assert_eq!(bytes.len(), MAX_PAYLOAD_LENGTH);
        assert_eq!(unpack(&bytes).unwrap().key_path, key_path);
    }

    #[test]
    #[should_panic]
    fn pack_rejects_deep_path() {
        let key_path: KeyPath = (0..=MAX_DEPTH as u32).map(ChildNumber).collect();
        pack(&key_path, &xprv());
    }
}
