//! Sizes and offsets of the SLIP-0032 payload.

/// Depth in the key derivation hierarchy (one byte on the wire).
pub type Depth = u8;

/// Size of the depth field in bytes.
pub const DEPTH_SIZE: usize = 1;

/// Size of a serialized path element (big-endian `u32`).
pub const CHILD_NUMBER_SIZE: usize = 4;

/// Size of a chain code in bytes.
pub const CHAIN_CODE_SIZE: usize = 32;

/// Size of a secp256k1 scalar in bytes.
pub const KEY_SIZE: usize = 32;

/// Size of the key field: a padded scalar or a compressed point.
pub const KEY_BYTES_SIZE: usize = KEY_SIZE + 1;

/// Chain code: extension for both private and public keys which provides an
/// additional 256 bits of entropy.
pub type ChainCode = [u8; CHAIN_CODE_SIZE];

/// Raw key field as it appears in the payload.
pub type KeyBytes = [u8; KEY_BYTES_SIZE];

/// Deepest key path the depth byte can describe.
pub const MAX_DEPTH: usize = Depth::MAX as usize;

/// Payload length for the deepest representable key path (1086 bytes).
///
/// `1 + (256^1 - 1) * 4 + 32 + 33`
pub const MAX_PAYLOAD_LENGTH: usize = payload_length(MAX_DEPTH);

/// Payload length implied by a depth byte.
pub const fn payload_length(depth: usize) -> usize {
    DEPTH_SIZE + depth * CHILD_NUMBER_SIZE + CHAIN_CODE_SIZE + KEY_BYTES_SIZE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn max_payload_length() {
        assert_eq!(MAX_PAYLOAD_LENGTH, 1086);
        assert_eq!(MAX_PAYLOAD_LENGTH, DEPTH_SIZE + ((1 << (8 * DEPTH_SIZE)) - 1) * CHILD_NUMBER_SIZE + CHAIN_CODE_SIZE + KEY_BYTES_SIZE);
    }

    #[test]
    fn payload_length_grows_by_path_element() {
        assert_eq!(payload_length(0), 66);
        assert_eq!(payload_length(1), 70);
        assert_eq!(payload_length(3), 78);
    }
}
