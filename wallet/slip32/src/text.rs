//!
//! bech32 text form of a prefixed payload.
//!
//! Plain bech32 caps strings at 90 characters, far below what a deep key
//! path needs. The checksum here is the bech32 polynomial with the code
//! length raised to [`MAX_ENCODED_LENGTH`], the string length of the
//! largest payload ([`MAX_PAYLOAD_LENGTH`] bytes) under a four letter prefix.
//!

use crate::{types::MAX_PAYLOAD_LENGTH, Error, Result};
use bech32::{primitives::decode::CheckedHrpstring, Checksum, Hrp};
use zeroize::Zeroize;

/// Length of the `xprv` / `xpub` human-readable part.
const PREFIX_SIZE: usize = 4;

/// The `1` between the human-readable part and the data.
const SEPARATOR_SIZE: usize = 1;

/// bech32 checksum length in characters.
const CHECKSUM_SIZE: usize = 6;

/// Longest string accepted or produced (1749 characters).
pub const MAX_ENCODED_LENGTH: usize = encoded_length(PREFIX_SIZE, MAX_PAYLOAD_LENGTH);

/// Characters needed to encode `payload_len` bytes under a prefix of `prefix_len` characters.
pub const fn encoded_length(prefix_len: usize, payload_len: usize) -> usize {
    prefix_len + SEPARATOR_SIZE + (payload_len * 8).div_ceil(5) + CHECKSUM_SIZE
}

/// bech32 (BIP-173) checksum accepting codes up to [`MAX_ENCODED_LENGTH`].
#[derive(Copy, Clone, Debug, Eq, Hash, PartialEq)]
pub enum Slip32Checksum {}

impl Checksum for Slip32Checksum {
    type MidstateRepr = u32;
    const CODE_LENGTH: usize = MAX_ENCODED_LENGTH;
    const CHECKSUM_LENGTH: usize = CHECKSUM_SIZE;
    const GENERATOR_SH: [u32; 5] = [0x3b6a57b2, 0x26508e6d, 0x1ea119fa, 0x3d4233dd, 0x2a1462b3];
    const TARGET_RESIDUE: u32 = 1;
}

/// Buffer with a human-readable part (hrp) as prefix.
#[derive(Clone, Eq, PartialEq)]
pub struct PrefixedBuffer {
    pub hrp: String,
    pub bytes: Vec<u8>,
}

impl PrefixedBuffer {
    pub fn new(hrp: impl Into<String>, bytes: Vec<u8>) -> Self {
        PrefixedBuffer { hrp: hrp.into(), bytes }
    }
}

impl Drop for PrefixedBuffer {
    fn drop(&mut self) {
        self.bytes.zeroize();
    }
}

/// Decode a bech32 string, rejecting anything longer than [`MAX_ENCODED_LENGTH`].
///
/// Any incomplete trailing group of the data part must be 4 bits or less and
/// all zeroes, so each payload has a single text form. The returned hrp is
/// lowercase.
pub fn decode(text: &str) -> Result<PrefixedBuffer> {
    if text.len() > MAX_ENCODED_LENGTH {
        return Err(Error::TextDecode(format!("exceeds length limit ({} > {MAX_ENCODED_LENGTH})", text.len())));
    }

    let checked = CheckedHrpstring::new::<Slip32Checksum>(text).map_err(|err| Error::TextDecode(err.to_string()))?;
    checked.validate_segwit_padding().map_err(|err| Error::TextDecode(err.to_string()))?;

    Ok(PrefixedBuffer { hrp: checked.hrp().to_string().to_ascii_lowercase(), bytes: checked.byte_iter().collect() })
}

/// Encode a prefixed buffer as a lowercase bech32 string.
pub fn encode(buffer: &PrefixedBuffer) -> Result<String> {
    let length = encoded_length(buffer.hrp.len(), buffer.bytes.len());
    if length > MAX_ENCODED_LENGTH {
        return Err(Error::TextEncode(format!("exceeds length limit ({length} > {MAX_ENCODED_LENGTH})")));
    }

    let hrp = Hrp::parse(&buffer.hrp).map_err(|err| Error::TextEncode(err.to_string()))?;
    bech32::encode_lower::<Slip32Checksum>(hrp, &buffer.bytes).map_err(|err| Error::TextEncode(err.to_string()))
}
