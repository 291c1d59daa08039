//! Key path elements.

use crate::{types::CHILD_NUMBER_SIZE, Error, Result};
use core::{
    fmt::{self, Display},
    str::FromStr,
};

/// Index of a particular child key for a given (extended) private key.
///
/// The most significant bit flags hardened derivation. On the wire the
/// whole value is written as a big-endian `u32`.
#[derive(Copy, Clone, Debug, Default, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub struct ChildNumber(pub u32);

impl ChildNumber {
    /// Hardened child keys use indices 2^31 through 2^32-1.
    pub const HARDENED_FLAG: u32 = 1 << 31;

    /// Create a new [`ChildNumber`] from an index below 2^31.
    pub fn new(index: u32, hardened: bool) -> Result<Self> {
        if index & Self::HARDENED_FLAG != 0 {
            return Err(Error::InvalidChildNumber(index.to_string()));
        }

        Ok(ChildNumber(if hardened { index | Self::HARDENED_FLAG } else { index }))
    }

    /// Index without the hardened flag.
    pub fn index(&self) -> u32 {
        self.0 & !Self::HARDENED_FLAG
    }

    /// Is this child number within the hardened range?
    pub fn is_hardened(&self) -> bool {
        self.0 & Self::HARDENED_FLAG != 0
    }

    /// Serialize this child number as big-endian bytes.
    pub fn to_bytes(&self) -> [u8; CHILD_NUMBER_SIZE] {
        self.0.to_be_bytes()
    }

    /// Parse a big-endian child number.
    pub fn from_bytes(bytes: [u8; CHILD_NUMBER_SIZE]) -> Self {
        ChildNumber(u32::from_be_bytes(bytes))
    }
}

impl From<u32> for ChildNumber {
    fn from(n: u32) -> ChildNumber {
        ChildNumber(n)
    }
}

impl From<ChildNumber> for u32 {
    fn from(n: ChildNumber) -> u32 {
        n.0
    }
}

impl Display for ChildNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.index())?;

        if self.is_hardened() {
            f.write_str("'")?;
        }

        Ok(())
    }
}

impl FromStr for ChildNumber {
    type Err = Error;

    fn from_str(child: &str) -> Result<ChildNumber> {
        let (index, hardened) = match child.strip_suffix(['\'', 'h', 'H']) {
            Some(index) => (index, true),
            None => (child, false),
        };

        // `u32::from_str` accepts a leading `+`, path elements don't
        if index.is_empty() || !index.bytes().all(|b| b.is_ascii_digit()) {
            return Err(Error::InvalidChildNumber(child.to_string()));
        }

        let index = index.parse::<u32>().map_err(|_| Error::InvalidChildNumber(child.to_string()))?;
        ChildNumber::new(index, hardened).map_err(|_| Error::InvalidChildNumber(child.to_string()))
    }
}
