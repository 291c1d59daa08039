//! Key paths

use crate::{types::MAX_DEPTH, ChildNumber, Depth, Error, Result};
use core::{
    fmt::{self, Display},
    str::FromStr,
};
#[cfg(feature = "serde")]
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

/// Prefix for all key paths.
const PREFIX: &str = "m";

/// Ordered list of child numbers, from the root to the leaf.
///
/// A path built in memory may hold any number of elements; only paths of
/// at most [`MAX_DEPTH`] elements can be serialized.
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq)]
pub struct KeyPath {
    path: Vec<ChildNumber>,
}

impl KeyPath {
    /// Iterate over the [`ChildNumber`] values in this key path.
    pub fn iter(&self) -> impl Iterator<Item = ChildNumber> + '_ {
        self.path.iter().cloned()
    }

    /// Is this key path empty? (i.e. the root)
    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }

    /// Get the count of [`ChildNumber`] values in this key path.
    pub fn len(&self) -> usize {
        self.path.len()
    }

    /// Depth byte for this path, if it fits in one.
    pub fn depth(&self) -> Result<Depth> {
        Depth::try_from(self.path.len()).map_err(|_| Error::DepthOutOfRange(self.path.len()))
    }

    /// Get the parent [`KeyPath`] for the current one.
    ///
    /// Returns `None` if this is already the root path.
    pub fn parent(&self) -> Option<Self> {
        self.path.len().checked_sub(1).map(|n| {
            let mut parent = self.clone();
            parent.path.truncate(n);
            parent
        })
    }

    /// Push a [`ChildNumber`] onto an existing key path.
    pub fn push(&mut self, child_number: ChildNumber) {
        self.path.push(child_number)
    }

    /// Raw `u32` path elements, hardened flag included.
    pub fn to_indices(&self) -> Vec<u32> {
        self.iter().map(u32::from).collect()
    }
}

impl AsRef<[ChildNumber]> for KeyPath {
    fn as_ref(&self) -> &[ChildNumber] {
        &self.path
    }
}

impl From<Vec<ChildNumber>> for KeyPath {
    fn from(path: Vec<ChildNumber>) -> Self {
        KeyPath { path }
    }
}

impl From<&[u32]> for KeyPath {
    fn from(indices: &[u32]) -> Self {
        indices.iter().copied().map(ChildNumber).collect()
    }
}

impl FromIterator<ChildNumber> for KeyPath {
    fn from_iter<T: IntoIterator<Item = ChildNumber>>(iter: T) -> Self {
        KeyPath { path: iter.into_iter().collect() }
    }
}

impl Display for KeyPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(PREFIX)?;

        for child_number in self.iter() {
            write!(f, "/{}", child_number)?;
        }

        Ok(())
    }
}

impl Extend<ChildNumber> for KeyPath {
    fn extend<T>(&mut self, iter: T)
    where
        T: IntoIterator<Item = ChildNumber>,
    {
        self.path.extend(iter);
    }
}

impl FromStr for KeyPath {
    type Err = Error;

    fn from_str(path: &str) -> Result<KeyPath> {
        let mut path = path.split('/');

        if path.next() != Some(PREFIX) {
            return Err(Error::InvalidKeyPath(format!("key path doesn't start with `{PREFIX}`")));
        }

        let path = KeyPath { path: path.map(str::parse).collect::<Result<_>>()? };
        if path.len() > MAX_DEPTH {
            return Err(Error::DepthOutOfRange(path.len()));
        }

        Ok(path)
    }
}

impl IntoIterator for KeyPath {
    type Item = ChildNumber;
    type IntoIter = std::vec::IntoIter<ChildNumber>;

    fn into_iter(self) -> std::vec::IntoIter<ChildNumber> {
        self.path.into_iter()
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for KeyPath {
    fn deserialize<D>(deserializer: D) -> std::result::Result<KeyPath, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct KeyPathVisitor;
        impl de::Visitor<'_> for KeyPathVisitor {
            type Value = KeyPath;
            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a key path string such as m/44'/0'/0'")
            }

            fn visit_str<E>(self, value: &str) -> std::result::Result<Self::Value, E>
            where
                E: de::Error,
            {
                KeyPath::from_str(value).map_err(|err| de::Error::custom(err.to_string()))
            }
        }

        deserializer.deserialize_str(KeyPathVisitor)
    }
}

#[cfg(feature = "serde")]
impl Serialize for KeyPath {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}
