use crate::{key::KeyKind, Error};
use core::fmt::{self, Display};

/// Human-readable part of a SLIP-0032 string.
#[derive(Copy, Clone, Debug, Eq, Hash, PartialEq)]
pub enum Prefix {
    XPRV,
    XPUB,
}

impl Prefix {
    pub fn as_str(&self) -> &'static str {
        match self {
            Prefix::XPRV => "xprv",
            Prefix::XPUB => "xpub",
        }
    }

    pub fn kind(&self) -> KeyKind {
        match self {
            Prefix::XPRV => KeyKind::Private,
            Prefix::XPUB => KeyKind::Public,
        }
    }
}

impl From<KeyKind> for Prefix {
    fn from(kind: KeyKind) -> Self {
        match kind {
            KeyKind::Private => Prefix::XPRV,
            KeyKind::Public => Prefix::XPUB,
        }
    }
}

impl Display for Prefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for Prefix {
    type Error = Error;

    fn try_from(hrp: &str) -> Result<Self, Self::Error> {
        match hrp {
            "xprv" => Ok(Prefix::XPRV),
            "xpub" => Ok(Prefix::XPUB),
            _ => Err(Error::UnknownPrefix(hrp.to_string())),
        }
    }
}
