// libccid/src/types.rs

//! Newtypes for passwords, status words and UIDs.

use crate::Error;
use derive_more::{Display, From};
use std::convert::TryFrom;

/// NTAG21x password - Newtype Pattern (4 バイト)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Password([u8; 4]);

impl Password {
    /// Factory default password of NTAG21x tags.
    pub const DEFAULT: Self = Self([0xFF; 4]);

    /// Raw password bytes.
    pub fn as_bytes(&self) -> &[u8; 4] {
        &self.0
    }
}

impl TryFrom<&[u8]> for Password {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        if bytes.len() != 4 {
            return Err(Error::InvalidArgument(format!(
                "password must be 4 bytes, got {}",
                bytes.len()
            )));
        }
        let mut arr = [0u8; 4];
        arr.copy_from_slice(bytes);
        Ok(Self(arr))
    }
}

/// APDU status word (SW1 SW2). Exposed as data, never interpreted by the
/// codec itself.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[display(fmt = "{:04X}", _0)]
pub struct StatusWord(u16);

impl StatusWord {
    /// `9000`
    pub const SUCCESS: Self = Self(0x9000);

    /// Wrap a `SW1 << 8 | SW2` value.
    pub const fn new(sw: u16) -> Self {
        Self(sw)
    }

    /// Build from the two trailing response bytes.
    pub fn from_bytes(sw1: u8, sw2: u8) -> Self {
        Self(u16::from_be_bytes([sw1, sw2]))
    }

    /// Combined value.
    pub fn as_u16(&self) -> u16 {
        self.0
    }

    /// First status byte.
    pub fn sw1(&self) -> u8 {
        (self.0 >> 8) as u8
    }

    /// Second status byte.
    pub fn sw2(&self) -> u8 {
        self.0 as u8
    }

    /// True for `9000`.
    pub fn is_success(&self) -> bool {
        *self == Self::SUCCESS
    }
}

/// Tag UID as returned by GET DATA (length depends on the tag family).
#[derive(Debug, Clone, PartialEq, Eq, Hash, From)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Uid(Vec<u8>);

impl Uid {
    /// Raw UID bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Number of UID bytes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when the reader returned no UID bytes.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Colon separated lowercase hex, e.g. `04:a1:b2`.
    pub fn to_hex(&self) -> String {
        crate::utils::bytes_to_hex_sep(&self.0, ':')
    }
}
