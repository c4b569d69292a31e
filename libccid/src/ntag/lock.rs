// libccid/src/ntag/lock.rs

use crate::constants::NTAG_PAGE_SIZE;
use crate::{Error, Result};

/// Body index of the extra byte the reader inserts when returning page 0x28.
pub const DYNAMIC_LOCK_EXTRA_BYTE: usize = 3;

/// Dynamic lock bytes as recovered from a READ BINARY of page 0x28.
///
/// The reader returns one byte too many for this page. Dropping the byte at
/// `DYNAMIC_LOCK_EXTRA_BYTE` realigns the first three bytes; the final byte
/// has never been checked against a tag with known lock state, so it is
/// flagged rather than trusted.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DynamicLockBytes {
    /// Body with the extra byte removed
    pub bytes: Vec<u8>,
    /// Set when the final byte may be wrong
    pub last_byte_uncertain: bool,
}

impl DynamicLockBytes {
    /// The bytes whose position is known to be right.
    pub fn reliable(&self) -> &[u8] {
        if self.last_byte_uncertain {
            &self.bytes[..self.bytes.len().saturating_sub(1)]
        } else {
            &self.bytes
        }
    }

    /// The trailing byte of uncertain value, if any.
    pub fn uncertain(&self) -> Option<u8> {
        if self.last_byte_uncertain {
            self.bytes.last().copied()
        } else {
            None
        }
    }
}

/// Drop the interior byte from a raw page 0x28 body.
pub fn repair_dynamic_lock_body(body: &[u8]) -> Result<DynamicLockBytes> {
    if body.len() <= DYNAMIC_LOCK_EXTRA_BYTE {
        return Err(Error::Decoding {
            expected: DYNAMIC_LOCK_EXTRA_BYTE + 1,
            actual: body.len(),
        });
    }
    if body.len() != NTAG_PAGE_SIZE as usize + 1 {
        log::warn!(
            "dynamic lock page body is {} bytes, expected {}",
            body.len(),
            NTAG_PAGE_SIZE + 1
        );
    }

    let mut bytes = body.to_vec();
    bytes.remove(DYNAMIC_LOCK_EXTRA_BYTE);
    Ok(DynamicLockBytes {
        bytes,
        last_byte_uncertain: true,
    })
}
