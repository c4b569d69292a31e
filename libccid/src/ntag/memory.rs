// libccid/src/ntag/memory.rs

//! NTAG213 memory map.
//!
//! | pages   | region                  |
//! |---------|-------------------------|
//! | 0x00-03 | UID, static lock, CC    |
//! | 0x04-27 | user memory (144 bytes) |
//! | 0x28    | dynamic lock bytes      |
//! | 0x29-2C | CFG0, CFG1, PWD, PACK   |

use derive_more::Display;

use crate::constants::{
    NTAG213_CONFIG_FIRST, NTAG213_DYNAMIC_LOCK_PAGE, NTAG213_LAST_PAGE, NTAG213_USER_FIRST,
    NTAG213_USER_LAST, NTAG_PAGE_SIZE,
};
use crate::{Error, Result};

/// Functional area of the NTAG213 address space.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Region {
    /// Pages 0-3: UID, static lock bytes, capability container
    #[display(fmt = "uid/internal")]
    Internal,
    /// Pages 4-39
    #[display(fmt = "user memory")]
    UserMemory,
    /// Page 40
    #[display(fmt = "dynamic lock")]
    DynamicLock,
    /// Pages 41-44: CFG0, CFG1, PWD, PACK
    #[display(fmt = "configuration")]
    Configuration,
}

/// Map a page address to its region. Pages past 0x2C do not exist on an
/// NTAG213 and are rejected before anything is sent to the reader.
pub fn classify(page: u8) -> Result<Region> {
    match page {
        0x00..NTAG213_USER_FIRST => Ok(Region::Internal),
        NTAG213_USER_FIRST..=NTAG213_USER_LAST => Ok(Region::UserMemory),
        NTAG213_DYNAMIC_LOCK_PAGE => Ok(Region::DynamicLock),
        NTAG213_CONFIG_FIRST..=NTAG213_LAST_PAGE => Ok(Region::Configuration),
        _ => Err(Error::InvalidArgument(format!(
            "page {:#04x} is outside NTAG213 memory (0x00-{:#04x})",
            page, NTAG213_LAST_PAGE
        ))),
    }
}

/// Check that `len` bytes starting at `page` stay inside the tag.
pub fn ensure_span(page: u8, len: usize) -> Result<Region> {
    let region = classify(page)?;
    let pages = len.div_ceil(NTAG_PAGE_SIZE as usize).max(1);
    let last = page as usize + pages - 1;
    if last > NTAG213_LAST_PAGE as usize {
        return Err(Error::InvalidArgument(format!(
            "{} bytes from page {:#04x} run past page {:#04x}",
            len, page, NTAG213_LAST_PAGE
        )));
    }
    Ok(region)
}
