// libccid/src/ntag/dump.rs

//! Full memory dump.

use std::ops::RangeInclusive;

use crate::constants::{
    NTAG213_CONFIG_FIRST, NTAG213_LAST_PAGE, NTAG213_USER_FIRST, NTAG213_USER_LAST,
};
use crate::device::Reader;
use crate::ntag::lock::DynamicLockBytes;
use crate::ntag::operations;
use crate::types::Uid;
use crate::utils::bytes_to_hex_sep;
use crate::Result;

/// Snapshot of a tag's readable memory.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TagDump {
    /// UID from GET DATA
    pub uid: Uid,
    /// Pages 4-39 with their bytes
    pub user_pages: Vec<(u8, Vec<u8>)>,
    /// Repaired page 40
    pub dynamic_lock: DynamicLockBytes,
    /// Pages 41-44 with their bytes
    pub config_pages: Vec<(u8, Vec<u8>)>,
}

/// Read UID, user memory, dynamic lock bytes and configuration pages, in
/// that order. The first failing command aborts the dump.
pub fn dump_memory(reader: &mut Reader) -> Result<TagDump> {
    let uid = operations::read_uid(reader)?;

    let user_pages = read_pages(reader, NTAG213_USER_FIRST..=NTAG213_USER_LAST)?;

    let dynamic_lock = operations::read_dynamic_lock_bytes(reader)?;

    let config_pages = read_pages(reader, NTAG213_CONFIG_FIRST..=NTAG213_LAST_PAGE)?;

    Ok(TagDump {
        uid,
        user_pages,
        dynamic_lock,
        config_pages,
    })
}

fn read_pages(reader: &mut Reader, pages: RangeInclusive<u8>) -> Result<Vec<(u8, Vec<u8>)>> {
    let mut out = Vec::with_capacity(pages.len());
    for page in pages {
        out.push((page, operations::read_page(reader, page)?));
    }
    Ok(out)
}

impl std::fmt::Display for TagDump {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "-- UID:\t{}", self.uid.to_hex())?;
        writeln!(f)?;

        writeln!(f, "== User memory pages:")?;
        for (page, bytes) in &self.user_pages {
            writeln!(f, "{:02}:\t{}", page, bytes_to_hex_sep(bytes, ':'))?;
        }
        writeln!(f)?;

        writeln!(f, "== Dynamic lock bytes:")?;
        let mut lock = bytes_to_hex_sep(&self.dynamic_lock.bytes, ':');
        if self.dynamic_lock.last_byte_uncertain {
            lock.push_str(":XX");
        }
        writeln!(
            f,
            "{:02}:\t{}",
            crate::constants::NTAG213_DYNAMIC_LOCK_PAGE,
            lock
        )?;
        writeln!(f)?;

        writeln!(f, "== Configuration pages:")?;
        for (page, bytes) in &self.config_pages {
            writeln!(f, "{:02}:\t{}", page, bytes_to_hex_sep(bytes, ':'))?;
        }
        Ok(())
    }
}
