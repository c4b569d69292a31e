use crate::constants::{
    CCID_HEADER_LEN, NTAG213_DYNAMIC_LOCK_PAGE, NTAG_PAGE_SIZE, STATUS_WORD_LEN,
};
use crate::device::Reader;
use crate::ntag::lock::{DynamicLockBytes, repair_dynamic_lock_body};
use crate::ntag::memory;
use crate::protocol::Command;
use crate::types::Uid;
use crate::{Error, Result};

/// Read one 4-byte page and return the APDU body.
pub fn read_page(reader: &mut Reader, page: u8) -> Result<Vec<u8>> {
    read_bytes(reader, page, NTAG_PAGE_SIZE)
}

/// Read `length` bytes starting at `page` using READ BINARY.
///
/// The reply has to fit in a single bulk-in packet, so `length` plus the
/// status word is capped by the reader's packet size.
pub fn read_bytes(reader: &mut Reader, page: u8, length: u8) -> Result<Vec<u8>> {
    memory::ensure_span(page, length as usize)?;

    let room = reader.packet_len().saturating_sub(CCID_HEADER_LEN);
    if length as usize + STATUS_WORD_LEN > room {
        return Err(Error::InvalidArgument(format!(
            "read of {} bytes does not fit a {}-byte packet (max {})",
            length,
            reader.packet_len(),
            room.saturating_sub(STATUS_WORD_LEN)
        )));
    }

    let frame = reader.execute(&Command::ReadBinary { page, length })?;
    let body = frame.apdu_body()?;
    Ok(body.to_vec())
}

/// Read the tag UID with GET DATA.
pub fn read_uid(reader: &mut Reader) -> Result<Uid> {
    let frame = reader.execute(&Command::GetUid)?;
    Ok(Uid::from(frame.apdu_body()?.to_vec()))
}

/// Read page 0x28 and undo the reader's extra interior byte.
pub fn read_dynamic_lock_bytes(reader: &mut Reader) -> Result<DynamicLockBytes> {
    let body = read_page(reader, NTAG213_DYNAMIC_LOCK_PAGE)?;
    log::trace!("raw dynamic lock body: {:02x?}", body);
    repair_dynamic_lock_body(&body)
}
