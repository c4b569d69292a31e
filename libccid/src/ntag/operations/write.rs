use crate::device::Reader;
use crate::ntag::memory;
use crate::protocol::{Command, ResponseFrame};
use crate::Result;

/// Write `data` starting at `page` with UPDATE BINARY.
///
/// Data longer than one page continues into the following pages; all of them
/// must exist on the tag. The reply is returned as-is so the caller can
/// decide what a non-9000 status word means.
pub fn write_page(reader: &mut Reader, page: u8, data: &[u8]) -> Result<ResponseFrame> {
    let region = memory::ensure_span(page, data.len())?;
    log::debug!("write {} bytes at page {:#04x} ({})", data.len(), page, region);

    reader.execute(&Command::UpdateBinary {
        page,
        data: data.to_vec(),
    })
}
