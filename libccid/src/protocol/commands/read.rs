// libccid/src/protocol/commands/read.rs

use super::Apdu;
use crate::constants::{APDU_CLA_PSEUDO, APDU_INS_READ_BINARY};
use crate::{Error, Result};

/// Encode READ BINARY: `FF B0 00 <page> <length>`
pub fn read_binary(page: u8, length: u8) -> Result<Vec<u8>> {
    if length == 0 {
        return Err(Error::InvalidArgument(
            "read length must be between 1 and 255".into(),
        ));
    }
    Apdu::new(APDU_CLA_PSEUDO, APDU_INS_READ_BINARY, 0x00, page)
        .with_le(length)
        .encode()
}
