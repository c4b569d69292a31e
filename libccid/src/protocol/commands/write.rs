// libccid/src/protocol/commands/write.rs

use super::Apdu;
use crate::constants::{APDU_CLA_PSEUDO, APDU_INS_UPDATE_BINARY};
use crate::{Error, Result};

/// Encode UPDATE BINARY payload
/// Layout: FF D6 00 <page> <len(data)> data(1..=255)
pub fn update_binary(page: u8, data: &[u8]) -> Result<Vec<u8>> {
    if data.is_empty() || data.len() > 255 {
        return Err(Error::InvalidArgument(format!(
            "update data must be 1 to 255 bytes, got {}",
            data.len()
        )));
    }
    Apdu::new(APDU_CLA_PSEUDO, APDU_INS_UPDATE_BINARY, 0x00, page)
        .with_data(data.to_vec())
        .encode()
}
