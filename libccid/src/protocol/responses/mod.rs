// libccid/src/protocol/responses/mod.rs

//! Body and status word of an APDU response.

use crate::constants::STATUS_WORD_LEN;
use crate::types::StatusWord;
use crate::{Error, Result};

/// APDU response split into its body and trailing status word.
///
/// A non-success status word is still a successful decode; deciding what
/// `6300` or `6A82` means is up to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApduResponse {
    /// Response data
    pub body: Vec<u8>,
    /// SW1 SW2
    pub status: StatusWord,
}

impl ApduResponse {
    /// Decode an APDU response (`body ++ [SW1, SW2]`).
    pub fn decode(data: &[u8]) -> Result<Self> {
        let end = data
            .len()
            .checked_sub(STATUS_WORD_LEN)
            .ok_or(Error::Decoding {
                expected: STATUS_WORD_LEN,
                actual: data.len(),
            })?;

        Ok(Self {
            body: data[..end].to_vec(),
            status: StatusWord::from_bytes(data[end], data[end + 1]),
        })
    }

    /// True for `9000`.
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }
}
