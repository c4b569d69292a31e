// libccid/src/protocol/frame.rs

//! CCID bulk-out and bulk-in messages.

use crate::constants::{
    CCID_HEADER_LEN, MAX_CCID_MESSAGE_LEN, PC_TO_RDR_XFR_BLOCK, RDR_TO_PC_DATA_BLOCK,
    STATUS_WORD_LEN,
};
use crate::protocol::parser;
use crate::protocol::responses::ApduResponse;
use crate::types::StatusWord;
use crate::{Error, Result};

/// CCID bulk message codec.
///
/// Request (`PC_to_RDR_XfrBlock`):
/// `[0x6F] [Len(4, LE)] [Slot(1)] [Seq(1)] [RFU(3)] [Payload(n)]`
///
/// Response:
/// `[Type(1)] [Len(4, LE)] [Slot(1)] [Seq(1)] [Status(1)] [Error(1)] [RFU(2)] [Payload(n)]`
///
/// The codec carries no per-session state; every request uses the same slot
/// and sequence number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameCodec {
    /// bSlot
    pub slot: u8,
    /// bSeq
    pub sequence: u8,
    /// Upper bound for a whole outbound message, header included.
    pub max_transfer: usize,
}

impl Default for FrameCodec {
    fn default() -> Self {
        Self {
            slot: 0,
            sequence: 0,
            max_transfer: MAX_CCID_MESSAGE_LEN,
        }
    }
}

impl FrameCodec {
    /// Codec with explicit slot, sequence and transfer limit.
    pub fn new(slot: u8, sequence: u8, max_transfer: usize) -> Self {
        Self {
            slot,
            sequence,
            max_transfer,
        }
    }

    /// Wrap an APDU into a `PC_to_RDR_XfrBlock` message.
    pub fn encode_request(&self, payload: &[u8]) -> Result<Vec<u8>> {
        let len = u32::try_from(payload.len()).map_err(|_| Error::Encoding {
            max: u32::MAX as usize,
            actual: payload.len(),
        })?;

        let total = CCID_HEADER_LEN + payload.len();
        if total > self.max_transfer {
            return Err(Error::Encoding {
                max: self.max_transfer.saturating_sub(CCID_HEADER_LEN),
                actual: payload.len(),
            });
        }

        let mut out = Vec::with_capacity(total);
        out.push(PC_TO_RDR_XFR_BLOCK);
        out.extend_from_slice(&len.to_le_bytes());
        out.push(self.slot);
        out.push(self.sequence);
        out.extend_from_slice(&[0x00; 3]);
        out.extend_from_slice(payload);
        Ok(out)
    }

    /// Parse one packet read from the bulk-in endpoint.
    pub fn decode_response(raw: &[u8]) -> Result<ResponseFrame> {
        parser::ensure_len(raw, CCID_HEADER_LEN)?;

        let data_length = parser::le_u32_at(raw, 1)?;
        // dwLength is authoritative, but never read past the packet
        let available = raw.len() - CCID_HEADER_LEN;
        let usable = available.min(data_length as usize);

        Ok(ResponseFrame {
            message_type: parser::byte_at(raw, 0)?,
            data_length,
            slot: parser::byte_at(raw, 5)?,
            sequence: parser::byte_at(raw, 6)?,
            status: parser::byte_at(raw, 7)?,
            error: parser::byte_at(raw, 8)?,
            payload: parser::slice_at(raw, CCID_HEADER_LEN, usable)?.to_vec(),
        })
    }
}

/// A decoded bulk-in message. `payload` holds the APDU response including
/// its trailing status word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseFrame {
    /// bMessageType, `0x80` for a data block
    pub message_type: u8,
    /// dwLength as sent by the reader
    pub data_length: u32,
    /// bSlot
    pub slot: u8,
    /// bSeq
    pub sequence: u8,
    /// bStatus
    pub status: u8,
    /// bError
    pub error: u8,
    /// Bytes after the header, at most `data_length` of them
    pub payload: Vec<u8>,
}

impl ResponseFrame {
    /// Whether the reader answered with `RDR_to_PC_DataBlock`.
    pub fn is_data_block(&self) -> bool {
        self.message_type == RDR_TO_PC_DATA_BLOCK
    }

    /// Whether every byte announced by `dwLength` arrived in the packet.
    pub fn is_complete(&self) -> bool {
        self.data_length as usize <= self.payload.len()
    }

    /// Split the payload into APDU body and status word.
    pub fn apdu(&self) -> Result<ApduResponse> {
        self.ensure_complete()?;
        ApduResponse::decode(&self.payload)
    }

    /// APDU body without the status word.
    pub fn apdu_body(&self) -> Result<&[u8]> {
        let end = self.body_end()?;
        Ok(&self.payload[..end])
    }

    /// Trailing SW1 SW2 of the payload.
    pub fn status_word(&self) -> Result<StatusWord> {
        let end = self.body_end()?;
        Ok(StatusWord::from_bytes(
            self.payload[end],
            self.payload[end + 1],
        ))
    }

    // a cut-off reply has no status word at its end
    fn ensure_complete(&self) -> Result<()> {
        if !self.is_complete() {
            return Err(Error::Decoding {
                expected: self.data_length as usize,
                actual: self.payload.len(),
            });
        }
        Ok(())
    }

    fn body_end(&self) -> Result<usize> {
        self.ensure_complete()?;
        self.payload
            .len()
            .checked_sub(STATUS_WORD_LEN)
            .ok_or(Error::Decoding {
                expected: STATUS_WORD_LEN,
                actual: self.payload.len(),
            })
    }
}
