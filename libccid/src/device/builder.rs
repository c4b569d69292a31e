// libccid/src/device/builder.rs

use crate::constants::{CCID_HEADER_LEN, CCID_PACKET_LEN};
use crate::device::handle::Reader;
use crate::protocol::FrameCodec;
use crate::transport::Transport;
use crate::{Error, Result};

/// Helper to construct a Reader with optional framing configuration.
pub struct ReaderBuilder {
    transport: Option<Box<dyn Transport>>,
    slot: u8,
    sequence: u8,
    max_transfer: Option<usize>,
    packet_len: usize,
}

impl Default for ReaderBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ReaderBuilder {
    /// Builder with slot 0, sequence 0 and 64-byte packets.
    pub fn new() -> Self {
        Self {
            transport: None,
            slot: 0,
            sequence: 0,
            max_transfer: None,
            packet_len: CCID_PACKET_LEN,
        }
    }

    /// Provide an already-created transport instance (e.g. MockTransport)
    pub fn with_transport(mut self, transport: Box<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Slot number stamped on every request (bSlot).
    pub fn slot(mut self, slot: u8) -> Self {
        self.slot = slot;
        self
    }

    /// Sequence number stamped on every request (bSeq).
    pub fn sequence(mut self, sequence: u8) -> Self {
        self.sequence = sequence;
        self
    }

    /// Override the transfer limit reported by the transport.
    pub fn max_transfer(mut self, max: usize) -> Self {
        self.max_transfer = Some(max);
        self
    }

    /// Size of the packet read per command.
    pub fn packet_len(mut self, len: usize) -> Self {
        self.packet_len = len;
        self
    }

    /// Consume the builder and return a Reader.
    pub fn build(self) -> Result<Reader> {
        let transport = self
            .transport
            .ok_or_else(|| Error::InvalidArgument("reader needs a transport".into()))?;

        let max_transfer = self
            .max_transfer
            .unwrap_or_else(|| transport.max_transfer_size());
        if max_transfer > transport.max_transfer_size() {
            return Err(Error::InvalidArgument(format!(
                "max transfer {} exceeds transport limit {}",
                max_transfer,
                transport.max_transfer_size()
            )));
        }
        if self.packet_len < CCID_HEADER_LEN {
            return Err(Error::InvalidArgument(format!(
                "packet length {} cannot hold a CCID header",
                self.packet_len
            )));
        }

        let codec = FrameCodec::new(self.slot, self.sequence, max_transfer);
        Ok(Reader::with_codec(transport, codec, self.packet_len))
    }
}
