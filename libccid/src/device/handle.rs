// libccid/src/device/handle.rs

use crate::constants::CCID_PACKET_LEN;
use crate::protocol::codec;
use crate::protocol::{Command, FrameCodec, ResponseFrame};
use crate::transport::Transport;
use crate::utils::bytes_to_hex;
use crate::Result;

/// Reader handle. Owns the transport for its whole lifetime and pairs it
/// with the frame codec; every tag operation goes through `execute`.
pub struct Reader {
    transport: Box<dyn Transport>,
    codec: FrameCodec,
    packet_len: usize,
}

impl Reader {
    /// Create a Reader from an existing Transport instance using slot 0,
    /// sequence 0 and the transport's transfer limit.
    pub fn new(transport: Box<dyn Transport>) -> Self {
        let codec = FrameCodec {
            max_transfer: transport.max_transfer_size(),
            ..FrameCodec::default()
        };
        Self::with_codec(transport, codec, CCID_PACKET_LEN)
    }

    /// Create a Reader with an explicit codec and read packet size.
    pub fn with_codec(transport: Box<dyn Transport>, codec: FrameCodec, packet_len: usize) -> Self {
        Self {
            transport,
            codec,
            packet_len,
        }
    }

    /// Execute a command: one framed write, one packet read.
    pub fn execute(&mut self, cmd: &Command) -> Result<ResponseFrame> {
        log::trace!("execute {} (ins={:#04x})", cmd.name(), cmd.ins());
        let framed = codec::encode_command_frame(&self.codec, cmd)?;
        self.exchange(&framed)
    }

    /// Send an arbitrary APDU. Useful for probing commands the crate does
    /// not model; the reply is returned undecoded beyond the CCID header.
    pub fn transceive(&mut self, apdu: &[u8]) -> Result<ResponseFrame> {
        let framed = self.codec.encode_request(apdu)?;
        self.exchange(&framed)
    }

    fn exchange(&mut self, framed: &[u8]) -> Result<ResponseFrame> {
        log::debug!(">> {}", bytes_to_hex(framed));
        self.transport.write(framed)?;

        let raw = self.transport.read(self.packet_len)?;
        log::debug!("<< {}", bytes_to_hex(&raw));

        FrameCodec::decode_response(&raw)
    }

    /// Framing parameters in use.
    pub fn codec(&self) -> &FrameCodec {
        &self.codec
    }

    /// Bytes requested from the transport per command.
    pub fn packet_len(&self) -> usize {
        self.packet_len
    }
}
