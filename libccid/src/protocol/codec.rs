// libccid/src/protocol/codec.rs

use crate::Result;

use super::commands::Command;
use super::frame::{FrameCodec, ResponseFrame};
use super::responses::ApduResponse;

/// Encode a Command into a full CCID bulk-out message.
pub fn encode_command_frame(codec: &FrameCodec, cmd: &Command) -> Result<Vec<u8>> {
    let apdu = cmd.encode()?;
    codec.encode_request(&apdu)
}

/// Decode a bulk-in packet and split the contained APDU response.
pub fn decode_response_frame(raw: &[u8]) -> Result<(ResponseFrame, ApduResponse)> {
    let frame = FrameCodec::decode_response(raw)?;
    let apdu = frame.apdu()?;
    Ok((frame, apdu))
}
