// libccid/src/protocol/mod.rs

/// Command to frame and frame to response helpers.
pub mod codec;
/// Pseudo-APDU encoders.
pub mod commands;
/// CCID bulk message codec.
pub mod frame;
/// Bounds-checked byte readers.
pub mod parser;
/// APDU response split.
pub mod responses;

pub use commands::*;
pub use frame::{FrameCodec, ResponseFrame};
pub use responses::ApduResponse;
