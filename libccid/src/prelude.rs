// libccid/src/prelude.rs

//! Commonly used types, for `use libccid::prelude::*`.

pub use crate::device::{Reader, ReaderBuilder};
pub use crate::ntag::{DynamicLockBytes, Region, TagDump};
pub use crate::protocol::{ApduResponse, Command, FrameCodec, ResponseFrame};
pub use crate::transport::{MockTransport, Transport};
#[cfg(feature = "usb")]
pub use crate::transport::{UsbConfig, UsbTransport};
pub use crate::{Error, Password, Result, StatusWord, Uid};

// Re-export small utilities for convenience
pub use crate::utils::{bytes_to_hex, bytes_to_hex_sep, parse_hex};
