// libccid/src/error.rs

//! Error type shared by every layer.

use thiserror::Error;

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    /// No USB device with the requested IDs.
    #[error("device not found: {vendor_id:04x}:{product_id:04x}")]
    DeviceNotFound {
        /// Vendor ID searched for.
        vendor_id: u16,
        /// Product ID searched for.
        product_id: u16,
    },

    /// Caller input rejected before anything was sent.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Payload does not fit in one CCID message.
    #[error("payload too large to frame: max {max}, got {actual}")]
    Encoding {
        /// Largest payload accepted.
        max: usize,
        /// Payload length given.
        actual: usize,
    },

    /// Reply shorter than its structure requires.
    #[error("reply too short: expected at least {expected} bytes, got {actual}")]
    Decoding {
        /// Bytes needed.
        expected: usize,
        /// Bytes available.
        actual: usize,
    },

    /// Write or read on the channel failed.
    #[error("transport error: {0}")]
    Transport(String),

    /// Failure reported by libusb.
    #[cfg(feature = "usb")]
    #[error("usb error: {0}")]
    Usb(#[from] rusb::Error),
}

impl Error {
    /// True for failures raised by the transport rather than by the codec.
    pub fn is_transport(&self) -> bool {
        match self {
            Error::Transport(_) => true,
            #[cfg(feature = "usb")]
            Error::Usb(_) => true,
            _ => false,
        }
    }
}

/// Result alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
