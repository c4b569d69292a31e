#![cfg(feature = "usb")]

//! Shared helpers for hardware tests compiled with `--features usb`.
//!
//! Opening returns `Ok(None)` when no reader is attached so the tests pass
//! on machines (CI etc.) without one.

use libccid::device::Reader;
use libccid::transport::usb::{UsbConfig, UsbTransport};
use libccid::{Error, Result};

/// Open the default reader and wrap it in a `Reader`.
///
/// - Ok(Some(reader)) : reader found and claimed
/// - Ok(None) : no reader attached
/// - Err(e) : any other failure
pub fn open_reader() -> Result<Option<Reader>> {
    match UsbTransport::open(&UsbConfig::default()) {
        Ok(transport) => Ok(Some(Reader::new(Box::new(transport)))),
        Err(Error::DeviceNotFound { .. }) => Ok(None),
        Err(e) => Err(e),
    }
}
