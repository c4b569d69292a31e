// libccid/src/transport/usb/mod.rs

//! Bulk transport over rusb.

#![cfg(feature = "usb")]

use std::time::Duration;

use crate::constants::{
    DEFAULT_IN_ENDPOINT, DEFAULT_OUT_ENDPOINT, DEFAULT_PRODUCT_ID,
    DEFAULT_VENDOR_ID, MAX_CCID_MESSAGE_LEN,
};
use crate::transport::traits::Transport;
use crate::{Error, Result};

use rusb::{Context, DeviceHandle, UsbContext};

mod descriptor;
use descriptor::{find_bulk_endpoints, first_configuration};

/// Where to find the reader and how to talk to it.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UsbConfig {
    /// USB vendor ID
    pub vendor_id: u16,
    /// USB product ID
    pub product_id: u16,
    /// Interface number to claim
    pub interface: u8,
    /// Bulk-in endpoint; `None` discovers it from the interface descriptor
    pub in_endpoint: Option<u8>,
    /// Bulk-out endpoint; `None` discovers it from the interface descriptor
    pub out_endpoint: Option<u8>,
    /// Largest outbound message, header included
    pub max_transfer: usize,
    /// Transfer timeout in milliseconds, 0 blocks indefinitely
    pub timeout_ms: u64,
}

impl Default for UsbConfig {
    fn default() -> Self {
        Self {
            vendor_id: DEFAULT_VENDOR_ID,
            product_id: DEFAULT_PRODUCT_ID,
            interface: 0,
            in_endpoint: Some(DEFAULT_IN_ENDPOINT),
            out_endpoint: Some(DEFAULT_OUT_ENDPOINT),
            max_transfer: MAX_CCID_MESSAGE_LEN,
            timeout_ms: 0,
        }
    }
}

/// Bulk transport for a CCID reader. Opening the device performs the
/// one-time setup (kernel driver detach, configuration, interface claim);
/// afterwards every transfer is a single blocking bulk call with no retry.
pub struct UsbTransport {
    handle: DeviceHandle<Context>,
    in_ep: u8,
    out_ep: u8,
    max_transfer: usize,
    timeout: Duration,
}

impl UsbTransport {
    /// Open the default reader (0x072f:0x223b, endpoints 0x81/0x01).
    pub fn open_default() -> Result<Self> {
        Self::open(&UsbConfig::default())
    }

    /// Open the first device matching the configured vendor/product id.
    pub fn open(config: &UsbConfig) -> Result<Self> {
        let ctx = Context::new()?;
        for device in ctx.devices()?.iter() {
            let dd = device.device_descriptor()?;
            if dd.vendor_id() != config.vendor_id || dd.product_id() != config.product_id {
                continue;
            }

            let mut handle = device.open()?;
            let iface = config.interface;

            // The setup steps below are best-effort: some platforms have no
            // kernel driver to detach or reject reconfiguring an already
            // configured device. Only claiming the interface is fatal.
            match handle.kernel_driver_active(iface) {
                Ok(true) => {
                    if let Err(e) = handle.detach_kernel_driver(iface) {
                        log::warn!("detach kernel driver on interface {} failed: {}", iface, e);
                    }
                }
                Ok(false) => {}
                Err(e) => log::debug!("kernel driver query unsupported: {}", e),
            }

            if let Some(cfg) = first_configuration(&device) {
                if let Err(e) = handle.set_active_configuration(cfg) {
                    log::warn!("set configuration {} failed: {}", cfg, e);
                }
            }

            handle.claim_interface(iface)?;

            if let Err(e) = handle.set_alternate_setting(iface, 0) {
                log::warn!("set alternate setting 0 failed: {}", e);
            }

            let (found_in, found_out) = find_bulk_endpoints(&device, iface);
            let in_ep = config
                .in_endpoint
                .or(found_in)
                .unwrap_or(DEFAULT_IN_ENDPOINT);
            let out_ep = config
                .out_endpoint
                .or(found_out)
                .unwrap_or(DEFAULT_OUT_ENDPOINT);

            log::info!(
                "opened reader {:04x}:{:04x} (in={:#04x}, out={:#04x})",
                config.vendor_id,
                config.product_id,
                in_ep,
                out_ep
            );

            return Ok(UsbTransport {
                handle,
                in_ep,
                out_ep,
                max_transfer: config.max_transfer,
                timeout: Duration::from_millis(config.timeout_ms),
            });
        }

        Err(Error::DeviceNotFound {
            vendor_id: config.vendor_id,
            product_id: config.product_id,
        })
    }
}

impl Transport for UsbTransport {
    fn write(&mut self, data: &[u8]) -> Result<()> {
        let n = self.handle.write_bulk(self.out_ep, data, self.timeout)?;
        if n != data.len() {
            return Err(Error::Transport(format!(
                "short bulk write: {} of {} bytes",
                n,
                data.len()
            )));
        }
        Ok(())
    }

    fn read(&mut self, max_len: usize) -> Result<Vec<u8>> {
        let mut buf = vec![0u8; max_len];
        let n = self.handle.read_bulk(self.in_ep, &mut buf, self.timeout)?;
        buf.truncate(n);
        Ok(buf)
    }

    fn max_transfer_size(&self) -> usize {
        self.max_transfer
    }
}
