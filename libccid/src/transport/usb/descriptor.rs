// libccid/src/transport/usb/descriptor.rs

use rusb::{Device, Direction, TransferType, UsbContext};

/// Inspect the first configuration and return the first bulk IN and bulk OUT
/// endpoint addresses of `interface` (if any).
/// Returns (in_endpoint, out_endpoint)
pub fn find_bulk_endpoints<D: UsbContext>(
    device: &Device<D>,
    interface: u8,
) -> (Option<u8>, Option<u8>) {
    let Ok(config) = device.config_descriptor(0) else {
        return (None, None);
    };

    let mut in_ep = None;
    let mut out_ep = None;

    for iface in config.interfaces() {
        for iface_desc in iface.descriptors() {
            if iface_desc.interface_number() != interface {
                continue;
            }
            for ep in iface_desc.endpoint_descriptors() {
                if ep.transfer_type() != TransferType::Bulk {
                    continue;
                }
                match ep.direction() {
                    Direction::In if in_ep.is_none() => in_ep = Some(ep.address()),
                    Direction::Out if out_ep.is_none() => out_ep = Some(ep.address()),
                    _ => {}
                }
            }
        }
    }

    (in_ep, out_ep)
}

/// bConfigurationValue of the first configuration, if readable.
pub fn first_configuration<D: UsbContext>(device: &Device<D>) -> Option<u8> {
    device.config_descriptor(0).ok().map(|c| c.number())
}
