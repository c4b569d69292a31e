// Dump the memory of an NTAG213 sitting on a CCID reader.
//
//   cargo run -p libccid --example ntag_dump --features usb
//   cargo run -p libccid --example ntag_dump --features usb -- ff:ff:ff:ff
//
// When a password is given it is sent with PWD_AUTH before reading.

use libccid::prelude::*;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let transport = UsbTransport::open(&UsbConfig::default())?;
    let mut reader = Reader::new(Box::new(transport));

    if let Some(arg) = std::env::args().nth(1) {
        let password = parse_hex(&arg).map_err(anyhow::Error::msg)?;
        let resp = libccid::ntag::authenticate(&mut reader, &password)?;
        println!(
            "auth resp:\t{} (sw={})",
            bytes_to_hex_sep(&resp.body, ':'),
            resp.status
        );
        println!();
    }

    let dump = libccid::ntag::dump_memory(&mut reader)?;
    print!("{}", dump);
    Ok(())
}
