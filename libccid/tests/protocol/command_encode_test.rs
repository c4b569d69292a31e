#[path = "../common/mod.rs"]
mod common;

use libccid::Error;
use libccid::protocol::{Command, get_uid, pwd_auth, read_binary, update_binary};

#[test]
fn apdu_builders_match_wire_format() {
    assert_eq!(read_binary(4, 4).unwrap(), vec![0xFF, 0xB0, 0x00, 0x04, 0x04]);
    assert_eq!(
        update_binary(9, &[0, 0, 0, 0]).unwrap(),
        vec![0xFF, 0xD6, 0x00, 0x09, 0x04, 0x00, 0x00, 0x00, 0x00]
    );
    assert_eq!(get_uid(), vec![0xFF, 0xCA, 0x00, 0x00, 0x00]);
    assert_eq!(
        pwd_auth(&[0xFF, 0xFF, 0xFF, 0xFF]).unwrap(),
        vec![0xFF, 0x00, 0x00, 0x00, 0x05, 0x1B, 0xFF, 0xFF, 0xFF, 0xFF]
    );
}

#[test]
fn three_byte_password_is_invalid() {
    assert!(matches!(
        pwd_auth(&[0x01, 0x02, 0x03]),
        Err(Error::InvalidArgument(_))
    ));
}

#[test]
fn command_enum_encodes_like_builders() {
    let cmd = Command::UpdateBinary {
        page: 16,
        data: vec![0; 8],
    };
    assert_eq!(cmd.encode().unwrap(), update_binary(16, &[0; 8]).unwrap());
    assert_eq!(cmd.ins(), 0xD6);
}
