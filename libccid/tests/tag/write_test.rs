#[path = "../common/mod.rs"]
mod common;

use libccid::ntag::{authenticate, write_page};

#[test]
fn write_page_reports_status_word() {
    let (mut reader, shared) = common::reader_with_packets(vec![common::fixtures::ok_packet()]);
    let frame = write_page(&mut reader, 9, &[0; 4]).unwrap();
    assert!(frame.status_word().unwrap().is_success());
    assert_eq!(
        hex::encode(&shared.sent()[0]),
        "6f090000000000000000ffd600090400000000"
    );
}

#[test]
fn rejected_write_is_data_not_error() {
    let (mut reader, _) =
        common::reader_with_packets(vec![libccid::test_support::reply_packet(&[], 0x6A, 0x82)]);
    let frame = write_page(&mut reader, 16, &[0; 8]).unwrap();
    assert_eq!(frame.status_word().unwrap().as_u16(), 0x6A82);
}

#[test]
fn wrong_password_is_reported_in_status() {
    let (mut reader, _) =
        common::reader_with_packets(vec![common::fixtures::auth_failed_packet()]);
    let resp = authenticate(&mut reader, &[0xFF; 4]).unwrap();
    assert!(!resp.is_success());
}
