#[path = "../common/mod.rs"]
mod common;

use libccid::protocol::codec::decode_response_frame;
use libccid::StatusWord;

#[test]
fn page_reply_splits_body_and_status() {
    let raw = common::fixtures::page_packet(&common::fixtures::cc_page());
    let (frame, apdu) = decode_response_frame(&raw).unwrap();
    assert_eq!(frame.data_length, 6);
    assert_eq!(apdu.body, common::fixtures::cc_page().to_vec());
    assert_eq!(apdu.status, StatusWord::SUCCESS);
}

#[test]
fn failure_status_word_is_returned_as_data() {
    let raw = common::fixtures::auth_failed_packet();
    let (_, apdu) = decode_response_frame(&raw).unwrap();
    assert!(apdu.body.is_empty());
    assert_eq!(apdu.status.sw1(), 0x63);
    assert!(!apdu.is_success());
}
