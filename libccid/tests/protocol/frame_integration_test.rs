#[path = "../common/mod.rs"]
mod common;

use libccid::Error;
use libccid::protocol::FrameCodec;

#[test]
fn uid_packet_decodes_to_header_and_payload() {
    let raw = common::fixtures::uid_packet();
    let frame = FrameCodec::decode_response(&raw).expect("decode");
    assert!(frame.is_data_block());
    assert_eq!(frame.data_length, 9);
    assert_eq!(frame.payload.len(), 9);
    assert_eq!(
        frame.apdu_body().unwrap(),
        &common::fixtures::sample_uid_bytes()[..]
    );
}

#[test]
fn request_header_is_wire_exact() {
    let frame = FrameCodec::default()
        .encode_request(&hex::decode("ffd6000904").unwrap())
        .unwrap();
    assert_eq!(hex::encode(&frame), "6f050000000000000000ffd6000904");
}

#[test]
fn short_read_is_decoding_error() {
    assert!(matches!(
        FrameCodec::decode_response(&[0x80; 9]),
        Err(Error::Decoding { .. })
    ));
}
