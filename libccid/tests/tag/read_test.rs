#[path = "../common/mod.rs"]
mod common;

use libccid::Error;
use libccid::device::Reader;
use libccid::ntag::{Region, classify, read_bytes, read_dynamic_lock_bytes, read_page, read_uid};
use libccid::transport::mock::MockTransport;

#[test]
fn read_page_against_echoing_transport() {
    common::init_logging();
    let raw = common::fixtures::page_packet(&common::fixtures::cc_page());
    let mut reader = Reader::new(Box::new(MockTransport::with_fixed_reply(raw.clone())));

    assert_eq!(read_page(&mut reader, 3).unwrap(), raw[10..14].to_vec());
    assert_eq!(read_page(&mut reader, 4).unwrap(), raw[10..14].to_vec());
}

#[test]
fn read_uid_returns_body() {
    let (mut reader, shared) = common::reader_with_packets(vec![common::fixtures::uid_packet()]);
    let uid = read_uid(&mut reader).unwrap();
    assert_eq!(uid.as_bytes(), &common::fixtures::sample_uid_bytes()[..]);
    assert_eq!(&shared.sent()[0][10..], &[0xFF, 0xCA, 0x00, 0x00, 0x00]);
}

#[test]
fn read_sixteen_bytes() {
    let body: Vec<u8> = (0u8..16).collect();
    let (mut reader, shared) = common::reader_with_packets(vec![
        libccid::test_support::reply_packet(&body, 0x90, 0x00),
    ]);
    assert_eq!(read_bytes(&mut reader, 4, 16).unwrap(), body);
    assert_eq!(shared.sent()[0][14], 16);
}

#[test]
fn dynamic_lock_bytes_drop_interior_byte() {
    let (mut reader, _) =
        common::reader_with_packets(vec![common::fixtures::dynamic_lock_packet()]);
    let lock = read_dynamic_lock_bytes(&mut reader).unwrap();
    assert_eq!(lock.bytes, vec![0x00, 0x00, 0x00, 0x04]);
    assert_eq!(lock.reliable(), &[0x00, 0x00, 0x00]);
    assert_eq!(lock.uncertain(), Some(0x04));
}

#[test]
fn pages_past_the_tag_are_rejected() {
    let (mut reader, shared) = common::reader_with_packets(vec![]);
    assert!(matches!(classify(44), Ok(Region::Configuration)));
    assert!(matches!(
        read_page(&mut reader, 45),
        Err(Error::InvalidArgument(_))
    ));
    assert!(shared.sent().is_empty());
}

#[test]
fn reads_larger_than_one_packet_are_rejected() {
    let (mut reader, shared) = common::reader_with_packets(vec![]);
    assert!(matches!(
        read_bytes(&mut reader, 4, 60),
        Err(Error::InvalidArgument(_))
    ));
    assert!(shared.sent().is_empty());
}

#[test]
fn cut_off_reply_is_decoding_error() {
    // 60 body bytes + 9000 announced; a 64-byte packet carries only 54
    let mut payload: Vec<u8> = (0u8..60).collect();
    payload.extend_from_slice(&[0x90, 0x00]);
    let raw = libccid::test_support::raw_packet(&payload, payload.len() as u32);
    let mut reader = Reader::new(Box::new(MockTransport::with_fixed_reply(raw)));

    // 52 is the largest read the packet can hold, so go through a raw transceive
    let frame = reader.transceive(&[0xFF, 0xB0, 0x00, 0x04, 60]).unwrap();
    assert!(!frame.is_complete());
    assert!(matches!(frame.status_word(), Err(Error::Decoding { .. })));
    assert!(matches!(frame.apdu_body(), Err(Error::Decoding { .. })));
}

#[test]
fn largest_single_packet_read() {
    let body: Vec<u8> = (0u8..52).collect();
    let (mut reader, _) = common::reader_with_packets(vec![
        libccid::test_support::reply_packet(&body, 0x90, 0x00),
    ]);
    assert_eq!(read_bytes(&mut reader, 4, 52).unwrap(), body);
}
