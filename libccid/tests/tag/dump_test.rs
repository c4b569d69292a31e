#[path = "../common/mod.rs"]
mod common;

use libccid::ntag::dump_memory;

#[test]
fn dump_walks_uid_user_lock_and_config() {
    let (mut reader, shared) = common::reader_with_packets(common::fixtures::dump_packets());
    let dump = dump_memory(&mut reader).unwrap();

    assert_eq!(dump.uid.as_bytes(), &common::fixtures::sample_uid_bytes()[..]);
    assert_eq!(dump.user_pages.first().unwrap().0, 4);
    assert_eq!(dump.user_pages.last().unwrap().0, 39);
    assert_eq!(dump.dynamic_lock.bytes, vec![0x00, 0x00, 0x00, 0x04]);
    assert_eq!(dump.config_pages[0], (41, vec![0x04, 0x00, 0x00, 0xFF]));

    // Page addresses go out in order: uid, 4..=39, 40, 41..=44
    let pages: Vec<u8> = shared.sent()[1..].iter().map(|f| f[13]).collect();
    let expected: Vec<u8> = (4u8..=44).collect();
    assert_eq!(pages, expected);
}

#[test]
fn dump_stops_at_first_failure() {
    let mut packets = common::fixtures::dump_packets();
    packets.truncate(10);
    let (mut reader, shared) = common::reader_with_packets(packets);

    let err = dump_memory(&mut reader).unwrap_err();
    assert!(err.is_transport());
    assert_eq!(shared.sent().len(), 11);
}
