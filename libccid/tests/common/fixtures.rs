// fixtures.rs — provides commonly used replies/packets

use libccid::test_support::reply_packet;

pub fn sample_uid_bytes() -> Vec<u8> {
    hex::decode("04a1b2c3d4e580").unwrap()
}

/// Capability container page of a factory NTAG213
pub fn cc_page() -> [u8; 4] {
    [0xE1, 0x10, 0x12, 0x00]
}

pub fn uid_packet() -> Vec<u8> {
    reply_packet(&sample_uid_bytes(), 0x90, 0x00)
}

pub fn page_packet(data: &[u8; 4]) -> Vec<u8> {
    reply_packet(data, 0x90, 0x00)
}

/// Page 0x28 as the reader returns it: five body bytes
pub fn dynamic_lock_packet() -> Vec<u8> {
    reply_packet(&hex::decode("000000bd04").unwrap(), 0x90, 0x00)
}

pub fn ok_packet() -> Vec<u8> {
    reply_packet(&[], 0x90, 0x00)
}

/// NTAG PWD_AUTH NAK as surfaced by the reader
pub fn auth_failed_packet() -> Vec<u8> {
    reply_packet(&[], 0x63, 0x00)
}

/// All packets for a full memory dump, in command order
pub fn dump_packets() -> Vec<Vec<u8>> {
    let mut packets = vec![uid_packet()];
    for page in 4u8..=39 {
        packets.push(page_packet(&[page, page, page, page]));
    }
    packets.push(dynamic_lock_packet());
    packets.push(page_packet(&[0x04, 0x00, 0x00, 0xFF]));
    packets.push(page_packet(&[0x00, 0x05, 0x00, 0x00]));
    packets.push(page_packet(&[0x00; 4]));
    packets.push(page_packet(&[0x00; 4]));
    packets
}
