// Shared helpers for integration tests.
#![allow(dead_code)]

pub mod fixtures;

use libccid::device::Reader;
use libccid::test_support::SharedMock;
use libccid::transport::mock::MockTransport;

/// Reader over a shared mock pre-seeded with `packets`.
pub fn reader_with_packets(packets: Vec<Vec<u8>>) -> (Reader, SharedMock) {
    let shared = SharedMock::new(MockTransport::new());
    for p in packets {
        shared.push_response(p);
    }
    (Reader::new(Box::new(shared.clone())), shared)
}

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
