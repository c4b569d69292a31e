#[path = "../common/mod.rs"]
mod common;

use libccid::Error;
use libccid::device::Reader;
use libccid::test_support::SharedMock;
use libccid::transport::Transport;
use libccid::transport::mock::MockTransport;

#[test]
fn mock_transport_write_and_read() {
    let mut m = MockTransport::new();
    m.push_response(common::fixtures::ok_packet());
    m.write(&[0x6F, 0, 0, 0, 0, 0, 0, 0, 0, 0]).unwrap();
    assert_eq!(m.sent.len(), 1);
    let r = m.read(64).unwrap();
    assert_eq!(r.len(), 64);
}

#[test]
fn exhausted_queue_is_transport_error() {
    let mut m = MockTransport::new();
    match m.read(64) {
        Err(e @ Error::Transport(_)) => assert!(e.is_transport()),
        other => panic!("expected Transport error, got {:?}", other),
    }
}

#[test]
fn failed_write_is_not_retried() {
    let mut mock = MockTransport::new();
    mock.set_write_failures(1);
    mock.push_response(common::fixtures::ok_packet());
    let shared = SharedMock::new(mock);
    let mut reader = Reader::new(Box::new(shared.clone()));

    let err = libccid::ntag::read_page(&mut reader, 4).unwrap_err();
    assert!(err.is_transport());
    assert!(shared.sent().is_empty());
    assert!(shared.read_sizes().is_empty());
}
