//! Test support helpers intended for use by unit and integration tests.
//!
//! These helpers build the bulk-in packets a reader would return and let a
//! test keep looking at a MockTransport after a Reader has taken ownership.
#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use crate::constants::{CCID_HEADER_LEN, CCID_PACKET_LEN, RDR_TO_PC_DATA_BLOCK};
use crate::transport::mock::MockTransport;
use crate::transport::Transport;
use crate::Result;

/// Build a 64-byte `RDR_to_PC_DataBlock` packet carrying `body ++ [sw1, sw2]`.
/// Bytes past the payload are zero padding.
#[doc(hidden)]
pub fn reply_packet(body: &[u8], sw1: u8, sw2: u8) -> Vec<u8> {
    let mut payload = body.to_vec();
    payload.push(sw1);
    payload.push(sw2);
    raw_packet(&payload, payload.len() as u32)
}

/// Build a 64-byte packet with an arbitrary dwLength field. `payload` is
/// copied verbatim after the header regardless of `data_length`.
#[doc(hidden)]
pub fn raw_packet(payload: &[u8], data_length: u32) -> Vec<u8> {
    let mut raw = Vec::with_capacity(CCID_PACKET_LEN.max(CCID_HEADER_LEN + payload.len()));
    raw.push(RDR_TO_PC_DATA_BLOCK);
    raw.extend_from_slice(&data_length.to_le_bytes());
    // slot, seq, status, error, RFU(2)
    raw.extend_from_slice(&[0x00; 5]);
    raw.extend_from_slice(payload);
    if raw.len() < CCID_PACKET_LEN {
        raw.resize(CCID_PACKET_LEN, 0x00);
    }
    raw
}

/// MockTransport shared between a Reader and the test that inspects it.
#[doc(hidden)]
#[derive(Clone, Default)]
pub struct SharedMock {
    inner: Rc<RefCell<MockTransport>>,
}

impl SharedMock {
    /// Share `mock`.
    pub fn new(mock: MockTransport) -> Self {
        Self {
            inner: Rc::new(RefCell::new(mock)),
        }
    }

    /// Queue a reply.
    pub fn push_response(&self, resp: Vec<u8>) {
        self.inner.borrow_mut().push_response(resp);
    }

    /// Messages written so far.
    pub fn sent(&self) -> Vec<Vec<u8>> {
        self.inner.borrow().sent.clone()
    }

    /// `max_len` of each read so far.
    pub fn read_sizes(&self) -> Vec<usize> {
        self.inner.borrow().read_sizes.clone()
    }
}

impl Transport for SharedMock {
    fn write(&mut self, data: &[u8]) -> Result<()> {
        self.inner.borrow_mut().write(data)
    }

    fn read(&mut self, max_len: usize) -> Result<Vec<u8>> {
        self.inner.borrow_mut().read(max_len)
    }

    fn max_transfer_size(&self) -> usize {
        self.inner.borrow().max_transfer_size()
    }
}

/// Build a Reader over a MockTransport pre-seeded with `packets`.
#[doc(hidden)]
pub fn mock_reader(packets: Vec<Vec<u8>>) -> (crate::device::Reader, SharedMock) {
    let shared = SharedMock::new(MockTransport::new());
    for p in packets {
        shared.push_response(p);
    }
    (crate::device::Reader::new(Box::new(shared.clone())), shared)
}
