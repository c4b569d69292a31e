// libccid/src/transport/mock.rs

//! Scripted transport for tests.

use crate::transport::traits::Transport;
use crate::{Error, Result};

/// Mock transport for unit tests. It records written messages and returns
/// queued replies, or one fixed reply forever.
#[derive(Debug, Default)]
pub struct MockTransport {
    /// Every message written, in order
    pub sent: Vec<Vec<u8>>,
    /// Replies returned by reads, front first
    pub responses: Vec<Vec<u8>>,
    /// Reply returned by every read once the queue is empty
    pub fixed_reply: Option<Vec<u8>>,
    /// `max_len` passed to each read, in call order
    pub read_sizes: Vec<usize>,
    /// Testing hook: number of writes that should fail
    pub write_failures: usize,
    /// Transfer limit to report instead of the default
    pub max_transfer: Option<usize>,
}

impl MockTransport {
    /// Empty mock.
    pub fn new() -> Self {
        Self::default()
    }

    /// A transport that answers every command with the same packet.
    pub fn with_fixed_reply(reply: Vec<u8>) -> Self {
        Self {
            fixed_reply: Some(reply),
            ..Self::default()
        }
    }

    /// Queue a reply.
    pub fn push_response(&mut self, resp: Vec<u8>) {
        self.responses.push(resp);
    }

    /// Remove and return the last written message.
    pub fn pop_sent(&mut self) -> Option<Vec<u8>> {
        self.sent.pop()
    }

    /// Set how many subsequent writes should fail (for tests).
    pub fn set_write_failures(&mut self, n: usize) {
        self.write_failures = n;
    }

    /// Report `max` as the transfer limit.
    pub fn set_max_transfer(&mut self, max: usize) {
        self.max_transfer = Some(max);
    }
}

impl Transport for MockTransport {
    fn write(&mut self, data: &[u8]) -> Result<()> {
        if self.write_failures > 0 {
            self.write_failures -= 1;
            return Err(Error::Transport("simulated write failure".into()));
        }
        self.sent.push(data.to_vec());
        Ok(())
    }

    fn read(&mut self, max_len: usize) -> Result<Vec<u8>> {
        self.read_sizes.push(max_len);
        let mut reply = if !self.responses.is_empty() {
            self.responses.remove(0)
        } else if let Some(fixed) = &self.fixed_reply {
            fixed.clone()
        } else {
            return Err(Error::Transport("no queued response".into()));
        };
        // A real endpoint never hands back more than was asked for
        reply.truncate(max_len);
        Ok(reply)
    }

    fn max_transfer_size(&self) -> usize {
        self.max_transfer
            .unwrap_or(crate::constants::MAX_CCID_MESSAGE_LEN)
    }
}
