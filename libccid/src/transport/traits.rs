// libccid/src/transport/traits.rs

use crate::Result;
use crate::constants::MAX_CCID_MESSAGE_LEN;

/// Transport trait abstracts the bulk endpoint pair away from the codec.
///
/// Both calls block; whatever timeout applies is the implementation's
/// business. Callers issue exactly one `write` followed by one `read` per
/// command and never retry.
pub trait Transport {
    /// Write one complete message to the bulk-out endpoint
    fn write(&mut self, data: &[u8]) -> Result<()>;

    /// Read one packet of at most `max_len` bytes from the bulk-in endpoint
    fn read(&mut self, max_len: usize) -> Result<Vec<u8>>;

    /// Largest message accepted by `write`, header included
    fn max_transfer_size(&self) -> usize {
        MAX_CCID_MESSAGE_LEN
    }
}
