// libccid/src/ntag/mod.rs

//! NTAG213 tag operations on top of a [`Reader`](crate::device::Reader).

mod dump;
/// Dynamic lock page repair.
pub mod lock;
/// NTAG213 address map.
pub mod memory;
/// Page-level reads, writes and authentication.
pub mod operations;

pub use dump::{TagDump, dump_memory};
pub use lock::DynamicLockBytes;
pub use memory::{Region, classify};
pub use operations::{
    authenticate, read_bytes, read_dynamic_lock_bytes, read_page, read_uid, write_page,
};
