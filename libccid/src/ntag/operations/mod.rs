/// PWD_AUTH.
pub mod auth;
/// READ BINARY and GET DATA based reads.
pub mod read;
/// UPDATE BINARY based writes.
pub mod write;

// Re-export so callers can use `crate::ntag::operations::read_page(...)`.
pub use auth::authenticate;
pub use read::{read_bytes, read_dynamic_lock_bytes, read_page, read_uid};
pub use write::write_page;
