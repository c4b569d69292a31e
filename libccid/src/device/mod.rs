// libccid/src/device/mod.rs

/// Configured construction of a [`Reader`].
pub mod builder;
/// The [`Reader`] command loop.
pub mod handle;

pub use builder::ReaderBuilder;
pub use handle::Reader;
