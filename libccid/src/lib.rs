// libccid/src/lib.rs

//! libccid
//!
//! Pure Rust host driver for USB CCID contactless readers talking to
//! NTAG213 tags: CCID bulk framing, pseudo-APDU encoding and the NTAG213
//! memory map.
#![warn(missing_docs)]

pub mod constants;
/// Reader handle and builder.
pub mod device;
pub mod error;
pub mod ntag;
pub mod prelude;
/// CCID framing and APDU encoding.
pub mod protocol;
pub mod test_support;
/// Byte channels to the reader.
pub mod transport;
pub mod types;
pub mod utils;

// Re-export common types at crate root so `crate::Error`, `crate::Result`,
// and the newtypes in `types` are available for consumers and for
// convenient `prelude` re-exports.
pub use crate::error::*;
pub use crate::types::*;

pub use prelude::*;
