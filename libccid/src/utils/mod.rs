//! Utilities for libccid: small, reusable helpers used across the crate.

/// Hex formatting and parsing.
pub mod hex;

pub use hex::*;
