//! Utilities for atmct: small, reusable helpers used across the crate.

pub mod hex;

pub use hex::*;
