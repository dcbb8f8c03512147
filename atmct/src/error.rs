// atmct/src/error.rs

//! Error type shared by the whole crate.

use thiserror::Error;

/// Common error type
#[derive(Error, Debug)]
pub enum Error {
    /// Input is not a whole card (or block) image.
    #[error("malformed input: expected {expected} bytes, got {actual}")]
    MalformedInput {
        /// Required length
        expected: usize,
        /// Length received
        actual: usize,
    },

    /// A block read or walk ran past the end of the card.
    #[error(
        "block read out of range at {offset:#05x}: requested {requested} block(s), {available} available"
    )]
    OutOfRange {
        /// Address the read started from
        offset: usize,
        /// Blocks asked for
        requested: usize,
        /// Blocks that could have been read
        available: usize,
    },

    // Advisory only; the decoder records a flag instead of returning this.
    /// Stored checksum byte differs from the computed one.
    #[error("checksum mismatch at block {address:#05x}: expected {expected:#04x}, got {actual:#04x}")]
    ChecksumMismatch {
        /// Block address
        address: usize,
        /// Computed checksum
        expected: u8,
        /// Checksum found on the card
        actual: u8,
    },

    /// Reading a dump or lookup file failed.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// A lookup table is not a JSON array of id/name entries.
    #[error("lookup table format error: {0}")]
    LookupFormat(#[from] serde_json::Error),
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, Error>;
