// atmct/src/lib.rs

//! atmct
//!
//! Decoder for memory dumps of ATM Camp de Tarragona contactless transit
//! cards: identity, owner, validity, permissions, last validation, status,
//! recharge history and the last ten trips.
#![warn(missing_docs)]

pub mod card;
pub mod codec;
pub mod constants;
pub mod decoder;
pub mod error;
pub mod lookup;
pub mod prelude;
pub mod records;
pub mod report;
pub mod test_support;
pub mod types;
pub mod utils;

// Re-export common types at crate root so `crate::Error`, `crate::Result`,
// and the newtypes in `types` are available for consumers and for
// convenient `prelude` re-exports.
pub use crate::error::*;
pub use crate::types::*;

pub use prelude::*;
