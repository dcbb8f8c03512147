// atmct/src/prelude.rs

//! Common re-exports: `use atmct::prelude::*;`

pub use crate::card::{Card, SectorWalker};
pub use crate::decoder::{DecodedCard, decode};
pub use crate::lookup::{Fallback, Lookup, NameTable, Resolvers};
pub use crate::records::{
    CardIdentity, Checked, LastValidation, Permissions, Recharge, Slot, Status, TitleExpiry, Trip,
    Validity,
};
pub use crate::{BaseYear, Block, CardDate, Error, Logical, Result, TimeOfDay};
