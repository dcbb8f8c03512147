// atmct/src/records/permissions.rs

//! Raw permission codes.

use serde::Serialize;

use crate::codec::fields;
use crate::types::Block;

/// Permission codes (block 0xD0). Their meaning is not documented by the
/// issuer; they are reported raw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Permissions {
    /// P code, 5 bits
    pub p: u8,
    /// EA code, 5 bits
    pub ea: u8,
    /// M code, printed zero-padded to 4 digits
    pub m: u16,
}

impl Permissions {
    /// Decode block 0xD0.
    pub fn decode(block: &Block) -> Self {
        let b = block.logical();
        Self {
            p: fields::permission_p(b),
            ea: fields::permission_ea(b),
            m: fields::permission_m(b),
        }
    }
}
