// atmct/src/records/identity.rs

//! Card number and secondary id.

use serde::Serialize;

use super::Checked;
use crate::codec::fields;
use crate::constants::{IDENTITY_ADDR, SECONDARY_ID_ADDR};
use crate::types::Block;

/// Card number (0x00) and secondary id (0x10).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardIdentity {
    /// Printed card number
    pub number: Checked<u32>,
    /// Secondary id as hex digits
    pub secondary: Checked<String>,
}

impl CardIdentity {
    /// Decode from the blocks at 0x00 and 0x10.
    pub fn decode(primary: &Block, secondary: &Block) -> Self {
        let number = fields::card_number(primary.logical());
        Self {
            number: Checked::from_block(IDENTITY_ADDR, primary, number),
            secondary: Checked::from_block(
                SECONDARY_ID_ADDR,
                secondary,
                fields::secondary_id(secondary),
            ),
        }
    }

    /// Printed card number: 10 zero-padded digits, `X`-padded to 12,
    /// grouped by four (`0012-3456-78XX`).
    pub fn formatted_number(&self) -> String {
        let digits = format!("{:0>10}{:X<2}", self.number.record, "");
        format!("{}-{}-{}", &digits[..4], &digits[4..8], &digits[8..])
    }
}
