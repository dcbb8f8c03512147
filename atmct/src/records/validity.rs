// atmct/src/records/validity.rs

//! Validity window, the source of the card base year.

use serde::Serialize;

use crate::codec::fields;
use crate::types::{BaseYear, Block, CardDate};

/// Validity window (block 0xC0). Sole producer of the [`BaseYear`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Validity {
    /// Expiry day
    pub day: u8,
    /// Expiry month
    pub month: u8,
    /// Years of validity added to the base year
    pub sum_years: u8,
    /// Issuance year
    pub base_year: BaseYear,
    /// `base_year + sum_years`
    pub expire_year: u16,
}

impl Validity {
    /// Decode block 0xC0.
    pub fn decode(block: &Block) -> Self {
        let b = block.logical();
        let base_year = BaseYear::new(fields::validity_base_year(b));
        let sum_years = fields::validity_sum_years(b);
        Self {
            day: fields::validity_day(b),
            month: fields::validity_month(b),
            sum_years,
            base_year,
            expire_year: base_year.resolve(sum_years),
        }
    }

    /// Full expiry date.
    pub fn expiry(&self) -> CardDate {
        CardDate::new(self.day, self.month, self.expire_year)
    }
}
