// atmct/src/records/validation.rs

//! Last validation record and the date/time stamp it shares with trips.

use serde::Serialize;

use crate::codec::fields;
use crate::types::{BaseYear, Block, CardDate, Logical, TimeOfDay};

/// Most recent validation (block 0x100).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LastValidation {
    /// Validation date
    pub date: CardDate,
    /// Validation time
    pub time: TimeOfDay,
    /// Fare zone
    pub zone: u8,
    /// Stop code
    pub stop: u16,
    /// Operator code
    pub operator: u8,
    /// Line code
    pub line: u16,
}

impl LastValidation {
    /// Decode block 0x100 against the card base year.
    pub fn decode(block: &Block, base: BaseYear) -> Self {
        let b = block.logical();
        Self {
            date: stamp_date(b, base),
            time: stamp_time(b),
            zone: fields::validation_zone(b),
            stop: fields::validation_stop(b),
            operator: fields::validation_operator(b),
            line: fields::validation_line(b),
        }
    }
}

/// Date of a validation stamp; shared with trips.
pub(crate) fn stamp_date(b: Logical<'_>, base: BaseYear) -> CardDate {
    CardDate::new(
        fields::stamp_day(b),
        fields::stamp_month(b),
        base.resolve(fields::stamp_year_offset(b)),
    )
}

pub(crate) fn stamp_time(b: Logical<'_>) -> TimeOfDay {
    TimeOfDay::new(fields::stamp_hours(b), fields::stamp_minutes(b))
}
