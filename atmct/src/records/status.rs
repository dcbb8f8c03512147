// atmct/src/records/status.rs

//! Trips-left status and fare title expiry.

use derive_more::Display;
use serde::Serialize;

use crate::codec::fields;
use crate::types::Block;

/// Day/month at which the loaded fare title expires.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Serialize)]
#[display(fmt = "{:02}/{:02}", day, month)]
pub struct TitleExpiry {
    /// Day of month
    pub day: u8,
    /// Month
    pub month: u8,
}

/// Remaining-trips status (block 0x150).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Status {
    /// Trips remaining on the title
    pub trips_left: u8,
    /// `None` when the title has no expiry (day field is zero)
    pub title_expiry: Option<TitleExpiry>,
}

impl Status {
    /// Decode block 0x150.
    pub fn decode(block: &Block) -> Self {
        let b = block.logical();
        let day = fields::status_expiry_day(b);
        let title_expiry = (day != 0).then(|| TitleExpiry {
            day,
            month: fields::status_expiry_month(b),
        });
        Self {
            trips_left: fields::status_trips_left(b),
            title_expiry,
        }
    }
}
