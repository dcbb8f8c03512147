// atmct/src/decoder.rs

//! Card decoder: drives the block reads and the sector walker over a
//! [`Card`] and assembles every record into a [`DecodedCard`].
//!
//! The validity record is decoded before anything dated, since trips,
//! recharges and the last validation only store a year offset from its
//! base year.

use serde::Serialize;

use crate::Result;
use crate::card::Card;
use crate::constants::{
    BLOCK_LEN, IDENTITY_ADDR, LAST_VALIDATION_ADDR, OWNER_ADDR, OWNER_LINES, PERMISSIONS_ADDR,
    RECHARGE_ADDR, RECHARGE_SLOTS, SECONDARY_ID_ADDR, STATUS_ADDR, TRIP_ADDR, TRIP_SLOTS,
    VALIDITY_ADDR,
};
use crate::records::owner::{self, OwnerLine};
use crate::records::{
    CardIdentity, Checked, LastValidation, Permissions, Recharge, Slot, Status, Trip, Validity,
};
use crate::types::{BaseYear, Block};

/// Every record decoded from one card image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DecodedCard {
    /// Card number and secondary id
    pub identity: CardIdentity,
    /// Owner name lines, one per block from 0x80
    pub owner: Vec<OwnerLine>,
    /// Validity window and base year
    pub validity: Checked<Validity>,
    /// Raw permission codes
    pub permissions: Checked<Permissions>,
    /// Most recent validation
    pub last_validation: Checked<LastValidation>,
    /// Trips left and title expiry
    pub status: Checked<Status>,
    /// Recharge slots in walk order; always three entries
    pub recharges: Vec<Checked<Slot<Recharge>>>,
    /// Trip slots in walk order; always ten entries
    pub trips: Vec<Slot<Checked<Trip>>>,
}

/// Decode a raw dump. Fails only when `bytes` is not exactly 1024 bytes long.
pub fn decode(bytes: &[u8]) -> Result<DecodedCard> {
    let card = Card::try_from(bytes)?;
    DecodedCard::from_card(&card)
}

impl DecodedCard {
    /// Decode every record of `card`. Checksum mismatches are recorded on
    /// the records, not returned as errors.
    pub fn from_card(card: &Card) -> Result<Self> {
        let identity = CardIdentity::decode(
            &card.block_at(IDENTITY_ADDR)?,
            &card.block_at(SECONDARY_ID_ADDR)?,
        );
        note(&identity.number);
        note(&identity.secondary);
        log::debug!("card number {}", identity.formatted_number());

        let owner = (0..OWNER_LINES)
            .map(|i| -> Result<OwnerLine> {
                let address = OWNER_ADDR + i * BLOCK_LEN;
                let line = owner::decode_line(address, &card.block_at(address)?);
                note(&line);
                Ok(line)
            })
            .collect::<Result<Vec<_>>>()?;

        let validity = read_checked(card, VALIDITY_ADDR, Validity::decode)?;
        let base = validity.record.base_year;
        log::debug!(
            "validity: base year {}, expires {}",
            base,
            validity.record.expiry()
        );

        let permissions = read_checked(card, PERMISSIONS_ADDR, Permissions::decode)?;
        let last_validation = read_checked(card, LAST_VALIDATION_ADDR, |b| {
            LastValidation::decode(b, base)
        })?;
        let status = read_checked(card, STATUS_ADDR, Status::decode)?;

        let recharges: Vec<_> = card
            .walk(RECHARGE_ADDR)
            .take_blocks(RECHARGE_SLOTS)?
            .iter()
            .map(|(address, block)| Recharge::decode_slot(*address, block, base))
            .inspect(note)
            .collect();

        let trips: Vec<_> = card
            .walk(TRIP_ADDR)
            .take_blocks(TRIP_SLOTS)?
            .iter()
            .map(|(address, block)| Trip::decode_slot(*address, block, base))
            .collect();
        trips.iter().filter_map(Slot::present).for_each(note);

        log::debug!(
            "decoded {} recharge(s), {} trip(s)",
            recharges.iter().filter(|r| !r.record.is_absent()).count(),
            trips.iter().filter(|t| !t.is_absent()).count()
        );

        Ok(Self {
            identity,
            owner,
            validity,
            permissions,
            last_validation,
            status,
            recharges,
            trips,
        })
    }

    /// Base year all dated records were resolved against.
    pub fn base_year(&self) -> BaseYear {
        self.validity.record.base_year
    }

    /// Owner lines joined by spaces; `None` for an anonymous card.
    pub fn owner_name(&self) -> Option<String> {
        owner::full_name(&self.owner)
    }

    /// Recharges that were actually written, in slot order.
    pub fn present_recharges(&self) -> impl Iterator<Item = &Recharge> + '_ {
        self.recharges.iter().filter_map(|r| r.record.present())
    }

    /// Trips that were actually written, in slot order.
    pub fn present_trips(&self) -> impl Iterator<Item = &Checked<Trip>> + '_ {
        self.trips.iter().filter_map(Slot::present)
    }

    /// Addresses of decoded blocks whose checksum did not verify.
    pub fn unverified_addresses(&self) -> Vec<usize> {
        let mut out = Vec::new();
        let mut push = |address: usize, verified: bool| {
            if !verified {
                out.push(address);
            }
        };
        push(self.identity.number.address, self.identity.number.verified());
        push(
            self.identity.secondary.address,
            self.identity.secondary.verified(),
        );
        for line in &self.owner {
            push(line.address, line.verified());
        }
        push(self.validity.address, self.validity.verified());
        push(self.permissions.address, self.permissions.verified());
        push(self.last_validation.address, self.last_validation.verified());
        push(self.status.address, self.status.verified());
        for r in &self.recharges {
            push(r.address, r.verified());
        }
        for t in self.present_trips() {
            push(t.address, t.verified());
        }
        out
    }
}

fn read_checked<T>(
    card: &Card,
    address: usize,
    decode: impl FnOnce(&Block) -> T,
) -> Result<Checked<T>> {
    let block = card.block_at(address)?;
    let checked = Checked::from_block(address, &block, decode(&block));
    note(&checked);
    Ok(checked)
}

fn note<T>(checked: &Checked<T>) {
    if !checked.verified() {
        log::debug!(
            "checksum mismatch at {:#05x}: stored {:#04x}, computed {:#04x}",
            checked.address,
            checked.stored,
            checked.computed
        );
    }
}
