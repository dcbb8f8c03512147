// atmct/src/report.rs

//! Plain-text rendering of a decoded card.
//!
//! Codes are turned into names here, through the injected [`Resolvers`],
//! and nowhere else.

use std::fmt::{self, Write};

use crate::Result;
use crate::card::Card;
use crate::codec::checksum;
use crate::decoder::DecodedCard;
use crate::lookup::Resolvers;
use crate::records::{Checked, Slot};
use crate::utils::{bytes_to_bin, bytes_to_hex_spaced};

const VERIFIED_NOTE: &str = " - checksum verified";

/// Human-readable summary of every record on the card.
pub fn render(card: &DecodedCard, names: &Resolvers) -> String {
    let mut out = String::new();
    // write! never fails writing to a String
    let _ = write_summary(&mut out, card, names);
    out
}

/// Walk `blocks` data blocks from address 0 and print each one in logical
/// order, as hex and as a bit string.
pub fn raw_dump(card: &Card, blocks: usize) -> Result<String> {
    let mut out = String::new();
    for (address, block) in card.walk(0).take_blocks(blocks)? {
        let logical = block.logical().to_array();
        let flag = if checksum::verify(&block) { "ok" } else { "--" };
        let _ = writeln!(
            out,
            "{:#05x} [{}] {}\n      {}",
            address,
            flag,
            bytes_to_hex_spaced(&logical),
            bytes_to_bin(&logical)
        );
    }
    Ok(out)
}

fn note<T>(checked: &Checked<T>) -> &'static str {
    if checked.verified() { VERIFIED_NOTE } else { "" }
}

fn write_summary(out: &mut String, card: &DecodedCard, names: &Resolvers) -> fmt::Result {
    writeln!(out, "Card: {}", card.identity.formatted_number())?;
    writeln!(out, "      {}", card.identity.secondary.record)?;
    match card.owner_name() {
        Some(name) => writeln!(out, "Owner: {}", name)?,
        None => writeln!(out, "Owner: anonymous card")?,
    }
    writeln!(out, "Expiry: {}", card.validity.record.expiry())?;
    let p = &card.permissions.record;
    writeln!(out, "P: {} EA: {} M: {:04}", p.p, p.ea, p.m)?;
    writeln!(out)?;

    let v = &card.last_validation.record;
    writeln!(
        out,
        "Last validation: {} {} with {} from {} ({}) zone {}{}",
        v.date,
        v.time,
        names.operator(v.operator),
        names.stop(v.stop),
        names.line(v.line),
        v.zone,
        note(&card.last_validation)
    )?;
    writeln!(out)?;

    let s = &card.status.record;
    let expiry = match s.title_expiry {
        Some(e) => e.to_string(),
        None => "no expiry".to_string(),
    };
    writeln!(
        out,
        "Status: {} trip(s) left, title expiry {}{}",
        s.trips_left,
        expiry,
        note(&card.status)
    )?;
    writeln!(out)?;

    writeln!(out, "Recharges:")?;
    for (i, slot) in card.recharges.iter().enumerate() {
        match &slot.record {
            Slot::Present(r) => writeln!(
                out,
                "  {}. {} {}{}",
                i + 1,
                r.date,
                names.title(r.title_code),
                note(slot)
            )?,
            Slot::Absent => writeln!(out, "  {}. empty", i + 1)?,
        }
    }
    writeln!(out)?;

    writeln!(out, "Last validations:")?;
    for (i, slot) in card.trips.iter().enumerate() {
        let Slot::Present(checked) = slot else {
            continue;
        };
        let t = &checked.record;
        writeln!(
            out,
            "  {}. {} {} {} from {} ({}) vehicle {} zone {} transfer {}{}",
            i + 1,
            names.operator(t.operator),
            t.date,
            t.time,
            names.stop(t.stop),
            names.line(t.line),
            t.vehicle,
            t.zone,
            if t.is_transfer { "yes" } else { "no" },
            note(checked)
        )?;
    }
    Ok(())
}
