// atmct/src/constants.rs
//! Memory layout constants for the 1024-byte card image

/// Total size of a card memory image in bytes
pub const CARD_LEN: usize = 1024;

/// Size of one addressable block
pub const BLOCK_LEN: usize = 16;

/// Size of one sector (4 blocks, the last one being the trailer)
pub const SECTOR_LEN: usize = 64;

/// Number of sectors on the card
pub const SECTOR_COUNT: usize = CARD_LEN / SECTOR_LEN;

/// Payload bytes per block in storage order; byte 15 holds the checksum
pub const PAYLOAD_LEN: usize = 15;

/// Storage index of the checksum byte (logical byte 0)
pub const CHECKSUM_INDEX: usize = 15;

/// Card number block (primary id)
pub const IDENTITY_ADDR: usize = 0x00;
/// Secondary id block
pub const SECONDARY_ID_ADDR: usize = 0x10;

/// First of the owner name blocks
pub const OWNER_ADDR: usize = 0x80;
/// Number of owner name lines
pub const OWNER_LINES: usize = 3;

/// Validity window; also carries the base year
pub const VALIDITY_ADDR: usize = 0xC0;
/// Permission codes
pub const PERMISSIONS_ADDR: usize = 0xD0;
/// Most recent validation
pub const LAST_VALIDATION_ADDR: usize = 0x100;
/// Trips left and title expiry
pub const STATUS_ADDR: usize = 0x150;

/// Start of the walked recharge history
pub const RECHARGE_ADDR: usize = 0x240;
/// Recharge history length
pub const RECHARGE_SLOTS: usize = 3;

/// Start of the walked trip history
pub const TRIP_ADDR: usize = 0x2C0;
/// Trip history length
pub const TRIP_SLOTS: usize = 10;

/// Years in the validity record are stored relative to this
pub const BASE_YEAR_EPOCH: u16 = 1900;

/// Number of data blocks on a card once trailers are skipped
pub const DATA_BLOCK_COUNT: usize = SECTOR_COUNT * 3;
