//! RV32I Function Codes (funct7).
//!
//! The `funct7` field (bits 31-25) separates the standard and alternate
//! encodings of an R-type operation. Only bit 5 is significant for this
//! subset: it turns `add` into `sub`.

/// Standard encoding (`ADD`, `AND`, `OR`, `SLT`).
pub const DEFAULT: u32 = 0b0000000;

/// Alternate encoding (`SUB`).
pub const SUB: u32 = 0b0100000;
