//! Immediate Extractor.
//!
//! Builds the sign-extended 32-bit immediate for the format chosen by
//! `ImmSrc`. Instruction bit 31 is the sign bit for every format; branch and
//! jump offsets carry an implicit zero LSB, doubling the encoded value.

use crate::common::DecodeError;
use crate::core::signals::ImmSrc;

/// Total width of an instruction in bits.
const INSTRUCTION_WIDTH: u32 = 32;

/// Shift for the I-type immediate (bits 31:20).
const I_IMM_SHIFT: u32 = 20;

/// S-type immediate: bits 11:7 hold imm[4:0], bits 31:25 hold imm[11:5].
const S_IMM_LOW_SHIFT: u32 = 7;
const S_IMM_LOW_MASK: u32 = 0x1F;
const S_IMM_HIGH_SHIFT: u32 = 25;
const S_IMM_HIGH_MASK: u32 = 0x7F;
const S_IMM_BITS: u32 = 12;

/// B-type immediate: `{bit31, bit7, bits30:25, bits11:8, 0}`.
const B_IMM_BITS: u32 = 13;

/// J-type immediate: `{bit31, bits19:12, bit20, bits30:21, 0}`.
const J_IMM_BITS: u32 = 21;

/// Extends the immediate of `instruction` in the given format.
///
/// # Arguments
///
/// * `instruction` - Raw instruction word; only bits 31:7 are used.
/// * `imm_src`     - Immediate format.
pub const fn extend(instruction: u32, imm_src: ImmSrc) -> u32 {
    match imm_src {
        ImmSrc::I => ((instruction as i32) >> I_IMM_SHIFT) as u32,
        ImmSrc::S => {
            let low = (instruction >> S_IMM_LOW_SHIFT) & S_IMM_LOW_MASK;
            let high = (instruction >> S_IMM_HIGH_SHIFT) & S_IMM_HIGH_MASK;
            sign_extend((high << 5) | low, S_IMM_BITS)
        }
        ImmSrc::B => {
            let bit_12 = (instruction >> 31) & 1;
            let bit_11 = (instruction >> 7) & 1;
            let bits_10_5 = (instruction >> 25) & 0x3F;
            let bits_4_1 = (instruction >> 8) & 0xF;
            let combined = (bit_12 << 12) | (bit_11 << 11) | (bits_10_5 << 5) | (bits_4_1 << 1);
            sign_extend(combined, B_IMM_BITS)
        }
        ImmSrc::J => {
            let bit_20 = (instruction >> 31) & 1;
            let bits_19_12 = (instruction >> 12) & 0xFF;
            let bit_11 = (instruction >> 20) & 1;
            let bits_10_1 = (instruction >> 21) & 0x3FF;
            let combined =
                (bit_20 << 20) | (bits_19_12 << 12) | (bit_11 << 11) | (bits_10_1 << 1);
            sign_extend(combined, J_IMM_BITS)
        }
    }
}

/// Extends an immediate given the raw 2-bit `ImmSrc` selector.
///
/// # Errors
///
/// Returns [`DecodeError::InvalidImmSrc`] for selectors above `0b11`.
pub const fn extend_bits(instruction: u32, imm_src: u32) -> Result<u32, DecodeError> {
    match ImmSrc::from_bits(imm_src) {
        Ok(src) => Ok(extend(instruction, src)),
        Err(e) => Err(e),
    }
}

/// Sign extends the low `bits` of `val` to a full word.
const fn sign_extend(val: u32, bits: u32) -> u32 {
    let shift = INSTRUCTION_WIDTH - bits;
    (((val << shift) as i32) >> shift) as u32
}
