//! RV32I Instruction Decoder.
//!
//! Splits a 32-bit word into its fixed fields and classifies its format. The
//! immediate is not produced here: it depends on the `ImmSrc` control signal
//! and is built by [`imm_gen`](crate::core::units::imm_gen).

use crate::common::DecodeError;
use crate::isa::instruction::{Decoded, InstructionBits, InstructionFormat};

/// Decodes a RISC-V instruction into its component fields.
///
/// # Arguments
///
/// * `inst` - The 32-bit instruction encoding to decode
///
/// # Errors
///
/// Returns [`DecodeError::UnsupportedOpcode`] when the opcode is outside the
/// supported subset.
pub fn decode(inst: u32) -> Result<Decoded, DecodeError> {
    let opcode = inst.opcode();
    Ok(Decoded {
        raw: inst,
        format: InstructionFormat::from_opcode(opcode)?,
        opcode,
        rd: inst.rd(),
        rs1: inst.rs1(),
        rs2: inst.rs2(),
        funct3: inst.funct3(),
        funct7: inst.funct7(),
    })
}
