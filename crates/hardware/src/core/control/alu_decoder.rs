//! ALU Decoder.
//!
//! Refines the main decoder's coarse `ALUOp` into a concrete `ALUControl`.
//! For `ALUOp = 10` the choice depends on `funct3`; `funct3 = 000` is
//! subtract only when both `funct7[5]` and `opcode[5]` are set, which limits
//! subtraction to the R-type `sub` (I-type opcodes have bit 5 clear, so an
//! `addi` whose immediate happens to set bit 30 still adds).

use crate::common::DecodeError;
use crate::core::signals::{AluControl, AluOp};
use crate::isa::rv32i::funct3 as f3;

/// Selects the ALU function.
///
/// # Arguments
///
/// * `opcode_b5`  - Bit 5 of the opcode.
/// * `funct3`     - The instruction's `funct3` field.
/// * `funct7_b5`  - Bit 5 of the instruction's `funct7` field.
/// * `alu_op`     - Coarse class from the main decoder.
///
/// # Errors
///
/// Returns [`DecodeError::UnsupportedFunct3`] when `alu_op` defers to a
/// `funct3` that has no ALU function in this subset.
pub const fn decode(
    opcode_b5: bool,
    funct3: u32,
    funct7_b5: bool,
    alu_op: AluOp,
) -> Result<AluControl, DecodeError> {
    match alu_op {
        AluOp::Add => Ok(AluControl::Add),
        AluOp::Subtract => Ok(AluControl::Sub),
        AluOp::Funct => match funct3 {
            f3::ADD_SUB => {
                if funct7_b5 && opcode_b5 {
                    Ok(AluControl::Sub)
                } else {
                    Ok(AluControl::Add)
                }
            }
            f3::SLT => Ok(AluControl::Slt),
            f3::OR => Ok(AluControl::Or),
            f3::AND => Ok(AluControl::And),
            other => Err(DecodeError::UnsupportedFunct3 { funct3: other }),
        },
    }
}
