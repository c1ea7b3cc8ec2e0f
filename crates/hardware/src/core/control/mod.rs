//! Controller.
//!
//! Composes the [`main_decoder`] and the [`alu_decoder`] into the full
//! per-cycle [`ControlSignals`] vector. The branch/jump select that depends on
//! the ALU's zero flag is [`ControlSignals::pc_src`].

/// Opcode to main control vector.
pub mod main_decoder;

/// `ALUOp`/`funct` fields to ALU function.
pub mod alu_decoder;

use crate::common::DecodeError;
use crate::core::signals::ControlSignals;
use crate::isa::instruction::InstructionBits;

/// The processor's control unit.
///
/// Stateless: every call derives the signals from the instruction alone.
#[derive(Clone, Copy, Debug, Default)]
pub struct Controller;

impl Controller {
    /// Derives the control vector for one instruction.
    ///
    /// # Errors
    ///
    /// Propagates [`DecodeError`] from either decoder; no partial vector is
    /// produced.
    pub fn decode(instruction: u32) -> Result<ControlSignals, DecodeError> {
        let main = main_decoder::decode(instruction.opcode())?;
        let alu_control = alu_decoder::decode(
            instruction.opcode_b5(),
            instruction.funct3(),
            instruction.funct7_b5(),
            main.alu_op,
        )?;
        Ok(ControlSignals::new(main, alu_control))
    }
}
