//! Main Decoder.
//!
//! Maps the 7-bit opcode to the main control vector. The table has exactly six
//! rows; every other opcode is a decode error rather than an all-zero vector.
//!
//! | opcode    | RegWrite | ImmSrc | ALUSrc | MemWrite | ResultSrc | Branch | ALUOp | Jump |
//! |-----------|----------|--------|--------|----------|-----------|--------|-------|------|
//! | `lw`      | 1        | 00     | 1      | 0        | 01        | 0      | 00    | 0    |
//! | `sw`      | 0        | 01     | 1      | 1        | 00        | 0      | 00    | 0    |
//! | R-type    | 1        | xx     | 0      | 0        | 00        | 0      | 10    | 0    |
//! | `beq`     | 0        | 10     | 0      | 0        | 00        | 1      | 01    | 0    |
//! | I-type    | 1        | 00     | 1      | 0        | 00        | 0      | 10    | 0    |
//! | `jal`     | 1        | 11     | 0      | 0        | 10        | 0      | 00    | 1    |
//!
//! The R-type `ImmSrc` is unused (`ALUSrc = 0`) and is fixed to `00`.

use crate::common::DecodeError;
use crate::core::signals::{AluOp, ImmSrc, MainSignals, ResultSrc};
use crate::isa::rv32i::opcodes;

/// Decodes a major opcode into the main control vector.
///
/// # Errors
///
/// Returns [`DecodeError::UnsupportedOpcode`] for opcodes outside the table.
pub const fn decode(opcode: u32) -> Result<MainSignals, DecodeError> {
    let signals = match opcode {
        opcodes::OP_LOAD => MainSignals {
            reg_write: true,
            imm_src: ImmSrc::I,
            alu_src: true,
            mem_write: false,
            result_src: ResultSrc::Memory,
            branch: false,
            alu_op: AluOp::Add,
            jump: false,
        },
        opcodes::OP_STORE => MainSignals {
            reg_write: false,
            imm_src: ImmSrc::S,
            alu_src: true,
            mem_write: true,
            result_src: ResultSrc::Alu,
            branch: false,
            alu_op: AluOp::Add,
            jump: false,
        },
        opcodes::OP_REG => MainSignals {
            reg_write: true,
            imm_src: ImmSrc::I,
            alu_src: false,
            mem_write: false,
            result_src: ResultSrc::Alu,
            branch: false,
            alu_op: AluOp::Funct,
            jump: false,
        },
        opcodes::OP_BRANCH => MainSignals {
            reg_write: false,
            imm_src: ImmSrc::B,
            alu_src: false,
            mem_write: false,
            result_src: ResultSrc::Alu,
            branch: true,
            alu_op: AluOp::Subtract,
            jump: false,
        },
        opcodes::OP_IMM => MainSignals {
            reg_write: true,
            imm_src: ImmSrc::I,
            alu_src: true,
            mem_write: false,
            result_src: ResultSrc::Alu,
            branch: false,
            alu_op: AluOp::Funct,
            jump: false,
        },
        opcodes::OP_JAL => MainSignals {
            reg_write: true,
            imm_src: ImmSrc::J,
            alu_src: false,
            mem_write: false,
            result_src: ResultSrc::PcPlus4,
            branch: false,
            alu_op: AluOp::Add,
            jump: true,
        },
        other => return Err(DecodeError::UnsupportedOpcode(other)),
    };
    Ok(signals)
}
