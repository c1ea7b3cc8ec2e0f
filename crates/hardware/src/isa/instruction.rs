//! Instruction encoding and field extraction.
//!
//! Provides bit extraction for the fixed RV32I fields and the classification
//! of a word into one of the five encodings the core supports.

use crate::common::DecodeError;
use crate::isa::rv32i::opcodes;

/// Bit mask for extracting the opcode field (bits 0-6).
pub const OPCODE_MASK: u32 = 0x7F;
/// Bit mask for extracting a 5-bit register field.
pub const REG_MASK: u32 = 0x1F;
/// Bit mask for extracting the funct3 field (bits 12-14).
pub const FUNCT3_MASK: u32 = 0x7;
/// Bit mask for extracting the funct7 field (bits 25-31).
pub const FUNCT7_MASK: u32 = 0x7F;

/// Trait for extracting instruction fields from encoded instructions.
///
/// Every field sits at a fixed position regardless of format, so extraction
/// never fails; whether a field is meaningful depends on the format.
pub trait InstructionBits {
    /// Extracts the opcode field (bits 0-6).
    fn opcode(&self) -> u32;

    /// Extracts the destination register field (bits 7-11).
    ///
    /// Register 0 (x0) is hardwired to zero and writes to it are ignored.
    fn rd(&self) -> usize;

    /// Extracts the first source register field (bits 15-19).
    fn rs1(&self) -> usize;

    /// Extracts the second source register field (bits 20-24).
    fn rs2(&self) -> usize;

    /// Extracts the funct3 field (bits 12-14).
    fn funct3(&self) -> u32;

    /// Extracts the funct7 field (bits 25-31).
    fn funct7(&self) -> u32;

    /// Bit 5 of `funct7` (instruction bit 30), set for `sub`.
    fn funct7_b5(&self) -> bool;

    /// Bit 5 of the opcode, set for register-register and store encodings.
    ///
    /// The ALU decoder uses it to keep `addi` from ever selecting subtract.
    fn opcode_b5(&self) -> bool;
}

impl InstructionBits for u32 {
    #[inline(always)]
    fn opcode(&self) -> u32 {
        self & OPCODE_MASK
    }

    #[inline(always)]
    fn rd(&self) -> usize {
        ((self >> 7) & REG_MASK) as usize
    }

    #[inline(always)]
    fn rs1(&self) -> usize {
        ((self >> 15) & REG_MASK) as usize
    }

    #[inline(always)]
    fn rs2(&self) -> usize {
        ((self >> 20) & REG_MASK) as usize
    }

    #[inline(always)]
    fn funct3(&self) -> u32 {
        (self >> 12) & FUNCT3_MASK
    }

    #[inline(always)]
    fn funct7(&self) -> u32 {
        (self >> 25) & FUNCT7_MASK
    }

    #[inline(always)]
    fn funct7_b5(&self) -> bool {
        (self >> 30) & 1 == 1
    }

    #[inline(always)]
    fn opcode_b5(&self) -> bool {
        (self >> 5) & 1 == 1
    }
}

/// Instruction encoding, determined solely by the opcode.
///
/// U-type is absent: no supported instruction uses it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum InstructionFormat {
    /// Register-register (`add`, `sub`, `and`, `or`, `slt`).
    R,
    /// 12-bit immediate (`lw`, `addi`, `andi`, `ori`, `slti`).
    I,
    /// Split store immediate (`sw`).
    S,
    /// Split branch offset (`beq`).
    B,
    /// Jump offset (`jal`).
    J,
}

impl InstructionFormat {
    /// Classifies a major opcode.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::UnsupportedOpcode`] for any opcode outside the
    /// supported subset.
    pub const fn from_opcode(opcode: u32) -> Result<Self, DecodeError> {
        match opcode {
            opcodes::OP_REG => Ok(Self::R),
            opcodes::OP_LOAD | opcodes::OP_IMM => Ok(Self::I),
            opcodes::OP_STORE => Ok(Self::S),
            opcodes::OP_BRANCH => Ok(Self::B),
            opcodes::OP_JAL => Ok(Self::J),
            other => Err(DecodeError::UnsupportedOpcode(other)),
        }
    }
}

/// Decoded instruction structure containing all extracted fields.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Decoded {
    /// Raw 32-bit instruction encoding.
    pub raw: u32,
    /// Encoding family.
    pub format: InstructionFormat,
    /// Extracted opcode field.
    pub opcode: u32,
    /// Destination register index.
    pub rd: usize,
    /// First source register index.
    pub rs1: usize,
    /// Second source register index.
    pub rs2: usize,
    /// Function code field 3.
    pub funct3: u32,
    /// Function code field 7.
    pub funct7: u32,
}
