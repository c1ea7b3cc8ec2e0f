//! RV32I Major Opcodes.
//!
//! Defines the major opcodes (bits 6-0) of the six instruction classes the
//! main decoder recognises. Every other opcode is a decode error.

/// Load word (`LW`).
pub const OP_LOAD: u32 = 0b0000011;

/// Immediate arithmetic (`ADDI`, `ANDI`, `ORI`, `SLTI`).
pub const OP_IMM: u32 = 0b0010011;

/// Store word (`SW`).
pub const OP_STORE: u32 = 0b0100011;

/// Register-register arithmetic (`ADD`, `SUB`, `AND`, `OR`, `SLT`).
pub const OP_REG: u32 = 0b0110011;

/// Conditional branch (`BEQ`).
pub const OP_BRANCH: u32 = 0b1100011;

/// Jump and link (`JAL`).
pub const OP_JAL: u32 = 0b1101111;
