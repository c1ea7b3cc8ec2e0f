//! RV32I Base Integer Subset.
//!
//! Defines the encodings for the integer instructions the single-cycle core
//! executes: `lw`, `sw`, `add`, `sub`, `and`, `or`, `slt`, `addi`, `andi`,
//! `ori`, `slti`, `beq` and `jal`.
//!
//! # Structure
//!
//! - `opcodes`: Major opcodes (bits 6-0), the wire-format contract.
//! - `funct3`: Minor opcodes distinguishing instructions within a major opcode.
//! - `funct7`: Additional opcode bits separating `add` from `sub`.

/// Function code 3 definitions for the supported operations.
pub mod funct3;

/// Function code 7 definitions for R-type operations.
pub mod funct7;

/// Major opcodes for the supported instruction classes.
pub mod opcodes;
