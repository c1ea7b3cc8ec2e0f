//! Instruction Set Architecture (ISA) Definitions.
//!
//! Contains the wire-format constants, field extraction and decoding for the
//! RV32I subset the single-cycle core executes.

/// Application Binary Interface (ABI) register name mappings.
pub mod abi;

/// Field splitting and format classification.
pub mod decode;

/// Instruction disassembler for trace logging and diagnostics.
pub mod disasm;

/// Instruction encoding structures and bit extraction utilities.
pub mod instruction;

/// Base integer instruction subset (opcodes, funct3, funct7).
pub mod rv32i;
