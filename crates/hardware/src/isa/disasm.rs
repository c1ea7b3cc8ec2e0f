//! Instruction Disassembler for the RV32I subset.
//!
//! Converts a 32-bit instruction encoding into a human-readable mnemonic
//! string for trace logging, the CLI listing and test diagnostics.
//!
//! Registers print as architectural `xN` names and immediates in signed
//! decimal. Branch and jump offsets are printed PC-relative, as written in
//! assembly source.
//!
//! # Usage
//!
//! ```
//! use rv32sc_core::isa::disasm::disassemble;
//! let text = disassemble(0x00500113);
//! assert_eq!(text, "addi x2, x0, 5");
//! ```

use crate::core::signals::ImmSrc;
use crate::core::units::imm_gen;
use crate::isa::decode::decode;
use crate::isa::instruction::{Decoded, InstructionFormat};
use crate::isa::rv32i::{funct3 as f3, funct7 as f7, opcodes as op};

/// Disassembles a 32-bit instruction into a human-readable string.
///
/// Returns a mnemonic like `"add x3, x1, x2"`, or `"unknown (0x........)"`
/// for encodings outside the supported subset.
///
/// # Arguments
///
/// * `inst` - The raw 32-bit instruction encoding.
pub fn disassemble(inst: u32) -> String {
    decode(inst)
        .ok()
        .and_then(|d| render(&d))
        .unwrap_or_else(|| format!("unknown ({inst:#010x})"))
}

/// Renders a decoded instruction; `None` for function codes outside the subset.
fn render(d: &Decoded) -> Option<String> {
    let Decoded {
        raw,
        rd,
        rs1,
        rs2,
        funct3,
        funct7,
        ..
    } = *d;

    match d.format {
        InstructionFormat::R => {
            let mnemonic = match (funct3, funct7) {
                (f3::ADD_SUB, f7::DEFAULT) => "add",
                (f3::ADD_SUB, f7::SUB) => "sub",
                (f3::SLT, f7::DEFAULT) => "slt",
                (f3::OR, f7::DEFAULT) => "or",
                (f3::AND, f7::DEFAULT) => "and",
                _ => return None,
            };
            Some(format!("{mnemonic} x{rd}, x{rs1}, x{rs2}"))
        }
        InstructionFormat::I if d.opcode == op::OP_LOAD => {
            let imm = signed(imm_gen::extend(raw, ImmSrc::I));
            (funct3 == f3::LW).then(|| format!("lw x{rd}, {imm}(x{rs1})"))
        }
        InstructionFormat::I => {
            let imm = signed(imm_gen::extend(raw, ImmSrc::I));
            let mnemonic = match funct3 {
                f3::ADD_SUB => "addi",
                f3::SLT => "slti",
                f3::OR => "ori",
                f3::AND => "andi",
                _ => return None,
            };
            Some(format!("{mnemonic} x{rd}, x{rs1}, {imm}"))
        }
        InstructionFormat::S => {
            let imm = signed(imm_gen::extend(raw, ImmSrc::S));
            (funct3 == f3::SW).then(|| format!("sw x{rs2}, {imm}(x{rs1})"))
        }
        InstructionFormat::B => {
            let imm = signed(imm_gen::extend(raw, ImmSrc::B));
            (funct3 == f3::BEQ).then(|| format!("beq x{rs1}, x{rs2}, {imm}"))
        }
        InstructionFormat::J => {
            let imm = signed(imm_gen::extend(raw, ImmSrc::J));
            Some(format!("jal x{rd}, {imm}"))
        }
    }
}

/// Reinterprets a sign-extended immediate word for display.
#[inline]
const fn signed(word: u32) -> i32 {
    word as i32
}
