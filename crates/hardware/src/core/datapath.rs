//! Single-cycle datapath.
//!
//! This module owns the program counter and the register file and wires the
//! functional units together. It performs:
//! 1. **Evaluation:** All combinational logic for one cycle (operand fetch,
//!    immediate, ALU, next-PC and result muxes, speculative memory read),
//!    computed from pre-cycle state only.
//! 2. **Commit:** The clock edge. PC and the single register write update
//!    together; nothing is mutated during evaluation.
//!
//! The split keeps the cycle atomic: a caller that stops between
//! [`Datapath::evaluate`] and [`Datapath::commit`] leaves no partial state.

use crate::core::arch::gpr::RegisterFile;
use crate::core::signals::{ControlSignals, ResultSrc};
use crate::core::units::alu::Alu;
use crate::core::units::imm_gen;
use crate::isa::instruction::InstructionBits;
use crate::soc::traits::Memory;

/// Bytes per instruction.
pub const INSTRUCTION_BYTES: u32 = 4;

/// A data memory store issued by a cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MemWrite {
    /// Byte address (the ALU result).
    pub addr: u32,
    /// Stored word (`rs2`).
    pub value: u32,
}

/// A register write committed by a cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RegWrite {
    /// Destination register, never 0.
    pub rd: usize,
    /// Written value.
    pub value: u32,
}

/// Every wire of interest for one evaluated cycle.
///
/// Produced by [`Datapath::evaluate`] and consumed by [`Datapath::commit`];
/// the processor returns it to callers once committed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CycleReport {
    /// PC of the executed instruction.
    pub pc: u32,
    /// Raw instruction word.
    pub instruction: u32,
    /// Control vector that steered the cycle.
    pub signals: ControlSignals,
    /// Sign-extended immediate.
    pub imm_ext: u32,
    /// ALU result, also the data memory address.
    pub alu_result: u32,
    /// ALU zero flag.
    pub zero: bool,
    /// Next-PC select.
    pub pc_src: bool,
    /// PC after this cycle.
    pub pc_next: u32,
    /// Write-back value selected by `ResultSrc`.
    pub result: u32,
    /// Store issued this cycle, if any.
    pub mem_write: Option<MemWrite>,
    /// Register write committed this cycle, if any.
    pub reg_write: Option<RegWrite>,
}

/// Program counter, register file and the wiring between functional units.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Datapath {
    pc: u32,
    regs: RegisterFile,
}

impl Datapath {
    /// Creates a datapath in its reset state.
    pub const fn new() -> Self {
        Self {
            pc: 0,
            regs: RegisterFile::new(),
        }
    }

    /// Current program counter.
    #[inline]
    pub const fn pc(&self) -> u32 {
        self.pc
    }

    /// The register file.
    #[inline]
    pub const fn regs(&self) -> &RegisterFile {
        &self.regs
    }

    /// Mutable access to the register file for test setup and loaders.
    #[inline]
    pub const fn regs_mut(&mut self) -> &mut RegisterFile {
        &mut self.regs
    }

    /// Sets PC to 0 and clears the register file.
    pub const fn reset(&mut self) {
        self.pc = 0;
        self.regs.reset();
    }

    /// Evaluates the combinational logic for one cycle.
    ///
    /// Reads only the pre-cycle PC and registers, plus `dmem` at the ALU
    /// result. The read is unconditional; its value is used only when
    /// `ResultSrc` selects memory.
    ///
    /// # Arguments
    ///
    /// * `instruction` - The fetched word.
    /// * `signals`     - Control vector for `instruction`.
    /// * `dmem`        - Data memory.
    pub fn evaluate<M: Memory + ?Sized>(
        &self,
        instruction: u32,
        signals: ControlSignals,
        dmem: &M,
    ) -> CycleReport {
        let pc = self.pc;
        let pc_plus4 = pc.wrapping_add(INSTRUCTION_BYTES);
        let imm_ext = imm_gen::extend(instruction, signals.imm_src);
        let pc_target = pc.wrapping_add(imm_ext);

        let src_a = self.regs.read(instruction.rs1());
        let write_data = self.regs.read(instruction.rs2());
        let src_b = if signals.alu_src { imm_ext } else { write_data };

        let alu = Alu::execute(signals.alu_control, src_a, src_b);

        let pc_src = signals.pc_src(alu.zero);
        let pc_next = if pc_src { pc_target } else { pc_plus4 };

        let read_data = dmem.read(alu.result);
        let mem_write = signals.mem_write.then_some(MemWrite {
            addr: alu.result,
            value: write_data,
        });

        let result = match signals.result_src {
            ResultSrc::Alu => alu.result,
            ResultSrc::Memory => read_data,
            ResultSrc::PcPlus4 => pc_plus4,
        };

        let rd = instruction.rd();
        let reg_write = (signals.reg_write && rd != 0).then_some(RegWrite { rd, value: result });

        CycleReport {
            pc,
            instruction,
            signals,
            imm_ext,
            alu_result: alu.result,
            zero: alu.zero,
            pc_src,
            pc_next,
            result,
            mem_write,
            reg_write,
        }
    }

    /// Commits an evaluated cycle: PC first, then the register write.
    pub const fn commit(&mut self, report: &CycleReport) {
        self.pc = report.pc_next;
        if let Some(write) = report.reg_write {
            self.regs.write(write.rd, write.value);
        }
    }
}
