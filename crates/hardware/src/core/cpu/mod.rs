//! Single-cycle processor.
//!
//! This module composes the [`Controller`] and the [`Datapath`] into the unit
//! that executes one instruction per [`Processor::step`]. Each step:
//! 1. **Decodes** the instruction into a control vector.
//! 2. **Evaluates** the datapath against pre-step state.
//! 3. **Commits** the store, the next PC and the register write together.
//!
//! There is a single control state; every supported instruction completes in
//! one step, and a step that fails to decode commits nothing.

use tracing::trace;

use crate::common::DecodeError;
use crate::core::arch::gpr::RegisterFile;
use crate::core::control::Controller;
use crate::core::datapath::{CycleReport, Datapath};
use crate::isa::disasm::disassemble;
use crate::soc::traits::Memory;

/// The processor: controller plus datapath.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Processor {
    datapath: Datapath,
}

impl Processor {
    /// Creates a processor in its reset state (PC = 0, registers cleared).
    pub const fn new() -> Self {
        Self {
            datapath: Datapath::new(),
        }
    }

    /// Current program counter.
    #[inline]
    pub const fn pc(&self) -> u32 {
        self.datapath.pc()
    }

    /// The register file.
    #[inline]
    pub const fn regs(&self) -> &RegisterFile {
        self.datapath.regs()
    }

    /// Mutable access to the register file.
    #[inline]
    pub const fn regs_mut(&mut self) -> &mut RegisterFile {
        self.datapath.regs_mut()
    }

    /// Returns to the reset state: PC = 0 and a cleared register file.
    pub const fn reset(&mut self) {
        self.datapath.reset();
    }

    /// Executes one clock cycle.
    ///
    /// # Arguments
    ///
    /// * `instruction` - The word fetched at [`pc`](Self::pc).
    /// * `dmem`        - Data memory; read at the ALU result and, for stores,
    ///   written after the read.
    ///
    /// # Returns
    ///
    /// The committed cycle's [`CycleReport`].
    ///
    /// # Errors
    ///
    /// Returns a [`DecodeError`] for an unsupported encoding. PC, registers
    /// and memory are unchanged in that case.
    pub fn step<M: Memory + ?Sized>(
        &mut self,
        instruction: u32,
        dmem: &mut M,
    ) -> Result<CycleReport, DecodeError> {
        let signals = Controller::decode(instruction)?;
        let report = self.datapath.evaluate(instruction, signals, &*dmem);

        if let Some(store) = report.mem_write {
            dmem.write(store.addr, store.value);
        }
        self.datapath.commit(&report);

        trace!(
            pc = format_args!("{:#010x}", report.pc),
            inst = format_args!("{:#010x}", report.instruction),
            asm = %disassemble(report.instruction),
            pc_next = format_args!("{:#010x}", report.pc_next),
            reg_write = ?report.reg_write,
            mem_write = ?report.mem_write,
            "retired"
        );

        Ok(report)
    }
}
