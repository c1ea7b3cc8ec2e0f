//! Simulation statistics collection and reporting.
//!
//! This module tracks per-run metrics for the single-cycle core. It provides:
//! 1. **Cycle and IPC:** Total cycles and retired instructions (one per cycle).
//! 2. **Instruction mix:** Counts by class (ALU register, ALU immediate, load,
//!    store, branch, jump).
//! 3. **Control flow:** Branches taken versus not taken.
//! 4. **Write-back:** Register writes committed.

use std::time::Instant;

use crate::core::datapath::CycleReport;
use crate::isa::instruction::{InstructionBits, InstructionFormat};
use crate::isa::rv32i::opcodes;

/// Simulation statistics.
#[derive(Clone, Debug)]
pub struct SimStats {
    start_time: Instant,
    /// Total cycles elapsed.
    pub cycles: u64,
    /// Number of instructions retired.
    pub instructions_retired: u64,

    /// Register-register ALU instructions retired.
    pub inst_alu_reg: u64,
    /// Immediate ALU instructions retired.
    pub inst_alu_imm: u64,
    /// Loads retired.
    pub inst_load: u64,
    /// Stores retired.
    pub inst_store: u64,
    /// Conditional branches retired.
    pub inst_branch: u64,
    /// Jumps retired.
    pub inst_jump: u64,

    /// Conditional branches that redirected the PC.
    pub branches_taken: u64,
    /// Register writes committed (x0 writes excluded).
    pub reg_writes: u64,
}

impl Default for SimStats {
    fn default() -> Self {
        Self {
            start_time: Instant::now(),
            cycles: 0,
            instructions_retired: 0,
            inst_alu_reg: 0,
            inst_alu_imm: 0,
            inst_load: 0,
            inst_store: 0,
            inst_branch: 0,
            inst_jump: 0,
            branches_taken: 0,
            reg_writes: 0,
        }
    }
}

impl SimStats {
    /// Accounts one committed cycle.
    pub fn record(&mut self, report: &CycleReport) {
        self.cycles += 1;
        self.instructions_retired += 1;

        let opcode = report.instruction.opcode();
        match InstructionFormat::from_opcode(opcode) {
            Ok(InstructionFormat::R) => self.inst_alu_reg += 1,
            Ok(InstructionFormat::I) if opcode == opcodes::OP_LOAD => self.inst_load += 1,
            Ok(InstructionFormat::I) => self.inst_alu_imm += 1,
            Ok(InstructionFormat::S) => self.inst_store += 1,
            Ok(InstructionFormat::B) => {
                self.inst_branch += 1;
                if report.pc_src {
                    self.branches_taken += 1;
                }
            }
            Ok(InstructionFormat::J) => self.inst_jump += 1,
            // A committed cycle always decoded.
            Err(_) => {}
        }

        if report.reg_write.is_some() {
            self.reg_writes += 1;
        }
    }

    /// Instructions per cycle; 0 before the first cycle.
    pub fn ipc(&self) -> f64 {
        if self.cycles == 0 {
            0.0
        } else {
            self.instructions_retired as f64 / self.cycles as f64
        }
    }

    /// Fraction of conditional branches taken; 0 when none retired.
    pub fn branch_taken_rate(&self) -> f64 {
        if self.inst_branch == 0 {
            0.0
        } else {
            self.branches_taken as f64 / self.inst_branch as f64
        }
    }

    /// Prints the statistics report to stdout.
    pub fn print(&self) {
        let seconds = self.start_time.elapsed().as_secs_f64();
        let total = self.instructions_retired.max(1) as f64;
        let pct = |n: u64| (n as f64 / total) * 100.0;

        println!("\n==========================================================");
        println!("RV32I SINGLE-CYCLE SIMULATION STATISTICS");
        println!("==========================================================");
        println!("host_seconds             {seconds:.4} s");
        println!("sim_cycles               {}", self.cycles);
        println!("sim_insts                {}", self.instructions_retired);
        println!("sim_ipc                  {:.4}", self.ipc());
        println!("----------------------------------------------------------");
        println!("INSTRUCTION MIX");
        println!("  op.alu_reg             {} ({:.2}%)", self.inst_alu_reg, pct(self.inst_alu_reg));
        println!("  op.alu_imm             {} ({:.2}%)", self.inst_alu_imm, pct(self.inst_alu_imm));
        println!("  op.load                {} ({:.2}%)", self.inst_load, pct(self.inst_load));
        println!("  op.store               {} ({:.2}%)", self.inst_store, pct(self.inst_store));
        println!("  op.branch              {} ({:.2}%)", self.inst_branch, pct(self.inst_branch));
        println!("  op.jump                {} ({:.2}%)", self.inst_jump, pct(self.inst_jump));
        println!("----------------------------------------------------------");
        println!("CONTROL FLOW");
        println!("  branch.taken           {}", self.branches_taken);
        println!("  branch.taken_rate      {:.2}%", self.branch_taken_rate() * 100.0);
        println!("  regfile.writes         {}", self.reg_writes);
        println!("==========================================================");
    }
}
