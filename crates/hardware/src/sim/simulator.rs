//! Simulator: the processor plus its memories.
//!
//! Owns the [`Processor`], instruction memory, data memory and statistics,
//! and drives the fetch/step loop the reference testbench performs with a
//! clock generator.

use tracing::{debug, info};

use crate::common::SimError;
use crate::config::Config;
use crate::core::Processor;
use crate::core::datapath::CycleReport;
use crate::isa::disasm::disassemble;
use crate::sim::testbench::{Testbench, TestbenchOutcome};
use crate::soc::memory::WordMemory;
use crate::soc::traits::Memory;
use crate::stats::SimStats;

/// Top-level simulator.
#[derive(Debug)]
pub struct Simulator {
    /// Processor state (PC and register file).
    pub cpu: Processor,
    /// Instruction memory.
    pub imem: WordMemory,
    /// Data memory.
    pub dmem: WordMemory,
    /// Performance statistics.
    pub stats: SimStats,
    config: Config,
}

impl Simulator {
    /// Creates a simulator with zeroed memories and a reset processor.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::Config`] if a memory size is not a non-zero power
    /// of two.
    pub fn new(config: &Config) -> Result<Self, SimError> {
        Ok(Self {
            cpu: Processor::new(),
            imem: WordMemory::new("imem_words", config.memory.imem_words)?,
            dmem: WordMemory::new("dmem_words", config.memory.dmem_words)?,
            stats: SimStats::default(),
            config: config.clone(),
        })
    }

    /// The configuration this simulator was built with.
    pub const fn config(&self) -> &Config {
        &self.config
    }

    /// Loads a program image into instruction memory at address 0.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::Loader`] if the image exceeds instruction memory.
    pub fn load_program(&mut self, image: &[u32]) -> Result<(), SimError> {
        self.imem.load(image)?;
        Ok(())
    }

    /// Resets the processor and statistics. Memory contents are kept.
    pub fn reset(&mut self) {
        self.cpu.reset();
        self.stats = SimStats::default();
        debug!("processor reset");
    }

    /// Advances the simulator by one clock cycle.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::Decode`] if the fetched word cannot be decoded;
    /// no state changes in that case.
    pub fn tick(&mut self) -> Result<CycleReport, SimError> {
        let pc = self.cpu.pc();
        let instruction = self.imem.read(pc);
        let report = self
            .cpu
            .step(instruction, &mut self.dmem)
            .map_err(|source| SimError::Decode {
                pc,
                instruction,
                source,
            })?;

        self.stats.record(&report);
        if self.config.general.trace_instructions {
            info!(
                "{:#010x}: {:08x}  {:<24} -> {:#010x}",
                report.pc,
                report.instruction,
                disassemble(report.instruction),
                report.pc_next
            );
        }
        if let Some(store) = report.mem_write {
            debug!(
                addr = format_args!("{:#x}", store.addr),
                value = store.value,
                "store"
            );
        }
        Ok(report)
    }

    /// Runs exactly `cycles` cycles.
    ///
    /// # Errors
    ///
    /// Stops at and returns the first decode error.
    pub fn run(&mut self, cycles: u64) -> Result<Vec<CycleReport>, SimError> {
        (0..cycles).map(|_| self.tick()).collect()
    }

    /// Runs until the testbench reaches a verdict.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::CycleLimit`] if `general.max_cycles` elapse first,
    /// or the first decode error.
    pub fn run_testbench(&mut self) -> Result<TestbenchOutcome, SimError> {
        let testbench = Testbench::new(self.config.testbench.clone());
        let max_cycles = self.config.general.max_cycles;

        for cycle in 1..=max_cycles {
            let report = self.tick()?;
            if let Some(outcome) = testbench.check(cycle, &report) {
                return Ok(outcome);
            }
        }
        Err(SimError::CycleLimit { cycles: max_cycles })
    }
}
