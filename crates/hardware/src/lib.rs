//! Single-cycle RV32I processor model.
//!
//! This crate models a non-pipelined core for the RV32I subset `lw`, `sw`,
//! `add`, `sub`, `and`, `or`, `slt`, `addi`, `andi`, `ori`, `slti`, `beq` and
//! `jal`:
//! 1. **Core:** Main decoder, ALU decoder, controller, immediate extractor,
//!    ALU, register file and the datapath that joins them.
//! 2. **ISA:** Opcode and function-code constants, field extraction, and a
//!    disassembler.
//! 3. **SoC:** The word-addressed memory collaborators.
//! 4. **Simulation:** Program loading, the clocked run loop, the acceptance
//!    testbench, configuration and statistics.
//!
//! # Example
//!
//! ```
//! use rv32sc_core::{Config, Simulator};
//! use rv32sc_core::sim::program::DEFAULT_PROGRAM;
//!
//! let mut sim = Simulator::new(&Config::default()).unwrap();
//! sim.load_program(&DEFAULT_PROGRAM).unwrap();
//! let outcome = sim.run_testbench().unwrap();
//! assert!(outcome.passed());
//! ```

/// Error taxonomy.
pub mod common;
/// Simulator configuration (defaults and JSON loading).
pub mod config;
/// Processor core (control, datapath, functional units, register file).
pub mod core;
/// Instruction set (encodings, field extraction, disassembly).
pub mod isa;
/// Program loading, run loop and testbench.
pub mod sim;
/// Memory collaborators.
pub mod soc;
/// Simulation statistics collection and reporting.
pub mod stats;

/// Root configuration type; use `Config::default()` or `Config::from_json`.
pub use crate::config::Config;
/// The processor; one `step` per clock cycle.
pub use crate::core::Processor;
/// Processor plus memories; construct with `Simulator::new`.
pub use crate::sim::Simulator;
