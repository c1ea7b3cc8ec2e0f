//! Simulation harness.
//!
//! Everything around the core that the reference system provides in its
//! testbench: program images, the default test program, the clocked run loop
//! and the store-watching acceptance check.

/// Hexadecimal program image parsing.
pub mod loader;

/// Reference test program.
pub mod program;

/// Fetch/step loop over the processor and its memories.
pub mod simulator;

/// Acceptance check.
pub mod testbench;

pub use simulator::Simulator;
pub use testbench::{Testbench, TestbenchOutcome};
