//! Processor core.
//!
//! Organised the way the hardware is drawn:
//! - [`signals`]: control-signal types.
//! - [`control`]: main decoder, ALU decoder and the composed controller.
//! - [`units`]: ALU and immediate extractor.
//! - [`arch`]: register file.
//! - [`datapath`]: PC, muxes and the evaluate/commit split.
//! - [`cpu`]: the processor and its `step` function.

/// Architectural state (register file).
pub mod arch;

/// Control unit.
pub mod control;

/// Processor composition.
pub mod cpu;

/// Datapath wiring, next-PC and result selection.
pub mod datapath;

/// Control-signal and selector types.
pub mod signals;

/// Functional units.
pub mod units;

pub use cpu::Processor;
pub use datapath::{CycleReport, MemWrite, RegWrite};
