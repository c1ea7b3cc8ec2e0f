//! Functional units of the datapath.
//!
//! - [`alu`]: add, subtract, and, or, set-less-than; zero flag.
//! - [`imm_gen`]: immediate extraction and sign extension.

/// Arithmetic Logic Unit.
pub mod alu;

/// Immediate extractor.
pub mod imm_gen;
