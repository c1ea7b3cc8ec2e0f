//! Architectural state.
//!
//! The program counter lives in the [`Datapath`](crate::core::datapath::Datapath);
//! this module holds the register file.

/// General-purpose register file.
pub mod gpr;
