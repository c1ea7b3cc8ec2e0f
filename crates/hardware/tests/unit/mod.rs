//! # Unit Components
//!
//! Per-component tests for the single-cycle core, organized the way the
//! library is: ISA helpers, core units and control, memories, and the
//! simulation harness.

/// Configuration defaults, JSON loading and validation.
pub mod config;
