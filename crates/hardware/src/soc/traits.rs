//! Memory collaborator trait.
//!
//! This module defines the narrow interface the core uses to reach instruction
//! and data memory. It provides:
//! 1. **Read:** A combinational word read at a byte address.
//! 2. **Write:** A word write at a byte address, issued at the cycle boundary.
//!
//! Only the bits above the low two are significant; the core never issues
//! byte or half-word accesses and misalignment is not a fault.

/// Word-addressed memory attached to the core.
pub trait Memory {
    /// Reads the word containing byte address `addr`.
    fn read(&self, addr: u32) -> u32;

    /// Writes `val` to the word containing byte address `addr`.
    fn write(&mut self, addr: u32, val: u32);
}
