//! RV32I General-Purpose Register File.
//!
//! This module implements the general-purpose register file. It performs the following:
//! 1. **Storage:** Maintains 32 word-sized registers (`x0`-`x31`).
//! 2. **Invariant Enforcement:** Register `x0` reads as zero and ignores writes.
//! 3. **Debugging:** Renders the complete register state for dumps.
//!
//! Reads are combinational. The datapath performs the single write per cycle
//! only at commit, so every read within a cycle observes the pre-cycle value.

use std::fmt;

use crate::isa::abi;

/// Number of architectural integer registers.
pub const NUM_REGS: usize = 32;

/// General-Purpose Register file.
///
/// Values are plain words; signedness is a property of the consuming
/// operation, not of the register.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RegisterFile {
    regs: [u32; NUM_REGS],
}

impl Default for RegisterFile {
    fn default() -> Self {
        Self::new()
    }
}

impl RegisterFile {
    /// Creates a register file with every register cleared.
    pub const fn new() -> Self {
        Self {
            regs: [0; NUM_REGS],
        }
    }

    /// Reads a register.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index (0-31).
    ///
    /// # Panics
    ///
    /// Panics if `idx` is 32 or above. Indices extracted from an instruction
    /// are five bits wide and always in range.
    #[inline]
    pub const fn read(&self, idx: usize) -> u32 {
        if idx == 0 { 0 } else { self.regs[idx] }
    }

    /// Writes a register. Writes to `x0` are discarded.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index (0-31).
    /// * `val` - The word to write.
    ///
    /// # Panics
    ///
    /// Panics if `idx` is 32 or above.
    #[inline]
    pub const fn write(&mut self, idx: usize, val: u32) {
        if idx != 0 {
            self.regs[idx] = val;
        }
    }

    /// Clears every register.
    pub const fn reset(&mut self) {
        self.regs = [0; NUM_REGS];
    }

    /// Returns a copy of all 32 registers, with `x0` as zero.
    pub const fn snapshot(&self) -> [u32; NUM_REGS] {
        let mut out = self.regs;
        out[0] = 0;
        out
    }
}

impl fmt::Display for RegisterFile {
    /// Lists registers in pairs with hexadecimal values and ABI names.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in (0..NUM_REGS).step_by(2) {
            writeln!(
                f,
                "x{:<2} {:<4} = {:#010x}   x{:<2} {:<4} = {:#010x}",
                i,
                abi::name(i),
                self.read(i),
                i + 1,
                abi::name(i + 1),
                self.read(i + 1)
            )?;
        }
        Ok(())
    }
}
