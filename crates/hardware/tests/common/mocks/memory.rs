use std::cell::RefCell;

use rv32sc_core::soc::traits::Memory;

/// Word-indexed data memory that logs every access.
///
/// Unlike `WordMemory` it has no size limit and never aliases addresses,
/// so tests can assert exactly which byte addresses the core touched.
#[derive(Debug, Default)]
pub struct RecordingMemory {
    words: std::collections::HashMap<u32, u32>,
    reads: RefCell<Vec<u32>>,
    writes: Vec<(u32, u32)>,
}

impl RecordingMemory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-loads a word without logging it.
    pub fn poke(&mut self, addr: u32, val: u32) {
        self.words.insert(addr >> 2, val);
    }

    pub fn peek(&self, addr: u32) -> u32 {
        self.words.get(&(addr >> 2)).copied().unwrap_or(0)
    }

    pub fn reads(&self) -> Vec<u32> {
        self.reads.borrow().clone()
    }

    pub fn writes(&self) -> &[(u32, u32)] {
        &self.writes
    }
}

impl Memory for RecordingMemory {
    fn read(&self, addr: u32) -> u32 {
        self.reads.borrow_mut().push(addr);
        self.peek(addr)
    }

    fn write(&mut self, addr: u32, val: u32) {
        self.writes.push((addr, val));
        self.words.insert(addr >> 2, val);
    }
}
