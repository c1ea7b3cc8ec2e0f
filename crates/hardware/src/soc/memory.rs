//! Word-addressed backing store.
//!
//! `WordMemory` models the instruction and data RAM of the single-cycle
//! system: a power-of-two array of words, indexed by the byte address with
//! the low two bits dropped and the high bits ignored. With 64 words the
//! index is exactly address bits 7:2.

use tracing::debug;

use crate::common::{ConfigError, LoaderError};
use crate::soc::traits::Memory;

/// Power-of-two word array.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WordMemory {
    words: Vec<u32>,
    mask: usize,
}

impl WordMemory {
    /// Creates a zeroed memory of `words` words.
    ///
    /// # Arguments
    ///
    /// * `name`  - Which memory is being built, for error reporting.
    /// * `words` - Capacity in words.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidMemorySize`] unless `words` is a
    /// non-zero power of two.
    pub fn new(name: &'static str, words: usize) -> Result<Self, ConfigError> {
        if !words.is_power_of_two() {
            return Err(ConfigError::InvalidMemorySize { name, words });
        }
        Ok(Self {
            words: vec![0; words],
            mask: words - 1,
        })
    }

    /// Copies a program image into memory starting at word 0.
    ///
    /// Words beyond the image keep their previous contents.
    ///
    /// # Errors
    ///
    /// Returns [`LoaderError::OutOfRange`] if the image is longer than the
    /// memory; nothing is written in that case.
    pub fn load(&mut self, image: &[u32]) -> Result<(), LoaderError> {
        if image.len() > self.words.len() {
            return Err(LoaderError::OutOfRange {
                index: self.words.len(),
                capacity: self.words.len(),
            });
        }
        self.words[..image.len()].copy_from_slice(image);
        debug!(words = image.len(), "loaded image");
        Ok(())
    }

    /// Zeroes every word.
    pub fn clear(&mut self) {
        self.words.fill(0);
    }

    /// Capacity in words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always `false`: a memory has at least one word.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// The full contents, word 0 first.
    pub fn words(&self) -> &[u32] {
        &self.words
    }

    /// Word index decoded from a byte address.
    #[inline]
    pub const fn index(&self, addr: u32) -> usize {
        (addr as usize >> 2) & self.mask
    }
}

impl Memory for WordMemory {
    #[inline]
    fn read(&self, addr: u32) -> u32 {
        self.words[self.index(addr)]
    }

    #[inline]
    fn write(&mut self, addr: u32, val: u32) {
        let idx = self.index(addr);
        self.words[idx] = val;
    }
}
