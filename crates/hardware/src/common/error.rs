//! Error definitions.
//!
//! This module defines every failure the simulator can report. It provides:
//! 1. **Decode errors:** Encodings the single-cycle control logic leaves undefined.
//! 2. **Loader errors:** Malformed or oversized program images.
//! 3. **Config errors:** Unreadable or inconsistent configuration files.
//! 4. **Simulation errors:** The harness-level umbrella, plus the cycle budget.
//!
//! The control tables of the modelled hardware contain "don't-care" entries for
//! every unsupported encoding. A software model has no electrical `X` state, so
//! each of those entries surfaces here as an explicit error instead of a guessed
//! control value.

use std::path::PathBuf;

use thiserror::Error;

/// An encoding the control logic does not define.
///
/// Decode errors are terminal for the cycle that raised them: the processor
/// commits nothing and reports the error to its caller.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// The 7-bit opcode is not one of the six supported major opcodes.
    #[error("unsupported opcode {0:#09b}")]
    UnsupportedOpcode(u32),

    /// An ALU-class instruction selected a `funct3` with no ALU operation.
    #[error("unsupported funct3 {funct3:#05b} for an ALU operation")]
    UnsupportedFunct3 {
        /// The offending `funct3` field.
        funct3: u32,
    },

    /// A raw `ALUOp` selector outside `00`, `01`, `10`.
    #[error("unsupported ALUOp {0:#04b}")]
    UnsupportedAluOp(u32),

    /// A raw `ALUControl` selector with no ALU function.
    #[error("unsupported ALUControl {0:#05b}")]
    UnsupportedAluControl(u32),

    /// A raw `ImmSrc` selector outside the four immediate formats.
    #[error("invalid ImmSrc {0:#04b}")]
    InvalidImmSrc(u32),

    /// A raw `ResultSrc` selector outside `00`, `01`, `10`.
    #[error("invalid ResultSrc {0:#04b}")]
    InvalidResultSrc(u32),
}

/// Failure while reading or placing a program image.
#[derive(Debug, Error)]
pub enum LoaderError {
    /// The image file could not be read.
    #[error("could not read program image '{}': {source}", path.display())]
    Io {
        /// Path that failed to open.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// A token in the image is not a valid hexadecimal word or directive.
    #[error("line {line}: cannot parse '{text}' as a hexadecimal word")]
    Parse {
        /// 1-based line number of the offending token.
        line: usize,
        /// The token as written.
        text: String,
    },

    /// The image does not fit in the target memory.
    #[error("word {index} is outside a memory of {capacity} words")]
    OutOfRange {
        /// Word index that overflowed.
        index: usize,
        /// Capacity of the target memory in words.
        capacity: usize,
    },
}

/// Failure while loading or validating a configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("could not read config '{}': {source}", path.display())]
    Io {
        /// Path that failed to open.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// The configuration is not valid JSON for [`Config`](crate::config::Config).
    #[error("malformed config: {0}")]
    Json(#[from] serde_json::Error),

    /// A memory size is zero or not a power of two.
    #[error("{name} must be a non-zero power of two, got {words} words")]
    InvalidMemorySize {
        /// Which memory was misconfigured (`imem_words` or `dmem_words`).
        name: &'static str,
        /// The rejected size.
        words: usize,
    },
}

/// Top-level simulation failure.
#[derive(Debug, Error)]
pub enum SimError {
    /// The fetched instruction could not be decoded.
    #[error("decode error at pc {pc:#010x} (instruction {instruction:#010x}): {source}")]
    Decode {
        /// Program counter of the faulting instruction.
        pc: u32,
        /// Raw instruction word.
        instruction: u32,
        /// What the control logic rejected.
        #[source]
        source: DecodeError,
    },

    /// Program loading failed.
    #[error(transparent)]
    Loader(#[from] LoaderError),

    /// Configuration was rejected.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The harness ran out of cycles before the testbench reached a verdict.
    #[error("no testbench verdict after {cycles} cycles")]
    CycleLimit {
        /// Cycles executed before giving up.
        cycles: u64,
    },
}
