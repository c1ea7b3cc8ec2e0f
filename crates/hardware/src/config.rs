//! Configuration system for the simulator.
//!
//! This module defines the configuration structures used to parameterize a
//! simulation run. It provides:
//! 1. **Defaults:** The reference system: 64-word memories and the acceptance
//!    check of the reference test program.
//! 2. **Structures:** General, memory and testbench sections.
//! 3. **Loading:** JSON deserialization with per-field defaults and validation.
//!
//! The reset PC is not configurable: the processor always starts at 0.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::common::ConfigError;

/// Default configuration constants for the simulator.
mod defaults {
    /// Cycle budget for a testbench run.
    pub const MAX_CYCLES: u64 = 1000;

    /// Instruction memory size in words.
    pub const IMEM_WORDS: usize = 64;

    /// Data memory size in words (address bits 7:2).
    pub const DMEM_WORDS: usize = 64;

    /// Address the reference program stores its final result to.
    pub const SUCCESS_ADDR: u32 = 100;

    /// Final result of the reference program.
    pub const SUCCESS_VALUE: u32 = 25;

    /// Intermediate store address of the reference program.
    pub const ALLOWED_STORE_ADDR: u32 = 96;
}

/// Root configuration.
///
/// # Examples
///
/// ```
/// use rv32sc_core::config::Config;
///
/// let json = r#"{ "general": { "max_cycles": 50 }, "memory": { "dmem_words": 128 } }"#;
/// let config = Config::from_json(json).unwrap();
/// assert_eq!(config.general.max_cycles, 50);
/// assert_eq!(config.memory.dmem_words, 128);
/// assert_eq!(config.memory.imem_words, 64);
/// assert_eq!(config.testbench.success_addr, 100);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Config {
    /// General simulation settings
    #[serde(default)]
    pub general: GeneralConfig,
    /// Memory sizes
    #[serde(default)]
    pub memory: MemoryConfig,
    /// Acceptance check
    #[serde(default)]
    pub testbench: TestbenchConfig,
}

impl Config {
    /// Parses and validates a JSON configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Json`] for malformed input and
    /// [`ConfigError::InvalidMemorySize`] for unusable memory sizes.
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a JSON configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, otherwise as
    /// [`Config::from_json`].
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&text)
    }

    /// Checks cross-field constraints serde cannot express.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidMemorySize`] when a memory size is zero
    /// or not a power of two.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.memory.imem_words.is_power_of_two() {
            return Err(ConfigError::InvalidMemorySize {
                name: "imem_words",
                words: self.memory.imem_words,
            });
        }
        if !self.memory.dmem_words.is_power_of_two() {
            return Err(ConfigError::InvalidMemorySize {
                name: "dmem_words",
                words: self.memory.dmem_words,
            });
        }
        Ok(())
    }
}

/// General simulation settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GeneralConfig {
    /// Log every retired cycle at info level.
    #[serde(default)]
    pub trace_instructions: bool,

    /// Cycle budget for [`Simulator::run_testbench`](crate::sim::Simulator::run_testbench).
    #[serde(default = "GeneralConfig::default_max_cycles")]
    pub max_cycles: u64,
}

impl GeneralConfig {
    const fn default_max_cycles() -> u64 {
        defaults::MAX_CYCLES
    }
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            trace_instructions: false,
            max_cycles: defaults::MAX_CYCLES,
        }
    }
}

/// Memory sizes, in words. Both must be non-zero powers of two.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MemoryConfig {
    /// Instruction memory size.
    #[serde(default = "MemoryConfig::default_imem_words")]
    pub imem_words: usize,

    /// Data memory size.
    #[serde(default = "MemoryConfig::default_dmem_words")]
    pub dmem_words: usize,
}

impl MemoryConfig {
    const fn default_imem_words() -> usize {
        defaults::IMEM_WORDS
    }

    const fn default_dmem_words() -> usize {
        defaults::DMEM_WORDS
    }
}

impl Default for MemoryConfig {
    fn default() -> Self {
        Self {
            imem_words: defaults::IMEM_WORDS,
            dmem_words: defaults::DMEM_WORDS,
        }
    }
}

/// Acceptance check applied to every store.
///
/// A store of `success_value` to `success_addr` passes the run; a store to
/// any address not listed in `allowed_store_addrs` fails it.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TestbenchConfig {
    /// Address of the final result store.
    #[serde(default = "TestbenchConfig::default_success_addr")]
    pub success_addr: u32,

    /// Expected final result.
    #[serde(default = "TestbenchConfig::default_success_value")]
    pub success_value: u32,

    /// Addresses intermediate stores may target without failing the run.
    #[serde(default = "TestbenchConfig::default_allowed_store_addrs")]
    pub allowed_store_addrs: Vec<u32>,
}

impl TestbenchConfig {
    const fn default_success_addr() -> u32 {
        defaults::SUCCESS_ADDR
    }

    const fn default_success_value() -> u32 {
        defaults::SUCCESS_VALUE
    }

    fn default_allowed_store_addrs() -> Vec<u32> {
        vec![defaults::ALLOWED_STORE_ADDR]
    }
}

impl Default for TestbenchConfig {
    fn default() -> Self {
        Self {
            success_addr: defaults::SUCCESS_ADDR,
            success_value: defaults::SUCCESS_VALUE,
            allowed_store_addrs: Self::default_allowed_store_addrs(),
        }
    }
}
