//! Store-watching acceptance check.
//!
//! Mirrors the reference hardware testbench: it watches every cycle that
//! asserts `MemWrite` and decides the run from the store's address and data.
//! A store of the expected value to the success address passes; a store to
//! an address outside the allowed set fails; anything else keeps running.

use tracing::{info, warn};

use crate::config::TestbenchConfig;
use crate::core::datapath::CycleReport;

/// Verdict of a testbench run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TestbenchOutcome {
    /// The expected result was stored.
    Passed {
        /// 1-based cycle of the passing store.
        cycle: u64,
    },
    /// A store hit an address outside the allowed set.
    Failed {
        /// 1-based cycle of the offending store.
        cycle: u64,
        /// Store address.
        addr: u32,
        /// Stored value.
        value: u32,
    },
}

impl TestbenchOutcome {
    /// `true` for [`TestbenchOutcome::Passed`].
    pub const fn passed(&self) -> bool {
        matches!(self, Self::Passed { .. })
    }
}

/// The acceptance check.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Testbench {
    config: TestbenchConfig,
}

impl Testbench {
    /// Creates a testbench from its configuration.
    pub fn new(config: TestbenchConfig) -> Self {
        Self { config }
    }

    /// Inspects one committed cycle.
    ///
    /// # Arguments
    ///
    /// * `cycle`  - 1-based cycle number of `report`.
    /// * `report` - The committed cycle.
    ///
    /// # Returns
    ///
    /// `Some` once the run is decided, `None` while it should continue.
    pub fn check(&self, cycle: u64, report: &CycleReport) -> Option<TestbenchOutcome> {
        let store = report.mem_write?;

        if store.addr == self.config.success_addr && store.value == self.config.success_value {
            info!(cycle, addr = store.addr, value = store.value, "testbench passed");
            return Some(TestbenchOutcome::Passed { cycle });
        }
        if self.config.allowed_store_addrs.contains(&store.addr) {
            return None;
        }

        warn!(cycle, addr = store.addr, value = store.value, "unexpected store");
        Some(TestbenchOutcome::Failed {
            cycle,
            addr: store.addr,
            value: store.value,
        })
    }
}
