//! Architectural reset state.

use crate::common::constants::GPR_COUNT;
use crate::common::data::MarchBits;

/// Reset value table queried by the model during initialization.
///
/// An ordered mapping from register index to that register's value at
/// reset, plus the reset program counter. The table is immutable once the
/// core is built; the model reads each entry exactly once during init.
#[derive(Debug, Clone)]
pub struct ResetTable {
    pc: MarchBits,
    xregs: [MarchBits; GPR_COUNT],
}

impl ResetTable {
    /// Builds a table from the reset PC and the 32 register reset values.
    pub const fn new(pc: MarchBits, xregs: [MarchBits; GPR_COUNT]) -> Self {
        Self { pc, xregs }
    }

    /// Returns the reset value of register `idx`.
    ///
    /// # Panics
    /// Panics when `idx` is outside the bank.
    pub fn value(&self, idx: usize) -> MarchBits {
        assert!(idx < GPR_COUNT, "reset table index {idx} out of range");
        self.xregs[idx]
    }

    /// Returns the architectural reset program counter.
    pub const fn pc(&self) -> MarchBits {
        self.pc
    }
}
