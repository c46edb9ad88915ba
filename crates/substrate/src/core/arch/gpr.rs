//! General-purpose register bank.

use crate::common::constants::GPR_COUNT;
use crate::common::data::MarchBits;

/// The 32-entry integer register bank.
///
/// Register `x0` is hardwired to zero: writes to it are accepted and
/// discarded, reads always return 0. An out-of-range index is a caller
/// contract violation and aborts rather than wrapping or clamping.
#[derive(Debug, Clone)]
pub struct Gpr {
    regs: [MarchBits; GPR_COUNT],
}

impl Default for Gpr {
    fn default() -> Self {
        Self::new()
    }
}

impl Gpr {
    /// Creates a register bank with every register cleared to zero.
    pub const fn new() -> Self {
        Self {
            regs: [0; GPR_COUNT],
        }
    }

    /// Reads the value of register `idx`.
    ///
    /// # Arguments
    /// * `idx` - Register index (0 to 31).
    ///
    /// # Returns
    /// The stored value; `x0` always reads as 0.
    ///
    /// # Panics
    /// Panics when `idx` is outside the bank.
    pub fn read(&self, idx: usize) -> MarchBits {
        assert!(idx < GPR_COUNT, "GPR index {idx} out of range");
        if idx == 0 { 0 } else { self.regs[idx] }
    }

    /// Writes `val` to register `idx`.
    ///
    /// Writes to `x0` are silently discarded.
    ///
    /// # Panics
    /// Panics when `idx` is outside the bank.
    pub fn write(&mut self, idx: usize, val: MarchBits) {
        assert!(idx < GPR_COUNT, "GPR index {idx} out of range");
        if idx != 0 {
            self.regs[idx] = val;
        }
    }

    /// Prints the complete bank to stdout, two registers per line.
    pub fn dump(&self) {
        for i in (0..GPR_COUNT).step_by(2) {
            println!(
                "x{i:<2}={:#018x}  x{:<2}={:#018x}",
                self.regs[i],
                i + 1,
                self.regs[i + 1]
            );
        }
    }
}
