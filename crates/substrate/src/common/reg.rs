//! Unified register file.
//!
//! This module provides the single owner of the register state visible at
//! the model boundary. It includes:
//! 1. **GPR Access:** Reads and writes against the 32-entry bank.
//! 2. **Program Counter:** The PC cell, reachable only through explicit
//!    accessors on a handle, never through global state.
//! 3. **Reset Values:** The immutable reset table queried during init.

use crate::common::data::MarchBits;
use crate::core::arch::gpr::Gpr;
use crate::core::arch::reset::ResetTable;

/// Register file combining the GPR bank, the PC, and the reset table.
#[derive(Debug, Clone)]
pub struct RegisterFile {
    gpr: Gpr,
    pc: MarchBits,
    reset: ResetTable,
}

impl RegisterFile {
    /// Creates a register file with a cleared bank, a PC of zero, and the
    /// given reset table.
    ///
    /// The architectural values from the table are not applied here; the
    /// model installs them during its init pass.
    pub const fn new(reset: ResetTable) -> Self {
        Self {
            gpr: Gpr::new(),
            pc: 0,
            reset,
        }
    }

    /// Reads GPR `idx`; `x0` always reads as 0.
    ///
    /// # Panics
    /// Panics when `idx` is outside the bank.
    pub fn read(&self, idx: usize) -> MarchBits {
        self.gpr.read(idx)
    }

    /// Writes `val` to GPR `idx`; writes to `x0` are discarded.
    ///
    /// # Panics
    /// Panics when `idx` is outside the bank.
    pub fn write(&mut self, idx: usize, val: MarchBits) {
        self.gpr.write(idx, val);
    }

    /// Returns the current program counter.
    pub const fn get_pc(&self) -> MarchBits {
        self.pc
    }

    /// Commits `value` to the program counter.
    ///
    /// # Returns
    /// The committed value. RV64 applies no PC masking, so the result is
    /// always `value` itself; callers must still treat the return value as
    /// the architectural truth.
    pub const fn set_pc(&mut self, value: MarchBits) -> MarchBits {
        self.pc = value;
        self.pc
    }

    /// Returns the architectural reset value of GPR `idx`.
    ///
    /// # Panics
    /// Panics when `idx` is outside the bank.
    pub fn reset_value(&self, idx: usize) -> MarchBits {
        self.reset.value(idx)
    }

    /// Returns the architectural reset program counter.
    pub const fn reset_pc(&self) -> MarchBits {
        self.reset.pc()
    }

    /// Prints the PC and the complete GPR bank to stdout.
    pub fn dump(&self) {
        println!("pc ={:#018x}", self.pc);
        self.gpr.dump();
    }
}
