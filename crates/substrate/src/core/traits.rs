//! Model boundary interfaces.
//!
//! This module defines the traits that meet at the generated-model
//! boundary. It provides:
//! 1. **Substrate Interface:** The complete call surface a model uses to
//!    reach memory and register state during init and step.
//! 2. **Write Observation:** The hook notified after every architectural
//!    GPR write.
//!
//! All methods are synchronous and complete before returning: the model
//! runs on the single execution thread and holds the only handle.

use crate::common::data::MarchBits;

/// Execution substrate consumed by a generated instruction-set model.
///
/// Every operation the model can invoke on its host is a method here:
/// instruction fetch, sized physical memory access, GPR and PC access,
/// reset value queries, and the reset and fault status flags. The crate's
/// provided implementation is [`Core`](crate::core::Core).
///
/// Out-of-bounds accesses follow one fixed policy: the first fault of a
/// run is latched, faulting reads return zero (for a fetch, the all-zero
/// encoding, which RV64 defines as illegal), and faulting writes are
/// discarded. The latch is visible through [`exception_raised`] and
/// surfaced to the harness after the step.
///
/// [`exception_raised`]: Substrate::exception_raised
pub trait Substrate {
    /// Fetches the 32-bit instruction encoding at `pc`.
    ///
    /// A pure read: the program counter is not advanced.
    fn inst_fetch(&mut self, pc: MarchBits) -> u32;

    /// Instruction-fetch ordering barrier.
    ///
    /// With a single flat backing store every completed write is already
    /// visible to `inst_fetch`, so no data moves; the barrier is counted
    /// and traced. `pred` and `succ` carry the 4-bit predecessor and
    /// successor sets from the encoding.
    fn fence_i(&mut self, pred: u8, succ: u8);

    /// Reports whether the substrate is in its reset state.
    ///
    /// Level-sensitive: holds from construction until the harness clears
    /// it after the first step completes.
    fn is_reset(&self) -> bool;

    /// Reads one byte of physical memory.
    fn phy_read_byte(&mut self, address: MarchBits) -> u8;
    /// Reads two bytes (little-endian) of physical memory.
    fn phy_read_half_word(&mut self, address: MarchBits) -> u16;
    /// Reads four bytes (little-endian) of physical memory.
    fn phy_read_word(&mut self, address: MarchBits) -> u32;
    /// Reads eight bytes (little-endian) of physical memory.
    fn phy_read_double_word(&mut self, address: MarchBits) -> u64;

    /// Writes one byte of physical memory.
    fn phy_write_byte(&mut self, address: MarchBits, data: u8);
    /// Writes two bytes (little-endian) of physical memory.
    fn phy_write_half_word(&mut self, address: MarchBits, data: u16);
    /// Writes four bytes (little-endian) of physical memory.
    fn phy_write_word(&mut self, address: MarchBits, data: u32);
    /// Writes eight bytes (little-endian) of physical memory.
    fn phy_write_double_word(&mut self, address: MarchBits, data: u64);

    /// Reads GPR `index`; `x0` always reads as 0.
    ///
    /// # Panics
    /// Panics when `index` is outside the bank.
    fn read_gpr(&self, index: u8) -> MarchBits;

    /// Commits `value` to GPR `index` and notifies the write hook exactly
    /// once with the committed value (0 for a write to `x0`).
    ///
    /// # Panics
    /// Panics when `index` is outside the bank.
    fn write_gpr(&mut self, index: u8, value: MarchBits);

    /// Returns the current program counter.
    fn get_pc(&self) -> MarchBits;

    /// Commits `value` to the program counter, returning the committed
    /// value.
    fn set_pc(&mut self, value: MarchBits) -> MarchBits;

    /// Returns the architectural reset value of GPR `index`.
    ///
    /// # Panics
    /// Panics when `index` is outside the bank.
    fn reset_value(&self, index: u8) -> MarchBits;

    /// Returns the architectural reset program counter.
    fn reset_pc(&self) -> MarchBits;

    /// Reports whether a memory fault has been latched this run.
    fn exception_raised(&self) -> bool;

    /// Returns the address of the latched fault, or 0 when none is set.
    fn exception_address(&self) -> MarchBits;

    /// Emits a diagnostic line from the model through the host log.
    fn print_line(&self, text: &str);
}

/// Observer notified after every architectural GPR write.
///
/// The substrate fires the hook from its `write_gpr` path, exactly once
/// per write, after the value has been committed to the bank. Writes to
/// `x0` are observed with the committed value 0. Register an observer
/// with [`Core::set_gpr_hook`](crate::core::Core::set_gpr_hook).
pub trait GprWriteHook {
    /// Called with the register index, the committed value, and the PC at
    /// the time of the write.
    fn on_gpr_write(&mut self, index: u8, value: MarchBits, pc: MarchBits);
}

impl<F> GprWriteHook for F
where
    F: FnMut(u8, MarchBits, MarchBits),
{
    fn on_gpr_write(&mut self, index: u8, value: MarchBits, pc: MarchBits) {
        self(index, value, pc);
    }
}
