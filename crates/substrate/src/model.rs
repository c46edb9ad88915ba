//! Model-side interface and the built-in bring-up model.
//!
//! This module defines the contract a generated instruction-set model
//! implements, plus `FreeRun`, a degenerate model used to exercise a
//! substrate before a generated core is linked in.

use crate::common::constants::{GPR_COUNT, INSTRUCTION_SIZE_32};
use crate::core::traits::Substrate;

/// A steppable instruction-set model.
///
/// The implementation is normally machine-generated from a formal
/// architecture description and treated as opaque: the harness calls
/// `init` once, then `step` repeatedly, and the model reaches all
/// architectural state through the [`Substrate`] handle it is given.
pub trait Model {
    /// One-time model initialization.
    ///
    /// Installs the architectural reset state: every GPR is populated from
    /// the substrate's reset table and the PC from the reset PC. Called
    /// exactly once, before any step.
    fn init(&mut self, core: &mut dyn Substrate);

    /// Advances architectural state by exactly one instruction.
    ///
    /// The model may perform any number of substrate accesses internally;
    /// the harness treats the call as one unit of forward progress and has
    /// no visibility into sub-steps.
    fn step(&mut self, core: &mut dyn Substrate);
}

/// Fetch-and-advance bring-up model.
///
/// Fetches the encoding at the current PC and advances the PC by one
/// 32-bit instruction, without decoding or executing anything. Useful for
/// driving a substrate end-to-end (reset handling, the fetch path, the
/// bounds policy, stall detection) before a generated core is available.
#[derive(Debug, Clone, Copy, Default)]
pub struct FreeRun;

impl Model for FreeRun {
    fn init(&mut self, core: &mut dyn Substrate) {
        for idx in 0..GPR_COUNT {
            let value = core.reset_value(idx as u8);
            core.write_gpr(idx as u8, value);
        }
        let _ = core.set_pc(core.reset_pc());
    }

    fn step(&mut self, core: &mut dyn Substrate) {
        let pc = core.get_pc();
        let _ = core.inst_fetch(pc);
        let _ = core.set_pc(pc.wrapping_add(INSTRUCTION_SIZE_32));
    }
}
