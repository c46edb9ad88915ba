//! Stepper harness: drives a model one instruction at a time.
//!
//! This module implements the run protocol at the model boundary:
//! 1. **Lifecycle:** Init exactly once, then repeated synchronous steps.
//! 2. **Reset Handling:** The level-sensitive reset flag is cleared once,
//!    after the first step completes.
//! 3. **Run Checking:** Latched faults, the watched exit store, and a
//!    held PC surface through `check_step` between steps.

use crate::common::constants::TRACE_EVENT_TARGET;
use crate::common::data::MarchBits;
use crate::common::error::SimulationException;
use crate::config::Config;
use crate::core::Core;
use crate::core::traits::Substrate;
use crate::model::Model;
use tracing::{Level, event};

/// Stepper harness owning the core and the model.
///
/// The lifecycle is `Uninitialized -> init -> Ready -> step*`. Calling
/// `step` before `init`, or `init` twice, is a driver contract violation
/// and aborts. Termination is an architectural observation reported by
/// [`check_step`](Simulator::check_step), never a distinguished return
/// value of `step`.
#[derive(Debug)]
pub struct Simulator<M> {
    core: Core,
    model: M,
    initialized: bool,
    max_same_instruction: u64,
    last_pc: MarchBits,
    same_pc_count: u64,
}

impl<M: Model> Simulator<M> {
    /// Creates a harness over `core` driving `model`.
    ///
    /// Run-control knobs (the stall threshold) come from the harness
    /// section of `config`.
    pub fn new(core: Core, model: M, config: &Config) -> Self {
        Self {
            core,
            model,
            initialized: false,
            max_same_instruction: config.harness.max_same_instruction,
            last_pc: 0,
            same_pc_count: 0,
        }
    }

    /// Read access to the core: registers, memory, and statistics.
    pub const fn core(&self) -> &Core {
        &self.core
    }

    /// Mutable access to the core.
    pub const fn core_mut(&mut self) -> &mut Core {
        &mut self.core
    }

    /// Consumes the harness, returning the core for final inspection.
    pub fn into_core(self) -> Core {
        self.core
    }

    /// Runs model initialization.
    ///
    /// The model populates the register file from the reset table; the
    /// reset level stays asserted until the first step completes.
    ///
    /// # Panics
    /// Panics when called a second time.
    pub fn init(&mut self) {
        assert!(!self.initialized, "model init called twice");
        self.model.init(&mut self.core);
        self.initialized = true;
        self.last_pc = self.core.regs.get_pc();
        self.same_pc_count = 0;
    }

    /// Overrides the PC with a program entry point.
    ///
    /// Applied after `init` when the loaded image's entry differs from the
    /// architectural reset PC; emits a `reset_vector` trace event.
    ///
    /// # Panics
    /// Panics when called before `init`.
    pub fn reset_vector(&mut self, entry: MarchBits) {
        assert!(self.initialized, "reset vector applied before model init");
        event!(
            target: TRACE_EVENT_TARGET,
            Level::TRACE,
            event_type = "reset_vector",
            new_addr = entry
        );
        self.last_pc = self.core.regs.set_pc(entry);
        self.same_pc_count = 0;
    }

    /// Advances the model by exactly one instruction.
    ///
    /// The first step runs with the reset level still asserted; the level
    /// is cleared here once that step returns.
    ///
    /// # Panics
    /// Panics when called before `init`.
    pub fn step(&mut self) {
        assert!(self.initialized, "step called before model init");
        let was_reset = self.core.is_reset();
        self.model.step(&mut self.core);
        if was_reset {
            self.core.clear_reset();
        }
        self.core.stats.steps += 1;

        let pc = self.core.regs.get_pc();
        if pc == self.last_pc {
            self.same_pc_count += 1;
        } else {
            self.last_pc = pc;
            self.same_pc_count = 0;
        }
    }

    /// Checks the outcome of the run so far.
    ///
    /// # Errors
    /// - [`SimulationException::OutOfBounds`] when a step latched a fault
    /// - [`SimulationException::Exited`] when the watched store was seen
    /// - [`SimulationException::Stalled`] when the PC has repeated for the
    ///   configured number of consecutive steps (a threshold of 0 disables
    ///   the check)
    pub fn check_step(&self) -> Result<(), SimulationException> {
        if let Some(fault) = self.core.fault() {
            return Err(SimulationException::OutOfBounds(fault));
        }
        if self.core.exit_observed() {
            return Err(SimulationException::Exited);
        }
        if self.max_same_instruction > 0 && self.same_pc_count >= self.max_same_instruction {
            return Err(SimulationException::Stalled {
                pc: self.last_pc,
                count: self.same_pc_count,
            });
        }
        Ok(())
    }

    /// Steps until an exception or `max_steps`, whichever comes first.
    ///
    /// # Errors
    /// Returns the first exception `check_step` reports; `Ok` means the
    /// step limit was reached without one.
    ///
    /// # Panics
    /// Panics when called before `init`.
    pub fn run(&mut self, max_steps: u64) -> Result<(), SimulationException> {
        for _ in 0..max_steps {
            self.step();
            self.check_step()?;
        }
        Ok(())
    }
}
