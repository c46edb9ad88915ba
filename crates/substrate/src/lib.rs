//! Host substrate and stepping harness for generated RISC-V models.
//!
//! This crate implements the execution boundary between a formally
//! generated instruction-set model and its host. It provides:
//! 1. **Register File:** The architectural GPR bank, the program counter,
//!    and the reset table, all owned by the host.
//! 2. **Memory:** A flat little-endian physical memory window with a
//!    fixed out-of-bounds policy.
//! 3. **Model ABI:** The `Substrate` surface a generated model calls into
//!    and the `Model` contract the harness drives.
//! 4. **Harness:** The stepper (init once, step repeatedly, check between
//!    steps), program loading, configuration, and run statistics.

/// Common utilities and types (machine word, access types, faults, registers).
pub mod common;

/// Run configuration structures and defaults.
pub mod config;

/// Execution core: the substrate aggregate and the boundary traits.
pub mod core;

/// Physical memory substrate.
pub mod mem;

/// The model contract and the built-in bring-up model.
pub mod model;

/// Harness-side utilities: the stepper and program loading.
pub mod sim;

/// Run statistics collection and reporting.
pub mod stats;

pub use crate::common::error::SimulationException;
pub use crate::config::Config;
pub use crate::core::Core;
pub use crate::core::traits::Substrate;
pub use crate::model::Model;
pub use crate::sim::simulator::Simulator;
