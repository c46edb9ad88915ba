//! Harness-side simulation utilities.
//!
//! This module contains everything the driver of a run needs around the
//! core itself: the stepper that advances the model and the loader that
//! places program images into memory beforehand.

/// Program image loading (ELF and flat binaries).
pub mod loader;

/// Stepper harness implementation.
pub mod simulator;

pub use simulator::Simulator;
