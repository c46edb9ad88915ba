//! Common utilities and types shared across the substrate.
//!
//! This module provides fundamental building blocks used by every other
//! component. It includes:
//! 1. **Constants:** System-wide constants for registers, instructions,
//!    and trace emission.
//! 2. **Data Types:** The machine word and memory access classification.
//! 3. **Error Handling:** Fault records and run-terminating exceptions.
//! 4. **Register Management:** The unified register file.

/// Common constants used throughout the substrate.
pub mod constants;

/// Machine word and memory access type definitions.
pub mod data;

/// Fault and error definitions.
pub mod error;

/// Register file implementation.
pub mod reg;

pub use data::{AccessType, MarchBits};
pub use error::{MemFault, SimulationException};
pub use reg::RegisterFile;
