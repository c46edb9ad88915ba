//! RISC-V architectural state components.
//!
//! This module contains the host-owned pieces of architectural state. It
//! includes the following modules:
//! 1. **GPRs:** General-Purpose Register bank with the hardwired `x0`.
//! 2. **Reset:** The reset value table applied during model init.

/// General-purpose register bank implementation.
pub mod gpr;

/// Reset value table definitions.
pub mod reset;
