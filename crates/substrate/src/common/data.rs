//! Fundamental data types shared across the substrate.
//!
//! This module defines the types that appear on both sides of the model
//! boundary. It includes:
//! 1. **Machine Word:** The architectural register width.
//! 2. **Access Classification:** The fetch/read/write distinction used in
//!    fault records, trace events, and statistics.

use std::fmt;

/// Native machine word of the modelled architecture (64 bits for RV64).
///
/// Program counter and general-purpose register values are all `MarchBits`
/// wide. The width is fixed for the whole build and never varies per call.
pub type MarchBits = u64;

/// Classification of a physical memory access.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AccessType {
    /// Instruction fetch.
    Fetch,
    /// Data load.
    Read,
    /// Data store.
    Write,
}

impl AccessType {
    /// Lower-case name used in fault messages and trace records.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Fetch => "fetch",
            Self::Read => "read",
            Self::Write => "write",
        }
    }
}

impl fmt::Display for AccessType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
