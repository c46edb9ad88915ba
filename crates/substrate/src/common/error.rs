//! Fault and error definitions.
//!
//! This module defines every error type of the substrate. It includes:
//! 1. **Memory Faults:** Records of out-of-bounds physical accesses,
//!    latched by the core during a step.
//! 2. **Simulation Exceptions:** Conditions that end a run, surfaced to
//!    the harness by `check_step`.
//! 3. **Setup Errors:** Image loading and configuration parsing failures.

use crate::common::data::{AccessType, MarchBits};
use thiserror::Error;

/// Record of a physical memory access outside the mapped range.
///
/// The model-facing read/write primitives cannot return errors, so the
/// first fault of a run is latched on the core and surfaced after the
/// step completes. A faulting read returns zero, which is distinct from a
/// successful read of zero-initialized memory only through this record; a
/// faulting write is discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("out-of-bounds {access} of {width} byte(s) at physical address {address:#x}")]
pub struct MemFault {
    /// Classification of the faulting access.
    pub access: AccessType,
    /// Access width in bytes (1, 2, 4, or 8).
    pub width: u8,
    /// The faulting physical address.
    pub address: MarchBits,
}

/// Conditions that terminate a simulation run.
///
/// Termination is an architectural observation, not a return value of the
/// step path: the harness polls for it between steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SimulationException {
    /// The program stored the watched exit pattern.
    #[error("program signalled exit through the watched store")]
    Exited,

    /// The PC repeated for the configured number of consecutive steps.
    ///
    /// Bare-metal images conventionally end in a tight spin loop, so a
    /// held PC is reported as the end of the run rather than an error.
    #[error("pc held at {pc:#x} for {count} consecutive steps")]
    Stalled {
        /// The repeating program counter value.
        pc: MarchBits,
        /// Number of consecutive steps that observed the same PC.
        count: u64,
    },

    /// A step performed a physical access outside the mapped range.
    #[error(transparent)]
    OutOfBounds(#[from] MemFault),
}

/// Errors raised while loading a program image.
#[derive(Debug, Error)]
pub enum LoaderError {
    /// The image file could not be read from disk.
    #[error("failed to read image '{path}': {source}")]
    Io {
        /// Path of the unreadable file.
        path: String,
        /// Underlying filesystem error.
        source: std::io::Error,
    },

    /// The image is not a parseable ELF object.
    #[error("failed to parse ELF image: {0}")]
    Parse(#[from] object::read::Error),

    /// A loadable part of the image falls outside the mapped memory range.
    #[error("segment of {size} byte(s) at {address:#x} does not fit in physical memory")]
    Segment {
        /// Load address of the offending segment.
        address: MarchBits,
        /// Segment size in bytes.
        size: u64,
    },
}

/// Errors raised while loading a configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read from disk.
    #[error("failed to read config '{path}': {source}")]
    Io {
        /// Path of the unreadable file.
        path: String,
        /// Underlying filesystem error.
        source: std::io::Error,
    },

    /// The file contents are not valid configuration JSON.
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
}
