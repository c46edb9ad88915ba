//! # Unit Components
//!
//! This module serves as the central hub for the substrate's unit tests.
//! The tree mirrors the source layout: register state, the execution
//! core and its ABI, physical memory, the stepper, and configuration.

/// Unit tests for shared data structures.
///
/// This module includes tests for the unified register file and the
/// fault and exception types.
pub mod common;



/// Unit tests for the physical memory substrate (buffer and window).
pub mod mem;


/// Unit tests for run statistics counters.
pub mod stats;
