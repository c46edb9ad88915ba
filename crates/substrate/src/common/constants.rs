//! System-wide constants for the substrate and harness.

/// Number of general-purpose registers in the architectural bank (`x0`-`x31`).
pub const GPR_COUNT: usize = 32;

/// Size of a standard 32-bit RISC-V instruction in bytes.
pub const INSTRUCTION_SIZE_32: u64 = 4;

/// `tracing` target carrying structured trace events.
///
/// Records emitted under this target (`physical_memory`, `arch_state`,
/// `instruction_fetch`, `reset_vector`) form the machine-readable run
/// trace; everything else in the log stream is human-oriented.
pub const TRACE_EVENT_TARGET: &str = "trace_event";
