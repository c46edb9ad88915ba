//! Execution core: the host side of the model boundary.
//!
//! This module implements `Core`, the aggregate the generated model steps
//! against. It provides:
//! 1. **Ownership:** The register file and physical memory, held
//!    exclusively; there is no global state behind the ABI.
//! 2. **ABI Implementation:** The [`Substrate`] call surface.
//! 3. **Fault Latch:** The first out-of-bounds access of a run, kept for
//!    the harness to surface after the step completes.
//! 4. **Observability:** Structured trace events, access counters, and
//!    the GPR write hook.

/// RISC-V architectural state components.
pub mod arch;

/// Model boundary traits.
pub mod traits;

use crate::common::constants::TRACE_EVENT_TARGET;
use crate::common::data::{AccessType, MarchBits};
use crate::common::error::MemFault;
use crate::common::reg::RegisterFile;
use crate::config::{Config, ExitPattern};
use crate::core::arch::reset::ResetTable;
use crate::core::traits::{GprWriteHook, Substrate};
use crate::mem::Memory;
use crate::stats::SimStats;
use std::fmt;
use tracing::{Level, debug, event, trace};

/// Host execution substrate: registers, memory, and run status.
///
/// The harness owns exactly one `Core` per run and passes it to the model
/// on every init and step call. Out-of-bounds accesses follow the fixed
/// policy documented on [`Substrate`]: latch the first fault, return zero
/// fill on reads, discard writes.
pub struct Core {
    /// Architectural register state: GPR bank, PC, and reset table.
    pub regs: RegisterFile,
    /// Physical memory window.
    pub mem: Memory,
    /// Boundary activity counters for end-of-run reporting.
    pub stats: SimStats,
    in_reset: bool,
    fault: Option<MemFault>,
    exit_pattern: Option<ExitPattern>,
    exited: bool,
    hook: Option<Box<dyn GprWriteHook>>,
}

impl Core {
    /// Builds a core from the configuration: the memory window, the reset
    /// table, and the optional watched exit store.
    pub fn new(config: &Config) -> Self {
        Self {
            regs: RegisterFile::new(ResetTable::new(config.reset.pc, config.reset.xregs)),
            mem: Memory::new(config.system.ram_base, config.system.ram_size),
            stats: SimStats::default(),
            in_reset: true,
            fault: None,
            exit_pattern: config.harness.exit,
            exited: false,
            hook: None,
        }
    }

    /// Registers the observer notified after every architectural GPR
    /// write. Only writes performed after registration are observed.
    pub fn set_gpr_hook(&mut self, hook: Box<dyn GprWriteHook>) {
        self.hook = Some(hook);
    }

    /// Returns the latched memory fault, if any access has raised one.
    pub const fn fault(&self) -> Option<MemFault> {
        self.fault
    }

    /// Reports whether the watched exit store has been observed.
    pub const fn exit_observed(&self) -> bool {
        self.exited
    }

    /// Clears the reset level.
    ///
    /// The stepper calls this exactly once, after the first step returns;
    /// a manual driver takes over the same obligation.
    pub const fn clear_reset(&mut self) {
        self.in_reset = false;
    }

    /// Latches `fault` unless an earlier one is already held.
    const fn latch(&mut self, fault: MemFault) {
        if self.fault.is_none() {
            self.fault = Some(fault);
        }
    }

    /// Counts and traces one data-side physical memory access.
    fn note_access(&mut self, access: AccessType, bytes: u8, address: MarchBits) {
        match access {
            AccessType::Write => self.stats.mem_writes += 1,
            AccessType::Read | AccessType::Fetch => self.stats.mem_reads += 1,
        }
        event!(
            target: TRACE_EVENT_TARGET,
            Level::TRACE,
            event_type = "physical_memory",
            action = access.as_str(),
            bytes,
            address
        );
    }

    /// Marks the run as exited when a completed store matches the watched
    /// pattern. Narrow stores compare zero-extended.
    const fn watch_exit(&mut self, address: MarchBits, data: MarchBits) {
        if let Some(pattern) = self.exit_pattern {
            if pattern.address == address && pattern.data == data {
                self.exited = true;
            }
        }
    }
}

impl Substrate for Core {
    fn inst_fetch(&mut self, pc: MarchBits) -> u32 {
        self.stats.fetches += 1;
        let data = match self.mem.fetch_u32(pc) {
            Ok(encoding) => encoding,
            Err(fault) => {
                self.latch(fault);
                0
            }
        };
        event!(
            target: TRACE_EVENT_TARGET,
            Level::TRACE,
            event_type = "instruction_fetch",
            data
        );
        data
    }

    fn fence_i(&mut self, pred: u8, succ: u8) {
        self.stats.fences += 1;
        trace!(pred, succ, "fence_i");
    }

    fn is_reset(&self) -> bool {
        self.in_reset
    }

    fn phy_read_byte(&mut self, address: MarchBits) -> u8 {
        self.note_access(AccessType::Read, 1, address);
        match self.mem.read_u8(address) {
            Ok(val) => val,
            Err(fault) => {
                self.latch(fault);
                0
            }
        }
    }

    fn phy_read_half_word(&mut self, address: MarchBits) -> u16 {
        self.note_access(AccessType::Read, 2, address);
        match self.mem.read_u16(address) {
            Ok(val) => val,
            Err(fault) => {
                self.latch(fault);
                0
            }
        }
    }

    fn phy_read_word(&mut self, address: MarchBits) -> u32 {
        self.note_access(AccessType::Read, 4, address);
        match self.mem.read_u32(address) {
            Ok(val) => val,
            Err(fault) => {
                self.latch(fault);
                0
            }
        }
    }

    fn phy_read_double_word(&mut self, address: MarchBits) -> u64 {
        self.note_access(AccessType::Read, 8, address);
        match self.mem.read_u64(address) {
            Ok(val) => val,
            Err(fault) => {
                self.latch(fault);
                0
            }
        }
    }

    fn phy_write_byte(&mut self, address: MarchBits, data: u8) {
        self.note_access(AccessType::Write, 1, address);
        match self.mem.write_u8(address, data) {
            Ok(()) => self.watch_exit(address, MarchBits::from(data)),
            Err(fault) => self.latch(fault),
        }
    }

    fn phy_write_half_word(&mut self, address: MarchBits, data: u16) {
        self.note_access(AccessType::Write, 2, address);
        match self.mem.write_u16(address, data) {
            Ok(()) => self.watch_exit(address, MarchBits::from(data)),
            Err(fault) => self.latch(fault),
        }
    }

    fn phy_write_word(&mut self, address: MarchBits, data: u32) {
        self.note_access(AccessType::Write, 4, address);
        match self.mem.write_u32(address, data) {
            Ok(()) => self.watch_exit(address, MarchBits::from(data)),
            Err(fault) => self.latch(fault),
        }
    }

    fn phy_write_double_word(&mut self, address: MarchBits, data: u64) {
        self.note_access(AccessType::Write, 8, address);
        match self.mem.write_u64(address, data) {
            Ok(()) => self.watch_exit(address, data),
            Err(fault) => self.latch(fault),
        }
    }

    fn read_gpr(&self, index: u8) -> MarchBits {
        self.regs.read(usize::from(index))
    }

    fn write_gpr(&mut self, index: u8, value: MarchBits) {
        self.regs.write(usize::from(index), value);
        // Re-read so observers see the committed value, not the request:
        // a write to x0 commits as 0.
        let committed = self.regs.read(usize::from(index));
        let pc = self.regs.get_pc();
        self.stats.gpr_writes += 1;
        event!(
            target: TRACE_EVENT_TARGET,
            Level::TRACE,
            event_type = "arch_state",
            action = "write",
            pc,
            reg_idx = index,
            data = committed
        );
        if let Some(hook) = self.hook.as_mut() {
            hook.on_gpr_write(index, committed, pc);
        }
    }

    fn get_pc(&self) -> MarchBits {
        self.regs.get_pc()
    }

    fn set_pc(&mut self, value: MarchBits) -> MarchBits {
        self.regs.set_pc(value)
    }

    fn reset_value(&self, index: u8) -> MarchBits {
        self.regs.reset_value(usize::from(index))
    }

    fn reset_pc(&self) -> MarchBits {
        self.regs.reset_pc()
    }

    fn exception_raised(&self) -> bool {
        self.fault.is_some()
    }

    fn exception_address(&self) -> MarchBits {
        self.fault.map_or(0, |fault| fault.address)
    }

    fn print_line(&self, text: &str) {
        debug!("print_line: {text}");
    }
}

impl fmt::Debug for Core {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Core")
            .field("regs", &self.regs)
            .field("mem", &self.mem)
            .field("in_reset", &self.in_reset)
            .field("fault", &self.fault)
            .field("exited", &self.exited)
            .finish_non_exhaustive()
    }
}
