//! Run statistics collection and reporting.
//!
//! This module tracks boundary-level activity during a run. It provides:
//! 1. **Step Counters:** Instructions stepped and encodings fetched.
//! 2. **Access Counters:** Physical memory traffic, GPR writes, and
//!    fetch barriers.
//! 3. **Reporting:** A formatted end-of-run summary with the step rate.

use std::time::Instant;

/// Boundary activity counters for one run.
///
/// The wall clock starts when the counters are created, which in practice
/// is when the core is built.
#[derive(Debug, Clone)]
pub struct SimStats {
    start_time: Instant,
    /// Instructions stepped.
    pub steps: u64,
    /// Instruction encodings fetched.
    pub fetches: u64,
    /// Data-side physical memory reads.
    pub mem_reads: u64,
    /// Physical memory writes.
    pub mem_writes: u64,
    /// Architectural GPR writes.
    pub gpr_writes: u64,
    /// Instruction-fetch barriers issued.
    pub fences: u64,
}

impl Default for SimStats {
    fn default() -> Self {
        Self {
            start_time: Instant::now(),
            steps: 0,
            fetches: 0,
            mem_reads: 0,
            mem_writes: 0,
            gpr_writes: 0,
            fences: 0,
        }
    }
}

impl SimStats {
    /// Prints the run summary to stdout.
    pub fn print(&self) {
        let seconds = self.start_time.elapsed().as_secs_f64();
        let rate = if seconds > 0.0 {
            self.steps as f64 / seconds / 1_000_000.0
        } else {
            0.0
        };
        println!("\n==========================================================");
        println!("SIMULATION STATISTICS");
        println!("==========================================================");
        println!("host.seconds             {seconds:.4}");
        println!("sim.steps                {}", self.steps);
        println!("sim.msteps_per_sec       {rate:.2}");
        println!("----------------------------------------------------------");
        println!("mem.fetches              {}", self.fetches);
        println!("mem.reads                {}", self.mem_reads);
        println!("mem.writes               {}", self.mem_writes);
        println!("reg.writes               {}", self.gpr_writes);
        println!("sync.fence_i             {}", self.fences);
        println!("==========================================================");
    }
}
