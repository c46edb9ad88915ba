//! # Statistics Tests
//!
//! Tests for the run statistics counters.

use skiff_core::stats::SimStats;

#[test]
fn test_stats_default_counters_are_zero() {
    let stats = SimStats::default();

    assert_eq!(stats.steps, 0);
    assert_eq!(stats.fetches, 0);
    assert_eq!(stats.mem_reads, 0);
    assert_eq!(stats.mem_writes, 0);
    assert_eq!(stats.gpr_writes, 0);
    assert_eq!(stats.fences, 0);
}

#[test]
fn test_stats_clone_keeps_counts() {
    let mut stats = SimStats::default();
    stats.steps = 100;
    stats.fetches = 100;
    stats.mem_reads = 7;
    stats.gpr_writes = 42;

    let snapshot = stats.clone();
    stats.steps += 1;

    assert_eq!(snapshot.steps, 100);
    assert_eq!(snapshot.fetches, 100);
    assert_eq!(snapshot.mem_reads, 7);
    assert_eq!(snapshot.gpr_writes, 42);
    assert_eq!(stats.steps, 101);
}

#[test]
fn test_stats_print_does_not_panic() {
    let mut stats = SimStats::default();
    stats.steps = 1_000_000;
    stats.fetches = 1_000_000;
    stats.print();
    SimStats::default().print();
}
