//! Scheduling policies, metrics and the simulation entry point.
//!
//! # Policies
//!
//! | Policy | Preemptive | Selection | Idle handling |
//! |--------|-----------|-----------|---------------|
//! | [`Fcfs`] | no | arrival order | jump to next arrival |
//! | [`NonPreemptive::sjf`] | no | `(burst, pid)` | jump to next arrival |
//! | [`RoundRobin`] | yes (quantum) | FIFO queue | one tick at a time |
//! | [`NonPreemptive::priority`] | no | `(priority, pid)` | jump to next arrival |
//!
//! Every policy consumes its own copy of the process set and returns the
//! completed records plus a timeline; [`PerformanceMetrics`] then derives
//! the timing fields and aggregates. [`Simulator`] validates input once and
//! runs the configured policies, optionally on scoped threads.
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2014), "Modern Operating Systems", Ch. 2.4

mod fcfs;
mod metrics;
mod non_preemptive;
mod round_robin;
mod simulator;

pub use fcfs::Fcfs;
pub use metrics::PerformanceMetrics;
pub use non_preemptive::NonPreemptive;
pub use round_robin::{RoundRobin, DEFAULT_QUANTUM};
pub use simulator::{run_policy, Simulator};

use std::fmt::Debug;

use crate::models::{Algorithm, Process, Timeline};

/// Raw output of a policy: completed processes and the dispatch timeline.
///
/// Derived timing fields are not filled in yet.
#[derive(Debug, Clone, Default)]
pub struct PolicyRun {
    /// Processes in completion order.
    pub completed: Vec<Process>,
    /// CPU allocations in dispatch order.
    pub timeline: Timeline,
}

/// A single-CPU scheduling policy.
///
/// Implementations are pure: the same input always yields the same run,
/// and nothing outside the owned `processes` is mutated.
pub trait SchedulingPolicy: Send + Sync + Debug {
    /// Which policy this is.
    fn algorithm(&self) -> Algorithm;

    /// Human-readable label for reports.
    fn label(&self) -> String {
        self.algorithm().label(DEFAULT_QUANTUM)
    }

    /// Simulates the policy over a private copy of the process set.
    fn schedule(&self, processes: Vec<Process>) -> PolicyRun;
}

/// Sorts by arrival time, then pid.
pub(crate) fn sort_by_arrival(processes: &mut [Process]) {
    processes.sort_by_key(|p| (p.arrival_time, p.pid));
}
