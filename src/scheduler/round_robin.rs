//! Round Robin scheduling.
//!
//! # Algorithm
//!
//! 1. Sort processes by arrival time (ties by pid).
//! 2. Enqueue every process with `arrival_time <= now`.
//! 3. If the queue is empty, advance the clock one tick and retry.
//! 4. Otherwise run the head for `min(quantum, remaining)` ticks.
//! 5. Enqueue processes that arrived during the slice, *then* re-enqueue
//!    the preempted process if it still has work left.
//!
//! Step 5 ordering means an arrival at the exact tick a slice ends is
//! served before the process that was just preempted.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3.3

use std::collections::VecDeque;

use tracing::trace;

use super::{sort_by_arrival, PolicyRun, SchedulingPolicy};
use crate::error::{Result, SimulationError};
use crate::models::{Algorithm, Process, Timeline};
use crate::validation::validate_quantum;

/// Default time quantum (ticks).
pub const DEFAULT_QUANTUM: i64 = 2;

/// Round Robin with a fixed quantum.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundRobin {
    quantum: i64,
}

impl RoundRobin {
    /// Creates the policy.
    ///
    /// # Errors
    /// [`SimulationError::InvalidQuantum`] if `quantum <= 0`.
    pub fn new(quantum: i64) -> Result<Self> {
        validate_quantum(quantum).map_err(|_| SimulationError::InvalidQuantum(quantum))?;
        Ok(Self { quantum })
    }

    /// The time quantum in ticks.
    pub fn quantum(&self) -> i64 {
        self.quantum
    }
}

impl Default for RoundRobin {
    fn default() -> Self {
        Self {
            quantum: DEFAULT_QUANTUM,
        }
    }
}

impl SchedulingPolicy for RoundRobin {
    fn algorithm(&self) -> Algorithm {
        Algorithm::RoundRobin
    }

    fn label(&self) -> String {
        self.algorithm().label(self.quantum)
    }

    fn schedule(&self, mut processes: Vec<Process>) -> PolicyRun {
        sort_by_arrival(&mut processes);

        let n = processes.len();
        let mut pending = processes.into_iter().peekable();
        let mut queue: VecDeque<Process> = VecDeque::new();
        let mut completed: Vec<Process> = Vec::with_capacity(n);
        let mut timeline = Timeline::new();
        let mut current_time = 0;

        while completed.len() < n {
            while let Some(p) = pending.next_if(|p| p.arrival_time <= current_time) {
                queue.push_back(p);
            }

            let Some(mut process) = queue.pop_front() else {
                // Idle one tick at a time
                current_time += 1;
                continue;
            };

            process.record_dispatch(current_time);
            let exec = self.quantum.min(process.remaining_time);
            trace!(pid = process.pid, start = current_time, duration = exec, "dispatch");
            timeline.push(process.pid, current_time, exec);

            current_time += exec;
            process.remaining_time -= exec;

            // Arrivals during the slice precede the preempted process
            while let Some(p) = pending.next_if(|p| p.arrival_time <= current_time) {
                queue.push_back(p);
            }

            if process.remaining_time > 0 {
                queue.push_back(process);
            } else {
                process.record_completion(current_time);
                completed.push(process);
            }
        }

        PolicyRun {
            completed,
            timeline,
        }
    }
}
