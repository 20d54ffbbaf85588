//! Non-preemptive ready-queue scheduling (SJF and Priority).
//!
//! # Algorithm
//!
//! 1. Sort processes by arrival time (ties by pid).
//! 2. Move every process with `arrival_time <= now` into the ready queue.
//! 3. If the queue is non-empty, dispatch the best process per the
//!    [`RuleEngine`] for its full burst.
//! 4. Otherwise jump the clock to the next arrival.
//!
//! A dispatched process always runs to completion, and no aging is applied.
//!
//! # Complexity
//! O(n² · r) where r = number of rules (linear scan of the ready queue).
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3

use tracing::trace;

use super::{sort_by_arrival, PolicyRun, SchedulingPolicy};
use crate::dispatching::{rules, DispatchContext, RuleEngine};
use crate::models::{Algorithm, Process, Timeline};

/// Non-preemptive scheduler driven by a dispatching rule.
#[derive(Debug, Clone)]
pub struct NonPreemptive {
    algorithm: Algorithm,
    engine: RuleEngine,
}

impl NonPreemptive {
    /// Creates a scheduler selecting by `engine`, reported as `algorithm`.
    pub fn new(algorithm: Algorithm, engine: RuleEngine) -> Self {
        Self { algorithm, engine }
    }

    /// Shortest Job First: selection key `(burst_time, pid)`.
    pub fn sjf() -> Self {
        Self::new(
            Algorithm::Sjf,
            RuleEngine::new().with_rule(rules::ShortestBurst),
        )
    }

    /// Priority scheduling: selection key `(priority, pid)`.
    pub fn priority() -> Self {
        Self::new(
            Algorithm::Priority,
            RuleEngine::new().with_rule(rules::HighestPriority),
        )
    }

    /// The selection rules in use.
    pub fn engine(&self) -> &RuleEngine {
        &self.engine
    }
}

impl SchedulingPolicy for NonPreemptive {
    fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    fn schedule(&self, mut processes: Vec<Process>) -> PolicyRun {
        sort_by_arrival(&mut processes);

        let n = processes.len();
        let mut pending = processes.into_iter().peekable();
        let mut ready: Vec<Process> = Vec::new();
        let mut completed: Vec<Process> = Vec::with_capacity(n);
        let mut timeline = Timeline::new();
        let mut current_time = 0;

        while completed.len() < n {
            while let Some(p) = pending.next_if(|p| p.arrival_time <= current_time) {
                ready.push(p);
            }

            let context = DispatchContext::at_time(current_time);
            match self.engine.select_best(&ready, &context) {
                Some(idx) => {
                    let mut process = ready.swap_remove(idx);
                    process.record_dispatch(current_time);
                    trace!(
                        pid = process.pid,
                        start = current_time,
                        duration = process.burst_time,
                        "dispatch"
                    );
                    timeline.push(process.pid, current_time, process.burst_time);

                    current_time += process.burst_time;
                    process.record_completion(current_time);
                    completed.push(process);
                }
                None => {
                    // CPU idle: jump to the next arrival
                    if let Some(next) = pending.peek() {
                        current_time = next.arrival_time;
                    }
                }
            }
        }

        PolicyRun {
            completed,
            timeline,
        }
    }
}
