//! Process (job) model.
//!
//! A process is a single CPU burst with an arrival tick and a priority.
//! The static parameters are supplied by the caller; the timing fields are
//! filled in by a scheduling policy and the metrics calculator.
//!
//! # Time Representation
//! All times are integer simulation ticks relative to t=0.

use serde::{Deserialize, Serialize};

/// Process identifier. Assigned 1..N in input order.
pub type Pid = u32;

/// A process to be scheduled on the simulated CPU.
///
/// Each policy run works on its own copy, so the timing fields of a value
/// only ever describe one policy's outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Process {
    /// Unique process identifier.
    pub pid: Pid,
    /// Tick at which the process becomes available.
    pub arrival_time: i64,
    /// Total CPU ticks required.
    pub burst_time: i64,
    /// Scheduling priority (lower value = more important).
    pub priority: i32,
    /// Ticks of burst not yet serviced. Only Round Robin decrements this.
    pub remaining_time: i64,
    /// Tick of first CPU allocation. `None` until dispatched.
    pub start_time: Option<i64>,
    /// Tick at which the burst finished. 0 until finished.
    pub completion_time: i64,
    /// `completion_time - arrival_time`.
    pub turnaround_time: i64,
    /// `turnaround_time - burst_time`.
    pub waiting_time: i64,
    /// `start_time - arrival_time`, fixed at first dispatch.
    pub response_time: Option<i64>,
}

impl Process {
    /// Creates a process with priority 0.
    pub fn new(pid: Pid, arrival_time: i64, burst_time: i64) -> Self {
        Self {
            pid,
            arrival_time,
            burst_time,
            priority: 0,
            remaining_time: burst_time,
            start_time: None,
            completion_time: 0,
            turnaround_time: 0,
            waiting_time: 0,
            response_time: None,
        }
    }

    /// Sets the scheduling priority.
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    /// Builds processes from `(arrival, burst, priority)` triples,
    /// assigning pids 1..N in input order.
    pub fn from_triples(triples: &[(i64, i64, i32)]) -> Vec<Self> {
        triples
            .iter()
            .zip(1..)
            .map(|(&(arrival, burst, priority), pid)| {
                Self::new(pid, arrival, burst).with_priority(priority)
            })
            .collect()
    }

    /// Restores the freshly-constructed state, keeping the static parameters.
    pub fn reset(&mut self) {
        self.remaining_time = self.burst_time;
        self.start_time = None;
        self.completion_time = 0;
        self.turnaround_time = 0;
        self.waiting_time = 0;
        self.response_time = None;
    }

    /// Whether the process has been dispatched at least once.
    #[inline]
    pub fn has_started(&self) -> bool {
        self.start_time.is_some()
    }

    /// Records a dispatch at `now`.
    ///
    /// Only the first dispatch sets `start_time` and `response_time`.
    pub fn record_dispatch(&mut self, now: i64) {
        if self.start_time.is_none() {
            self.start_time = Some(now);
            self.response_time = Some(now - self.arrival_time);
        }
    }

    /// Records completion at `now`.
    pub fn record_completion(&mut self, now: i64) {
        self.completion_time = now;
    }

    /// Derives turnaround, waiting and (if still unset) response time.
    pub fn compute_times(&mut self) {
        self.turnaround_time = self.completion_time - self.arrival_time;
        self.waiting_time = self.turnaround_time - self.burst_time;
        if self.response_time.is_none() {
            let start = self.start_time.unwrap_or(self.arrival_time);
            self.response_time = Some(start - self.arrival_time);
        }
    }
}

impl std::fmt::Display for Process {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "P{}(AT:{}, BT:{}, Priority:{})",
            self.pid, self.arrival_time, self.burst_time, self.priority
        )
    }
}
