//! Simulation reports and boundary records.
//!
//! [`SimulationReport`] holds one full-precision [`SimulationResult`] per
//! policy. [`ResultRecord`] is the flat, serializable shape handed to
//! presentation layers, with averages rounded to 2 decimals and throughput
//! to 4. [`Comparison`] names the best policy per metric.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::models::{Algorithm, Pid, Process, SimulationResult, TimelineSegment};

/// Decimal places for average times in records.
pub const AVERAGE_DECIMALS: i32 = 2;
/// Decimal places for throughput in records.
pub const THROUGHPUT_DECIMALS: i32 = 4;

/// Rounds `value` to `decimals` places (half away from zero).
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

/// Results of every policy run for one request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationReport {
    quantum: i64,
    results: BTreeMap<Algorithm, SimulationResult>,
}

impl SimulationReport {
    /// Creates a report.
    pub fn new(quantum: i64, results: BTreeMap<Algorithm, SimulationResult>) -> Self {
        Self { quantum, results }
    }

    /// The all-zero report for an empty process set.
    pub fn empty(quantum: i64, algorithms: &[Algorithm]) -> Self {
        let results = algorithms
            .iter()
            .map(|&a| (a, SimulationResult::empty(a, a.label(quantum))))
            .collect();
        Self { quantum, results }
    }

    /// Round Robin quantum used for this report.
    pub fn quantum(&self) -> i64 {
        self.quantum
    }

    /// Result of one policy.
    pub fn get(&self, algorithm: Algorithm) -> Option<&SimulationResult> {
        self.results.get(&algorithm)
    }

    /// Results in presentation order (FCFS, SJF, RR, Priority).
    pub fn results(&self) -> impl Iterator<Item = &SimulationResult> {
        self.results.values()
    }

    /// Number of policy results.
    pub fn len(&self) -> usize {
        self.results.len()
    }

    /// Whether the report holds no results.
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Flat records keyed by algorithm identifier.
    pub fn to_records(&self) -> BTreeMap<&'static str, ResultRecord> {
        self.results
            .iter()
            .map(|(algorithm, result)| (algorithm.key(), ResultRecord::from(result)))
            .collect()
    }

    /// Best policy per metric, or `None` for an empty report.
    pub fn comparison(&self) -> Option<Comparison> {
        Comparison::from_results(self.results())
    }
}

/// One process row of a [`ResultRecord`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessRecord {
    /// Process identifier.
    pub pid: Pid,
    /// Tick at which the process became ready.
    pub arrival_time: i64,
    /// Total CPU time required.
    pub burst_time: i64,
    /// Scheduling priority (lower = more important).
    pub priority: i32,
    /// First dispatch tick, `-1` if never dispatched.
    pub start_time: i64,
    /// Tick at which the last unit of work finished.
    pub completion_time: i64,
    /// `completion_time - arrival_time`.
    pub turnaround_time: i64,
    /// `turnaround_time - burst_time`.
    pub waiting_time: i64,
    /// `start_time - arrival_time`, `-1` if never dispatched.
    pub response_time: i64,
}

impl From<&Process> for ProcessRecord {
    fn from(p: &Process) -> Self {
        Self {
            pid: p.pid,
            arrival_time: p.arrival_time,
            burst_time: p.burst_time,
            priority: p.priority,
            start_time: p.start_time.unwrap_or(-1),
            completion_time: p.completion_time,
            turnaround_time: p.turnaround_time,
            waiting_time: p.waiting_time,
            response_time: p.response_time.unwrap_or(-1),
        }
    }
}

/// Flat, rounded view of a [`SimulationResult`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultRecord {
    /// Policy label.
    pub algorithm: String,
    /// Mean waiting time, 2 decimals.
    pub avg_waiting_time: f64,
    /// Mean turnaround time, 2 decimals.
    pub avg_turnaround_time: f64,
    /// Mean response time, 2 decimals.
    pub avg_response_time: f64,
    /// Completed processes per tick, 4 decimals.
    pub throughput: f64,
    /// Latest completion time.
    pub total_time: i64,
    /// Process rows in completion order.
    pub processes: Vec<ProcessRecord>,
    /// Unmerged CPU allocations in dispatch order.
    pub timeline: Vec<TimelineSegment>,
}

impl From<&SimulationResult> for ResultRecord {
    fn from(result: &SimulationResult) -> Self {
        let m = &result.metrics;
        Self {
            algorithm: result.label.clone(),
            avg_waiting_time: round_to(m.avg_waiting, AVERAGE_DECIMALS),
            avg_turnaround_time: round_to(m.avg_turnaround, AVERAGE_DECIMALS),
            avg_response_time: round_to(m.avg_response, AVERAGE_DECIMALS),
            throughput: round_to(m.throughput, THROUGHPUT_DECIMALS),
            total_time: m.total_time,
            processes: result.processes.iter().map(ProcessRecord::from).collect(),
            timeline: result.timeline.segments().to_vec(),
        }
    }
}

/// Best policy for each metric.
///
/// On equal values the policy earlier in presentation order wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comparison {
    /// Lowest average waiting time.
    pub best_waiting: Algorithm,
    /// Lowest average turnaround time.
    pub best_turnaround: Algorithm,
    /// Lowest average response time.
    pub best_response: Algorithm,
    /// Highest throughput.
    pub best_throughput: Algorithm,
}

impl Comparison {
    /// Compares results; `None` if there are none.
    pub fn from_results<'a>(
        results: impl IntoIterator<Item = &'a SimulationResult>,
    ) -> Option<Self> {
        let results: Vec<&SimulationResult> = results.into_iter().collect();
        let first = *results.first()?;

        let pick = |better: fn(&SimulationResult, &SimulationResult) -> bool| {
            results
                .iter()
                .copied()
                .skip(1)
                .fold(first, |best, r| if better(r, best) { r } else { best })
                .algorithm
        };

        Some(Self {
            best_waiting: pick(|a, b| a.metrics.avg_waiting < b.metrics.avg_waiting),
            best_turnaround: pick(|a, b| a.metrics.avg_turnaround < b.metrics.avg_turnaround),
            best_response: pick(|a, b| a.metrics.avg_response < b.metrics.avg_response),
            best_throughput: pick(|a, b| a.metrics.throughput > b.metrics.throughput),
        })
    }
}
