//! Simulation result model.
//!
//! Bundles everything one policy run produces: the completed process set,
//! aggregate metrics and the execution timeline.

use serde::{Deserialize, Serialize};

use super::{Process, Timeline};
use crate::scheduler::PerformanceMetrics;

/// The scheduling policies the engine implements.
///
/// Serialized as the short identifier used for result maps
/// (`"FCFS"`, `"SJF"`, `"RR"`, `"Priority"`).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum Algorithm {
    /// First-Come-First-Served.
    #[serde(rename = "FCFS")]
    Fcfs,
    /// Shortest Job First, non-preemptive.
    #[serde(rename = "SJF")]
    Sjf,
    /// Round Robin with a fixed quantum.
    #[serde(rename = "RR")]
    RoundRobin,
    /// Priority scheduling, non-preemptive.
    #[serde(rename = "Priority")]
    Priority,
}

impl Algorithm {
    /// All policies, in presentation order.
    pub const ALL: [Algorithm; 4] = [
        Algorithm::Fcfs,
        Algorithm::Sjf,
        Algorithm::RoundRobin,
        Algorithm::Priority,
    ];

    /// Short identifier used as a result-map key.
    pub fn key(&self) -> &'static str {
        match self {
            Self::Fcfs => "FCFS",
            Self::Sjf => "SJF",
            Self::RoundRobin => "RR",
            Self::Priority => "Priority",
        }
    }

    /// Human-readable label. `quantum` only affects Round Robin.
    pub fn label(&self, quantum: i64) -> String {
        match self {
            Self::Fcfs => "FCFS".to_string(),
            Self::Sjf => "SJF".to_string(),
            Self::RoundRobin => format!("Round Robin (Quantum={quantum})"),
            Self::Priority => "Priority Scheduling".to_string(),
        }
    }

    /// Whether the policy can interrupt a running process.
    pub fn is_preemptive(&self) -> bool {
        matches!(self, Self::RoundRobin)
    }
}

impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

/// Outcome of one policy run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationResult {
    /// Policy that produced this result.
    pub algorithm: Algorithm,
    /// Human-readable policy label.
    pub label: String,
    /// Completed processes, in completion order.
    pub processes: Vec<Process>,
    /// Aggregate performance metrics.
    #[serde(flatten)]
    pub metrics: PerformanceMetrics,
    /// CPU allocations in dispatch order.
    pub timeline: Timeline,
}

impl SimulationResult {
    /// The well-defined result for an empty process set:
    /// all metrics zero, no processes, empty timeline.
    pub fn empty(algorithm: Algorithm, label: impl Into<String>) -> Self {
        Self {
            algorithm,
            label: label.into(),
            processes: Vec::new(),
            metrics: PerformanceMetrics::default(),
            timeline: Timeline::new(),
        }
    }

    /// Whether the run contained no processes.
    pub fn is_empty(&self) -> bool {
        self.processes.is_empty()
    }

    /// Finds a process by pid.
    pub fn process(&self, pid: super::Pid) -> Option<&Process> {
        self.processes.iter().find(|p| p.pid == pid)
    }

    /// Processes sorted by pid (table order).
    pub fn processes_by_pid(&self) -> Vec<&Process> {
        let mut sorted: Vec<&Process> = self.processes.iter().collect();
        sorted.sort_by_key(|p| p.pid);
        sorted
    }

    /// Pids in completion order.
    pub fn completion_order(&self) -> Vec<super::Pid> {
        self.processes.iter().map(|p| p.pid).collect()
    }
}
