//! Simulation configuration and request input.
//!
//! [`SimulationRequest`] mirrors the JSON body a front end submits:
//! a list of `(arrival_time, burst_time, priority)` entries and an optional
//! quantum. [`SimulationConfig`] holds engine-side settings.

use serde::{Deserialize, Serialize};

use crate::models::{Algorithm, Process};
use crate::scheduler::DEFAULT_QUANTUM;

/// Engine settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Round Robin time quantum (ticks).
    pub quantum: i64,
    /// Run policies on separate threads.
    pub parallel: bool,
    /// Policies to run, in report order.
    pub algorithms: Vec<Algorithm>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            quantum: DEFAULT_QUANTUM,
            parallel: true,
            algorithms: Algorithm::ALL.to_vec(),
        }
    }
}

impl SimulationConfig {
    /// Creates the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the Round Robin quantum.
    pub fn with_quantum(mut self, quantum: i64) -> Self {
        self.quantum = quantum;
        self
    }

    /// Enables or disables parallel policy runs.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Restricts the policies to run.
    pub fn with_algorithms(mut self, algorithms: impl Into<Vec<Algorithm>>) -> Self {
        self.algorithms = algorithms.into();
        self
    }
}

/// One process as submitted by a caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessSpec {
    /// Arrival tick.
    pub arrival_time: i64,
    /// CPU ticks required.
    pub burst_time: i64,
    /// Priority (lower = more important).
    #[serde(default)]
    pub priority: i32,
}

impl ProcessSpec {
    /// Creates a process spec.
    pub fn new(arrival_time: i64, burst_time: i64, priority: i32) -> Self {
        Self {
            arrival_time,
            burst_time,
            priority,
        }
    }
}

/// A simulation request: processes plus an optional quantum.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationRequest {
    /// Processes in input order.
    pub processes: Vec<ProcessSpec>,
    /// Round Robin quantum. `None` = engine default.
    #[serde(default)]
    pub quantum: Option<i64>,
}

impl SimulationRequest {
    /// Creates a request with no quantum override.
    pub fn new(processes: Vec<ProcessSpec>) -> Self {
        Self {
            processes,
            quantum: None,
        }
    }

    /// Sets the quantum.
    pub fn with_quantum(mut self, quantum: i64) -> Self {
        self.quantum = Some(quantum);
        self
    }

    /// Builds process records, assigning pids 1..N in input order.
    pub fn to_processes(&self) -> Vec<Process> {
        self.processes
            .iter()
            .zip(1..)
            .map(|(spec, pid)| {
                Process::new(pid, spec.arrival_time, spec.burst_time).with_priority(spec.priority)
            })
            .collect()
    }

    /// The five-process demonstration workload with quantum 3.
    ///
    /// ```
    /// use u_cpusched::SimulationRequest;
    ///
    /// let demo = SimulationRequest::demo();
    /// assert_eq!(demo.processes.len(), 5);
    /// assert_eq!(demo.quantum, Some(3));
    /// ```
    pub fn demo() -> Self {
        Self::new(vec![
            ProcessSpec::new(0, 8, 3),
            ProcessSpec::new(1, 4, 1),
            ProcessSpec::new(2, 9, 4),
            ProcessSpec::new(3, 5, 2),
            ProcessSpec::new(4, 2, 5),
        ])
        .with_quantum(3)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = SimulationConfig::default();
        assert_eq!(config.quantum, 2);
        assert!(config.parallel);
        assert_eq!(config.algorithms, Algorithm::ALL.to_vec());
    }

    #[test]
    fn test_config_builder() {
        let config = SimulationConfig::new()
            .with_quantum(5)
            .with_parallel(false)
            .with_algorithms([Algorithm::Sjf]);
        assert_eq!(config.quantum, 5);
        assert!(!config.parallel);
        assert_eq!(config.algorithms, vec![Algorithm::Sjf]);
    }

    #[test]
    fn test_config_partial_json() {
        let config: SimulationConfig = serde_json::from_str(r#"{"quantum": 4}"#).unwrap();
        assert_eq!(config.quantum, 4);
        assert!(config.parallel);
        assert_eq!(config.algorithms.len(), 4);
    }

    #[test]
    fn test_request_from_json() {
        let body = r#"{
            "processes": [
                {"arrival_time": 0, "burst_time": 5, "priority": 2},
                {"arrival_time": 3, "burst_time": 1}
            ],
            "quantum": 4
        }"#;
        let request: SimulationRequest = serde_json::from_str(body).unwrap();
        assert_eq!(request.quantum, Some(4));
        assert_eq!(request.processes[1].priority, 0);

        let ps = request.to_processes();
        assert_eq!(ps[0].pid, 1);
        assert_eq!(ps[1].pid, 2);
        assert_eq!(ps[1].arrival_time, 3);
    }

    #[test]
    fn test_request_without_quantum() {
        let request: SimulationRequest = serde_json::from_str(r#"{"processes": []}"#).unwrap();
        assert_eq!(request.quantum, None);
        assert!(request.to_processes().is_empty());
    }
}
