//! Simulation entry point.
//!
//! # Algorithm
//!
//! 1. Reject an empty process set and validate every process.
//! 2. Build the configured policies (validating the quantum for Round Robin).
//! 3. Run each policy on its own copy of the input, in parallel if enabled.
//! 4. Derive metrics per run and collect one result per policy.
//!
//! The caller's slice is never mutated.

use std::collections::BTreeMap;
use std::thread;

use tracing::{debug, info, warn};

use super::{Fcfs, NonPreemptive, PerformanceMetrics, RoundRobin, SchedulingPolicy};
use crate::config::{SimulationConfig, SimulationRequest};
use crate::error::{Result, SimulationError};
use crate::models::{Algorithm, Process, SimulationResult};
use crate::report::SimulationReport;
use crate::validation::validate_processes;

/// Runs the configured scheduling policies over a process set.
///
/// # Example
///
/// ```
/// use u_cpusched::{Algorithm, Process, Simulator};
///
/// let processes = Process::from_triples(&[(0, 5, 0), (1, 3, 1)]);
/// let report = Simulator::new().run(&processes).unwrap();
///
/// let fcfs = report.get(Algorithm::Fcfs).unwrap();
/// assert_eq!(fcfs.metrics.total_time, 8);
/// assert_eq!(report.len(), 4);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Simulator {
    config: SimulationConfig,
}

impl Simulator {
    /// Creates a simulator with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a simulator with the given configuration.
    pub fn with_config(config: SimulationConfig) -> Self {
        Self { config }
    }

    /// The active configuration.
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Builds the configured policies.
    ///
    /// # Errors
    /// [`SimulationError::InvalidQuantum`] if Round Robin is requested with a
    /// non-positive quantum.
    pub fn policies(&self) -> Result<Vec<Box<dyn SchedulingPolicy>>> {
        self.config
            .algorithms
            .iter()
            .map(|algorithm| -> Result<Box<dyn SchedulingPolicy>> {
                let policy: Box<dyn SchedulingPolicy> = match algorithm {
                    Algorithm::Fcfs => Box::new(Fcfs::new()),
                    Algorithm::Sjf => Box::new(NonPreemptive::sjf()),
                    Algorithm::RoundRobin => Box::new(RoundRobin::new(self.config.quantum)?),
                    Algorithm::Priority => Box::new(NonPreemptive::priority()),
                };
                Ok(policy)
            })
            .collect()
    }

    /// Runs every configured policy.
    ///
    /// # Errors
    /// - [`SimulationError::EmptyInput`] if `processes` is empty.
    /// - [`SimulationError::InvalidProcessInput`] with all validation problems,
    ///   including a workload whose clock would pass `i64::MAX`.
    /// - [`SimulationError::InvalidQuantum`] for a non-positive quantum.
    pub fn run(&self, processes: &[Process]) -> Result<SimulationReport> {
        if processes.is_empty() {
            warn!("rejecting simulation request with no processes");
            return Err(SimulationError::EmptyInput);
        }

        if let Err(errors) = validate_processes(processes) {
            warn!(problems = errors.len(), "rejecting invalid process input");
            return Err(SimulationError::InvalidProcessInput(errors));
        }

        let policies = self
            .policies()
            .inspect_err(|e| warn!(error = %e, "rejecting configuration"))?;

        info!(
            processes = processes.len(),
            quantum = self.config.quantum,
            policies = policies.len(),
            parallel = self.config.parallel,
            "running simulation"
        );

        let runs: Vec<Result<SimulationResult>> = if self.config.parallel && policies.len() > 1 {
            thread::scope(|scope| {
                let handles: Vec<_> = policies
                    .iter()
                    .map(|policy| scope.spawn(move || run_policy(policy.as_ref(), processes)))
                    .collect();
                handles
                    .into_iter()
                    .map(|h| h.join().unwrap_or_else(|panic| std::panic::resume_unwind(panic)))
                    .collect()
            })
        } else {
            policies
                .iter()
                .map(|policy| run_policy(policy.as_ref(), processes))
                .collect()
        };

        let mut results = BTreeMap::new();
        for run in runs {
            let result = run?;
            results.insert(result.algorithm, result);
        }

        Ok(SimulationReport::new(self.config.quantum, results))
    }

    /// Runs a caller request. The request's quantum overrides the configured one.
    pub fn run_request(&self, request: &SimulationRequest) -> Result<SimulationReport> {
        let config = SimulationConfig {
            quantum: request.quantum.unwrap_or(self.config.quantum),
            ..self.config.clone()
        };
        Self::with_config(config).run(&request.to_processes())
    }

    /// Like [`run`](Self::run), but an empty process set yields the
    /// all-zero report instead of [`SimulationError::EmptyInput`].
    ///
    /// The configuration is still checked, so a bad quantum fails either way.
    pub fn run_or_empty(&self, processes: &[Process]) -> Result<SimulationReport> {
        if processes.is_empty() {
            self.policies()?;
            return Ok(SimulationReport::empty(
                self.config.quantum,
                &self.config.algorithms,
            ));
        }
        self.run(processes)
    }
}

/// Runs one policy over a fresh copy of `processes` and derives its metrics.
///
/// # Errors
/// [`SimulationError::EmptyInput`] if `processes` is empty.
pub fn run_policy(
    policy: &dyn SchedulingPolicy,
    processes: &[Process],
) -> Result<SimulationResult> {
    let run = policy.schedule(processes.to_vec());
    debug_assert_eq!(run.completed.len(), processes.len());

    let mut completed = run.completed;
    let metrics = PerformanceMetrics::calculate(&mut completed)?;
    let label = policy.label();

    debug!(
        algorithm = %label,
        total_time = metrics.total_time,
        avg_waiting = metrics.avg_waiting,
        avg_turnaround = metrics.avg_turnaround,
        segments = run.timeline.len(),
        "policy finished"
    );

    Ok(SimulationResult {
        algorithm: policy.algorithm(),
        label,
        processes: completed,
        metrics,
        timeline: run.timeline,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ProcessSpec;
    use crate::validation::ValidationErrorKind;

    fn reference_workload() -> Vec<Process> {
        Process::from_triples(&[(0, 8, 3), (1, 4, 1), (2, 9, 4), (3, 5, 2), (4, 2, 5)])
    }

    fn reference_config() -> SimulationConfig {
        SimulationConfig::new().with_quantum(3)
    }

    #[test]
    fn test_reference_averages() {
        let report = Simulator::with_config(reference_config())
            .run(&reference_workload())
            .unwrap();

        let expect = [
            (Algorithm::Fcfs, 11.4, 17.0, 11.4),
            (Algorithm::Sjf, 8.2, 13.8, 8.2),
            (Algorithm::RoundRobin, 14.6, 20.2, 4.6),
            (Algorithm::Priority, 10.6, 16.2, 10.6),
        ];
        for (algorithm, waiting, turnaround, response) in expect {
            let m = &report.get(algorithm).unwrap().metrics;
            assert!((m.avg_waiting - waiting).abs() < 1e-10, "{algorithm} waiting");
            assert!((m.avg_turnaround - turnaround).abs() < 1e-10, "{algorithm} turnaround");
            assert!((m.avg_response - response).abs() < 1e-10, "{algorithm} response");
            assert_eq!(m.total_time, 28);
            assert!((m.throughput - 5.0 / 28.0).abs() < 1e-10);
        }
    }

    #[test]
    fn test_priority_prefers_p2_over_p1() {
        let report = Simulator::with_config(reference_config())
            .run(&reference_workload())
            .unwrap();
        let priority = report.get(Algorithm::Priority).unwrap();
        assert_eq!(priority.completion_order(), vec![1, 2, 4, 3, 5]);
        assert_eq!(report.get(Algorithm::Sjf).unwrap().timeline.segments()[0].pid, 1);
    }

    #[test]
    fn test_input_not_mutated() {
        let input = reference_workload();
        let snapshot = input.clone();
        Simulator::with_config(reference_config()).run(&input).unwrap();
        assert_eq!(input, snapshot);
    }

    #[test]
    fn test_sequential_matches_parallel() {
        let parallel = Simulator::with_config(reference_config())
            .run(&reference_workload())
            .unwrap();
        let sequential = Simulator::with_config(reference_config().with_parallel(false))
            .run(&reference_workload())
            .unwrap();
        for algorithm in Algorithm::ALL {
            let a = parallel.get(algorithm).unwrap();
            let b = sequential.get(algorithm).unwrap();
            assert_eq!(a.processes, b.processes);
            assert_eq!(a.timeline, b.timeline);
            assert_eq!(a.metrics, b.metrics);
        }
    }

    #[test]
    fn test_empty_input() {
        let sim = Simulator::new();
        assert_eq!(sim.run(&[]).unwrap_err(), SimulationError::EmptyInput);

        let report = sim.run_or_empty(&[]).unwrap();
        assert_eq!(report.len(), 4);
        for result in report.results() {
            assert!(result.is_empty());
            assert_eq!(result.metrics, PerformanceMetrics::default());
        }
    }

    #[test]
    fn test_invalid_processes_aggregated() {
        let ps = Process::from_triples(&[(-1, 3, 0), (0, 0, 0), (0, 2, 0)]);
        let err = Simulator::new().run(&ps).unwrap_err();
        let kinds: Vec<_> = err.validation_errors().iter().map(|e| e.kind).collect();
        assert_eq!(
            kinds,
            vec![ValidationErrorKind::NegativeArrival, ValidationErrorKind::NonPositiveBurst]
        );
    }

    #[test]
    fn test_empty_input_still_checks_quantum() {
        let sim = Simulator::with_config(SimulationConfig::new().with_quantum(0));
        assert_eq!(
            sim.run_or_empty(&[]).unwrap_err(),
            SimulationError::InvalidQuantum(0)
        );

        let config = SimulationConfig::new()
            .with_quantum(0)
            .with_algorithms([Algorithm::Fcfs]);
        assert!(Simulator::with_config(config).run_or_empty(&[]).is_ok());
    }

    #[test]
    fn test_overflowing_workload_rejected() {
        let late = Process::from_triples(&[(i64::MAX - 2, 5, 0)]);
        let half = i64::MAX / 2 + 1;
        let long = Process::from_triples(&[(0, half, 0), (0, half, 0)]);

        for ps in [late, long] {
            let err = Simulator::new().run(&ps).unwrap_err();
            assert!(matches!(err, SimulationError::InvalidProcessInput(_)));
            assert_eq!(
                err.validation_errors()[0].kind,
                ValidationErrorKind::HorizonOverflow
            );
        }
    }

    #[test]
    fn test_workload_at_clock_limit() {
        // Round Robin idles tick by tick, so leave it out of a late-arrival run
        let config = SimulationConfig::new().with_algorithms([
            Algorithm::Fcfs,
            Algorithm::Sjf,
            Algorithm::Priority,
        ]);
        let late = Process::from_triples(&[(i64::MAX - 5, 5, 0)]);
        let report = Simulator::with_config(config).run(&late).unwrap();
        for result in report.results() {
            assert_eq!(result.metrics.total_time, i64::MAX);
            assert_eq!(result.processes[0].waiting_time, 0);
        }

        let half = i64::MAX / 2;
        let long = Process::from_triples(&[(0, half, 0), (0, half, 0)]);
        let config = SimulationConfig::new().with_quantum(half);
        let report = Simulator::with_config(config).run(&long).unwrap();
        assert_eq!(report.len(), 4);
        for result in report.results() {
            assert_eq!(result.metrics.total_time, 2 * half, "{}", result.label);
        }
    }

    #[test]
    fn test_invalid_quantum() {
        let sim = Simulator::with_config(SimulationConfig::new().with_quantum(0));
        assert_eq!(
            sim.run(&reference_workload()).unwrap_err(),
            SimulationError::InvalidQuantum(0)
        );
    }

    #[test]
    fn test_quantum_ignored_without_round_robin() {
        let config = SimulationConfig::new()
            .with_quantum(0)
            .with_algorithms([Algorithm::Fcfs, Algorithm::Sjf]);
        let report = Simulator::with_config(config).run(&reference_workload()).unwrap();
        assert_eq!(report.len(), 2);
        assert!(report.get(Algorithm::RoundRobin).is_none());
    }

    #[test]
    fn test_run_request_uses_request_quantum() {
        let request = SimulationRequest::new(vec![ProcessSpec::new(0, 7, 0)]).with_quantum(3);
        let report = Simulator::new().run_request(&request).unwrap();
        let rr = report.get(Algorithm::RoundRobin).unwrap();
        assert_eq!(rr.label, "Round Robin (Quantum=3)");
        assert_eq!(rr.timeline.len(), 3);
        assert_eq!(report.quantum(), 3);
    }

    #[test]
    fn test_run_request_default_quantum() {
        let request = SimulationRequest::new(vec![ProcessSpec::new(0, 7, 0)]);
        let report = Simulator::new().run_request(&request).unwrap();
        assert_eq!(report.get(Algorithm::RoundRobin).unwrap().timeline.len(), 4);
    }

    #[test]
    fn test_single_process_every_policy() {
        let ps = Process::from_triples(&[(0, 5, 0)]);
        let report = Simulator::new().run(&ps).unwrap();
        for result in report.results() {
            let p = &result.processes[0];
            assert_eq!(p.waiting_time, 0, "{}", result.label);
            assert_eq!(p.turnaround_time, 5);
            assert_eq!(p.response_time, Some(0));
            assert!((result.metrics.throughput - 0.2).abs() < 1e-10);
        }
    }

    #[test]
    fn test_run_policy_labels() {
        let ps = reference_workload();
        let rr = RoundRobin::new(4).unwrap();
        let result = run_policy(&rr, &ps).unwrap();
        assert_eq!(result.algorithm, Algorithm::RoundRobin);
        assert_eq!(result.label, "Round Robin (Quantum=4)");
        assert_eq!(run_policy(&Fcfs, &ps).unwrap().label, "FCFS");
        assert_eq!(
            run_policy(&NonPreemptive::priority(), &ps).unwrap().label,
            "Priority Scheduling"
        );
    }
}
