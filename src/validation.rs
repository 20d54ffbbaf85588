//! Input validation for simulation requests.
//!
//! Checks process parameters before any policy runs. Detects:
//! - Negative arrival times
//! - Non-positive burst times
//! - Duplicate pids
//! - Non-positive Round Robin quanta
//! - Workloads whose schedule would run past `i64::MAX`
//!
//! All process problems are collected and reported together so the caller
//! receives one aggregated failure rather than a partial result.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::models::Process;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValidationErrorKind {
    /// A process arrives before t=0.
    NegativeArrival,
    /// A process requires zero or negative CPU time.
    NonPositiveBurst,
    /// Two processes share the same pid.
    DuplicatePid,
    /// Round Robin quantum is zero or negative.
    NonPositiveQuantum,
    /// Latest arrival plus total burst does not fit in an `i64` clock.
    HorizonOverflow,
}

impl ValidationError {
    /// Creates a validation error.
    pub fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

/// Validates the process set of a simulation request.
///
/// Checks:
/// 1. No duplicate pids
/// 2. Every arrival time is `>= 0`
/// 3. Every burst time is `> 0`
/// 4. `max(arrival) + sum(burst)` fits in an `i64`
///
/// The last check bounds every clock value any policy can reach. It only
/// runs once the per-process checks pass.
///
/// An empty set passes; emptiness is handled by the engine entry point.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_processes(processes: &[Process]) -> ValidationResult {
    let mut errors = Vec::new();
    let mut pids = HashSet::new();

    for p in processes {
        if !pids.insert(p.pid) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicatePid,
                format!("Duplicate pid: P{}", p.pid),
            ));
        }

        if p.arrival_time < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NegativeArrival,
                format!("P{} has negative arrival time {}", p.pid, p.arrival_time),
            ));
        }

        if p.burst_time <= 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonPositiveBurst,
                format!("P{} has non-positive burst time {}", p.pid, p.burst_time),
            ));
        }
    }

    if errors.is_empty() && schedule_horizon(processes).is_none() {
        errors.push(ValidationError::new(
            ValidationErrorKind::HorizonOverflow,
            format!(
                "Latest arrival plus total burst of {} processes exceeds {}",
                processes.len(),
                i64::MAX
            ),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Upper bound on the completion time of any schedule of `processes`, or
/// `None` if it overflows.
fn schedule_horizon(processes: &[Process]) -> Option<i64> {
    let latest_arrival = processes.iter().map(|p| p.arrival_time).max().unwrap_or(0);
    processes
        .iter()
        .try_fold(latest_arrival, |acc, p| acc.checked_add(p.burst_time))
}

/// Validates a Round Robin time quantum.
pub fn validate_quantum(quantum: i64) -> Result<(), ValidationError> {
    if quantum > 0 {
        Ok(())
    } else {
        Err(ValidationError::new(
            ValidationErrorKind::NonPositiveQuantum,
            format!("Quantum must be positive, got {quantum}"),
        ))
    }
}
