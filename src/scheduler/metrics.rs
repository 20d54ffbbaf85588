//! Performance metrics for a completed policy run.
//!
//! Derives per-process timing fields and aggregates them.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Turnaround | completion - arrival |
//! | Waiting | turnaround - burst |
//! | Response | first start - arrival |
//! | Total time | Latest completion time |
//! | Throughput | count / (total time - earliest arrival), 0 if span <= 0 |
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.2: Scheduling Criteria

use serde::{Deserialize, Serialize};

use crate::error::{Result, SimulationError};
use crate::models::Process;

/// Aggregate performance indicators of one policy run.
///
/// Computed in full precision; rounding happens at the report boundary.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PerformanceMetrics {
    /// Mean waiting time (ticks).
    #[serde(rename = "avg_waiting_time")]
    pub avg_waiting: f64,
    /// Mean turnaround time (ticks).
    #[serde(rename = "avg_turnaround_time")]
    pub avg_turnaround: f64,
    /// Mean response time (ticks).
    #[serde(rename = "avg_response_time")]
    pub avg_response: f64,
    /// Completed processes per tick over the busy span.
    pub throughput: f64,
    /// Latest completion time.
    pub total_time: i64,
}

impl PerformanceMetrics {
    /// Fills in the derived timing fields of every process and aggregates them.
    ///
    /// `response_time` is only derived for processes the policy left unset.
    ///
    /// # Errors
    /// [`SimulationError::EmptyInput`] if `processes` is empty.
    pub fn calculate(processes: &mut [Process]) -> Result<Self> {
        if processes.is_empty() {
            return Err(SimulationError::EmptyInput);
        }

        // Per-process times fit in i64; their sums may not
        let mut total_waiting: i128 = 0;
        let mut total_turnaround: i128 = 0;
        let mut total_response: i128 = 0;
        let mut total_time = i64::MIN;
        let mut min_arrival = i64::MAX;

        for p in processes.iter_mut() {
            p.compute_times();
            total_waiting += i128::from(p.waiting_time);
            total_turnaround += i128::from(p.turnaround_time);
            total_response += i128::from(p.response_time.unwrap_or(0));
            total_time = total_time.max(p.completion_time);
            min_arrival = min_arrival.min(p.arrival_time);
        }

        let count = processes.len() as f64;
        let span = total_time - min_arrival;
        let throughput = if span > 0 { count / span as f64 } else { 0.0 };

        Ok(Self {
            avg_waiting: total_waiting as f64 / count,
            avg_turnaround: total_turnaround as f64 / count,
            avg_response: total_response as f64 / count,
            throughput,
            total_time,
        })
    }
}
