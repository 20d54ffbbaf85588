//! Built-in dispatching rules.
//!
//! # Score Convention
//! All rules return lower scores for processes that should run first.
//! Ties are left to the [`RuleEngine`](super::RuleEngine), which breaks
//! them on pid.

use super::{DispatchContext, DispatchingRule, RuleScore};
use crate::models::Process;

/// Shortest burst first.
///
/// Selection key of non-preemptive SJF. Minimizes average waiting time
/// among the processes ready at each decision.
///
/// # Reference
/// Smith (1956), optimal for minimizing mean flow time on single machine.
#[derive(Debug, Clone, Copy)]
pub struct ShortestBurst;

impl DispatchingRule for ShortestBurst {
    fn name(&self) -> &'static str {
        "SJF"
    }

    fn evaluate(&self, process: &Process, _context: &DispatchContext) -> RuleScore {
        process.burst_time
    }

    fn description(&self) -> &'static str {
        "Shortest Job First"
    }
}

/// Highest priority first (lower numeric value wins).
///
/// No aging is applied, so a steady stream of more important arrivals can
/// starve a low-priority process.
#[derive(Debug, Clone, Copy)]
pub struct HighestPriority;

impl DispatchingRule for HighestPriority {
    fn name(&self) -> &'static str {
        "PRIORITY"
    }

    fn evaluate(&self, process: &Process, _context: &DispatchContext) -> RuleScore {
        RuleScore::from(process.priority)
    }

    fn description(&self) -> &'static str {
        "Highest Priority First"
    }
}
