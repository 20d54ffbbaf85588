//! First-Come-First-Served scheduling.
//!
//! # Algorithm
//!
//! 1. Sort processes by arrival time (ties by pid).
//! 2. Dispatch each in turn for its full burst, jumping the clock forward
//!    over idle gaps.
//!
//! # Complexity
//! O(n log n) for the sort, O(n) for the dispatch pass.

use tracing::trace;

use super::{sort_by_arrival, PolicyRun, SchedulingPolicy};
use crate::models::{Algorithm, Process, Timeline};

/// First-Come-First-Served, non-preemptive.
#[derive(Debug, Clone, Copy, Default)]
pub struct Fcfs;

impl Fcfs {
    /// Creates the policy.
    pub fn new() -> Self {
        Self
    }
}

impl SchedulingPolicy for Fcfs {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Fcfs
    }

    fn schedule(&self, mut processes: Vec<Process>) -> PolicyRun {
        sort_by_arrival(&mut processes);

        let mut timeline = Timeline::new();
        let mut current_time = 0;

        for process in &mut processes {
            // CPU idles until the next arrival
            if current_time < process.arrival_time {
                current_time = process.arrival_time;
            }

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
        }

        PolicyRun {
            completed: processes,
            timeline,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TimelineSegment;

    #[test]
    fn test_fcfs_reference_workload() {
        let ps = Process::from_triples(&[(0, 8, 3), (1, 4, 1), (2, 9, 4), (3, 5, 2), (4, 2, 5)]);
        let run = Fcfs.schedule(ps);

        let completions: Vec<_> = run.completed.iter().map(|p| (p.pid, p.completion_time)).collect();
        assert_eq!(completions, vec![(1, 8), (2, 12), (3, 21), (4, 26), (5, 28)]);
        assert_eq!(run.timeline.len(), 5);
        assert_eq!(run.timeline.segments()[2], TimelineSegment::new(3, 12, 9));
    }

    #[test]
    fn test_fcfs_idle_gap_jumps_to_arrival() {
        let ps = Process::from_triples(&[(0, 2, 0), (10, 3, 0)]);
        let run = Fcfs.schedule(ps);
        let p2 = &run.completed[1];
        assert_eq!(p2.start_time, Some(10));
        assert_eq!(p2.response_time, Some(0));
        assert_eq!(p2.completion_time, 13);
        assert_eq!(run.timeline.idle_time(), 8);
    }

    #[test]
    fn test_fcfs_sorts_by_arrival_then_pid() {
        let ps = Process::from_triples(&[(5, 1, 0), (0, 1, 0), (0, 1, 0)]);
        let run = Fcfs.schedule(ps);
        let order: Vec<_> = run.completed.iter().map(|p| p.pid).collect();
        assert_eq!(order, vec![2, 3, 1]);
    }

    #[test]
    fn test_fcfs_late_first_arrival() {
        let ps = Process::from_triples(&[(4, 3, 0)]);
        let run = Fcfs.schedule(ps);
        assert_eq!(run.timeline.segments(), &[TimelineSegment::new(1, 4, 3)]);
        assert_eq!(run.completed[0].completion_time, 7);
    }
}
