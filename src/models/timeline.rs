//! Execution timeline (Gantt data).
//!
//! A timeline is the ordered list of CPU allocations made during one
//! policy run. Segments are appended in dispatch order, so they are sorted
//! by start tick and never overlap. Consecutive segments of the same
//! process are kept separate; merging them is a presentation concern
//! (see [`Timeline::merged`]).

use serde::{Deserialize, Serialize};

use super::Pid;

/// One contiguous CPU allocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineSegment {
    /// Process occupying the CPU.
    pub pid: Pid,
    /// First tick of the allocation.
    pub start: i64,
    /// Number of ticks allocated.
    pub duration: i64,
}

impl TimelineSegment {
    /// Creates a segment.
    pub fn new(pid: Pid, start: i64, duration: i64) -> Self {
        Self {
            pid,
            start,
            duration,
        }
    }

    /// Tick just past the end of the allocation.
    #[inline]
    pub fn end(&self) -> i64 {
        self.start + self.duration
    }
}

/// Ordered CPU allocations for one policy run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timeline {
    segments: Vec<TimelineSegment>,
}

impl Timeline {
    /// Creates an empty timeline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a dispatch.
    pub fn push(&mut self, pid: Pid, start: i64, duration: i64) {
        self.segments.push(TimelineSegment::new(pid, start, duration));
    }

    /// All segments in dispatch order.
    pub fn segments(&self) -> &[TimelineSegment] {
        &self.segments
    }

    /// Number of segments.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Whether no dispatch was recorded.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Segments belonging to one process.
    pub fn segments_for(&self, pid: Pid) -> Vec<&TimelineSegment> {
        self.segments.iter().filter(|s| s.pid == pid).collect()
    }

    /// End tick of the last allocation (0 if empty).
    pub fn makespan(&self) -> i64 {
        self.segments.iter().map(TimelineSegment::end).max().unwrap_or(0)
    }

    /// Total ticks the CPU was busy.
    pub fn busy_time(&self) -> i64 {
        self.segments.iter().map(|s| s.duration).sum()
    }

    /// Idle ticks between the first allocation and the makespan.
    pub fn idle_time(&self) -> i64 {
        match self.segments.first() {
            Some(first) => self.makespan() - first.start - self.busy_time(),
            None => 0,
        }
    }

    /// Whether segments are sorted by start and do not overlap.
    pub fn is_well_formed(&self) -> bool {
        self.segments
            .windows(2)
            .all(|w| w[0].end() <= w[1].start)
    }

    /// Copy with back-to-back segments of the same process joined.
    pub fn merged(&self) -> Self {
        let mut segments: Vec<TimelineSegment> = Vec::with_capacity(self.segments.len());
        for seg in &self.segments {
            match segments.last_mut() {
                Some(last) if last.pid == seg.pid && last.end() == seg.start => {
                    last.duration += seg.duration;
                }
                _ => segments.push(*seg),
            }
        }
        Self { segments }
    }
}
