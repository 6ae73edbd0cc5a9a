/*!
 * Task Runtime State
 * Mutable per-run state derived from a process record
 */

use super::types::{ProcessMetrics, ProcessSpec};
use crate::core::types::{Priority, SimTime};

/// Runtime state of one process during a single simulation
#[derive(Debug, Clone)]
pub struct Task {
    spec: ProcessSpec,
    remaining: SimTime,
    completion: Option<SimTime>,
}

impl Task {
    pub fn new(spec: &ProcessSpec) -> Self {
        Self {
            spec: spec.clone(),
            remaining: spec.burst,
            completion: None,
        }
    }

    #[inline]
    pub fn id(&self) -> &str {
        &self.spec.id
    }

    #[inline]
    pub fn arrival(&self) -> SimTime {
        self.spec.arrival
    }

    #[inline]
    pub fn burst(&self) -> SimTime {
        self.spec.burst
    }

    #[inline]
    pub fn priority(&self) -> Priority {
        self.spec.priority
    }

    #[inline]
    pub fn remaining(&self) -> SimTime {
        self.remaining
    }

    /// True once the clock has reached the arrival time
    #[inline]
    pub fn has_arrived(&self, now: SimTime) -> bool {
        self.spec.arrival <= now
    }

    #[inline]
    pub fn is_complete(&self) -> bool {
        self.remaining <= 0.0
    }

    /// Runnable at `now`: arrived and not yet finished
    #[inline]
    pub fn is_ready(&self, now: SimTime) -> bool {
        self.has_arrived(now) && !self.is_complete()
    }

    /// Consume up to `budget` units of work, returning the time actually used
    ///
    /// The slice is clamped to the remaining work so the counter lands on
    /// exactly zero.
    pub fn run_for(&mut self, budget: SimTime) -> SimTime {
        let used = budget.min(self.remaining);
        self.remaining -= used;
        if self.remaining <= 0.0 {
            self.remaining = 0.0;
        }
        used
    }

    /// Record the completion time; only the first call has effect
    pub fn complete_at(&mut self, now: SimTime) {
        debug_assert!(self.is_complete(), "Task {} completed with work left", self.id());
        if self.completion.is_none() {
            self.completion = Some(now);
        }
    }

    /// Project the finished task into its output record
    pub fn metrics(&self) -> Option<ProcessMetrics> {
        self.completion
            .map(|completion| ProcessMetrics::from_completion(&self.spec, completion))
    }
}
