/*!
 * Simulation State
 * Discrete clock, per-process runtime state, and the shared selection loops
 *
 * The clock only moves in two ways: an idle jump to the next pending arrival,
 * or an execution slice charged to exactly one task.
 */

use super::timeline::{ExecutionSlice, Timeline};
use crate::core::limits::PREEMPTIVE_STEP;
use crate::core::types::SimTime;
use crate::process::{ProcessMetrics, ProcessSpec, Task};
use std::cmp::Ordering;
use tracing::debug;

/// Working state of one run
///
/// Tasks are stored in submission order, so a task's index is also its
/// tie-break rank.
#[derive(Debug)]
pub struct Simulation {
    tasks: Vec<Task>,
    now: SimTime,
    finished: Vec<usize>,
    timeline: Timeline,
}

impl Simulation {
    pub fn new(processes: &[ProcessSpec]) -> Self {
        Self {
            tasks: processes.iter().map(Task::new).collect(),
            now: 0.0,
            finished: Vec::with_capacity(processes.len()),
            timeline: Timeline::default(),
        }
    }

    #[inline]
    pub fn now(&self) -> SimTime {
        self.now
    }

    #[inline]
    pub fn task(&self, index: usize) -> &Task {
        &self.tasks[index]
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn all_complete(&self) -> bool {
        self.finished.len() == self.tasks.len()
    }

    /// Task indices ordered by arrival, ties kept in submission order
    pub fn arrival_order(&self) -> Vec<usize> {
        let mut order: Vec<usize> = (0..self.tasks.len()).collect();
        order.sort_by(|&a, &b| {
            self.tasks[a]
                .arrival()
                .total_cmp(&self.tasks[b].arrival())
        });
        order
    }

    /// Pick the ready task with the smallest key
    ///
    /// Linear scan; a later task only wins on a strictly smaller key, so ties
    /// go to the earliest submission.
    pub fn select_ready_by<F>(&self, key: F) -> Option<usize>
    where
        F: Fn(&Task) -> SimTime,
    {
        let mut best: Option<(usize, SimTime)> = None;
        for (index, task) in self.tasks.iter().enumerate() {
            if !task.is_ready(self.now) {
                continue;
            }
            let k = key(task);
            match best {
                Some((_, best_key)) if k.total_cmp(&best_key) != Ordering::Less => {}
                _ => best = Some((index, k)),
            }
        }
        best.map(|(index, _)| index)
    }

    /// Earliest arrival among tasks that have not arrived yet
    pub fn next_arrival(&self) -> Option<SimTime> {
        self.tasks
            .iter()
            .filter(|task| !task.is_complete() && !task.has_arrived(self.now))
            .map(Task::arrival)
            .min_by(|a, b| a.total_cmp(b))
    }

    /// Jump the clock forward; the gap is idle CPU time
    pub fn idle_until(&mut self, time: SimTime) {
        if time <= self.now {
            return;
        }
        debug!(from = self.now, to = time, "CPU idle");
        self.timeline.record(None, self.now, time);
        self.now = time;
    }

    /// Run a task for up to `budget` units and return the time consumed
    pub fn execute(&mut self, index: usize, budget: SimTime) -> SimTime {
        let start = self.now;
        let task = &mut self.tasks[index];
        let before = task.remaining();
        let used = task.run_for(budget);
        debug_assert!(
            task.remaining() < before,
            "Task {} made no progress with budget {}",
            task.id(),
            budget
        );
        self.now += used;
        self.timeline.record(Some(task.id()), start, self.now);

        if task.is_complete() {
            task.complete_at(self.now);
            self.finished.push(index);
            debug!(
                process = task.id(),
                completion = self.now,
                "process completed"
            );
        }
        used
    }

    /// Consume the run, yielding metrics in completion order and the timeline
    pub fn finish(self) -> (Vec<ProcessMetrics>, Vec<ExecutionSlice>) {
        debug_assert!(self.all_complete(), "simulation finished with pending work");
        let results = self
            .finished
            .iter()
            .filter_map(|&index| self.tasks[index].metrics())
            .collect();
        (results, self.timeline.into_slices())
    }
}

/// Shared loop for the non-preemptive selection policies
///
/// The selected task runs to completion before the next decision.
pub(crate) fn run_to_completion<F>(sim: &mut Simulation, key: F)
where
    F: Fn(&Task) -> SimTime,
{
    loop {
        if let Some(index) = sim.select_ready_by(&key) {
            let burst = sim.task(index).remaining();
            sim.execute(index, burst);
        } else if let Some(arrival) = sim.next_arrival() {
            sim.idle_until(arrival);
        } else {
            break;
        }
    }
}

/// Shared loop for the preemptive selection policies
///
/// Re-selects after every step, so a newly arrived task with a smaller key
/// takes the CPU immediately.
pub(crate) fn run_preemptive<F>(sim: &mut Simulation, key: F)
where
    F: Fn(&Task) -> SimTime,
{
    loop {
        if let Some(index) = sim.select_ready_by(&key) {
            sim.execute(index, PREEMPTIVE_STEP);
        } else if let Some(arrival) = sim.next_arrival() {
            sim.idle_until(arrival);
        } else {
            break;
        }
    }
}
