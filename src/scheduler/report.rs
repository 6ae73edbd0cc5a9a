/*!
 * Simulation Report
 * Per-process metrics, execution timeline, and aggregate statistics
 */

use super::timeline::ExecutionSlice;
use super::types::{Algorithm, TimeQuantum};
use crate::core::types::SimTime;
use crate::process::ProcessMetrics;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Aggregate CPU statistics derived from the timeline
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct SimulationStats {
    /// Time at which the last process completed
    pub makespan: SimTime,
    pub busy_time: SimTime,
    pub idle_time: SimTime,
    /// CPU handovers between two different processes
    pub context_switches: u64,
    /// Slices that ended with work still left for their process
    pub preemptions: u64,
    /// busy_time / makespan, 0 for an empty run
    pub cpu_utilization: f64,
}

impl SimulationStats {
    pub(crate) fn from_run(results: &[ProcessMetrics], timeline: &[ExecutionSlice]) -> Self {
        let completions: HashMap<&str, SimTime> = results
            .iter()
            .map(|r| (r.id.as_str(), r.completion))
            .collect();

        let mut stats = Self {
            makespan: timeline.last().map(|s| s.end).unwrap_or(0.0),
            ..Self::default()
        };
        let mut last_owner: Option<&str> = None;

        for slice in timeline {
            let Some(owner) = slice.process.as_deref() else {
                stats.idle_time += slice.duration();
                continue;
            };

            stats.busy_time += slice.duration();
            if last_owner.is_some_and(|prev| prev != owner) {
                stats.context_switches += 1;
            }
            if completions.get(owner).is_some_and(|&done| slice.end < done) {
                stats.preemptions += 1;
            }
            last_owner = Some(owner);
        }

        if stats.makespan > 0.0 {
            stats.cpu_utilization = stats.busy_time / stats.makespan;
        }
        stats
    }
}

/// Outcome of one simulation
///
/// `results` is in completion order for every algorithm.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct SimulationReport {
    pub algorithm: Algorithm,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantum: Option<TimeQuantum>,
    pub results: Vec<ProcessMetrics>,
    pub timeline: Vec<ExecutionSlice>,
    pub stats: SimulationStats,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub average_waiting_time: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub average_turnaround_time: Option<f64>,
}

impl SimulationReport {
    pub(crate) fn new(
        algorithm: Algorithm,
        quantum: Option<TimeQuantum>,
        results: Vec<ProcessMetrics>,
        timeline: Vec<ExecutionSlice>,
    ) -> Self {
        let stats = SimulationStats::from_run(&results, &timeline);
        let average_waiting_time = mean(results.iter().map(|r| r.waiting_time));
        let average_turnaround_time = mean(results.iter().map(|r| r.turnaround_time));
        Self {
            algorithm,
            quantum,
            results,
            timeline,
            stats,
            average_waiting_time,
            average_turnaround_time,
        }
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Mean waiting time; `None` for an empty run
    pub fn average_waiting_time(&self) -> Option<f64> {
        self.average_waiting_time
    }

    /// Mean turnaround time; `None` for an empty run
    pub fn average_turnaround_time(&self) -> Option<f64> {
        self.average_turnaround_time
    }

    /// Look up one process by identifier
    pub fn get(&self, id: &str) -> Option<&ProcessMetrics> {
        self.results.iter().find(|r| r.id == id)
    }

    /// Identifiers in completion order
    pub fn completion_order(&self) -> Vec<&str> {
        self.results.iter().map(|r| r.id.as_str()).collect()
    }
}

fn mean(values: impl ExactSizeIterator<Item = f64>) -> Option<f64> {
    let count = values.len();
    if count == 0 {
        return None;
    }
    Some(values.sum::<f64>() / count as f64)
}
