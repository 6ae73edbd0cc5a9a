/*!
 * Process Types
 * Input records handed to the engine and the metrics it produces
 */

use crate::core::limits::DEFAULT_PRIORITY;
use crate::core::types::{Priority, ProcessId, SimTime};
use serde::{Deserialize, Serialize};

fn default_priority() -> Priority {
    DEFAULT_PRIORITY
}

/// A schedulable unit as submitted by the caller
///
/// Immutable once handed to the engine; each simulation derives its own
/// [`Task`](super::Task) from it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ProcessSpec {
    pub id: ProcessId,
    pub arrival: SimTime,
    pub burst: SimTime,
    #[serde(default = "default_priority")]
    pub priority: Priority,
}

impl ProcessSpec {
    pub fn new(id: impl Into<ProcessId>, arrival: SimTime, burst: SimTime) -> Self {
        Self {
            id: id.into(),
            arrival,
            burst,
            priority: DEFAULT_PRIORITY,
        }
    }

    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }
}

/// Per-process result of one simulation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ProcessMetrics {
    pub id: ProcessId,
    pub arrival: SimTime,
    pub burst: SimTime,
    pub completion: SimTime,
    pub waiting_time: SimTime,
    pub turnaround_time: SimTime,
}

impl ProcessMetrics {
    /// Derive metrics from a completion time
    pub fn from_completion(spec: &ProcessSpec, completion: SimTime) -> Self {
        let turnaround_time = completion - spec.arrival;
        Self {
            id: spec.id.clone(),
            arrival: spec.arrival,
            burst: spec.burst,
            completion,
            waiting_time: turnaround_time - spec.burst,
            turnaround_time,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priority_defaults_when_absent() {
        let spec: ProcessSpec =
            serde_json::from_str(r#"{"id": "P1", "arrival": 0, "burst": 5}"#).unwrap();
        assert_eq!(spec, ProcessSpec::new("P1", 0.0, 5.0));
        assert_eq!(spec.priority, 0.0);
    }

    #[test]
    fn test_metrics_from_completion() {
        let spec = ProcessSpec::new("P1", 1.0, 4.0);
        let metrics = ProcessMetrics::from_completion(&spec, 9.0);
        assert_eq!(metrics.turnaround_time, 8.0);
        assert_eq!(metrics.waiting_time, 4.0);
        assert_eq!(metrics.waiting_time + metrics.burst, metrics.turnaround_time);
    }
}
