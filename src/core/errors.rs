/*!
 * Error Types
 * Centralized error handling with thiserror, miette, and serde support
 */

use super::types::ProcessId;
use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Scheduler errors with serialization support
///
/// Every variant is raised before a simulation starts; a run that begins
/// always completes.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq, Diagnostic)]
#[serde(tag = "error_type", content = "details", rename_all = "snake_case")]
pub enum SchedulerError {
    #[error("Invalid process '{id}': {reason}")]
    #[diagnostic(
        code(scheduler::invalid_process),
        help("Burst time must be positive, arrival time non-negative, both at most 1e9, and identifiers unique and non-empty.")
    )]
    InvalidProcess { id: ProcessId, reason: String },

    #[error("Unknown scheduling algorithm: {0}")]
    #[diagnostic(
        code(scheduler::unknown_algorithm),
        help("Use fcfs, fcfs_preemptive, sjf, sjf_preemptive, priority, priority_preemptive, or round_robin.")
    )]
    UnknownAlgorithm(String),

    #[error("Invalid time quantum: {0}")]
    #[diagnostic(
        code(scheduler::invalid_quantum),
        help("Round Robin requires a finite quantum of at least 0.001.")
    )]
    InvalidQuantum(f64),
}

impl SchedulerError {
    pub(crate) fn invalid_process(id: &str, reason: impl Into<String>) -> Self {
        Self::InvalidProcess {
            id: id.to_string(),
            reason: reason.into(),
        }
    }
}
