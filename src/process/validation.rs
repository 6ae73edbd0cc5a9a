/*!
 * Workload Validation
 * Reject malformed process records before any simulation begins
 */

use super::types::ProcessSpec;
use crate::core::errors::SchedulerError;
use crate::core::limits::MAX_SIM_TIME;
use crate::core::types::SchedulerResult;
use std::collections::HashSet;

/// Validate every record of a workload
///
/// Fails on the first offending record; nothing is coerced.
pub fn validate_workload(processes: &[ProcessSpec]) -> SchedulerResult<()> {
    let mut seen = HashSet::with_capacity(processes.len());

    for process in processes {
        validate_process(process)?;

        if !seen.insert(process.id.as_str()) {
            return Err(SchedulerError::invalid_process(
                &process.id,
                "duplicate process identifier",
            ));
        }
    }

    Ok(())
}

/// Validate a single record in isolation
pub fn validate_process(process: &ProcessSpec) -> SchedulerResult<()> {
    let id = process.id.as_str();

    if id.trim().is_empty() {
        return Err(SchedulerError::invalid_process(
            id,
            "identifier cannot be empty",
        ));
    }

    if !process.arrival.is_finite() || process.arrival < 0.0 {
        return Err(SchedulerError::invalid_process(
            id,
            format!("arrival time must be non-negative, got {}", process.arrival),
        ));
    }

    if !process.burst.is_finite() || process.burst <= 0.0 {
        return Err(SchedulerError::invalid_process(
            id,
            format!("burst time must be positive, got {}", process.burst),
        ));
    }

    if process.arrival > MAX_SIM_TIME || process.burst > MAX_SIM_TIME {
        return Err(SchedulerError::invalid_process(
            id,
            format!("arrival and burst time cannot exceed {}", MAX_SIM_TIME),
        ));
    }

    if !process.priority.is_finite() {
        return Err(SchedulerError::invalid_process(
            id,
            format!("priority must be finite, got {}", process.priority),
        ));
    }

    Ok(())
}
