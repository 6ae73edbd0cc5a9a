/*!
 * Execution Timeline
 * Records which process held the CPU over each interval of a run
 */

use crate::core::types::{ProcessId, SimTime};
use serde::{Deserialize, Serialize};

/// One contiguous interval of CPU time
///
/// `process` is `None` for idle intervals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ExecutionSlice {
    pub process: Option<ProcessId>,
    pub start: SimTime,
    pub end: SimTime,
}

impl ExecutionSlice {
    #[inline]
    pub fn duration(&self) -> SimTime {
        self.end - self.start
    }

    #[inline]
    pub fn is_idle(&self) -> bool {
        self.process.is_none()
    }
}

/// Append-only timeline that coalesces adjacent slices of the same owner
#[derive(Debug, Default, Clone)]
pub(crate) struct Timeline {
    slices: Vec<ExecutionSlice>,
}

impl Timeline {
    pub fn record(&mut self, process: Option<&str>, start: SimTime, end: SimTime) {
        if end <= start {
            return;
        }

        if let Some(last) = self.slices.last_mut() {
            if last.end == start && last.process.as_deref() == process {
                last.end = end;
                return;
            }
        }

        self.slices.push(ExecutionSlice {
            process: process.map(str::to_string),
            start,
            end,
        });
    }

    pub fn into_slices(self) -> Vec<ExecutionSlice> {
        self.slices
    }
}
