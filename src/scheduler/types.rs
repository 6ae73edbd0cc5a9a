/*!
 * Scheduler Types
 * Algorithm selection and time quantum configuration
 */

use crate::core::errors::SchedulerError;
use crate::core::limits::{DEFAULT_QUANTUM, MIN_QUANTUM};
use crate::core::types::{SchedulerResult, SimTime};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Scheduling algorithm selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    /// First come, first served
    Fcfs,
    /// Alias of [`Algorithm::Fcfs`]; FCFS has no preemption trigger
    FcfsPreemptive,
    /// Shortest job first, run to completion
    Sjf,
    /// Shortest remaining time first
    SjfPreemptive,
    /// Lowest priority value first, run to completion
    Priority,
    /// Lowest priority value first, re-evaluated every time unit
    PriorityPreemptive,
    /// FIFO ready queue with a fixed time quantum
    RoundRobin,
}

impl Algorithm {
    pub const ALL: [Algorithm; 7] = [
        Self::Fcfs,
        Self::FcfsPreemptive,
        Self::Sjf,
        Self::SjfPreemptive,
        Self::Priority,
        Self::PriorityPreemptive,
        Self::RoundRobin,
    ];

    /// Canonical snake-case name
    #[inline(always)]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Fcfs => "fcfs",
            Self::FcfsPreemptive => "fcfs_preemptive",
            Self::Sjf => "sjf",
            Self::SjfPreemptive => "sjf_preemptive",
            Self::Priority => "priority",
            Self::PriorityPreemptive => "priority_preemptive",
            Self::RoundRobin => "round_robin",
        }
    }

    /// Human-readable label
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Fcfs => "FCFS (Non-Preemptive)",
            Self::FcfsPreemptive => "FCFS (Preemptive)",
            Self::Sjf => "SJF (Non-Preemptive)",
            Self::SjfPreemptive => "SJF (Preemptive)",
            Self::Priority => "Priority (Non-Preemptive)",
            Self::PriorityPreemptive => "Priority (Preemptive)",
            Self::RoundRobin => "Round Robin",
        }
    }

    /// Only Round Robin consults the quantum
    pub const fn uses_quantum(&self) -> bool {
        matches!(self, Self::RoundRobin)
    }
}

/// Lowercase a name and collapse every run of punctuation/space into `_`
fn normalize(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    for c in name.chars() {
        if c.is_ascii_alphanumeric() {
            out.push(c.to_ascii_lowercase());
        } else if !out.is_empty() && !out.ends_with('_') {
            out.push('_');
        }
    }
    while out.ends_with('_') {
        out.pop();
    }
    out
}

impl FromStr for Algorithm {
    type Err = SchedulerError;

    /// Accepts canonical names, short aliases, and labels such as
    /// `"SJF (Preemptive)"`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "fcfs" | "fcfs_non_preemptive" | "fifo" | "first_come_first_served" => Ok(Self::Fcfs),
            "fcfs_preemptive" => Ok(Self::FcfsPreemptive),
            "sjf" | "sjf_non_preemptive" | "shortest_job_first" => Ok(Self::Sjf),
            "sjf_preemptive" | "srtf" | "shortest_remaining_time_first" => Ok(Self::SjfPreemptive),
            "priority" | "prio" | "priority_non_preemptive" => Ok(Self::Priority),
            "priority_preemptive" | "prio_preemptive" => Ok(Self::PriorityPreemptive),
            "round_robin" | "roundrobin" | "rr" => Ok(Self::RoundRobin),
            _ => Err(SchedulerError::UnknownAlgorithm(s.to_string())),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for Algorithm {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Algorithm {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Round Robin time slice
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(transparent)]
pub struct TimeQuantum(SimTime);

impl TimeQuantum {
    /// Create a new quantum; must be finite and at least `MIN_QUANTUM`
    pub fn new(units: SimTime) -> SchedulerResult<Self> {
        if !units.is_finite() || units < MIN_QUANTUM {
            return Err(SchedulerError::InvalidQuantum(units));
        }
        Ok(Self(units))
    }

    #[inline(always)]
    pub const fn units(&self) -> SimTime {
        self.0
    }
}

impl Default for TimeQuantum {
    fn default() -> Self {
        Self(DEFAULT_QUANTUM)
    }
}

impl<'de> Deserialize<'de> for TimeQuantum {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let units = SimTime::deserialize(deserializer)?;
        Self::new(units).map_err(serde::de::Error::custom)
    }
}
