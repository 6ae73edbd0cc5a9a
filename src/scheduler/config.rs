/*!
 * Simulation Configuration
 * Algorithm choice and quantum, from code or the environment
 */

use super::types::{Algorithm, TimeQuantum};
use crate::core::errors::SchedulerError;
use crate::core::limits::{ENV_ALGORITHM, ENV_QUANTUM};
use crate::core::types::{SchedulerResult, SimTime};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Configuration of one simulation run
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct SimulationConfig {
    pub algorithm: Algorithm,
    #[serde(default)]
    pub quantum: TimeQuantum,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self::new(Algorithm::Fcfs)
    }
}

impl SimulationConfig {
    pub fn new(algorithm: Algorithm) -> Self {
        Self {
            algorithm,
            quantum: TimeQuantum::default(),
        }
    }

    /// Override the Round Robin quantum
    pub fn with_quantum(mut self, units: SimTime) -> SchedulerResult<Self> {
        self.quantum = TimeQuantum::new(units)?;
        Ok(self)
    }

    /// Load configuration from the environment
    ///
    /// Environment variables:
    /// - SCHED_ALGORITHM: algorithm name or label (default: fcfs)
    /// - SCHED_QUANTUM: Round Robin quantum (default: 2)
    ///
    /// Unset variables fall back to defaults; set but invalid values are
    /// errors.
    pub fn from_env() -> SchedulerResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup<F>(lookup: F) -> SchedulerResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(name) = lookup(ENV_ALGORITHM) {
            config.algorithm = name.parse()?;
        }

        if let Some(raw) = lookup(ENV_QUANTUM) {
            let units = raw
                .trim()
                .parse::<SimTime>()
                .map_err(|_| SchedulerError::InvalidQuantum(f64::NAN))?;
            config = config.with_quantum(units)?;
        }

        debug!(
            algorithm = config.algorithm.as_str(),
            quantum = config.quantum.units(),
            "configuration loaded"
        );
        Ok(config)
    }
}
