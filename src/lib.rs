/*!
 * CPU Scheduling Simulator Library
 * Discrete-time simulation of classical CPU scheduling disciplines
 */

pub mod core;
pub mod monitoring;
pub mod process;
pub mod scheduler;

// Re-exports
pub use crate::core::errors::SchedulerError;
pub use crate::core::types::{ProcessId, SchedulerResult, SimTime};
pub use monitoring::init_tracing;
pub use process::{ProcessMetrics, ProcessSpec};
pub use scheduler::{
    simulate, Algorithm, Engine, ExecutionSlice, SimulationConfig, SimulationReport,
    SimulationStats, TimeQuantum,
};
