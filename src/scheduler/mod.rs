/*!
 * Scheduler Module
 * Discrete-time scheduling engine and the algorithm implementations
 */

pub mod config;
pub mod engine;
pub mod fcfs;
pub mod priority;
pub mod report;
pub mod round_robin;
pub mod simulation;
pub mod sjf;
pub mod timeline;
pub mod traits;
pub mod types;

// Re-export public API
pub use config::SimulationConfig;
pub use engine::{simulate, Engine};
pub use fcfs::Fcfs;
pub use priority::PriorityScheduler;
pub use report::{SimulationReport, SimulationStats};
pub use round_robin::RoundRobin;
pub use simulation::Simulation;
pub use sjf::ShortestJobFirst;
pub use timeline::ExecutionSlice;
pub use traits::{scheduler_for, SchedulingAlgorithm};
pub use types::{Algorithm, TimeQuantum};
