/*!
 * Simulator Limits and Constants
 *
 * Centralized location for the simulator's tunable defaults.
 */

use super::types::{Priority, SimTime};

/// Default Round Robin time slice (2 time units)
pub const DEFAULT_QUANTUM: SimTime = 2.0;

/// Execution granularity of the preemptive variants (1 time unit)
/// Re-selection happens after every step of this size
pub const PREEMPTIVE_STEP: SimTime = 1.0;

/// Smallest accepted Round Robin quantum
/// Must stay well above the f64 spacing at MAX_SIM_TIME so every slice
/// shortens the remaining work
pub const MIN_QUANTUM: SimTime = 1e-3;

/// Largest accepted arrival or burst time
/// At this magnitude f64 still resolves steps of MIN_QUANTUM
pub const MAX_SIM_TIME: SimTime = 1e9;

/// Priority assigned when a record omits one
pub const DEFAULT_PRIORITY: Priority = 0.0;

/// Environment variable selecting the algorithm
pub const ENV_ALGORITHM: &str = "SCHED_ALGORITHM";

/// Environment variable overriding the Round Robin quantum
pub const ENV_QUANTUM: &str = "SCHED_QUANTUM";

/// Environment variable enabling JSON log output
pub const ENV_TRACE_JSON: &str = "SCHED_TRACE_JSON";
