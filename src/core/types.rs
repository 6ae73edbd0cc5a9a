/*!
 * Core Types
 * Common types used across the simulator
 */

/// Process identifier (opaque, unique within one run)
pub type ProcessId = String;

/// Simulated time, in abstract time units
pub type SimTime = f64;

/// Priority value (lower is more urgent)
pub type Priority = f64;

/// Common result type for simulator operations
pub type SchedulerResult<T> = Result<T, super::errors::SchedulerError>;
