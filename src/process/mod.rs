/*!
 * Process Module
 * Process records, runtime state, and workload validation
 */

pub mod task;
pub mod types;
pub mod validation;

// Re-export for convenience
pub use task::Task;
pub use types::{ProcessMetrics, ProcessSpec};
pub use validation::validate_workload;
