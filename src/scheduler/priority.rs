/*!
 * Priority Scheduling
 * Lowest priority value runs first; optional per-unit preemption
 */

use super::simulation::{run_preemptive, run_to_completion, Simulation};
use super::traits::SchedulingAlgorithm;
use super::types::Algorithm;
use crate::process::Task;

/// Priority scheduler
#[derive(Debug, Clone, Copy)]
pub struct PriorityScheduler {
    preemptive: bool,
}

impl PriorityScheduler {
    pub fn new(preemptive: bool) -> Self {
        Self { preemptive }
    }
}

impl SchedulingAlgorithm for PriorityScheduler {
    fn algorithm(&self) -> Algorithm {
        if self.preemptive {
            Algorithm::PriorityPreemptive
        } else {
            Algorithm::Priority
        }
    }

    fn run(&self, sim: &mut Simulation) {
        if self.preemptive {
            run_preemptive(sim, Task::priority);
        } else {
            run_to_completion(sim, Task::priority);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::process::ProcessSpec;

    fn workload() -> Vec<ProcessSpec> {
        vec![
            ProcessSpec::new("P1", 0.0, 4.0).with_priority(3.0),
            ProcessSpec::new("P2", 1.0, 2.0).with_priority(1.0),
            ProcessSpec::new("P3", 2.0, 1.0).with_priority(1.0),
        ]
    }

    fn completions(preemptive: bool) -> Vec<(String, f64)> {
        let mut sim = Simulation::new(&workload());
        PriorityScheduler::new(preemptive).run(&mut sim);
        let (results, _) = sim.finish();
        results.into_iter().map(|r| (r.id, r.completion)).collect()
    }

    #[test]
    fn test_non_preemptive_runs_to_completion() {
        assert_eq!(
            completions(false),
            vec![("P1".into(), 4.0), ("P2".into(), 6.0), ("P3".into(), 7.0)]
        );
    }

    #[test]
    fn test_preemptive_yields_to_urgent_arrival() {
        // P2 takes over at t=1; P3 ties with P2 and loses on submission order
        assert_eq!(
            completions(true),
            vec![("P2".into(), 3.0), ("P3".into(), 4.0), ("P1".into(), 7.0)]
        );
    }
}
