/*!
 * First Come, First Served
 * Run processes to completion in arrival order
 */

use super::simulation::Simulation;
use super::traits::SchedulingAlgorithm;
use super::types::Algorithm;

/// FCFS scheduler
///
/// The preemptive flavour exists only as a selector; FCFS has no
/// preemption trigger, so both produce the same schedule.
#[derive(Debug, Clone, Copy, Default)]
pub struct Fcfs {
    preemptive: bool,
}

impl Fcfs {
    pub fn new() -> Self {
        Self { preemptive: false }
    }

    pub fn preemptive() -> Self {
        Self { preemptive: true }
    }
}

impl SchedulingAlgorithm for Fcfs {
    fn algorithm(&self) -> Algorithm {
        if self.preemptive {
            Algorithm::FcfsPreemptive
        } else {
            Algorithm::Fcfs
        }
    }

    fn run(&self, sim: &mut Simulation) {
        for index in sim.arrival_order() {
            let arrival = sim.task(index).arrival();
            if sim.now() < arrival {
                sim.idle_until(arrival);
            }
            let burst = sim.task(index).burst();
            sim.execute(index, burst);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::process::ProcessSpec;

    #[test]
    fn test_fcfs_with_idle_gap() {
        let mut sim = Simulation::new(&[
            ProcessSpec::new("P1", 0.0, 3.0),
            ProcessSpec::new("P2", 5.0, 2.0),
            ProcessSpec::new("P3", 1.0, 1.0),
        ]);
        Fcfs::new().run(&mut sim);

        let (results, timeline) = sim.finish();
        let order: Vec<_> = results.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(order, vec!["P1", "P3", "P2"]);
        assert_eq!(results[1].waiting_time, 2.0);
        // P2 starts at its arrival after one idle unit
        assert_eq!(results[2].waiting_time, 0.0);
        assert_eq!(results[2].completion, 7.0);
        assert!(timeline.iter().any(|s| s.is_idle() && s.start == 4.0 && s.end == 5.0));
    }
}
