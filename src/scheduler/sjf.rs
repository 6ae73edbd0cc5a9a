/*!
 * Shortest Job First
 * Non-preemptive SJF and shortest-remaining-time-first
 */

use super::simulation::{run_preemptive, run_to_completion, Simulation};
use super::traits::SchedulingAlgorithm;
use super::types::Algorithm;
use crate::process::Task;

/// SJF scheduler; `preemptive` selects SRTF
#[derive(Debug, Clone, Copy)]
pub struct ShortestJobFirst {
    preemptive: bool,
}

impl ShortestJobFirst {
    pub fn new(preemptive: bool) -> Self {
        Self { preemptive }
    }
}

impl SchedulingAlgorithm for ShortestJobFirst {
    fn algorithm(&self) -> Algorithm {
        if self.preemptive {
            Algorithm::SjfPreemptive
        } else {
            Algorithm::Sjf
        }
    }

    fn run(&self, sim: &mut Simulation) {
        // Unstarted tasks have remaining == burst, so one key serves both modes
        if self.preemptive {
            run_preemptive(sim, Task::remaining);
        } else {
            run_to_completion(sim, Task::remaining);
        }
    }
}
