/*!
 * Scheduler Traits
 * Interface shared by every scheduling discipline
 */

use super::simulation::Simulation;
use super::types::{Algorithm, TimeQuantum};
use super::{Fcfs, PriorityScheduler, RoundRobin, ShortestJobFirst};

/// A scheduling discipline driving one simulation to completion
///
/// Implementations hold configuration only; all run state lives in the
/// [`Simulation`], so one instance can serve any number of runs.
pub trait SchedulingAlgorithm: Send + Sync {
    /// Algorithm this implementation answers for
    fn algorithm(&self) -> Algorithm;

    /// Advance the simulation until every task has completed
    fn run(&self, sim: &mut Simulation);
}

/// Build the implementation behind an algorithm selector
pub fn scheduler_for(algorithm: Algorithm, quantum: TimeQuantum) -> Box<dyn SchedulingAlgorithm> {
    match algorithm {
        Algorithm::Fcfs => Box::new(Fcfs::new()),
        Algorithm::FcfsPreemptive => Box::new(Fcfs::preemptive()),
        Algorithm::Sjf => Box::new(ShortestJobFirst::new(false)),
        Algorithm::SjfPreemptive => Box::new(ShortestJobFirst::new(true)),
        Algorithm::Priority => Box::new(PriorityScheduler::new(false)),
        Algorithm::PriorityPreemptive => Box::new(PriorityScheduler::new(true)),
        Algorithm::RoundRobin => Box::new(RoundRobin::new(quantum)),
    }
}
