/*!
 * Scheduling Engine
 * Validate a workload, run one algorithm, and assemble the report
 */

use super::config::SimulationConfig;
use super::report::SimulationReport;
use super::simulation::Simulation;
use super::traits::scheduler_for;
use super::types::{Algorithm, TimeQuantum};
use crate::core::types::{SchedulerResult, SimTime};
use crate::process::{validate_workload, ProcessSpec};
use tracing::{debug, info, info_span};

/// Scheduling engine
///
/// Holds configuration only. Every call to [`Engine::simulate`] builds its own
/// working copy of the workload, so one engine can be shared across threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct Engine {
    config: SimulationConfig,
}

impl Engine {
    pub fn new(config: SimulationConfig) -> Self {
        Self { config }
    }

    /// Engine for `algorithm` with the default quantum
    pub fn with_algorithm(algorithm: Algorithm) -> Self {
        Self::new(SimulationConfig::new(algorithm))
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Run one simulation over `processes`
    ///
    /// The workload is validated up front; on error no simulation runs.
    pub fn simulate(&self, processes: &[ProcessSpec]) -> SchedulerResult<SimulationReport> {
        let algorithm = self.config.algorithm;
        let span = info_span!(
            "simulate",
            algorithm = algorithm.as_str(),
            processes = processes.len()
        );
        let _entered = span.enter();

        validate_workload(processes)?;

        let scheduler = scheduler_for(algorithm, self.config.quantum);
        debug!(scheduler = scheduler.algorithm().label(), "dispatching");

        let mut sim = Simulation::new(processes);
        scheduler.run(&mut sim);
        let (results, timeline) = sim.finish();

        let quantum = algorithm.uses_quantum().then_some(self.config.quantum);
        let report = SimulationReport::new(algorithm, quantum, results, timeline);

        info!(
            completed = report.len(),
            makespan = report.stats.makespan,
            context_switches = report.stats.context_switches,
            avg_waiting = report.average_waiting_time().unwrap_or_default(),
            avg_turnaround = report.average_turnaround_time().unwrap_or_default(),
            "simulation complete"
        );
        Ok(report)
    }
}

/// One-shot simulation
///
/// `quantum` is only consulted by Round Robin but is validated whenever it
/// is supplied.
pub fn simulate(
    algorithm: Algorithm,
    processes: &[ProcessSpec],
    quantum: Option<SimTime>,
) -> SchedulerResult<SimulationReport> {
    let quantum = match quantum {
        Some(units) => TimeQuantum::new(units)?,
        None => TimeQuantum::default(),
    };
    Engine::new(SimulationConfig { algorithm, quantum }).simulate(processes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::errors::SchedulerError;

    #[test]
    fn test_invalid_workload_produces_no_report() {
        let engine = Engine::with_algorithm(Algorithm::Sjf);
        let result = engine.simulate(&[
            ProcessSpec::new("P1", 0.0, 3.0),
            ProcessSpec::new("P2", 0.0, 0.0),
        ]);
        assert!(matches!(
            result,
            Err(SchedulerError::InvalidProcess { ref id, .. }) if id == "P2"
        ));
    }

    #[test]
    fn test_invalid_quantum_rejected() {
        let result = simulate(
            Algorithm::RoundRobin,
            &[ProcessSpec::new("P1", 0.0, 1.0)],
            Some(-1.0),
        );
        assert_eq!(result, Err(SchedulerError::InvalidQuantum(-1.0)));
    }

    #[test]
    fn test_quantum_reported_only_for_round_robin() {
        let workload = [ProcessSpec::new("P1", 0.0, 1.0)];
        let rr = simulate(Algorithm::RoundRobin, &workload, Some(3.0)).unwrap();
        assert_eq!(rr.quantum.map(|q| q.units()), Some(3.0));

        let fcfs = simulate(Algorithm::Fcfs, &workload, None).unwrap();
        assert_eq!(fcfs.quantum, None);
    }

    #[test]
    fn test_empty_workload() {
        let report = Engine::default().simulate(&[]).unwrap();
        assert!(report.is_empty());
        assert!(report.timeline.is_empty());
        assert_eq!(report.average_waiting_time(), None);
    }
}
