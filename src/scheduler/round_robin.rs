/*!
 * Round Robin Scheduling
 * FIFO ready queue with a fixed time quantum
 */

use super::simulation::Simulation;
use super::traits::SchedulingAlgorithm;
use super::types::{Algorithm, TimeQuantum};
use std::collections::VecDeque;
use tracing::trace;

/// Round Robin scheduler
#[derive(Debug, Clone, Copy, Default)]
pub struct RoundRobin {
    quantum: TimeQuantum,
}

impl RoundRobin {
    pub fn new(quantum: TimeQuantum) -> Self {
        Self { quantum }
    }
}

/// Tracks which tasks have entered the ready queue
struct Admission {
    order: Vec<usize>,
    cursor: usize,
}

impl Admission {
    fn new(sim: &Simulation) -> Self {
        Self {
            order: sim.arrival_order(),
            cursor: 0,
        }
    }

    /// Enqueue every task that has arrived by the current clock
    fn admit(&mut self, sim: &Simulation, queue: &mut VecDeque<usize>) {
        while let Some(&index) = self.order.get(self.cursor) {
            if !sim.task(index).has_arrived(sim.now()) {
                break;
            }
            queue.push_back(index);
            self.cursor += 1;
        }
    }

    fn next_arrival(&self, sim: &Simulation) -> Option<f64> {
        self.order
            .get(self.cursor)
            .map(|&index| sim.task(index).arrival())
    }
}

impl SchedulingAlgorithm for RoundRobin {
    fn algorithm(&self) -> Algorithm {
        Algorithm::RoundRobin
    }

    fn run(&self, sim: &mut Simulation) {
        let mut queue = VecDeque::with_capacity(sim.tasks().len());
        let mut admission = Admission::new(sim);

        loop {
            admission.admit(sim, &mut queue);

            let Some(index) = queue.pop_front() else {
                match admission.next_arrival(sim) {
                    Some(arrival) => {
                        sim.idle_until(arrival);
                        continue;
                    }
                    None => break,
                }
            };

            sim.execute(index, self.quantum.units());
            trace!(
                process = sim.task(index).id(),
                remaining = sim.task(index).remaining(),
                now = sim.now(),
                "quantum expired"
            );

            // Arrivals during the slice queue ahead of the preempted task
            admission.admit(sim, &mut queue);
            if !sim.task(index).is_complete() {
                queue.push_back(index);
            }
        }
    }
}
