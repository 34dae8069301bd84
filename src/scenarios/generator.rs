//! Scenario generation by index.
//!
//! `TaskDelayScenarioGenerator` enumerates all 2^N delay subsets of N
//! tasks by treating the index as a bitmask: bit i set means task i is
//! delayed. The weight of a scenario is the exact joint probability of
//! that delay/no-delay combination under independence.

use std::ops::Range;

use rand::{Rng, RngCore};

use crate::models::Task;

use super::Scenario;

/// Produces scenarios by integer index.
pub trait ScenarioGenerator {
    /// The valid index range.
    fn index_range(&self) -> Range<u64>;

    /// Builds the scenario for an index in `index_range()`.
    fn generate(&self, index: u64) -> Scenario;

    /// Draws an index according to the generator's own probability
    /// distribution. Defaults to a uniform draw over `index_range()`.
    fn sample_index(&self, rng: &mut dyn RngCore) -> u64 {
        rng.random_range(self.index_range())
    }
}

/// Bitmask enumeration of task-delay combinations.
///
/// The index space is exponential in the task count (2^N scenarios) —
/// exhaustive materialization is intended for small N only.
#[derive(Debug, Clone)]
pub struct TaskDelayScenarioGenerator<'a> {
    tasks: &'a [Task],
}

impl<'a> TaskDelayScenarioGenerator<'a> {
    /// Creates a generator over the given tasks.
    ///
    /// # Panics
    /// Panics if there are 64 or more tasks (the bitmask index is a `u64`;
    /// exhaustive enumeration is far out of reach long before that).
    pub fn new(tasks: &'a [Task]) -> Self {
        assert!(
            tasks.len() < 64,
            "task-delay enumeration is limited to 63 tasks"
        );
        Self { tasks }
    }

    fn is_delayed(index: u64, task: usize) -> bool {
        index & (1 << task) != 0
    }
}

impl ScenarioGenerator for TaskDelayScenarioGenerator<'_> {
    fn index_range(&self) -> Range<u64> {
        0..(1u64 << self.tasks.len())
    }

    fn generate(&self, index: u64) -> Scenario {
        let mut durations = Vec::with_capacity(self.tasks.len());
        let mut weight = 1.0;
        for (s, task) in self.tasks.iter().enumerate() {
            if Self::is_delayed(index, s) {
                durations.push(task.delayed_duration);
                weight *= task.delay_probability;
            } else {
                durations.push(task.base_duration);
                weight *= 1.0 - task.delay_probability;
            }
        }
        Scenario::new(format!("task delay scenario {index}"), weight, durations)
    }

    fn sample_index(&self, rng: &mut dyn RngCore) -> u64 {
        let mut index = 0u64;
        for (s, task) in self.tasks.iter().enumerate() {
            if rng.random_bool(task.delay_probability.clamp(0.0, 1.0)) {
                index |= 1 << s;
            }
        }
        index
    }
}
