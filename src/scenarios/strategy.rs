//! Scenario materialization strategies.
//!
//! A strategy decides which of a generator's scenarios enter the model:
//! all of them, none (deterministic base model only), or a seeded random
//! sample. An empty scenario list is valid and simply leaves the base
//! model unexpanded.

use rand::rngs::StdRng;
use rand::SeedableRng;

use super::{Scenario, ScenarioGenerator};

/// Decides which scenarios to materialize from a generator.
pub trait ScenarioStrategy {
    /// Produces the scenario list. Total — no failure modes.
    fn scenarios(&self, generator: &dyn ScenarioGenerator) -> Vec<Scenario>;
}

/// Materializes every scenario in the generator's index range.
///
/// Realizations with zero probability are not materialized — they would
/// add variables and constraints that contribute nothing to the
/// expectation. The range is exponential in the task count (2^N); use
/// only for small instances, or switch to `SamplingStrategy`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExhaustiveStrategy;

impl ScenarioStrategy for ExhaustiveStrategy {
    fn scenarios(&self, generator: &dyn ScenarioGenerator) -> Vec<Scenario> {
        generator
            .index_range()
            .map(|index| generator.generate(index))
            .filter(|scenario| scenario.weight != 0.0)
            .collect()
    }
}

/// Materializes no scenarios: the deterministic base model stands alone.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoScenarios;

impl ScenarioStrategy for NoScenarios {
    fn scenarios(&self, _generator: &dyn ScenarioGenerator) -> Vec<Scenario> {
        Vec::new()
    }
}

/// Sample-average approximation: K draws from the generator's own
/// distribution, each weighted 1/K.
///
/// Draws may repeat; every draw is kept and renamed uniquely so that
/// submodel registration (name-keyed, overwrite-on-duplicate) never
/// collapses two draws into one.
#[derive(Debug, Clone, Copy)]
pub struct SamplingStrategy {
    /// Number of draws K.
    pub samples: usize,
    /// RNG seed, for reproducible runs.
    pub seed: u64,
}

impl SamplingStrategy {
    /// Creates a sampling strategy.
    pub fn new(samples: usize, seed: u64) -> Self {
        Self { samples, seed }
    }
}

impl ScenarioStrategy for SamplingStrategy {
    fn scenarios(&self, generator: &dyn ScenarioGenerator) -> Vec<Scenario> {
        let mut rng = StdRng::seed_from_u64(self.seed);
        let weight = 1.0 / self.samples as f64;
        (0..self.samples)
            .map(|draw| {
                let index = generator.sample_index(&mut rng);
                let mut scenario = generator.generate(index);
                scenario.name = format!("draw {draw}: {}", scenario.name);
                scenario.weight = weight;
                scenario
            })
            .collect()
    }
}
