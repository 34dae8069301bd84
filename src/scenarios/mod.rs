//! Delay scenarios and their generation.
//!
//! A scenario is one probability-weighted alternative realization of task
//! durations: each task is either delayed or not. `ScenarioGenerator`
//! enumerates realizations by integer index; `ScenarioStrategy` decides
//! which of them to materialize (all, none, or a random sample).

mod generator;
mod strategy;

pub use generator::{ScenarioGenerator, TaskDelayScenarioGenerator};
pub use strategy::{ExhaustiveStrategy, NoScenarios, SamplingStrategy, ScenarioStrategy};

use serde::{Deserialize, Serialize};

/// A named, weighted alternative duration assignment.
///
/// Scenarios are independent of each other; the base model's own
/// objective corresponds to the nominal-duration case and is present
/// regardless of how many scenarios are attached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    /// Unique label. Submodels are registered under this name; a
    /// duplicate name overwrites the prior registration.
    pub name: String,
    /// Probability weight of this realization.
    pub weight: f64,
    /// Realized duration per task index.
    pub durations: Vec<i64>,
}

impl Scenario {
    /// Creates a new scenario.
    pub fn new(name: impl Into<String>, weight: f64, durations: Vec<i64>) -> Self {
        Self {
            name: name.into(),
            weight,
            durations,
        }
    }
}
