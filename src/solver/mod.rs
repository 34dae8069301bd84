//! Stochastic solver orchestration.
//!
//! `StochasticSolver` wires the pieces together: the strategy asks the
//! generator for scenarios, the parameter builder derives index sets from
//! the instance, the base model is built once, every scenario is expanded
//! into it, and one solve extracts the full solution.
//!
//! Everything runs on one thread; the model is mutated sequentially by
//! each expansion and frozen once the backend is invoked. There is no
//! partial solving, incremental re-solve, or cancellation.

use crate::formulation::{BaseModel, ModelExpander};
use crate::milp::MilpSolver;
use crate::models::Instance;
use crate::params::ModelParameters;
use crate::scenarios::{ScenarioGenerator, ScenarioStrategy};

pub use crate::formulation::{ScenarioOutcome, ShopSolution, SolveError, TaskTiming};

/// Two-stage stochastic solver over a scheduling instance.
///
/// # Example
///
/// ```
/// use u_jobshop::models::{Capability, Instance, Machine, PlanningHorizon, Task};
/// use u_jobshop::scenarios::{ExhaustiveStrategy, TaskDelayScenarioGenerator};
/// use u_jobshop::formulation::DelayExpander;
/// use u_jobshop::milp::GoodLpSolver;
/// use u_jobshop::solver::StochasticSolver;
///
/// let cap = Capability::new(0, "milling");
/// let instance = Instance::new(
///     vec![Task::new("T0")
///         .with_capability(cap.clone())
///         .with_durations(2, 5)
///         .with_delay_probability(0.3)
///         .with_penalties(1.0, 2.0)],
///     vec![Machine::new("M0").with_capability(cap.clone())],
///     vec![cap],
///     PlanningHorizon::new(0, 10),
/// );
///
/// let generator = TaskDelayScenarioGenerator::new(&instance.tasks);
/// let solver = StochasticSolver::new(
///     generator,
///     ExhaustiveStrategy,
///     DelayExpander::new(),
///     GoodLpSolver::new(),
/// );
/// let solution = solver.solve(&instance).unwrap();
/// assert_eq!(solution.scenarios.len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct StochasticSolver<G, St, E, M> {
    generator: G,
    strategy: St,
    expander: E,
    backend: M,
}

impl<G, St, E, M> StochasticSolver<G, St, E, M>
where
    G: ScenarioGenerator,
    St: ScenarioStrategy,
    E: ModelExpander,
    M: MilpSolver,
{
    /// Creates a solver from its collaborators.
    pub fn new(generator: G, strategy: St, expander: E, backend: M) -> Self {
        Self {
            generator,
            strategy,
            expander,
            backend,
        }
    }

    /// Formulates, expands, and solves the instance.
    ///
    /// An empty scenario list is valid and yields the deterministic base
    /// model. On any non-optimal status no solution is returned.
    pub fn solve(&self, instance: &Instance) -> Result<ShopSolution, SolveError> {
        let scenarios = self.strategy.scenarios(&self.generator);
        let params = ModelParameters::build(instance);
        let mut model = BaseModel::build(params);
        for scenario in &scenarios {
            self.expander.expand(&mut model, scenario);
        }
        model.solve(&self.backend)
    }
}
