//! Scenario submodel expansion.
//!
//! Expanding a scenario attaches a second-stage timeline to the base
//! model: fresh timing/deviation variables, the non-overlap constraints
//! re-emitted with the scenario's durations against the *shared*
//! first-stage ordering binaries, the deviation bookkeeping against the
//! same targets and cost rates, and the scenario's probability-weighted
//! cost folded into the shared objective.

use crate::scenarios::Scenario;

use super::base::{BaseModel, TimingVars};

/// The variables one scenario contributed on top of the base model.
///
/// Owned by, and only reachable through, the base model it was attached
/// to. First-stage decisions are not duplicated here — submodels read
/// them from the base model.
#[derive(Debug, Clone)]
pub struct SubModel {
    /// Scenario name (registry key).
    pub name: String,
    /// Scenario probability weight.
    pub weight: f64,
    /// Realized duration per task under this scenario.
    pub durations: Vec<i64>,
    /// This scenario's own timeline variables.
    pub timing: TimingVars,
}

/// Attaches one scenario's submodel to a built base model.
pub trait ModelExpander {
    /// Mutates `model` in place. Expanding two scenarios with the same
    /// name overwrites the first registration (see
    /// `BaseModel::register_submodel`).
    fn expand(&self, model: &mut BaseModel, scenario: &Scenario);
}

/// Expander for task-delay scenarios: same structure as the base model's
/// timing constraints, with the scenario's realized durations.
#[derive(Debug, Clone, Copy, Default)]
pub struct DelayExpander;

impl DelayExpander {
    /// Creates a new expander.
    pub fn new() -> Self {
        Self
    }

    fn add_overlap_constraints(model: &mut BaseModel, scenario: &Scenario, timing: &TimingVars) {
        let end = model.params().end_date as f64;
        let order: Vec<_> = model
            .order_vars()
            .iter()
            .map(|(&pair, &var)| (pair, var))
            .collect();
        for ((s, r), j_sr) in order {
            // Shared j[s,r]: the sequence decided in the first stage binds
            // this scenario's timeline too.
            model.add_less_equal(
                format!("{}_overlap_{s}_{r}", scenario.name),
                vec![(timing.start[s], 1.0), (timing.start[r], -1.0), (j_sr, end)],
                end - scenario.durations[s] as f64,
            );
        }
    }

    fn add_deviation_constraints(model: &mut BaseModel, scenario: &Scenario, timing: &TimingVars) {
        for s in 0..model.params().tasks.len() {
            let target = model.params().target_execution_times[s] as f64;
            model.add_less_equal(
                format!("{}_advance_{s}", scenario.name),
                vec![(timing.start[s], -1.0), (timing.advance[s], -1.0)],
                -target,
            );
            model.add_less_equal(
                format!("{}_delay_{s}", scenario.name),
                vec![(timing.start[s], 1.0), (timing.delay[s], -1.0)],
                target,
            );
        }
    }

    fn add_weighted_objective(model: &mut BaseModel, scenario: &Scenario, timing: &TimingVars) {
        for s in 0..model.params().tasks.len() {
            let advance_cost = model.params().advance_costs[s];
            let delay_cost = model.params().delay_costs[s];
            model.add_objective_term(timing.advance[s], scenario.weight * advance_cost);
            model.add_objective_term(timing.delay[s], scenario.weight * delay_cost);
        }
    }
}

impl ModelExpander for DelayExpander {
    fn expand(&self, model: &mut BaseModel, scenario: &Scenario) {
        let timing = model.new_timing_vars(&scenario.name);

        Self::add_overlap_constraints(model, scenario, &timing);
        Self::add_deviation_constraints(model, scenario, &timing);
        Self::add_weighted_objective(model, scenario, &timing);

        model.register_submodel(SubModel {
            name: scenario.name.clone(),
            weight: scenario.weight,
            durations: scenario.durations.clone(),
            timing,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Capability, Instance, Machine, PlanningHorizon, Task};
    use crate::params::ModelParameters;

    fn base_model(tasks: usize) -> BaseModel {
        let cap = Capability::new(0, "any");
        let instance = Instance::new(
            (0..tasks)
                .map(|i| {
                    Task::new(format!("T{i}"))
                        .with_capability(cap.clone())
                        .with_durations(2, 5)
                        .with_target_day(4)
                        .with_penalties(1.0, 3.0)
                })
                .collect(),
            vec![Machine::new("M0").with_capability(cap.clone())],
            vec![cap],
            PlanningHorizon::new(0, 20),
        );
        BaseModel::build(ModelParameters::build(&instance))
    }

    #[test]
    fn test_expand_adds_vars_constraints_and_registry_entry() {
        let mut model = base_model(2);
        let vars_before = model.milp().variable_count();
        let cons_before = model.milp().constraint_count();

        DelayExpander::new().expand(&mut model, &Scenario::new("sc", 0.5, vec![5, 2]));

        // 3 fresh vars per task; |J| overlap + 2 deviation per task.
        assert_eq!(model.milp().variable_count(), vars_before + 6);
        assert_eq!(model.milp().constraint_count(), cons_before + 2 + 4);
        assert!(model.submodels().contains_key("sc"));
    }

    #[test]
    fn test_expansion_reuses_shared_order_vars() {
        let mut model = base_model(2);
        DelayExpander::new().expand(&mut model, &Scenario::new("sc", 0.5, vec![5, 2]));

        let shared_j = model.order_vars()[&(0, 1)];
        let overlap = model
            .milp()
            .constraints
            .iter()
            .find(|c| c.name == "sc_overlap_0_1")
            .unwrap();
        assert!(overlap.terms.iter().any(|&(var, _)| var == shared_j));
    }

    #[test]
    fn test_expansion_uses_scenario_durations() {
        let mut model = base_model(2);
        DelayExpander::new().expand(&mut model, &Scenario::new("sc", 0.5, vec![5, 2]));

        // end - dur[s] with end = 20: task 0 delayed (5), task 1 nominal (2).
        let rhs_01 = model
            .milp()
            .constraints
            .iter()
            .find(|c| c.name == "sc_overlap_0_1")
            .unwrap()
            .rhs;
        let rhs_10 = model
            .milp()
            .constraints
            .iter()
            .find(|c| c.name == "sc_overlap_1_0")
            .unwrap()
            .rhs;
        assert!((rhs_01 - 15.0).abs() < 1e-12);
        assert!((rhs_10 - 18.0).abs() < 1e-12);
    }

    #[test]
    fn test_objective_terms_are_weighted_and_additive() {
        let mut model = base_model(1);
        let nominal_advance_coeff = model.milp().objective[model.timing_vars().advance[0].0];

        DelayExpander::new().expand(&mut model, &Scenario::new("sc", 0.25, vec![5]));

        let sub = &model.submodels()["sc"];
        // Scenario terms carry weight * cost.
        assert!((model.milp().objective[sub.timing.advance[0].0] - 0.25).abs() < 1e-12);
        assert!((model.milp().objective[sub.timing.delay[0].0] - 0.75).abs() < 1e-12);
        // The base objective is extended, never replaced.
        assert!(
            (model.milp().objective[model.timing_vars().advance[0].0] - nominal_advance_coeff)
                .abs()
                < 1e-12
        );
    }

    #[test]
    fn test_scenarios_do_not_share_timing_vars() {
        let mut model = base_model(1);
        let expander = DelayExpander::new();
        expander.expand(&mut model, &Scenario::new("a", 0.5, vec![2]));
        expander.expand(&mut model, &Scenario::new("b", 0.5, vec![5]));

        let a = &model.submodels()["a"];
        let b = &model.submodels()["b"];
        assert_ne!(a.timing.start[0], b.timing.start[0]);
        assert_ne!(a.timing.start[0], model.timing_vars().start[0]);
    }
}
