//! The deterministic base model.
//!
//! Variables (all integer, created once, keyed by index):
//! - `y[m,s] ∈ {0,1}` for every feasible pair — task s assigned to machine m
//! - `j[s,r] ∈ {0,1}` for every ordered pair — s fully precedes r
//! - `s_t[s]`, `s_advance[s]`, `s_delay[s] ∈ [0, end]` — nominal start and
//!   earliness/lateness relative to the target day
//!
//! Constraints:
//! 1. Big-M non-overlap: `s_t[s] + dur[s] <= s_t[r] + end·(1 − j[s,r])`.
//!    The big-M is exactly the horizon span — the largest possible gap, so
//!    the relaxed constraint can never falsely bind.
//! 2. Deviation bookkeeping: `target[s] − s_t[s] <= s_advance[s]` and
//!    `s_t[s] − target[s] <= s_delay[s]`; minimization drives each to the
//!    positive/negative part of the deviation.
//! 3. Single assignment: `Σ_m y[m,s] = 1` (infeasible when no machine is
//!    capable — the empty sum cannot equal 1).
//! 4. Asymmetric ordering: `j[s,r] + j[r,s] <= 1`.
//! 5. Forced ordering when co-located: `y[m,s] + y[m,r] − 1 <= j[s,r] + j[r,s]`,
//!    which with (4) makes exactly one direction hold on a shared machine
//!    and leaves both free at 0 otherwise.

use std::collections::BTreeMap;

use crate::milp::{MilpModel, MilpSolver, SolveStatus, VarId};
use crate::params::ModelParameters;

use super::expand::SubModel;
use super::solution::{ScenarioOutcome, ShopSolution, SolveError, TaskTiming};

/// One timeline's variable handles: start, earliness, lateness per task.
#[derive(Debug, Clone)]
pub struct TimingVars {
    /// Start day per task.
    pub start: Vec<VarId>,
    /// Earliness relative to the target day, per task.
    pub advance: Vec<VarId>,
    /// Lateness relative to the target day, per task.
    pub delay: Vec<VarId>,
}

/// The canonical deterministic MILP and the shared substrate scenario
/// submodels attach to.
///
/// Mutation contract: expanders never touch the arena directly. The
/// extension points are `new_timing_vars`, `order_vars`, `add_less_equal`,
/// `add_objective_term`, and `register_submodel`; everything else is
/// read-only from the outside.
#[derive(Debug, Clone)]
pub struct BaseModel {
    params: ModelParameters,
    milp: MilpModel,
    assignment: BTreeMap<(usize, usize), VarId>,
    order: BTreeMap<(usize, usize), VarId>,
    timing: TimingVars,
    submodels: BTreeMap<String, SubModel>,
}

impl BaseModel {
    /// Builds the deterministic model from parameters.
    pub fn build(params: ModelParameters) -> Self {
        let mut milp = MilpModel::new();
        let end = params.end_date;

        let mut assignment = BTreeMap::new();
        for &(m, s) in &params.assignment_pairs {
            assignment.insert((m, s), milp.add_bool_var(format!("y_{m}_{s}")));
        }

        let mut order = BTreeMap::new();
        for &(s, r) in &params.order_pairs {
            order.insert((s, r), milp.add_bool_var(format!("j_{s}_{r}")));
        }

        let timing = Self::allocate_timing(&mut milp, params.tasks.len(), end, "");

        let mut model = Self {
            params,
            milp,
            assignment,
            order,
            timing,
            submodels: BTreeMap::new(),
        };
        model.create_constraints();
        model.create_objective();
        model
    }

    fn allocate_timing(milp: &mut MilpModel, tasks: usize, end: i64, prefix: &str) -> TimingVars {
        let mut start = Vec::with_capacity(tasks);
        let mut advance = Vec::with_capacity(tasks);
        let mut delay = Vec::with_capacity(tasks);
        for s in 0..tasks {
            start.push(milp.add_int_var(format!("{prefix}s_{s}"), 0, end));
            advance.push(milp.add_int_var(format!("{prefix}s+_{s}"), 0, end));
            delay.push(milp.add_int_var(format!("{prefix}s-_{s}"), 0, end));
        }
        TimingVars {
            start,
            advance,
            delay,
        }
    }

    fn create_constraints(&mut self) {
        self.create_overlap_constraints();
        self.create_deviation_constraints();
        self.create_assignment_constraints();
        self.create_ordering_constraints();
    }

    /// (1) `s_t[s] + dur[s] <= s_t[r] + end·(1 − j[s,r])`, rewritten as
    /// `s_t[s] − s_t[r] + end·j[s,r] <= end − dur[s]`.
    fn create_overlap_constraints(&mut self) {
        let end = self.params.end_date as f64;
        let order: Vec<((usize, usize), VarId)> =
            self.order.iter().map(|(&pair, &var)| (pair, var)).collect();
        for ((s, r), j_sr) in order {
            let duration = self.params.task_durations[s];
            self.milp.add_less_equal(
                format!("overlap_{s}_{r}"),
                vec![
                    (self.timing.start[s], 1.0),
                    (self.timing.start[r], -1.0),
                    (j_sr, end),
                ],
                end - duration as f64,
            );
        }
    }

    /// (2) Earliness/lateness lower bounds against the target day.
    fn create_deviation_constraints(&mut self) {
        for &s in &self.params.tasks {
            let target = self.params.target_execution_times[s] as f64;
            self.milp.add_less_equal(
                format!("advance_{s}"),
                vec![(self.timing.start[s], -1.0), (self.timing.advance[s], -1.0)],
                -target,
            );
            self.milp.add_less_equal(
                format!("delay_{s}"),
                vec![(self.timing.start[s], 1.0), (self.timing.delay[s], -1.0)],
                target,
            );
        }
    }

    /// (3) Exactly one capable machine per task.
    fn create_assignment_constraints(&mut self) {
        for &s in &self.params.tasks {
            let terms: Vec<(VarId, f64)> = self
                .params
                .feasible_machines(s)
                .map(|m| (self.assignment[&(m, s)], 1.0))
                .collect();
            self.milp.add_equal(format!("assignment_{s}"), terms, 1.0);
        }
    }

    /// (4) + (5), emitted once per unordered task pair.
    fn create_ordering_constraints(&mut self) {
        for &s in &self.params.tasks {
            for &r in &self.params.tasks {
                if s >= r {
                    continue;
                }
                let j_sr = self.order[&(s, r)];
                let j_rs = self.order[&(r, s)];
                self.milp.add_less_equal(
                    format!("asymmetric_{s}_{r}"),
                    vec![(j_sr, 1.0), (j_rs, 1.0)],
                    1.0,
                );
                for &m in &self.params.machines {
                    let (Some(&y_ms), Some(&y_mr)) = (
                        self.assignment.get(&(m, s)),
                        self.assignment.get(&(m, r)),
                    ) else {
                        continue;
                    };
                    self.milp.add_less_equal(
                        format!("same_machine_order_{s}_{r}_{m}"),
                        vec![(y_ms, 1.0), (y_mr, 1.0), (j_sr, -1.0), (j_rs, -1.0)],
                        1.0,
                    );
                }
            }
        }
    }

    fn create_objective(&mut self) {
        for &s in &self.params.tasks {
            self.milp
                .add_objective_term(self.timing.advance[s], self.params.advance_costs[s]);
            self.milp
                .add_objective_term(self.timing.delay[s], self.params.delay_costs[s]);
        }
    }

    /// The parameters this model was built from.
    pub fn params(&self) -> &ModelParameters {
        &self.params
    }

    /// Read-only view of the underlying program.
    pub fn milp(&self) -> &MilpModel {
        &self.milp
    }

    /// Shared first-stage ordering variables, keyed by ordered task pair.
    pub fn order_vars(&self) -> &BTreeMap<(usize, usize), VarId> {
        &self.order
    }

    /// Shared first-stage assignment variables, keyed by (machine, task).
    pub fn assignment_vars(&self) -> &BTreeMap<(usize, usize), VarId> {
        &self.assignment
    }

    /// The nominal timeline's variable handles.
    pub fn timing_vars(&self) -> &TimingVars {
        &self.timing
    }

    /// Allocates a fresh set of timing variables scoped to `label`.
    ///
    /// Extension point for expanders: scenario timelines are never shared
    /// with each other or with the nominal timeline.
    pub fn new_timing_vars(&mut self, label: &str) -> TimingVars {
        let prefix = format!("{label}_");
        Self::allocate_timing(
            &mut self.milp,
            self.params.tasks.len(),
            self.params.end_date,
            &prefix,
        )
    }

    /// Adds a named `sum(terms) <= rhs` constraint.
    pub fn add_less_equal(&mut self, name: impl Into<String>, terms: Vec<(VarId, f64)>, rhs: f64) {
        self.milp.add_less_equal(name, terms, rhs);
    }

    /// Adds `coeff` to a variable's coefficient in the shared objective.
    /// Additive — never replaces prior terms.
    pub fn add_objective_term(&mut self, var: VarId, coeff: f64) {
        self.milp.add_objective_term(var, coeff);
    }

    /// Registers a submodel under its scenario name.
    ///
    /// A duplicate name overwrites the prior registration; the variables
    /// and constraints the displaced submodel contributed stay in the
    /// program. Expanding twice under one name is almost certainly a
    /// call-site error and is deliberately not guarded.
    pub fn register_submodel(&mut self, submodel: SubModel) {
        self.submodels.insert(submodel.name.clone(), submodel);
    }

    /// Attached submodels, keyed by scenario name.
    pub fn submodels(&self) -> &BTreeMap<String, SubModel> {
        &self.submodels
    }

    /// Invokes the external solver and extracts the solution.
    ///
    /// On any non-optimal status no values are extracted — a time-limited
    /// or unknown outcome is treated the same as infeasibility at this
    /// boundary.
    pub fn solve(&self, solver: &dyn MilpSolver) -> Result<ShopSolution, SolveError> {
        let outcome = solver.solve(&self.milp);
        match outcome.status {
            SolveStatus::Optimal => Ok(self.extract(&outcome)),
            SolveStatus::Infeasible => Err(SolveError::Infeasible),
            SolveStatus::Other => Err(SolveError::NonOptimal),
        }
    }

    fn extract(&self, outcome: &crate::milp::MilpOutcome) -> ShopSolution {
        let machine_of = self
            .params
            .tasks
            .iter()
            .map(|&s| {
                self.params
                    .feasible_machines(s)
                    .find(|&m| outcome.value(self.assignment[&(m, s)]) > 0.5)
                    .unwrap_or_default()
            })
            .collect();

        let precedes = self
            .order
            .iter()
            .filter(|(_, &j)| outcome.value(j) > 0.5)
            .map(|(&pair, _)| pair)
            .collect();

        let scenarios = self
            .submodels
            .values()
            .map(|sub| ScenarioOutcome {
                name: sub.name.clone(),
                weight: sub.weight,
                durations: sub.durations.clone(),
                timings: Self::extract_timings(&sub.timing, outcome),
            })
            .collect();

        ShopSolution {
            objective: outcome.objective_value,
            machine_of,
            precedes,
            timings: Self::extract_timings(&self.timing, outcome),
            scenarios,
        }
    }

    fn extract_timings(timing: &TimingVars, outcome: &crate::milp::MilpOutcome) -> Vec<TaskTiming> {
        timing
            .start
            .iter()
            .zip(&timing.advance)
            .zip(&timing.delay)
            .map(|((&start, &advance), &delay)| TaskTiming {
                start: outcome.value_as_int(start),
                advance: outcome.value_as_int(advance),
                delay: outcome.value_as_int(delay),
            })
            .collect()
    }
}
