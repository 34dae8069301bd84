//! Solver-agnostic MILP representation and solving contract.
//!
//! `MilpModel` is a plain-data arena: integer decision variables with
//! closed bounds, named linear constraints, and one additive minimization
//! objective. `MilpSolver` is the boundary to an exact backend — any
//! engine that can solve the arena and report one of three statuses is
//! substitutable. No backend-specific tuning leaks into the arena.

mod solver;

pub use solver::GoodLpSolver;

use serde::{Deserialize, Serialize};

/// Handle to a variable in a `MilpModel`.
///
/// Indexes the arena's variable table; only meaningful for the model that
/// issued it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct VarId(pub usize);

/// An integer decision variable with closed bounds.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VarSpec {
    /// Variable name (for diagnostics; uniqueness is the builder's concern).
    pub name: String,
    /// Lower bound (inclusive).
    pub min: i64,
    /// Upper bound (inclusive).
    pub max: i64,
}

/// Constraint sense.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sense {
    /// `terms <= rhs`
    LessEqual,
    /// `terms == rhs`
    Equal,
}

/// A named linear constraint: `sum(coeff * var) <sense> rhs`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinearConstraint {
    /// Constraint name (for diagnostics).
    pub name: String,
    /// (variable, coefficient) pairs.
    pub terms: Vec<(VarId, f64)>,
    /// Constraint sense.
    pub sense: Sense,
    /// Right-hand side.
    pub rhs: f64,
}

/// Outcome status of a solve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SolveStatus {
    /// An optimal solution was found; variable values are meaningful.
    Optimal,
    /// The model has no feasible solution.
    Infeasible,
    /// Any other termination (unbounded, limit reached, unknown).
    Other,
}

/// Result of a solve. Variable values are meaningful only when
/// `status == SolveStatus::Optimal`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MilpOutcome {
    /// Termination status.
    pub status: SolveStatus,
    /// Value per variable, indexed by `VarId`. Empty unless optimal.
    pub values: Vec<f64>,
    /// Objective value. Zero unless optimal.
    pub objective_value: f64,
}

impl MilpOutcome {
    /// Value of a variable.
    pub fn value(&self, var: VarId) -> f64 {
        self.values[var.0]
    }

    /// Value of a variable rounded to the nearest integer.
    pub fn value_as_int(&self, var: VarId) -> i64 {
        self.values[var.0].round() as i64
    }
}

/// An exact MILP solving engine.
///
/// The contract the formulation layer depends on: solve the arena to
/// proven optimality or report why not. Implementations must not mutate
/// shared state between calls.
pub trait MilpSolver {
    /// Solves the model.
    fn solve(&self, model: &MilpModel) -> MilpOutcome;
}

/// A mixed-integer linear program under construction.
///
/// The objective is a single shared accumulator: `add_objective_term`
/// adds to a variable's coefficient and never replaces prior
/// contributions, so scenario submodels can fold their weighted costs
/// into the same expression.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MilpModel {
    /// Variable table, indexed by `VarId`.
    pub variables: Vec<VarSpec>,
    /// Constraint list.
    pub constraints: Vec<LinearConstraint>,
    /// Objective coefficient per variable (minimization), parallel to
    /// `variables`.
    pub objective: Vec<f64>,
}

impl MilpModel {
    /// Creates an empty model.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an integer variable with bounds `[min, max]`.
    pub fn add_int_var(&mut self, name: impl Into<String>, min: i64, max: i64) -> VarId {
        let id = VarId(self.variables.len());
        self.variables.push(VarSpec {
            name: name.into(),
            min,
            max,
        });
        self.objective.push(0.0);
        id
    }

    /// Adds a binary variable.
    pub fn add_bool_var(&mut self, name: impl Into<String>) -> VarId {
        self.add_int_var(name, 0, 1)
    }

    /// Adds a named `sum(terms) <= rhs` constraint.
    pub fn add_less_equal(
        &mut self,
        name: impl Into<String>,
        terms: Vec<(VarId, f64)>,
        rhs: f64,
    ) {
        self.constraints.push(LinearConstraint {
            name: name.into(),
            terms,
            sense: Sense::LessEqual,
            rhs,
        });
    }

    /// Adds a named `sum(terms) == rhs` constraint.
    pub fn add_equal(&mut self, name: impl Into<String>, terms: Vec<(VarId, f64)>, rhs: f64) {
        self.constraints.push(LinearConstraint {
            name: name.into(),
            terms,
            sense: Sense::Equal,
            rhs,
        });
    }

    /// Adds `coeff` to a variable's objective coefficient.
    pub fn add_objective_term(&mut self, var: VarId, coeff: f64) {
        self.objective[var.0] += coeff;
    }

    /// Number of variables.
    pub fn variable_count(&self) -> usize {
        self.variables.len()
    }

    /// Number of constraints.
    pub fn constraint_count(&self) -> usize {
        self.constraints.len()
    }
}
