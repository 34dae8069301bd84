//! `good_lp` backend for the `MilpSolver` contract.
//!
//! Translates the arena into a `good_lp` problem and solves it with the
//! crate's default backend (`microlp`, pure Rust). The formulation layer
//! never sees `good_lp` types.

use good_lp::{default_solver, variable, variables, Expression, ResolutionError, Solution,
    SolverModel, Variable};

use super::{MilpModel, MilpOutcome, MilpSolver, Sense, SolveStatus};

/// Exact MILP solving via `good_lp`.
#[derive(Debug, Clone, Copy, Default)]
pub struct GoodLpSolver;

impl GoodLpSolver {
    /// Creates a new solver.
    pub fn new() -> Self {
        Self
    }
}

impl MilpSolver for GoodLpSolver {
    fn solve(&self, model: &MilpModel) -> MilpOutcome {
        // Rows with no variables never reach the backend: a violated empty
        // row (e.g., an exactly-one sum over zero feasible machines) is
        // immediate infeasibility, a satisfied one is dropped.
        for constraint in &model.constraints {
            if constraint.terms.is_empty() {
                let holds = match constraint.sense {
                    Sense::LessEqual => 0.0 <= constraint.rhs,
                    Sense::Equal => constraint.rhs == 0.0,
                };
                if !holds {
                    return MilpOutcome {
                        status: SolveStatus::Infeasible,
                        values: Vec::new(),
                        objective_value: 0.0,
                    };
                }
            }
        }

        let mut vars = variables!();
        let handles: Vec<Variable> = model
            .variables
            .iter()
            .map(|spec| {
                vars.add(
                    variable()
                        .integer()
                        .min(spec.min as f64)
                        .max(spec.max as f64)
                        .name(spec.name.as_str()),
                )
            })
            .collect();

        let objective = model
            .objective
            .iter()
            .zip(&handles)
            .fold(Expression::from(0.0), |acc, (&coeff, &var)| {
                acc + coeff * var
            });

        let mut problem = vars.minimise(objective).using(default_solver);

        for constraint in model.constraints.iter().filter(|c| !c.terms.is_empty()) {
            let lhs = constraint
                .terms
                .iter()
                .fold(Expression::from(0.0), |acc, &(var, coeff)| {
                    acc + coeff * handles[var.0]
                });
            match constraint.sense {
                Sense::LessEqual => problem.add_constraint(lhs.leq(constraint.rhs)),
                Sense::Equal => problem.add_constraint(lhs.eq(constraint.rhs)),
            };
        }

        match problem.solve() {
            Ok(solution) => {
                let values: Vec<f64> = handles.iter().map(|&v| solution.value(v)).collect();
                let objective_value = model
                    .objective
                    .iter()
                    .zip(&values)
                    .map(|(coeff, value)| coeff * value)
                    .sum();
                MilpOutcome {
                    status: SolveStatus::Optimal,
                    values,
                    objective_value,
                }
            }
            Err(ResolutionError::Infeasible) => MilpOutcome {
                status: SolveStatus::Infeasible,
                values: Vec::new(),
                objective_value: 0.0,
            },
            Err(_) => MilpOutcome {
                status: SolveStatus::Other,
                values: Vec::new(),
                objective_value: 0.0,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_solve_simple_minimization() {
        // min x + y  s.t.  x + y >= 3 (as -x - y <= -3), x <= 2
        let mut model = MilpModel::new();
        let x = model.add_int_var("x", 0, 2);
        let y = model.add_int_var("y", 0, 10);
        model.add_objective_term(x, 1.0);
        model.add_objective_term(y, 1.0);
        model.add_less_equal("at_least_3", vec![(x, -1.0), (y, -1.0)], -3.0);

        let outcome = GoodLpSolver::new().solve(&model);
        assert_eq!(outcome.status, SolveStatus::Optimal);
        assert!((outcome.objective_value - 3.0).abs() < 1e-6);
        assert!((outcome.value(x) + outcome.value(y) - 3.0).abs() < 1e-6);
    }

    #[test]
    fn test_solve_respects_equality() {
        let mut model = MilpModel::new();
        let x = model.add_int_var("x", 0, 10);
        model.add_objective_term(x, 1.0);
        model.add_equal("fix", vec![(x, 1.0)], 4.0);

        let outcome = GoodLpSolver::new().solve(&model);
        assert_eq!(outcome.status, SolveStatus::Optimal);
        assert_eq!(outcome.value_as_int(x), 4);
    }

    #[test]
    fn test_solve_infeasible() {
        // x <= 1 and x == 2 cannot both hold.
        let mut model = MilpModel::new();
        let x = model.add_int_var("x", 0, 1);
        model.add_equal("fix", vec![(x, 1.0)], 2.0);

        let outcome = GoodLpSolver::new().solve(&model);
        assert_eq!(outcome.status, SolveStatus::Infeasible);
        assert!(outcome.values.is_empty());
    }

    #[test]
    fn test_empty_rows_resolved_without_backend() {
        let mut model = MilpModel::new();
        let x = model.add_int_var("x", 0, 1);
        model.add_objective_term(x, 1.0);
        model.add_less_equal("vacuous", vec![], 3.0);

        assert_eq!(GoodLpSolver::new().solve(&model).status, SolveStatus::Optimal);

        model.add_equal("violated", vec![], 1.0);
        assert_eq!(
            GoodLpSolver::new().solve(&model).status,
            SolveStatus::Infeasible
        );
    }

    #[test]
    fn test_solve_integrality() {
        // min 2x + y  s.t.  2x + y >= 3 with integer x, y.
        let mut model = MilpModel::new();
        let x = model.add_int_var("x", 0, 5);
        let y = model.add_int_var("y", 0, 5);
        model.add_objective_term(x, 2.0);
        model.add_objective_term(y, 1.0);
        model.add_less_equal("cover", vec![(x, -2.0), (y, -1.0)], -3.0);

        let outcome = GoodLpSolver::new().solve(&model);
        assert_eq!(outcome.status, SolveStatus::Optimal);
        let x_val = outcome.value(x);
        let y_val = outcome.value(y);
        assert!((x_val - x_val.round()).abs() < 1e-6);
        assert!((y_val - y_val.round()).abs() < 1e-6);
        assert!((outcome.objective_value - 3.0).abs() < 1e-6);
    }
}
