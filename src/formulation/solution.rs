//! Solution types and the solve-failure taxonomy.
//!
//! On an optimal solve the model yields a structured solution; on any
//! other status it yields an error and no values — a time-limited or
//! unknown outcome must not be presented as an authoritative schedule.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::error::Error;
use std::fmt;

/// One timeline's realized values for a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskTiming {
    /// Start day (offset from the horizon start).
    pub start: i64,
    /// Days of earliness relative to the target.
    pub advance: i64,
    /// Days of lateness relative to the target.
    pub delay: i64,
}

/// A scenario submodel's realized timeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioOutcome {
    /// Scenario name.
    pub name: String,
    /// Scenario probability weight.
    pub weight: f64,
    /// Realized duration per task under this scenario.
    pub durations: Vec<i64>,
    /// Start/advance/delay per task under this scenario.
    pub timings: Vec<TaskTiming>,
}

/// An optimal solution to the full (base + scenarios) program.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShopSolution {
    /// Objective value: nominal cost plus the weighted scenario costs.
    pub objective: f64,
    /// Assigned machine index per task.
    pub machine_of: Vec<usize>,
    /// Ordered pairs (s, r) where task s fully precedes task r.
    ///
    /// Populated only for pairs sharing a machine; tasks on different
    /// machines leave both directions unset.
    pub precedes: BTreeSet<(usize, usize)>,
    /// Nominal timeline per task.
    pub timings: Vec<TaskTiming>,
    /// One outcome per attached scenario submodel.
    pub scenarios: Vec<ScenarioOutcome>,
}

impl ShopSolution {
    /// Nominal completion day of a task, given its nominal duration.
    pub fn end_of(&self, task: usize, duration: i64) -> i64 {
        self.timings[task].start + duration
    }

    /// Whether task `s` precedes task `r` in the shared sequence.
    pub fn is_before(&self, s: usize, r: usize) -> bool {
        self.precedes.contains(&(s, r))
    }
}

/// Why no solution was extracted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolveError {
    /// The model has no feasible solution (e.g., a task with no
    /// capability-matching machine). A property of the input — not
    /// retried.
    Infeasible,
    /// The solver stopped without proving optimality (limits, unbounded,
    /// unknown). Treated like infeasibility at this boundary.
    NonOptimal,
}

impl fmt::Display for SolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SolveError::Infeasible => write!(f, "the model has no feasible solution"),
            SolveError::NonOptimal => {
                write!(f, "the solver stopped without proving optimality")
            }
        }
    }
}

impl Error for SolveError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_solution_queries() {
        let solution = ShopSolution {
            objective: 5.0,
            machine_of: vec![0, 0],
            precedes: [(0, 1)].into_iter().collect(),
            timings: vec![
                TaskTiming {
                    start: 0,
                    advance: 0,
                    delay: 0,
                },
                TaskTiming {
                    start: 2,
                    advance: 0,
                    delay: 1,
                },
            ],
            scenarios: Vec::new(),
        };

        assert_eq!(solution.end_of(0, 2), 2);
        assert!(solution.is_before(0, 1));
        assert!(!solution.is_before(1, 0));
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            SolveError::Infeasible.to_string(),
            "the model has no feasible solution"
        );
        assert!(SolveError::NonOptimal.to_string().contains("optimality"));
    }

    #[test]
    fn test_solution_serde_roundtrip() {
        let solution = ShopSolution {
            objective: 1.5,
            machine_of: vec![1],
            precedes: BTreeSet::new(),
            timings: vec![TaskTiming {
                start: 3,
                advance: 0,
                delay: 2,
            }],
            scenarios: vec![ScenarioOutcome {
                name: "sc".into(),
                weight: 0.5,
                durations: vec![4],
                timings: vec![TaskTiming {
                    start: 3,
                    advance: 1,
                    delay: 0,
                }],
            }],
        };

        let json = serde_json::to_string(&solution).unwrap();
        let back: ShopSolution = serde_json::from_str(&json).unwrap();
        assert_eq!(back, solution);
    }
}
