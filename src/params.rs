//! Model parameters derived from an instance.
//!
//! `ModelParameters` is the read-only snapshot the constraint model is
//! built from: index sets, feasible assignment pairs, ordering pairs, and
//! per-task coefficient maps. Built once per instance and treated as
//! immutable by everything downstream.
//!
//! Pair sets are ordered (`BTreeSet`) so that variable creation order —
//! and therefore the arena layout — is deterministic for a given instance.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::models::Instance;

/// Primitive index sets and coefficients consumed by model construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelParameters {
    /// Machine indices M = 0..machine_count.
    pub machines: Vec<usize>,
    /// Task indices S = 0..task_count.
    pub tasks: Vec<usize>,
    /// Feasible assignment pairs Y: (m, s) where machine m can perform task s.
    ///
    /// A task with no feasible machine yields an infeasible model, detected
    /// at solve time rather than here.
    pub assignment_pairs: BTreeSet<(usize, usize)>,
    /// Ordering pairs J: all (s, r) with s != r, both directions present.
    pub order_pairs: BTreeSet<(usize, usize)>,
    /// Per-task lateness penalty rate.
    pub delay_costs: Vec<f64>,
    /// Per-task earliness penalty rate.
    pub advance_costs: Vec<f64>,
    /// Per-task target day as an offset from the horizon start.
    ///
    /// Negative when the target precedes the horizon — not rejected.
    pub target_execution_times: Vec<i64>,
    /// Per-task nominal duration in days.
    pub task_durations: Vec<i64>,
    /// Horizon start in model time (always 0).
    pub start_date: i64,
    /// Horizon span in days; the upper bound of every time variable and
    /// the big-M of the sequencing constraints.
    pub end_date: i64,
}

impl ModelParameters {
    /// Derives parameters from an instance.
    pub fn build(instance: &Instance) -> Self {
        let machines: Vec<usize> = (0..instance.machine_count()).collect();
        let tasks: Vec<usize> = (0..instance.task_count()).collect();

        let mut assignment_pairs = BTreeSet::new();
        for &m in &machines {
            for &s in &tasks {
                if instance.machines[m].can_perform(&instance.tasks[s]) {
                    assignment_pairs.insert((m, s));
                }
            }
        }

        let mut order_pairs = BTreeSet::new();
        for &s in &tasks {
            for &r in &tasks {
                if s != r {
                    order_pairs.insert((s, r));
                }
            }
        }

        let start = instance.horizon.start_day;
        Self {
            machines,
            tasks,
            assignment_pairs,
            order_pairs,
            delay_costs: instance.tasks.iter().map(|t| t.late_penalty).collect(),
            advance_costs: instance.tasks.iter().map(|t| t.early_penalty).collect(),
            target_execution_times: instance
                .tasks
                .iter()
                .map(|t| t.target_day - start)
                .collect(),
            task_durations: instance.tasks.iter().map(|t| t.base_duration).collect(),
            start_date: 0,
            end_date: instance.horizon.span_days(),
        }
    }

    /// Feasible machine indices for a task.
    pub fn feasible_machines(&self, task: usize) -> impl Iterator<Item = usize> + '_ {
        self.machines
            .iter()
            .copied()
            .filter(move |&m| self.assignment_pairs.contains(&(m, task)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Capability, Instance, Machine, PlanningHorizon, Task};

    fn two_task_instance() -> Instance {
        let milling = Capability::new(0, "milling");
        let welding = Capability::new(1, "welding");
        Instance::new(
            vec![
                Task::new("T0")
                    .with_capability(milling.clone())
                    .with_durations(2, 5)
                    .with_target_day(103)
                    .with_penalties(1.0, 4.0),
                Task::new("T1")
                    .with_capability(welding.clone())
                    .with_durations(3, 6)
                    .with_target_day(95)
                    .with_penalties(2.0, 3.0),
            ],
            vec![
                Machine::new("M0")
                    .with_capability(milling.clone())
                    .with_capability(welding.clone()),
                Machine::new("M1").with_capability(welding.clone()),
            ],
            vec![milling, welding],
            PlanningHorizon::new(100, 110),
        )
    }

    #[test]
    fn test_index_sets() {
        let params = ModelParameters::build(&two_task_instance());
        assert_eq!(params.machines, vec![0, 1]);
        assert_eq!(params.tasks, vec![0, 1]);
        assert_eq!(params.start_date, 0);
        assert_eq!(params.end_date, 10);
    }

    #[test]
    fn test_assignment_pairs_follow_capabilities() {
        let params = ModelParameters::build(&two_task_instance());
        // M0 performs both; M1 only the welding task.
        let expected: BTreeSet<_> = [(0, 0), (0, 1), (1, 1)].into_iter().collect();
        assert_eq!(params.assignment_pairs, expected);
        assert_eq!(params.feasible_machines(0).collect::<Vec<_>>(), vec![0]);
        assert_eq!(params.feasible_machines(1).collect::<Vec<_>>(), vec![0, 1]);
    }

    #[test]
    fn test_order_pairs_both_directions() {
        let params = ModelParameters::build(&two_task_instance());
        let expected: BTreeSet<_> = [(0, 1), (1, 0)].into_iter().collect();
        assert_eq!(params.order_pairs, expected);
    }

    #[test]
    fn test_costs_and_targets() {
        let params = ModelParameters::build(&two_task_instance());
        assert_eq!(params.advance_costs, vec![1.0, 2.0]);
        assert_eq!(params.delay_costs, vec![4.0, 3.0]);
        assert_eq!(params.target_execution_times, vec![3, -5]);
        assert_eq!(params.task_durations, vec![2, 3]);
    }

    #[test]
    fn test_task_without_machine_yields_no_pair() {
        let mut instance = two_task_instance();
        instance.machines.truncate(1);
        instance.machines[0].capabilities.clear();
        let params = ModelParameters::build(&instance);
        assert!(params.assignment_pairs.is_empty());
    }
}
