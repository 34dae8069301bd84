//! Problem instance model.
//!
//! An instance is the full description of one scheduling problem: ordered
//! task and machine lists, the capability universe, and a planning
//! horizon. Instances are built once from input and never mutated.

use serde::{Deserialize, Serialize};

use super::{Capability, Machine, Task};

/// The planning horizon, as epoch day numbers.
///
/// Converted downstream to an integer day span: all time variables are
/// non-negative integers bounded by `span_days()`. The core does not
/// reject an end before the start; see `validation` for the opt-in check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanningHorizon {
    /// First day of the horizon (epoch day number).
    pub start_day: i64,
    /// Last day of the horizon (epoch day number).
    pub end_day: i64,
}

impl PlanningHorizon {
    /// Creates a horizon spanning `[start_day, end_day]`.
    pub fn new(start_day: i64, end_day: i64) -> Self {
        Self { start_day, end_day }
    }

    /// Horizon length in days.
    pub fn span_days(&self) -> i64 {
        self.end_day - self.start_day
    }
}

/// A complete scheduling problem instance.
///
/// Invariant (unchecked here, see `validation`): every capability
/// referenced by any task or machine appears in `capabilities`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Instance {
    /// Tasks to schedule; position index is the task key.
    pub tasks: Vec<Task>,
    /// Available machines; position index is the machine key.
    pub machines: Vec<Machine>,
    /// The capability universe.
    pub capabilities: Vec<Capability>,
    /// The planning horizon.
    pub horizon: PlanningHorizon,
}

impl Instance {
    /// Creates a new instance.
    pub fn new(
        tasks: Vec<Task>,
        machines: Vec<Machine>,
        capabilities: Vec<Capability>,
        horizon: PlanningHorizon,
    ) -> Self {
        Self {
            tasks,
            machines,
            capabilities,
            horizon,
        }
    }

    /// Number of tasks.
    pub fn task_count(&self) -> usize {
        self.tasks.len()
    }

    /// Number of machines.
    pub fn machine_count(&self) -> usize {
        self.machines.len()
    }

    /// Looks up a capability in the universe by name.
    pub fn capability(&self, name: &str) -> Option<&Capability> {
        self.capabilities.iter().find(|c| c.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_horizon_span() {
        let h = PlanningHorizon::new(100, 145);
        assert_eq!(h.span_days(), 45);
    }

    #[test]
    fn test_instance_lookup() {
        let cap = Capability::new(0, "milling");
        let instance = Instance::new(
            vec![Task::new("T1").with_capability(cap.clone())],
            vec![Machine::new("M1").with_capability(cap.clone())],
            vec![cap],
            PlanningHorizon::new(0, 10),
        );

        assert_eq!(instance.task_count(), 1);
        assert_eq!(instance.machine_count(), 1);
        assert!(instance.capability("milling").is_some());
        assert!(instance.capability("welding").is_none());
    }

    #[test]
    fn test_instance_serde_roundtrip() {
        let cap = Capability::new(0, "milling");
        let instance = Instance::new(
            vec![Task::new("T1")
                .with_capability(cap.clone())
                .with_durations(2, 5)
                .with_delay_probability(0.3)],
            vec![Machine::new("M1").with_capability(cap.clone())],
            vec![cap],
            PlanningHorizon::new(0, 10),
        );

        let json = serde_json::to_string(&instance).unwrap();
        let back: Instance = serde_json::from_str(&json).unwrap();
        assert_eq!(back, instance);
    }
}
