//! Task model.
//!
//! A task is a unit of work with a preferred ("target") completion day,
//! earliness/lateness penalty rates, and an uncertain duration: with
//! probability `delay_probability` the task takes `delayed_duration` days
//! instead of `base_duration`.
//!
//! # Time Representation
//! All days are integer day numbers relative to a scheduling epoch (day 0).
//! The consumer defines what day 0 means.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::Capability;

/// A task to be scheduled on a capability-matching machine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    /// Human-readable name.
    pub name: String,
    /// Probability that this task is delayed, in [0, 1].
    pub delay_probability: f64,
    /// Nominal duration in days.
    pub base_duration: i64,
    /// Duration in days under the "delayed" realization.
    pub delayed_duration: i64,
    /// Preferred completion day (epoch day number; may precede the horizon).
    pub target_day: i64,
    /// Penalty rate per day of earliness relative to the target.
    pub early_penalty: f64,
    /// Penalty rate per day of lateness relative to the target.
    pub late_penalty: f64,
    /// Capabilities a machine must possess to perform this task.
    pub required_capabilities: BTreeSet<Capability>,
}

impl Task {
    /// Creates a new task with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            delay_probability: 0.0,
            base_duration: 0,
            delayed_duration: 0,
            target_day: 0,
            early_penalty: 0.0,
            late_penalty: 0.0,
            required_capabilities: BTreeSet::new(),
        }
    }

    /// Sets the delay probability.
    pub fn with_delay_probability(mut self, p: f64) -> Self {
        self.delay_probability = p;
        self
    }

    /// Sets the nominal and delayed durations (days).
    pub fn with_durations(mut self, base: i64, delayed: i64) -> Self {
        self.base_duration = base;
        self.delayed_duration = delayed;
        self
    }

    /// Sets the target completion day (epoch day number).
    pub fn with_target_day(mut self, day: i64) -> Self {
        self.target_day = day;
        self
    }

    /// Sets the earliness/lateness penalty rates.
    pub fn with_penalties(mut self, early: f64, late: f64) -> Self {
        self.early_penalty = early;
        self.late_penalty = late;
        self
    }

    /// Adds a required capability.
    pub fn with_capability(mut self, capability: Capability) -> Self {
        self.required_capabilities.insert(capability);
        self
    }

    /// Whether this task carries any duration uncertainty.
    pub fn is_uncertain(&self) -> bool {
        self.delay_probability > 0.0 && self.delayed_duration != self.base_duration
    }
}
