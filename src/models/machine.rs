//! Machine model.
//!
//! A machine can perform a task iff the task's required-capability set is
//! a subset of the machine's capability set.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::{Capability, Task};

/// A machine that performs tasks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Machine {
    /// Human-readable name.
    pub name: String,
    /// Capabilities this machine possesses.
    pub capabilities: BTreeSet<Capability>,
}

impl Machine {
    /// Creates a new machine with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            capabilities: BTreeSet::new(),
        }
    }

    /// Adds a possessed capability.
    pub fn with_capability(mut self, capability: Capability) -> Self {
        self.capabilities.insert(capability);
        self
    }

    /// Whether this machine can perform the given task.
    pub fn can_perform(&self, task: &Task) -> bool {
        task.required_capabilities.is_subset(&self.capabilities)
    }
}
