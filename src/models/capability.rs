//! Capability model.
//!
//! A capability is an identity-bearing tag coupling tasks to the machines
//! that can perform them. Capabilities are created once per distinct name
//! discovered in the input and shared by cheap clones.

use serde::{Deserialize, Serialize};

/// A named skill/requirement shared between tasks and machines.
///
/// Equality is by value (id and name together). The caller assigns ids;
/// `validation` checks that every capability referenced by a task or
/// machine appears in the instance's capability universe.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Capability {
    /// Unique numeric identifier within an instance.
    pub id: u32,
    /// Capability name (e.g., "welding", "milling").
    pub name: String,
}

impl Capability {
    /// Creates a new capability.
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}
