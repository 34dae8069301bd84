//! Scheduling domain models.
//!
//! Immutable description of a stochastic job-shop instance: tasks that
//! require capabilities and carry uncertain durations, machines that
//! possess capabilities, and a planning horizon in whole days.
//!
//! Within a model, tasks and machines are identified by their position
//! index in the instance lists (0..N-1 / 0..M-1) — the index, not the
//! name, is the key used throughout constraint construction.

mod capability;
mod instance;
mod machine;
mod task;

pub use capability::Capability;
pub use instance::{Instance, PlanningHorizon};
pub use machine::Machine;
pub use task::Task;
