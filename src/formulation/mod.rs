//! Two-stage MILP formulation.
//!
//! `BaseModel` owns the canonical deterministic program: assignment and
//! ordering binaries (first stage), nominal timing and deviation
//! integers (second stage), the five structural constraint families, and
//! the single shared objective. `ModelExpander` implementations attach
//! per-scenario submodels through the base model's sanctioned extension
//! points — fresh timing variables, re-emitted sequencing against the
//! *shared* ordering binaries, and weighted additive objective terms —
//! so every scenario's realized timeline must respect the one
//! assignment/ordering decision made upstream of uncertainty.
//!
//! # Reference
//! - Manne (1960), "On the Job-Shop Scheduling Problem" (big-M sequencing)
//! - Birge & Louveaux (2011), "Introduction to Stochastic Programming", Ch. 3

mod base;
mod expand;
mod solution;

pub use base::{BaseModel, TimingVars};
pub use expand::{DelayExpander, ModelExpander, SubModel};
pub use solution::{ScenarioOutcome, ShopSolution, SolveError, TaskTiming};
