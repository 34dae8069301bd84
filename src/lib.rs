//! Stochastic job-shop scheduling for the U-Engine ecosystem.
//!
//! Formulates a job-shop instance — tasks with required capabilities and
//! target completion days, machines with possessed capabilities — as a
//! two-stage stochastic MILP and solves it against a pluggable exact
//! backend. First-stage decisions (machine assignment, task ordering) are
//! made once; second-stage decisions (per-scenario timing and deviation)
//! adapt to each probability-weighted realization of task durations.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Capability`, `Task`, `Machine`,
//!   `PlanningHorizon`, `Instance`
//! - **`validation`**: Opt-in input integrity checks (never invoked by the
//!   solver itself)
//! - **`params`**: Index sets and coefficient maps derived from an instance
//! - **`milp`**: Solver-agnostic MILP arena and the `MilpSolver` contract,
//!   with a `good_lp`/`microlp` backend
//! - **`formulation`**: The deterministic base model and scenario submodel
//!   expansion
//! - **`scenarios`**: Delay-scenario generation and materialization
//!   strategies (exhaustive, none, sampling)
//! - **`solver`**: The `StochasticSolver` orchestrator and solution types
//!
//! # Time Representation
//!
//! All times are integer day numbers relative to a scheduling epoch (day 0).
//! The consumer defines what day 0 means (e.g., start of the planning year).
//!
//! # References
//!
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems"
//! - Birge & Louveaux (2011), "Introduction to Stochastic Programming"
//! - Manne (1960), "On the Job-Shop Scheduling Problem" (big-M sequencing)

pub mod formulation;
pub mod milp;
pub mod models;
pub mod params;
pub mod scenarios;
pub mod solver;
pub mod validation;
