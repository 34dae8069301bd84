//! Input validation for scheduling instances.
//!
//! Checks structural integrity of an `Instance` before formulation.
//! Detects:
//! - Inverted planning horizon (end before start)
//! - Negative durations
//! - Delay probabilities outside [0, 1]
//! - Capability references missing from the instance universe
//! - Duplicate task/machine names
//! - Tasks no machine can perform (would surface as MILP infeasibility)
//!
//! The solver never calls this implicitly: the formulation layer accepts
//! malformed input and leaves the outcome solver-dependent. Callers that
//! want early diagnostics run `validate` themselves.

use crate::models::Instance;
use std::collections::HashSet;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Horizon end day precedes its start day.
    InvertedHorizon,
    /// A base or delayed duration is negative.
    NegativeDuration,
    /// A delay probability lies outside [0, 1].
    InvalidProbability,
    /// A task or machine references a capability not in the universe.
    DanglingCapability,
    /// Two tasks or two machines share a name.
    DuplicateName,
    /// No machine possesses the capabilities a task requires.
    UnperformableTask,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates an instance.
///
/// Returns all detected errors rather than stopping at the first.
pub fn validate(instance: &Instance) -> ValidationResult {
    let mut errors = Vec::new();

    check_horizon(instance, &mut errors);
    check_tasks(instance, &mut errors);
    check_machines(instance, &mut errors);
    check_performability(instance, &mut errors);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn check_horizon(instance: &Instance, errors: &mut Vec<ValidationError>) {
    if instance.horizon.end_day < instance.horizon.start_day {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvertedHorizon,
            format!(
                "horizon ends on day {} before it starts on day {}",
                instance.horizon.end_day, instance.horizon.start_day
            ),
        ));
    }
}

fn check_tasks(instance: &Instance, errors: &mut Vec<ValidationError>) {
    let universe: HashSet<_> = instance.capabilities.iter().collect();
    let mut names = HashSet::new();

    for task in &instance.tasks {
        if !names.insert(task.name.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateName,
                format!("duplicate task name: {}", task.name),
            ));
        }
        if task.base_duration < 0 || task.delayed_duration < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NegativeDuration,
                format!(
                    "task {} has negative duration ({} base, {} delayed)",
                    task.name, task.base_duration, task.delayed_duration
                ),
            ));
        }
        if !(0.0..=1.0).contains(&task.delay_probability) {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidProbability,
                format!(
                    "task {} has delay probability {} outside [0, 1]",
                    task.name, task.delay_probability
                ),
            ));
        }
        for cap in &task.required_capabilities {
            if !universe.contains(cap) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::DanglingCapability,
                    format!(
                        "task {} requires capability {} missing from the universe",
                        task.name, cap.name
                    ),
                ));
            }
        }
    }
}

fn check_machines(instance: &Instance, errors: &mut Vec<ValidationError>) {
    let universe: HashSet<_> = instance.capabilities.iter().collect();
    let mut names = HashSet::new();

    for machine in &instance.machines {
        if !names.insert(machine.name.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateName,
                format!("duplicate machine name: {}", machine.name),
            ));
        }
        for cap in &machine.capabilities {
            if !universe.contains(cap) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::DanglingCapability,
                    format!(
                        "machine {} possesses capability {} missing from the universe",
                        machine.name, cap.name
                    ),
                ));
            }
        }
    }
}

fn check_performability(instance: &Instance, errors: &mut Vec<ValidationError>) {
    for task in &instance.tasks {
        if !instance.machines.iter().any(|m| m.can_perform(task)) {
            errors.push(ValidationError::new(
                ValidationErrorKind::UnperformableTask,
                format!("no machine can perform task {}", task.name),
            ));
        }
    }
}
