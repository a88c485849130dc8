//! Guard predicates for cascade operations.
//!
//! Each public operation of the cascade is gated by a pure predicate over
//! the current phase. A failing guard makes the operation a silent no-op.

use super::phase::Phase;

/// Pure predicate that decides whether an operation may run in a phase.
///
/// # Example
///
/// ```rust
/// use text_cascade::core::{Guard, Phase};
///
/// let only_idle = Guard::new("enter", |p: Phase| p == Phase::Idle);
///
/// assert!(only_idle.check(Phase::Idle));
/// assert!(!only_idle.check(Phase::Visible));
/// ```
pub struct Guard {
    operation: &'static str,
    predicate: Box<dyn Fn(Phase) -> bool + Send + Sync>,
}

impl Guard {
    /// Create a guard for `operation` from a pure predicate.
    pub fn new<F>(operation: &'static str, predicate: F) -> Self
    where
        F: Fn(Phase) -> bool + Send + Sync + 'static,
    {
        Guard {
            operation,
            predicate: Box::new(predicate),
        }
    }

    /// Name of the guarded operation, for diagnostics.
    pub fn operation(&self) -> &'static str {
        self.operation
    }

    /// Check if the guard admits the operation from this phase.
    pub fn check(&self, phase: Phase) -> bool {
        (self.predicate)(phase)
    }
}

impl std::fmt::Debug for Guard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Guard")
            .field("operation", &self.operation)
            .finish_non_exhaustive()
    }
}

/// The guards of the three public cascade operations.
#[derive(Debug)]
pub struct OperationGuards {
    pub enter: Guard,
    pub exit: Guard,
    pub confirm: Guard,
}

impl OperationGuards {
    /// Guards with the standard cascade rules:
    /// `enter` only from idle, `exit` only while entering or visible,
    /// `confirm` from anywhere but an in-flight confirmation.
    pub fn standard() -> Self {
        Self {
            enter: Guard::new("enter", |p| p == Phase::Idle),
            exit: Guard::new("exit", |p| matches!(p, Phase::Entering | Phase::Visible)),
            confirm: Guard::new("confirm", |p| !p.is_confirming()),
        }
    }
}

impl Default for OperationGuards {
    fn default() -> Self {
        Self::standard()
    }
}
