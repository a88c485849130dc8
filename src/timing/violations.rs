//! Timing violations and configuration errors.

use thiserror::Error;

/// A single rule broken by a timing configuration.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum TimingViolation {
    #[error("charStepMs must be greater than zero")]
    ZeroCharStep,

    #[error("cubic-bezier x coordinates must lie in [0, 1] and all points must be finite (got {points:?})")]
    InvalidCubicBezier { points: [f32; 4] },

    #[error("Custom timing check failed: {message}")]
    CustomCheckFailed { message: String },
}

/// Errors produced while loading or validating timing configuration.
#[derive(Debug, Error)]
pub enum TimingError {
    #[error("Failed to parse timing configuration: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid timing configuration ({} violation(s)): {}", .0.len(), join(.0))]
    Invalid(Vec<TimingViolation>),
}

impl TimingError {
    /// Violations carried by an `Invalid` error; empty otherwise.
    pub fn violations(&self) -> &[TimingViolation] {
        match self {
            Self::Invalid(violations) => violations,
            Self::Parse(_) => &[],
        }
    }
}

fn join(violations: &[TimingViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_error_lists_every_violation() {
        let error = TimingError::Invalid(vec![
            TimingViolation::ZeroCharStep,
            TimingViolation::CustomCheckFailed {
                message: "too slow".to_string(),
            },
        ]);

        let message = error.to_string();
        assert!(message.contains("2 violation(s)"));
        assert!(message.contains("charStepMs"));
        assert!(message.contains("too slow"));
        assert_eq!(error.violations().len(), 2);
    }
}
