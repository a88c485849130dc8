//! Timing rules checked with `Validation`.
//!
//! Every rule runs; all failures are accumulated so a bad configuration is
//! reported in one pass instead of one error at a time.

use crate::timing::config::{CascadeTiming, Easing};
use crate::timing::violations::{TimingError, TimingViolation};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Outcome of a single timing check.
pub type TimingCheckResult = Validation<(), NonEmptyVec<TimingViolation>>;

/// Boxed timing check.
pub type TimingCheck = Box<dyn Fn(&CascadeTiming) -> TimingCheckResult + Send + Sync>;

/// A set of checks applied to a [`CascadeTiming`].
///
/// # Example
///
/// ```rust
/// use text_cascade::timing::{CascadeTiming, TimingRules};
///
/// let rules = TimingRules::standard()
///     .require_pred(|t| t.confirm_hold_ms <= 5_000, "hold too long".to_string());
///
/// assert!(rules.check(&CascadeTiming::default()).is_ok());
/// assert!(rules
///     .check(&CascadeTiming::default().with_confirm_hold_ms(10_000))
///     .is_err());
/// ```
pub struct TimingRules {
    checks: Vec<TimingCheck>,
}

impl TimingRules {
    /// No checks at all.
    pub fn empty() -> Self {
        Self { checks: Vec::new() }
    }

    /// The rules every cascade must satisfy: a non-zero character step and
    /// a well-formed easing curve.
    pub fn standard() -> Self {
        Self::empty()
            .require(check_char_step)
            .require(check_easing)
    }

    /// Add a custom validation check.
    pub fn require<F>(mut self, check: F) -> Self
    where
        F: Fn(&CascadeTiming) -> TimingCheckResult + Send + Sync + 'static,
    {
        self.checks.push(Box::new(check));
        self
    }

    /// Add a predicate check reported with `error_msg` when it fails.
    pub fn require_pred<F>(mut self, predicate: F, error_msg: String) -> Self
    where
        F: Fn(&CascadeTiming) -> bool + Send + Sync + 'static,
    {
        let check = move |timing: &CascadeTiming| {
            if predicate(timing) {
                Validation::success(())
            } else {
                Validation::fail(TimingViolation::CustomCheckFailed {
                    message: error_msg.clone(),
                })
            }
        };
        self.checks.push(Box::new(check));
        self
    }

    /// Run every check, accumulating all violations.
    pub fn enforce(&self, timing: &CascadeTiming) -> TimingCheckResult {
        let checks: Vec<TimingCheckResult> = self.checks.iter().map(|c| c(timing)).collect();
        Validation::all_vec(checks).map(|_| ())
    }

    /// [`enforce`](Self::enforce), converted into a `Result`.
    pub fn check(&self, timing: &CascadeTiming) -> Result<(), TimingError> {
        match self.enforce(timing) {
            Validation::Success(_) => Ok(()),
            Validation::Failure(errors) => Err(TimingError::Invalid(
                errors.iter().cloned().collect(),
            )),
        }
    }

    pub fn len(&self) -> usize {
        self.checks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.checks.is_empty()
    }
}

impl Default for TimingRules {
    fn default() -> Self {
        Self::standard()
    }
}

fn check_char_step(timing: &CascadeTiming) -> TimingCheckResult {
    if timing.char_step_ms == 0 {
        Validation::fail(TimingViolation::ZeroCharStep)
    } else {
        Validation::success(())
    }
}

fn check_easing(timing: &CascadeTiming) -> TimingCheckResult {
    let Easing::CubicBezier(points) = timing.container_easing else {
        return Validation::success(());
    };
    let [x1, _, x2, _] = points;
    let finite = points.iter().all(|p| p.is_finite());
    if finite && (0.0..=1.0).contains(&x1) && (0.0..=1.0).contains(&x2) {
        Validation::success(())
    } else {
        Validation::fail(TimingViolation::InvalidCubicBezier { points })
    }
}
