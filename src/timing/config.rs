//! Timing configuration for a cascade.

use crate::timing::rules::TimingRules;
use crate::timing::violations::TimingError;
use serde::{Deserialize, Serialize};
use std::fmt;

pub const DEFAULT_CHAR_STEP_MS: u64 = 60;
pub const DEFAULT_CHAR_TRANSITION_MS: u64 = 150;
pub const DEFAULT_CONFIRM_HOLD_MS: u64 = 1500;
pub const DEFAULT_CONTAINER_TRANSITION_MS: u64 = 500;

/// Easing curve for the container's width transition.
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Easing {
    /// `cubic-bezier(0.22, 1, 0.36, 1)`
    #[default]
    EaseOutExpo,
    /// `cubic-bezier(0, 0, 0.2, 1)`
    EaseOutFast,
    Linear,
    /// Control points `[x1, y1, x2, y2]`.
    CubicBezier([f32; 4]),
}

impl Easing {
    /// Control points, if the curve is a cubic bezier.
    pub fn control_points(&self) -> Option<[f32; 4]> {
        match self {
            Self::EaseOutExpo => Some([0.22, 1.0, 0.36, 1.0]),
            Self::EaseOutFast => Some([0.0, 0.0, 0.2, 1.0]),
            Self::Linear => None,
            Self::CubicBezier(points) => Some(*points),
        }
    }

    /// CSS `transition-timing-function` value.
    pub fn css(&self) -> String {
        match self.control_points() {
            Some([x1, y1, x2, y2]) => format!("cubic-bezier({x1}, {y1}, {x2}, {y2})"),
            None => "linear".to_string(),
        }
    }
}

impl fmt::Display for Easing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.css())
    }
}

/// Per-instance timing, fixed for the lifetime of a cascade.
///
/// Every field is optional in serialized form and falls back to its default.
///
/// # Example
///
/// ```rust
/// use text_cascade::timing::CascadeTiming;
///
/// let timing = CascadeTiming::from_json(r#"{ "charStepMs": 40 }"#).unwrap();
/// assert_eq!(timing.char_step_ms, 40);
/// assert_eq!(timing.confirm_hold_ms, 1500);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CascadeTiming {
    /// Stagger between consecutive characters
    pub char_step_ms: u64,
    /// Duration of a single character's own transition
    pub char_transition_ms: u64,
    /// How long the confirmed text is held before dismissal
    pub confirm_hold_ms: u64,
    pub container_easing: Easing,
    pub container_transition_ms: u64,
}

impl Default for CascadeTiming {
    fn default() -> Self {
        Self {
            char_step_ms: DEFAULT_CHAR_STEP_MS,
            char_transition_ms: DEFAULT_CHAR_TRANSITION_MS,
            confirm_hold_ms: DEFAULT_CONFIRM_HOLD_MS,
            container_easing: Easing::default(),
            container_transition_ms: DEFAULT_CONTAINER_TRANSITION_MS,
        }
    }
}

impl CascadeTiming {
    pub fn with_char_step_ms(mut self, ms: u64) -> Self {
        self.char_step_ms = ms;
        self
    }

    pub fn with_char_transition_ms(mut self, ms: u64) -> Self {
        self.char_transition_ms = ms;
        self
    }

    pub fn with_confirm_hold_ms(mut self, ms: u64) -> Self {
        self.confirm_hold_ms = ms;
        self
    }

    pub fn with_container_easing(mut self, easing: Easing) -> Self {
        self.container_easing = easing;
        self
    }

    pub fn with_container_transition_ms(mut self, ms: u64) -> Self {
        self.container_transition_ms = ms;
        self
    }

    /// Parse from JSON and validate against the standard rules.
    pub fn from_json(json: &str) -> Result<Self, TimingError> {
        let timing: CascadeTiming = serde_json::from_str(json)?;
        timing.validate()?;
        Ok(timing)
    }

    /// Validate against the standard rules, reporting every violation.
    pub fn validate(&self) -> Result<(), TimingError> {
        TimingRules::standard().check(self)
    }

    /// Time for `count` staggered characters to finish transitioning:
    /// `(count - 1) * char_step_ms + char_transition_ms`, with an empty
    /// run taking just the transition.
    pub fn cascade_duration_ms(&self, count: usize) -> u64 {
        let steps = count.saturating_sub(1) as u64;
        steps
            .saturating_mul(self.char_step_ms)
            .saturating_add(self.char_transition_ms)
    }
}
