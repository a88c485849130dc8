//! Timing configuration and its validation.
//!
//! [`CascadeTiming`] carries the per-instance durations. It is checked by
//! [`TimingRules`], which use Stillwater's `Validation` to collect every
//! violation instead of stopping at the first.
//!
//! # Example
//!
//! ```rust
//! use text_cascade::timing::{CascadeTiming, TimingError};
//!
//! let bad = CascadeTiming::default().with_char_step_ms(0);
//! match bad.validate() {
//!     Err(TimingError::Invalid(violations)) => assert_eq!(violations.len(), 1),
//!     other => panic!("unexpected: {other:?}"),
//! }
//! ```

pub mod config;
pub mod rules;
pub mod violations;

pub use config::{
    CascadeTiming, Easing, DEFAULT_CHAR_STEP_MS, DEFAULT_CHAR_TRANSITION_MS,
    DEFAULT_CONFIRM_HOLD_MS, DEFAULT_CONTAINER_TRANSITION_MS,
};
pub use rules::{TimingCheck, TimingCheckResult, TimingRules};
pub use violations::{TimingError, TimingViolation};
