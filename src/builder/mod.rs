//! Builder API for ergonomic cascade construction.
//!
//! [`CascadeBuilder`] validates text, glow source and timing before handing
//! out a [`TextCascade`]. The free functions cover the two common shapes
//! with default timing, which needs no validation.

pub mod cascade;
pub mod error;

pub use cascade::CascadeBuilder;
pub use error::BuildError;

use crate::cascade::{CascadeParts, GlowSource, Observers, TextCascade};
use crate::core::DEFAULT_HISTORY_CAPACITY;
use crate::scheduler::Scheduler;
use crate::timing::CascadeTiming;

/// A hover-only cascade with default timing.
///
/// # Example
///
/// ```
/// use text_cascade::builder::hover_cascade;
/// use text_cascade::scheduler::ManualScheduler;
///
/// let cascade = hover_cascade("About", ManualScheduler::new());
/// assert!(cascade.glow_transition().is_none());
/// ```
pub fn hover_cascade<S: Scheduler>(text: impl Into<String>, scheduler: S) -> TextCascade<S> {
    TextCascade::new(text, scheduler)
}

/// A cascade that morphs `hover_text` into `click_text` on confirmation,
/// with default timing and full motion.
///
/// # Example
///
/// ```
/// use text_cascade::builder::confirming_cascade;
/// use text_cascade::scheduler::ManualScheduler;
///
/// let cascade = confirming_cascade("Copy", "Copied", ManualScheduler::new());
/// assert_eq!(cascade.glow_transition().unwrap().len(), 6);
/// ```
pub fn confirming_cascade<S: Scheduler>(
    hover_text: impl Into<String>,
    click_text: impl Into<String>,
    scheduler: S,
) -> TextCascade<S> {
    TextCascade::from_parts(CascadeParts {
        text: hover_text.into(),
        glow_source: GlowSource::ClickText(click_text.into()),
        timing: CascadeTiming::default(),
        scheduler,
        motion: Box::new(false),
        history_capacity: DEFAULT_HISTORY_CAPACITY,
        observers: Observers::default(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Phase;
    use crate::scheduler::ManualScheduler;

    #[test]
    fn hover_cascade_cannot_confirm() {
        let mut cascade = hover_cascade("About", ManualScheduler::new());
        cascade.enter();
        cascade.advance(1_000);
        cascade.confirm();

        assert_eq!(cascade.phase(), Phase::Visible);
    }

    #[test]
    fn confirming_cascade_glows_on_confirm() {
        let mut cascade = confirming_cascade("Copy", "Copied", ManualScheduler::new());
        cascade.enter();
        cascade.advance(1_000);
        cascade.confirm();

        assert_eq!(cascade.phase(), Phase::Glowing);
    }
}
