//! Builder for constructing cascades.

use crate::builder::error::BuildError;
use crate::cascade::{CascadeParts, CascadeState, GlowSource, LifecycleEvent, Observers, TextCascade};
use crate::core::DEFAULT_HISTORY_CAPACITY;
use crate::glow::GlowTransition;
use crate::motion::MotionPreference;
use crate::scheduler::Scheduler;
use crate::timing::{CascadeTiming, TimingRules};
use std::sync::Arc;

/// Builder for [`TextCascade`] with a fluent API.
///
/// # Example
///
/// ```rust
/// use text_cascade::builder::CascadeBuilder;
/// use text_cascade::scheduler::ManualScheduler;
/// use text_cascade::timing::CascadeTiming;
///
/// let cascade = CascadeBuilder::new(ManualScheduler::new())
///     .text("Copy")
///     .click_text("Copied")
///     .timing(CascadeTiming::default().with_char_step_ms(40))
///     .build()
///     .unwrap();
///
/// assert_eq!(cascade.glow_transition().unwrap().confirmed_text, "Copied");
/// ```
pub struct CascadeBuilder<S: Scheduler> {
    scheduler: S,
    text: Option<String>,
    click_text: Option<String>,
    glow_transition: Option<GlowTransition>,
    timing: CascadeTiming,
    rules: TimingRules,
    motion: Box<dyn MotionPreference>,
    history_capacity: usize,
    observers: Observers,
}

impl<S: Scheduler> CascadeBuilder<S> {
    /// Create a builder driving its timers through `scheduler`.
    pub fn new(scheduler: S) -> Self {
        Self {
            scheduler,
            text: None,
            click_text: None,
            glow_transition: None,
            timing: CascadeTiming::default(),
            rules: TimingRules::standard(),
            motion: Box::new(false),
            history_capacity: DEFAULT_HISTORY_CAPACITY,
            observers: Observers::default(),
        }
    }

    /// Set the text revealed on hover (required).
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Morph to `click_text` on confirmation, with a generated transition.
    pub fn click_text(mut self, click_text: impl Into<String>) -> Self {
        self.click_text = Some(click_text.into());
        self
    }

    /// Use a hand-written glow transition instead of a generated one.
    pub fn glow_transition(mut self, transition: GlowTransition) -> Self {
        self.glow_transition = Some(transition);
        self
    }

    pub fn timing(mut self, timing: CascadeTiming) -> Self {
        self.timing = timing;
        self
    }

    /// Replace the rules the timing is validated against.
    pub fn timing_rules(mut self, rules: TimingRules) -> Self {
        self.rules = rules;
        self
    }

    /// Set the reduced-motion source (defaults to full motion).
    pub fn reduced_motion<M>(mut self, motion: M) -> Self
    where
        M: MotionPreference + 'static,
    {
        self.motion = Box::new(motion);
        self
    }

    /// Number of phase transitions retained in the history.
    pub fn history_capacity(mut self, capacity: usize) -> Self {
        self.history_capacity = capacity;
        self
    }

    /// Called with every published snapshot.
    pub fn on_change<F>(mut self, listener: F) -> Self
    where
        F: FnMut(&CascadeState) + 'static,
    {
        self.observers.on_change.push(Box::new(listener));
        self
    }

    /// Called when the cascade leaves idle.
    pub fn on_enter<F>(mut self, hook: F) -> Self
    where
        F: FnMut() + 'static,
    {
        self.observers
            .on_lifecycle
            .push(Observers::only(LifecycleEvent::Entered, hook));
        self
    }

    /// Called when the cascade returns to idle.
    pub fn on_exit<F>(mut self, hook: F) -> Self
    where
        F: FnMut() + 'static,
    {
        self.observers
            .on_lifecycle
            .push(Observers::only(LifecycleEvent::Exited, hook));
        self
    }

    /// Called when the cascade reaches the confirmed phase.
    pub fn on_confirm<F>(mut self, hook: F) -> Self
    where
        F: FnMut() + 'static,
    {
        self.observers
            .on_lifecycle
            .push(Observers::only(LifecycleEvent::Confirmed, hook));
        self
    }

    /// Called for clicks dispatched through [`TextCascade::dispatch`].
    pub fn on_click<F>(mut self, handler: F) -> Self
    where
        F: FnMut() + 'static,
    {
        self.observers.on_click.push(Box::new(handler));
        self
    }

    /// Build the cascade.
    /// Returns an error if the text is missing, both glow sources were
    /// given, or the timing breaks a rule.
    pub fn build(self) -> Result<TextCascade<S>, BuildError> {
        let text = self.text.ok_or(BuildError::MissingText)?;

        let glow_source = match (self.click_text, self.glow_transition) {
            (Some(_), Some(_)) => return Err(BuildError::ConflictingGlowSources),
            (Some(click), None) => GlowSource::ClickText(click),
            (None, Some(transition)) => GlowSource::Fixed(Arc::new(transition)),
            (None, None) => GlowSource::None,
        };

        self.rules.check(&self.timing)?;

        Ok(TextCascade::from_parts(CascadeParts {
            text,
            glow_source,
            timing: self.timing,
            scheduler: self.scheduler,
            motion: self.motion,
            history_capacity: self.history_capacity,
            observers: self.observers,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::glow::GlowFrame;
    use crate::scheduler::ManualScheduler;
    use crate::timing::TimingError;

    #[test]
    fn builder_requires_text() {
        let result = CascadeBuilder::new(ManualScheduler::new()).build();
        assert!(matches!(result, Err(BuildError::MissingText)));
    }

    #[test]
    fn builder_rejects_two_glow_sources() {
        let result = CascadeBuilder::new(ManualScheduler::new())
            .text("Copy")
            .click_text("Copied")
            .glow_transition(GlowTransition {
                frames: vec![GlowFrame::new("Done", 0)],
                confirmed_text: "Done".to_string(),
            })
            .build();

        assert!(matches!(result, Err(BuildError::ConflictingGlowSources)));
    }

    #[test]
    fn builder_validates_timing() {
        let result = CascadeBuilder::new(ManualScheduler::new())
            .text("Copy")
            .timing(CascadeTiming::default().with_char_step_ms(0))
            .build();

        match result {
            Err(BuildError::InvalidTiming(TimingError::Invalid(violations))) => {
                assert_eq!(violations.len(), 1)
            }
            other => panic!("Expected invalid timing, got {other:?}"),
        }
    }

    #[test]
    fn custom_rules_replace_standard_ones() {
        let result = CascadeBuilder::new(ManualScheduler::new())
            .text("Copy")
            .timing_rules(
                TimingRules::standard()
                    .require_pred(|t| t.char_step_ms <= 100, "step too slow".to_string()),
            )
            .timing(CascadeTiming::default().with_char_step_ms(250))
            .build();

        assert!(matches!(result, Err(BuildError::InvalidTiming(_))));
    }

    #[test]
    fn fluent_api_builds_cascade() {
        let cascade = CascadeBuilder::new(ManualScheduler::new())
            .text("Copy")
            .click_text("Copied")
            .build()
            .unwrap();

        assert_eq!(cascade.text(), "Copy");
        assert_eq!(cascade.glow_transition().map(|g| g.len()), Some(6));
        assert_eq!(cascade.state().display_text, "Copy");
    }

    #[test]
    fn fixed_glow_transition_is_used_verbatim() {
        let transition = GlowTransition {
            frames: vec![GlowFrame::new("Ok", 1)],
            confirmed_text: "Ok".to_string(),
        };

        let cascade = CascadeBuilder::new(ManualScheduler::new())
            .text("Send")
            .glow_transition(transition.clone())
            .build()
            .unwrap();

        assert_eq!(cascade.glow_transition(), Some(&transition));
    }

    #[test]
    fn fixed_glow_index_past_the_text_glows_last_char() {
        let mut cascade = CascadeBuilder::new(ManualScheduler::new())
            .text("Send")
            .glow_transition(GlowTransition {
                frames: vec![GlowFrame::new("Ok", 7)],
                confirmed_text: "Ok".to_string(),
            })
            .build()
            .unwrap();

        cascade.enter();
        cascade.advance(1_000);
        cascade.confirm();

        let state = cascade.state();
        assert_eq!(state.display_text, "Ok");
        assert_eq!(state.glow_char_index, Some(1));
        let glowing = crate::render::project_chars(state)
            .iter()
            .filter(|c| c.is_glowing)
            .count();
        assert_eq!(glowing, 1);
    }
}
