//! Observable cascade snapshot.

use crate::core::Phase;
use crate::glow::{GlowFrame, GlowTransition};
use serde::{Deserialize, Serialize};

/// Immutable snapshot of a cascade, published after every change.
///
/// `display_text`, `glow_char_index`, `is_expanded` and `is_confirmed` are
/// derived from the phase and the machine's internal refs; none of them
/// can be set directly.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CascadeState {
    pub phase: Phase,
    pub display_text: String,
    /// Characters considered shown; drives exit delays
    pub reveal_count: usize,
    /// Highlighted character while glowing, `None` otherwise
    pub glow_char_index: Option<usize>,
    pub char_step_ms: u64,
    pub is_expanded: bool,
    pub is_confirmed: bool,
}

impl CascadeState {
    /// The snapshot of a freshly mounted cascade.
    pub fn idle(text: &str, char_step_ms: u64) -> Self {
        Self {
            phase: Phase::Idle,
            display_text: text.to_string(),
            reveal_count: 0,
            glow_char_index: None,
            char_step_ms,
            is_expanded: false,
            is_confirmed: false,
        }
    }

    /// Number of characters in `display_text`.
    pub fn display_len(&self) -> usize {
        self.display_text.chars().count()
    }
}

/// Internal refs a snapshot is derived from.
#[derive(Clone, Copy, Debug)]
pub(crate) struct StateRefs<'a> {
    pub phase: Phase,
    pub text: &'a str,
    pub glow: Option<&'a GlowTransition>,
    pub glow_frame: usize,
    pub exit_text: &'a str,
    pub reveal_count: usize,
    pub char_step_ms: u64,
}

impl StateRefs<'_> {
    pub fn derive(&self) -> CascadeState {
        let frame = match self.phase {
            Phase::Glowing => self.glow.and_then(|g| g.frame(self.glow_frame)),
            _ => None,
        };

        let display_text = match (frame, self.phase, self.glow) {
            (Some(frame), _, _) => frame.text.as_str(),
            (None, Phase::Confirmed, Some(glow)) => glow.confirmed_text.as_str(),
            (None, Phase::Exiting, _) => self.exit_text,
            _ => self.text,
        };

        let exiting_confirmed = self.phase == Phase::Exiting
            && self
                .glow
                .is_some_and(|g| g.confirmed_text == self.exit_text);

        CascadeState {
            phase: self.phase,
            display_text: display_text.to_string(),
            reveal_count: self.reveal_count,
            glow_char_index: frame.map(clamped_glow_index),
            char_step_ms: self.char_step_ms,
            is_expanded: self.phase.is_expanded(),
            is_confirmed: self.phase.is_confirming() || exiting_confirmed,
        }
    }
}

/// A frame's glow index, clamped to its last character. Host-supplied
/// transitions are not checked when built.
fn clamped_glow_index(frame: &GlowFrame) -> usize {
    let last = frame.text.chars().count().saturating_sub(1);
    frame.glow_index.min(last)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::glow::generate_glow_transition;

    fn refs<'a>(phase: Phase, glow: Option<&'a GlowTransition>, exit_text: &'a str) -> StateRefs<'a> {
        StateRefs {
            phase,
            text: "Copy",
            glow,
            glow_frame: 3,
            exit_text,
            reveal_count: 4,
            char_step_ms: 60,
        }
    }

    #[test]
    fn idle_snapshot_shows_base_text() {
        let state = CascadeState::idle("Hello", 60);

        assert_eq!(state.display_text, "Hello");
        assert_eq!(state.reveal_count, 0);
        assert!(!state.is_expanded);
        assert_eq!(state.glow_char_index, None);
    }

    #[test]
    fn glowing_uses_current_frame() {
        let glow = generate_glow_transition("Copy", "Copied");
        let state = refs(Phase::Glowing, Some(&glow), "Copy").derive();

        assert_eq!(state.display_text, "Copi");
        assert_eq!(state.glow_char_index, Some(3));
        assert!(state.is_confirmed);
    }

    #[test]
    fn confirmed_shows_confirmed_text_without_glow_index() {
        let glow = generate_glow_transition("Copy", "Copied");
        let state = refs(Phase::Confirmed, Some(&glow), "Copy").derive();

        assert_eq!(state.display_text, "Copied");
        assert_eq!(state.glow_char_index, None);
        assert!(state.is_confirmed);
    }

    #[test]
    fn exiting_shows_captured_text() {
        let glow = generate_glow_transition("Copy", "Copied");

        let after_confirm = refs(Phase::Exiting, Some(&glow), "Copied").derive();
        assert_eq!(after_confirm.display_text, "Copied");
        assert!(after_confirm.is_confirmed);

        let plain_exit = refs(Phase::Exiting, Some(&glow), "Copy").derive();
        assert_eq!(plain_exit.display_text, "Copy");
        assert!(!plain_exit.is_confirmed);
    }

    #[test]
    fn glow_frame_out_of_range_falls_back_to_base_text() {
        let glow = generate_glow_transition("", "");
        let state = refs(Phase::Glowing, Some(&glow), "").derive();

        assert_eq!(state.display_text, "Copy");
        assert_eq!(state.glow_char_index, None);
    }

    #[test]
    fn out_of_range_glow_index_is_clamped() {
        let glow = GlowTransition {
            frames: vec![GlowFrame::new("Ok", 7), GlowFrame::new("", 3)],
            confirmed_text: "Ok".to_string(),
        };
        let mut state_refs = refs(Phase::Glowing, Some(&glow), "Copy");

        state_refs.glow_frame = 0;
        assert_eq!(state_refs.derive().glow_char_index, Some(1));

        state_refs.glow_frame = 1;
        assert_eq!(state_refs.derive().glow_char_index, Some(0));
    }

    #[test]
    fn visible_without_glow() {
        let state = refs(Phase::Visible, None, "").derive();

        assert_eq!(state.display_text, "Copy");
        assert!(state.is_expanded);
        assert!(!state.is_confirmed);
    }

    #[test]
    fn snapshot_serializes_camel_case() {
        let json = serde_json::to_value(CascadeState::idle("Hi", 60)).unwrap();

        assert_eq!(json["phase"], "idle");
        assert_eq!(json["displayText"], "Hi");
        assert_eq!(json["glowCharIndex"], serde_json::Value::Null);
        assert_eq!(json["isExpanded"], false);
    }
}
