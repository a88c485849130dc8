//! Per-character projection.

use crate::cascade::CascadeState;
use crate::core::Phase;
use serde::{Deserialize, Serialize};

/// Visual attributes of one character of the display text.
///
/// Delays are offsets for the host's own transition system; nothing here
/// schedules anything.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharProjection {
    pub index: usize,
    pub ch: char,
    /// Whether the character is in its shown state
    pub is_active: bool,
    pub is_glowing: bool,
    pub enter_delay_ms: u64,
    pub exit_delay_ms: u64,
}

impl CharProjection {
    /// CSS custom properties for this character.
    pub fn css_vars(&self) -> Vec<(&'static str, String)> {
        vec![
            ("--char-delay", format!("{}ms", self.enter_delay_ms)),
            ("--exit-delay", format!("{}ms", self.exit_delay_ms)),
        ]
    }
}

/// Whether character `index` is shown in `state`.
pub fn is_active(state: &CascadeState, index: usize) -> bool {
    match state.phase {
        Phase::Exiting => index < state.reveal_count,
        phase => phase.shows_all_chars(),
    }
}

/// Exit delay of character `index`: the most recently revealed character
/// leaves first.
pub fn exit_delay_ms(state: &CascadeState, index: usize) -> u64 {
    if state.reveal_count == 0 {
        return 0;
    }
    let last = state.reveal_count - 1;
    (last.saturating_sub(index) as u64).saturating_mul(state.char_step_ms)
}

/// Project every character of `state.display_text`.
///
/// # Example
///
/// ```rust
/// use text_cascade::cascade::CascadeState;
/// use text_cascade::core::Phase;
/// use text_cascade::render::project_chars;
///
/// let mut state = CascadeState::idle("abc", 60);
/// state.phase = Phase::Exiting;
/// state.reveal_count = 2;
///
/// let chars = project_chars(&state);
/// let active: Vec<bool> = chars.iter().map(|c| c.is_active).collect();
/// let exit: Vec<u64> = chars.iter().map(|c| c.exit_delay_ms).collect();
///
/// assert_eq!(active, vec![true, true, false]);
/// assert_eq!(exit, vec![60, 0, 0]);
/// ```
pub fn project_chars(state: &CascadeState) -> Vec<CharProjection> {
    state
        .display_text
        .chars()
        .enumerate()
        .map(|(index, ch)| CharProjection {
            index,
            ch,
            is_active: is_active(state, index),
            is_glowing: state.glow_char_index == Some(index),
            enter_delay_ms: (index as u64).saturating_mul(state.char_step_ms),
            exit_delay_ms: exit_delay_ms(state, index),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(phase: Phase, text: &str, reveal_count: usize) -> CascadeState {
        CascadeState {
            phase,
            display_text: text.to_string(),
            reveal_count,
            glow_char_index: None,
            char_step_ms: 60,
            is_expanded: phase.is_expanded(),
            is_confirmed: false,
        }
    }

    #[test]
    fn idle_characters_are_inactive() {
        let chars = project_chars(&state(Phase::Idle, "Hello", 0));
        assert!(chars.iter().all(|c| !c.is_active));
    }

    #[test]
    fn shown_phases_activate_every_character() {
        for phase in [Phase::Entering, Phase::Visible, Phase::Glowing, Phase::Confirmed] {
            let chars = project_chars(&state(phase, "Hello", 0));
            assert!(chars.iter().all(|c| c.is_active), "{phase}");
        }
    }

    #[test]
    fn exiting_activates_only_revealed_prefix() {
        let chars = project_chars(&state(Phase::Exiting, "Hello", 1));
        let active: Vec<bool> = chars.iter().map(|c| c.is_active).collect();
        assert_eq!(active, vec![true, false, false, false, false]);
    }

    #[test]
    fn enter_delays_stagger_left_to_right() {
        let chars = project_chars(&state(Phase::Entering, "Hey", 0));
        let delays: Vec<u64> = chars.iter().map(|c| c.enter_delay_ms).collect();
        assert_eq!(delays, vec![0, 60, 120]);
    }

    #[test]
    fn exit_delays_reverse_enter_order() {
        let chars = project_chars(&state(Phase::Exiting, "Hello", 5));
        let delays: Vec<u64> = chars.iter().map(|c| c.exit_delay_ms).collect();
        assert_eq!(delays, vec![240, 180, 120, 60, 0]);
    }

    #[test]
    fn exit_delay_never_negative_beyond_reveal_count() {
        let chars = project_chars(&state(Phase::Exiting, "Hello", 2));
        let delays: Vec<u64> = chars.iter().map(|c| c.exit_delay_ms).collect();
        assert_eq!(delays, vec![60, 0, 0, 0, 0]);
    }

    #[test]
    fn zero_reveal_count_has_zero_exit_delay() {
        let chars = project_chars(&state(Phase::Visible, "Hi", 0));
        assert!(chars.iter().all(|c| c.exit_delay_ms == 0));
    }

    #[test]
    fn only_glow_index_glows() {
        let mut glowing = state(Phase::Glowing, "Copi", 4);
        glowing.glow_char_index = Some(3);

        let chars = project_chars(&glowing);
        let glows: Vec<bool> = chars.iter().map(|c| c.is_glowing).collect();
        assert_eq!(glows, vec![false, false, false, true]);
    }

    #[test]
    fn css_vars_use_milliseconds() {
        let chars = project_chars(&state(Phase::Exiting, "ab", 2));
        assert_eq!(
            chars[0].css_vars(),
            vec![
                ("--char-delay", "0ms".to_string()),
                ("--exit-delay", "60ms".to_string()),
            ]
        );
    }
}
