//! Container projection: width, easing and shared custom properties.

use super::chars::CharProjection;
use crate::cascade::CascadeState;
use crate::core::Phase;
use crate::timing::CascadeTiming;
use serde::{Deserialize, Serialize};

pub const DEFAULT_CASCADE_WEIGHT: u16 = 600;

/// Host-supplied presentation options.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ContainerOptions {
    /// Width while expanded, as a CSS length; defaults to the text width
    pub expanded_width: Option<String>,
    /// Color of the glowing character
    pub glow_color: Option<String>,
    /// Font weight of the glowing character
    pub cascade_weight: Option<u16>,
}

impl ContainerOptions {
    pub fn cascade_weight(&self) -> u16 {
        self.cascade_weight.unwrap_or(DEFAULT_CASCADE_WEIGHT)
    }

    /// Inline glow style for `char`, when it glows and a color is set.
    pub fn glow_style(&self, char: &CharProjection) -> Option<GlowStyle> {
        if !char.is_glowing {
            return None;
        }
        self.glow_color.as_ref().map(|color| GlowStyle {
            color: color.clone(),
            weight: self.cascade_weight(),
        })
    }
}

/// Color and weight applied to a glowing character.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlowStyle {
    pub color: String,
    pub weight: u16,
}

/// Visual attributes of the element wrapping the characters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContainerProjection {
    pub phase: Phase,
    /// CSS `max-width`: `0` while idle
    pub max_width: String,
    pub easing_css: String,
    pub transition_ms: u64,
    pub char_step_ms: u64,
    pub char_transition_ms: u64,
    pub glow: Option<GlowStyle>,
}

impl ContainerProjection {
    /// CSS custom properties set on the container.
    pub fn css_vars(&self) -> Vec<(&'static str, String)> {
        let mut vars = vec![
            ("--char-step", format!("{}ms", self.char_step_ms)),
            ("--char-transition", format!("{}ms", self.char_transition_ms)),
        ];
        if let Some(glow) = &self.glow {
            vars.push(("--cascade-glow-color", glow.color.clone()));
            vars.push(("--cascade-weight", glow.weight.to_string()));
        }
        vars
    }
}

/// Project the container for `state`.
///
/// While expanded the width is `expanded_width` or the display text's
/// length plus two, in `ch`.
pub fn project_container(
    state: &CascadeState,
    timing: &CascadeTiming,
    options: &ContainerOptions,
) -> ContainerProjection {
    let max_width = if state.is_expanded {
        options
            .expanded_width
            .clone()
            .unwrap_or_else(|| format!("{}ch", state.display_len() + 2))
    } else {
        "0".to_string()
    };

    ContainerProjection {
        phase: state.phase,
        max_width,
        easing_css: timing.container_easing.css(),
        transition_ms: timing.container_transition_ms,
        char_step_ms: state.char_step_ms,
        char_transition_ms: timing.char_transition_ms,
        glow: options.glow_color.as_ref().map(|color| GlowStyle {
            color: color.clone(),
            weight: options.cascade_weight(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::project_chars;

    fn expanded(text: &str) -> CascadeState {
        let mut state = CascadeState::idle(text, 60);
        state.phase = Phase::Visible;
        state.is_expanded = true;
        state
    }

    #[test]
    fn idle_container_is_collapsed() {
        let projection = project_container(
            &CascadeState::idle("Hello", 60),
            &CascadeTiming::default(),
            &ContainerOptions::default(),
        );

        assert_eq!(projection.max_width, "0");
        assert_eq!(projection.phase, Phase::Idle);
    }

    #[test]
    fn expanded_width_follows_text_length() {
        let projection = project_container(
            &expanded("Copied"),
            &CascadeTiming::default(),
            &ContainerOptions::default(),
        );

        assert_eq!(projection.max_width, "8ch");
        assert_eq!(projection.easing_css, "cubic-bezier(0.22, 1, 0.36, 1)");
        assert_eq!(projection.transition_ms, 500);
    }

    #[test]
    fn expanded_width_override_wins() {
        let options = ContainerOptions {
            expanded_width: Some("12rem".to_string()),
            ..ContainerOptions::default()
        };

        let projection = project_container(&expanded("Hi"), &CascadeTiming::default(), &options);
        assert_eq!(projection.max_width, "12rem");
    }

    #[test]
    fn css_vars_include_glow_only_when_colored() {
        let plain = project_container(
            &expanded("Hi"),
            &CascadeTiming::default(),
            &ContainerOptions::default(),
        );
        assert_eq!(
            plain.css_vars(),
            vec![
                ("--char-step", "60ms".to_string()),
                ("--char-transition", "150ms".to_string()),
            ]
        );

        let options = ContainerOptions {
            glow_color: Some("#7dd3fc".to_string()),
            ..ContainerOptions::default()
        };
        let glowing = project_container(&expanded("Hi"), &CascadeTiming::default(), &options);
        let vars = glowing.css_vars();

        assert!(vars.contains(&("--cascade-glow-color", "#7dd3fc".to_string())));
        assert!(vars.contains(&("--cascade-weight", "600".to_string())));
    }

    #[test]
    fn glow_style_applies_to_glowing_char_only() {
        let mut state = expanded("Copi");
        state.phase = Phase::Glowing;
        state.glow_char_index = Some(3);
        let options = ContainerOptions {
            glow_color: Some("gold".to_string()),
            cascade_weight: Some(700),
            ..ContainerOptions::default()
        };

        let chars = project_chars(&state);
        assert_eq!(options.glow_style(&chars[0]), None);
        assert_eq!(
            options.glow_style(&chars[3]),
            Some(GlowStyle {
                color: "gold".to_string(),
                weight: 700
            })
        );
    }
}
