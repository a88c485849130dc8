//! Glow-morph frame generation.

use serde::{Deserialize, Serialize};

/// A single step of a glow-morph animation.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GlowFrame {
    /// Full string displayed at this step
    pub text: String,
    /// Character position to highlight, always within `text` when it is non-empty
    pub glow_index: usize,
}

impl GlowFrame {
    pub fn new(text: impl Into<String>, glow_index: usize) -> Self {
        Self {
            text: text.into(),
            glow_index,
        }
    }
}

/// Ordered frames that rewrite one string into another.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GlowTransition {
    pub frames: Vec<GlowFrame>,
    /// The target of the morph
    pub confirmed_text: String,
}

impl GlowTransition {
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn frame(&self, index: usize) -> Option<&GlowFrame> {
        self.frames.get(index)
    }

    /// Number of characters in the confirmed text.
    pub fn confirmed_len(&self) -> usize {
        self.confirmed_text.chars().count()
    }
}

/// Generate a left-to-right glow-morph from `hover_text` to `click_text`.
///
/// Frame `i` shows the first `i + 1` characters of `click_text` followed by
/// whatever of `hover_text` lies after position `i`. The glow sits on `i`,
/// clamped to the last character when the frame is shorter. There are
/// always `max(len(hover_text), len(click_text))` frames. Lengths count
/// `char`s.
///
/// # Example
///
/// ```rust
/// use text_cascade::glow::{generate_glow_transition, GlowFrame};
///
/// let transition = generate_glow_transition("Save", "Done");
/// assert_eq!(
///     transition.frames,
///     vec![
///         GlowFrame::new("Dave", 0),
///         GlowFrame::new("Dove", 1),
///         GlowFrame::new("Done", 2),
///         GlowFrame::new("Done", 3),
///     ]
/// );
/// assert_eq!(transition.confirmed_text, "Done");
/// ```
pub fn generate_glow_transition(hover_text: &str, click_text: &str) -> GlowTransition {
    let hover: Vec<char> = hover_text.chars().collect();
    let click: Vec<char> = click_text.chars().collect();
    let max_len = hover.len().max(click.len());

    let frames = (0..max_len)
        .map(|i| {
            let morphed = &click[..(i + 1).min(click.len())];
            let remaining = &hover[(i + 1).min(hover.len())..];
            let text: String = morphed.iter().chain(remaining).collect();
            // An empty frame (hover "x", click "") has no valid position; 0 stands in.
            let last = text.chars().count().saturating_sub(1);
            GlowFrame {
                text,
                glow_index: i.min(last),
            }
        })
        .collect();

    GlowTransition {
        frames,
        confirmed_text: click_text.to_string(),
    }
}
