//! Cascade phases.
//!
//! A cascade is always in exactly one phase. Phases are plain values with
//! pure inspection methods; all mutation happens in the cascade machine.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Discrete state of the cascade state machine.
///
/// # Example
///
/// ```rust
/// use text_cascade::core::Phase;
///
/// assert!(!Phase::Idle.is_expanded());
/// assert!(Phase::Entering.is_expanded());
/// assert_eq!(Phase::Glowing.name(), "glowing");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    /// Collapsed; nothing revealed.
    #[default]
    Idle,
    /// Characters are cascading in.
    Entering,
    /// Fully revealed and at rest.
    Visible,
    /// Glow-morph frames are advancing toward the confirmed text.
    Glowing,
    /// Holding the confirmed text before dismissal.
    Confirmed,
    /// Characters are cascading out, most recent first.
    Exiting,
}

impl Phase {
    /// Every phase, in lifecycle order.
    pub const ALL: [Phase; 6] = [
        Phase::Idle,
        Phase::Entering,
        Phase::Visible,
        Phase::Glowing,
        Phase::Confirmed,
        Phase::Exiting,
    ];

    /// Lowercase name, matching the serialized form.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Entering => "entering",
            Self::Visible => "visible",
            Self::Glowing => "glowing",
            Self::Confirmed => "confirmed",
            Self::Exiting => "exiting",
        }
    }

    /// True in every phase except [`Phase::Idle`].
    pub fn is_expanded(&self) -> bool {
        !matches!(self, Self::Idle)
    }

    /// True while the glow-morph confirmation owns the text.
    pub fn is_confirming(&self) -> bool {
        matches!(self, Self::Glowing | Self::Confirmed)
    }

    /// True in phases where every character of the display text is shown.
    pub fn shows_all_chars(&self) -> bool {
        matches!(
            self,
            Self::Entering | Self::Visible | Self::Glowing | Self::Confirmed
        )
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
