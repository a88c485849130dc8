//! Build errors for cascades.

use crate::timing::TimingError;
use thiserror::Error;

/// Errors that can occur when building a cascade.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Text not specified. Call .text(..) before .build()")]
    MissingText,

    #[error("Both .click_text(..) and .glow_transition(..) were given. Use only one")]
    ConflictingGlowSources,

    #[error(transparent)]
    InvalidTiming(#[from] TimingError),
}
