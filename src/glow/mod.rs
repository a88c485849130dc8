//! Glow-morph transitions.
//!
//! A glow transition rewrites one string into another, one character per
//! frame, with a highlight traveling left to right. Generation is pure and
//! deterministic; [`GlowTransitionCache`] memoizes it on the string pair.

mod cache;
mod generate;

pub use cache::GlowTransitionCache;
pub use generate::{generate_glow_transition, GlowFrame, GlowTransition};
