//! Render projection.
//!
//! Pure mapping from a [`CascadeState`](crate::cascade::CascadeState) to
//! what a host draws: per-character activity, glow and delays, plus the
//! container's width and custom properties. Projections never touch the
//! machine.

mod chars;
mod container;

pub use chars::{exit_delay_ms, is_active, project_chars, CharProjection};
pub use container::{
    project_container, ContainerOptions, ContainerProjection, GlowStyle, DEFAULT_CASCADE_WEIGHT,
};
