//! Memoized glow transitions keyed by their source strings.

use super::generate::{generate_glow_transition, GlowTransition};
use std::sync::Arc;
use tracing::trace;

/// Holds the transition for the most recent `(hover, click)` pair.
///
/// Generation is pure, so an unchanged key always yields the same shared
/// transition without regenerating it.
#[derive(Clone, Debug, Default)]
pub struct GlowTransitionCache {
    entry: Option<CacheEntry>,
}

#[derive(Clone, Debug)]
struct CacheEntry {
    hover: String,
    click: String,
    transition: Arc<GlowTransition>,
}

impl GlowTransitionCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the transition for `(hover, click)`, regenerating on a key change.
    pub fn get(&mut self, hover: &str, click: &str) -> Arc<GlowTransition> {
        if let Some(entry) = &self.entry {
            if entry.hover == hover && entry.click == click {
                return Arc::clone(&entry.transition);
            }
        }

        trace!(hover, click, "generating glow transition");
        let transition = Arc::new(generate_glow_transition(hover, click));
        self.entry = Some(CacheEntry {
            hover: hover.to_string(),
            click: click.to_string(),
            transition: Arc::clone(&transition),
        });
        transition
    }

    /// Forget the cached transition.
    pub fn clear(&mut self) {
        self.entry = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unchanged_key_reuses_transition() {
        let mut cache = GlowTransitionCache::new();

        let first = cache.get("Copy", "Copied");
        let second = cache.get("Copy", "Copied");

        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn changed_key_regenerates() {
        let mut cache = GlowTransitionCache::new();

        let first = cache.get("Copy", "Copied");
        let second = cache.get("Save", "Saved");

        assert!(!Arc::ptr_eq(&first, &second));
        assert_eq!(second.confirmed_text, "Saved");
    }

    #[test]
    fn regenerated_transition_matches_first() {
        let mut cache = GlowTransitionCache::new();

        let first = cache.get("Copy", "Copied");
        cache.clear();
        let second = cache.get("Copy", "Copied");

        assert!(!Arc::ptr_eq(&first, &second));
        assert_eq!(*first, *second);
    }
}
