//! One-time reveal-on-scroll tracking.
//!
//! # Responsibility
//! - Record which observed elements have entered the viewport far enough
//!   to be revealed.
//!
//! # Invariants
//! - A reveal happens at most once per key; revealed elements never
//!   revert and later intersection reports are ignored (the original
//!   unobserves revealed targets).
//! - Without observer support every registered key reveals immediately,
//!   matching the original fallback branch.

use std::collections::BTreeMap;

/// Intersection ratio at which an element reveals, from the original
/// `IntersectionObserver` configuration.
pub const REVEAL_THRESHOLD: f64 = 0.15;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RevealState {
    Observing,
    Revealed,
}

/// Tracks reveal state for elements registered by the embedding UI.
#[derive(Debug)]
pub struct RevealTracker {
    threshold: f64,
    observer_available: bool,
    entries: BTreeMap<String, RevealState>,
}

impl Default for RevealTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl RevealTracker {
    /// Observer-backed tracking with the standard threshold.
    pub fn new() -> Self {
        Self {
            threshold: REVEAL_THRESHOLD,
            observer_available: true,
            entries: BTreeMap::new(),
        }
    }

    /// Fallback mode for environments without intersection reporting:
    /// every registered key reveals on the spot.
    pub fn without_observer() -> Self {
        Self {
            observer_available: false,
            ..Self::new()
        }
    }

    /// Registers an element for reveal tracking.
    ///
    /// Re-registering a key keeps its current state; in fallback mode the
    /// key is revealed immediately.
    pub fn observe(&mut self, key: impl Into<String>) {
        let initial = if self.observer_available {
            RevealState::Observing
        } else {
            RevealState::Revealed
        };
        self.entries.entry(key.into()).or_insert(initial);
    }

    /// Reports an intersection ratio for one element.
    ///
    /// Returns true when this report reveals the element. Unknown keys
    /// and already-revealed keys return false.
    pub fn on_intersection(&mut self, key: &str, ratio: f64) -> bool {
        match self.entries.get_mut(key) {
            Some(state @ RevealState::Observing) if ratio >= self.threshold => {
                *state = RevealState::Revealed;
                true
            }
            _ => false,
        }
    }

    /// Whether the element has been revealed.
    pub fn is_revealed(&self, key: &str) -> bool {
        matches!(self.entries.get(key), Some(RevealState::Revealed))
    }

    /// Number of revealed elements.
    pub fn revealed_count(&self) -> usize {
        self.entries
            .values()
            .filter(|state| matches!(state, RevealState::Revealed))
            .count()
    }

    /// Number of registered elements (revealed or not).
    pub fn observed_count(&self) -> usize {
        self.entries.len()
    }
}
