//! Host-independent reveal watcher core.
//!
//! DESIGN
//! ======
//! The core never touches the DOM. The host assigns each watched element a
//! dense [`TargetId`] at registration, translates the visibility primitive's
//! entry batches into [`Observation`]s, and applies the returned reveal set
//! as class mutations. Separating the two keeps the reveal semantics
//! testable without WASM or a rendering engine.

#[cfg(test)]
#[path = "watcher_test.rs"]
mod watcher_test;

use crate::consts::{DEFAULT_THRESHOLD, MARKER_CLASS, REVEALED_CLASS};

/// Dense handle for a watched element, assigned by the host at registration.
pub type TargetId = usize;

/// Configuration shared by the core and its host.
///
/// The threshold is consumed by the host when constructing the visibility
/// observer; the class tokens are shared so hosts and tests agree on one
/// definition.
#[derive(Clone, Debug)]
pub struct RevealConfig {
    /// Intersection ratio at or above which an element counts as visible.
    pub threshold: f64,
    /// Class selecting the elements to watch.
    pub marker_class: String,
    /// Class applied when an element is revealed.
    pub revealed_class: String,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            marker_class: MARKER_CLASS.to_owned(),
            revealed_class: REVEALED_CLASS.to_owned(),
        }
    }
}

/// One visibility-change record reported by the host primitive.
#[derive(Clone, Copy, Debug)]
pub struct Observation {
    /// The watched element this record is about.
    pub target: TargetId,
    /// Whether the element currently intersects the viewport at or above the
    /// configured threshold.
    pub is_intersecting: bool,
}

/// Core watcher state — all logic that does not depend on the DOM.
///
/// Reveals are monotonic: once a target is revealed, later observations can
/// never un-reveal it.
pub struct WatcherCore {
    config: RevealConfig,
    revealed: Vec<bool>,
}

impl WatcherCore {
    #[must_use]
    pub fn new(config: RevealConfig) -> Self {
        Self { config, revealed: Vec::new() }
    }

    #[must_use]
    pub fn config(&self) -> &RevealConfig {
        &self.config
    }

    /// Register one watched element, returning its handle.
    ///
    /// Called by the host exactly once per element in the mount snapshot;
    /// elements appearing in the document afterwards are never registered.
    pub fn register(&mut self) -> TargetId {
        self.revealed.push(false);
        self.revealed.len() - 1
    }

    /// Number of registered targets.
    #[must_use]
    pub fn registered(&self) -> usize {
        self.revealed.len()
    }

    #[must_use]
    pub fn is_revealed(&self, target: TargetId) -> bool {
        self.revealed.get(target).copied().unwrap_or(false)
    }

    /// Consume a batch of observations, returning the targets to reveal in
    /// report order.
    ///
    /// Non-intersecting records are ignored (no un-reveal, no other action),
    /// already-revealed targets are suppressed so the host adds the class at
    /// most once, and unknown targets are dropped.
    pub fn observe(&mut self, batch: &[Observation]) -> Vec<TargetId> {
        let mut to_reveal = Vec::new();
        for record in batch {
            if !record.is_intersecting {
                continue;
            }
            let Some(revealed) = self.revealed.get_mut(record.target) else {
                continue;
            };
            if *revealed {
                continue;
            }
            *revealed = true;
            to_reveal.push(record.target);
        }
        to_reveal
    }
}
