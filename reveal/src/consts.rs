//! Shared constants for the reveal crate.

// ── Observer ────────────────────────────────────────────────────

/// Fraction of an element's area that must be visible to count as
/// intersecting (12%).
pub const DEFAULT_THRESHOLD: f64 = 0.12;

// ── Class tokens ────────────────────────────────────────────────

/// Marker class selecting the elements to watch.
pub const MARKER_CLASS: &str = "slide-in";

/// Class added to an element once it has been revealed.
pub const REVEALED_CLASS: &str = "in-view";
