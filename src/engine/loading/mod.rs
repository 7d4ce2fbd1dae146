//! Asset loading and readiness tracking for the show.
//!
//! Manages the two-stage startup pipeline from manifest parsing to scene
//! composition, plus the per-font slots clouds rebuild against at runtime.

/// Per-font load slots with pending, ready and failed lifecycles.
///
/// Clouds poll their slot each frame; rebuilds queued behind a pending font
/// collapse into one build when the slot flips.
pub mod font_loader;

/// Show manifest loading with a built-in fallback show.
///
/// Promotes the parsed JSON to a resource, or the defaults when the file is
/// missing or malformed.
pub mod manifest_loader;

/// Loading progress flags for the state transition out of `Loading`.
pub mod progress;
