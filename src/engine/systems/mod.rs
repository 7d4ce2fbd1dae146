//! Runtime diagnostics systems.

/// FPS overlay spawning, with the refresh wired up on native builds.
pub mod fps_tracking;
