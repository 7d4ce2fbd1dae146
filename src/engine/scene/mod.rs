//! Scene assembly and the countdown text source.
//!
//! Builds the camera and the three text clouds from the show manifest, and
//! keeps the countdown cloud's string synchronised with the wall clock.

/// Camera and cloud spawning from the resolved show manifest.
pub mod composer;

/// Countdown arithmetic, display formatting and the per-frame refresh.
pub mod countdown;
