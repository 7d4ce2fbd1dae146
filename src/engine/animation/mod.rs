//! Per-frame animation for clouds and the camera.
//!
//! Both drivers are pure functions of the elapsed clock applied by small
//! `Update` systems, so a given time always reproduces the same pose.

/// Vertical breathing oscillation around each cloud's anchor.
pub mod breathing;

/// Cinematic camera sweep with continuous re-aiming at the origin.
pub mod camera_rig;
