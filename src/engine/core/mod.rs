//! Core application setup and state management.
//!
//! Handles application lifecycle, window configuration and plugin
//! initialisation for both native and WASM targets.

/// Application setup and plugin configuration for the Bevy engine.
///
/// Creates the main app with the material plugin, asset loaders and the
/// state-gated system schedules.
pub mod app_setup;

/// Application lifecycle states.
pub mod app_state;

/// Platform-specific window configuration for native and WASM builds.
///
/// Configures canvas integration for web targets and vsync settings.
pub mod window_config;
