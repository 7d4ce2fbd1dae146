use bevy::prelude::*;

/// Top-level lifecycle. `Loading` covers manifest resolution and scene
/// composition; everything per-frame runs in `Running`. Fonts resolve after
/// the transition, so a slow font never blocks the camera or the clock.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Hash, States)]
pub enum AppState {
    #[default]
    Loading,
    Running,
}
