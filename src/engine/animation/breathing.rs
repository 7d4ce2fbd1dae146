use bevy::prelude::*;

use crate::constants::render_settings::{BREATHING_AMPLITUDE, BREATHING_RATE};
use crate::engine::cloud::ParticleCloud;

/// Vertical displacement at time `t` for a cloud anchored at `anchor_y`.
/// The anchor feeds the phase, so stacked clouds never breathe in unison.
pub fn breathing_offset(t: f32, anchor_y: f32) -> f32 {
    (t * BREATHING_RATE + anchor_y).sin() * BREATHING_AMPLITUDE
}

/// Apply the breathing offset around each cloud's anchor.
pub fn animate_clouds(time: Res<Time>, mut clouds: Query<(&ParticleCloud, &mut Transform)>) {
    let t = time.elapsed_secs();
    for (cloud, mut transform) in &mut clouds {
        transform.translation.y = cloud.anchor.y + breathing_offset(t, cloud.anchor.y);
    }
}
