use bevy::prelude::*;

use crate::constants::render_settings::{
    CAMERA_DOLLY_AMPLITUDE, CAMERA_DOLLY_BASE, CAMERA_DOLLY_RATE, CAMERA_SWAY_AMPLITUDE,
    CAMERA_SWAY_RATE,
};

/// Camera position at elapsed time `t`: a slow sinusoidal sweep across X
/// with a slight dolly breath on Z.
pub fn camera_position(t: f32) -> Vec3 {
    Vec3::new(
        (t * CAMERA_SWAY_RATE).sin() * CAMERA_SWAY_AMPLITUDE,
        0.0,
        CAMERA_DOLLY_BASE + (t * CAMERA_DOLLY_RATE).cos() * CAMERA_DOLLY_AMPLITUDE,
    )
}

/// Sweep the camera and re-aim it at the origin every frame, so the sway
/// and dolly never desync from the framing.
pub fn camera_rig(time: Res<Time>, mut cameras: Query<&mut Transform, With<Camera3d>>) {
    let t = time.elapsed_secs();
    for mut transform in &mut cameras {
        *transform =
            Transform::from_translation(camera_position(t)).looking_at(Vec3::ZERO, Vec3::Y);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn rig_starts_centred_at_full_dolly() {
        let position = camera_position(0.0);
        assert_relative_eq!(position.x, 0.0);
        assert_relative_eq!(position.y, 0.0);
        assert_relative_eq!(position.z, CAMERA_DOLLY_BASE + CAMERA_DOLLY_AMPLITUDE);
    }

    #[test]
    fn sway_peaks_at_a_quarter_period() {
        let quarter = std::f32::consts::FRAC_PI_2 / CAMERA_SWAY_RATE;
        assert_relative_eq!(
            camera_position(quarter).x,
            CAMERA_SWAY_AMPLITUDE,
            epsilon = 1e-3
        );
    }

    #[test]
    fn position_stays_inside_the_sweep_envelope() {
        for step in 0..2000 {
            let position = camera_position(step as f32 * 0.25);
            assert!(position.x.abs() <= CAMERA_SWAY_AMPLITUDE + 1e-4);
            assert!(position.z >= CAMERA_DOLLY_BASE - CAMERA_DOLLY_AMPLITUDE - 1e-4);
            assert!(position.z <= CAMERA_DOLLY_BASE + CAMERA_DOLLY_AMPLITUDE + 1e-4);
        }
    }

    #[test]
    fn rig_always_faces_the_origin() {
        for step in 1..200 {
            let t = step as f32 * 0.5;
            let position = camera_position(t);
            let transform = Transform::from_translation(position).looking_at(Vec3::ZERO, Vec3::Y);
            let towards_origin = (-position).normalize();
            assert!(transform.forward().dot(towards_origin) > 0.9999);
        }
    }
}
