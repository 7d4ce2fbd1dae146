use bevy::prelude::*;
use rand::Rng;

use crate::constants::render_settings::{ALPHA_CUTOFF, DEPTH_RATIO, GLYPH_BASE_PX, SAMPLE_STRIDE};
use crate::engine::glyph::AlphaField;

/// Convert a coverage field into world-space particle positions.
///
/// X and Y follow the raster grid deterministically (raster Y grows
/// downward, world Y up, origin at the field centre). Z is jittered per
/// particle so the flat silhouette gains depth proportional to its overall
/// size. The caller owns the randomness, so a seeded generator reproduces a
/// cloud exactly.
pub fn sample_points<R: Rng>(
    field: &AlphaField,
    target_size: f32,
    density: f32,
    rng: &mut R,
) -> Vec<Vec3> {
    let glyph_px = GLYPH_BASE_PX * density;
    if !glyph_px.is_finite() || glyph_px <= 0.0 {
        return Vec::new();
    }

    let scale = target_size / glyph_px;
    let half_width = field.width() as f32 / 2.0;
    let half_height = field.height() as f32 / 2.0;
    let depth = target_size * DEPTH_RATIO;

    let mut points = Vec::new();
    for y in (0..field.height()).step_by(SAMPLE_STRIDE) {
        for x in (0..field.width()).step_by(SAMPLE_STRIDE) {
            if field.alpha(x, y) > ALPHA_CUTOFF {
                points.push(Vec3::new(
                    (x as f32 - half_width) * scale,
                    -(y as f32 - half_height) * scale,
                    (rng.random::<f32>() - 0.5) * depth,
                ));
            }
        }
    }
    points
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn single_pixel_field(width: usize, height: usize, x: usize, y: usize) -> AlphaField {
        let mut field = AlphaField::new(width, height);
        field.set(x, y, 255);
        field
    }

    #[test]
    fn empty_field_samples_nothing() {
        let field = AlphaField::new(8, 8);
        let mut rng = StdRng::seed_from_u64(7);
        assert!(sample_points(&field, 3.0, 2.0, &mut rng).is_empty());
    }

    #[test]
    fn cells_at_or_below_the_cutoff_are_skipped() {
        let mut field = AlphaField::new(8, 8);
        field.set(0, 0, ALPHA_CUTOFF);
        field.set(2, 0, ALPHA_CUTOFF + 1);
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(sample_points(&field, 3.0, 2.0, &mut rng).len(), 1);
    }

    #[test]
    fn off_stride_cells_are_never_visited() {
        let mut field = AlphaField::new(8, 8);
        field.set(1, 1, 255);
        field.set(3, 5, 255);
        let mut rng = StdRng::seed_from_u64(7);
        assert!(sample_points(&field, 3.0, 2.0, &mut rng).is_empty());
    }

    #[test]
    fn raster_coordinates_map_to_centred_world_space() {
        let field = single_pixel_field(8, 6, 4, 2);
        let mut rng = StdRng::seed_from_u64(7);
        // scale = 3.0 / (100 * 1.5) = 0.02
        let points = sample_points(&field, 3.0, 1.5, &mut rng);
        assert_eq!(points.len(), 1);
        assert_relative_eq!(points[0].x, 0.0);
        assert_relative_eq!(points[0].y, 0.02);
    }

    #[test]
    fn raster_y_is_flipped_into_world_y() {
        let top = single_pixel_field(8, 8, 0, 0);
        let bottom = single_pixel_field(8, 8, 0, 6);
        let mut rng = StdRng::seed_from_u64(7);
        let top_point = sample_points(&top, 3.0, 1.0, &mut rng)[0];
        let bottom_point = sample_points(&bottom, 3.0, 1.0, &mut rng)[0];
        assert!(top_point.y > 0.0);
        assert!(bottom_point.y < 0.0);
    }

    #[test]
    fn depth_jitter_stays_within_the_cloud_depth() {
        let mut field = AlphaField::new(40, 40);
        for y in (0..40).step_by(2) {
            for x in (0..40).step_by(2) {
                field.set(x, y, 255);
            }
        }
        let size = 3.0;
        let mut rng = StdRng::seed_from_u64(99);
        let points = sample_points(&field, size, 2.0, &mut rng);
        assert_eq!(points.len(), 400);
        let half_depth = size * DEPTH_RATIO / 2.0;
        assert!(points.iter().all(|p| p.z.abs() <= half_depth));
        assert!(points.iter().any(|p| p.z != 0.0));
    }

    #[test]
    fn seeded_sampling_is_reproducible() {
        let mut field = AlphaField::new(16, 16);
        field.set(0, 0, 255);
        field.set(4, 4, 255);
        field.set(8, 2, 255);
        let mut first = StdRng::seed_from_u64(42);
        let mut second = StdRng::seed_from_u64(42);
        assert_eq!(
            sample_points(&field, 2.0, 1.0, &mut first),
            sample_points(&field, 2.0, 1.0, &mut second)
        );
    }

    #[test]
    fn only_depth_varies_across_seeds() {
        let mut field = AlphaField::new(16, 16);
        field.set(0, 0, 255);
        field.set(4, 4, 255);
        let mut first = StdRng::seed_from_u64(1);
        let mut second = StdRng::seed_from_u64(2);
        let a = sample_points(&field, 2.0, 1.0, &mut first);
        let b = sample_points(&field, 2.0, 1.0, &mut second);
        assert_eq!(a.len(), b.len());
        for (pa, pb) in a.iter().zip(&b) {
            assert_eq!(pa.x, pb.x);
            assert_eq!(pa.y, pb.y);
        }
        assert!(a.iter().zip(&b).any(|(pa, pb)| pa.z != pb.z));
    }

    #[test]
    fn zero_density_yields_no_points() {
        let field = single_pixel_field(8, 8, 0, 0);
        let mut rng = StdRng::seed_from_u64(7);
        assert!(sample_points(&field, 3.0, 0.0, &mut rng).is_empty());
    }
}
