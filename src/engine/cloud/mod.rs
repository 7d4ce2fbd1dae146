//! Particle cloud entities and their rebuild lifecycle.
//!
//! A cloud's point set is immutable once built: whenever the desired
//! `(text, font, size, density)` tuple drifts from the one the current mesh
//! was baked from, the whole mesh is discarded and regenerated. There is no
//! incremental diffing and no cache beyond the current generation.

/// Sprite mesh construction, six vertices per particle.
pub mod point_mesh;

/// Alpha-field to world-space particle conversion.
pub mod sampler;

use bevy::prelude::*;

use crate::constants::render_settings::GLYPH_BASE_PX;
use crate::engine::assets::glyph_font::GlyphFont;
use crate::engine::glyph;
use crate::engine::loading::font_loader::{FontLibrary, FontSlot};
use self::point_mesh::point_sprite_mesh;
use self::sampler::sample_points;

/// Inputs the current mesh of a cloud was generated from. A `None` font
/// records a build against a failed font slot.
#[derive(Debug, Clone, PartialEq)]
pub struct CloudGeneration {
    pub text: String,
    pub font: Option<AssetId<GlyphFont>>,
    pub target_size: f32,
    pub density: f32,
}

/// One line of text rendered as a cloud of glowing point sprites.
#[derive(Component)]
pub struct ParticleCloud {
    /// Desired display string; rewriting it schedules a rebuild.
    pub text: String,
    /// World-space span of the rendered text.
    pub target_size: f32,
    /// Raster density multiplier; the glyph pixel size is `100 * density`.
    pub density: f32,
    /// Asset path of the font this cloud rasterises with.
    pub font: String,
    /// Anchor translation; breathing oscillates around its Y.
    pub anchor: Vec3,
    /// Generation the current mesh was built from, `None` before the first
    /// build.
    pub built: Option<CloudGeneration>,
}

impl ParticleCloud {
    pub fn new(
        text: impl Into<String>,
        target_size: f32,
        density: f32,
        font: impl Into<String>,
        anchor: Vec3,
    ) -> Self {
        Self {
            text: text.into(),
            target_size,
            density,
            font: font.into(),
            anchor,
            built: None,
        }
    }

    fn desired_generation(&self, font: Option<AssetId<GlyphFont>>) -> CloudGeneration {
        CloudGeneration {
            text: self.text.clone(),
            font,
            target_size: self.target_size,
            density: self.density,
        }
    }
}

/// Regenerate any cloud whose desired inputs drifted from its built
/// generation.
///
/// Clouds whose font is still pending are left untouched; their desired
/// state keeps accumulating and collapses into a single rebuild once the
/// font arrives. A failed font builds an empty cloud so the rest of the
/// show keeps running.
pub fn rebuild_stale_clouds(
    mut clouds: Query<(&mut ParticleCloud, &mut Mesh3d)>,
    fonts: Res<FontLibrary>,
    font_assets: Res<Assets<GlyphFont>>,
    mut meshes: ResMut<Assets<Mesh>>,
) {
    for (mut cloud, mut mesh) in &mut clouds {
        match fonts.slot(&cloud.font) {
            None | Some(FontSlot::Pending(_)) => {}
            Some(FontSlot::Failed) => {
                let desired = cloud.desired_generation(None);
                if cloud.built.as_ref() == Some(&desired) {
                    continue;
                }
                warn!(
                    "font '{}' unavailable, cloud '{}' renders empty",
                    cloud.font, cloud.text
                );
                mesh.0 = meshes.add(point_sprite_mesh(&[]));
                cloud.built = Some(desired);
            }
            Some(FontSlot::Ready(handle)) => {
                let handle = handle.clone();
                let desired = cloud.desired_generation(Some(handle.id()));
                if cloud.built.as_ref() == Some(&desired) {
                    continue;
                }
                let Some(font) = font_assets.get(&handle) else {
                    continue;
                };
                let px = GLYPH_BASE_PX * cloud.density;
                let field = glyph::rasterize(&cloud.text, font.font(), px);
                let points =
                    sample_points(&field, cloud.target_size, cloud.density, &mut rand::rng());
                debug!("cloud '{}' rebuilt with {} particles", cloud.text, points.len());
                mesh.0 = meshes.add(point_sprite_mesh(&points));
                cloud.built = Some(desired);
            }
        }
    }
}
