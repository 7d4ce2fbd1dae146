/// Glow point sprite shader material
use bevy::{
    prelude::*,
    reflect::TypePath,
    render::render_resource::{AsBindGroup, ShaderRef},
};

use crate::constants::path::GLOW_POINTS_SHADER_PATH;

/// Additively blended, fixed-world-size point sprite material.
///
/// The vertex stage expands each point's six vertices into a camera-facing
/// quad; additive blending without depth writes keeps overlapping clouds
/// accumulating brightness instead of occluding each other, which is what
/// the bloom pass picks up.
#[derive(Asset, TypePath, AsBindGroup, Debug, Clone)]
pub struct GlowPointMaterial {
    #[uniform(0)]
    pub colour: LinearRgba,

    /// x: sprite edge in world units, y: opacity, zw: unused.
    #[uniform(1)]
    pub params: Vec4,
}

impl GlowPointMaterial {
    pub fn new(colour: Color, point_size: f32, opacity: f32) -> Self {
        Self {
            colour: colour.to_linear(),
            params: Vec4::new(point_size, opacity, 0.0, 0.0),
        }
    }
}

impl Material for GlowPointMaterial {
    fn vertex_shader() -> ShaderRef {
        GLOW_POINTS_SHADER_PATH.into()
    }

    fn fragment_shader() -> ShaderRef {
        GLOW_POINTS_SHADER_PATH.into()
    }

    fn alpha_mode(&self) -> AlphaMode {
        AlphaMode::Add
    }
}
