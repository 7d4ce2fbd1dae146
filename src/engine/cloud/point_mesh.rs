use bevy::prelude::*;
use bevy::{render::mesh::PrimitiveTopology, render::render_asset::RenderAssetUsages};

/// Build the sprite mesh for a set of particle positions.
/// Each point carries 6 vertices (2 triangles forming a screen-aligned quad);
/// the vertex shader derives the quad corner from the vertex index.
pub fn point_sprite_mesh(points: &[Vec3]) -> Mesh {
    let mut mesh = Mesh::new(
        PrimitiveTopology::TriangleList,
        RenderAssetUsages::RENDER_WORLD,
    );

    let mut vertices: Vec<[f32; 3]> = Vec::with_capacity(points.len() * 6);
    for point in points {
        for _ in 0..6 {
            vertices.push(point.to_array());
        }
    }

    mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, vertices);
    mesh
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn six_vertices_per_point() {
        let points = vec![Vec3::ZERO, Vec3::new(1.0, 2.0, 3.0)];
        let mesh = point_sprite_mesh(&points);
        assert_eq!(mesh.count_vertices(), 12);
    }

    #[test]
    fn vertices_repeat_the_point_position() {
        let points = vec![Vec3::new(0.5, -1.5, 0.25)];
        let mesh = point_sprite_mesh(&points);
        let positions = mesh
            .attribute(Mesh::ATTRIBUTE_POSITION)
            .and_then(|values| values.as_float3())
            .unwrap();
        assert_eq!(positions.len(), 6);
        for vertex in positions {
            assert_eq!(*vertex, [0.5, -1.5, 0.25]);
        }
    }

    #[test]
    fn empty_cloud_builds_an_empty_mesh() {
        let mesh = point_sprite_mesh(&[]);
        assert_eq!(mesh.count_vertices(), 0);
    }
}
