use bevy::core_pipeline::bloom::{Bloom, BloomCompositeMode, BloomPrefilter};
use bevy::prelude::*;
use bevy::render::view::NoFrustumCulling;

use crate::constants::render_settings::{
    BLOOM_BLUR_SPREAD, BLOOM_INTENSITY, BLOOM_THRESHOLD, CAMERA_DOLLY_BASE, CAMERA_FOV_DEGREES,
    CLOUD_OPACITY, POINT_SPRITE_SIZE,
};
use crate::engine::assets::show_manifest::{CloudEntry, ShowManifest};
use crate::engine::cloud::ParticleCloud;
use crate::engine::cloud::point_mesh::point_sprite_mesh;
use crate::engine::core::app_state::AppState;
use crate::engine::loading::font_loader::FontLibrary;
use crate::engine::loading::progress::LoadingProgress;
use crate::engine::scene::countdown::{CountdownTarget, default_target, parse_target};
use crate::engine::shaders::GlowPointMaterial;

/// Marker for the cloud whose text tracks the countdown clock.
#[derive(Component)]
pub struct CountdownCloud;

/// Spawn the HDR camera with its bloom stage. The rig re-poses it every
/// frame once the show is running.
pub fn spawn_camera(commands: &mut Commands) {
    commands.spawn((
        Camera3d::default(),
        Camera {
            hdr: true,
            ..default()
        },
        Projection::Perspective(PerspectiveProjection {
            fov: CAMERA_FOV_DEGREES.to_radians(),
            ..default()
        }),
        Transform::from_xyz(0.0, 0.0, CAMERA_DOLLY_BASE).looking_at(Vec3::ZERO, Vec3::Y),
        Bloom {
            intensity: BLOOM_INTENSITY,
            low_frequency_boost: BLOOM_BLUR_SPREAD,
            composite_mode: BloomCompositeMode::Additive,
            prefilter: BloomPrefilter {
                threshold: BLOOM_THRESHOLD,
                threshold_softness: 0.0,
            },
            ..default()
        },
    ));
}

/// Spawn the three text clouds once the manifest has resolved, then hand
/// the app over to the running state.
pub fn compose_scene_when_ready(
    mut loading_progress: ResMut<LoadingProgress>,
    mut next_state: ResMut<NextState<AppState>>,
    manifest: Option<Res<ShowManifest>>,
    mut fonts: ResMut<FontLibrary>,
    asset_server: Res<AssetServer>,
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<GlowPointMaterial>>,
) {
    if loading_progress.scene_spawned {
        return;
    }
    let Some(show) = manifest else {
        return;
    };

    let target = parse_target(&show.countdown_target).unwrap_or_else(|| {
        warn!(
            "invalid countdown target '{}', counting to 2026 instead",
            show.countdown_target
        );
        default_target()
    });
    commands.insert_resource(CountdownTarget(target));

    spawn_cloud(
        &mut commands,
        &mut meshes,
        &mut materials,
        &mut fonts,
        &asset_server,
        &show.title,
    );
    let countdown = spawn_cloud(
        &mut commands,
        &mut meshes,
        &mut materials,
        &mut fonts,
        &asset_server,
        &show.countdown,
    );
    commands.entity(countdown).insert(CountdownCloud);
    spawn_cloud(
        &mut commands,
        &mut meshes,
        &mut materials,
        &mut fonts,
        &asset_server,
        &show.signature,
    );

    info!("scene composed, waiting on fonts");
    loading_progress.scene_spawned = true;
    next_state.set(AppState::Running);
}

/// Spawn one cloud entity with an empty mesh. The first rebuild fills it in
/// once its font slot resolves.
fn spawn_cloud(
    commands: &mut Commands,
    meshes: &mut ResMut<Assets<Mesh>>,
    materials: &mut ResMut<Assets<GlowPointMaterial>>,
    fonts: &mut ResMut<FontLibrary>,
    asset_server: &Res<AssetServer>,
    entry: &CloudEntry,
) -> Entity {
    fonts.request(&entry.font, asset_server);
    commands
        .spawn((
            ParticleCloud::new(
                entry.text.clone(),
                entry.size,
                entry.density,
                entry.font.clone(),
                entry.anchor(),
            ),
            Mesh3d(meshes.add(point_sprite_mesh(&[]))),
            MeshMaterial3d(materials.add(GlowPointMaterial::new(
                entry.colour(),
                POINT_SPRITE_SIZE,
                CLOUD_OPACITY,
            ))),
            Transform::from_translation(entry.anchor()),
            NoFrustumCulling,
        ))
        .id()
}
