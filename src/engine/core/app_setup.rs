use bevy::asset::AssetMetaCheck;
use bevy::diagnostic::FrameTimeDiagnosticsPlugin;
use bevy::prelude::*;
use bevy_common_assets::json::JsonAssetPlugin;

use crate::engine::animation::breathing::animate_clouds;
use crate::engine::animation::camera_rig::camera_rig;
use crate::engine::assets::glyph_font::{GlyphFont, GlyphFontLoader};
use crate::engine::assets::show_manifest::ShowManifest;
use crate::engine::cloud::rebuild_stale_clouds;
use crate::engine::core::app_state::AppState;
use crate::engine::core::window_config::create_window_config;
use crate::engine::loading::font_loader::{FontLibrary, track_font_loading};
use crate::engine::loading::manifest_loader::{
    ManifestLoader, resolve_manifest_system, start_loading,
};
use crate::engine::loading::progress::LoadingProgress;
use crate::engine::scene::composer::{compose_scene_when_ready, spawn_camera};
use crate::engine::scene::countdown::update_countdown_text;
use crate::engine::shaders::GlowPointMaterial;
use crate::engine::systems::fps_tracking::spawn_fps_overlay;

#[cfg(not(target_arch = "wasm32"))]
use crate::engine::systems::fps_tracking::fps_text_update_system;

pub fn create_app() -> App {
    let mut app = App::new();

    app.add_plugins(create_default_plugins())
        .init_state::<AppState>()
        .add_plugins(MaterialPlugin::<GlowPointMaterial>::default())
        .add_plugins(FrameTimeDiagnosticsPlugin::default())
        // Registers ShowManifest as a loadable asset type from JSON files.
        .add_plugins(JsonAssetPlugin::<ShowManifest>::new(&["json"]))
        .init_asset::<GlyphFont>()
        .register_asset_loader(GlyphFontLoader)
        .insert_resource(ClearColor(Color::BLACK));

    // Initialise resources early
    app.init_resource::<LoadingProgress>()
        .init_resource::<ManifestLoader>()
        .init_resource::<FontLibrary>();

    // State-based system scheduling
    app.add_systems(Startup, (setup, start_loading).chain())
        .add_systems(
            Update,
            (resolve_manifest_system, compose_scene_when_ready)
                .chain()
                .run_if(in_state(AppState::Loading)),
        );

    // Base runtime systems that run on all platforms.
    let runtime_systems = (
        (track_font_loading, update_countdown_text, rebuild_stale_clouds).chain(),
        animate_clouds,
        camera_rig,
    );

    // Add fps_text_update_system only for native builds.
    #[cfg(not(target_arch = "wasm32"))]
    {
        app.add_systems(Update, fps_text_update_system);
    }

    app.add_systems(Update, runtime_systems.run_if(in_state(AppState::Running)));

    app
}

/// Startup system for everything that needs no loaded assets.
fn setup(mut commands: Commands) {
    spawn_camera(&mut commands);
    spawn_fps_overlay(&mut commands);
}

fn create_default_plugins() -> impl PluginGroup {
    let window_config = WindowPlugin {
        primary_window: Some(create_window_config()),
        ..default()
    };

    let asset_config = AssetPlugin {
        meta_check: AssetMetaCheck::Never,
        ..default()
    };

    DefaultPlugins.set(window_config).set(asset_config)
}
