use bevy::asset::LoadState;
use bevy::prelude::*;

use crate::constants::path::SHOW_MANIFEST_PATH;
use crate::engine::assets::show_manifest::ShowManifest;
use crate::engine::loading::progress::LoadingProgress;

#[derive(Resource, Default)]
pub struct ManifestLoader {
    handle: Option<Handle<ShowManifest>>,
}

/// Start the loading process.
pub fn start_loading(mut manifest_loader: ResMut<ManifestLoader>, asset_server: Res<AssetServer>) {
    manifest_loader.handle = Some(asset_server.load(SHOW_MANIFEST_PATH));
}

/// Promote the manifest to a resource once parsed. A missing or malformed
/// file falls back to the built-in show rather than stalling the app.
pub fn resolve_manifest_system(
    mut loading_progress: ResMut<LoadingProgress>,
    manifest_loader: Res<ManifestLoader>,
    manifests: Res<Assets<ShowManifest>>,
    asset_server: Res<AssetServer>,
    mut commands: Commands,
) {
    if loading_progress.manifest_resolved {
        return;
    }

    let Some(ref handle) = manifest_loader.handle else {
        return;
    };

    if let Some(manifest) = manifests.get(handle) {
        info!("show manifest loaded");
        commands.insert_resource(manifest.clone());
        loading_progress.manifest_resolved = true;
    } else if matches!(
        asset_server.get_load_state(handle),
        Some(LoadState::Failed(_))
    ) {
        warn!("show manifest missing or malformed, using the built-in show");
        commands.insert_resource(ShowManifest::default());
        loading_progress.manifest_resolved = true;
    }
}
