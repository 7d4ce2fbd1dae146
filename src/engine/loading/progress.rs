use bevy::prelude::*;

#[derive(Resource, Default)]
pub struct LoadingProgress {
    pub manifest_resolved: bool,
    pub scene_spawned: bool,
}
