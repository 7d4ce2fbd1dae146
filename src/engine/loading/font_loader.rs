use bevy::asset::LoadState;
use bevy::prelude::*;
use std::collections::HashMap;

use crate::engine::assets::glyph_font::GlyphFont;

/// Lifecycle of one requested font path.
#[derive(Debug)]
pub enum FontSlot {
    Pending(Handle<GlyphFont>),
    Ready(Handle<GlyphFont>),
    Failed,
}

/// Every font the show needs, keyed by asset path.
///
/// A slot never leaves `Ready` or `Failed` once it gets there; clouds poll
/// their slot each frame and rebuild against whatever it holds.
#[derive(Resource, Default)]
pub struct FontLibrary {
    slots: HashMap<String, FontSlot>,
}

impl FontLibrary {
    /// Begin loading a font unless a slot for it already exists.
    pub fn request(&mut self, path: &str, asset_server: &AssetServer) {
        if !self.slots.contains_key(path) {
            let handle = asset_server.load::<GlyphFont>(path.to_owned());
            self.slots.insert(path.to_owned(), FontSlot::Pending(handle));
        }
    }

    pub fn slot(&self, path: &str) -> Option<&FontSlot> {
        self.slots.get(path)
    }

    #[cfg(test)]
    pub fn insert_slot(&mut self, path: &str, slot: FontSlot) {
        self.slots.insert(path.to_owned(), slot);
    }
}

/// Flip pending slots as the asset server resolves them.
pub fn track_font_loading(mut fonts: ResMut<FontLibrary>, asset_server: Res<AssetServer>) {
    for (path, slot) in fonts.slots.iter_mut() {
        if let FontSlot::Pending(handle) = slot {
            match asset_server.get_load_state(handle.id()) {
                Some(LoadState::Loaded) => {
                    info!("font ready: {path}");
                    let handle = handle.clone();
                    *slot = FontSlot::Ready(handle);
                }
                Some(LoadState::Failed(error)) => {
                    warn!("font failed to load: {path}: {error}");
                    *slot = FontSlot::Failed;
                }
                _ => {}
            }
        }
    }
}
