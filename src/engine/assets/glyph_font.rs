use bevy::asset::{AssetLoader, LoadContext, io::Reader};
use bevy::prelude::*;
use fontdue::{Font, FontSettings};

/// A font face wrapped as a Bevy asset.
///
/// `bevy_text` never touches these files: the raw TTF/OTF bytes are parsed
/// with `fontdue` because the rasteriser needs per-glyph coverage bitmaps,
/// which the built-in text stack does not expose. Loads are requested with
/// an explicit asset type so they route here rather than to the engine's
/// own font loader on the shared extensions.
#[derive(Asset, TypePath)]
pub struct GlyphFont {
    font: Font,
}

impl GlyphFont {
    pub fn new(font: Font) -> Self {
        Self { font }
    }

    pub fn font(&self) -> &Font {
        &self.font
    }
}

#[derive(Debug, thiserror::Error)]
pub enum GlyphFontError {
    #[error("failed to read font file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse font face: {0}")]
    Face(&'static str),
}

#[derive(Default)]
pub struct GlyphFontLoader;

impl AssetLoader for GlyphFontLoader {
    type Asset = GlyphFont;
    type Settings = ();
    type Error = GlyphFontError;

    async fn load(
        &self,
        reader: &mut dyn Reader,
        _settings: &(),
        _load_context: &mut LoadContext<'_>,
    ) -> Result<Self::Asset, Self::Error> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes).await?;
        let font = Font::from_bytes(bytes, FontSettings::default()).map_err(GlyphFontError::Face)?;
        Ok(GlyphFont::new(font))
    }

    fn extensions(&self) -> &[&str] {
        &["ttf", "otf"]
    }
}
