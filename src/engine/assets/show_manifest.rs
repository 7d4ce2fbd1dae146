use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::constants::scene;

/// One text cloud entry in the show. Mirrors the JSON structure exactly.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CloudEntry {
    /// Display string. The countdown entry leaves this empty; its text is
    /// derived from the clock every frame.
    #[serde(default)]
    pub text: String,
    /// World-space span of the rendered text.
    pub size: f32,
    pub position: [f32; 3],
    /// sRGB hex colour, e.g. `"#9CA3AF"`.
    pub colour: String,
    /// Raster density multiplier.
    pub density: f32,
    /// Font file, relative to the asset root.
    pub font: String,
}

impl CloudEntry {
    /// Parsed colour; a malformed hex string falls back to white.
    pub fn colour(&self) -> Color {
        Srgba::hex(&self.colour)
            .map(Color::from)
            .unwrap_or(Color::WHITE)
    }

    pub fn anchor(&self) -> Vec3 {
        Vec3::from_array(self.position)
    }
}

/// Complete show description as a Bevy asset. Mirrors the JSON exactly and
/// doubles as the resource the composer reads once loading resolves.
#[derive(Asset, Debug, Clone, Serialize, Deserialize, TypePath, Resource)]
pub struct ShowManifest {
    /// Countdown target instant, local wall-clock, `YYYY-MM-DDThh:mm:ss`.
    pub countdown_target: String,
    pub title: CloudEntry,
    pub countdown: CloudEntry,
    pub signature: CloudEntry,
}

impl Default for ShowManifest {
    fn default() -> Self {
        Self {
            countdown_target: scene::COUNTDOWN_TARGET.into(),
            title: CloudEntry {
                text: scene::TITLE_TEXT.into(),
                size: 1.1,
                position: [0.0, 2.2, 0.0],
                colour: scene::TITLE_COLOUR.into(),
                density: 2.0,
                font: scene::TITLE_FONT.into(),
            },
            countdown: CloudEntry {
                text: String::new(),
                size: 3.0,
                position: [0.0, 0.0, 0.0],
                colour: scene::COUNTDOWN_COLOUR.into(),
                density: 2.5,
                font: scene::DIGIT_FONT.into(),
            },
            signature: CloudEntry {
                text: scene::SIGNATURE_TEXT.into(),
                size: 1.2,
                position: [0.0, -2.2, 0.0],
                colour: scene::SIGNATURE_COLOUR.into(),
                density: 1.5,
                font: scene::SIGNATURE_FONT.into(),
            },
        }
    }
}
