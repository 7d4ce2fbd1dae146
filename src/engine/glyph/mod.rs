//! Text rasterisation into per-pixel coverage fields.
//!
//! Draws a single line of text with `fontdue`, centred on both axes of a
//! scratch alpha raster. The raster is the only input to particle sampling;
//! colour and styling never enter the field.

/// Alpha field construction and glyph blitting.
pub mod alpha_field;

pub use alpha_field::AlphaField;

use fontdue::Font;

use crate::constants::render_settings::FIELD_HEIGHT_RATIO;

/// Advance width of `text` in pixels at the given glyph size, kerning
/// included. Mirrors what a canvas `measureText` call reports.
pub fn measure_advance(text: &str, font: &Font, px: f32) -> f32 {
    let mut advance = 0.0;
    let mut prev: Option<char> = None;
    for ch in text.chars() {
        if let Some(prev) = prev {
            advance += font.horizontal_kern(prev, ch, px).unwrap_or(0.0);
        }
        advance += font.metrics(ch, px).advance_width;
        prev = Some(ch);
    }
    advance
}

/// Rasterise `text` at the given glyph pixel size into a coverage field.
///
/// The field is `ceil(advance)` wide and `ceil(px * 1.5)` tall; the line of
/// text is centred on both axes. Whitespace contributes advance but no
/// coverage, and a degenerate pixel size yields an empty 1x1 field.
pub fn rasterize(text: &str, font: &Font, px: f32) -> AlphaField {
    if !px.is_finite() || px < 1.0 {
        return AlphaField::new(0, 0);
    }

    let measured = measure_advance(text, font, px);
    let width = measured.ceil() as usize;
    let height = (px * FIELD_HEIGHT_RATIO).ceil() as usize;
    let mut field = AlphaField::new(width, height);

    let Some(line) = font.horizontal_line_metrics(px) else {
        return field;
    };

    // Centre the line box vertically; fontdue reports descent as negative.
    let baseline = field.height() as f32 / 2.0 + (line.ascent + line.descent) / 2.0;
    let mut pen = (field.width() as f32 - measured) / 2.0;

    let mut prev: Option<char> = None;
    for ch in text.chars() {
        if let Some(prev) = prev {
            pen += font.horizontal_kern(prev, ch, px).unwrap_or(0.0);
        }
        let (metrics, bitmap) = font.rasterize(ch, px);
        if metrics.width > 0 && metrics.height > 0 {
            let x0 = (pen + metrics.xmin as f32).round() as i32;
            let y0 = (baseline - (metrics.ymin + metrics.height as i32) as f32).round() as i32;
            field.blit_max(&bitmap, metrics.width, metrics.height, x0, y0);
        }
        pen += metrics.advance_width;
        prev = Some(ch);
    }

    field
}

/// Test support: locates a usable system font face.
///
/// Rasterisation needs a real font file. Tests pick up a system font where
/// one exists and skip quietly where none does, the same as headless CI.
#[cfg(test)]
pub mod testing {
    use fontdue::Font;
    use std::path::{Path, PathBuf};

    fn find_font_file(dir: &Path, depth: u32) -> Option<PathBuf> {
        let entries = std::fs::read_dir(dir).ok()?;
        for entry in entries.flatten() {
            let path = entry.path();
            if path.is_dir() && depth > 0 {
                if let Some(found) = find_font_file(&path, depth - 1) {
                    return Some(found);
                }
            } else if path.extension().is_some_and(|ext| ext == "ttf") {
                return Some(path);
            }
        }
        None
    }

    pub fn load_system_font() -> Option<Font> {
        let candidates = [
            PathBuf::from("/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf"),
            PathBuf::from("/usr/share/fonts/TTF/DejaVuSans.ttf"),
            PathBuf::from("/System/Library/Fonts/Supplemental/Arial.ttf"),
            PathBuf::from("C:\\Windows\\Fonts\\arial.ttf"),
        ];
        let fallback = find_font_file(Path::new("/usr/share/fonts"), 3);
        for path in candidates.into_iter().chain(fallback) {
            if let Ok(bytes) = std::fs::read(&path) {
                if let Ok(font) = Font::from_bytes(bytes, fontdue::FontSettings::default()) {
                    return Some(font);
                }
            }
        }
        None
    }
}
