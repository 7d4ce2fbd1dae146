//! Asset types backing the show.
//!
//! Covers the JSON show manifest and the fontdue-backed font faces the
//! rasteriser reads coverage bitmaps from.

/// Font faces parsed with fontdue, loaded from TTF/OTF files.
pub mod glyph_font;

/// Show manifest describing the three text clouds and the countdown target.
pub mod show_manifest;
