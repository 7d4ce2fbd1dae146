pub mod animation;
pub mod assets;
pub mod cloud;
pub mod core;
pub mod glyph;
pub mod loading;
pub mod scene;
pub mod shaders;
pub mod systems;
