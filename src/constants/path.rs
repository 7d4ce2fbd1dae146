/// Show manifest location, relative to the asset root
pub const SHOW_MANIFEST_PATH: &str = "show.json";

/// Point sprite shader location, relative to the asset root
pub const GLOW_POINTS_SHADER_PATH: &str = "shaders/glow_points.wgsl";
