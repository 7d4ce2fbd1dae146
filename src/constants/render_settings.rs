/// Glyph raster pixel size per unit of cloud density
pub const GLYPH_BASE_PX: f32 = 100.0;

/// Raster field height as a multiple of the glyph pixel size
pub const FIELD_HEIGHT_RATIO: f32 = 1.5;

/// Sampling stride over the alpha field, in pixels, both axes
pub const SAMPLE_STRIDE: usize = 2;

/// Coverage threshold: a cell becomes a particle only above this alpha
pub const ALPHA_CUTOFF: u8 = 64;

/// Cloud depth extent as a fraction of the cloud's target size
pub const DEPTH_RATIO: f32 = 0.15;

/// Point sprite edge length in world units
pub const POINT_SPRITE_SIZE: f32 = 0.05;

/// Per-cloud sprite opacity
pub const CLOUD_OPACITY: f32 = 0.95;

/// Breathing oscillation rate (rad/s) and amplitude (world units)
pub const BREATHING_RATE: f32 = 0.5;
pub const BREATHING_AMPLITUDE: f32 = 0.05;

/// Camera sway along X: rate (rad/s) and amplitude (world units)
pub const CAMERA_SWAY_RATE: f32 = 0.15;
pub const CAMERA_SWAY_AMPLITUDE: f32 = 6.0;

/// Camera dolly along Z: rest distance, rate (rad/s) and amplitude
pub const CAMERA_DOLLY_BASE: f32 = 20.0;
pub const CAMERA_DOLLY_RATE: f32 = 0.1;
pub const CAMERA_DOLLY_AMPLITUDE: f32 = 2.0;

/// Vertical field of view in degrees
pub const CAMERA_FOV_DEGREES: f32 = 45.0;

/// Bloom prefilter luminance threshold
pub const BLOOM_THRESHOLD: f32 = 0.2;

/// Bloom contribution added back over the scene
pub const BLOOM_INTENSITY: f32 = 0.25;

/// Bloom blur spread across the mip chain
pub const BLOOM_BLUR_SPREAD: f32 = 0.3;
