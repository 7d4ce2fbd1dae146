/// Countdown target instant, local wall-clock
pub const COUNTDOWN_TARGET: &str = "2026-01-01T00:00:00";

/// Heading shown above the countdown
pub const TITLE_TEXT: &str = "距离 2026";

/// Sign-off shown below the countdown
pub const SIGNATURE_TEXT: &str = "MENGTIAN LIVESHOW";

/// Muted greys keep the title and signature dimmer than the countdown's
/// full-white halo
pub const COUNTDOWN_COLOUR: &str = "#FFFFFF";
pub const TITLE_COLOUR: &str = "#6B7280";
pub const SIGNATURE_COLOUR: &str = "#9CA3AF";

/// Font files, relative to the asset root
pub const TITLE_FONT: &str = "fonts/title.ttf";
pub const DIGIT_FONT: &str = "fonts/digits.ttf";
pub const SIGNATURE_FONT: &str = "fonts/signature.ttf";
