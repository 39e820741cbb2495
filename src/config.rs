//! Application-level configuration constants.

// Timer behavior
pub const TICK_MS: u32 = 1_000;
pub const NOTIFICATION_SOUND_URL: &str = "https://bigsoundbank.com/UPLOAD/mp3/1482.mp3";

// Default durations (seconds)
pub const DEFAULT_FOCUS_SECONDS: u32 = 1_500;
pub const DEFAULT_BREAK_SECONDS: u32 = 300;

// Min/Max limits for the duration adjusters
pub const MIN_FOCUS_SECONDS: u32 = 0;
pub const MAX_FOCUS_SECONDS: u32 = 3_600;
pub const MIN_BREAK_SECONDS: u32 = 0;
pub const MAX_BREAK_SECONDS: u32 = 900;

// Adjuster step sizes (seconds)
pub const FOCUS_STEP_SECONDS: u32 = 300;
pub const BREAK_STEP_SECONDS: u32 = 60;
