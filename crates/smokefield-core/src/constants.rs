// Shared simulation tuning constants used by the scene presets and renderer.

// Pool sizes
pub const HERO_SMOKE_COUNT: usize = 30;
pub const HERO_SPARKLE_COUNT: usize = 55;
pub const HERO_TRAIL_CAP: usize = 12;
pub const BACKDROP_SMOKE_COUNT: usize = 55;
pub const BACKDROP_TRAIL_CAP: usize = 80;
pub const BACKDROP_TRAIL_TRIM: usize = 5; // oldest puffs dropped at once when the cap is exceeded

// Pointer tracking
pub const POINTER_SMOOTHING: f32 = 0.6; // velocity = delta since last sample * smoothing
pub const POINTER_DECAY: f32 = 0.82; // per-frame multiplicative velocity decay
pub const FIELD_EPSILON: f32 = 0.5; // no force closer than this to the pointer

// Cursor trail spawning
pub const TRAIL_MIN_SPEED: f32 = 2.0;
pub const TRAIL_SPEED_PER_PUFF: f32 = 4.0;
pub const TRAIL_MAX_PER_FRAME: usize = 3;
pub const TRAIL_GATE_FRAMES: u64 = 4;
pub const TRAIL_JITTER: f32 = 15.0; // +/- px around the pointer

// Rendering
pub const HERO_BLUR_PX: f32 = 7.0;
pub const MIN_VISIBLE_ALPHA: f32 = 0.001; // fainter particles are skipped

// Opacity envelope breakpoints (fraction of life)
pub const SMOKE_FADE_IN: f32 = 0.12;
pub const DEFAULT_FADE_IN: f32 = 0.15;
pub const FADE_OUT_FROM: f32 = 0.60;
