//! Simulation constants.
//!
//! Durations are counted in state ticks, which advance once every two logical
//! ticks.

/// Width and height of one sprite frame in pixels
pub const SPRITE_SIZE: i32 = 32;

/// Horizontal offset from the logical position to the anchor (sprite centre)
pub const ANCHOR_X: i32 = SPRITE_SIZE / 2;

/// Vertical offset from the logical position to the anchor (sprite bottom row)
pub const ANCHOR_Y: i32 = SPRITE_SIZE - 1;

/// Number of entries in a sprite table
pub const SPRITE_COUNT: usize = 32;

/// Number of animation states
pub const STATE_COUNT: usize = 18;

/// Stop duration
pub const STOP_TIME: u32 = 4;

/// Wash duration
pub const WASH_TIME: u32 = 10;

/// Scratch duration
pub const SCRATCH_TIME: u32 = 4;

/// Yawn duration
pub const YAWN_TIME: u32 = 3;

/// Minimum awake duration
pub const AWAKE_TIME: u32 = 3;

/// Exclusive upper bound of the random awake extension
pub const AWAKE_JITTER: u32 = 20;

/// Wall-claw duration
pub const CLAW_TIME: u32 = 10;

/// The tick counter wraps to 0 on reaching this value
pub const TICK_WRAP: u32 = 9999;

/// `sin(π/8)`
pub const SIN_PI_PER_8: f64 = 0.3826834323651;

/// `sin(3π/8)`
pub const SIN_3PI_PER_8: f64 = 0.9238795325113;

/// Flee distance is `idle_threshold * FLEE_DISTANCE_FACTOR`
pub const FLEE_DISTANCE_FACTOR: i32 = 16;

/// Half-width of the random scatter around the bounds centre used by flee
pub const FLEE_SCATTER: f64 = 100.0;

/// Random-walk sleep limit is `idle_threshold * RANDOM_WALK_FACTOR`
pub const RANDOM_WALK_FACTOR: u32 = 10;

/// Orbit margin is `speed * ORBIT_MARGIN_FACTOR`
pub const ORBIT_MARGIN_FACTOR: f64 = 8.0;

/// Default timer callbacks per second
pub const DEFAULT_FPS: u32 = 120;

/// Default logical ticks per second
pub const DEFAULT_TICKS_PER_SECOND: f64 = 5.0;

/// Default movement speed in pixels per tick
pub const DEFAULT_SPEED: u32 = 24;

/// Default idle threshold in pixels
pub const DEFAULT_IDLE_THRESHOLD: u32 = 6;

/// Default viewport used when no bounds are configured
pub const DEFAULT_VIEWPORT: (i32, i32) = (1280, 720);
