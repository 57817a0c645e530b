// Tick and timing
pub const TICK_INTERVAL_MS: u64 = 17; // ~60 iterations per second

// Bird physics (world units per tick)
pub const GRAVITY: f64 = 0.8;
pub const JUMP_IMPULSE: f64 = -15.0;

// Pipes
pub const PIPE_COUNT: usize = 3;
pub const PIPE_SPEED: i32 = 10;

// Viewport-relative geometry: each value is `dimension / divisor`
pub const BIRD_X_DIVISOR: u32 = 4;
pub const BIRD_Y_DIVISOR: u32 = 2;
pub const BIRD_RADIUS_DIVISOR: u32 = 15;
pub const PIPE_WIDTH_DIVISOR: u32 = 6;
pub const PIPE_GAP_DIVISOR: u32 = 4;
pub const GAP_TOP_MIN_DIVISOR: u32 = 6;
pub const GAP_TOP_SPREAD_DIVISOR: u32 = 2;

// Smallest viewport that still yields a non-zero bird radius, pipe width and
// gap spread.
pub const MIN_VIEWPORT_WIDTH: u32 = BIRD_RADIUS_DIVISOR;
pub const MIN_VIEWPORT_HEIGHT: u32 = PIPE_GAP_DIVISOR * 2;

// Largest viewport whose pipe layout (last pipe ends near 2.5x width) and gap
// range stay well inside i32.
pub const MAX_VIEWPORT_WIDTH: u32 = 100_000_000;
pub const MAX_VIEWPORT_HEIGHT: u32 = 100_000_000;

// Default world size for the terminal host
pub const DEFAULT_VIEWPORT_WIDTH: u32 = 480;
pub const DEFAULT_VIEWPORT_HEIGHT: u32 = 640;

// Overlay text
pub const WAITING_PROMPT: &str = "Tap to Play";
pub const GAME_OVER_TITLE: &str = "Game Over";
pub const RESTART_PROMPT: &str = "Tap to Restart";
