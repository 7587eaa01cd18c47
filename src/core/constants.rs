// Logical drawing surface (canvas units)
pub const SURFACE_WIDTH: u32 = 288;
pub const SURFACE_HEIGHT: u32 = 512;

// Bird kinematics
pub const BIRD_START_X: i32 = 10;
pub const BIRD_START_Y: f64 = 150.0;
pub const GRAVITY: f64 = 0.15;
pub const FLAP_VELOCITY: f64 = -6.0;

// Pipes
pub const PIPE_GAP: u32 = 200;
pub const MIN_PIPE_HEIGHT: u32 = 50;
pub const PIPE_STEP: i32 = 1;
/// A new pair spawns once the newest one is this many pipe widths in from the right edge.
pub const PIPE_SPACING_FACTOR: u32 = 3;

// Foreground scroll
pub const FOREGROUND_STEP: i32 = 1;

// Bird tilt (radians) = min(velocity / TILT_DIVISOR, MAX_TILT)
pub const TILT_DIVISOR: f64 = 10.0;
pub const MAX_TILT: f64 = 1.0;

// Timing
pub const REALTIME_FRAME_MS: u64 = 16; // ~60 FPS
pub const IDLE_POLL_MS: u64 = 250;
pub const ASSET_TIMEOUT_SECONDS: u64 = 5;
