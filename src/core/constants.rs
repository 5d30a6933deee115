// Tick and timing
pub const TICK_RATE: u32 = 30;
pub const SCROLL_SPEED: f32 = 6.0;

// View
pub const VIEW_WIDTH: f32 = 288.0;
pub const VIEW_HEIGHT: f32 = 512.0;

// Obstacle generation
pub const MIN_PIPE_LEN: i32 = 75;
pub const MIN_DISTANCE: i32 = 85;
pub const SPAWN_JITTER: i32 = 50;
pub const GAP_MIN: i32 = 75;
pub const GAP_MAX: i32 = 110;

// Player body
pub const HITBOX_LENIENCE: f32 = 1.8;
pub const FALL_SPEED_FACTOR: f32 = 4.0;
pub const IDLE_ROTATION_STEP: i32 = 4;
pub const MAX_IDLE_ROTATION: i32 = 40;
pub const FLAP_ANIM_TICKS: u32 = 6;

// Player spawn point as fractions of the view (x = width/5, y = height/2)
pub const SPAWN_X_DIVISOR: f32 = 5.0;
pub const SPAWN_Y_DIVISOR: f32 = 2.0;

// Score layout (presentation)
pub const SCORE_DIGIT_MARGIN: f32 = 4.0;
pub const SCORE_Y_DIVISOR: f32 = 6.0;
