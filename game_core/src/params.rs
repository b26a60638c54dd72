/// Game tuning parameters for Pong
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Field
    pub const FIELD_WIDTH: f32 = 800.0;
    pub const FIELD_HEIGHT: f32 = 400.0;

    // Paddle
    pub const PADDLE_WIDTH: f32 = 10.0;
    pub const PADDLE_HEIGHT: f32 = 80.0;
    pub const PADDLE_OFFSET: f32 = 20.0; // Gap between field edge and paddle
    pub const PADDLE_SPEED: f32 = 10.0; // units per tick
    pub const AI_SPEED: f32 = 4.0; // units per tick, slower than the player

    // Ball
    pub const BALL_SIZE: f32 = 20.0;
    pub const BALL_SPEED: f32 = 5.0; // per axis, units per tick

    // Loop
    pub const TICK_INTERVAL_MS: u64 = 16; // ~60 Hz
}
