/// Tuning parameters for the gravity flip and paddle demos
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Gravity flip
    pub const GRAVITY_Y: f32 = -9.81;
    pub const MAX_INTERPOLATION_TIME: f32 = 2.5; // seconds, gives a slow slerp
    pub const INTERPOLATION_STEP: f32 = 0.01; // added once per tick, not scaled by dt
    pub const SLERP_CUTOFF_RATIO: f32 = 0.7;
    pub const SAVE_ORIENTATION_DELAY: f32 = 1.2;
    pub const ALIGNMENT_EPSILON: f32 = 0.0; // 0 = exact comparison

    // Paddle
    pub const PADDLE_IMPULSE: f32 = 1.0;
    pub const PADDLE_SPEED_CAP: f32 = 30.0;
    pub const PADDLE_HALF_WIDTH: f32 = 0.25;
    pub const PADDLE_HALF_HEIGHT: f32 = 1.0;

    // Projectile
    pub const MAX_PROJECTILES: usize = 5; // live, per player
    pub const FIRE_RATE: f32 = 1.0; // seconds between shots
    pub const PROJECTILE_IMPULSE: f32 = 10.0;
    pub const INHERITED_VELOCITY_FACTOR: f32 = 0.5;
    pub const HEADING_BLEND: f32 = 0.5; // per tick, not time normalised
    pub const SPAWN_OFFSET: f32 = 0.75;
    pub const PROJECTILE_HALF_WIDTH: f32 = 0.3;
    pub const PROJECTILE_HALF_HEIGHT: f32 = 0.15;

    // Physics
    pub const FIXED_DT: f32 = 0.02; // 50 Hz
    pub const MAX_DT: f32 = 0.1; // Clamp to prevent large jumps
}
