//! Brick Breaker - a single-screen ball-and-paddle arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (motion, collisions, game state)
//! - `physics`: rapier2d-backed contact oracle for the ball/paddle pair
//! - `renderer`: Drawing-surface abstraction and frame composition
//! - `settings`: Tuning and display preferences

pub mod physics;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use physics::RapierContactOracle;
pub use settings::{Settings, SettingsError, Tuning};

/// Game configuration constants
pub mod consts {
    /// Logical arena dimensions (all gameplay math happens in this space)
    pub const ARENA_WIDTH: f32 = 800.0;
    pub const ARENA_HEIGHT: f32 = 600.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 15.0;
    pub const BALL_MAX_SPEED: f32 = 8.0;
    /// Fraction of the gap to the target covered each tick (smaller = softer)
    pub const BALL_SMOOTH_FACTOR: f32 = 0.15;
    pub const BALL_SHAKE_DECAY: f32 = 0.85;
    /// Shake kick applied on a wall bounce
    pub const WALL_SHAKE: f32 = 2.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 100.0;
    pub const PADDLE_HEIGHT: f32 = 15.0;
    /// Gap between the paddle's bottom edge and the arena floor
    pub const PADDLE_BOTTOM_GAP: f32 = 5.0;
    pub const PADDLE_SHAKE_DECAY: f32 = 0.9;
    /// Shake kick applied when the ball lands on the paddle
    pub const PADDLE_CONTACT_SHAKE: f32 = 3.0;

    /// Smoothing used for the paddle and for the ball riding on it
    pub const FOLLOW_FACTOR: f32 = 0.3;

    /// Launch speed (units per tick)
    pub const LAUNCH_SPEED: f32 = 5.0;
    pub const STARTING_LIVES: u8 = 3;

    /// Brick grid
    pub const BRICK_ROWS: usize = 5;
    pub const BRICK_COLUMNS: usize = 9;
    pub const BRICK_WIDTH: f32 = 75.0;
    pub const BRICK_HEIGHT: f32 = 20.0;
    pub const BRICK_PADDING: f32 = 10.0;
    pub const BRICK_OFFSET_TOP: f32 = 60.0;
    pub const BRICK_OFFSET_LEFT: f32 = 30.0;

    /// Host frame rate the per-tick velocities are tuned for
    pub const TICKS_PER_SECOND: f32 = 60.0;

    /// Intensity below which a shake snaps to rest
    pub const SHAKE_REST_THRESHOLD: f32 = 0.1;
}
