//! Game state and core simulation types
//!
//! Everything a tick reads or writes lives in [`GameState`]; there are no
//! module-level globals, so a state can be driven headless in tests.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::geometry::{Circle, Rect};
use crate::consts::SHAKE_REST_THRESHOLD;
use crate::settings::Tuning;

/// Current phase of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Ball rides on the paddle, waiting for an aim event
    Serve,
    /// Ball moves freely
    Playing,
    /// Session ended; the host decides how to restart
    Finished(SessionEnd),
}

/// Why a session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// Last life lost
    Lost,
    /// Every brick destroyed
    Won,
}

impl SessionEnd {
    /// User-facing end-of-session message
    pub fn message(self, score: u32) -> String {
        match self {
            SessionEnd::Lost => format!("Game Over! Final score: {score}"),
            SessionEnd::Won => format!("Congratulations! Final score: {score}"),
        }
    }
}

/// Transient decaying offset, purely visual
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Shake {
    pub offset: f32,
    pub intensity: f32,
    /// Multiplier applied to intensity each step, in (0, 1)
    pub decay: f32,
}

impl Shake {
    pub fn new(decay: f32) -> Self {
        Self {
            offset: 0.0,
            intensity: 0.0,
            decay,
        }
    }

    /// Kick the shake to a fixed intensity
    pub fn trigger(&mut self, intensity: f32) {
        self.intensity = intensity;
    }

    pub fn is_active(&self) -> bool {
        self.intensity > 0.0
    }

    /// One decay step.
    ///
    /// `jitter` is a sample in [-0.5, 0.5]; the offset becomes
    /// `jitter * intensity` before the intensity decays. Once the intensity
    /// drops below the rest threshold both fields snap to zero.
    pub fn step(&mut self, jitter: f32) {
        if self.intensity <= 0.0 {
            return;
        }
        self.offset = jitter * self.intensity;
        self.intensity *= self.decay;
        if self.intensity < SHAKE_REST_THRESHOLD {
            self.clear();
        }
    }

    pub fn clear(&mut self) {
        self.intensity = 0.0;
        self.offset = 0.0;
    }
}

/// The ball
#[derive(Debug, Clone, PartialEq)]
pub struct Ball {
    /// Visible (smoothed) position
    pub pos: Vec2,
    /// Velocity in units per tick
    pub vel: Vec2,
    /// Kinematic position the visible position lags toward
    pub target: Vec2,
    pub radius: f32,
    pub max_speed: f32,
    /// Fraction of the gap to the target closed each tick, in (0, 1]
    pub smooth_factor: f32,
    pub shake: Shake,
}

impl Ball {
    pub fn new(pos: Vec2, tuning: &Tuning) -> Self {
        Self {
            pos,
            vel: Vec2::ZERO,
            target: pos,
            radius: tuning.ball_radius,
            max_speed: tuning.ball_max_speed,
            smooth_factor: tuning.ball_smooth_factor,
            shake: Shake::new(tuning.ball_shake_decay),
        }
    }

    pub fn circle(&self) -> Circle {
        Circle::new(self.pos, self.radius)
    }

    pub fn speed(&self) -> f32 {
        self.vel.length()
    }
}

/// The player's paddle
#[derive(Debug, Clone, PartialEq)]
pub struct Paddle {
    /// Left edge
    pub x: f32,
    /// Top edge (fixed)
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub shake: Shake,
}

impl Paddle {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            x: (tuning.arena_width - tuning.paddle_width) / 2.0,
            y: tuning.paddle_y(),
            width: tuning.paddle_width,
            height: tuning.paddle_height,
            shake: Shake::new(tuning.paddle_shake_decay),
        }
    }

    pub fn center_x(&self) -> f32 {
        self.x + self.width / 2.0
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    /// Where the ball sits while riding the paddle
    pub fn rest_point(&self, ball_radius: f32) -> Vec2 {
        Vec2::new(self.center_x(), self.y - ball_radius)
    }
}

/// Brick status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrickStatus {
    Alive,
    Destroyed,
}

/// Placement of the brick grid in arena space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BrickLayout {
    pub rows: usize,
    pub columns: usize,
    pub width: f32,
    pub height: f32,
    pub padding: f32,
    pub offset_top: f32,
    pub offset_left: f32,
}

impl BrickLayout {
    pub fn from_tuning(tuning: &Tuning) -> Self {
        Self {
            rows: tuning.brick_rows,
            columns: tuning.brick_columns,
            width: tuning.brick_width,
            height: tuning.brick_height,
            padding: tuning.brick_padding,
            offset_top: tuning.brick_offset_top,
            offset_left: tuning.brick_offset_left,
        }
    }

    /// Screen rectangle of the brick at (column, row)
    pub fn rect(&self, column: usize, row: usize) -> Rect {
        Rect::new(
            column as f32 * (self.width + self.padding) + self.offset_left,
            row as f32 * (self.height + self.padding) + self.offset_top,
            self.width,
            self.height,
        )
    }
}

/// Fixed rows x columns brick matrix, stored column-major
#[derive(Debug, Clone, PartialEq)]
pub struct BrickGrid {
    pub layout: BrickLayout,
    cells: Vec<BrickStatus>,
}

impl BrickGrid {
    pub fn new(layout: BrickLayout) -> Self {
        Self {
            layout,
            cells: vec![BrickStatus::Alive; layout.rows * layout.columns],
        }
    }

    fn index(&self, column: usize, row: usize) -> Option<usize> {
        (column < self.layout.columns && row < self.layout.rows)
            .then(|| column * self.layout.rows + row)
    }

    /// Status at (column, row); `None` outside the grid
    pub fn status(&self, column: usize, row: usize) -> Option<BrickStatus> {
        self.index(column, row).map(|i| self.cells[i])
    }

    /// Mark a brick destroyed. Returns true if it was alive.
    pub fn destroy(&mut self, column: usize, row: usize) -> bool {
        match self.index(column, row) {
            Some(i) if self.cells[i] == BrickStatus::Alive => {
                self.cells[i] = BrickStatus::Destroyed;
                true
            }
            _ => false,
        }
    }

    pub fn rect(&self, column: usize, row: usize) -> Option<Rect> {
        self.index(column, row)
            .map(|_| self.layout.rect(column, row))
    }

    /// Alive bricks in scan order (column-major, row-minor) with their rects
    pub fn alive(&self) -> impl Iterator<Item = (usize, usize, Rect)> + '_ {
        let rows = self.layout.rows;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, status)| **status == BrickStatus::Alive)
            .map(move |(i, _)| {
                let (column, row) = (i / rows, i % rows);
                (column, row, self.layout.rect(column, row))
            })
    }

    pub fn total(&self) -> usize {
        self.cells.len()
    }

    pub fn alive_count(&self) -> usize {
        self.cells
            .iter()
            .filter(|s| **s == BrickStatus::Alive)
            .count()
    }

    pub fn all_destroyed(&self) -> bool {
        self.alive_count() == 0
    }
}

/// Complete game state (deterministic for a given seed and input stream)
#[derive(Debug, Clone)]
pub struct GameState {
    /// Shake jitter source
    pub rng: Pcg32,
    pub tuning: Tuning,
    pub phase: GamePhase,
    pub score: u32,
    pub lives: u8,
    /// Simulation tick counter
    pub time_ticks: u64,
    pub ball: Ball,
    pub paddle: Paddle,
    pub bricks: BrickGrid,
}

impl GameState {
    /// Create a new game state with default tuning
    pub fn new(seed: u64) -> Self {
        Self::with_tuning(seed, Tuning::default())
    }

    pub fn with_tuning(seed: u64, tuning: Tuning) -> Self {
        let arena_center = Vec2::new(tuning.arena_width / 2.0, tuning.arena_height / 2.0);
        Self {
            rng: Pcg32::seed_from_u64(seed),
            phase: GamePhase::Serve,
            score: 0,
            lives: tuning.lives,
            time_ticks: 0,
            ball: Ball::new(arena_center, &tuning),
            paddle: Paddle::new(&tuning),
            bricks: BrickGrid::new(BrickLayout::from_tuning(&tuning)),
            tuning,
        }
    }

    /// Whether the ball moves freely
    pub fn launched(&self) -> bool {
        self.phase == GamePhase::Playing
    }

    pub fn is_finished(&self) -> bool {
        matches!(self.phase, GamePhase::Finished(_))
    }

    /// Put the ball back on the paddle after a lost life
    pub fn reset_ball(&mut self) {
        let rest = self.paddle.rest_point(self.ball.radius);
        self.ball.pos = rest;
        self.ball.target = rest;
        self.ball.vel = Vec2::ZERO;
        self.ball.shake.clear();
        self.phase = GamePhase::Serve;
    }
}
