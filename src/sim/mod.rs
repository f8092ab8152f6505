//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One tick per host frame, velocities in units per tick
//! - Seeded RNG only
//! - Stable iteration order (column-major brick scan)
//! - No rendering or platform dependencies; the physics engine is reached
//!   only through [`ContactOracle`]

pub mod bricks;
pub mod contact;
pub mod geometry;
pub mod launch;
pub mod motion;
pub mod state;
pub mod tick;

pub use bricks::resolve_brick_collisions;
pub use contact::{ContactOracle, apply_paddle_contact, step_contact, sync_mirror};
pub use geometry::{Circle, Rect, Side, SideHit, circle_rect_overlap, clamp, lerp, resolve_side};
pub use launch::aim_and_launch;
pub use motion::{BallStep, update_ball, update_paddle};
pub use state::{
    Ball, BrickGrid, BrickLayout, BrickStatus, GamePhase, GameState, Paddle, SessionEnd, Shake,
};
pub use tick::{TickInput, TickOutcome, tick};
