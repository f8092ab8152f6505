//! Per-tick motion integration for the ball and paddle
//!
//! The ball keeps two positions: a kinematic target advanced by velocity,
//! and a visible position that lags toward it through exponential
//! smoothing. Wall reflection is decided on the target.

use glam::Vec2;
use rand::Rng;

use super::geometry::{clamp, lerp};
use super::state::{GamePhase, GameState};

/// What happened to the ball during integration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BallStep {
    /// Ball is riding the paddle
    Riding,
    /// Ball moved freely and is still in play
    Moved,
    /// Ball fell past the bottom of the arena
    Dropped,
}

/// Jitter sample in [-0.5, 0.5]
fn jitter(rng: &mut impl Rng) -> f32 {
    rng.random::<f32>() - 0.5
}

/// Advance the ball by one tick
pub fn update_ball(state: &mut GameState) -> BallStep {
    if state.phase != GamePhase::Playing {
        follow_paddle(state);
        return BallStep::Riding;
    }

    let arena_width = state.tuning.arena_width;
    let arena_height = state.tuning.arena_height;
    let wall_shake = state.tuning.wall_shake;
    let ball = &mut state.ball;

    ball.target += ball.vel;

    let speed = ball.vel.length();
    if speed > ball.max_speed {
        ball.vel = ball.vel / speed * ball.max_speed;
    }

    ball.pos.x = lerp(ball.pos.x, ball.target.x, ball.smooth_factor);
    ball.pos.y = lerp(ball.pos.y, ball.target.y, ball.smooth_factor);

    // Side walls
    if ball.target.x + ball.radius > arena_width || ball.target.x - ball.radius < 0.0 {
        ball.vel.x = -ball.vel.x;
        ball.shake.trigger(wall_shake);
        ball.target.x = clamp(ball.target.x, ball.radius, arena_width - ball.radius);
    }

    // Ceiling; the floor is open
    if ball.target.y - ball.radius < 0.0 {
        ball.vel.y = -ball.vel.y;
        ball.shake.trigger(wall_shake);
        ball.target.y = ball.target.y.max(ball.radius);
    }

    if ball.pos.y > arena_height {
        return BallStep::Dropped;
    }

    let sample = jitter(&mut state.rng);
    state.ball.shake.step(sample);

    BallStep::Moved
}

/// Ball rides just above the paddle center while waiting for launch
fn follow_paddle(state: &mut GameState) {
    let follow = state.tuning.follow_factor;
    let rest = state.paddle.rest_point(state.ball.radius);
    let ball = &mut state.ball;

    ball.target = rest;
    ball.pos.x = lerp(ball.pos.x, rest.x, follow);
    ball.pos.y = lerp(ball.pos.y, rest.y, follow);
    ball.vel = Vec2::ZERO;
}

/// Move the paddle toward the pointer and decay its shake
pub fn update_paddle(state: &mut GameState, pointer_x: f32) {
    let max_x = state.tuning.arena_width - state.paddle.width;
    let follow = state.tuning.follow_factor;
    let paddle = &mut state.paddle;

    let target_x = pointer_x - paddle.width / 2.0;
    // Hard clamp first, then ease from the clamped value toward the raw
    // target; the final clamp keeps x inside the arena when the raw target
    // lies outside it.
    paddle.x = clamp(target_x, 0.0, max_x);
    paddle.x = lerp(paddle.x, target_x, follow);
    paddle.x = clamp(paddle.x, 0.0, max_x);

    if paddle.shake.is_active() {
        let sample = jitter(&mut state.rng);
        state.paddle.shake.step(sample);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn playing(pos: Vec2, vel: Vec2) -> GameState {
        let mut state = GameState::new(7);
        state.phase = GamePhase::Playing;
        state.ball.pos = pos;
        state.ball.target = pos;
        state.ball.vel = vel;
        state
    }

    #[test]
    fn test_target_accumulates_and_position_lags() {
        let mut state = playing(Vec2::new(400.0, 300.0), Vec2::new(0.0, -5.0));
        assert_eq!(update_ball(&mut state), BallStep::Moved);
        assert_eq!(state.ball.target, Vec2::new(400.0, 295.0));
        // 15% of the 5-unit gap
        assert!((state.ball.pos.y - 299.25).abs() < 1e-4);
    }

    #[test]
    fn test_speed_is_clamped() {
        let mut state = playing(Vec2::new(400.0, 300.0), Vec2::new(30.0, 40.0));
        update_ball(&mut state);
        assert!((state.ball.speed() - 8.0).abs() < 1e-4);
        // Direction preserved
        assert!((state.ball.vel.x / state.ball.vel.y - 0.75).abs() < 1e-4);
    }

    #[test]
    fn test_left_wall_bounce() {
        let mut state = playing(Vec2::new(2.0, 300.0), Vec2::new(-3.0, 0.0));
        update_ball(&mut state);
        assert!(state.ball.vel.x > 0.0);
        assert!(state.ball.target.x >= 15.0);
        assert!(state.ball.shake.intensity > 0.0);
    }

    #[test]
    fn test_ceiling_bounce() {
        let mut state = playing(Vec2::new(400.0, 16.0), Vec2::new(1.0, -4.0));
        update_ball(&mut state);
        assert_eq!(state.ball.vel.y, 4.0);
        assert_eq!(state.ball.target.y, 15.0);
    }

    #[test]
    fn test_no_floor_bounce() {
        let mut state = playing(Vec2::new(400.0, 601.0), Vec2::new(0.0, 4.0));
        assert_eq!(update_ball(&mut state), BallStep::Dropped);
        assert_eq!(state.ball.vel.y, 4.0);
    }

    #[test]
    fn test_idle_ball_follows_paddle() {
        let mut state = GameState::new(7);
        state.ball.vel = Vec2::new(1.0, 1.0);
        assert_eq!(update_ball(&mut state), BallStep::Riding);
        assert_eq!(state.ball.target, Vec2::new(400.0, 565.0));
        assert_eq!(state.ball.vel, Vec2::ZERO);
        // 30% of the way from (400, 300)
        assert!((state.ball.pos.y - (300.0 + 265.0 * 0.3)).abs() < 1e-3);
    }

    #[test]
    fn test_paddle_tracks_pointer() {
        let mut state = GameState::new(7);
        update_paddle(&mut state, 200.0);
        assert_eq!(state.paddle.x, 150.0);
    }

    #[test]
    fn test_paddle_stays_in_arena() {
        let mut state = GameState::new(7);
        update_paddle(&mut state, 5000.0);
        assert_eq!(state.paddle.x, 700.0);
        update_paddle(&mut state, -5000.0);
        assert_eq!(state.paddle.x, 0.0);
    }

    #[test]
    fn test_paddle_shake_decays() {
        let mut state = GameState::new(7);
        state.paddle.shake.trigger(3.0);
        update_paddle(&mut state, 400.0);
        assert!((state.paddle.shake.intensity - 2.7).abs() < 1e-5);
        assert!(state.paddle.shake.offset.abs() <= 1.5);
    }
}
