//! Serve-to-play transition

use glam::Vec2;

use super::state::{GamePhase, GameState};

/// Launch the ball toward an aim point.
///
/// Only acts while serving. Velocity is the unit vector from the ball to
/// the aim point scaled to the launch speed, and the target is placed one
/// step ahead so the next tick sees a consistent delta. An aim point on
/// top of the ball is ignored. Returns true if the ball was launched.
pub fn aim_and_launch(state: &mut GameState, aim: Vec2) -> bool {
    if state.phase != GamePhase::Serve {
        return false;
    }

    let delta = aim - state.ball.pos;
    let distance = delta.length();
    if distance <= f32::EPSILON || !distance.is_finite() {
        log::debug!("Ignoring zero-length aim at {aim}");
        return false;
    }

    let ball = &mut state.ball;
    ball.vel = delta / distance * state.tuning.launch_speed;
    ball.target = ball.pos + ball.vel;
    state.phase = GamePhase::Playing;

    log::debug!("Launched toward {aim} with velocity {}", state.ball.vel);
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_launch_straight_up() {
        let mut state = GameState::new(5);
        state.ball.pos = Vec2::new(400.0, 500.0);
        assert!(aim_and_launch(&mut state, Vec2::new(400.0, 0.0)));
        assert!((state.ball.vel - Vec2::new(0.0, -5.0)).length() < 1e-5);
        assert_eq!(state.ball.target, state.ball.pos + state.ball.vel);
        assert!(state.launched());
    }

    #[test]
    fn test_launch_diagonal_has_launch_speed() {
        let mut state = GameState::new(5);
        state.ball.pos = Vec2::new(400.0, 500.0);
        assert!(aim_and_launch(&mut state, Vec2::new(700.0, 100.0)));
        assert!((state.ball.speed() - 5.0).abs() < 1e-4);
        assert!(state.ball.vel.x > 0.0 && state.ball.vel.y < 0.0);
    }

    #[test]
    fn test_zero_length_aim_is_ignored() {
        let mut state = GameState::new(5);
        let pos = state.ball.pos;
        assert!(!aim_and_launch(&mut state, pos));
        assert_eq!(state.ball.vel, Vec2::ZERO);
        assert!(!state.launched());
        assert!(!state.ball.vel.x.is_nan());
    }

    #[test]
    fn test_aim_ignored_while_playing() {
        let mut state = GameState::new(5);
        assert!(aim_and_launch(&mut state, Vec2::new(400.0, 0.0)));
        let vel = state.ball.vel;
        assert!(!aim_and_launch(&mut state, Vec2::new(0.0, 300.0)));
        assert_eq!(state.ball.vel, vel);
    }
}
