//! Ball/paddle contact bridge
//!
//! The authoritative ball and paddle live in [`GameState`]. A physics engine
//! is used only as a contact oracle: both bodies are mirrored into it every
//! tick, it is stepped once, and a contact-begin signal triggers the
//! reactive velocity rewrite below. Nothing else it computes is read back.

use std::f32::consts::FRAC_PI_3;

use glam::Vec2;

use super::state::GameState;

/// Minimal surface of an external physics engine
pub trait ContactOracle {
    /// Overwrite the mirrored ball body (center position, units-per-tick velocity)
    fn sync_ball(&mut self, pos: Vec2, vel: Vec2);

    /// Overwrite the mirrored paddle body (center position, no velocity)
    fn sync_paddle(&mut self, center: Vec2);

    /// Advance the engine one step. Returns true if a ball/paddle contact
    /// began during this step.
    fn step(&mut self) -> bool;
}

/// Push the authoritative ball and paddle into the oracle
pub fn sync_mirror(state: &GameState, oracle: &mut dyn ContactOracle) {
    let vel = if state.launched() {
        state.ball.vel
    } else {
        Vec2::ZERO
    };
    oracle.sync_ball(state.ball.pos, vel);
    oracle.sync_paddle(state.paddle.rect().center());
}

/// Step the oracle and apply the paddle bounce if contact began.
///
/// A contact while serving is ignored: the ball is resting on the paddle.
/// Returns true when a contact was handled.
pub fn step_contact(state: &mut GameState, oracle: &mut dyn ContactOracle) -> bool {
    if !oracle.step() || !state.launched() {
        return false;
    }

    apply_paddle_contact(state);
    oracle.sync_ball(state.ball.pos, state.ball.vel);
    true
}

/// Redirect the ball off the paddle.
///
/// The normalized hit offset across the paddle (0 = left edge, 1 = right
/// edge) maps to an angle in [-30°, 30°] from vertical. Speed is preserved
/// and the ball always leaves upward.
pub fn apply_paddle_contact(state: &mut GameState) {
    let paddle = &mut state.paddle;
    let ball = &mut state.ball;

    paddle.shake.trigger(state.tuning.paddle_contact_shake);

    let hit_pos = (ball.pos.x - paddle.x) / paddle.width;
    let angle = (hit_pos - 0.5) * FRAC_PI_3;
    let speed = ball.vel.length();

    ball.vel = Vec2::new(angle.sin() * speed, -(angle.cos() * speed).abs());

    log::debug!(
        "Paddle contact at {:.2}, angle {:.1} deg, speed {:.2}",
        hit_pos,
        angle.to_degrees(),
        speed
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::GamePhase;

    /// Records mirror writes and reports a scripted contact
    #[derive(Default)]
    struct Recorder {
        ball: Option<(Vec2, Vec2)>,
        paddle: Option<Vec2>,
        contact: bool,
    }

    impl ContactOracle for Recorder {
        fn sync_ball(&mut self, pos: Vec2, vel: Vec2) {
            self.ball = Some((pos, vel));
        }

        fn sync_paddle(&mut self, center: Vec2) {
            self.paddle = Some(center);
        }

        fn step(&mut self) -> bool {
            std::mem::take(&mut self.contact)
        }
    }

    fn landing_state(ball_x: f32) -> GameState {
        let mut state = GameState::new(11);
        state.phase = GamePhase::Playing;
        state.ball.pos = Vec2::new(ball_x, 570.0);
        state.ball.vel = Vec2::new(3.0, 4.0);
        state
    }

    #[test]
    fn test_center_hit_goes_straight_up() {
        let mut state = landing_state(400.0);
        apply_paddle_contact(&mut state);
        assert!(state.ball.vel.x.abs() < 1e-5);
        assert!((state.ball.vel.y + 5.0).abs() < 1e-5);
        assert_eq!(state.paddle.shake.intensity, 3.0);
    }

    #[test]
    fn test_edge_hits_deflect_thirty_degrees() {
        let mut state = landing_state(350.0);
        apply_paddle_contact(&mut state);
        let angle = state.ball.vel.x.atan2(-state.ball.vel.y).to_degrees();
        assert!((angle + 30.0).abs() < 1e-3);

        let mut state = landing_state(450.0);
        apply_paddle_contact(&mut state);
        let angle = state.ball.vel.x.atan2(-state.ball.vel.y).to_degrees();
        assert!((angle - 30.0).abs() < 1e-3);
        assert!((state.ball.speed() - 5.0).abs() < 1e-4);
    }

    #[test]
    fn test_always_leaves_upward() {
        for x in [300.0, 350.0, 375.0, 400.0, 425.0, 450.0, 500.0] {
            let mut state = landing_state(x);
            state.ball.vel = Vec2::new(-2.0, -6.0);
            apply_paddle_contact(&mut state);
            assert!(state.ball.vel.y <= 0.0, "x = {x}");
        }
    }

    #[test]
    fn test_mirror_velocity_zero_while_serving() {
        let mut state = GameState::new(11);
        state.ball.vel = Vec2::new(1.0, 1.0);
        let mut oracle = Recorder::default();
        sync_mirror(&state, &mut oracle);
        assert_eq!(oracle.ball, Some((state.ball.pos, Vec2::ZERO)));
        assert_eq!(oracle.paddle, Some(Vec2::new(400.0, 587.5)));

        state.phase = GamePhase::Playing;
        sync_mirror(&state, &mut oracle);
        assert_eq!(oracle.ball, Some((state.ball.pos, Vec2::new(1.0, 1.0))));
    }

    #[test]
    fn test_step_contact_rewrites_mirror() {
        let mut state = landing_state(400.0);
        let mut oracle = Recorder::default();

        assert!(!step_contact(&mut state, &mut oracle));
        assert_eq!(state.ball.vel, Vec2::new(3.0, 4.0));

        oracle.contact = true;
        assert!(step_contact(&mut state, &mut oracle));
        let (_, mirrored_vel) = oracle.ball.unwrap();
        assert_eq!(mirrored_vel, state.ball.vel);
        assert!(state.ball.vel.y < 0.0);
    }

    #[test]
    fn test_contact_while_serving_is_ignored() {
        let mut state = GameState::new(11);
        let rest = state.paddle.rest_point(state.ball.radius);
        state.ball.pos = rest;
        state.ball.target = rest;
        let mut oracle = Recorder {
            contact: true,
            ..Recorder::default()
        };

        assert!(!step_contact(&mut state, &mut oracle));
        assert_eq!(state.ball.vel, Vec2::ZERO);
        assert!(!state.paddle.shake.is_active());
        assert!(!oracle.contact);
    }
}
