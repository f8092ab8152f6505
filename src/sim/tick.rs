//! Per-frame simulation tick
//!
//! Order within a tick is fixed: aim input, ball integration, paddle
//! integration, mirror sync and oracle step (with the contact rewrite),
//! brick collisions, terminal checks. The host draws before calling
//! [`tick`], so a frame always shows the state from the previous tick.

use glam::Vec2;

use super::bricks::resolve_brick_collisions;
use super::contact::{ContactOracle, step_contact, sync_mirror};
use super::launch::aim_and_launch;
use super::motion::{BallStep, update_ball, update_paddle};
use super::state::{GamePhase, GameState, SessionEnd};

/// Input sampled for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Latest pointer position in logical arena coordinates
    pub pointer: Vec2,
    /// One-shot aim point (click or first touch)
    pub aim: Option<Vec2>,
}

/// Result of a tick, for the host to act on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Nothing for the host to do
    Continue,
    /// Ball dropped, lives remain; ball is back on the paddle
    LifeLost { lives: u8 },
    /// Session just ended. Reported once; later ticks return `Halted`.
    Ended { reason: SessionEnd, score: u32 },
    /// Session already ended, state left untouched
    Halted,
}

/// Advance the game state by one frame
pub fn tick(
    state: &mut GameState,
    input: &TickInput,
    oracle: &mut dyn ContactOracle,
) -> TickOutcome {
    if state.is_finished() {
        return TickOutcome::Halted;
    }

    if let Some(aim) = input.aim {
        aim_and_launch(state, aim);
    }

    state.time_ticks += 1;

    let ball_step = update_ball(state);
    let mut outcome = TickOutcome::Continue;

    if ball_step == BallStep::Dropped {
        state.lives = state.lives.saturating_sub(1);
        if state.lives == 0 {
            return finish(state, SessionEnd::Lost);
        }
        log::info!("Ball lost, {} lives left", state.lives);
        state.reset_ball();
        outcome = TickOutcome::LifeLost { lives: state.lives };
    }

    update_paddle(state, input.pointer.x);

    sync_mirror(state, oracle);
    step_contact(state, oracle);

    if ball_step != BallStep::Dropped {
        resolve_brick_collisions(state);
    }

    if state.bricks.all_destroyed() {
        return finish(state, SessionEnd::Won);
    }

    outcome
}

fn finish(state: &mut GameState, reason: SessionEnd) -> TickOutcome {
    state.phase = GamePhase::Finished(reason);
    log::info!("{}", reason.message(state.score));
    TickOutcome::Ended {
        reason,
        score: state.score,
    }
}
