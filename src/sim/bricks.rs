//! Ball-vs-brick collision response
//!
//! The grid is scanned once per tick in column-major order. Each overlapping
//! alive brick is resolved on its own: bounce axis from the shallowest side,
//! brick destroyed, ball pushed clear of the brick edge with a 1-unit margin.

use super::geometry::{Side, circle_rect_overlap, resolve_side};
use super::state::{BrickStatus, GameState};

/// Clearance kept between the ball and a brick edge after a hit
const CLEARANCE: f32 = 1.0;

/// Resolve every brick the ball currently overlaps.
///
/// Returns the number of bricks destroyed this tick.
pub fn resolve_brick_collisions(state: &mut GameState) -> u32 {
    let layout = state.bricks.layout;
    let mut hits = 0;

    for column in 0..layout.columns {
        for row in 0..layout.rows {
            if state.bricks.status(column, row) != Some(BrickStatus::Alive) {
                continue;
            }
            let rect = layout.rect(column, row);
            if !circle_rect_overlap(&state.ball.circle(), &rect) {
                continue;
            }

            let ball = &mut state.ball;
            let hit = resolve_side(&ball.circle(), &rect);

            if hit.side.is_horizontal() {
                ball.vel.x = -ball.vel.x;
                ball.target.x = ball.pos.x;
            } else {
                ball.vel.y = -ball.vel.y;
                ball.target.y = ball.pos.y;
            }

            match hit.side {
                Side::Left => {
                    ball.pos.x = rect.x - ball.radius - CLEARANCE;
                    ball.target.x = ball.pos.x;
                }
                Side::Right => {
                    ball.pos.x = rect.right() + ball.radius + CLEARANCE;
                    ball.target.x = ball.pos.x;
                }
                Side::Top => {
                    ball.pos.y = rect.y - ball.radius - CLEARANCE;
                    ball.target.y = ball.pos.y;
                }
                Side::Bottom => {
                    ball.pos.y = rect.bottom() + ball.radius + CLEARANCE;
                    ball.target.y = ball.pos.y;
                }
            }

            state.bricks.destroy(column, row);
            state.score += 1;
            hits += 1;
            log::debug!(
                "Brick ({column}, {row}) hit on {:?} side, score {}",
                hit.side,
                state.score
            );
        }
    }

    hits
}
