//! Frame composition: bricks, ball, paddle, launch preview, HUD

use glam::Vec2;
use std::f32::consts::FRAC_PI_6;

use super::{Canvas, LineStyle};
use crate::settings::Settings;
use crate::sim::{GameState, Shake};

const BRICK_COLOR: &str = "#0095DD";
const BALL_COLOR: &str = "blue";
const PADDLE_COLOR: &str = "red";
const HUD_COLOR: &str = "#0095DD";
const HUD_FONT: &str = "16px Arial";

/// Wobble frequencies (radians per millisecond) and amplitudes
const BALL_WOBBLE_FREQ: f64 = 0.15;
const BALL_WOBBLE_AMP: f32 = 0.3;
const PADDLE_WOBBLE_FREQ: f64 = 0.1;
const PADDLE_WOBBLE_AMP: f32 = 0.5;

/// Aim preview geometry
const AIM_DOT_RADIUS: f32 = 6.0;
const ARROW_MIN_DISTANCE: f32 = 15.0;
const ARROW_LENGTH: f32 = 12.0;
const ARROW_WING: f32 = 6.0;

/// Draw offset for a shaking entity.
///
/// Horizontal is the decaying random offset; vertical is a time-based
/// oscillation scaled by the remaining intensity.
fn shake_offset(shake: &Shake, elapsed_ms: f64, freq: f64, amp: f32) -> Vec2 {
    let wobble = (elapsed_ms * freq).sin() as f32;
    Vec2::new(shake.offset, wobble * shake.intensity * amp)
}

/// Draw one frame.
///
/// `pointer` is the latest pointer position in logical space; `elapsed_ms`
/// drives the decorative wobble so frames are reproducible.
pub fn draw_frame(
    canvas: &mut dyn Canvas,
    state: &GameState,
    settings: &Settings,
    pointer: Vec2,
    elapsed_ms: f64,
) {
    let tuning = &state.tuning;
    canvas.clear(0.0, 0.0, tuning.arena_width, tuning.arena_height);

    for (_, _, rect) in state.bricks.alive() {
        canvas.draw_rect(rect.x, rect.y, rect.w, rect.h, BRICK_COLOR);
    }

    let (ball_shake, paddle_shake) = if settings.effective_shake() {
        (
            shake_offset(&state.ball.shake, elapsed_ms, BALL_WOBBLE_FREQ, BALL_WOBBLE_AMP),
            shake_offset(&state.paddle.shake, elapsed_ms, PADDLE_WOBBLE_FREQ, PADDLE_WOBBLE_AMP),
        )
    } else {
        (Vec2::ZERO, Vec2::ZERO)
    };

    let ball = &state.ball;
    canvas.draw_circle(
        ball.pos.x + ball_shake.x,
        ball.pos.y + ball_shake.y,
        ball.radius,
        BALL_COLOR,
    );

    let paddle = &state.paddle;
    canvas.draw_rect(
        paddle.x + paddle_shake.x,
        paddle.y + paddle_shake.y,
        paddle.width,
        paddle.height,
        PADDLE_COLOR,
    );

    if settings.launch_preview && !state.launched() && !state.is_finished() {
        draw_launch_preview(canvas, ball.pos, pointer);
    }

    if settings.show_hud {
        canvas.draw_text(&format!("Score: {}", state.score), 8.0, 20.0, HUD_FONT, HUD_COLOR);
        canvas.draw_text(
            &format!("Lives: {}", state.lives),
            tuning.arena_width - 65.0,
            20.0,
            HUD_FONT,
            HUD_COLOR,
        );
    }
}

/// Dashed aim line, aim dot, and an arrow head once the pointer is far
/// enough from the ball to give it a direction
fn draw_launch_preview(canvas: &mut dyn Canvas, from: Vec2, to: Vec2) {
    canvas.draw_line(
        from.x,
        from.y,
        to.x,
        to.y,
        LineStyle {
            color: "rgba(255, 255, 255, 0.6)",
            width: 2.0,
            dash: Some((3.0, 3.0)),
        },
    );

    canvas.draw_circle(to.x, to.y, AIM_DOT_RADIUS, "rgba(255, 255, 255, 0.5)");

    let delta = to - from;
    if delta.length() <= ARROW_MIN_DISTANCE {
        return;
    }

    let angle = delta.y.atan2(delta.x);
    let base = to - Vec2::from_angle(angle) * ARROW_LENGTH;
    let wing_a = base - Vec2::from_angle(angle - FRAC_PI_6) * ARROW_WING;
    let wing_b = base - Vec2::from_angle(angle + FRAC_PI_6) * ARROW_WING;
    canvas.draw_triangle(to, wing_a, wing_b, "rgba(255, 255, 255, 0.7)");
}
