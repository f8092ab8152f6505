//! Property tests over the simulation core

use brick_breaker::sim::{
    Circle, ContactOracle, GamePhase, GameState, Rect, Shake, TickInput, circle_rect_overlap,
    resolve_brick_collisions, tick, update_ball, update_paddle,
};
use glam::Vec2;
use proptest::prelude::*;

struct NoContact;

impl ContactOracle for NoContact {
    fn sync_ball(&mut self, _pos: Vec2, _vel: Vec2) {}
    fn sync_paddle(&mut self, _center: Vec2) {}
    fn step(&mut self) -> bool {
        false
    }
}

fn rect() -> impl Strategy<Value = Rect> {
    (0.0f32..700.0, 0.0f32..500.0, 1.0f32..100.0, 1.0f32..100.0)
        .prop_map(|(x, y, w, h)| Rect::new(x, y, w, h))
}

proptest! {
    #[test]
    fn overlap_false_when_nearest_point_is_out_of_reach(
        r in rect(),
        gap in 0.01f32..50.0,
        radius in 1.0f32..30.0,
    ) {
        // Directly left of the rect, center exactly radius + gap away
        let circle = Circle {
            center: Vec2::new(r.x - radius - gap, r.y + r.h / 2.0),
            radius,
        };
        prop_assert!(!circle_rect_overlap(&circle, &r));
    }

    #[test]
    fn overlap_true_when_center_inside(
        r in rect(),
        fx in 0.0f32..1.0,
        fy in 0.0f32..1.0,
        radius in 1.0f32..30.0,
    ) {
        let circle = Circle {
            center: Vec2::new(r.x + fx * r.w, r.y + fy * r.h),
            radius,
        };
        prop_assert!(circle_rect_overlap(&circle, &r));
    }

    #[test]
    fn ball_speed_never_exceeds_cap(
        vx in -40.0f32..40.0,
        vy in -40.0f32..40.0,
        x in 50.0f32..750.0,
        y in 50.0f32..500.0,
    ) {
        let mut state = GameState::new(3);
        state.phase = GamePhase::Playing;
        state.ball.pos = Vec2::new(x, y);
        state.ball.target = state.ball.pos;
        state.ball.vel = Vec2::new(vx, vy);

        update_ball(&mut state);
        prop_assert!(state.ball.speed() <= state.ball.max_speed + 1e-3);
    }

    #[test]
    fn paddle_stays_inside_arena(pointers in prop::collection::vec(-500.0f32..1500.0, 1..40)) {
        let mut state = GameState::new(4);
        for pointer in pointers {
            update_paddle(&mut state, pointer);
            let max_x = state.tuning.arena_width - state.paddle.width;
            prop_assert!(state.paddle.x >= 0.0 && state.paddle.x <= max_x);
        }
    }

    #[test]
    fn bricks_only_disappear_and_score_tracks_them(
        positions in prop::collection::vec((15.0f32..785.0, 15.0f32..200.0), 1..60),
    ) {
        let mut state = GameState::new(8);
        state.phase = GamePhase::Playing;
        let total = state.bricks.total();
        let mut previous = state.bricks.alive_count();

        for (x, y) in positions {
            state.ball.pos = Vec2::new(x, y);
            state.ball.target = state.ball.pos;
            state.ball.vel = Vec2::new(2.0, -3.0);
            resolve_brick_collisions(&mut state);

            let alive = state.bricks.alive_count();
            prop_assert!(alive <= previous);
            prop_assert_eq!(state.score as usize, total - alive);
            previous = alive;
        }
    }

    #[test]
    fn shake_comes_to_rest(
        intensity in 0.0f32..50.0,
        decay in 0.05f32..0.95,
        jitters in prop::collection::vec(-0.5f32..0.5, 200),
    ) {
        let mut shake = Shake::new(decay);
        shake.trigger(intensity);
        for jitter in jitters {
            prop_assert!(shake.offset.abs() <= intensity * 0.5 + 1e-4);
            shake.step(jitter);
            if !shake.is_active() {
                break;
            }
        }
        prop_assert!(!shake.is_active());
        prop_assert_eq!(shake.offset, 0.0);
    }

    #[test]
    fn same_seed_same_game(
        seed in any::<u64>(),
        script in prop::collection::vec((0.0f32..800.0, any::<bool>()), 1..120),
    ) {
        let mut a = GameState::new(seed);
        let mut b = GameState::new(seed);
        for (pointer_x, fire) in script {
            let input = TickInput {
                pointer: Vec2::new(pointer_x, 300.0),
                aim: fire.then(|| Vec2::new(pointer_x, 0.0)),
            };
            let oa = tick(&mut a, &input, &mut NoContact);
            let ob = tick(&mut b, &input, &mut NoContact);
            prop_assert_eq!(oa, ob);
        }
        prop_assert_eq!(a.ball, b.ball);
        prop_assert_eq!(a.paddle, b.paddle);
        prop_assert_eq!(a.score, b.score);
        prop_assert_eq!(a.lives, b.lives);
    }
}
