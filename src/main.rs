//! Brick Breaker entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;

    use glam::Vec2;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, MouseEvent, TouchEvent};

    use brick_breaker::renderer::{Canvas, WebCanvas, draw_frame, to_logical};
    use brick_breaker::sim::{GameState, TickInput, TickOutcome, tick};
    use brick_breaker::{RapierContactOracle, Settings};

    /// Game instance holding all state
    struct Game {
        settings: Settings,
        state: GameState,
        oracle: RapierContactOracle,
        canvas: WebCanvas,
        input: TickInput,
        start_time: f64,
    }

    impl Game {
        fn new(settings: Settings, canvas: WebCanvas, seed: u64) -> Self {
            let state = GameState::with_tuning(seed, settings.tuning.clone());
            let oracle = RapierContactOracle::new(&state);
            let center = Vec2::new(
                settings.tuning.arena_width / 2.0,
                settings.tuning.arena_height / 2.0,
            );
            Self {
                settings,
                state,
                oracle,
                canvas,
                input: TickInput {
                    pointer: center,
                    aim: None,
                },
                start_time: js_sys::Date::now(),
            }
        }

        fn logical_size(&self) -> (f32, f32) {
            (
                self.settings.tuning.arena_width,
                self.settings.tuning.arena_height,
            )
        }

        /// Convert client coordinates to logical arena coordinates
        fn to_logical(&self, client_x: f32, client_y: f32) -> Vec2 {
            let rect = self.canvas.element().get_bounding_client_rect();
            let display = Vec2::new(client_x - rect.left() as f32, client_y - rect.top() as f32);
            to_logical(display, self.canvas.surface_size(), self.logical_size())
        }

        /// Draw with the previous tick's state, then advance
        fn frame(&mut self, time: f64) {
            let elapsed = time - self.start_time;
            draw_frame(
                &mut self.canvas,
                &self.state,
                &self.settings,
                self.input.pointer,
                elapsed,
            );

            let input = self.input.clone();
            self.input.aim = None;

            match tick(&mut self.state, &input, &mut self.oracle) {
                TickOutcome::Ended { reason, score } => {
                    let message = reason.message(score);
                    if let Some(window) = web_sys::window() {
                        let _ = window.alert_with_message(&message);
                    }
                    self.restart(js_sys::Date::now() as u64);
                }
                TickOutcome::LifeLost { lives } => {
                    log::info!("Lives remaining: {}", lives);
                }
                TickOutcome::Continue | TickOutcome::Halted => {}
            }
        }

        /// Fresh session: new state and a new mirror world
        fn restart(&mut self, seed: u64) {
            self.state = GameState::with_tuning(seed, self.settings.tuning.clone());
            self.oracle = RapierContactOracle::new(&self.state);
            self.input.aim = None;
            log::info!("Game restarted with seed: {}", seed);
        }
    }

    pub fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        if let Err(e) = console_log::init_with_level(log::Level::Info) {
            web_sys::console::warn_1(&format!("logger init failed: {e}").into());
        }

        log::info!("Brick Breaker starting...");

        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("no document"))?;

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("myCanvas")
            .ok_or_else(|| JsValue::from_str("no canvas"))?
            .dyn_into()?;

        let settings_json = canvas.get_attribute("data-settings");
        let settings = Settings::load_or_default(settings_json.as_deref());

        let logical = (settings.tuning.arena_width, settings.tuning.arena_height);
        let web_canvas = WebCanvas::new(canvas.clone(), logical)?;
        web_canvas.fit_to_parent()?;

        let seed = js_sys::Date::now() as u64;
        let game = Rc::new(RefCell::new(Game::new(settings, web_canvas, seed)));
        log::info!("Game initialized with seed: {}", seed);

        setup_input_handlers(&canvas, game.clone());
        setup_resize_handler(game.clone());

        request_animation_frame(game);

        log::info!("Brick Breaker running!");
        Ok(())
    }

    fn setup_input_handlers(canvas: &HtmlCanvasElement, game: Rc<RefCell<Game>>) {
        // Mouse move
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                let mut g = game.borrow_mut();
                let p = g.to_logical(event.client_x() as f32, event.client_y() as f32);
                g.input.pointer = p;
            });
            let _ = canvas
                .add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Click - aim and launch
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                let mut g = game.borrow_mut();
                if !g.state.launched() {
                    let p = g.to_logical(event.client_x() as f32, event.client_y() as f32);
                    g.input.aim = Some(p);
                }
            });
            let _ = canvas.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Touch start (aim and launch)
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                event.prevent_default();
                let mut g = game.borrow_mut();
                if g.state.launched() {
                    return;
                }
                if let Some(touch) = event.touches().get(0) {
                    let p = g.to_logical(touch.client_x() as f32, touch.client_y() as f32);
                    g.input.aim = Some(p);
                }
            });
            let _ = canvas
                .add_event_listener_with_callback("touchstart", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Touch move
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                event.prevent_default();
                if let Some(touch) = event.touches().get(0) {
                    let mut g = game.borrow_mut();
                    let p = g.to_logical(touch.client_x() as f32, touch.client_y() as f32);
                    g.input.pointer = p;
                }
            });
            let _ = canvas
                .add_event_listener_with_callback("touchmove", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_resize_handler(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            if let Err(e) = game.borrow().canvas.fit_to_parent() {
                log::warn!("Resize failed: {:?}", e);
            }
        });
        let _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            log::error!("No window for animation frame");
            return;
        };
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        game.borrow_mut().frame(time);
        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() -> Result<(), JsValue> {
    wasm_game::run()
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use brick_breaker::Settings;

    env_logger::init();
    log::info!("Brick Breaker (native) starting...");
    log::info!("Native mode runs a headless autoplay session - build for wasm32 to play");

    let settings = match std::env::var_os(Settings::ENV_VAR) {
        Some(path) => match Settings::from_file(&path) {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!("Ignoring {}: {}", path.to_string_lossy(), e);
                Settings::default()
            }
        },
        None => Settings::default(),
    };

    let seed = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);

    autoplay(&settings, seed);
}

/// Autoplay until the session ends or a tick cap is hit.
///
/// The pointer tracks the ball's target and every serve aims straight up.
#[cfg(not(target_arch = "wasm32"))]
fn autoplay(settings: &brick_breaker::Settings, seed: u64) {
    use brick_breaker::RapierContactOracle;
    use brick_breaker::renderer::{NullCanvas, draw_frame};
    use brick_breaker::sim::{GameState, TickInput, TickOutcome, tick};
    use glam::Vec2;

    const MAX_TICKS: u64 = 60 * 60 * 10;
    const FRAME_MS: f64 = 1000.0 / 60.0;

    let mut state = GameState::with_tuning(seed, settings.tuning.clone());
    let mut oracle = RapierContactOracle::new(&state);
    let mut canvas = NullCanvas;

    log::info!("Autoplay with seed: {}", seed);

    for frame in 0..MAX_TICKS {
        let pointer = Vec2::new(state.ball.target.x, state.paddle.y);
        let aim = (!state.launched()).then(|| Vec2::new(state.ball.pos.x, 0.0));
        let input = TickInput { pointer, aim };

        draw_frame(&mut canvas, &state, settings, pointer, frame as f64 * FRAME_MS);

        match tick(&mut state, &input, &mut oracle) {
            TickOutcome::Ended { reason, score } => {
                println!("{}", reason.message(score));
                log::info!("Session ended after {} ticks", state.time_ticks);
                return;
            }
            TickOutcome::LifeLost { lives } => log::info!("Lives remaining: {}", lives),
            TickOutcome::Continue | TickOutcome::Halted => {}
        }

        if frame % 600 == 0 {
            log::debug!(
                "tick {}: score {}, lives {}, bricks left {}",
                state.time_ticks,
                state.score,
                state.lives,
                state.bricks.alive_count()
            );
        }
    }

    println!(
        "Stopped after {} ticks: score {}, lives {}",
        MAX_TICKS, state.score, state.lives
    );
}
