//! Brick Breaker entry point
//!
//! On the web this wires the canvas, DOM events and the animation loop. The
//! native build is a headless runner: the autopilot plays one game and the
//! final state is printed as JSON.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, KeyboardEvent, MouseEvent, TouchEvent};

    use brick_breaker::consts::*;
    use brick_breaker::renderer::text::TextOverlay;
    use brick_breaker::renderer::{RenderState, render};
    use brick_breaker::sim::{Autopilot, GameState, tick};
    use brick_breaker::{GameConfig, InputAdapter, Key};

    /// Game instance holding all state
    struct Game {
        state: GameState,
        render_state: Option<RenderState>,
        text: Option<TextOverlay>,
        input: InputAdapter,
        autopilot: Autopilot,
        accumulator: f32,
        last_time: f64,
        canvas: HtmlCanvasElement,
    }

    impl Game {
        fn new(config: GameConfig, canvas: HtmlCanvasElement, seed: u64) -> Self {
            let input = InputAdapter::new(config.surface.width, config.paddle.speed);
            Self {
                state: GameState::new(config),
                render_state: None,
                text: None,
                input,
                autopilot: Autopilot::new(seed),
                accumulator: 0.0,
                last_time: 0.0,
                canvas,
            }
        }

        /// Convert a client x coordinate to surface units
        fn surface_x(&self, client_x: f64) -> f32 {
            let rect = self.canvas.get_bounding_client_rect();
            let scale = if rect.width() > 0.0 {
                self.state.config.surface.width as f64 / rect.width()
            } else {
                1.0
            };
            ((client_x - rect.left()) * scale) as f32
        }

        /// Run simulation ticks
        fn update(&mut self, dt: f32) {
            let dt = dt.min(0.1);
            self.accumulator += dt;

            let mut substeps = 0;
            while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
                let mut input = self.input.take_tick_input();
                if self.input.autopilot() {
                    let auto = self.autopilot.input(&self.state);
                    input.paddle_dx = auto.paddle_dx;
                    input.start |= auto.start;
                }

                for event in tick(&mut self.state, &input) {
                    log::debug!("{:?}", event);
                }
                self.accumulator -= SIM_DT;
                substeps += 1;
            }

            // Drop backlog we could not catch up on
            if substeps == MAX_SUBSTEPS {
                self.accumulator = 0.0;
            }
        }

        /// Render the current frame
        fn render(&mut self) {
            let commands = render(&self.state);

            if let Some(ref mut render_state) = self.render_state {
                match render_state.draw(&commands) {
                    Ok(_) => {}
                    Err(wgpu::SurfaceError::Lost) => {
                        render_state.resize(render_state.size.0, render_state.size.1);
                    }
                    Err(wgpu::SurfaceError::OutOfMemory) => {
                        log::error!("Out of memory!");
                    }
                    Err(e) => log::warn!("Render error: {:?}", e),
                }
            }

            if let Some(ref text) = self.text {
                if let Err(e) = text.draw(&commands) {
                    log::warn!("Text render error: {:?}", e);
                }
            }
        }

        /// Reset game state for restart
        fn restart(&mut self) {
            self.state.reset();
            self.input.clear();
            self.accumulator = 0.0;
        }
    }

    fn canvas_by_id(document: &web_sys::Document, id: &str) -> Result<HtmlCanvasElement, JsValue> {
        document
            .get_element_by_id(id)
            .ok_or_else(|| JsValue::from_str(&format!("no #{id} element")))?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| JsValue::from_str(&format!("#{id} is not a canvas")))
    }

    pub async fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        log::info!("Brick Breaker starting...");

        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("no document"))?;

        let canvas = canvas_by_id(&document, "gameCanvas")?;
        let config = GameConfig::default();
        let width = config.surface.width as u32;
        let height = config.surface.height as u32;
        canvas.set_width(width);
        canvas.set_height(height);

        let seed = js_sys::Date::now() as u64;
        let play_area = glam::Vec2::new(config.surface.width, config.surface.height);
        let game = Rc::new(RefCell::new(Game::new(config, canvas.clone(), seed)));

        // Initialize WebGPU
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU | wgpu::Backends::GL,
            ..Default::default()
        });

        let surface = instance
            .create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::default(),
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        log::info!("Using adapter: {:?}", adapter.get_info().name);

        let render_state = RenderState::new(surface, &adapter, width, height, play_area)
            .await
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        game.borrow_mut().render_state = Some(render_state);

        match canvas_by_id(&document, "textCanvas").and_then(|c| TextOverlay::new(c, width, height)) {
            Ok(text) => game.borrow_mut().text = Some(text),
            Err(e) => log::warn!("No text overlay: {:?}", e),
        }

        setup_input_handlers(&canvas, game.clone());
        setup_restart_button(&document, game.clone());

        request_animation_frame(game);

        log::info!("Brick Breaker running!");
        Ok(())
    }

    fn setup_input_handlers(canvas: &HtmlCanvasElement, game: Rc<RefCell<Game>>) {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };

        // Keyboard
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if let Some(key) = Key::from_dom_key(&event.key()) {
                    // Keep space/arrows from scrolling the page
                    event.prevent_default();
                    game.borrow_mut().input.key_down(key);
                }
            });
            let _ = document
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if let Some(key) = Key::from_dom_key(&event.key()) {
                    game.borrow_mut().input.key_up(key);
                }
            });
            let _ = document
                .add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Mouse move - absolute position
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                let mut g = game.borrow_mut();
                let x = g.surface_x(event.client_x() as f64);
                g.input.pointer_move(x);
            });
            let _ = canvas
                .add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Click - start
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                game.borrow_mut().input.click();
            });
            let _ = canvas
                .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Touch move - must not scroll the page
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                event.prevent_default();
                if let Some(touch) = event.touches().get(0) {
                    let mut g = game.borrow_mut();
                    let x = g.surface_x(touch.client_x() as f64);
                    g.input.touch_move(x);
                }
            });
            let _ = canvas
                .add_event_listener_with_callback("touchmove", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Touch start - start
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                event.prevent_default();
                game.borrow_mut().input.touch_start();
            });
            let _ = canvas
                .add_event_listener_with_callback("touchstart", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        {
            let mut g = game.borrow_mut();

            let dt = if g.last_time > 0.0 {
                ((time - g.last_time) / 1000.0) as f32
            } else {
                SIM_DT
            };
            g.last_time = time;

            g.update(dt);
            g.render();
        }

        request_animation_frame(game);
    }

    fn setup_restart_button(document: &web_sys::Document, game: Rc<RefCell<Game>>) {
        if let Some(btn) = document.get_element_by_id("restartBtn") {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                game.borrow_mut().restart();
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        } else {
            log::warn!("No #restartBtn element, restart disabled");
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() -> Result<(), JsValue> {
    wasm_game::run().await
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use brick_breaker::GameConfig;
    use brick_breaker::sim::{Autopilot, GameEvent, GameState, tick};

    /// Hard stop for games the autopilot cannot finish
    const MAX_TICKS: u64 = 200_000;

    env_logger::init();
    log::info!("Brick Breaker (native) starting...");
    log::info!("Native mode is headless - run with `trunk serve` for the web version");

    let config = match std::env::args().nth(1) {
        Some(path) => match GameConfig::load(&path) {
            Ok(config) => config,
            Err(e) => {
                log::error!("{}", e);
                std::process::exit(1);
            }
        },
        None => GameConfig::default(),
    };

    let seed = 42;
    let mut state = GameState::new(config);
    let mut pilot = Autopilot::new(seed);
    let mut ticks = 0u64;

    while !state.status.is_ended() && ticks < MAX_TICKS {
        let input = pilot.input(&state);
        for event in tick(&mut state, &input) {
            match event {
                GameEvent::LifeLost { .. } | GameEvent::Won | GameEvent::Lost => {
                    log::info!("tick {}: {:?}", ticks, event)
                }
                _ => log::debug!("tick {}: {:?}", ticks, event),
            }
        }
        ticks += 1;
    }

    if !state.status.is_ended() {
        log::warn!("Stopped after {} ticks without a result", ticks);
    }

    let summary = serde_json::json!({
        "status": state.status,
        "score": state.score,
        "lives": state.lives,
        "bricks_left": state.bricks.alive_count(),
        "ticks": ticks,
        "running_ticks": state.time_ticks,
    });
    println!("{}", summary);
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
