//! Pong Room entry point
//!
//! In the browser: sets up WebGPU, wires DOM input into the simulation's
//! input queue and runs one simulation step per animation frame.
//! Natively: runs a scripted headless session and prints the final frame.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, HtmlInputElement, KeyboardEvent, MouseEvent};

    use pong_room::platform::{FrameClock, key_down, key_up};
    use pong_room::renderer::RenderState;
    use pong_room::settings::Settings;
    use pong_room::sim::{InputEvent, InputQueue, Side, SimState, tick};
    use pong_room::tuning::SimConfig;

    // JS binding for pointer lock
    #[wasm_bindgen(inline_js = "
        export function request_pointer_lock() {
            const canvas = document.getElementById('canvas');
            if (canvas) {
                const result = canvas.requestPointerLock();
                if (result && result.catch) {
                    result.catch(e => console.error('Pointer lock failed:', e));
                }
            }
        }
    ")]
    extern "C" {
        fn request_pointer_lock();
    }

    /// Game instance holding all state
    struct Game {
        state: SimState,
        input: InputQueue,
        clock: FrameClock,
        settings: Settings,
        render_state: Option<RenderState>,
        pointer_locked: bool,
        /// Goals scored by the player and by the CPU
        tally: (u32, u32),
    }

    impl Game {
        fn new(settings: Settings) -> Self {
            let mut state = SimState::new(SimConfig::default());
            settings.apply_to(&mut state);
            Self {
                state,
                input: InputQueue::new(),
                clock: FrameClock::new(),
                settings,
                render_state: None,
                pointer_locked: false,
                tally: (0, 0),
            }
        }

        /// One simulation step
        fn update(&mut self, time: f64) -> bool {
            let dt = self.clock.tick(time);
            self.settings.apply_to(&mut self.state);
            tick(&mut self.state, &mut self.input, dt);

            let mut scored = false;
            for scorer in self.state.goals() {
                match scorer {
                    Side::Player => self.tally.0 += 1,
                    Side::Cpu => self.tally.1 += 1,
                }
                scored = true;
            }
            if scored {
                log::info!("Goals: player {} - cpu {}", self.tally.0, self.tally.1);
            }
            scored
        }

        /// Render the current frame
        fn render(&mut self) {
            let snapshot = self.state.snapshot();
            if let Some(ref mut render_state) = self.render_state {
                match render_state.render(&snapshot, &self.settings) {
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
        }

        /// Update HUD elements in DOM
        fn update_hud(&self) {
            let Some(document) = web_sys::window().and_then(|w| w.document()) else {
                return;
            };
            if let Some(el) = document.query_selector("#hud-player .hud-value").ok().flatten() {
                el.set_text_content(Some(&self.tally.0.to_string()));
            }
            if let Some(el) = document.query_selector("#hud-cpu .hud-value").ok().flatten() {
                el.set_text_content(Some(&self.tally.1.to_string()));
            }
        }
    }

    fn document() -> web_sys::Document {
        web_sys::window()
            .and_then(|w| w.document())
            .expect("no document")
    }

    fn set_hidden(id: &str, hidden: bool) {
        if let Some(el) = document().get_element_by_id(id) {
            let _ = el.set_attribute("class", if hidden { "hidden" } else { "" });
        }
    }

    fn resize_canvas(canvas: &HtmlCanvasElement) -> (u32, u32) {
        let dpr = web_sys::window().map(|w| w.device_pixel_ratio()).unwrap_or(1.0);
        let width = ((canvas.client_width() as f64 * dpr) as u32).max(1);
        let height = ((canvas.client_height() as f64 * dpr) as u32).max(1);
        canvas.set_width(width);
        canvas.set_height(height);
        (width, height)
    }

    pub async fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Pong Room starting...");

        let document = document();
        set_hidden("loading", true);

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");
        let (width, height) = resize_canvas(&canvas);

        let settings = Settings::load();
        let game = Rc::new(RefCell::new(Game::new(settings)));

        // Initialize WebGPU
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU | wgpu::Backends::GL,
            ..Default::default()
        });

        let surface = instance
            .create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))
            .expect("Failed to create surface");

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .expect("Failed to get adapter");

        log::info!("Using adapter: {:?}", adapter.get_info().name);

        let room = game.borrow().state.room.clone();
        let render_state = RenderState::new(surface, &adapter, width, height, &room).await;
        game.borrow_mut().render_state = Some(render_state);

        setup_input_handlers(game.clone());
        setup_settings_panel(game.clone());
        setup_resize(&canvas, game.clone());

        set_hidden("hud", false);
        game.borrow().update_hud();

        request_animation_frame(game);

        log::info!("Pong Room running!");
    }

    fn setup_input_handlers(game: Rc<RefCell<Game>>) {
        let document = document();

        // Click on the instructions overlay captures the pointer
        if let Some(instructions) = document.get_element_by_id("instructions") {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                request_pointer_lock();
            });
            let _ = instructions
                .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Pointer lock change: gate locomotion and toggle the overlay
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
                let locked = document().pointer_lock_element().is_some();
                log::info!("Pointer lock {}", if locked { "acquired" } else { "released" });
                let mut g = game.borrow_mut();
                g.pointer_locked = locked;
                g.input.push(InputEvent::Capture(locked));
                set_hidden("blocker", locked);
            });
            let _ = document.add_event_listener_with_callback(
                "pointerlockchange",
                closure.as_ref().unchecked_ref(),
            );
            closure.forget();
        }

        {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
                log::error!("Pointer lock error!");
            });
            let _ = document.add_event_listener_with_callback(
                "pointerlockerror",
                closure.as_ref().unchecked_ref(),
            );
            closure.forget();
        }

        // Relative mouse movement while locked
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                let mut g = game.borrow_mut();
                if g.pointer_locked {
                    g.input.push(InputEvent::Look {
                        dx: event.movement_x() as f32,
                        dy: event.movement_y() as f32,
                    });
                }
            });
            let _ = document
                .add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Keyboard
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let code = event.code();
                if let Some(input) = key_down(&code, event.repeat()) {
                    event.prevent_default();
                    game.borrow_mut().input.push(input);
                } else if pong_room::platform::command_for_code(&code).is_some() {
                    // Swallow auto-repeat of mapped keys too (Space would scroll)
                    event.prevent_default();
                }
            });
            let _ = document
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if let Some(input) = key_up(&event.code()) {
                    game.borrow_mut().input.push(input);
                }
            });
            let _ = document
                .add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    /// Range slider: show the current value and push changes into settings
    fn bind_slider(
        game: &Rc<RefCell<Game>>,
        id: &str,
        initial: f32,
        apply: fn(&mut Settings, f32),
    ) {
        let Some(input) = document()
            .get_element_by_id(id)
            .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
        else {
            log::warn!("Settings control #{} missing", id);
            return;
        };
        input.set_value(&initial.to_string());

        let game = game.clone();
        let source = input.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            let value = source.value_as_number() as f32;
            let mut g = game.borrow_mut();
            apply(&mut g.settings, value);
            g.settings.save();
        });
        let _ = input.add_event_listener_with_callback("input", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn bind_toggle(game: &Rc<RefCell<Game>>, id: &str, initial: bool, apply: fn(&mut Settings, bool)) {
        let Some(input) = document()
            .get_element_by_id(id)
            .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
        else {
            log::warn!("Settings control #{} missing", id);
            return;
        };
        input.set_checked(initial);

        let game = game.clone();
        let source = input.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            let mut g = game.borrow_mut();
            apply(&mut g.settings, source.checked());
            g.settings.save();
        });
        let _ = input.add_event_listener_with_callback("change", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn setup_settings_panel(game: Rc<RefCell<Game>>) {
        let settings = game.borrow().settings.clone();

        bind_slider(&game, "ball-speed", settings.ball_speed, Settings::set_ball_speed);
        bind_slider(&game, "spot-angle", settings.spot_angle, Settings::set_spot_angle);
        bind_slider(&game, "spot-penumbra", settings.spot_penumbra, Settings::set_spot_penumbra);
        bind_slider(&game, "spot-intensity", settings.spot_intensity, Settings::set_spot_intensity);
        bind_toggle(&game, "light-helpers", settings.light_helpers, |s, on| s.light_helpers = on);
        bind_toggle(&game, "shadows", settings.shadows, |s, on| s.shadows = on);
    }

    fn setup_resize(canvas: &HtmlCanvasElement, game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let canvas = canvas.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::UiEvent| {
            let (width, height) = resize_canvas(&canvas);
            if let Some(ref mut render_state) = game.borrow_mut().render_state {
                render_state.resize(width, height);
            }
        });
        let _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
        closure.forget();
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
            if g.update(time) {
                g.update_hud();
            }
            g.render();
        }

        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    wasm_game::run().await;
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Pong Room (native) starting...");
    log::info!("Native mode runs headless - run with `trunk serve` for the web version");

    let mut args = std::env::args().skip(1);
    let frames = match args.next().map(|a| a.parse::<u64>()) {
        Some(Ok(frames)) => frames,
        Some(Err(e)) => {
            log::warn!("Invalid frame count ({}), using {}", e, headless::DEFAULT_FRAMES);
            headless::DEFAULT_FRAMES
        }
        None => headless::DEFAULT_FRAMES,
    };

    let config = match args.next() {
        Some(path) => match headless::load_config(&path) {
            Ok(config) => config,
            Err(e) => {
                log::error!("Could not load config {}: {}", path, e);
                std::process::exit(1);
            }
        },
        None => pong_room::SimConfig::default(),
    };

    let snapshot = headless::run(config, frames);
    match serde_json::to_string_pretty(&snapshot) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            log::error!("Could not serialize snapshot: {}", e);
            std::process::exit(1);
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Scripted session for running without a browser
#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use pong_room::SimConfig;
    use pong_room::consts::NOMINAL_DT;
    use pong_room::sim::{Command, FrameSnapshot, InputEvent, InputQueue, SimEvent, SimState, tick};

    pub const DEFAULT_FRAMES: u64 = 600;

    pub fn load_config(path: &str) -> Result<SimConfig, Box<dyn std::error::Error>> {
        let json = std::fs::read_to_string(path)?;
        Ok(SimConfig::from_json(&json)?)
    }

    /// Input injected at fixed frames
    fn script(frame: u64) -> Vec<InputEvent> {
        use Command::*;
        use InputEvent::*;
        match frame {
            0 => vec![Capture(true), Pressed(Forward), Pressed(PaddleRight)],
            90 => vec![Released(Forward), Pressed(Right), Look { dx: -120.0, dy: 20.0 }],
            150 => vec![Released(Right), Pressed(Jump), Released(PaddleRight)],
            240 => vec![Pressed(Backward), Pressed(PaddleLeft)],
            300 => vec![Released(Backward), Released(PaddleLeft)],
            _ => Vec::new(),
        }
    }

    pub fn run(config: SimConfig, frames: u64) -> FrameSnapshot {
        let mut state = SimState::new(config);
        let mut input = InputQueue::new();
        let mut goals = 0;

        for frame in 0..frames {
            for event in script(frame) {
                input.push(event);
            }
            tick(&mut state, &mut input, NOMINAL_DT);

            for event in &state.events {
                match event {
                    SimEvent::Pong(pong_event) => log::debug!("frame {}: {:?}", frame, pong_event),
                    other => log::trace!("frame {}: {:?}", frame, other),
                }
            }
            goals += state.goals().count();
        }

        log::info!("Ran {} frames, {} goals", frames, goals);
        state.snapshot()
    }
}
