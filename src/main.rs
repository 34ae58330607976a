//! Froggy entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, KeyboardEvent};

    use froggy::Tuning;
    use froggy::consts::*;
    use froggy::persistence::LocalStorage;
    use froggy::platform::{Key, KeyState};
    use froggy::sim::{ArcadePhysics, EntityKind, Game, GamePhase};

    type WebGame = Game<ArcadePhysics, LocalStorage>;

    /// Game instance plus frame bookkeeping
    struct App {
        game: WebGame,
        ctx: CanvasRenderingContext2d,
        accumulator: f32,
        last_time: f64,
    }

    impl App {
        /// Run simulation ticks
        fn update(&mut self, dt: f32) {
            let dt = dt.min(0.1);
            self.accumulator += dt;

            let mut substeps = 0;
            while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
                self.game.tick(SIM_DT);
                self.accumulator -= SIM_DT;
                substeps += 1;
            }

            if self.game.phase() == GamePhase::GameOver {
                self.show_high_score_window();
            }
        }

        /// Modal name entry; the browser blocks until it is confirmed
        fn show_high_score_window(&mut self) {
            let Some(window) = self.game.high_score_window() else {
                return;
            };
            let text = window.text();
            let name = web_sys::window()
                .and_then(|w| w.prompt_with_message_and_default(&text, "").ok())
                .flatten()
                .unwrap_or_default();
            self.game.dismiss_high_score(&name);
            self.accumulator = 0.0;
        }

        /// Draw entity boxes and text; the field maps 1:1 onto the canvas
        fn render(&self) {
            let half = self.game.tuning().half_field();
            let ctx = &self.ctx;
            ctx.set_fill_style_str("#8fd18f");
            ctx.fill_rect(0.0, 0.0, (half.x * 2.0) as f64, (half.y * 2.0) as f64);

            for e in self.game.entities().iter().filter(|e| e.alive) {
                let color = match e.kind {
                    EntityKind::Player => "#2e7d32",
                    EntityKind::CollectibleKindA => "#5d4037",
                    EntityKind::CollectibleKindB => "#f9a825",
                    EntityKind::Hazard => "#424242",
                };
                ctx.set_fill_style_str(color);
                let x = e.pos.x + half.x - e.size.x / 2.0;
                let y = half.y - e.pos.y - e.size.y / 2.0;
                ctx.fill_rect(x as f64, y as f64, e.size.x as f64, e.size.y as f64);
            }

            ctx.set_fill_style_str("#000000");
            let _ = ctx.fill_text(&self.game.score_label(), 20.0, 30.0);
            let mut y = 60.0;
            for line in self.game.messages() {
                let _ = ctx.fill_text(line, 20.0, y);
                y += 20.0;
            }
            if self.game.help_visible() {
                for line in self.game.control_help() {
                    let _ = ctx.fill_text(&line, 20.0, y);
                    y += 20.0;
                }
            }
        }
    }

    pub fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        log::info!("Froggy starting...");

        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;
        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .ok_or("no canvas")?
            .dyn_into()?;

        let storage = LocalStorage::new();
        let tuning = Tuning::load(&storage);
        canvas.set_width(tuning.field_size.x as u32);
        canvas.set_height(tuning.field_size.y as u32);
        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")?
            .ok_or("no 2d context")?
            .dyn_into()?;
        ctx.set_font("16px sans-serif");

        let seed = js_sys::Date::now() as u64;
        let mut game = Game::new(tuning, ArcadePhysics::new(), storage, seed);
        game.begin();
        log::info!("Game initialized with seed: {}", seed);

        let app = Rc::new(RefCell::new(App {
            game,
            ctx,
            accumulator: 0.0,
            last_time: 0.0,
        }));

        setup_input_handlers(app.clone())?;
        request_animation_frame(app);

        log::info!("Froggy running!");
        Ok(())
    }

    fn setup_input_handlers(app: Rc<RefCell<App>>) -> Result<(), JsValue> {
        let window = web_sys::window().ok_or("no window")?;

        for (event, state) in [("keydown", KeyState::Pressed), ("keyup", KeyState::Released)] {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if let Some(key) = Key::from_dom(&event.key()) {
                    event.prevent_default();
                    let mut a = app.borrow_mut();
                    a.game.handle_key(key, state);
                    if a.game.exit_requested() {
                        log::info!("Exit requested - close the tab to quit");
                    }
                }
            });
            window.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
            closure.forget();
        }
        Ok(())
    }

    fn request_animation_frame(app: Rc<RefCell<App>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |time: f64| {
            game_loop(app, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(app: Rc<RefCell<App>>, time: f64) {
        {
            let mut a = app.borrow_mut();

            let dt = if a.last_time > 0.0 {
                ((time - a.last_time) / 1000.0) as f32
            } else {
                SIM_DT
            };
            a.last_time = time;

            a.update(dt);
            a.render();
        }

        request_animation_frame(app);
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
mod native {
    use std::path::PathBuf;

    use clap::Parser;

    use froggy::Tuning;
    use froggy::consts::SIM_DT;
    use froggy::persistence::FileStorage;
    use froggy::sim::{ArcadePhysics, Autopilot, Game, GamePhase};
    use froggy::ui::leaderboard_lines;

    #[derive(Parser)]
    #[command(name = "froggy")]
    #[command(about = "Play one headless Froggy round with the autopilot")]
    struct Args {
        /// RNG seed (defaults to the current time)
        #[arg(long, env = "FROGGY_SEED")]
        seed: Option<u64>,

        /// Maximum ticks before the round is cut short
        #[arg(long, env = "FROGGY_TICKS", default_value_t = 36_000)]
        ticks: u64,

        /// Name entered into the leaderboard window
        #[arg(long, env = "FROGGY_NAME", default_value = "Sammakko")]
        name: String,

        /// Directory holding the leaderboard and tuning records
        #[arg(long, env = "FROGGY_DATA_DIR", default_value = "froggy-data")]
        data_dir: PathBuf,

        /// Write the effective tuning record so it can be edited
        #[arg(long)]
        save_tuning: bool,
    }

    pub fn run() {
        env_logger::init();
        let args = Args::parse();
        log::info!("Froggy (native) starting...");

        let seed = args.seed.unwrap_or_else(|| {
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .map(|d| d.as_millis() as u64)
                .unwrap_or(0)
        });
        let mut storage = FileStorage::new(args.data_dir);
        log::info!("Data directory: {}", storage.dir().display());

        let tuning = Tuning::load(&storage);
        if args.save_tuning {
            tuning.save(&mut storage);
        }
        let mut game = Game::new(tuning, ArcadePhysics::new(), storage, seed);
        game.begin();

        // Headless demo: the autopilot plays one round
        let mut pilot = Autopilot::new();
        let mut ticks = 0;
        while game.phase() == GamePhase::Running && ticks < args.ticks {
            pilot.drive(&mut game);
            game.tick(SIM_DT);
            ticks += 1;
        }

        match game.high_score_window() {
            Some(window) => {
                println!("{}", window.title);
                if window.qualifies() {
                    println!("{} {}", window.message(), args.name);
                }
            }
            None => println!("Time's up after {} ticks with {} points", ticks, game.score()),
        }
        let final_score = game.score();
        game.dismiss_high_score(&args.name);

        println!("\nFinal score: {}", final_score);
        println!("Leaderboard:");
        for line in leaderboard_lines(game.leaderboard()) {
            println!("{}", line);
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_flags_override_defaults() {
            let args = Args::try_parse_from([
                "froggy", "--seed", "7", "--ticks", "120", "--name", "Kisse",
            ])
            .unwrap();
            assert_eq!(args.seed, Some(7));
            assert_eq!(args.ticks, 120);
            assert_eq!(args.name, "Kisse");
            assert!(!args.save_tuning);
        }

        #[test]
        fn test_invalid_numbers_are_rejected() {
            assert!(Args::try_parse_from(["froggy", "--ticks", "abc"]).is_err());
            assert!(Args::try_parse_from(["froggy", "--seed", "notanumber"]).is_err());
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    native::run();
}
