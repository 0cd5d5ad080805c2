//! Slide 2048 entry point
//!
//! On the web this exposes the engine to the JavaScript front end; natively it
//! runs a quick engine self-check.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use rand_pcg::Pcg32;
    use wasm_bindgen::prelude::*;

    use slide_2048::consts::SLIDE_ANIM_MS;
    use slide_2048::persistence::{clear_saved_game, load_game_state, save_game_state};
    use slide_2048::platform::{LocalStorage, entropy_rng, prefers_dark};
    use slide_2048::{Direction, GameSession, HighScore, Preferences};

    /// Game instance driven by the front end
    ///
    /// The front end calls `slide`, animates the returned records, then calls
    /// `settle` once the animation finishes.
    #[wasm_bindgen]
    pub struct WebGame {
        session: GameSession,
        store: LocalStorage,
        prefs: Preferences,
        high_score: HighScore,
        rng: Pcg32,
        last_merged: bool,
    }

    #[wasm_bindgen]
    impl WebGame {
        #[wasm_bindgen(constructor)]
        pub fn new() -> WebGame {
            let store = LocalStorage::open();
            let prefs = Preferences::load(&store, prefers_dark());
            let high_score = HighScore::load(&store);
            let mut rng = entropy_rng();
            let session =
                GameSession::resume_or_new(load_game_state(&store), prefs.board_size, &mut rng);

            let mut game = WebGame {
                session,
                store,
                prefs,
                high_score,
                rng,
                last_merged: false,
            };
            game.persist();
            game
        }

        fn persist(&mut self) {
            let saved = self.session.snapshot();
            save_game_state(&mut self.store, &saved.board, saved.prev_board.as_ref());
            self.high_score.observe(self.session.score(), &mut self.store);
        }

        /// Start a move; returns JSON move records, or nothing if ignored
        pub fn slide(&mut self, direction: &str) -> Option<String> {
            let dir = Direction::from_str(direction).or_else(|| Direction::from_key(direction))?;
            let result = self.session.begin_move(dir)?;
            self.last_merged = result.merged;
            match serde_json::to_string(&result.moves) {
                Ok(json) => Some(json),
                Err(e) => {
                    log::warn!("Could not encode moves: {e}");
                    Some("[]".to_string())
                }
            }
        }

        /// How long to animate a slide before calling `settle` (ms)
        #[wasm_bindgen(js_name = slideAnimMs)]
        pub fn slide_anim_ms(&self) -> u32 {
            SLIDE_ANIM_MS
        }

        /// Whether the last accepted slide merged tiles
        #[wasm_bindgen(js_name = lastMerged)]
        pub fn last_merged(&self) -> bool {
            self.last_merged
        }

        /// Finish the pending move: spawn, save, and report game over
        pub fn settle(&mut self) -> bool {
            if self.session.finish_move(&mut self.rng) {
                self.persist();
            }
            self.session.is_over()
        }

        pub fn undo(&mut self) -> bool {
            let undone = self.session.undo();
            if undone {
                self.persist();
            }
            undone
        }

        #[wasm_bindgen(js_name = newGame)]
        pub fn new_game(&mut self) {
            clear_saved_game(&mut self.store);
            self.session.new_game(&mut self.rng);
            self.persist();
            log::info!("Started new {}x{} game", self.session.size(), self.session.size());
        }

        /// Start a new game at `size` (clamped to 3-6)
        pub fn resize(&mut self, size: usize) -> usize {
            let size = self.prefs.set_board_size(&mut self.store, size);
            self.session.resize(size, &mut self.rng);
            self.persist();
            size
        }

        #[wasm_bindgen(js_name = boardJson)]
        pub fn board_json(&self) -> String {
            serde_json::to_string(self.session.board()).unwrap_or_else(|_| "[]".to_string())
        }

        pub fn size(&self) -> usize {
            self.session.size()
        }

        pub fn score(&self) -> f64 {
            self.session.score() as f64
        }

        #[wasm_bindgen(js_name = highScore)]
        pub fn high_score(&self) -> f64 {
            self.high_score.best() as f64
        }

        #[wasm_bindgen(js_name = isOver)]
        pub fn is_over(&self) -> bool {
            self.session.is_over()
        }

        #[wasm_bindgen(js_name = canUndo)]
        pub fn can_undo(&self) -> bool {
            self.session.can_undo()
        }

        #[wasm_bindgen(js_name = sfxMuted)]
        pub fn sfx_muted(&self) -> bool {
            self.prefs.sfx_muted
        }

        #[wasm_bindgen(js_name = toggleSfx)]
        pub fn toggle_sfx(&mut self) -> bool {
            self.prefs.toggle_sfx(&mut self.store)
        }

        pub fn theme(&self) -> String {
            self.prefs.theme.as_str().to_string()
        }

        #[wasm_bindgen(js_name = toggleTheme)]
        pub fn toggle_theme(&mut self) -> String {
            self.prefs.toggle_theme(&mut self.store).as_str().to_string()
        }
    }

    pub fn init() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");
        log::info!("Slide 2048 starting...");
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::init();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Slide 2048 (native) starting...");
    log::info!("Native mode has no front end - build for wasm32 to play");

    println!("\nRunning engine self-check...");
    self_check();
}

#[cfg(not(target_arch = "wasm32"))]
fn self_check() {
    use slide_2048::board::rng_from_seed;
    use slide_2048::{Direction, Grid, MemoryStore, apply_move, load_game_state, save_game_state};

    let row = |cells: Vec<u64>| {
        let mut rows = vec![cells];
        rows.extend((1..4).map(|_| vec![0; 4]));
        Grid::from_rows(rows)
    };
    let (Ok(start), Ok(expected)) = (row(vec![2, 2, 2, 0]), row(vec![4, 2, 0, 0])) else {
        log::error!("Self-check grids are malformed");
        return;
    };
    let result = apply_move(&start, Direction::Left);
    assert_eq!(result.next, expected, "leftmost pair should merge first");

    let mut rng = rng_from_seed(2048);
    let seeded = slide_2048::seed_grid(4, &mut rng);
    assert_eq!(seeded.tile_count(), 2);

    let mut store = MemoryStore::new();
    save_game_state(&mut store, &result.next, Some(&start));
    assert!(load_game_state(&store).is_some_and(|s| s.board == result.next));

    println!("{seeded}");
    println!("✓ Engine self-check passed!");
}
