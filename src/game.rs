//! Host-facing game facade
//!
//! Owns the simulation, latches input between frames, caps anomalous frame
//! deltas, and bridges tick events to the sound director and state mirror.
//! The host drives it with one `step(dt)` per frame from whatever scheduling
//! primitive it has; nothing here blocks.

use glam::Vec2;

use crate::audio::{NullSound, SoundDirector};
use crate::consts::{DEFAULT_HEIGHT, DEFAULT_WIDTH, MAX_FRAME_DT};
use crate::highscores::{HighScore, KeyValueStore, MemoryStore};
use crate::render::{self, Surface};
use crate::sim::{self, GameEvent, GamePhase, SimState, TickInput};
use crate::store::{Snapshot, StateStore};
use crate::tuning::Tuning;

pub struct Game {
    state: SimState,
    input: TickInput,
    tuning: Tuning,
    store: StateStore,
    audio: Box<dyn SoundDirector>,
    high_score: HighScore,
    seed: u64,
}

impl Game {
    pub fn new(
        seed: u64,
        tuning: Tuning,
        audio: Box<dyn SoundDirector>,
        storage: Box<dyn KeyValueStore>,
    ) -> Self {
        let bounds = Vec2::new(DEFAULT_WIDTH, DEFAULT_HEIGHT);
        let state = SimState::new(seed, bounds, tuning.clone());
        let high_score = HighScore::load(storage);
        let store = StateStore::new(snapshot_of(&state, high_score.value()));
        Self {
            state,
            input: TickInput::default(),
            tuning,
            store,
            audio,
            high_score,
            seed,
        }
    }

    /// Facade with in-memory persistence and no audio (tests, demos)
    pub fn headless(seed: u64) -> Self {
        Self::new(
            seed,
            Tuning::default(),
            Box::new(NullSound),
            Box::new(MemoryStore::new()),
        )
    }

    // === Lifecycle ===

    /// Start a fresh run: collections cleared, score zero, lives reset,
    /// player at bottom-center, state -> playing
    pub fn start_game(&mut self) {
        // New stream per run so restarts differ but stay reproducible
        self.seed = self
            .seed
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);

        let mut state = SimState::new(self.seed, self.state.bounds, self.tuning.clone());
        state.phase = GamePhase::Playing;
        self.state = state;
        self.input = TickInput::default();
        self.audio.start_music();
        log::info!("game started (seed {:#x})", self.seed);
        self.publish();
    }

    /// Valid only while playing; otherwise a silent no-op
    pub fn pause_game(&mut self) {
        if self.state.phase == GamePhase::Playing {
            self.state.phase = GamePhase::Paused;
            self.publish();
        }
    }

    /// Valid only while paused; otherwise a silent no-op
    pub fn resume_game(&mut self) {
        if self.state.phase == GamePhase::Paused {
            self.state.phase = GamePhase::Playing;
            self.publish();
        }
    }

    /// Tear down the session and return to the menu. The finished run's
    /// score folds into the persisted best before it is cleared.
    pub fn reset_game(&mut self) {
        self.high_score.update_if_greater(self.state.score);
        self.state = SimState::new(self.seed, self.state.bounds, self.tuning.clone());
        self.input = TickInput::default();
        self.audio.stop_music();
        self.publish();
    }

    // === Per-frame ===

    /// Latch the input used by subsequent steps
    pub fn set_input(&mut self, input: TickInput) {
        self.input = input;
    }

    /// Advance the simulation by one frame delta (seconds). Oversized
    /// deltas from a stalled frame or backgrounded tab are capped so
    /// nothing tunnels through a collision volume in one step.
    pub fn step(&mut self, dt: f32) {
        let dt = if dt > MAX_FRAME_DT {
            log::warn!("capping oversized frame delta {:.3}s", dt);
            MAX_FRAME_DT
        } else {
            dt
        };

        sim::tick(&mut self.state, &self.input, dt);
        self.dispatch_events();
        self.publish();
    }

    /// Render the current frame to a host surface
    pub fn draw(&self, surface: &mut dyn Surface) {
        render::draw(&self.state, surface);
    }

    /// The playfield changed size; re-clamp the player immediately
    pub fn handle_resize(&mut self, width: f32, height: f32) {
        self.state.set_bounds(Vec2::new(width, height));
    }

    fn dispatch_events(&mut self) {
        for event in self.state.take_events() {
            match event {
                GameEvent::EnemyDestroyed { .. } | GameEvent::PlayerHit { .. } => {
                    self.audio.play_hit()
                }
                GameEvent::LevelUp { .. } => self.audio.play_success(),
                GameEvent::GameOver { .. } => self.audio.stop_music(),
            }
        }
    }

    fn publish(&mut self) {
        self.store
            .publish(snapshot_of(&self.state, self.high_score.value()));
    }

    // === Read accessors ===

    pub fn score(&self) -> u64 {
        self.state.score
    }

    pub fn lives(&self) -> u8 {
        self.state.lives
    }

    pub fn level(&self) -> u32 {
        self.state.level
    }

    pub fn phase(&self) -> GamePhase {
        self.state.phase
    }

    pub fn high_score(&self) -> u64 {
        self.high_score.value()
    }

    pub fn state(&self) -> &SimState {
        &self.state
    }

    pub fn store(&self) -> &StateStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut StateStore {
        &mut self.store
    }
}

fn snapshot_of(state: &SimState, high_score: u64) -> Snapshot {
    Snapshot {
        score: state.score,
        lives: state.lives,
        level: state.level,
        phase: state.phase,
        high_score,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::Projectile;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Director that records every trigger
    #[derive(Clone, Default)]
    struct Recorder(Rc<RefCell<Vec<&'static str>>>);

    impl SoundDirector for Recorder {
        fn play_hit(&mut self) {
            self.0.borrow_mut().push("hit");
        }
        fn play_success(&mut self) {
            self.0.borrow_mut().push("success");
        }
        fn start_music(&mut self) {
            self.0.borrow_mut().push("music-start");
        }
        fn stop_music(&mut self) {
            self.0.borrow_mut().push("music-stop");
        }
    }

    fn game_with_recorder() -> (Game, Recorder) {
        let recorder = Recorder::default();
        let game = Game::new(
            1,
            Tuning::default(),
            Box::new(recorder.clone()),
            Box::new(MemoryStore::new()),
        );
        (game, recorder)
    }

    #[test]
    fn test_lifecycle_transitions() {
        let mut game = Game::headless(1);
        assert_eq!(game.phase(), GamePhase::Menu);

        game.start_game();
        assert_eq!(game.phase(), GamePhase::Playing);
        assert_eq!(game.score(), 0);
        assert_eq!(game.lives(), 3);
        assert_eq!(game.level(), 1);

        game.pause_game();
        assert_eq!(game.phase(), GamePhase::Paused);
        game.resume_game();
        assert_eq!(game.phase(), GamePhase::Playing);

        game.reset_game();
        assert_eq!(game.phase(), GamePhase::Menu);
    }

    #[test]
    fn test_pause_and_resume_are_idempotent() {
        let mut game = Game::headless(1);

        // Resume from menu is a no-op
        game.resume_game();
        assert_eq!(game.phase(), GamePhase::Menu);
        // So is pause
        game.pause_game();
        assert_eq!(game.phase(), GamePhase::Menu);

        game.start_game();
        game.pause_game();
        game.pause_game(); // second call is a no-op
        assert_eq!(game.phase(), GamePhase::Paused);

        game.resume_game();
        game.resume_game();
        assert_eq!(game.phase(), GamePhase::Playing);
    }

    #[test]
    fn test_paused_step_freezes_simulation() {
        let mut game = Game::headless(1);
        game.start_game();
        game.pause_game();

        let before = game.state().player.position;
        game.set_input(TickInput {
            right: true,
            fire: true,
            ..Default::default()
        });
        for _ in 0..10 {
            game.step(1.0 / 60.0);
        }
        assert_eq!(game.state().player.position, before);
        assert!(game.state().player_bullets.is_empty());
    }

    #[test]
    fn test_oversized_delta_is_capped() {
        let mut game = Game::headless(1);
        game.start_game();

        let y0 = game.state().player.position.y;
        game.set_input(TickInput {
            up: true,
            ..Default::default()
        });
        game.step(5.0); // one monster frame

        let moved = y0 - game.state().player.position.y;
        let max_step = game.state().player.speed * MAX_FRAME_DT;
        assert!(moved <= max_step + 1e-3, "moved {moved} > cap {max_step}");
    }

    #[test]
    fn test_reset_reconciles_high_score() {
        let mut game = Game::headless(1);
        game.start_game();
        game.state.score = 900;
        game.reset_game();
        assert_eq!(game.high_score(), 900);
        assert_eq!(game.score(), 0);

        // A worse run never lowers the record
        game.start_game();
        game.state.score = 250;
        game.reset_game();
        assert_eq!(game.high_score(), 900);
        assert_eq!(game.store().high_score(), 900);
    }

    #[test]
    fn test_resize_reclamps_player() {
        let mut game = Game::headless(1);
        game.start_game();
        game.handle_resize(200.0, 150.0);
        let player = &game.state().player;
        let half = player.size / 2.0;
        assert!(player.position.x <= 200.0 - half);
        assert!(player.position.y <= 150.0 - half);
    }

    #[test]
    fn test_mirror_tracks_the_session() {
        let mut game = Game::headless(7);
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        game.store_mut()
            .subscribe(move |s| sink.borrow_mut().push(s.phase));

        game.start_game();
        game.pause_game();
        assert_eq!(
            *seen.borrow(),
            vec![GamePhase::Menu, GamePhase::Playing, GamePhase::Paused]
        );
        assert_eq!(game.store().lives(), 3);
    }

    #[test]
    fn test_events_reach_the_sound_director() {
        let (mut game, recorder) = game_with_recorder();
        game.start_game();
        assert_eq!(*recorder.0.borrow(), vec!["music-start"]);

        // Park an enemy bullet on the player and step once
        let mut bullet = Projectile::new(
            game.state.player.position,
            Vec2::new(0.0, 1.0),
            4.0,
            1,
            0.0,
            false,
        );
        bullet.id = game.state.next_entity_id();
        game.state.enemy_bullets.push(bullet);
        game.step(0.01);

        assert_eq!(*recorder.0.borrow(), vec!["music-start", "hit"]);
    }

    #[test]
    fn test_game_over_stops_music_and_freezes_score() {
        let (mut game, recorder) = game_with_recorder();
        game.start_game();
        game.state.lives = 1;
        game.state.score = 321;

        let mut bullet = Projectile::new(
            game.state.player.position,
            Vec2::new(0.0, 1.0),
            4.0,
            1,
            0.0,
            false,
        );
        bullet.id = game.state.next_entity_id();
        game.state.enemy_bullets.push(bullet);
        game.step(0.01);

        assert_eq!(game.phase(), GamePhase::GameOver);
        assert_eq!(game.score(), 321);
        assert!(recorder.0.borrow().contains(&"music-stop"));

        // Further steps change nothing
        game.step(0.01);
        assert_eq!(game.score(), 321);
        assert_eq!(game.phase(), GamePhase::GameOver);
    }

    #[test]
    fn test_restarts_produce_distinct_runs() {
        let mut game = Game::headless(42);
        game.start_game();
        let first = game.state.seed;
        game.reset_game();
        game.start_game();
        assert_ne!(game.state.seed, first);
    }
}
