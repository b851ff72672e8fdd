//! Voidstorm headless demo
//!
//! Runs the core without a window: an autopilot weaves across the field
//! with the trigger held until the run ends, then the score is reconciled
//! against the best and reported.

use std::time::{SystemTime, UNIX_EPOCH};

use voidstorm::audio::LogSound;
use voidstorm::highscores::MemoryStore;
use voidstorm::sim::{GamePhase, TickInput};
use voidstorm::{Game, Tuning};

const FRAME_DT: f32 = 1.0 / 60.0;
/// Two minutes of simulated time
const MAX_FRAMES: u32 = 60 * 120;

fn main() {
    env_logger::init();

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);

    let mut game = Game::new(
        seed,
        Tuning::default(),
        Box::new(LogSound),
        Box::new(MemoryStore::new()),
    );

    game.store_mut().subscribe(|snapshot| {
        log::debug!(
            "mirror: score={} lives={} level={} phase={}",
            snapshot.score,
            snapshot.lives,
            snapshot.level,
            snapshot.phase.as_str()
        );
    });

    game.start_game();

    for frame in 0..MAX_FRAMES {
        let t = frame as f32 * FRAME_DT;
        // Weave across the field, trigger held
        let sway = (t * 0.7).sin();
        game.set_input(TickInput {
            left: sway < -0.2,
            right: sway > 0.2,
            up: false,
            down: false,
            fire: true,
        });
        game.step(FRAME_DT);

        if game.phase() == GamePhase::GameOver {
            log::info!("run ended on frame {} at level {}", frame, game.level());
            break;
        }
    }

    let final_score = game.score();
    game.reset_game();
    println!("final score: {final_score} (best: {})", game.high_score());
}
