//! Sound trigger surface
//!
//! The core never plays audio itself; it calls a host-provided director at
//! the designated events and never waits on the result. A missing or failed
//! asset is the director's problem, never the simulation's.

/// Host-implemented sound surface. Implementations must be fire-and-forget.
pub trait SoundDirector {
    /// Impact feedback: enemy destroyed, player hit
    fn play_hit(&mut self);
    /// Achievement feedback: level up
    fn play_success(&mut self);
    fn start_music(&mut self);
    fn stop_music(&mut self);
}

/// Silent director used when the host provides none
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSound;

impl SoundDirector for NullSound {
    fn play_hit(&mut self) {}
    fn play_success(&mut self) {}
    fn start_music(&mut self) {}
    fn stop_music(&mut self) {}
}

/// Logs every trigger; used by the headless demo
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSound;

impl SoundDirector for LogSound {
    fn play_hit(&mut self) {
        log::debug!("sfx: hit");
    }

    fn play_success(&mut self) {
        log::debug!("sfx: success");
    }

    fn start_music(&mut self) {
        log::info!("music: start");
    }

    fn stop_music(&mut self) {
        log::info!("music: stop");
    }
}
