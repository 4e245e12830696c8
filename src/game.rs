//! Game session: simulation plus its collaborators
//!
//! Owns the [`GameState`], the frame clock, the best score store and the
//! audio manager. The simulation reports events; this is where they turn
//! into sounds and disk writes.

use std::time::Duration;

use crate::audio::{AudioManager, SoundEffect};
use crate::persistence::ScoreStore;
use crate::platform::FrameClock;
use crate::sim::{self, GameEvent, GameMode, GameState, InputEvent, Snapshot};
use crate::tuning::Tuning;

/// Game instance holding all state
pub struct Game {
    state: GameState,
    clock: FrameClock,
    store: Box<dyn ScoreStore>,
    audio: AudioManager,
    /// Events produced since the last drain
    events: Vec<GameEvent>,
    running: bool,
    /// Best score already written on the exit path
    flushed: bool,
}

impl Game {
    /// Build a session, reading the best score from `store`
    ///
    /// A store that can't be read starts the best score at 0.
    pub fn new(seed: u64, tuning: Tuning, mut store: Box<dyn ScoreStore>, audio: AudioManager) -> Self {
        let best = match store.load() {
            Ok(best) => best,
            Err(e) => {
                log::warn!("Could not load best score, starting at 0: {}", e);
                0
            }
        };
        log::info!("Game initialized with seed {} (best {})", seed, best);

        Self {
            state: GameState::new(seed, tuning, best),
            clock: FrameClock::default(),
            store,
            audio,
            events: Vec::new(),
            running: true,
            flushed: false,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn mode(&self) -> GameMode {
        self.state.mode
    }

    pub fn snapshot(&self) -> Snapshot<'_> {
        self.state.snapshot()
    }

    /// False once quit has been requested
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Time the driver may wait for input before the next tick is due
    pub fn until_next_tick(&self) -> Duration {
        self.clock.until_next_tick()
    }

    /// Apply one input event
    pub fn handle_input(&mut self, input: InputEvent) {
        if input == InputEvent::Quit {
            log::info!("Quit requested");
            self.running = false;
            return;
        }
        sim::apply_input(&mut self.state, input, &mut self.events);
        self.dispatch();
    }

    /// Feed a frame delta; runs as many fixed ticks as are due
    ///
    /// Returns the number of ticks run.
    pub fn update(&mut self, frame_dt: f32) -> u32 {
        let ticks = self.clock.advance(frame_dt);
        for _ in 0..ticks {
            self.step();
        }
        ticks
    }

    /// Run exactly one fixed tick
    pub fn step(&mut self) {
        sim::tick(&mut self.state, &mut self.events);
        self.dispatch();
    }

    /// Write the best score as the last thing before teardown
    ///
    /// Safe to call more than once; `Drop` calls it if nobody else did.
    pub fn shutdown(&mut self) {
        if self.flushed {
            return;
        }
        self.flushed = true;
        self.running = false;
        self.persist_best();
        log::info!("Shut down with best score {}", self.state.score.best());
    }

    fn dispatch(&mut self) {
        for event in std::mem::take(&mut self.events) {
            match event {
                GameEvent::Jumped => self.audio.play(SoundEffect::Jump),
                GameEvent::Crashed { new_best, .. } => {
                    self.audio.play(SoundEffect::Crash);
                    if new_best {
                        log::info!("New best score {}", self.state.score.best());
                    }
                    self.persist_best();
                }
                GameEvent::Reset => self.clock.reset(),
                GameEvent::Started
                | GameEvent::Scored { .. }
                | GameEvent::Paused
                | GameEvent::Resumed => {}
            }
        }
    }

    /// Write through; a failed write keeps the in-memory value
    fn persist_best(&mut self) {
        let best = self.state.score.best();
        if let Err(e) = self.store.save(best) {
            log::warn!("Could not save best score {}: {}", best, e);
        }
    }
}

impl Drop for Game {
    fn drop(&mut self) {
        self.shutdown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::SIM_DT;
    use crate::persistence::{MemoryStore, StoreError};

    struct FailingStore;

    impl ScoreStore for FailingStore {
        fn load(&mut self) -> Result<u64, StoreError> {
            Err(StoreError::Io(std::io::Error::other("disk gone")))
        }

        fn save(&mut self, _best: u64) -> Result<(), StoreError> {
            Err(StoreError::Io(std::io::Error::other("disk gone")))
        }
    }

    fn game_with(store: MemoryStore) -> Game {
        Game::new(7, Tuning::default(), Box::new(store), AudioManager::silent())
    }

    #[test]
    fn test_loads_best_from_store() {
        let game = game_with(MemoryStore::with_contents("31\n"));
        assert_eq!(game.state().score.best(), 31);
    }

    #[test]
    fn test_corrupt_store_starts_at_zero() {
        let game = game_with(MemoryStore::with_contents("garbage"));
        assert_eq!(game.state().score.best(), 0);
    }

    #[test]
    fn test_failing_store_never_panics() {
        let mut game = Game::new(1, Tuning::default(), Box::new(FailingStore), AudioManager::silent());
        game.handle_input(InputEvent::Start);
        for _ in 0..200 {
            game.step();
        }
        assert_eq!(game.mode(), GameMode::Over);
        game.shutdown();
    }

    #[test]
    fn test_update_runs_fixed_ticks() {
        let mut game = game_with(MemoryStore::new());
        game.handle_input(InputEvent::Start);
        assert_eq!(game.update(SIM_DT * 0.5), 0);
        assert_eq!(game.update(SIM_DT * 0.6), 1);
        assert_eq!(game.state().time_ticks, 1);
    }

    #[test]
    fn test_quit_stops_without_touching_mode() {
        let mut game = game_with(MemoryStore::new());
        game.handle_input(InputEvent::Start);
        game.handle_input(InputEvent::Quit);
        assert!(!game.is_running());
        assert_eq!(game.mode(), GameMode::Active);
    }

    #[test]
    fn test_drop_flushes_best() {
        let store = MemoryStore::with_contents("4");
        {
            let _game = game_with(store.clone());
        }
        assert_eq!(store.contents().as_deref(), Some("4"));
    }
}
