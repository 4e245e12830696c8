//! Whole-game scenarios driven through the public API

use std::cell::RefCell;
use std::io;
use std::rc::Rc;

use flappy::Game;
use flappy::Tuning;
use flappy::audio::{AudioManager, AudioSink, SoundEffect};
use flappy::consts::*;
use flappy::persistence::MemoryStore;
use flappy::sim::{GameEvent, GameMode, GameState, InputEvent, apply_input, tick};

struct Recorder(Rc<RefCell<Vec<SoundEffect>>>);

impl AudioSink for Recorder {
    fn play(&mut self, effect: SoundEffect, _volume: f32) -> io::Result<()> {
        self.0.borrow_mut().push(effect);
        Ok(())
    }
}

fn input(state: &mut GameState, event: InputEvent) {
    let mut events = Vec::new();
    apply_input(state, event, &mut events);
}

fn step(state: &mut GameState) -> Vec<GameEvent> {
    let mut events = Vec::new();
    tick(state, &mut events);
    events
}

/// Zero gravity in the shortest world: the actor hovers at y=150 and every
/// gap sits at 100..250, so each pair is passed cleanly.
fn hover_tuning() -> Tuning {
    Tuning {
        gravity: 0.0,
        ..Default::default()
    }
}

fn hover_game(store: MemoryStore, audio: AudioManager) -> Game {
    let mut game = Game::new(3, hover_tuning(), Box::new(store), audio);
    game.handle_input(InputEvent::Resize {
        width: WORLD_WIDTH,
        height: MIN_WORLD_HEIGHT,
    });
    game
}

/// Step until the session score reaches `target`
fn play_until_score(game: &mut Game, target: u64) {
    for _ in 0..10_000 {
        if game.state().score.session() >= target {
            return;
        }
        game.step();
        assert_eq!(game.mode(), GameMode::Active, "session ended early");
    }
    panic!("score {} never reached", target);
}

/// Flap into the ceiling
fn crash(game: &mut Game) {
    game.handle_input(InputEvent::Jump);
    for _ in 0..100 {
        if game.mode() == GameMode::Over {
            return;
        }
        game.step();
    }
    panic!("never crashed");
}

#[test]
fn free_fall_trajectory_and_first_spawn() {
    let mut state = GameState::new(11, Tuning::default(), 0);
    // Tall world so 90 ticks of free fall stay in bounds
    input(
        &mut state,
        InputEvent::Resize {
            width: WORLD_WIDTH,
            height: 10_000.0,
        },
    );
    input(&mut state, InputEvent::Start);
    let y0 = state.actor.y;

    for t in 1..=SPAWN_INTERVAL_TICKS {
        step(&mut state);
        let expected_spawned = if t < SPAWN_INTERVAL_TICKS { 0 } else { 1 };
        assert_eq!(state.obstacles.len(), expected_spawned, "tick {}", t);
    }

    let expected_drop: f32 = (1..=90).map(|k| 0.5 * k as f32).sum();
    assert_eq!(expected_drop, 2047.5);
    assert!((state.actor.y - (y0 + expected_drop)).abs() < 1e-2);
    assert!((state.actor.vel - 45.0).abs() < 1e-4);
    assert_eq!(state.mode, GameMode::Active);
}

#[test]
fn spawns_only_while_active() {
    let mut state = GameState::new(5, hover_tuning(), 0);
    input(
        &mut state,
        InputEvent::Resize {
            width: WORLD_WIDTH,
            height: MIN_WORLD_HEIGHT,
        },
    );

    for _ in 0..500 {
        step(&mut state);
    }
    assert!(state.obstacles.is_empty());
    assert_eq!(state.obstacles.countdown(), 0);

    input(&mut state, InputEvent::Start);
    let mut spawn_ticks = Vec::new();
    for t in 1..=360u32 {
        let before = state.obstacles.countdown();
        step(&mut state);
        if state.obstacles.countdown() == 0 && before == SPAWN_INTERVAL_TICKS - 1 {
            spawn_ticks.push(t);
        }
    }
    assert_eq!(spawn_ticks, vec![90, 180, 270, 360]);

    input(&mut state, InputEvent::TogglePause);
    let live = state.obstacles.len();
    let countdown = state.obstacles.countdown();
    for _ in 0..500 {
        step(&mut state);
    }
    assert_eq!(state.obstacles.len(), live);
    assert_eq!(state.obstacles.countdown(), countdown);
}

#[test]
fn one_point_per_pair_passed() {
    let mut state = GameState::new(9, hover_tuning(), 0);
    input(
        &mut state,
        InputEvent::Resize {
            width: WORLD_WIDTH,
            height: MIN_WORLD_HEIGHT,
        },
    );
    input(&mut state, InputEvent::Start);

    let mut last = 0;
    for _ in 0..1000 {
        let events = step(&mut state);
        let now = state.score.session();
        assert!(now == last || now == last + 1);
        let scored = events
            .iter()
            .filter(|e| matches!(e, GameEvent::Scored { .. }))
            .count() as u64;
        assert_eq!(scored, now - last);
        last = now;
    }
    // Pair k spawns on tick 90k and reaches the actor on tick 90k + 99
    assert_eq!(state.score.session(), 10);
    assert_eq!(state.mode, GameMode::Active);
}

#[test]
fn pause_freezes_everything_and_resumes_exactly() {
    let mut state = GameState::new(21, Tuning::default(), 0);
    input(&mut state, InputEvent::Start);
    for _ in 0..20 {
        step(&mut state);
    }

    let mut control = state.clone();

    input(&mut state, InputEvent::TogglePause);
    assert_eq!(state.mode, GameMode::Paused);
    for _ in 0..100 {
        assert!(step(&mut state).is_empty());
    }
    assert_eq!(state.actor, control.actor);
    assert_eq!(state.obstacles.pairs(), control.obstacles.pairs());
    assert_eq!(state.obstacles.countdown(), control.obstacles.countdown());
    assert_eq!(state.score, control.score);
    assert_eq!(state.time_ticks, control.time_ticks);

    input(&mut state, InputEvent::TogglePause);
    assert_eq!(state.mode, GameMode::Active);
    for _ in 0..80 {
        step(&mut state);
        step(&mut control);
    }
    assert_eq!(state.actor, control.actor);
    assert_eq!(state.obstacles.pairs(), control.obstacles.pairs());
    assert_eq!(state.mode, control.mode);
}

#[test]
fn best_score_is_monotone_and_survives_restart() {
    let store = MemoryStore::new();
    let sounds = Rc::new(RefCell::new(Vec::new()));

    {
        let audio = AudioManager::new(Box::new(Recorder(sounds.clone())));
        let mut game = hover_game(store.clone(), audio);

        game.handle_input(InputEvent::Start);
        play_until_score(&mut game, 3);
        crash(&mut game);
        assert_eq!(game.state().score.best(), 3);
        // Written through at session end, before any shutdown
        assert_eq!(store.contents().as_deref(), Some("3"));

        // A worse session leaves the best alone
        game.handle_input(InputEvent::Restart);
        assert_eq!(game.mode(), GameMode::Idle);
        assert_eq!(game.state().score.session(), 0);
        game.handle_input(InputEvent::Start);
        play_until_score(&mut game, 1);
        crash(&mut game);
        assert_eq!(game.state().score.session(), 1);
        assert_eq!(game.state().score.best(), 3);
        assert_eq!(store.contents().as_deref(), Some("3"));

        game.handle_input(InputEvent::Quit);
        game.shutdown();
    }

    let jumps = sounds
        .borrow()
        .iter()
        .filter(|s| **s == SoundEffect::Jump)
        .count();
    assert_eq!(jumps, 2);

    // Fresh process over the same store
    let mut game = hover_game(store.clone(), AudioManager::silent());
    assert_eq!(game.state().score.best(), 3);

    game.handle_input(InputEvent::Start);
    play_until_score(&mut game, 4);
    crash(&mut game);
    assert_eq!(game.state().score.best(), 4);
    drop(game);
    assert_eq!(store.contents().as_deref(), Some("4"));
}

#[test]
fn corrupt_best_score_starts_at_zero() {
    let store = MemoryStore::with_contents("high score: lots");
    let game = hover_game(store.clone(), AudioManager::silent());
    assert_eq!(game.state().score.best(), 0);
    drop(game);
    // Exit flush replaces the corrupt contents
    assert_eq!(store.contents().as_deref(), Some("0"));
}
