//! Fixed timestep simulation tick and mode transitions
//!
//! Input events are applied between ticks; `tick` advances one step.
//! Both report what happened through [`GameEvent`]s.

use super::collision;
use super::state::{GameEvent, GameMode, GameState};

/// Abstract input events, already decoupled from device codes
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Leave the title screen
    Start,
    /// Flap
    Jump,
    /// Pause or resume
    TogglePause,
    /// Fresh session after game over
    Restart,
    /// World dimensions changed
    Resize { width: f32, height: f32 },
    /// Process shutdown requested
    Quit,
}

/// Apply one input event to the mode machine
///
/// Events that don't apply to the current mode are ignored.
pub fn apply_input(state: &mut GameState, input: InputEvent, events: &mut Vec<GameEvent>) {
    use GameMode::*;

    match (input, state.mode) {
        (InputEvent::Start, Idle) => {
            state.mode = Active;
            log::info!("Session started (best {})", state.score.best());
            events.push(GameEvent::Started);
        }
        (InputEvent::Jump, Active) => {
            state.actor.impulse(state.tuning.jump_velocity);
            events.push(GameEvent::Jumped);
        }
        (InputEvent::TogglePause, Active) => {
            state.mode = Paused;
            log::info!("Paused at tick {}", state.time_ticks);
            events.push(GameEvent::Paused);
        }
        (InputEvent::TogglePause, Paused) => {
            state.mode = Active;
            log::info!("Resumed at tick {}", state.time_ticks);
            events.push(GameEvent::Resumed);
        }
        (InputEvent::Restart, Over) => {
            state.reset_session();
            log::info!("Session reset");
            events.push(GameEvent::Reset);
        }
        (InputEvent::Resize { width, height }, _) => {
            state.resize(width, height);
        }
        (input, mode) => {
            log::trace!("Ignoring {:?} in {:?}", input, mode);
        }
    }
}

/// Advance the game state by one fixed timestep
///
/// Only runs while Active. Order: physics, spawn, move, prune, score, collide.
pub fn tick(state: &mut GameState, events: &mut Vec<GameEvent>) {
    if !state.mode.is_simulating() {
        return;
    }

    state.time_ticks += 1;

    state.actor.integrate(state.tuning.gravity);

    state
        .obstacles
        .maybe_spawn(&mut state.rng, state.world, &state.tuning);
    state.obstacles.advance(state.tuning.pipe_speed);
    state.obstacles.prune();

    let actor_x = state.actor.x;
    for pair in state.obstacles.pairs_mut() {
        if state.score.on_pass(pair, actor_x) {
            events.push(GameEvent::Scored {
                score: state.score.session(),
            });
        }
    }

    let actor_box = state.actor.bounds();
    if collision::check(&actor_box, state.obstacles.pairs(), state.world.y) {
        state.mode = GameMode::Over;
        let new_best = state.score.commit_session_end();
        log::info!(
            "Crashed at tick {} with score {} (best {})",
            state.time_ticks,
            state.score.session(),
            state.score.best()
        );
        events.push(GameEvent::Crashed {
            score: state.score.session(),
            best: state.score.best(),
            new_best,
        });
    }
}
