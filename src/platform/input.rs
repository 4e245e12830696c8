//! Terminal input mapping
//!
//! Turns raw crossterm events into abstract [`InputEvent`]s. The mapping is
//! the only place that knows about keys.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use glam::Vec2;

use crate::sim::{GameMode, InputEvent};

/// Frontend preferences that affect input mapping
#[derive(Debug, Clone, Copy)]
pub struct InputOptions {
    /// World units per terminal cell
    pub cell_size: Vec2,
    /// Pause when the terminal loses focus
    pub pause_on_blur: bool,
}

/// World-space resize event for a terminal of `cols` x `rows`
pub fn resize_event(cols: u16, rows: u16, cell_size: Vec2) -> InputEvent {
    InputEvent::Resize {
        width: cols as f32 * cell_size.x,
        height: rows as f32 * cell_size.y,
    }
}

/// Map a key press to a game input
///
/// Space and Up mean "start" on the title screen and "jump" everywhere else.
pub fn map_key(key: &KeyEvent, mode: GameMode) -> Option<InputEvent> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(InputEvent::Quit)
        }
        KeyCode::Char(' ') | KeyCode::Up => Some(if mode == GameMode::Idle {
            InputEvent::Start
        } else {
            InputEvent::Jump
        }),
        KeyCode::Char('p') | KeyCode::Char('P') => Some(InputEvent::TogglePause),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(InputEvent::Restart),
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(InputEvent::Quit),
        _ => None,
    }
}

/// Map any terminal event to a game input
pub fn translate(event: &Event, mode: GameMode, opts: &InputOptions) -> Option<InputEvent> {
    match event {
        Event::Key(key) => map_key(key, mode),
        Event::Resize(cols, rows) => Some(resize_event(*cols, *rows, opts.cell_size)),
        // Auto-pause only makes sense mid-session; a blur while paused must not resume
        Event::FocusLost if opts.pause_on_blur && mode == GameMode::Active => {
            log::info!("Auto-paused (focus lost)");
            Some(InputEvent::TogglePause)
        }
        _ => None,
    }
}
