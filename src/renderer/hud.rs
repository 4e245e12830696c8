//! Mode-dependent text overlays

use crate::sim::{GameMode, Snapshot};

/// One line of overlay text anchored at a world-space y
#[derive(Debug, Clone, PartialEq)]
pub struct HudLine {
    pub text: String,
    pub y: f32,
}

fn line(text: impl Into<String>, y: f32) -> HudLine {
    HudLine {
        text: text.into(),
        y,
    }
}

/// Overlay text for the current frame
pub fn hud_lines(snapshot: &Snapshot<'_>) -> Vec<HudLine> {
    let mid = snapshot.world.y / 2.0;
    match snapshot.mode {
        GameMode::Idle => vec![
            line("Flappy Bird", 150.0),
            line("Press SPACE to Start", 220.0),
            line(format!("Best: {}", snapshot.best), 260.0),
        ],
        GameMode::Active => vec![line(format!("Score: {}", snapshot.score), 30.0)],
        GameMode::Paused => vec![
            line(format!("Score: {}", snapshot.score), 30.0),
            line("Paused", mid - 40.0),
            line("Press P to Resume", mid + 10.0),
        ],
        GameMode::Over => vec![
            line(format!("Score: {}", snapshot.score), 30.0),
            line("Game Over", 200.0),
            line(format!("Score: {}", snapshot.score), 260.0),
            line(format!("High Score: {}", snapshot.best), 300.0),
            line("Press R to Restart", 350.0),
        ],
    }
}
