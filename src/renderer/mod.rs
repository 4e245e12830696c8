//! Terminal rendering
//!
//! Presentation only: reads a [`crate::sim::Snapshot`], never mutates game state.

pub mod canvas;
pub mod hud;
pub mod terminal;

pub use canvas::{Canvas, Cell};
pub use hud::{HudLine, hud_lines};
pub use terminal::{TerminalRenderer, TerminalSession};
