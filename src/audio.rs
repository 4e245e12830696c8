//! Audio output
//!
//! Fire-and-forget: the game never waits on a sound and a failed sound is
//! dropped on the floor.

use std::io::{self, Write};

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Flap impulse
    Jump,
    /// Session ended
    Crash,
}

/// Something that can make a noise
pub trait AudioSink {
    /// Play an effect at the given volume (0.0 - 1.0)
    fn play(&mut self, effect: SoundEffect, volume: f32) -> io::Result<()>;
}

/// Terminal bell; the terminal decides what it sounds like
pub struct TerminalBell<W: Write> {
    out: W,
}

impl TerminalBell<io::Stdout> {
    pub fn stdout() -> Self {
        Self { out: io::stdout() }
    }
}

impl<W: Write> TerminalBell<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }
}

impl<W: Write> AudioSink for TerminalBell<W> {
    fn play(&mut self, effect: SoundEffect, _volume: f32) -> io::Result<()> {
        // Bell has no volume; a crash rings twice
        let bell: &[u8] = match effect {
            SoundEffect::Jump => b"\x07",
            SoundEffect::Crash => b"\x07\x07",
        };
        self.out.write_all(bell)?;
        self.out.flush()
    }
}

/// Audio manager for the game
pub struct AudioManager {
    sink: Option<Box<dyn AudioSink>>,
    master_volume: f32,
    sfx_volume: f32,
    muted: bool,
}

impl Default for AudioManager {
    fn default() -> Self {
        Self::silent()
    }
}

impl AudioManager {
    pub fn new(sink: Box<dyn AudioSink>) -> Self {
        Self {
            sink: Some(sink),
            master_volume: 0.8,
            sfx_volume: 1.0,
            muted: false,
        }
    }

    /// Manager with no output device
    pub fn silent() -> Self {
        Self {
            sink: None,
            master_volume: 0.8,
            sfx_volume: 1.0,
            muted: false,
        }
    }

    /// Set master volume (0.0 - 1.0)
    pub fn set_master_volume(&mut self, vol: f32) {
        self.master_volume = vol.clamp(0.0, 1.0);
    }

    /// Set sound effects volume (0.0 - 1.0)
    pub fn set_sfx_volume(&mut self, vol: f32) {
        self.sfx_volume = vol.clamp(0.0, 1.0);
    }

    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    fn effective_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.master_volume * self.sfx_volume
        }
    }

    /// Play a sound effect
    pub fn play(&mut self, effect: SoundEffect) {
        let vol = self.effective_volume();
        if vol <= 0.0 {
            return;
        }
        if let Some(sink) = self.sink.as_mut() {
            if let Err(e) = sink.play(effect, vol) {
                log::trace!("Dropped {:?}: {}", effect, e);
            }
        }
    }
}
