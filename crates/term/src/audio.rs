//! Audio sinks for the cues queued by the game.
//!
//! Cues are fire-and-forget: a sink never reports failure back to the game.

use std::io::{self, Write};
use std::str::FromStr;

use crate::types::SoundCue;

/// Plays cues drained from the game state.
pub trait AudioSink {
    fn play(&mut self, cue: SoundCue);
}

/// Discards every cue.
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentAudio;

impl AudioSink for SilentAudio {
    fn play(&mut self, _cue: SoundCue) {}
}

/// Rings the terminal bell once per cleared line.
///
/// Move and rotate cues are silent; a bell per keypress is unbearable.
#[derive(Debug)]
pub struct BellAudio<W: Write = io::Stdout> {
    out: W,
}

impl BellAudio<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> BellAudio<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn ring(&mut self, times: u8) -> io::Result<()> {
        for _ in 0..times {
            self.out.write_all(b"\x07")?;
        }
        self.out.flush()
    }
}

impl<W: Write> AudioSink for BellAudio<W> {
    fn play(&mut self, cue: SoundCue) {
        let SoundCue::LineClear(lines) = cue else {
            return;
        };
        if let Err(err) = self.ring(lines) {
            log::debug!("bell failed: {err}");
        }
    }
}

impl<S: AudioSink + ?Sized> AudioSink for Box<S> {
    fn play(&mut self, cue: SoundCue) {
        (**self).play(cue);
    }
}

/// Which sink the host should build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AudioMode {
    Off,
    #[default]
    Bell,
}

impl AudioMode {
    pub fn sink(self) -> Box<dyn AudioSink> {
        match self {
            AudioMode::Off => Box::new(SilentAudio),
            AudioMode::Bell => Box::new(BellAudio::stdout()),
        }
    }
}

impl FromStr for AudioMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "off" | "none" | "0" | "false" => Ok(AudioMode::Off),
            "bell" | "on" | "1" | "true" => Ok(AudioMode::Bell),
            other => Err(format!("unknown audio mode: {other}")),
        }
    }
}
