//! Fire cue handle
//!
//! Decoding and mixing belong to the host audio backend. The game only
//! rewinds and plays a pre-decoded laser sound each time the player fires.

use crate::sim::GameEvent;

/// A pre-decoded sound the host can restart on demand
pub trait AudioCue {
    /// Rewind to the first sample
    fn seek_start(&mut self);
    /// Start (or continue) playback
    fn play(&mut self);
}

/// Cue for headless runs
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentCue;

impl AudioCue for SilentCue {
    fn seek_start(&mut self) {}

    fn play(&mut self) {}
}

/// Counts calls so tests can check cue ordering
#[cfg(test)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordingCue {
    pub seeks: u32,
    pub plays: u32,
    /// True when every `play` was preceded by a `seek_start`
    pub rewound_before_play: bool,
    pending_seek: bool,
}

#[cfg(test)]
impl RecordingCue {
    pub fn new() -> Self {
        Self {
            seeks: 0,
            plays: 0,
            rewound_before_play: true,
            pending_seek: false,
        }
    }
}

#[cfg(test)]
impl Default for RecordingCue {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
impl AudioCue for RecordingCue {
    fn seek_start(&mut self) {
        self.seeks += 1;
        self.pending_seek = true;
    }

    fn play(&mut self) {
        self.plays += 1;
        if !self.pending_seek {
            self.rewound_before_play = false;
        }
        self.pending_seek = false;
    }
}

/// Restart the fire cue once per shot in `events`. Returns shots played.
pub fn play_fire_cues(cue: &mut dyn AudioCue, events: &[GameEvent]) -> usize {
    let mut played = 0;
    for event in events {
        if let GameEvent::LaserFired { .. } = event {
            cue.seek_start();
            cue.play();
            played += 1;
        }
    }
    played
}
