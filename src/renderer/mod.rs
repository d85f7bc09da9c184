//! Rendering boundary
//!
//! The simulation hands the renderer one read-only [`Frame`] per tick. Drawing
//! itself (sprite textures, fonts, the GPU) is done by the host.

pub mod instance;

pub use instance::SpriteInstance;

use crate::sim::{Entity, GameState};

/// Everything needed to draw one frame
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub tick: u64,
    pub player: SpriteInstance,
    pub meteors: Vec<SpriteInstance>,
    pub bullets: Vec<SpriteInstance>,
    /// Zero-padded six-digit score
    pub score_text: String,
}

impl Frame {
    pub fn capture(state: &GameState) -> Self {
        Self {
            tick: state.time_ticks,
            player: state.player.transform().into(),
            meteors: state.meteors.iter().map(|m| m.transform().into()).collect(),
            bullets: state.bullets.iter().map(|b| b.transform().into()).collect(),
            score_text: state.score_text(),
        }
    }

    /// All instances in draw order: meteors, bullets, then the player on top
    pub fn instances(&self) -> Vec<SpriteInstance> {
        let mut all = Vec::with_capacity(self.meteors.len() + self.bullets.len() + 1);
        all.extend_from_slice(&self.meteors);
        all.extend_from_slice(&self.bullets);
        all.push(self.player);
        all
    }
}

/// Host-side drawing backend
pub trait Renderer {
    fn draw(&mut self, frame: &Frame);
}

/// Logs a one-line frame summary instead of drawing
#[derive(Debug, Default)]
pub struct LogRenderer {
    pub frames: u64,
}

impl Renderer for LogRenderer {
    fn draw(&mut self, frame: &Frame) {
        self.frames += 1;
        log::trace!(
            "Frame {}: {} meteors, {} bullets, score {}",
            frame.tick,
            frame.meteors.len(),
            frame.bullets.len(),
            frame.score_text
        );
    }
}
