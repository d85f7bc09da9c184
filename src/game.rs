//! Fixed-step host loop
//!
//! Owns the simulation state plus its collaborators (assets, the fire cue)
//! and turns variable real-time frame deltas into whole simulation ticks.

use crate::assets::AssetBundle;
use crate::audio::{AudioCue, play_fire_cues};
use crate::consts::MAX_SUBSTEPS;
use crate::platform::InputSource;
use crate::renderer::Frame;
use crate::sim::{GameState, TickInput, tick};
use crate::tuning::{Tuning, TuningError};

/// Longest frame delta honoured, in seconds
const MAX_FRAME_DT: f64 = 0.1;

/// Game instance holding all state
pub struct Game<C: AudioCue> {
    state: GameState,
    assets: AssetBundle,
    fire_cue: C,
    accumulator: f64,
}

impl<C: AudioCue> Game<C> {
    pub fn new(
        seed: u64,
        tuning: Tuning,
        assets: AssetBundle,
        fire_cue: C,
    ) -> Result<Self, TuningError> {
        let state = GameState::new(seed, tuning, &assets)?;
        let tuning = &state.tuning;
        log::info!(
            "New game: seed {}, {}x{} @ {} ticks/s",
            seed,
            tuning.viewport_width,
            tuning.viewport_height,
            tuning.ticks_per_second
        );
        Ok(Self {
            state,
            assets,
            fire_cue,
            accumulator: 0.0,
        })
    }

    /// Run exactly one simulation tick and issue its side effects
    pub fn step(&mut self, input: &TickInput) {
        tick(&mut self.state, input, &self.assets);
        play_fire_cues(&mut self.fire_cue, &self.state.events);
    }

    /// Advance by a real-time delta, polling input once per tick.
    /// Returns the number of ticks run.
    pub fn advance(&mut self, dt: f64, input: &mut dyn InputSource) -> u32 {
        let tick_dt = 1.0 / self.state.tuning.ticks_per_second as f64;
        if dt.is_finite() {
            self.accumulator += dt.clamp(0.0, MAX_FRAME_DT);
        } else {
            log::warn!("Ignoring non-finite frame delta {dt}");
        }

        let mut substeps = 0;
        while self.accumulator >= tick_dt && substeps < MAX_SUBSTEPS {
            let polled = input.poll();
            self.step(&polled);
            self.accumulator -= tick_dt;
            substeps += 1;
        }
        if substeps == MAX_SUBSTEPS && self.accumulator >= tick_dt {
            log::warn!(
                "Simulation behind by {:.1} ticks, dropping backlog",
                self.accumulator / tick_dt
            );
            self.accumulator = 0.0;
        }
        substeps
    }

    /// Read-only snapshot for the renderer
    pub fn frame(&self) -> Frame {
        Frame::capture(&self.state)
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    pub fn assets(&self) -> &AssetBundle {
        &self.assets
    }

    pub fn fire_cue(&self) -> &C {
        &self.fire_cue
    }
}
