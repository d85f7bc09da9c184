//! Game state and core simulation types
//!
//! Everything the tick mutates lives here; a serialized `GameState` is a
//! complete, resumable snapshot including the RNG stream.

use glam::DVec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::entity::{Bullet, Meteor, Player};
use super::spawner::Spawner;
use super::timer::CooldownTimer;
use crate::assets::AssetBundle;
use crate::tuning::{Tuning, TuningError};

/// Something that happened during a tick, for audio and logging
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Player fired; the fire cue should restart
    LaserFired { bullet_id: u32 },
    MeteorSpawned { meteor_id: u32 },
    MeteorDestroyed { meteor_id: u32, bullet_id: u32, point: DVec2 },
    PlayerHit { meteor_id: u32 },
}

/// Lifetime counters
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunStats {
    pub meteors_spawned: u64,
    pub meteors_destroyed: u64,
    pub shots_fired: u64,
    pub player_hits: u64,
    pub pruned: u64,
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Spawn RNG, seeded from `seed`
    pub rng: Pcg32,
    pub tuning: Tuning,
    /// Simulation tick counter
    pub time_ticks: u64,
    pub player: Player,
    pub spawn_timer: CooldownTimer,
    /// Spawn geometry derived from `tuning` at construction
    pub spawner: Spawner,
    /// Live meteors (spawn order)
    pub meteors: Vec<Meteor>,
    /// Live bullets (fire order)
    pub bullets: Vec<Bullet>,
    /// Never negative after a tick completes
    pub score: i64,
    /// Events from the most recent tick
    #[serde(skip)]
    pub events: Vec<GameEvent>,
    pub stats: RunStats,
    /// Next entity ID
    next_id: u32,
}

impl GameState {
    /// Create a new game state with the given seed.
    /// Tuning that fails validation is rejected here so the tick never sees it.
    pub fn new(seed: u64, tuning: Tuning, assets: &AssetBundle) -> Result<Self, TuningError> {
        tuning.validate()?;
        let player = Player::new(assets, &tuning);
        let spawn_timer = tuning.spawn_timer();
        let spawner = Spawner::new(&tuning);
        Ok(Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            tuning,
            time_ticks: 0,
            player,
            spawn_timer,
            spawner,
            meteors: Vec::new(),
            bullets: Vec::new(),
            score: 0,
            events: Vec::new(),
            stats: RunStats::default(),
            next_id: 1,
        })
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id = self.next_id.wrapping_add(1);
        id
    }

    /// Score as shown on the HUD
    pub fn score_text(&self) -> String {
        format!("{:06}", self.score.max(0))
    }
}
