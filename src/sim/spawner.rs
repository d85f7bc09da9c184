//! Meteor generation
//!
//! Meteors appear on a circle around a jittered point near the viewport centre
//! and travel toward that point, so every meteor crosses the play area no
//! matter which side it enters from.

use std::f64::consts::TAU;

use glam::DVec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::entity::Meteor;
use crate::assets::AssetBundle;
use crate::polar_to_cartesian;
use crate::tuning::Tuning;

/// Everything random about one meteor, before it becomes an entity
#[derive(Debug, Clone, PartialEq)]
pub struct SpawnPlan {
    /// Point the meteor converges toward
    pub target: DVec2,
    pub position: DVec2,
    pub movement: DVec2,
    pub rotation_speed: f64,
    pub sprite_index: usize,
}

/// Spawn geometry derived from tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Spawner {
    center: DVec2,
    half_jitter: f64,
    radius: f64,
    half_angle_jitter: f64,
    min_speed: f64,
    max_speed: f64,
    max_spin: f64,
}

impl Spawner {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            center: tuning.viewport_center(),
            half_jitter: tuning.meteor_target_jitter / 2.0,
            radius: tuning.viewport_width / 2.0,
            half_angle_jitter: tuning.meteor_angle_jitter_deg.to_radians() / 2.0,
            min_speed: tuning.meteor_min_speed,
            max_speed: tuning.meteor_max_speed,
            max_spin: tuning.meteor_max_spin,
        }
    }

    /// Uniform draw from `[-half, half)`, or exactly 0 for an empty window
    fn jitter<R: Rng + ?Sized>(rng: &mut R, half: f64) -> f64 {
        if half > 0.0 {
            rng.random_range(-half..half)
        } else {
            0.0
        }
    }

    /// Roll the random parameters of a new meteor
    pub fn plan<R: Rng + ?Sized>(&self, rng: &mut R, sprite_count: usize) -> SpawnPlan {
        let target = self.center
            + DVec2::new(
                Self::jitter(rng, self.half_jitter),
                Self::jitter(rng, self.half_jitter),
            );

        let angle = rng.random_range(0.0..TAU) + Self::jitter(rng, self.half_angle_jitter);
        let position = target + polar_to_cartesian(self.radius, angle);

        let speed = rng.random_range(self.min_speed..self.max_speed);
        // |target - position| == radius > 0
        let direction = (target - position).normalize();
        let movement = direction * speed;

        let rotation_speed = Self::jitter(rng, self.max_spin);
        let sprite_index = rng.random_range(0..sprite_count.max(1));

        SpawnPlan {
            target,
            position,
            movement,
            rotation_speed,
            sprite_index,
        }
    }

    /// Roll a new meteor. `id` is assigned by the caller.
    pub fn spawn<R: Rng + ?Sized>(&self, rng: &mut R, assets: &AssetBundle, id: u32) -> Meteor {
        let plan = self.plan(rng, assets.meteors.len());
        // Bundles always carry at least one meteor sprite
        let sprite = assets.meteors[plan.sprite_index];
        log::debug!(
            "Meteor {} spawned at ({:.1}, {:.1}) heading for ({:.1}, {:.1})",
            id,
            plan.position.x,
            plan.position.y,
            plan.target.x,
            plan.target.y
        );
        Meteor {
            id,
            position: plan.position,
            movement: plan.movement,
            rotation: 0.0,
            rotation_speed: plan.rotation_speed,
            sprite,
        }
    }
}
