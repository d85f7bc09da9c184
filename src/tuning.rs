//! Data-driven game balance
//!
//! Every gameplay constant the simulation reads lives here so a run can be
//! reconfigured from a JSON file without touching code. Defaults mirror
//! [`crate::consts`].

use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;
use crate::sim::CooldownTimer;

/// Why a tuning file was rejected
#[derive(Debug, Error)]
pub enum TuningError {
    #[error("failed to parse tuning JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("viewport must be positive, got {width}x{height}")]
    Viewport { width: f64, height: f64 },
    #[error("ticks_per_second must be non-zero")]
    TickRate,
    #[error("meteor speed range must be finite and non-empty: [{min}, {max})")]
    SpeedRange { min: f64, max: f64 },
    #[error("{field} must be finite and non-negative, got {value}")]
    Negative { field: &'static str, value: f64 },
    #[error("out_of_bounds_factor must be at least 1.0, got {0}")]
    BoundsFactor(f64),
}

/// Gameplay tuning values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub viewport_width: f64,
    pub viewport_height: f64,
    pub ticks_per_second: u32,

    // === Player ===
    pub fire_cooldown_ms: u64,
    /// Radians turned per second while a rotate key is held
    pub rotation_per_second: f64,
    /// Distance from ship centre to the muzzle
    pub bullet_spawn_offset: f64,
    pub bullet_speed_per_second: f64,

    // === Meteors ===
    pub meteor_spawn_ms: u64,
    pub meteor_target_jitter: f64,
    pub meteor_angle_jitter_deg: f64,
    /// Per-tick speed range [min, max)
    pub meteor_min_speed: f64,
    pub meteor_max_speed: f64,
    /// Spin is drawn from [-max, max) radians per tick
    pub meteor_max_spin: f64,

    // === Lifecycle ===
    pub out_of_bounds_factor: f64,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            viewport_width: SCREEN_WIDTH,
            viewport_height: SCREEN_HEIGHT,
            ticks_per_second: TICKS_PER_SECOND,

            fire_cooldown_ms: FIRE_COOLDOWN_MS,
            rotation_per_second: ROTATION_PER_SECOND,
            bullet_spawn_offset: BULLET_SPAWN_OFFSET,
            bullet_speed_per_second: BULLET_SPEED_PER_SECOND,

            meteor_spawn_ms: METEOR_SPAWN_MS,
            meteor_target_jitter: METEOR_TARGET_JITTER,
            meteor_angle_jitter_deg: METEOR_ANGLE_JITTER_DEG,
            meteor_min_speed: METEOR_MIN_SPEED,
            meteor_max_speed: METEOR_MAX_SPEED,
            meteor_max_spin: METEOR_MAX_SPIN,

            out_of_bounds_factor: OUT_OF_BOUNDS_FACTOR,
        }
    }
}

impl Tuning {
    /// Parse and validate a tuning file. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Self = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Reject values that would make the simulation degenerate
    pub fn validate(&self) -> Result<(), TuningError> {
        if !(self.viewport_width > 0.0 && self.viewport_height > 0.0) {
            return Err(TuningError::Viewport {
                width: self.viewport_width,
                height: self.viewport_height,
            });
        }
        if self.ticks_per_second == 0 {
            return Err(TuningError::TickRate);
        }
        if !(self.meteor_min_speed < self.meteor_max_speed && self.meteor_max_speed.is_finite()) {
            return Err(TuningError::SpeedRange {
                min: self.meteor_min_speed,
                max: self.meteor_max_speed,
            });
        }
        for (field, value) in [
            ("meteor_min_speed", self.meteor_min_speed),
            ("meteor_target_jitter", self.meteor_target_jitter),
            ("meteor_angle_jitter_deg", self.meteor_angle_jitter_deg),
            ("meteor_max_spin", self.meteor_max_spin),
            ("bullet_speed_per_second", self.bullet_speed_per_second),
        ] {
            if !(value >= 0.0 && value.is_finite()) {
                return Err(TuningError::Negative { field, value });
            }
        }
        if !(self.out_of_bounds_factor >= 1.0) {
            return Err(TuningError::BoundsFactor(self.out_of_bounds_factor));
        }
        Ok(())
    }

    /// Player turn rate in radians per tick
    #[inline]
    pub fn rotation_per_tick(&self) -> f64 {
        self.rotation_per_second / self.ticks_per_second as f64
    }

    /// Bullet travel per tick
    #[inline]
    pub fn bullet_speed_per_tick(&self) -> f64 {
        self.bullet_speed_per_second / self.ticks_per_second as f64
    }

    pub fn fire_cooldown(&self) -> CooldownTimer {
        CooldownTimer::from_duration(
            Duration::from_millis(self.fire_cooldown_ms),
            self.ticks_per_second,
        )
    }

    pub fn spawn_timer(&self) -> CooldownTimer {
        CooldownTimer::from_duration(
            Duration::from_millis(self.meteor_spawn_ms),
            self.ticks_per_second,
        )
    }

    /// Centre of the visible area
    pub fn viewport_center(&self) -> glam::DVec2 {
        glam::DVec2::new(self.viewport_width / 2.0, self.viewport_height / 2.0)
    }
}
