//! Meteor Defense - a fixed-timestep arcade shooter
//!
//! Core modules:
//! - `sim`: Deterministic simulation (spawning, motion, collisions, score)
//! - `game`: Fixed-step host loop wiring the simulation to its collaborators
//! - `assets`: Sprite extents and handles, built once at startup
//! - `audio`: Fire cue handle
//! - `platform`: Input sources
//! - `renderer`: Read-only frame snapshots for an external renderer
//! - `tuning`: Data-driven game balance

pub mod assets;
pub mod audio;
pub mod game;
pub mod platform;
pub mod renderer;
pub mod sim;
pub mod tuning;

pub use assets::{AssetBundle, Sprite, SpriteId};
pub use game::Game;
pub use tuning::Tuning;

use glam::DVec2;

/// Game configuration constants (defaults for [`Tuning`])
pub mod consts {
    use std::f64::consts::PI;

    /// Fixed simulation rate
    pub const TICKS_PER_SECOND: u32 = 60;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Visible area
    pub const SCREEN_WIDTH: f64 = 800.0;
    pub const SCREEN_HEIGHT: f64 = 600.0;

    /// Player
    pub const FIRE_COOLDOWN_MS: u64 = 500;
    pub const ROTATION_PER_SECOND: f64 = PI;
    pub const BULLET_SPAWN_OFFSET: f64 = 50.0;
    pub const BULLET_SPEED_PER_SECOND: f64 = 350.0;

    /// Meteors
    pub const METEOR_SPAWN_MS: u64 = 1000;
    /// Full width of the target jitter window (±half per axis)
    pub const METEOR_TARGET_JITTER: f64 = 250.0;
    /// Full width of the spawn angle jitter window, in degrees
    pub const METEOR_ANGLE_JITTER_DEG: f64 = 60.0;
    pub const METEOR_MIN_SPEED: f64 = 0.25;
    pub const METEOR_MAX_SPEED: f64 = 1.75;
    pub const METEOR_MAX_SPIN: f64 = 0.02;

    /// Entities further than this multiple of the viewport are dropped
    pub const OUT_OF_BOUNDS_FACTOR: f64 = 1.5;
}

/// Convert polar (r, theta) to cartesian (x, y)
#[inline]
pub fn polar_to_cartesian(r: f64, theta: f64) -> DVec2 {
    DVec2::new(r * theta.cos(), r * theta.sin())
}

/// Unit direction for a sprite heading (0 = up on screen, clockwise positive)
#[inline]
pub fn heading_vector(heading: f64) -> DVec2 {
    DVec2::new(heading.sin(), -heading.cos())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_2, PI};

    #[test]
    fn test_heading_zero_points_up() {
        let v = heading_vector(0.0);
        assert!(v.x.abs() < 1e-12);
        assert!((v.y + 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_heading_quarter_turn_points_right() {
        let v = heading_vector(FRAC_PI_2);
        assert!((v.x - 1.0).abs() < 1e-12);
        assert!(v.y.abs() < 1e-12);
    }

    #[test]
    fn test_polar_to_cartesian() {
        let p = polar_to_cartesian(10.0, PI);
        assert!((p.x + 10.0).abs() < 1e-9);
        assert!(p.y.abs() < 1e-9);
    }
}
