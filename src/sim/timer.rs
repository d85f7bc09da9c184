//! Tick-counted cooldowns
//!
//! A timer is NOT_READY until `update()` has been called `target_ticks` times
//! since the last `reset()`, then stays READY until reset again.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Cooldown gating a repeatable action (firing, spawning)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CooldownTimer {
    elapsed_ticks: u32,
    target_ticks: u32,
}

impl CooldownTimer {
    /// A fresh timer that starts NOT_READY (unless `target_ticks` is 0)
    pub fn new(target_ticks: u32) -> Self {
        Self {
            elapsed_ticks: 0,
            target_ticks,
        }
    }

    /// A timer that is already READY
    pub fn ready(target_ticks: u32) -> Self {
        Self {
            elapsed_ticks: target_ticks,
            target_ticks,
        }
    }

    /// Convert a wall-clock duration to a tick target (truncating)
    pub fn from_duration(duration: Duration, ticks_per_second: u32) -> Self {
        let ticks = duration.as_millis() * ticks_per_second as u128 / 1000;
        Self::new(u32::try_from(ticks).unwrap_or(u32::MAX))
    }

    /// Advance one tick, saturating at the target
    #[inline]
    pub fn update(&mut self) {
        if self.elapsed_ticks < self.target_ticks {
            self.elapsed_ticks += 1;
        }
    }

    #[inline]
    pub fn is_ready(&self) -> bool {
        self.elapsed_ticks >= self.target_ticks
    }

    #[inline]
    pub fn reset(&mut self) {
        self.elapsed_ticks = 0;
    }

    pub fn elapsed_ticks(&self) -> u32 {
        self.elapsed_ticks
    }

    pub fn target_ticks(&self) -> u32 {
        self.target_ticks
    }
}
