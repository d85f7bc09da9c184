//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable iteration order (spawn/fire order)
//! - No rendering, audio or platform dependencies

pub mod collision;
pub mod entity;
pub mod geom;
pub mod spawner;
pub mod state;
pub mod tick;
pub mod timer;

pub use collision::{BulletHit, prune_out_of_bounds, resolve_bullet_hits, resolve_player_hits};
pub use entity::{Bullet, Entity, EntityKind, Meteor, Player, SpriteTransform};
pub use geom::{Rect, Vector2};
pub use spawner::{SpawnPlan, Spawner};
pub use state::{GameEvent, GameState, RunStats};
pub use tick::{TickInput, tick};
pub use timer::CooldownTimer;
