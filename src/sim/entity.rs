//! Entities and their per-tick motion
//!
//! Player, meteors and bullets share one capability set ([`Entity`]): each has
//! a top-left position, a rotation and a sprite, from which the collider and the
//! draw transform are derived. Motion integration stays per kind.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use super::geom::Rect;
use super::tick::TickInput;
use super::timer::CooldownTimer;
use crate::assets::{AssetBundle, Sprite, SpriteId};
use crate::heading_vector;
use crate::tuning::Tuning;

/// Entity variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityKind {
    Player,
    Meteor,
    Bullet,
}

/// Raw draw parameters: the renderer centres the sprite on its half extent,
/// rotates, then translates to `position`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpriteTransform {
    pub kind: EntityKind,
    pub sprite: SpriteId,
    pub position: DVec2,
    pub rotation: f64,
    pub half_extent: DVec2,
}

/// Drawable, collidable entity
pub trait Entity {
    fn kind(&self) -> EntityKind;

    /// Top-left corner of the sprite
    fn position(&self) -> DVec2;

    /// Radians, unbounded
    fn rotation(&self) -> f64;

    fn sprite(&self) -> Sprite;

    /// Unrotated sprite bounds at the current position
    fn collider(&self) -> Rect {
        Rect::from_origin_size(self.position(), self.sprite().size())
    }

    fn transform(&self) -> SpriteTransform {
        let sprite = self.sprite();
        SpriteTransform {
            kind: self.kind(),
            sprite: sprite.id,
            position: self.position(),
            rotation: self.rotation(),
            half_extent: sprite.half_extent(),
        }
    }

    /// True once the entity has drifted past `factor` viewports on either axis
    fn is_out_of_bounds(&self, tuning: &Tuning) -> bool {
        let p = self.position();
        let limit_x = tuning.viewport_width * tuning.out_of_bounds_factor;
        let limit_y = tuning.viewport_height * tuning.out_of_bounds_factor;
        !(p.x.abs() < limit_x && p.y.abs() < limit_y)
    }
}

/// The player's ship
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub position: DVec2,
    pub rotation: f64,
    pub sprite: Sprite,
    pub fire_cooldown: CooldownTimer,
}

impl Player {
    /// Ship centred in the viewport, pointing up, cooldown not yet elapsed
    pub fn new(assets: &AssetBundle, tuning: &Tuning) -> Self {
        let sprite = assets.player;
        Self {
            position: tuning.viewport_center() - sprite.half_extent(),
            rotation: 0.0,
            sprite,
            fire_cooldown: tuning.fire_cooldown(),
        }
    }

    /// Centre of the ship sprite
    pub fn center(&self) -> DVec2 {
        self.position + self.sprite.half_extent()
    }

    /// Where a bullet fired now would appear
    pub fn muzzle(&self, offset: f64) -> DVec2 {
        self.center() + heading_vector(self.rotation) * offset
    }

    /// Turn, advance the fire cooldown, and fire if allowed
    pub fn update(&mut self, input: &TickInput, tuning: &Tuning, laser: Sprite) -> Option<Bullet> {
        let speed = tuning.rotation_per_tick();
        if input.rotate_left {
            self.rotation -= speed;
        }
        if input.rotate_right {
            self.rotation += speed;
        }

        self.fire_cooldown.update();
        if !(self.fire_cooldown.is_ready() && input.fire) {
            return None;
        }
        self.fire_cooldown.reset();

        let muzzle = self.muzzle(tuning.bullet_spawn_offset);
        Some(Bullet::new(muzzle, self.rotation, laser))
    }
}

impl Entity for Player {
    fn kind(&self) -> EntityKind {
        EntityKind::Player
    }

    fn position(&self) -> DVec2 {
        self.position
    }

    fn rotation(&self) -> f64 {
        self.rotation
    }

    fn sprite(&self) -> Sprite {
        self.sprite
    }
}

/// A hostile rock drifting on a straight line
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Meteor {
    pub id: u32,
    pub position: DVec2,
    /// Constant per-tick displacement
    pub movement: DVec2,
    pub rotation: f64,
    /// Constant per-tick spin
    pub rotation_speed: f64,
    pub sprite: Sprite,
}

impl Meteor {
    pub fn update(&mut self) {
        self.position += self.movement;
        self.rotation += self.rotation_speed;
    }
}

impl Entity for Meteor {
    fn kind(&self) -> EntityKind {
        EntityKind::Meteor
    }

    fn position(&self) -> DVec2 {
        self.position
    }

    fn rotation(&self) -> f64 {
        self.rotation
    }

    fn sprite(&self) -> Sprite {
        self.sprite
    }
}

/// A laser bolt. Heading is fixed when fired.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bullet {
    pub id: u32,
    pub position: DVec2,
    pub heading: f64,
    pub sprite: Sprite,
}

impl Bullet {
    /// Bullet whose sprite is centred on `muzzle`. Ids are assigned by the
    /// game state when the bullet is added.
    pub fn new(muzzle: DVec2, heading: f64, sprite: Sprite) -> Self {
        Self {
            id: 0,
            position: muzzle - sprite.half_extent(),
            heading,
            sprite,
        }
    }

    pub fn update(&mut self, speed_per_tick: f64) {
        self.position += heading_vector(self.heading) * speed_per_tick;
    }
}

impl Entity for Bullet {
    fn kind(&self) -> EntityKind {
        EntityKind::Bullet
    }

    fn position(&self) -> DVec2 {
        self.position
    }

    fn rotation(&self) -> f64 {
        self.heading
    }

    fn sprite(&self) -> Sprite {
        self.sprite
    }
}
