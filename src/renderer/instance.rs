//! Per-sprite instance data for the renderer

use bytemuck::{Pod, Zeroable};

use crate::sim::{EntityKind, SpriteTransform};

/// One sprite draw, laid out for direct upload to an instance buffer
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct SpriteInstance {
    /// Top-left corner in screen space
    pub position: [f32; 2],
    /// Rotation pivot relative to `position`
    pub half_extent: [f32; 2],
    pub rotation: f32,
    pub sprite: u32,
    pub kind: u32,
}

impl SpriteInstance {
    pub fn kind_code(kind: EntityKind) -> u32 {
        match kind {
            EntityKind::Player => 0,
            EntityKind::Meteor => 1,
            EntityKind::Bullet => 2,
        }
    }
}

impl From<SpriteTransform> for SpriteInstance {
    fn from(t: SpriteTransform) -> Self {
        Self {
            position: t.position.as_vec2().to_array(),
            half_extent: t.half_extent.as_vec2().to_array(),
            rotation: t.rotation as f32,
            sprite: t.sprite.0,
            kind: Self::kind_code(t.kind),
        }
    }
}
