//! Sprite handles and extents
//!
//! The simulation never touches pixels, only the size of each sprite (for
//! colliders and draw transforms) and an opaque id the renderer resolves. The
//! bundle is built once at startup and passed by reference to whoever spawns
//! entities.

use glam::DVec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Why an asset manifest was rejected
#[derive(Debug, Error)]
pub enum AssetError {
    #[error("failed to parse asset manifest: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("asset manifest lists no meteor sprites")]
    NoMeteors,
    #[error("sprite `{name}` has invalid extent {width}x{height}")]
    InvalidExtent { name: String, width: f64, height: f64 },
}

/// Opaque renderer-side handle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SpriteId(pub u32);

/// A sprite as the simulation sees it
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sprite {
    pub id: SpriteId,
    pub width: f64,
    pub height: f64,
}

impl Sprite {
    pub const fn new(id: u32, width: f64, height: f64) -> Self {
        Self {
            id: SpriteId(id),
            width,
            height,
        }
    }

    #[inline]
    pub fn size(&self) -> DVec2 {
        DVec2::new(self.width, self.height)
    }

    #[inline]
    pub fn half_extent(&self) -> DVec2 {
        self.size() / 2.0
    }
}

/// Manifest entry: a named sprite with its pixel size
#[derive(Debug, Clone, Deserialize)]
struct SpriteEntry {
    name: String,
    width: f64,
    height: f64,
}

#[derive(Debug, Clone, Deserialize)]
struct Manifest {
    player: SpriteEntry,
    laser: SpriteEntry,
    meteors: Vec<SpriteEntry>,
}

/// Every sprite the simulation can spawn
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetBundle {
    pub player: Sprite,
    pub laser: Sprite,
    /// Never empty
    pub meteors: Vec<Sprite>,
    /// Names by sprite id, for the renderer
    pub names: Vec<String>,
}

impl AssetBundle {
    /// Built-in sprite set (space shooter pack sizes)
    pub fn builtin() -> Self {
        const PLAYER: (&str, f64, f64) = ("player.png", 99.0, 75.0);
        const LASER: (&str, f64, f64) = ("laser.png", 9.0, 54.0);
        const METEORS: [(&str, f64, f64); 8] = [
            ("meteors/big1.png", 101.0, 84.0),
            ("meteors/big2.png", 120.0, 98.0),
            ("meteors/big3.png", 89.0, 82.0),
            ("meteors/big4.png", 98.0, 96.0),
            ("meteors/med1.png", 43.0, 43.0),
            ("meteors/med3.png", 45.0, 40.0),
            ("meteors/small1.png", 28.0, 28.0),
            ("meteors/small2.png", 29.0, 26.0),
        ];

        Self {
            player: Sprite::new(0, PLAYER.1, PLAYER.2),
            laser: Sprite::new(1, LASER.1, LASER.2),
            meteors: METEORS
                .iter()
                .enumerate()
                .map(|(i, &(_, w, h))| Sprite::new(i as u32 + 2, w, h))
                .collect(),
            names: [PLAYER, LASER]
                .iter()
                .chain(METEORS.iter())
                .map(|(name, _, _)| name.to_string())
                .collect(),
        }
    }

    /// Build a bundle from a JSON manifest. Ids are assigned in order:
    /// player, laser, then meteors.
    pub fn from_manifest_json(json: &str) -> Result<Self, AssetError> {
        let manifest: Manifest = serde_json::from_str(json)?;
        if manifest.meteors.is_empty() {
            return Err(AssetError::NoMeteors);
        }

        let mut names = Vec::with_capacity(manifest.meteors.len() + 2);
        let mut register = |entry: &SpriteEntry| -> Result<Sprite, AssetError> {
            if !(entry.width > 0.0 && entry.height > 0.0) {
                return Err(AssetError::InvalidExtent {
                    name: entry.name.clone(),
                    width: entry.width,
                    height: entry.height,
                });
            }
            let id = names.len() as u32;
            names.push(entry.name.clone());
            Ok(Sprite::new(id, entry.width, entry.height))
        };

        let player = register(&manifest.player)?;
        let laser = register(&manifest.laser)?;
        let meteors = manifest
            .meteors
            .iter()
            .map(&mut register)
            .collect::<Result<Vec<_>, _>>()?;

        log::info!(
            "Loaded asset manifest: {} meteor sprites, player {}x{}",
            meteors.len(),
            player.width,
            player.height
        );

        Ok(Self {
            player,
            laser,
            meteors,
            names,
        })
    }

    /// Renderer-side name of a sprite
    pub fn name(&self, id: SpriteId) -> Option<&str> {
        self.names.get(id.0 as usize).map(String::as_str)
    }
}
