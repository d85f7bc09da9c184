//! Collision resolution and entity lifecycle
//!
//! Each pass reads an unmodified snapshot of both collections, marks what must
//! go, then compacts with `retain`. Survivors keep their relative order, and no
//! entity is skipped or resolved twice regardless of how many hits land in the
//! same tick.

use glam::DVec2;

use super::entity::{Bullet, Entity, Meteor, Player};
use crate::tuning::Tuning;

/// A meteor destroyed by a bullet
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BulletHit {
    pub meteor_id: u32,
    pub bullet_id: u32,
    /// Centre of the destroyed meteor's collider
    pub point: DVec2,
}

/// Remove every meteor/bullet pair whose colliders touch.
///
/// A meteor pairs with the first bullet (in collection order) it touches that
/// has not already been spent on an earlier meteor this pass. One hit removes
/// exactly one meteor and one bullet.
pub fn resolve_bullet_hits(meteors: &mut Vec<Meteor>, bullets: &mut Vec<Bullet>) -> Vec<BulletHit> {
    if meteors.is_empty() || bullets.is_empty() {
        return Vec::new();
    }

    let bullet_colliders: Vec<_> = bullets.iter().map(Entity::collider).collect();
    let mut bullet_spent = vec![false; bullets.len()];
    let mut meteor_hit = vec![false; meteors.len()];
    let mut hits = Vec::new();

    for (mi, meteor) in meteors.iter().enumerate() {
        let collider = meteor.collider();
        let found = bullet_colliders
            .iter()
            .enumerate()
            .position(|(bi, rect)| !bullet_spent[bi] && collider.intersects(rect));

        if let Some(bi) = found {
            bullet_spent[bi] = true;
            meteor_hit[mi] = true;
            hits.push(BulletHit {
                meteor_id: meteor.id,
                bullet_id: bullets[bi].id,
                point: collider.center(),
            });
        }
    }

    retain_unmarked(meteors, &meteor_hit);
    retain_unmarked(bullets, &bullet_spent);
    hits
}

/// Remove every meteor touching the player. Returns the ids removed.
pub fn resolve_player_hits(player: &Player, meteors: &mut Vec<Meteor>) -> Vec<u32> {
    let ship = player.collider();
    let mut removed = Vec::new();
    meteors.retain(|m| {
        let hit = m.collider().intersects(&ship);
        if hit {
            removed.push(m.id);
        }
        !hit
    });
    removed
}

/// Drop entities that have drifted too far outside the viewport.
/// Returns how many were removed.
pub fn prune_out_of_bounds<E: Entity>(entities: &mut Vec<E>, tuning: &Tuning) -> usize {
    let before = entities.len();
    entities.retain(|e| !e.is_out_of_bounds(tuning));
    before - entities.len()
}

fn retain_unmarked<T>(items: &mut Vec<T>, marked: &[bool]) {
    let mut index = 0;
    items.retain(|_| {
        let keep = !marked[index];
        index += 1;
        keep
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::{AssetBundle, Sprite};
    use proptest::prelude::*;

    const BOX: Sprite = Sprite::new(100, 10.0, 10.0);

    fn meteor(id: u32, x: f64, y: f64) -> Meteor {
        Meteor {
            id,
            position: DVec2::new(x, y),
            movement: DVec2::ZERO,
            rotation: 0.0,
            rotation_speed: 0.0,
            sprite: BOX,
        }
    }

    fn bullet(id: u32, x: f64, y: f64) -> Bullet {
        Bullet {
            id,
            position: DVec2::new(x, y),
            heading: 0.0,
            sprite: BOX,
        }
    }

    fn ids<E>(items: &[E], id: impl Fn(&E) -> u32) -> Vec<u32> {
        items.iter().map(id).collect()
    }

    #[test]
    fn test_single_hit_removes_both() {
        let mut meteors = vec![meteor(1, 0.0, 0.0), meteor(2, 100.0, 0.0)];
        let mut bullets = vec![bullet(10, 5.0, 5.0), bullet(11, 300.0, 300.0)];

        let hits = resolve_bullet_hits(&mut meteors, &mut bullets);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].meteor_id, 1);
        assert_eq!(hits[0].bullet_id, 10);
        assert_eq!(hits[0].point, DVec2::new(5.0, 5.0));
        assert_eq!(ids(&meteors, |m| m.id), vec![2]);
        assert_eq!(ids(&bullets, |b| b.id), vec![11]);
    }

    #[test]
    fn test_two_bullets_one_meteor() {
        // Both bullets overlap the meteor; only the first is consumed
        let mut meteors = vec![meteor(1, 0.0, 0.0)];
        let mut bullets = vec![bullet(10, 2.0, 2.0), bullet(11, 4.0, 4.0)];

        let hits = resolve_bullet_hits(&mut meteors, &mut bullets);
        assert_eq!(hits.len(), 1);
        assert!(meteors.is_empty());
        assert_eq!(ids(&bullets, |b| b.id), vec![11]);
    }

    #[test]
    fn test_one_bullet_two_meteors() {
        // Overlapping meteors; the bullet is spent on the first
        let mut meteors = vec![meteor(1, 0.0, 0.0), meteor(2, 3.0, 0.0)];
        let mut bullets = vec![bullet(10, 1.0, 1.0)];

        let hits = resolve_bullet_hits(&mut meteors, &mut bullets);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].meteor_id, 1);
        assert_eq!(ids(&meteors, |m| m.id), vec![2]);
        assert!(bullets.is_empty());
    }

    #[test]
    fn test_adjacent_hits_are_not_skipped() {
        // Consecutive entries colliding is where index-shifting removal skips
        let mut meteors = vec![meteor(1, 0.0, 0.0), meteor(2, 50.0, 0.0), meteor(3, 100.0, 0.0)];
        let mut bullets = vec![bullet(10, 0.0, 0.0), bullet(11, 50.0, 0.0), bullet(12, 100.0, 0.0)];

        let hits = resolve_bullet_hits(&mut meteors, &mut bullets);
        assert_eq!(hits.len(), 3);
        assert!(meteors.is_empty());
        assert!(bullets.is_empty());
    }

    #[test]
    fn test_edge_contact_counts() {
        let mut meteors = vec![meteor(1, 0.0, 0.0)];
        let mut bullets = vec![bullet(10, 10.0, 0.0)];
        assert_eq!(resolve_bullet_hits(&mut meteors, &mut bullets).len(), 1);
    }

    #[test]
    fn test_player_hits() {
        let assets = AssetBundle::builtin();
        let tuning = Tuning::default();
        let player = Player::new(&assets, &tuning);
        let c = player.center();

        let mut meteors = vec![
            meteor(1, c.x, c.y),
            meteor(2, 0.0, 0.0),
            meteor(3, c.x - 20.0, c.y + 10.0),
        ];
        let removed = resolve_player_hits(&player, &mut meteors);
        assert_eq!(removed, vec![1, 3]);
        assert_eq!(ids(&meteors, |m| m.id), vec![2]);
    }

    #[test]
    fn test_pruning() {
        let tuning = Tuning::default();
        let w = tuning.viewport_width;
        let mut meteors = vec![meteor(1, 2.0 * w, 0.0), meteor(2, 0.5 * w, 0.0)];
        let removed = prune_out_of_bounds(&mut meteors, &tuning);
        assert_eq!(removed, 1);
        assert_eq!(ids(&meteors, |m| m.id), vec![2]);

        let mut bullets = vec![bullet(1, 0.0, -2.0 * tuning.viewport_height), bullet(2, 0.0, 0.0)];
        assert_eq!(prune_out_of_bounds(&mut bullets, &tuning), 1);
        assert_eq!(ids(&bullets, |b| b.id), vec![2]);
    }

    proptest! {
        /// K disjoint colliding pairs among N meteors and M bullets
        #[test]
        fn prop_collision_removal_exact(
            k in 0usize..8,
            extra_meteors in 0usize..8,
            extra_bullets in 0usize..8,
            seed in any::<u64>(),
        ) {
            // Every entity gets its own grid cell, except colliding pairs which share one
            let cell = |i: usize| (i as f64 * 100.0, (i % 3) as f64 * 100.0);
            let mut next_cell = 0;
            let mut meteors = Vec::new();
            let mut bullets = Vec::new();

            for i in 0..k {
                let (x, y) = cell(next_cell);
                next_cell += 1;
                meteors.push(meteor(i as u32, x, y));
                bullets.push(bullet(1000 + i as u32, x + 3.0, y + 3.0));
            }
            for i in 0..extra_meteors {
                let (x, y) = cell(next_cell);
                next_cell += 1;
                meteors.push(meteor(100 + i as u32, x, y));
            }
            for i in 0..extra_bullets {
                let (x, y) = cell(next_cell);
                next_cell += 1;
                bullets.push(bullet(2000 + i as u32, x, y));
            }

            // Shuffle order so pairs aren't index-aligned
            let rot_m = (seed as usize) % meteors.len().max(1);
            let rot_b = (seed as usize / 7) % bullets.len().max(1);
            meteors.rotate_left(rot_m);
            bullets.rotate_left(rot_b);

            let survivors_m: Vec<u32> = meteors.iter().map(|m| m.id).filter(|&id| id >= 100).collect();
            let survivors_b: Vec<u32> = bullets.iter().map(|b| b.id).filter(|&id| id >= 2000).collect();

            let hits = resolve_bullet_hits(&mut meteors, &mut bullets);
            prop_assert_eq!(hits.len(), k);
            for hit in &hits {
                prop_assert_eq!(hit.bullet_id, hit.meteor_id + 1000);
            }
            prop_assert_eq!(meteors.iter().map(|m| m.id).collect::<Vec<_>>(), survivors_m);
            prop_assert_eq!(bullets.iter().map(|b| b.id).collect::<Vec<_>>(), survivors_b);
        }
    }
}
