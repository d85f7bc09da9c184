//! Fixed timestep simulation tick
//!
//! Core game loop that advances simulation deterministically. Order within a
//! tick is fixed: player, spawn, motion, collisions, pruning, score clamp.

use super::collision::{prune_out_of_bounds, resolve_bullet_hits, resolve_player_hits};
use super::state::{GameEvent, GameState};
use crate::assets::AssetBundle;

/// Key state for a single tick (deterministic)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    pub rotate_left: bool,
    pub rotate_right: bool,
    /// Held fire auto-repeats at the cooldown interval
    pub fire: bool,
}

/// Advance the game state by one fixed timestep
pub fn tick(state: &mut GameState, input: &TickInput, assets: &AssetBundle) {
    state.events.clear();
    state.time_ticks += 1;

    // Player turn + fire
    if let Some(mut bullet) = state.player.update(input, &state.tuning, assets.laser) {
        bullet.id = state.next_entity_id();
        log::debug!(
            "Tick {}: fired bullet {} heading {:.3}",
            state.time_ticks,
            bullet.id,
            bullet.heading
        );
        state.events.push(GameEvent::LaserFired {
            bullet_id: bullet.id,
        });
        state.stats.shots_fired += 1;
        state.bullets.push(bullet);
    }

    // Timed meteor spawn
    state.spawn_timer.update();
    if state.spawn_timer.is_ready() {
        state.spawn_timer.reset();
        let id = state.next_entity_id();
        let meteor = state.spawner.spawn(&mut state.rng, assets, id);
        state.events.push(GameEvent::MeteorSpawned { meteor_id: id });
        state.stats.meteors_spawned += 1;
        state.meteors.push(meteor);
    }

    // Motion
    for meteor in &mut state.meteors {
        meteor.update();
    }
    let bullet_speed = state.tuning.bullet_speed_per_tick();
    for bullet in &mut state.bullets {
        bullet.update(bullet_speed);
    }

    // Meteor <-> bullet
    for hit in resolve_bullet_hits(&mut state.meteors, &mut state.bullets) {
        log::debug!(
            "Tick {}: bullet {} destroyed meteor {}",
            state.time_ticks,
            hit.bullet_id,
            hit.meteor_id
        );
        state.score += 1;
        state.stats.meteors_destroyed += 1;
        state.events.push(GameEvent::MeteorDestroyed {
            meteor_id: hit.meteor_id,
            bullet_id: hit.bullet_id,
            point: hit.point,
        });
    }

    // Meteor <-> player
    for meteor_id in resolve_player_hits(&state.player, &mut state.meteors) {
        log::debug!("Tick {}: meteor {} hit the player", state.time_ticks, meteor_id);
        state.score -= 1;
        state.stats.player_hits += 1;
        state.events.push(GameEvent::PlayerHit { meteor_id });
    }

    // Lifecycle
    let pruned = prune_out_of_bounds(&mut state.meteors, &state.tuning)
        + prune_out_of_bounds(&mut state.bullets, &state.tuning);
    if pruned > 0 {
        log::trace!("Tick {}: pruned {} entities", state.time_ticks, pruned);
        state.stats.pruned += pruned as u64;
    }

    state.score = state.score.max(0);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::entity::Meteor;
    use crate::sim::timer::CooldownTimer;
    use crate::tuning::Tuning;
    use glam::DVec2;

    fn new_state(seed: u64) -> (GameState, AssetBundle) {
        let assets = AssetBundle::builtin();
        (GameState::new(seed, Tuning::default(), &assets).unwrap(), assets)
    }

    fn parked_meteor(state: &mut GameState, assets: &AssetBundle, position: DVec2) -> Meteor {
        Meteor {
            id: state.next_entity_id(),
            position,
            movement: DVec2::ZERO,
            rotation: 0.0,
            rotation_speed: 0.0,
            sprite: assets.meteors[0],
        }
    }

    #[test]
    fn test_ready_spawn_timer_spawns_one_meteor() {
        let (mut state, assets) = new_state(12345);
        let target = state.spawn_timer.target_ticks();
        state.spawn_timer = CooldownTimer::ready(target);

        tick(&mut state, &TickInput::default(), &assets);

        assert_eq!(state.meteors.len(), 1);
        assert!(state.bullets.is_empty());
        assert!(!state.spawn_timer.is_ready());
        assert_eq!(state.spawn_timer.elapsed_ticks(), 0);
        assert_eq!(state.score, 0);
        assert!(matches!(state.events[..], [GameEvent::MeteorSpawned { .. }]));
    }

    #[test]
    fn test_spawn_interval() {
        let (mut state, assets) = new_state(1);
        let interval = state.spawn_timer.target_ticks() as usize;
        for _ in 0..interval - 1 {
            tick(&mut state, &TickInput::default(), &assets);
        }
        assert!(state.meteors.is_empty());
        tick(&mut state, &TickInput::default(), &assets);
        assert_eq!(state.meteors.len(), 1);
        assert_eq!(state.stats.meteors_spawned, 1);
    }

    #[test]
    fn test_score_floor() {
        let (mut state, assets) = new_state(5);
        let c = state.player.center();

        for _ in 0..5 {
            let meteor = parked_meteor(&mut state, &assets, c);
            state.meteors.push(meteor);
            tick(&mut state, &TickInput::default(), &assets);
            assert!(state.score >= 0);
        }
        assert_eq!(state.score, 0);
        assert_eq!(state.stats.player_hits, 5);
    }

    #[test]
    fn test_player_hits_offset_bullet_hits() {
        let (mut state, assets) = new_state(5);
        state.score = 3;
        let c = state.player.center();
        let meteor = parked_meteor(&mut state, &assets, c);
        state.meteors.push(meteor);

        tick(&mut state, &TickInput::default(), &assets);
        assert_eq!(state.score, 2);
        assert!(state.meteors.is_empty());
        assert!(state
            .events
            .iter()
            .any(|e| matches!(e, GameEvent::PlayerHit { .. })));
    }

    #[test]
    fn test_fired_bullet_destroys_meteor() {
        let (mut state, assets) = new_state(9);
        state.player.fire_cooldown = CooldownTimer::ready(30);

        // Meteor parked directly above the ship, clear of its collider
        let above = state.player.center() - DVec2::new(20.0, 200.0);
        let meteor = parked_meteor(&mut state, &assets, above);
        state.meteors.push(meteor);

        let fire = TickInput {
            fire: true,
            ..Default::default()
        };
        tick(&mut state, &fire, &assets);
        assert_eq!(state.bullets.len(), 1);
        assert!(matches!(state.events[0], GameEvent::LaserFired { .. }));

        let idle = TickInput::default();
        for _ in 0..60 {
            tick(&mut state, &idle, &assets);
            if state.score > 0 {
                break;
            }
        }
        assert_eq!(state.score, 1);
        assert_eq!(state.stats.meteors_destroyed, 1);
        assert!(state.bullets.is_empty());
        assert!(state.meteors.iter().all(|m| m.id != 1));
    }

    #[test]
    fn test_stray_entities_are_pruned() {
        let (mut state, assets) = new_state(3);
        let width = state.tuning.viewport_width;
        let far = parked_meteor(&mut state, &assets, DVec2::new(2.0 * width, 0.0));
        let near = parked_meteor(&mut state, &assets, DVec2::new(0.5 * width, 0.0));
        let near_id = near.id;
        state.meteors.push(far);
        state.meteors.push(near);

        tick(&mut state, &TickInput::default(), &assets);
        assert_eq!(state.meteors.len(), 1);
        assert_eq!(state.meteors[0].id, near_id);
        assert_eq!(state.stats.pruned, 1);
    }

    #[test]
    fn test_bullets_leave_the_field() {
        let (mut state, assets) = new_state(4);
        state.player.fire_cooldown = CooldownTimer::ready(30);
        // Pointing left, away from any meteor
        state.player.rotation = -std::f64::consts::FRAC_PI_2;
        let fire = TickInput {
            fire: true,
            ..Default::default()
        };
        tick(&mut state, &fire, &assets);
        assert_eq!(state.bullets.len(), 1);

        // 1200 units at ~5.8/tick
        for _ in 0..300 {
            tick(&mut state, &TickInput::default(), &assets);
        }
        assert!(state.bullets.is_empty());
    }

    #[test]
    fn test_determinism() {
        // Two states with same seed should produce identical results
        let (mut state1, assets) = new_state(99999);
        let (mut state2, _) = new_state(99999);

        let inputs = [
            TickInput {
                rotate_left: true,
                fire: true,
                ..Default::default()
            },
            TickInput {
                fire: true,
                ..Default::default()
            },
            TickInput {
                rotate_right: true,
                ..Default::default()
            },
            TickInput::default(),
        ];

        for i in 0..2_000 {
            let input = &inputs[i % inputs.len()];
            tick(&mut state1, input, &assets);
            tick(&mut state2, input, &assets);
        }

        assert_eq!(state1.time_ticks, state2.time_ticks);
        assert_eq!(state1.score, state2.score);
        assert_eq!(state1.stats, state2.stats);
        assert_eq!(state1.meteors.len(), state2.meteors.len());
        for (a, b) in state1.meteors.iter().zip(&state2.meteors) {
            assert_eq!(a.position, b.position);
        }
        assert!((state1.player.rotation - state2.player.rotation).abs() < 1e-12);
    }

    #[test]
    fn test_live_set_stays_bounded() {
        let (mut state, assets) = new_state(2024);
        let fire = TickInput {
            fire: true,
            rotate_right: true,
            ..Default::default()
        };
        for _ in 0..20_000 {
            tick(&mut state, &fire, &assets);
            assert!(state.score >= 0);
        }
        // Slowest meteors need ~7000 ticks to cross out; bullets ~300
        assert!(state.meteors.len() < 200, "{} meteors", state.meteors.len());
        assert!(state.bullets.len() < 30, "{} bullets", state.bullets.len());
    }
}
