//! Weapon resolution against the lane.

use crate::config::GameConfig;
use crate::state::{EntitiesState, EntityId, Facing, Position, Weapon, WeaponEffect};

use super::result::{Hit, ResolutionNotice, StrikeReport};
use super::targeting::hit_positions;

/// Resolves one fired weapon for `wielder`.
///
/// Damage is `floor(weapon.damage * wielder.damage_multiplier)` and lands on
/// every living actor at an affected tile, the wielder included. Actors
/// brought to zero health stay in the roster; settling deaths is up to the
/// caller.
pub fn resolve_strike(
    entities: &mut EntitiesState,
    config: &GameConfig,
    wielder: EntityId,
    weapon: &Weapon,
) -> StrikeReport {
    let mut report = StrikeReport::new(wielder, &weapon.name);
    let Some(actor) = entities.actor(wielder).filter(|actor| actor.is_alive()) else {
        return report;
    };
    let origin = actor.position;
    let facing = actor.facing;
    let damage = actor.damage_for(weapon);

    match weapon.effect() {
        WeaponEffect::Melee => {
            let targets = occupants(entities, &hit_positions(origin, facing, &weapon.pattern, config));
            apply_hits(entities, config, &targets, damage, weapon, &mut report);
        }
        WeaponEffect::MeleeMove => {
            let from = advance(entities, config, wielder, facing, 1);
            let targets = occupants(entities, &hit_positions(from, facing, &weapon.pattern, config));
            apply_hits(entities, config, &targets, damage, weapon, &mut report);
        }
        WeaponEffect::Dash { range } => {
            let target = nearest_opponent(entities, wielder, facing)
                .filter(|(_, at)| origin.distance(*at) <= range);
            match target {
                Some((target, at)) => {
                    let approach = at.step(facing, -1);
                    let steps = origin.distance(approach) as i32;
                    let from = advance(entities, config, wielder, facing, steps);
                    let targets =
                        occupants(entities, &hit_positions(from, facing, &weapon.pattern, config));
                    apply_hits(entities, config, &targets, damage, weapon, &mut report);
                    let target_down = entities
                        .actor(target)
                        .is_some_and(|target| target.health <= 0);
                    if target_down {
                        advance(entities, config, wielder, facing, 1);
                    }
                }
                None => {
                    report.notice = Some(ResolutionNotice::DashFailed);
                    let reach = i32::try_from(range).unwrap_or(i32::MAX);
                    advance(entities, config, wielder, facing, reach);
                }
            }
        }
        WeaponEffect::Ranged { range } => match nearest_opponent(entities, wielder, facing) {
            Some((target, at)) => {
                let distance = origin.distance(at);
                if distance > range {
                    report.notice = Some(ResolutionNotice::OutOfRange { distance, range });
                }
                apply_hits(entities, config, &[target], damage, weapon, &mut report);
            }
            None => report.notice = Some(ResolutionNotice::NoTarget),
        },
        WeaponEffect::Fireball { pattern } => match nearest_opponent(entities, wielder, facing) {
            Some((_, at)) => {
                let targets = occupants(entities, &hit_positions(at, facing, pattern, config));
                apply_hits(entities, config, &targets, damage, weapon, &mut report);
            }
            None => report.notice = Some(ResolutionNotice::NoTarget),
        },
        WeaponEffect::Roll => {
            let mut run = Vec::new();
            let mut tile = origin.step(facing, 1);
            while config.in_bounds(tile.0) && entities.is_opponent_at(wielder, tile) {
                run.push(tile);
                tile = tile.step(facing, 1);
            }

            if !run.is_empty() && config.in_bounds(tile.0) && !entities.is_occupied(tile) {
                let targets: Vec<EntityId> = occupants(entities, &run)
                    .into_iter()
                    .filter(|&id| id != wielder)
                    .collect();
                apply_hits(entities, config, &targets, damage, weapon, &mut report);
                if let Some(actor) = entities.actor_mut(wielder) {
                    actor.position = tile;
                }
            } else {
                report.notice = Some(ResolutionNotice::RollNoTarget);
                advance(entities, config, wielder, facing, 1);
            }
        }
    }

    if let Some(end) = entities.actor(wielder).map(|actor| actor.position)
        && end != origin
    {
        report.moved = Some((origin, end));
    }
    report
}

fn nearest_opponent(
    entities: &EntitiesState,
    wielder: EntityId,
    facing: Facing,
) -> Option<(EntityId, Position)> {
    entities
        .nearest_opponent(wielder, facing)
        .map(|target| (target.id, target.position))
}

/// Living actors standing on `positions`, each listed once.
fn occupants(entities: &EntitiesState, positions: &[Position]) -> Vec<EntityId> {
    let mut ids = Vec::new();
    for &position in positions {
        for actor in entities.occupants_at(position) {
            if !ids.contains(&actor.id) {
                ids.push(actor.id);
            }
        }
    }
    ids
}

/// Moves `wielder` up to `tiles` steps forward, stopping at the lane edge or
/// before an occupied tile. Returns the final position.
fn advance(
    entities: &mut EntitiesState,
    config: &GameConfig,
    wielder: EntityId,
    facing: Facing,
    tiles: i32,
) -> Position {
    let Some(mut position) = entities.actor(wielder).map(|actor| actor.position) else {
        return Position::ORIGIN;
    };
    for _ in 0..tiles.max(0) {
        let next = position.step(facing, 1);
        if !config.in_bounds(next.0) || entities.is_occupied(next) {
            break;
        }
        position = next;
    }
    if let Some(actor) = entities.actor_mut(wielder) {
        actor.position = position;
    }
    position
}

fn apply_hits(
    entities: &mut EntitiesState,
    config: &GameConfig,
    targets: &[EntityId],
    damage: i32,
    weapon: &Weapon,
    report: &mut StrikeReport,
) {
    for &id in targets {
        let Some(target) = entities.actor_mut(id).filter(|target| target.is_alive()) else {
            continue;
        };
        let dealt = target.take_damage(damage, &config.status);
        for effect in &weapon.status_effects {
            target.status.add(effect.clone());
        }
        report.hits.push(Hit {
            target: id,
            damage: dealt,
            lethal: target.health <= 0,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{ActorState, SIMPLIFIED, StatusEffect, WeaponKind};

    fn config() -> GameConfig {
        GameConfig::default()
    }

    fn player_at(position: i32, facing: Facing) -> ActorState {
        ActorState::player("hero", Position::new(position), 100).facing(facing)
    }

    fn bug(id: u32, position: i32, health: i32) -> ActorState {
        ActorState::enemy(EntityId(id), "Bug", Position::new(position), health, vec![])
            .facing(Facing::Left)
    }

    #[test]
    fn melee_hits_only_the_pattern_tile() {
        let mut entities = EntitiesState::new(
            player_at(4, Facing::Right).with_damage_multiplier(1.2),
            vec![bug(1, 5, 30), bug(2, 6, 30), bug(3, 3, 30)],
        );
        let sword = Weapon::new("Pointer Sword", 5, vec![1], 1);

        let report = resolve_strike(&mut entities, &config(), EntityId::PLAYER, &sword);

        assert_eq!(
            report.hits,
            vec![Hit {
                target: EntityId(1),
                damage: 6,
                lethal: false
            }]
        );
        assert_eq!(entities.enemies[0].health, 24);
        assert_eq!(entities.enemies[1].health, 30);
        assert_eq!(entities.enemies[2].health, 30);
        assert_eq!(entities.player.health, 100);
        assert!(entities.enemies[0].status.has(SIMPLIFIED));
    }

    #[test]
    fn melee_strikes_allies_and_wielder_alike() {
        let mut entities = EntitiesState::new(player_at(5, Facing::Right), vec![bug(1, 4, 30)]);
        let spin = Weapon::new("Spin", 7, vec![-1, 0], 0);

        let report = resolve_strike(&mut entities, &config(), EntityId(1), &spin);

        assert_eq!(report.damage_to(EntityId::PLAYER), 7);
        assert_eq!(report.damage_to(EntityId(1)), 7);
    }

    #[test]
    fn melee_move_steps_forward_first() {
        let mut entities = EntitiesState::new(player_at(2, Facing::Right), vec![bug(1, 4, 30)]);
        let sword = Weapon::new("Pointer Sword", 5, vec![1], 1).with_kind(WeaponKind::MeleeMove);

        let report = resolve_strike(&mut entities, &config(), EntityId::PLAYER, &sword);

        assert_eq!(entities.player.position, Position::new(3));
        assert_eq!(report.moved, Some((Position::new(2), Position::new(3))));
        assert_eq!(report.damage_to(EntityId(1)), 5);
    }

    #[test]
    fn dash_out_of_range_whiffs_forward() {
        let mut entities = EntitiesState::new(player_at(2, Facing::Right), vec![bug(1, 6, 30)]);
        let dash = Weapon::new("Dash", 8, vec![1], 2)
            .with_kind(WeaponKind::DashToEnemy)
            .with_range(3);

        let report = resolve_strike(&mut entities, &config(), EntityId::PLAYER, &dash);

        assert_eq!(report.notice, Some(ResolutionNotice::DashFailed));
        assert!(!report.landed());
        assert_eq!(entities.player.position, Position::new(5));
        assert_eq!(entities.enemies[0].health, 30);
    }

    #[test]
    fn dash_whiff_stops_at_the_edge() {
        let mut entities = EntitiesState::new(player_at(7, Facing::Right), vec![bug(1, 1, 30)]);
        let dash = Weapon::new("Dash", 8, vec![1], 2)
            .with_kind(WeaponKind::DashToEnemy)
            .with_range(3);

        resolve_strike(&mut entities, &config(), EntityId::PLAYER, &dash);
        assert_eq!(entities.player.position, Position::new(GameConfig::BOARD_SIZE));
    }

    #[test]
    fn dash_lands_next_to_target_and_follows_through_on_kill() {
        let mut entities = EntitiesState::new(player_at(1, Facing::Right), vec![bug(1, 4, 8)]);
        let dash = Weapon::new("Dash", 8, vec![1], 2)
            .with_kind(WeaponKind::DashToEnemy)
            .with_range(3);

        let report = resolve_strike(&mut entities, &config(), EntityId::PLAYER, &dash);

        assert!(report.hits[0].lethal);
        assert_eq!(entities.enemies[0].health, 0);
        assert_eq!(entities.player.position, Position::new(4));
        assert_eq!(report.moved, Some((Position::new(1), Position::new(4))));
    }

    #[test]
    fn ranged_always_lands_but_warns_past_range() {
        let mut entities = EntitiesState::new(player_at(0, Facing::Right), vec![bug(1, 7, 30)]);
        let rain = Weapon::new("Text Rain", 10, vec![1], 6)
            .with_kind(WeaponKind::Ranged)
            .with_range(5);

        let report = resolve_strike(&mut entities, &config(), EntityId::PLAYER, &rain);

        assert_eq!(
            report.notice,
            Some(ResolutionNotice::OutOfRange {
                distance: 7,
                range: 5
            })
        );
        assert_eq!(entities.enemies[0].health, 20);
    }

    #[test]
    fn ranged_without_target_reports_it() {
        let mut entities = EntitiesState::new(player_at(4, Facing::Left), vec![bug(1, 7, 30)]);
        let rain = Weapon::new("Text Rain", 10, vec![1], 6).with_kind(WeaponKind::Ranged);

        let report = resolve_strike(&mut entities, &config(), EntityId::PLAYER, &rain);

        assert_eq!(report.notice, Some(ResolutionNotice::NoTarget));
        assert_eq!(entities.enemies[0].health, 30);
    }

    #[test]
    fn fireball_splashes_around_nearest_target() {
        let mut entities = EntitiesState::new(
            player_at(1, Facing::Right),
            vec![bug(1, 5, 30), bug(2, 6, 30), bug(3, 8, 30)],
        );
        let fireball =
            Weapon::new("fireball", 15, vec![-1, 0, 1], 8).with_kind(WeaponKind::Fireball);

        let report = resolve_strike(&mut entities, &config(), EntityId::PLAYER, &fireball);

        assert_eq!(report.hits.len(), 2);
        assert_eq!(entities.enemies[0].health, 15);
        assert_eq!(entities.enemies[1].health, 15);
        assert_eq!(entities.enemies[2].health, 30);
    }

    #[test]
    fn roll_crosses_a_run_of_opponents() {
        let mut entities = EntitiesState::new(
            player_at(2, Facing::Right),
            vec![bug(1, 3, 30), bug(2, 4, 30)],
        );
        let roll = Weapon::new("Roll", 6, vec![1], 3).with_kind(WeaponKind::Roll);

        let report = resolve_strike(&mut entities, &config(), EntityId::PLAYER, &roll);

        assert_eq!(report.hits.len(), 2);
        assert_eq!(entities.player.position, Position::new(5));
        assert_eq!(report.notice, None);
    }

    #[test]
    fn roll_without_landing_tile_just_steps() {
        let mut entities = EntitiesState::new(
            player_at(6, Facing::Right),
            vec![bug(1, 7, 30), bug(2, 8, 30)],
        );
        let roll = Weapon::new("Roll", 6, vec![1], 3).with_kind(WeaponKind::Roll);

        let report = resolve_strike(&mut entities, &config(), EntityId::PLAYER, &roll);

        assert_eq!(report.notice, Some(ResolutionNotice::RollNoTarget));
        assert!(!report.landed());
        assert_eq!(entities.player.position, Position::new(6));
    }

    #[test]
    fn weapon_statuses_are_copied_onto_each_target() {
        let mut entities = EntitiesState::new(player_at(4, Facing::Left), vec![bug(1, 5, 30)]);
        let ddl = Weapon::new("DDL", 4, vec![1], 2)
            .with_kind(WeaponKind::Ranged)
            .with_range(4)
            .with_status(StatusEffect::new("Stress", "brain", 5));

        resolve_strike(&mut entities, &config(), EntityId(1), &ddl);
        resolve_strike(&mut entities, &config(), EntityId(1), &ddl);

        let stress = entities.player.status.get("Stress").unwrap();
        assert_eq!(stress.stack, 2);
        assert_eq!(stress.duration, 10);
        assert_eq!(entities.player.health, 92);
    }
}
