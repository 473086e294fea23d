//! Enemy waves.

use crate::env::{GameEnv, compute_seed, context, pick_weighted};
use crate::state::{EntityId, Facing, Position};

use super::{BattleEvent, CommandError, GameEngine};

impl<'a> GameEngine<'a> {
    /// Spawns up to `spawn_count` enemies from the weighted spawn table on
    /// random free tiles, each facing the player.
    ///
    /// A full lane or an empty table simply spawns fewer enemies.
    pub(super) fn spawn_wave(
        &mut self,
        env: GameEnv<'_>,
        events: &mut Vec<BattleEvent>,
    ) -> Result<(), CommandError> {
        let config = env.config()?;
        let monsters = env.monsters()?;
        let weapons = env.weapons()?;
        let rng = env.rng()?;

        let table = monsters.spawn_table();
        let game_seed = self.state.game_seed;
        let nonce = self.state.turn.nonce;
        let player_at = self.state.entities.player.position;

        for slot in 0..config.spawn_count {
            let free: Vec<Position> = (0..=config.board_size)
                .map(Position::new)
                .filter(|&tile| !self.state.entities.is_occupied(tile))
                .collect();
            if free.is_empty() {
                break;
            }

            let template_seed =
                compute_seed(game_seed, nonce, EntityId::PLAYER.0, context::SPAWN_TEMPLATE + slot);
            let Some(template) = pick_weighted(&table, rng.next_u32(template_seed)) else {
                break;
            };
            let tile_seed =
                compute_seed(game_seed, nonce, EntityId::PLAYER.0, context::SPAWN_TILE + slot);
            let pick = rng.range(tile_seed, 0, free.len() as u32 - 1) as usize;
            let Some(&tile) = free.get(pick) else {
                break;
            };

            let facing = Facing::towards(tile, player_at).unwrap_or_default();
            let id = self.state.allocate_entity_id();
            let enemy = template.spawn(id, tile, facing, weapons)?;
            self.state.entities.enemies.push(enemy);
            events.push(BattleEvent::Spawned {
                actor: id,
                template: template.name.clone(),
                position: tile,
            });
        }
        Ok(())
    }
}
