use super::{ActorState, EntityId, Facing, Position};

/// Aggregate state for every combatant on the lane.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EntitiesState {
    pub player: ActorState,
    /// Enemies in acting order.
    pub enemies: Vec<ActorState>,
}

impl EntitiesState {
    pub fn new(player: ActorState, enemies: Vec<ActorState>) -> Self {
        Self { player, enemies }
    }

    /// Returns a reference to an actor by ID (player or enemy).
    pub fn actor(&self, id: EntityId) -> Option<&ActorState> {
        if self.player.id == id {
            return Some(&self.player);
        }
        self.enemies.iter().find(|actor| actor.id == id)
    }

    /// Returns a mutable reference to an actor by ID (player or enemy).
    pub fn actor_mut(&mut self, id: EntityId) -> Option<&mut ActorState> {
        if self.player.id == id {
            return Some(&mut self.player);
        }
        self.enemies.iter_mut().find(|actor| actor.id == id)
    }

    /// Returns an iterator over all actors (player + enemies).
    pub fn all_actors(&self) -> impl Iterator<Item = &ActorState> {
        std::iter::once(&self.player).chain(self.enemies.iter())
    }

    /// Returns a mutable iterator over all actors (player + enemies).
    pub fn all_actors_mut(&mut self) -> impl Iterator<Item = &mut ActorState> {
        std::iter::once(&mut self.player).chain(self.enemies.iter_mut())
    }

    /// Ids of living enemies in acting order.
    pub fn living_enemy_ids(&self) -> Vec<EntityId> {
        self.enemies
            .iter()
            .filter(|enemy| enemy.is_alive())
            .map(|enemy| enemy.id)
            .collect()
    }

    pub fn living_enemy_count(&self) -> usize {
        self.enemies.iter().filter(|enemy| enemy.is_alive()).count()
    }

    /// Living actors standing on `position`.
    pub fn occupants_at(&self, position: Position) -> impl Iterator<Item = &ActorState> {
        self.all_actors()
            .filter(move |actor| actor.is_alive() && actor.position == position)
    }

    /// First living actor standing on `position`.
    pub fn occupant_at(&self, position: Position) -> Option<EntityId> {
        self.occupants_at(position).next().map(|actor| actor.id)
    }

    pub fn is_occupied(&self, position: Position) -> bool {
        self.occupant_at(position).is_some()
    }

    /// Returns true if a living actor opposing `id` stands on `position`.
    pub fn is_opponent_at(&self, id: EntityId, position: Position) -> bool {
        let Some(actor) = self.actor(id) else {
            return false;
        };
        self.occupants_at(position).any(|other| actor.opposes(other))
    }

    /// Nearest living opponent of `id` strictly ahead in `facing`.
    pub fn nearest_opponent(&self, id: EntityId, facing: Facing) -> Option<&ActorState> {
        let actor = self.actor(id)?;
        self.all_actors()
            .filter(|other| other.is_alive() && actor.opposes(other))
            .filter(|other| actor.position.is_ahead(other.position, facing))
            .min_by_key(|other| (actor.position.distance(other.position), other.id))
    }

    /// Removes dead enemies, returning their ids.
    pub fn remove_dead_enemies(&mut self) -> Vec<EntityId> {
        let mut removed = Vec::new();
        self.enemies.retain(|enemy| {
            if enemy.is_alive() {
                true
            } else {
                removed.push(enemy.id);
                false
            }
        });
        removed
    }

    /// Positions of all living actors.
    pub fn occupied_positions(&self) -> Vec<(EntityId, Position)> {
        self.all_actors()
            .filter(|actor| actor.is_alive())
            .map(|actor| (actor.id, actor.position))
            .collect()
    }
}
