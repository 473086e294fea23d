use lane_core::{
    ActorState, EntitiesState, EntityId, GameConfig, GameState, Position, StatusEffect,
    StatusRules, Weapon, WeaponKind, resolve_strike,
};
use lane_runtime::ActorSnapshot;

fn arsenal() -> Vec<Weapon> {
    vec![
        Weapon::new("Pointer Sword", 5, vec![1], 1)
            .with_kind(WeaponKind::MeleeMove)
            .repeatable(),
        Weapon::new("Template Greatsword", 10, vec![-1, 1], 4),
        Weapon::new("Claw", 10, vec![1], 0).repeatable(),
    ]
}

fn fighter() -> ActorState {
    ActorState::player("Player", Position::new(2), 100).with_weapons(arsenal())
}

/// Fires `player`'s queue into two bugs and returns the roster afterwards.
fn fight(player: ActorState) -> EntitiesState {
    let config = GameConfig::default();
    let bugs = vec![
        ActorState::enemy(EntityId(1), "Bug", Position::new(6), 30, vec![]),
        ActorState::enemy(EntityId(2), "Bug", Position::new(7), 30, vec![]),
    ];
    let mut entities = EntitiesState::new(player, bugs);
    for fired in entities.player.execute_sequence() {
        resolve_strike(&mut entities, &config, EntityId::PLAYER, &fired.weapon);
    }
    entities
}

#[test]
fn restored_queue_fires_like_the_original() {
    let rules = StatusRules::default();
    let mut original = fighter();
    original.position = Position::new(5);
    original.take_damage(7, &rules);
    original
        .status
        .add(StatusEffect::new("Stress", "brain", 5).with_stack(2));
    original.try_add_weapon_to_sequence(2).unwrap();
    original.try_add_weapon_to_sequence(1).unwrap();
    original.try_add_weapon_to_sequence(2).unwrap();

    let bytes = bincode::serialize(&ActorSnapshot::capture(&original)).unwrap();
    let snapshot: ActorSnapshot = bincode::deserialize(&bytes).unwrap();

    let mut restored = fighter();
    snapshot.restore(&mut restored);
    assert_eq!(restored.position, original.position);
    assert_eq!(restored.health, 93);
    assert_eq!(restored.status, original.status);
    assert_eq!(restored.action_sequence, original.action_sequence);

    let expected = fight(original);
    let actual = fight(restored);
    assert_eq!(actual, expected);
    assert!(actual.player.action_sequence.is_empty());
    assert!(!actual.player.weapons[1].is_ready());
    assert!(actual.enemies[0].health < 30);
}

#[test]
fn restore_drops_entries_the_actor_cannot_hold() {
    let snapshot = ActorSnapshot {
        position: Position::new(1),
        health: 40,
        status: Default::default(),
        action_sequence: vec![0, 9, 1, 2, 0],
    };
    let mut actor = fighter().with_sequence_limit(3);
    snapshot.restore(&mut actor);
    assert_eq!(actor.action_sequence.as_slice(), &[0, 1, 2]);
}

#[test]
fn snapshot_reads_back_from_json() {
    let actor = fighter();
    let json = serde_json::to_string(&ActorSnapshot::capture(&actor)).unwrap();
    let snapshot: ActorSnapshot = serde_json::from_str(&json).unwrap();
    assert_eq!(snapshot, ActorSnapshot::capture(&actor));
}

#[test]
fn whole_battle_state_survives_bincode() {
    let player = fighter();
    let bug = ActorState::enemy(EntityId(1), "Bug", Position::new(6), 30, vec![vec!["Claw".into()]])
        .with_weapons(vec![Weapon::new("Claw", 10, vec![1], 0)]);
    let mut state = GameState::with_seed(99, EntitiesState::new(player, vec![bug]));
    state.turn.turn_count = 4;
    state.player_mut().try_add_weapon_to_sequence(0).unwrap();

    let bytes = bincode::serialize(&state).unwrap();
    let restored: GameState = bincode::deserialize(&bytes).unwrap();
    assert_eq!(restored, state);
}
