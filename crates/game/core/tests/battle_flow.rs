use std::collections::HashMap;

use lane_core::{
    ActorState, BattleEvent, BattleOutcome, CommandError, Env, EntityId, Facing, GameConfig,
    GameEnv, GameEngine, GameState, IntentPhase, MonsterTemplate, OpeningSpawn, PcgRng,
    PlayerCommand, Position, Skill, SkillError, TurnPhase, Weapon, WeaponKind, WeaponTemplate,
    new_battle,
};

struct Fixture {
    weapons: HashMap<String, WeaponTemplate>,
    monsters: HashMap<String, MonsterTemplate>,
    config: GameConfig,
    rng: PcgRng,
}

impl Fixture {
    fn new() -> Self {
        let weapons = [
            Weapon::new("Pointer Sword", 5, vec![1], 1)
                .with_kind(WeaponKind::MeleeMove)
                .repeatable(),
            Weapon::new("Template Greatsword", 10, vec![-1, 1], 4),
            Weapon::new("Claw", 10, vec![1], 0),
            Weapon::new("C++", 5, vec![1, 2, 3, 4, 5, 6, 7, 8], 8),
        ]
        .iter()
        .map(|weapon| (weapon.name.clone(), WeaponTemplate::from(weapon)))
        .collect();

        let bug = MonsterTemplate {
            name: "Bug".into(),
            health: 30,
            sequence_limit: 1,
            damage_multiplier: 1.0,
            weapons: vec!["Claw".into()],
            intents: vec![vec!["Claw".into()]],
            weight: 1,
        };
        let monsters = HashMap::from([(bug.name.clone(), bug)]);

        let mut config = GameConfig::default();
        config.player.weapons = vec!["Pointer Sword".into(), "Template Greatsword".into()];
        config.player.available_skills = vec!["queue".into(), "C++".into(), "stack".into()];

        Self {
            weapons,
            monsters,
            config,
            rng: PcgRng,
        }
    }

    fn with_opening(mut self, monster: &str, position: i32) -> Self {
        self.config.opening_enemies.push(OpeningSpawn {
            monster: monster.into(),
            position,
        });
        self
    }

    fn env(&self) -> GameEnv<'_> {
        Env::with_all(&self.weapons, &self.monsters, &self.config, &self.rng).as_game_env()
    }

    fn battle(&self) -> GameState {
        new_battle(self.env(), 0xC0FFEE).expect("battle setup")
    }
}

fn intent_phase(state: &GameState, id: EntityId) -> IntentPhase {
    state
        .entities
        .actor(id)
        .and_then(ActorState::enemy_state)
        .map(|intent| intent.phase())
        .expect("enemy present")
}

#[test]
fn queueing_ends_the_player_phase() {
    let fixture = Fixture::new().with_opening("Bug", 7);
    let mut state = fixture.battle();
    let mut engine = GameEngine::new(&mut state);

    let events = engine.queue_weapon(fixture.env(), 1).unwrap();
    assert!(matches!(events[0], BattleEvent::WeaponQueued { .. }));
    assert_eq!(engine.phase(), TurnPhase::EnemyTurn);
    assert_eq!(engine.turn_count(), 1);

    assert_eq!(
        engine.pass(fixture.env()),
        Err(CommandError::NotPlayerTurn)
    );
}

#[test]
fn rejected_commands_leave_state_untouched() {
    let fixture = Fixture::new().with_opening("Bug", 7);
    let mut state = fixture.battle();
    state.entities.player.position = Position::new(GameConfig::BOARD_SIZE);
    let before = state.clone();

    let mut engine = GameEngine::new(&mut state);
    let err = engine
        .move_player(fixture.env(), Facing::Right)
        .unwrap_err();
    assert!(matches!(err, CommandError::Move(_)));
    assert_eq!(
        engine.execute_queue(fixture.env()),
        Err(CommandError::EmptySequence)
    );
    assert!(matches!(
        engine.queue_weapon(fixture.env(), 5),
        Err(CommandError::Sequence(_))
    ));
    assert_eq!(state, before);
}

#[test]
fn enemy_flips_then_strikes_on_third_invocation() {
    let fixture = Fixture::new().with_opening("Bug", 3);
    let mut state = fixture.battle();
    let bug = state.entities.enemies[0].id;
    state.entities.enemies[0].facing = Facing::Right;

    let mut engine = GameEngine::new(&mut state);
    engine.pass(fixture.env()).unwrap();
    engine.run_enemy_phase(fixture.env()).unwrap();
    assert_eq!(intent_phase(engine.state(), bug), IntentPhase::Waiting);

    engine.pass(fixture.env()).unwrap();
    engine.run_enemy_phase(fixture.env()).unwrap();
    assert_eq!(intent_phase(engine.state(), bug), IntentPhase::ReadyToAttack);
    assert_eq!(engine.state().entities.enemies[0].facing, Facing::Left);
    assert_eq!(engine.state().entities.player.health, 100);

    engine.pass(fixture.env()).unwrap();
    let events = engine.run_enemy_phase(fixture.env()).unwrap();
    assert!(events.iter().any(|event| matches!(event, BattleEvent::Strike(_))));
    assert_eq!(engine.state().entities.player.health, 90);
    assert_eq!(intent_phase(engine.state(), bug), IntentPhase::Adding);
    assert_eq!(engine.phase(), TurnPhase::PlayerTurn);
}

#[test]
fn out_of_reach_enemy_telegraphs_before_stepping() {
    let fixture = Fixture::new().with_opening("Bug", 6);
    let mut state = fixture.battle();
    let mut engine = GameEngine::new(&mut state);

    // add, then announce the move, then take the step
    for _ in 0..2 {
        engine.pass(fixture.env()).unwrap();
        engine.run_enemy_phase(fixture.env()).unwrap();
    }
    let telegraphed = engine.state().entities.enemies[0].clone();
    assert!(telegraphed.enemy_state().unwrap().is_moving());
    assert_eq!(telegraphed.position, Position::new(6));

    engine.pass(fixture.env()).unwrap();
    engine.run_enemy_phase(fixture.env()).unwrap();
    let stepped = &engine.state().entities.enemies[0];
    assert_eq!(stepped.position, Position::new(5));
    assert!(!stepped.enemy_state().unwrap().is_moving());
}

#[test]
fn flipping_drops_a_move_telegraphed_the_other_way() {
    let fixture = Fixture::new().with_opening("Bug", 6);
    let mut state = fixture.battle();

    let mut engine = GameEngine::new(&mut state);
    for _ in 0..2 {
        engine.pass(fixture.env()).unwrap();
        engine.run_enemy_phase(fixture.env()).unwrap();
    }
    assert!(engine.state().entities.enemies[0].enemy_state().unwrap().is_moving());

    // player slips behind the bug while its step left is announced
    state.entities.player.position = Position::new(8);
    let mut engine = GameEngine::new(&mut state);
    engine.pass(fixture.env()).unwrap();
    engine.run_enemy_phase(fixture.env()).unwrap();
    let flipped = &engine.state().entities.enemies[0];
    assert_eq!(flipped.facing, Facing::Right);
    assert_eq!(flipped.position, Position::new(6));
    assert!(!flipped.enemy_state().unwrap().is_moving());

    // the step toward the player is announced again before it happens
    engine.pass(fixture.env()).unwrap();
    engine.run_enemy_phase(fixture.env()).unwrap();
    let announced = &engine.state().entities.enemies[0];
    assert_eq!(announced.position, Position::new(6));
    assert!(announced.enemy_state().unwrap().is_moving());

    engine.pass(fixture.env()).unwrap();
    engine.run_enemy_phase(fixture.env()).unwrap();
    assert_eq!(engine.state().entities.enemies[0].position, Position::new(7));
}

#[test]
fn lunging_enemy_attacks_from_two_tiles() {
    let mut fixture = Fixture::new().with_opening("Lunger", 4);
    fixture.monsters.insert(
        "Lunger".into(),
        MonsterTemplate {
            name: "Lunger".into(),
            health: 30,
            sequence_limit: 1,
            damage_multiplier: 1.0,
            weapons: vec!["Pointer Sword".into()],
            intents: vec![vec!["Pointer Sword".into()]],
            weight: 1,
        },
    );
    let mut state = fixture.battle();
    let lunger = state.entities.enemies[0].id;
    let mut engine = GameEngine::new(&mut state);

    engine.pass(fixture.env()).unwrap();
    engine.run_enemy_phase(fixture.env()).unwrap();
    engine.pass(fixture.env()).unwrap();
    engine.run_enemy_phase(fixture.env()).unwrap();
    assert_eq!(intent_phase(engine.state(), lunger), IntentPhase::ReadyToAttack);
    assert_eq!(engine.state().entities.enemies[0].position, Position::new(4));

    engine.pass(fixture.env()).unwrap();
    engine.run_enemy_phase(fixture.env()).unwrap();
    assert_eq!(engine.state().entities.enemies[0].position, Position::new(3));
    assert_eq!(engine.state().entities.player.health, 95);
}

#[test]
fn defeat_is_immediate() {
    let fixture = Fixture::new().with_opening("Bug", 3);
    let mut state = fixture.battle();
    state.entities.player.health = 5;

    let mut engine = GameEngine::new(&mut state);
    for _ in 0..3 {
        engine.pass(fixture.env()).unwrap();
        engine.run_enemy_phase(fixture.env()).unwrap();
        if engine.phase().is_over() {
            break;
        }
    }

    assert_eq!(engine.phase(), TurnPhase::GameOver(BattleOutcome::Defeat));
    assert_eq!(engine.state().entities.player.health, 0);
    assert_eq!(
        engine.apply(fixture.env(), PlayerCommand::Pass),
        Err(CommandError::GameOver(BattleOutcome::Defeat))
    );
}

#[test]
fn victory_needs_an_empty_board_and_enough_turns() {
    let mut fixture = Fixture::new();
    fixture.config.spawn_interval = 0;
    let mut state = fixture.battle();
    state.turn.turn_count = 48;

    let mut engine = GameEngine::new(&mut state);
    engine.pass(fixture.env()).unwrap();
    assert_eq!(engine.phase(), TurnPhase::EnemyTurn);
    engine.run_enemy_phase(fixture.env()).unwrap();
    assert_eq!(engine.phase(), TurnPhase::PlayerTurn);

    engine.pass(fixture.env()).unwrap();
    assert_eq!(engine.turn_count(), 50);
    assert_eq!(engine.phase(), TurnPhase::GameOver(BattleOutcome::Victory));
}

#[test]
fn every_tenth_turn_spawns_a_wave() {
    let fixture = Fixture::new();
    let spawn = |seed: u64| {
        let mut state = new_battle(fixture.env(), seed).unwrap();
        state.turn.turn_count = 9;
        let mut engine = GameEngine::new(&mut state);
        engine.pass(fixture.env()).unwrap();
        state
    };

    let first = spawn(11);
    assert_eq!(first.entities.enemies.len(), 2);
    let player_at = first.entities.player.position;
    for enemy in &first.entities.enemies {
        assert_ne!(enemy.position, player_at);
        assert_eq!(Facing::towards(enemy.position, player_at), Some(enemy.facing));
    }
    assert_ne!(
        first.entities.enemies[0].position,
        first.entities.enemies[1].position
    );

    let replay = spawn(11);
    assert_eq!(first, replay);
}

#[test]
fn killing_blow_removes_the_enemy() {
    let fixture = Fixture::new().with_opening("Bug", 3);
    let mut state = fixture.battle();
    state.entities.enemies[0].health = 10;

    let mut engine = GameEngine::new(&mut state);
    engine.queue_weapon(fixture.env(), 1).unwrap();
    // Bug adds its claw while the greatsword waits in the queue.
    engine.run_enemy_phase(fixture.env()).unwrap();
    let events = engine.execute_queue(fixture.env()).unwrap();

    assert!(
        events
            .iter()
            .any(|event| matches!(event, BattleEvent::Defeated { name, .. } if name == "Bug"))
    );
    assert!(engine.state().entities.enemies.is_empty());
}

#[test]
fn skills_spend_points_and_apply_effects() {
    let fixture = Fixture::new();
    let mut state = fixture.battle();
    let mut engine = GameEngine::new(&mut state);

    engine.learn_skill(fixture.env(), Skill::Queue).unwrap();
    assert_eq!(engine.state().entities.player.sequence_limit, 6);
    assert_eq!(engine.phase(), TurnPhase::PlayerTurn);

    assert_eq!(
        engine.learn_skill(fixture.env(), Skill::Cpp),
        Err(CommandError::Skill(SkillError::NoPoints))
    );
    assert_eq!(
        engine.learn_skill(fixture.env(), Skill::Queue),
        Err(CommandError::Skill(SkillError::AlreadyLearned(Skill::Queue)))
    );
    assert_eq!(
        engine.learn_skill(fixture.env(), Skill::HelloWorld),
        Err(CommandError::Skill(SkillError::NotAvailable(Skill::HelloWorld)))
    );
}

#[test]
fn cpp_skill_unlocks_its_weapon() {
    let fixture = Fixture::new();
    let mut state = fixture.battle();
    let mut engine = GameEngine::new(&mut state);

    engine.learn_skill(fixture.env(), Skill::Cpp).unwrap();
    let player = &engine.state().entities.player;
    assert_eq!(player.weapons.len(), 3);
    assert_eq!(player.weapons[2].name, "C++");
}
