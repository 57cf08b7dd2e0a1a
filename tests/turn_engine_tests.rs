//! Turn engine behaviour: the documented scenarios plus property checks
//! over health, training caps, effect expiry and purchases.

use proptest::prelude::*;

use archaemania::core::{
    Action, ActionRecord, GameConfig, GameRng, GameState, PlayerId, SequenceRng, TurnAdvance,
};
use archaemania::games::archaemania::{ArchaemaniaBuilder, ArchaemaniaGame};
use archaemania::items::{ConsumableKind, DamageRange, ItemKind, Stat, WeaponKind};
use archaemania::rules::{GameResult, RulesEngine};

const P1: PlayerId = PlayerId::FIRST;
const P2: PlayerId = PlayerId::SECOND;

fn scripted(rolls: impl IntoIterator<Item = u32>) -> (ArchaemaniaGame, GameState) {
    ArchaemaniaBuilder::new()
        .build_with_rng(SequenceRng::new(rolls))
        .unwrap()
}

fn all_items() -> Vec<ItemKind> {
    WeaponKind::FOR_SALE
        .into_iter()
        .map(ItemKind::Weapon)
        .chain(ConsumableKind::ALL.into_iter().map(ItemKind::Consumable))
        .collect()
}

// === Scenarios ===

#[test]
fn test_sword_purchase_blocked_by_strength() {
    let (game, mut state) = scripted([]);
    assert_eq!(state.player(P1).gold, 20);
    assert_eq!(state.player(P1).attributes.strength, 0);

    assert!(game.buy(&mut state, P1, WeaponKind::Sword.into()).is_err());
    assert_eq!(state.player(P1).gold, 20);
    assert_eq!(state.player(P1).weapon.kind, WeaponKind::BareHands);
}

#[test]
fn test_strength_potion_lifecycle() {
    let (mut game, mut state) = scripted([]);
    game.buy(&mut state, P1, ConsumableKind::StrengthPotion.into()).unwrap();

    let report = game.play_turn(&mut state, Action::Use(ConsumableKind::StrengthPotion));
    assert!(report.outcome.is_ok());
    assert_eq!(state.player(P1).attributes.strength, 2);

    game.play_turn(&mut state, Action::Work);
    assert_eq!(state.turn(), 2);

    let report = game.play_turn(&mut state, Action::Work);
    assert_eq!(report.expired.len(), 1);
    assert_eq!(state.player(P1).attributes.strength, 0);
}

#[test]
fn test_ranged_weapon_against_low_health() {
    for damage in 3..=5 {
        let (game, mut state) = scripted([damage]);
        state.player_mut(P1).weapon.damage = DamageRange::new(3, 5);
        state.player_mut(P2).health = 4;

        game.attack(&mut state, P1);
        assert_eq!(state.player(P2).health, 4u32.saturating_sub(damage));
    }
}

#[test]
fn test_full_game_with_forfeit() {
    let (mut game, mut state) = scripted([15, 15]);

    game.play_turn(&mut state, Action::Work);
    game.play_turn(&mut state, Action::Work);
    game.play_turn(&mut state, Action::Buy(WeaponKind::Knife.into()));
    let report = game.play_turn(&mut state, Action::Exit);

    assert_eq!(report.player, P2);
    assert_eq!(report.result, Some(GameResult::Forfeited { winner: P1, quitter: P2 }));
    assert_eq!(state.player(P1).weapon.kind, WeaponKind::Knife);
    assert_eq!(state.player(P1).gold, 20 + 15 - 10);
    assert_eq!(state.history().len(), 4);
}

#[test]
fn test_deterministic_replay() {
    let script = [
        Action::Work,
        Action::Attack,
        Action::Buy(WeaponKind::Knife.into()),
        Action::Work,
        Action::Attack,
        Action::Attack,
        Action::Attack,
        Action::Work,
    ];

    let run = |seed: u64| {
        let (mut game, mut state) = ArchaemaniaBuilder::new().build(seed).unwrap();
        for action in script {
            game.play_turn(&mut state, action);
        }
        (state.player(P1).clone(), state.player(P2).clone())
    };

    assert_eq!(run(99), run(99));
}

#[test]
fn test_history_replays_from_json() {
    let (mut game, mut state) = ArchaemaniaBuilder::new().build(7).unwrap();
    for action in [
        Action::Work,
        Action::Buy(ConsumableKind::AgilityPotion.into()),
        Action::Use(ConsumableKind::AgilityPotion),
        Action::Attack,
        Action::Train(Stat::Intellect),
        Action::Use(ConsumableKind::HealthPotion),
        Action::Work,
        Action::Exit,
    ] {
        game.play_turn(&mut state, action);
    }

    let json = serde_json::to_string(state.history()).unwrap();
    let records: im::Vector<ActionRecord> = serde_json::from_str(&json).unwrap();
    assert_eq!(&records, state.history());

    let (mut replay_game, mut replay) = ArchaemaniaBuilder::new().build(7).unwrap();
    for record in &records {
        assert_eq!(replay.active_player, record.player);
        let report = replay_game.play_turn(&mut replay, record.action);
        assert_eq!(report.outcome.is_err(), record.rejected);
    }

    assert_eq!(replay.players, state.players);
    assert_eq!(replay.result(), state.result());
}

// === Properties ===

/// Random playthrough using only legal actions.
fn random_game(seed: u64, picks: &[usize], config: GameConfig) -> (ArchaemaniaGame, GameState) {
    let (mut game, mut state) = ArchaemaniaBuilder::new()
        .config(config)
        .build_with_rng(GameRng::new(seed))
        .unwrap();

    for &pick in picks {
        if game.is_terminal(&state).is_some() {
            break;
        }
        let player = state.active_player;
        // Expiry can take back a requirement, so list actions afterwards.
        game.begin_turn(&mut state);
        let actions: Vec<_> = game
            .legal_actions(&state, player)
            .into_iter()
            .filter(|a| *a != Action::Exit)
            .collect();
        let action = actions[pick % actions.len()];

        let outcome = game.apply_action(&mut state, player, action);
        assert!(outcome.is_ok(), "legal action {action} refused: {outcome:?}");
        game.end_turn(&mut state);

        for (_, p) in state.players.iter() {
            assert!(p.health <= game.config().max_health);
            for stat in Stat::ALL {
                assert!(p.attributes.get(stat) <= game.config().max_attribute(stat));
            }
        }
    }
    (game, state)
}

proptest! {
    #[test]
    fn prop_attack_never_raises_health(
        min in 0u32..10,
        span in 0u32..10,
        roll in 0u32..30,
        health in 1u32..=30,
    ) {
        let (game, mut state) = scripted([roll]);
        state.player_mut(P1).weapon.damage = DamageRange::new(min, min + span);
        state.player_mut(P2).health = health;

        let outcome = game.attack(&mut state, P1);
        let after = state.player(P2).health;

        prop_assert!(after <= health);
        prop_assert!(after <= game.config().max_health);
        let expected_damage = roll.clamp(min, min + span);
        prop_assert_eq!(after, health.saturating_sub(expected_damage));
        prop_assert_eq!(state.is_over(), after == 0);
        let is_attack = matches!(outcome, archaemania::Outcome::Attacked { .. });
        prop_assert!(is_attack);
    }

    #[test]
    fn prop_training_respects_cap(
        gold in 0u32..200,
        attempts in proptest::collection::vec(0usize..3, 0..40),
        max in 1u32..15,
        increment in 1u32..4,
    ) {
        let config = GameConfig::default().with_max_attributes(max).with_training(5, increment);
        let (game, mut state) = ArchaemaniaBuilder::new()
            .config(config)
            .build_with_rng(SequenceRng::default())
            .unwrap();
        state.player_mut(P1).gold = gold;

        for i in attempts {
            let stat = Stat::ALL[i];
            let before = state.player(P1).clone();
            let result = game.train(&mut state, P1, stat);
            let after = state.player(P1);

            prop_assert!(after.attributes.get(stat) < max);
            match result {
                Ok(_) => {
                    prop_assert_eq!(after.attributes.get(stat), before.attributes.get(stat) + increment);
                    prop_assert_eq!(after.gold, before.gold - 5);
                }
                Err(_) => {
                    prop_assert_eq!(after, &before);
                }
            }
        }
    }

    #[test]
    fn prop_potion_expires_once_on_schedule(
        used_on in 0u32..20,
        duration in 1u32..6,
        bonus in 1u32..4,
    ) {
        let config = GameConfig::default().with_stat_potion(bonus, duration);
        let (game, mut state) = ArchaemaniaBuilder::new()
            .config(config)
            .build_with_rng(SequenceRng::default())
            .unwrap();

        game.buy(&mut state, P1, ConsumableKind::AgilityPotion.into()).unwrap();
        state.player_mut(P1).turn = used_on;
        game.use_item(&mut state, P1, ConsumableKind::AgilityPotion).unwrap();
        prop_assert_eq!(state.player(P1).attributes.agility, bonus);

        let due = used_on + duration - 1;
        let mut reversals = 0;
        for turn in used_on..used_on + duration + 5 {
            state.player_mut(P1).turn = turn;
            let expired = game.expire_effects(&mut state, P1);
            reversals += expired.len();

            if turn < due {
                prop_assert!(expired.is_empty());
                prop_assert_eq!(state.player(P1).attributes.agility, bonus);
            } else {
                prop_assert_eq!(state.player(P1).attributes.agility, 0);
            }
        }
        prop_assert_eq!(reversals, 1);
    }

    #[test]
    fn prop_purchase_deducts_exact_cost(
        gold in 0u32..100,
        strength in 0u32..4,
        intellect in 0u32..4,
        agility in 0u32..4,
        pick in 0usize..9,
    ) {
        let (game, mut state) = scripted([]);
        {
            let buyer = state.player_mut(P1);
            buyer.gold = gold;
            buyer.attributes.strength = strength;
            buyer.attributes.intellect = intellect;
            buyer.attributes.agility = agility;
        }
        let item = all_items()[pick];
        let def = game.catalog().get(item).unwrap().clone();
        let before = state.player(P1).clone();

        let eligible = gold >= def.cost && def.requirements.first_unmet(&before.attributes).is_none();
        let result = game.buy(&mut state, P1, item);

        prop_assert_eq!(result.is_ok(), eligible);
        if eligible {
            prop_assert_eq!(state.player(P1).gold, gold - def.cost);
        } else {
            prop_assert_eq!(state.player(P1), &before);
        }
    }

    #[test]
    fn prop_random_legal_play_keeps_invariants(
        seed in any::<u64>(),
        picks in proptest::collection::vec(any::<usize>(), 1..120),
        per_round in any::<bool>(),
    ) {
        let advance = if per_round { TurnAdvance::PerRound } else { TurnAdvance::PerAction };
        let (game, state) = random_game(seed, &picks, GameConfig::default().with_turn_advance(advance));

        if let Some(result) = game.is_terminal(&state) {
            let GameResult::Defeated { winner, loser } = result else {
                panic!("exit was filtered out");
            };
            prop_assert!(state.player(winner).is_alive());
            prop_assert!(!state.player(loser).is_alive());
        }
        prop_assert!(state.history().iter().all(|r| !r.rejected));
    }
}
