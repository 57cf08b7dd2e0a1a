//! The Archaemania turn engine.

use std::convert::Infallible;

use tracing::{debug, info};

use crate::core::{Action, GameConfig, GameRng, GameState, PlayerId, RandomSource};
use crate::effects::ActiveEffect;
use crate::error::{ActionError, ActionResult, ConfigError};
use crate::items::{Catalog, ConsumableKind, ItemKind, Stat, WeaponKind};
use crate::rules::{GameResult, Outcome, RulesEngine, TurnReport};

/// Rules and shop for one game.
#[derive(Clone, Debug)]
pub struct ArchaemaniaGame {
    config: GameConfig,
    catalog: Catalog,
}

/// Builder for creating an `ArchaemaniaGame` and its initial state.
#[derive(Clone, Debug, Default)]
pub struct ArchaemaniaBuilder {
    config: GameConfig,
}

impl ArchaemaniaBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole configuration.
    pub fn config(mut self, config: GameConfig) -> Self {
        self.config = config;
        self
    }

    pub fn player_names(mut self, first: impl Into<String>, second: impl Into<String>) -> Self {
        self.config = self.config.with_player_names(first, second);
        self
    }

    /// Build with a seeded ChaCha8 RNG.
    pub fn build(self, seed: u64) -> Result<(ArchaemaniaGame, GameState), ConfigError> {
        self.build_with_rng(GameRng::new(seed))
    }

    /// Build with any random source.
    pub fn build_with_rng(
        self,
        rng: impl RandomSource + 'static,
    ) -> Result<(ArchaemaniaGame, GameState), ConfigError> {
        self.config.validate()?;
        let state = GameState::new(&self.config, rng);
        let game = ArchaemaniaGame {
            catalog: Catalog::standard(&self.config),
            config: self.config,
        };
        Ok((game, state))
    }
}

impl ArchaemaniaGame {
    /// Get the shop catalog.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    // === Actions ===

    /// Hit the opponent with the equipped weapon.
    ///
    /// Health stops at zero; reaching zero ends the game.
    pub fn attack(&self, state: &mut GameState, attacker: PlayerId) -> Outcome {
        let target = attacker.opponent();
        let (me, them, rng) = state.split_mut(attacker);
        let damage = me.weapon.damage.roll(rng);
        let remaining_health = them.take_damage(damage);

        if remaining_health == 0 {
            state.set_result(GameResult::Defeated {
                winner: attacker,
                loser: target,
            });
        }

        Outcome::Attacked {
            target,
            damage,
            remaining_health,
        }
    }

    /// Buy an item from the catalog.
    ///
    /// Requirements are checked before gold. On failure nothing changes.
    pub fn buy(&self, state: &mut GameState, player: PlayerId, item: ItemKind) -> ActionResult<Outcome> {
        let def = self.catalog.get(item).ok_or(ActionError::NotForSale(item))?;
        let buyer = state.player_mut(player);

        if let Some((stat, required)) = def.requirements.first_unmet(&buyer.attributes) {
            return Err(ActionError::InsufficientAttribute {
                item,
                stat,
                required,
                actual: buyer.attributes.get(stat),
            });
        }
        if buyer.gold < def.cost {
            return Err(ActionError::InsufficientGold {
                required: def.cost,
                available: buyer.gold,
            });
        }

        if let Some(weapon) = def.weapon() {
            buyer.weapon = weapon;
        } else if let Some(consumable) = def.consumable() {
            buyer.inventory.push(consumable);
        } else {
            return Err(ActionError::NotForSale(item));
        }
        buyer.gold -= def.cost;

        Ok(Outcome::Bought(item))
    }

    /// Earn a random amount of gold in the configured range.
    pub fn work(&self, state: &mut GameState, player: PlayerId) -> Outcome {
        let earned = state
            .rng_mut()
            .roll(self.config.work_min_gold, self.config.work_max_gold);
        let worker = state.player_mut(player);
        worker.gold = worker.gold.saturating_add(earned);
        Outcome::Worked { earned }
    }

    /// Use the first consumable of `kind` in the inventory.
    ///
    /// Instant consumables are spent on the spot; a healing one drunk at
    /// full health is spent without effect. Timed ones apply their bonus
    /// and join the active effects, stamped with the current turn.
    pub fn use_item(
        &self,
        state: &mut GameState,
        player: PlayerId,
        kind: ConsumableKind,
    ) -> ActionResult<Outcome> {
        let config = &self.config;
        let user = state.player_mut(player);
        let index = user.find_consumable(kind).ok_or(ActionError::ItemNotOwned(kind))?;

        let consumable = user.inventory.remove(index);

        if consumable.is_instant() {
            let wasted = consumable.effect.health > 0 && user.health >= config.max_health;
            let applied = user.apply_delta(consumable.effect, config);
            return Ok(Outcome::Used {
                kind,
                healed: u32::try_from(applied.health).unwrap_or(0),
                wasted,
                effect: None,
            });
        }

        let applied = user.apply_delta(consumable.effect, config);
        let effect = ActiveEffect::new(consumable, applied, user.turn);
        user.active_effects.push(effect.clone());

        Ok(Outcome::Used {
            kind,
            healed: 0,
            wasted: false,
            effect: Some(effect),
        })
    }

    /// Pay to raise an attribute by the training increment.
    ///
    /// Refused when gold is short, or when the raised value would reach
    /// the attribute's cap.
    pub fn train(&self, state: &mut GameState, player: PlayerId, stat: Stat) -> ActionResult<Outcome> {
        let trainee = state.player_mut(player);
        if trainee.gold < self.config.train_cost {
            return Err(ActionError::InsufficientGold {
                required: self.config.train_cost,
                available: trainee.gold,
            });
        }

        let max = self.config.max_attribute(stat);
        let value = match trainee.attributes.get(stat).checked_add(self.config.train_increment) {
            Some(value) if value < max => value,
            _ => return Err(ActionError::AttributeAtMaximum { stat, max }),
        };

        trainee.attributes.set(stat, value);
        trainee.gold -= self.config.train_cost;
        Ok(Outcome::Trained { stat, value })
    }

    /// Leave the game; the opponent wins.
    pub fn forfeit(&self, state: &mut GameState, player: PlayerId) -> Outcome {
        state.set_result(GameResult::Forfeited {
            winner: player.opponent(),
            quitter: player,
        });
        Outcome::Exited
    }

    /// Reverse and drop every effect of `player` due on their current turn.
    pub fn expire_effects(&self, state: &mut GameState, player: PlayerId) -> Vec<ActiveEffect> {
        let owner = state.player_mut(player);
        let expired = owner.active_effects.take_expired(owner.turn);
        for effect in &expired {
            owner.revert_delta(effect.applied, &self.config);
            debug!(
                player = %player,
                kind = %effect.kind(),
                activated_on = effect.activated_on,
                turn = owner.turn,
                "effect expired"
            );
        }
        expired
    }

    // === Turn Sequencing ===

    /// Start the active player's turn: expire their stale effects.
    pub fn begin_turn(&self, state: &mut GameState) -> Vec<ActiveEffect> {
        let player = state.active_player;
        self.expire_effects(state, player)
    }

    /// Finish the turn: advance the counter and pass to the other player.
    ///
    /// Does nothing once the game is over.
    pub fn end_turn(&self, state: &mut GameState) {
        if !state.is_over() {
            state.advance_turn(self.config.turn_advance);
        }
    }

    /// Play one full turn for the active player.
    pub fn play_turn(&mut self, state: &mut GameState, action: Action) -> TurnReport {
        match self.play_turn_with(state, |_, _| Ok::<_, Infallible>(action)) {
            Ok(report) => report,
            Err(never) => match never {},
        }
    }

    /// Play one full turn, asking `choose` for the action.
    ///
    /// `choose` sees the state after expiry along with the effects that just
    /// wore off. If it fails the turn is abandoned before any action runs.
    pub fn play_turn_with<E>(
        &mut self,
        state: &mut GameState,
        choose: impl FnOnce(&GameState, &[ActiveEffect]) -> Result<Action, E>,
    ) -> Result<TurnReport, E> {
        let player = state.active_player;
        let expired = self.begin_turn(state);
        let action = choose(state, &expired)?;
        let outcome = self.apply_action(state, player, action);
        self.end_turn(state);

        Ok(TurnReport {
            player,
            action,
            expired,
            outcome,
            result: state.result().copied(),
        })
    }
}

impl RulesEngine for ArchaemaniaGame {
    fn config(&self) -> &GameConfig {
        &self.config
    }

    fn legal_actions(&self, state: &GameState, player: PlayerId) -> Vec<Action> {
        if state.is_over() || state.active_player != player {
            return vec![];
        }

        let me = state.player(player);
        let mut actions = vec![Action::Attack, Action::Work];

        let shop = WeaponKind::FOR_SALE
            .into_iter()
            .map(ItemKind::Weapon)
            .chain(ConsumableKind::ALL.into_iter().map(ItemKind::Consumable));
        for item in shop {
            if let Some(def) = self.catalog.get(item) {
                if def.requirements.first_unmet(&me.attributes).is_none() && me.gold >= def.cost {
                    actions.push(Action::Buy(item));
                }
            }
        }

        for kind in ConsumableKind::ALL {
            if me.find_consumable(kind).is_some() {
                actions.push(Action::Use(kind));
            }
        }

        if me.gold >= self.config.train_cost {
            for stat in Stat::ALL {
                let raised = me.attributes.get(stat).checked_add(self.config.train_increment);
                if raised.is_some_and(|v| v < self.config.max_attribute(stat)) {
                    actions.push(Action::Train(stat));
                }
            }
        }

        actions.push(Action::Exit);
        actions
    }

    fn apply_action(
        &mut self,
        state: &mut GameState,
        player: PlayerId,
        action: Action,
    ) -> ActionResult<Outcome> {
        if state.is_over() {
            return Err(ActionError::GameOver);
        }
        if state.active_player != player {
            return Err(ActionError::NotYourTurn(player));
        }

        let outcome = match action {
            Action::Attack => Ok(self.attack(state, player)),
            Action::Buy(item) => self.buy(state, player, item),
            Action::Work => Ok(self.work(state, player)),
            Action::Use(kind) => self.use_item(state, player, kind),
            Action::Train(stat) => self.train(state, player, stat),
            Action::Exit => Ok(self.forfeit(state, player)),
        };

        state.record_action(player, action, outcome.is_err());
        match &outcome {
            Ok(result) => debug!(player = %player, turn = state.turn(), %action, ?result, "action applied"),
            Err(err) => debug!(player = %player, turn = state.turn(), %action, %err, "action refused"),
        }
        if let Some(result) = state.result() {
            info!(winner = %result.winner(), turn = state.turn(), ?result, "game over");
        }

        outcome
    }

    fn is_terminal(&self, state: &GameState) -> Option<GameResult> {
        if let Some(result) = state.result() {
            return Some(*result);
        }
        state
            .players
            .iter()
            .find(|(_, p)| !p.is_alive())
            .map(|(loser, _)| GameResult::Defeated {
                winner: loser.opponent(),
                loser,
            })
    }
}
