//! Console text: banners, the stat dump, and action messages.

use std::io::{self, Write};

use crate::core::{Action, GameState, Player};
use crate::effects::ActiveEffect;
use crate::error::ActionError;
use crate::rules::{GameResult, Outcome};

pub fn write_welcome(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "Welcome to Archaemania\n\n")
}

pub fn write_turn(out: &mut impl Write, turn: u32) -> io::Result<()> {
    writeln!(out, "\nTurn: {turn}")
}

/// Name, health, gold, attributes, weapon and inventory.
pub fn write_player(out: &mut impl Write, player: &Player) -> io::Result<()> {
    let inventory: Vec<_> = player.inventory.iter().map(|c| c.kind.name()).collect();

    writeln!(out, "\nName: {}", player.name)?;
    writeln!(out, "Health: {}", player.health)?;
    writeln!(out, "Gold: {}", player.gold)?;
    writeln!(out, "Agility: {}", player.attributes.agility)?;
    writeln!(out, "Strength: {}", player.attributes.strength)?;
    writeln!(out, "Intelligence: {}", player.attributes.intellect)?;
    writeln!(out, "Weapon: {} ({} damage)", player.weapon.kind, player.weapon.damage)?;
    writeln!(out, "Consumables: [{}]", inventory.join(", "))?;
    if !player.active_effects.is_empty() {
        let active: Vec<_> = player
            .active_effects
            .iter()
            .map(|e| format!("{} (until turn {})", e.kind(), e.expires_on()))
            .collect();
        writeln!(out, "Active: [{}]", active.join(", "))?;
    }
    Ok(())
}

pub fn write_expired(out: &mut impl Write, effect: &ActiveEffect) -> io::Result<()> {
    writeln!(out, "Your {} has worn off.", effect.kind())
}

/// Describe a successful action from the acting player's point of view.
pub fn write_outcome(out: &mut impl Write, state: &GameState, outcome: &Outcome) -> io::Result<()> {
    match outcome {
        Outcome::Attacked {
            target,
            remaining_health,
            ..
        } => {
            let name = &state.player(*target).name;
            writeln!(out, "You attacked {name}")?;
            writeln!(out, "{name} now has {remaining_health} health")
        }
        Outcome::Bought(item) => writeln!(out, "You bought a {item}"),
        Outcome::Worked { earned } => writeln!(out, "You worked and earned {earned} gold"),
        Outcome::Used { kind, wasted, .. } => {
            if *wasted {
                writeln!(out, "You are already at max health")?;
            }
            writeln!(out, "You used {kind}")
        }
        Outcome::Trained { stat, .. } => writeln!(out, "You trained {stat}."),
        Outcome::Exited => Ok(()),
    }
}

/// Explain why an action was refused.
pub fn write_refusal(out: &mut impl Write, action: Action, err: &ActionError) -> io::Result<()> {
    writeln!(out, "{}", capitalize(&err.to_string()))?;
    if let Action::Buy(_) = action {
        writeln!(out, "Purchase failed!")?;
    }
    Ok(())
}

pub fn write_result(out: &mut impl Write, state: &GameState, result: &GameResult) -> io::Result<()> {
    match *result {
        GameResult::Defeated { winner, loser } => writeln!(
            out,
            "{} has died and {} has won the game!",
            state.player(loser).name,
            state.player(winner).name
        ),
        GameResult::Forfeited { winner, quitter } => {
            writeln!(out, "{} has exited the game", state.player(quitter).name)?;
            writeln!(out, "{} has won the game!", state.player(winner).name)
        }
    }
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{GameConfig, PlayerId, SequenceRng};
    use crate::items::{ConsumableKind, WeaponKind};

    fn render(f: impl FnOnce(&mut Vec<u8>) -> io::Result<()>) -> String {
        let mut out = Vec::new();
        f(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_player_dump() {
        let config = GameConfig::default();
        let mut player = Player::new("Gopher1", &config);
        player.inventory.push(crate::items::Consumable {
            kind: ConsumableKind::HealthPotion,
            duration: 0,
            effect: crate::effects::StatDelta::health(5),
            activated_on: None,
        });

        let text = render(|out| write_player(out, &player));
        assert!(text.contains("Name: Gopher1\n"));
        assert!(text.contains("Health: 30\n"));
        assert!(text.contains("Gold: 20\n"));
        assert!(text.contains("Weapon: Bare Hands (1 damage)\n"));
        assert!(text.contains("Consumables: [Health Potion]\n"));
        assert!(!text.contains("Active:"));
    }

    #[test]
    fn test_refusal_messages() {
        let err = ActionError::InsufficientGold { required: 35, available: 20 };
        let text = render(|out| write_refusal(out, Action::Buy(WeaponKind::Knife.into()), &err));
        assert_eq!(text, "Insufficient gold: need 35, have 20\nPurchase failed!\n");

        let err = ActionError::ItemNotOwned(ConsumableKind::AgilityPotion);
        let text = render(|out| write_refusal(out, Action::Use(ConsumableKind::AgilityPotion), &err));
        assert_eq!(text, "You do not have any Agility Potion in your inventory\n");
    }

    #[test]
    fn test_wasted_potion_message() {
        let state = GameState::new(&GameConfig::default(), SequenceRng::default());
        let outcome = Outcome::Used {
            kind: ConsumableKind::HealthPotion,
            healed: 0,
            wasted: true,
            effect: None,
        };
        let text = render(|out| write_outcome(out, &state, &outcome));
        assert_eq!(text, "You are already at max health\nYou used Health Potion\n");
    }

    #[test]
    fn test_result_messages() {
        let state = GameState::new(&GameConfig::default(), SequenceRng::default());

        let text = render(|out| {
            write_result(
                out,
                &state,
                &GameResult::Defeated { winner: PlayerId::FIRST, loser: PlayerId::SECOND },
            )
        });
        assert_eq!(text, "Gopher2 has died and Gopher1 has won the game!\n");

        let text = render(|out| {
            write_result(
                out,
                &state,
                &GameResult::Forfeited { winner: PlayerId::FIRST, quitter: PlayerId::SECOND },
            )
        });
        assert_eq!(text, "Gopher2 has exited the game\nGopher1 has won the game!\n");
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("you are"), "You are");
        assert_eq!(capitalize(""), "");
    }
}
