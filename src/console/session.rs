//! The interactive game loop.
//!
//! `Session` drives an `ArchaemaniaGame` over any `BufRead`/`Write` pair:
//! a turn banner and stat dump, a menu walk to pick one action, the
//! action's messages, then the next player. Invalid selections print
//! `Invalid Choice` and re-prompt; an invalid sub-menu choice goes back to
//! the top-level menu.

use std::io::{BufRead, Write};

use tracing::debug;

use super::input::read_choice;
use super::menu::{
    BuyCategory, MainChoice, Menu, BUY_MENU, CONSUMABLE_MENU, MAIN_MENU, TRAIN_MENU, WEAPON_MENU,
};
use super::render;
use crate::core::{Action, GameState};
use crate::effects::ActiveEffect;
use crate::error::ConsoleError;
use crate::games::archaemania::ArchaemaniaGame;
use crate::items::ItemKind;
use crate::rules::{GameResult, RulesEngine};

/// An interactive game over a pair of streams.
pub struct Session<R, W> {
    game: ArchaemaniaGame,
    state: GameState,
    terminal: Terminal<R, W>,
}

/// The player's side of the session: menus in, messages out.
struct Terminal<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(game: ArchaemaniaGame, state: GameState, input: R, output: W) -> Self {
        Self {
            game,
            state,
            terminal: Terminal { input, output },
        }
    }

    /// Current game state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Play until one player dies or exits.
    pub fn run(&mut self) -> Result<GameResult, ConsoleError> {
        render::write_welcome(&mut self.terminal.output)?;

        loop {
            if let Some(result) = self.game.is_terminal(&self.state) {
                let out = &mut self.terminal.output;
                render::write_result(out, &self.state, &result)?;
                out.flush()?;
                return Ok(result);
            }
            self.play_turn()?;
        }
    }

    fn play_turn(&mut self) -> Result<(), ConsoleError> {
        let Self {
            game,
            state,
            terminal,
        } = self;

        let report = game.play_turn_with(state, |state, expired| terminal.take_turn(state, expired))?;

        let out = &mut terminal.output;
        match &report.outcome {
            Ok(outcome) => render::write_outcome(out, state, outcome)?,
            Err(err) => render::write_refusal(out, report.action, err)?,
        }
        Ok(())
    }
}

impl<R: BufRead, W: Write> Terminal<R, W> {
    /// Show the turn banner and stats, then walk the menus for an action.
    fn take_turn(&mut self, state: &GameState, expired: &[ActiveEffect]) -> Result<Action, ConsoleError> {
        render::write_turn(&mut self.output, state.turn())?;
        for effect in expired {
            render::write_expired(&mut self.output, effect)?;
        }
        render::write_player(&mut self.output, state.active())?;
        self.choose_action(&state.active().name)
    }

    /// Walk the menus until the player picks a complete action.
    fn choose_action(&mut self, name: &str) -> Result<Action, ConsoleError> {
        loop {
            writeln!(self.output, "{name}, what would you like to do?")?;

            let action = match self.prompt(&MAIN_MENU)? {
                None => continue,
                Some(MainChoice::Attack) => Some(Action::Attack),
                Some(MainChoice::Work) => Some(Action::Work),
                Some(MainChoice::Exit) => Some(Action::Exit),
                Some(MainChoice::Buy) => self.choose_purchase()?,
                Some(MainChoice::Use) => {
                    writeln!(self.output, "What consumable would you like to use?")?;
                    self.prompt(&CONSUMABLE_MENU)?.map(Action::Use)
                }
                Some(MainChoice::Train) => {
                    writeln!(self.output, "What stat would you like to train?")?;
                    self.prompt(&TRAIN_MENU)?.map(Action::Train)
                }
            };

            if let Some(action) = action {
                return Ok(action);
            }
        }
    }

    fn choose_purchase(&mut self) -> Result<Option<Action>, ConsoleError> {
        writeln!(self.output, "What would you like to buy?")?;
        let item = match self.prompt(&BUY_MENU)? {
            None => return Ok(None),
            Some(BuyCategory::Weapons) => {
                writeln!(self.output, "What weapon would you like to buy?")?;
                self.prompt(&WEAPON_MENU)?.map(ItemKind::Weapon)
            }
            Some(BuyCategory::Consumables) => {
                writeln!(self.output, "What consumable would you like to buy?")?;
                self.prompt(&CONSUMABLE_MENU)?.map(ItemKind::Consumable)
            }
        };
        Ok(item.map(Action::Buy))
    }

    /// Show a menu and read one selection. `None` means it was invalid.
    fn prompt<T: Copy + 'static>(&mut self, menu: &Menu<T>) -> Result<Option<T>, ConsoleError> {
        menu.render(&mut self.output)?;
        self.output.flush()?;

        let selection = read_choice(&mut self.input)?;
        let choice = selection.and_then(|n| menu.select(n));
        if choice.is_none() {
            debug!(?selection, "invalid menu choice");
            writeln!(self.output, "Invalid Choice")?;
        }
        Ok(choice)
    }
}
