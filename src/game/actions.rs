use alloc::string::String;
use core::str::FromStr;

use crate::card::Card;
use crate::error::{ActionError, InvalidDecision};
use crate::hand::Participant;
use crate::result::Outcome;

use super::{Round, RoundState};

/// A player decision during their turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Decision {
    /// Draw one more card.
    Hit,
    /// End the turn and compare totals.
    Stay,
}

fn is_any(input: &str, names: &[&str]) -> bool {
    names.iter().any(|name| input.eq_ignore_ascii_case(name))
}

impl FromStr for Decision {
    type Err = InvalidDecision;

    /// Parses `1`, `h`, or `hit` as [`Decision::Hit`] and `2`, `s`, `stay`,
    /// or `stand` as [`Decision::Stay`], ignoring case and surrounding space.
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let trimmed = input.trim();

        if is_any(trimmed, &["1", "h", "hit"]) {
            Ok(Self::Hit)
        } else if is_any(trimmed, &["2", "s", "stay", "stand"]) {
            Ok(Self::Stay)
        } else {
            Err(InvalidDecision(String::from(trimmed)))
        }
    }
}

impl Round {
    fn ensure_player_turn(&self) -> Result<(), ActionError> {
        if self.state == RoundState::PlayerTurn {
            Ok(())
        } else {
            Err(ActionError::InvalidState)
        }
    }

    /// Player action: Hit (draw a card).
    ///
    /// The early win conditions are checked right after the draw, so a bust
    /// finishes the round immediately.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::InvalidState`] if the round is not in the
    /// player's turn, or [`ActionError::NoCards`] if the deck is empty.
    pub fn hit(&mut self) -> Result<Card, ActionError> {
        self.ensure_player_turn()?;

        let card = self.player.draw(&mut self.deck).inspect_err(|err| {
            tracing::error!(%err, "player hit on an empty deck");
        })?;
        tracing::debug!(card = %card, points = self.player.points(), "player hit");

        self.evaluate();
        Ok(card)
    }

    /// Player action: Stay.
    ///
    /// Checks the early win conditions first; if none apply, compares totals.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::InvalidState`] if the round is not in the
    /// player's turn.
    pub fn stay(&mut self) -> Result<Outcome, ActionError> {
        self.ensure_player_turn()?;

        if let Some(outcome) = self.evaluate() {
            return Ok(outcome);
        }
        Ok(self.resolve())
    }

    /// Runs the player's turn to completion.
    ///
    /// Before each decision both hands are rescored and the early win
    /// conditions are checked. `decide` is then called with the current
    /// round; an [`InvalidDecision`] is logged and `decide` is called again
    /// without changing anything.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::InvalidState`] if the round is already decided,
    /// or [`ActionError::NoCards`] if a hit finds the deck empty.
    ///
    /// # Example
    ///
    /// ```
    /// use bjlite::{Decision, Round};
    ///
    /// let mut round = Round::new(7).unwrap();
    /// let outcome = round.play_player_turn(|_| Ok(Decision::Stay)).unwrap();
    /// assert_eq!(round.outcome(), Some(outcome));
    /// ```
    pub fn play_player_turn<F>(&mut self, mut decide: F) -> Result<Outcome, ActionError>
    where
        F: FnMut(&Self) -> Result<Decision, InvalidDecision>,
    {
        self.ensure_player_turn()?;

        loop {
            if let Some(outcome) = self.evaluate() {
                return Ok(outcome);
            }

            match decide(self) {
                Ok(Decision::Hit) => {
                    self.hit()?;
                }
                Ok(Decision::Stay) => return Ok(self.resolve()),
                Err(err) => {
                    tracing::warn!(%err, "rejected turn input");
                }
            }
        }
    }
}
