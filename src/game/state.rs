//! Round state types.

use crate::result::Outcome;

/// Round state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundState {
    /// Dealing the initial cards.
    Dealing,
    /// Waiting for the player to hit or stay.
    PlayerTurn,
    /// The player stayed and totals are being compared.
    Resolving,
    /// The round is decided.
    Finished(Outcome),
}

impl RoundState {
    /// Returns the outcome if the round is decided.
    #[must_use]
    pub const fn outcome(self) -> Option<Outcome> {
        match self {
            Self::Finished(outcome) => Some(outcome),
            _ => None,
        }
    }
}
