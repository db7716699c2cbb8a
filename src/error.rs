//! Error types for deck construction and round play.

use alloc::string::String;

use thiserror::Error;

/// Errors raised while assembling deck or round options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A negative number of decks was requested.
    #[error("number of decks cannot be negative: {0}")]
    NegativeDecks(i32),
    /// A negative number of jokers was requested.
    #[error("number of jokers cannot be negative: {0}")]
    NegativeJokers(i32),
    /// A starting money amount of zero was supplied.
    #[error("starting amount must be greater than 0")]
    ZeroStartingMoney,
}

/// Errors that can occur when drawing from a deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DrawError {
    /// No cards left in the deck.
    #[error("the deck is empty")]
    EmptyDeck,
}

/// A turn decision other than hit or stay.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid selection `{0}`: select 1 (hit) or 2 (stay)")]
pub struct InvalidDecision(pub String);

/// Errors that can occur during the initial deal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// Not enough cards in the deck for two cards each.
    #[error("not enough cards to deal: need {needed}, have {remaining}")]
    NotEnoughCards {
        /// Cards required for the deal.
        needed: usize,
        /// Cards left in the deck.
        remaining: usize,
    },
}

/// Errors that can occur during player actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// The round is not waiting for a player decision.
    #[error("invalid round state for this action")]
    InvalidState,
    /// No cards left in the deck.
    #[error("no cards left in the deck")]
    NoCards,
}

impl From<DrawError> for ActionError {
    fn from(err: DrawError) -> Self {
        match err {
            DrawError::EmptyDeck => Self::NoCards,
        }
    }
}
