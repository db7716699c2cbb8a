//! Round controller and state management.

use alloc::string::String;
use alloc::vec::Vec;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::deck::Deck;
use crate::error::{DealError, DrawError};
use crate::hand::{DealerHand, Participant, PlayerHand};
use crate::options::{DeckOptions, RoundOptions};
use crate::result::Outcome;

mod actions;
mod showdown;
pub mod state;

pub use actions::Decision;
pub use showdown::{early_outcome, final_outcome};
pub use state::RoundState;

/// Cards needed for the initial deal.
const INITIAL_CARDS: usize = 4;

/// One round of blackjack between a player and a dealer that never draws.
///
/// The round owns its deck and both hands. It is created already dealt and
/// moves from [`RoundState::PlayerTurn`] to [`RoundState::Finished`].
#[derive(Debug, Clone)]
pub struct Round {
    /// Cards left to draw.
    deck: Deck,
    /// The player's hand.
    player: PlayerHand,
    /// The dealer's hand.
    dealer: DealerHand,
    /// Current round state.
    state: RoundState,
}

/// Rendered hands for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    /// Player lines.
    pub player: Vec<String>,
    /// Dealer lines, hole card hidden until the round is finished.
    pub dealer: Vec<String>,
}

impl Round {
    /// Starts a round on a freshly shuffled standard deck seeded with `seed`.
    ///
    /// # Example
    ///
    /// ```
    /// use bjlite::{Participant, Round, RoundState};
    ///
    /// let round = Round::new(42).unwrap();
    /// assert_eq!(round.player().hand().len(), 2);
    /// assert_eq!(round.dealer().hand().len(), 2);
    /// assert_eq!(round.deck().len(), 48);
    /// assert_eq!(round.state(), RoundState::PlayerTurn);
    /// ```
    ///
    /// # Errors
    ///
    /// Returns an error if the deck cannot cover the initial deal.
    pub fn new(seed: u64) -> Result<Self, DealError> {
        Self::with_options(RoundOptions::default(), seed)
    }

    /// Starts a round with the given options, seeded with `seed`.
    ///
    /// # Errors
    ///
    /// Returns an error if the deck cannot cover the initial deal.
    pub fn with_options(options: RoundOptions, seed: u64) -> Result<Self, DealError> {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        Self::with_rng(options, &mut rng)
    }

    /// Starts a round, shuffling a standard deck with `rng`.
    ///
    /// # Errors
    ///
    /// Returns an error if the deck cannot cover the initial deal.
    pub fn with_rng<R: Rng + ?Sized>(
        options: RoundOptions,
        rng: &mut R,
    ) -> Result<Self, DealError> {
        let deck = DeckOptions::default().with_shuffle(true).build(rng);
        Self::from_deck(options, deck)
    }

    /// Starts a round on a prepared deck, dealing from its front.
    ///
    /// # Errors
    ///
    /// Returns [`DealError::NotEnoughCards`] if the deck holds fewer than four
    /// cards. Nothing is dealt in that case.
    pub fn from_deck(options: RoundOptions, deck: Deck) -> Result<Self, DealError> {
        if deck.len() < INITIAL_CARDS {
            return Err(DealError::NotEnoughCards {
                needed: INITIAL_CARDS,
                remaining: deck.len(),
            });
        }

        let mut round = Self {
            deck,
            player: PlayerHand::new(options.player_money),
            dealer: DealerHand::new(options.dealer_money),
            state: RoundState::Dealing,
        };
        round.deal()?;
        Ok(round)
    }

    /// Deals player, dealer, player, dealer.
    fn deal(&mut self) -> Result<(), DealError> {
        let remaining = self.deck.len();
        let short = move |_: DrawError| DealError::NotEnoughCards {
            needed: INITIAL_CARDS,
            remaining,
        };

        for _ in 0..2 {
            self.player.draw(&mut self.deck).map_err(short)?;
            self.dealer.draw(&mut self.deck).map_err(short)?;
        }

        tracing::debug!(
            player = self.player.points(),
            dealer_up = ?self.dealer.up_card(),
            remaining = self.deck.len(),
            "dealt initial cards"
        );

        self.state = RoundState::PlayerTurn;
        Ok(())
    }

    /// Returns the current round state.
    #[must_use]
    pub const fn state(&self) -> RoundState {
        self.state
    }

    /// Returns the outcome if the round is decided.
    #[must_use]
    pub const fn outcome(&self) -> Option<Outcome> {
        self.state.outcome()
    }

    /// Returns whether the round is decided.
    #[must_use]
    pub const fn is_finished(&self) -> bool {
        matches!(self.state, RoundState::Finished(_))
    }

    /// Returns the player's hand.
    #[must_use]
    pub const fn player(&self) -> &PlayerHand {
        &self.player
    }

    /// Returns the dealer's hand.
    #[must_use]
    pub const fn dealer(&self) -> &DealerHand {
        &self.dealer
    }

    /// Returns the remaining deck.
    #[must_use]
    pub const fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Renders both hands, revealing the dealer once the round is finished.
    #[must_use]
    pub fn table(&self) -> Table {
        let reveal_all = self.is_finished();
        Table {
            player: self.player.render(reveal_all),
            dealer: self.dealer.render(reveal_all),
        }
    }
}
