//! Deck construction and drawing.

use alloc::collections::VecDeque;
use alloc::vec::Vec;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::error::DrawError;
use crate::options::DeckOptions;

/// An ordered deck of cards, drawn from the front.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Deck {
    cards: VecDeque<Card>,
}

impl Deck {
    /// Creates a deck holding `cards`, the first element being drawn first.
    #[must_use]
    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self {
            cards: cards.into(),
        }
    }

    /// Removes and returns the front card.
    ///
    /// # Errors
    ///
    /// Returns [`DrawError::EmptyDeck`] if no cards are left.
    pub fn draw(&mut self) -> Result<Card, DrawError> {
        self.cards.pop_front().ok_or(DrawError::EmptyDeck)
    }

    /// Returns the front card without removing it.
    #[must_use]
    pub fn peek(&self) -> Option<&Card> {
        self.cards.front()
    }

    /// Returns the number of cards remaining.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterates over the remaining cards in draw order.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    /// Copies the remaining cards into a vector, in draw order.
    #[must_use]
    pub fn to_vec(&self) -> Vec<Card> {
        self.cards.iter().copied().collect()
    }
}

impl DeckOptions {
    /// Builds a deck from these options.
    ///
    /// Standard cards are generated suit by suit (Spades, Diamonds, Clubs,
    /// Hearts), Ace through King, once per deck, skipping filtered cards.
    /// Jokers are appended, then the deck is shuffled with `rng` if requested,
    /// then sorted if a comparator was set. Cards the comparator treats as
    /// equal are ordered by suit, then rank.
    pub fn build<R: Rng + ?Sized>(&self, rng: &mut R) -> Deck {
        let mut cards = Vec::with_capacity(self.decks * DECK_SIZE + self.jokers);

        for _ in 0..self.decks {
            for suit in Suit::STANDARD {
                for rank in Rank::STANDARD {
                    let card = Card::new(suit, rank);
                    if !self.excludes(&card) {
                        cards.push(card);
                    }
                }
            }
        }

        cards.extend(core::iter::repeat_n(Card::joker(), self.jokers));

        if self.shuffle {
            cards.shuffle(rng);
        }
        if let Some(compare) = &self.sort {
            // Ties fall back to card order.
            cards.sort_by(|a, b| compare(a, b).then_with(|| a.cmp(b)));
        }

        tracing::debug!(
            cards = cards.len(),
            decks = self.decks,
            jokers = self.jokers,
            shuffled = self.shuffle,
            sorted = self.sort.is_some(),
            "built deck"
        );

        Deck::from_cards(cards)
    }
}
