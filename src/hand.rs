//! Player and dealer hand representations.

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use crate::card::{Card, Rank};
use crate::deck::Deck;
use crate::error::DrawError;

/// Placeholder rendered in place of the dealer's hole card.
pub const HIDDEN_CARD: &str = "Hidden Card";

/// Scores a set of cards.
///
/// Non-ace cards are summed first (faces count 10, jokers 0). Each ace is then
/// added one at a time: 11 while the running total is 10 or less, otherwise 1.
///
/// ```
/// use bjlite::{Card, Rank, Suit, hand::score_cards};
///
/// let ace = Card::new(Suit::Spades, Rank::Ace);
/// let eight = Card::new(Suit::Hearts, Rank::Eight);
/// assert_eq!(score_cards(&[ace, ace]), 12);
/// assert_eq!(score_cards(&[ace, ace, ace, eight]), 21);
/// ```
#[must_use]
pub fn score_cards(cards: &[Card]) -> u32 {
    let mut total: u32 = 0;
    let mut aces: u32 = 0;

    for card in cards {
        match card.rank {
            Rank::Ace => aces += 1,
            rank if rank.is_face() => total = total.saturating_add(10),
            rank => total = total.saturating_add(u32::from(rank.value())),
        }
    }

    for _ in 0..aces {
        total = total.saturating_add(if total > 10 { 1 } else { 11 });
    }

    total
}

/// Cards held by one participant, plus their last computed score.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Hand {
    /// Cards in the hand.
    cards: Vec<Card>,
    /// Score as of the last recomputation.
    points: u32,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cards: Vec::new(),
            points: 0,
        }
    }

    /// Moves the front card of `deck` into this hand and rescores.
    ///
    /// # Errors
    ///
    /// Returns [`DrawError::EmptyDeck`] if the deck has no cards. Neither the
    /// hand nor the deck is changed in that case.
    pub fn draw(&mut self, deck: &mut Deck) -> Result<Card, DrawError> {
        let card = deck.draw()?;
        self.cards.push(card);
        self.score();
        Ok(card)
    }

    /// Recomputes and returns the score.
    pub fn score(&mut self) -> u32 {
        self.points = score_cards(&self.cards);
        self.points
    }

    /// Returns the score as of the last recomputation.
    #[must_use]
    pub const fn points(&self) -> u32 {
        self.points
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns whether the hand is a two-card 21.
    #[must_use]
    pub fn is_blackjack(&self) -> bool {
        self.cards.len() == 2 && score_cards(&self.cards) == 21
    }

    /// Returns whether the hand is over 21.
    #[must_use]
    pub fn is_bust(&self) -> bool {
        score_cards(&self.cards) > 21
    }
}

/// Shared behavior of the player and the dealer.
pub trait Participant {
    /// Returns the participant's hand.
    fn hand(&self) -> &Hand;

    /// Returns the participant's hand mutably.
    fn hand_mut(&mut self) -> &mut Hand;

    /// Returns the participant's money balance.
    fn money(&self) -> usize;

    /// Renders the hand as display lines.
    ///
    /// Card lines come first, followed by `Score:` and `Money:` lines when
    /// they are visible.
    fn render(&self, reveal_all: bool) -> Vec<String>;

    /// Draws one card from `deck` into the hand.
    ///
    /// # Errors
    ///
    /// Returns [`DrawError::EmptyDeck`] if the deck has no cards.
    fn draw(&mut self, deck: &mut Deck) -> Result<Card, DrawError> {
        self.hand_mut().draw(deck)
    }

    /// Recomputes and returns the hand's score.
    fn score(&mut self) -> u32 {
        self.hand_mut().score()
    }

    /// Returns the score as of the last recomputation.
    fn points(&self) -> u32 {
        self.hand().points()
    }
}

fn summary_lines(hand: &Hand, money: usize) -> [String; 2] {
    [
        format!("Score: {}", score_cards(hand.cards())),
        format!("Money: {money}"),
    ]
}

/// The player's hand.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PlayerHand {
    hand: Hand,
    money: usize,
}

impl PlayerHand {
    /// Creates an empty player hand with the given balance.
    #[must_use]
    pub const fn new(money: usize) -> Self {
        Self {
            hand: Hand::new(),
            money,
        }
    }
}

impl Participant for PlayerHand {
    fn hand(&self) -> &Hand {
        &self.hand
    }

    fn hand_mut(&mut self) -> &mut Hand {
        &mut self.hand
    }

    fn money(&self) -> usize {
        self.money
    }

    /// Player cards are always face up; `reveal_all` is ignored.
    fn render(&self, _reveal_all: bool) -> Vec<String> {
        let mut lines: Vec<String> = self.hand.cards().iter().map(Card::label).collect();
        lines.extend(summary_lines(&self.hand, self.money));
        lines
    }
}

/// The dealer's hand.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DealerHand {
    hand: Hand,
    money: usize,
}

impl DealerHand {
    /// Creates an empty dealer hand with the given balance.
    #[must_use]
    pub const fn new(money: usize) -> Self {
        Self {
            hand: Hand::new(),
            money,
        }
    }

    /// Returns the face-up card (first card).
    #[must_use]
    pub fn up_card(&self) -> Option<&Card> {
        self.hand.cards().first()
    }

    /// Returns the hole card (second card).
    #[must_use]
    pub fn hole_card(&self) -> Option<&Card> {
        self.hand.cards().get(1)
    }
}

impl Participant for DealerHand {
    fn hand(&self) -> &Hand {
        &self.hand
    }

    fn hand_mut(&mut self) -> &mut Hand {
        &mut self.hand
    }

    fn money(&self) -> usize {
        self.money
    }

    /// The hole card renders as [`HIDDEN_CARD`] and the score and money stay
    /// hidden unless `reveal_all` is set.
    fn render(&self, reveal_all: bool) -> Vec<String> {
        let mut lines: Vec<String> = self
            .hand
            .cards()
            .iter()
            .enumerate()
            .map(|(index, card)| {
                if index == 1 && !reveal_all {
                    String::from(HIDDEN_CARD)
                } else {
                    card.label()
                }
            })
            .collect();
        if reveal_all {
            lines.extend(summary_lines(&self.hand, self.money));
        }
        lines
    }
}
