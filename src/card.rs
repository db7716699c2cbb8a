//! Card types, labels, and sort comparators.

use alloc::format;
use alloc::string::String;
use core::cmp::Ordering;
use core::fmt;

/// Card suit.
///
/// The declaration order is the order used by [`by_suit`] and by deck
/// generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Suit {
    /// Spades.
    Spades = 0,
    /// Diamonds.
    Diamonds = 1,
    /// Clubs.
    Clubs = 2,
    /// Hearts.
    Hearts = 3,
    /// The joker pseudo-suit.
    Joker = 4,
}

impl Suit {
    /// The four standard suits in generation order.
    pub const STANDARD: [Self; 4] = [Self::Spades, Self::Diamonds, Self::Clubs, Self::Hearts];

    /// Returns the display name of the suit.
    #[must_use]
    pub const fn name(self) -> &'static str {
        SUIT_NAMES[self as usize]
    }
}

/// Card rank.
///
/// The discriminant is the card's face number, so `Rank::Seven as u8 == 7`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Rank {
    /// Rank carried by jokers. Has no scoring meaning.
    Joker = 0,
    /// Ace.
    Ace = 1,
    /// Two.
    Two = 2,
    /// Three.
    Three = 3,
    /// Four.
    Four = 4,
    /// Five.
    Five = 5,
    /// Six.
    Six = 6,
    /// Seven.
    Seven = 7,
    /// Eight.
    Eight = 8,
    /// Nine.
    Nine = 9,
    /// Ten.
    Ten = 10,
    /// Jack.
    Jack = 11,
    /// Queen.
    Queen = 12,
    /// King.
    King = 13,
}

impl Rank {
    /// Ranks of a standard suit, Ace through King.
    pub const STANDARD: [Self; 13] = [
        Self::Ace,
        Self::Two,
        Self::Three,
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Seven,
        Self::Eight,
        Self::Nine,
        Self::Ten,
        Self::Jack,
        Self::Queen,
        Self::King,
    ];

    /// Returns the face number of the rank (0 for jokers).
    #[must_use]
    pub const fn value(self) -> u8 {
        self as u8
    }

    /// Returns whether this is a Jack, Queen, or King.
    #[must_use]
    pub const fn is_face(self) -> bool {
        matches!(self, Self::Jack | Self::Queen | Self::King)
    }
}

const SUIT_NAMES: [&str; 5] = ["Spades", "Diamonds", "Clubs", "Hearts", "Joker"];

const RANK_NAMES: [&str; 14] = [
    "Joker", "Ace", "Two", "Three", "Four", "Five", "Six", "Seven", "Eight", "Nine", "Ten", "Jack",
    "Queen", "King",
];

/// A playing card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Card {
    /// The suit of the card.
    pub suit: Suit,
    /// The rank of the card.
    pub rank: Rank,
}

impl Card {
    /// Creates a new card.
    ///
    /// Note: This function does not validate the pairing. A standard suit with
    /// [`Rank::Joker`] is accepted but labels itself as invalid.
    #[must_use]
    pub const fn new(suit: Suit, rank: Rank) -> Self {
        Self { suit, rank }
    }

    /// Creates a joker.
    #[must_use]
    pub const fn joker() -> Self {
        Self::new(Suit::Joker, Rank::Joker)
    }

    /// Returns whether this card is a joker.
    #[must_use]
    pub const fn is_joker(&self) -> bool {
        matches!(self.suit, Suit::Joker)
    }

    /// Returns the display label, e.g. `"Ace of Hearts"`.
    #[must_use]
    pub fn label(&self) -> String {
        label_from_ordinals(self.suit as u8, self.rank.value())
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

/// Renders a card given as raw suit and rank ordinals.
///
/// Jokers render as `"Joker"` regardless of rank. Out-of-range values
/// produce an `invalid card ...` label instead of failing.
///
/// ```
/// use bjlite::card::label_from_ordinals;
///
/// assert_eq!(label_from_ordinals(3, 1), "Ace of Hearts");
/// assert_eq!(label_from_ordinals(4, 0), "Joker");
/// assert_eq!(label_from_ordinals(0, 14), "invalid card value: 14");
/// assert_eq!(label_from_ordinals(9, 5), "invalid card suit: 9");
/// ```
#[must_use]
pub fn label_from_ordinals(suit: u8, rank: u8) -> String {
    if suit == Suit::Joker as u8 {
        return String::from(Suit::Joker.name());
    }
    if !(Rank::Ace.value()..=Rank::King.value()).contains(&rank) {
        return format!("invalid card value: {rank}");
    }
    if suit > Suit::Hearts as u8 {
        return format!("invalid card suit: {suit}");
    }
    format!(
        "{} of {}",
        RANK_NAMES[rank as usize], SUIT_NAMES[suit as usize]
    )
}

/// Orders cards by suit only.
#[must_use]
pub fn by_suit(a: &Card, b: &Card) -> Ordering {
    a.suit.cmp(&b.suit)
}

/// Orders cards by rank only.
#[must_use]
pub fn by_rank(a: &Card, b: &Card) -> Ordering {
    a.rank.cmp(&b.rank)
}

/// Number of cards per standard deck.
pub const DECK_SIZE: usize = 52;
