//! Deck and round configuration options.

use alloc::rc::Rc;
use core::cmp::Ordering;
use core::fmt;

use crate::card::Card;
use crate::error::ConfigError;

type CardFilter = Rc<dyn Fn(&Card) -> bool>;
type CardOrder = Rc<dyn Fn(&Card, &Card) -> Ordering>;

/// Configuration for building a deck.
///
/// Counts are validated as they are set, so an assembled `DeckOptions` always
/// builds successfully:
///
/// ```
/// use bjlite::{DeckOptions, Rank, card};
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha8Rng;
///
/// # fn main() -> Result<(), bjlite::ConfigError> {
/// let options = DeckOptions::default()
///     .with_decks(2)?
///     .with_jokers(2)?
///     .with_filter(|c| c.rank == Rank::Two)
///     .with_sort(card::by_rank);
///
/// let deck = options.build(&mut ChaCha8Rng::seed_from_u64(7));
/// assert_eq!(deck.len(), 2 * 48 + 2);
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct DeckOptions {
    /// Number of standard decks concatenated before filtering.
    pub(crate) decks: usize,
    /// Number of jokers appended after the standard cards.
    pub(crate) jokers: usize,
    /// Whether the assembled deck is shuffled.
    pub(crate) shuffle: bool,
    /// Cards for which this returns `true` are left out.
    pub(crate) filter: Option<CardFilter>,
    /// Final ordering, applied after any shuffle.
    pub(crate) sort: Option<CardOrder>,
}

impl Default for DeckOptions {
    fn default() -> Self {
        Self {
            decks: 1,
            jokers: 0,
            shuffle: false,
            filter: None,
            sort: None,
        }
    }
}

impl fmt::Debug for DeckOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DeckOptions")
            .field("decks", &self.decks)
            .field("jokers", &self.jokers)
            .field("shuffle", &self.shuffle)
            .field("filter", &self.filter.is_some())
            .field("sort", &self.sort.is_some())
            .finish()
    }
}

impl DeckOptions {
    /// Sets the number of standard decks.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NegativeDecks`] if `decks` is negative.
    ///
    /// # Example
    ///
    /// ```
    /// use bjlite::{ConfigError, DeckOptions};
    ///
    /// assert_eq!(DeckOptions::default().with_decks(6).unwrap().decks(), 6);
    /// assert_eq!(
    ///     DeckOptions::default().with_decks(-1).unwrap_err(),
    ///     ConfigError::NegativeDecks(-1)
    /// );
    /// ```
    pub fn with_decks(mut self, decks: i32) -> Result<Self, ConfigError> {
        self.decks = usize::try_from(decks).map_err(|_| ConfigError::NegativeDecks(decks))?;
        Ok(self)
    }

    /// Sets the number of jokers.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NegativeJokers`] if `jokers` is negative.
    pub fn with_jokers(mut self, jokers: i32) -> Result<Self, ConfigError> {
        self.jokers = usize::try_from(jokers).map_err(|_| ConfigError::NegativeJokers(jokers))?;
        Ok(self)
    }

    /// Sets whether the deck is shuffled.
    ///
    /// A sort set with [`with_sort`](Self::with_sort) runs after the shuffle,
    /// and breaks ties by suit then rank, so the final order does not depend
    /// on the shuffle.
    #[must_use]
    pub const fn with_shuffle(mut self, shuffle: bool) -> Self {
        self.shuffle = shuffle;
        self
    }

    /// Excludes standard cards for which `filter` returns `true`.
    ///
    /// Jokers are never filtered.
    #[must_use]
    pub fn with_filter<F>(mut self, filter: F) -> Self
    where
        F: Fn(&Card) -> bool + 'static,
    {
        self.filter = Some(Rc::new(filter));
        self
    }

    /// Sorts the finished deck with `compare`.
    ///
    /// Cards that `compare` treats as equal are ordered by suit, then rank.
    ///
    /// See [`card::by_suit`](crate::card::by_suit) and
    /// [`card::by_rank`](crate::card::by_rank) for ready-made comparators.
    #[must_use]
    pub fn with_sort<F>(mut self, compare: F) -> Self
    where
        F: Fn(&Card, &Card) -> Ordering + 'static,
    {
        self.sort = Some(Rc::new(compare));
        self
    }

    /// Returns the number of standard decks.
    #[must_use]
    pub const fn decks(&self) -> usize {
        self.decks
    }

    /// Returns the number of jokers.
    #[must_use]
    pub const fn jokers(&self) -> usize {
        self.jokers
    }

    /// Returns whether the deck will be shuffled.
    #[must_use]
    pub const fn shuffles(&self) -> bool {
        self.shuffle
    }

    pub(crate) fn excludes(&self, card: &Card) -> bool {
        self.filter.as_ref().is_some_and(|filter| filter(card))
    }
}

/// Configuration for a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RoundOptions {
    /// Money the player starts with.
    pub player_money: usize,
    /// Money the dealer starts with.
    pub dealer_money: usize,
}

impl RoundOptions {
    /// Sets the player's starting money.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ZeroStartingMoney`] if `amount` is zero.
    ///
    /// # Example
    ///
    /// ```
    /// use bjlite::RoundOptions;
    ///
    /// let options = RoundOptions::default().with_player_money(500).unwrap();
    /// assert_eq!(options.player_money, 500);
    /// assert!(RoundOptions::default().with_player_money(0).is_err());
    /// ```
    pub const fn with_player_money(mut self, amount: usize) -> Result<Self, ConfigError> {
        if amount == 0 {
            return Err(ConfigError::ZeroStartingMoney);
        }
        self.player_money = amount;
        Ok(self)
    }

    /// Sets the dealer's starting money.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ZeroStartingMoney`] if `amount` is zero.
    pub const fn with_dealer_money(mut self, amount: usize) -> Result<Self, ConfigError> {
        if amount == 0 {
            return Err(ConfigError::ZeroStartingMoney);
        }
        self.dealer_money = amount;
        Ok(self)
    }
}
