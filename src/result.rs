//! Round outcome types.

use core::fmt;

/// Why a round ended the way it did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Reason {
    /// The player went over 21.
    PlayerBust,
    /// The dealer went over 21.
    DealerBust,
    /// The winner holds a two-card 21.
    Blackjack,
    /// Both hands are a two-card 21.
    BothBlackjack,
    /// The winner's total is higher.
    HigherScore,
    /// Both totals are equal.
    EqualScore,
}

/// Final result of a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// The player wins.
    PlayerWins(Reason),
    /// The dealer wins.
    DealerWins(Reason),
    /// Nobody wins.
    Tie(Reason),
}

impl Outcome {
    /// Returns the reason attached to the outcome.
    #[must_use]
    pub const fn reason(self) -> Reason {
        match self {
            Self::PlayerWins(reason) | Self::DealerWins(reason) | Self::Tie(reason) => reason,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PlayerWins(_) => f.write_str("You win!"),
            Self::DealerWins(_) => f.write_str("Dealer wins!"),
            Self::Tie(_) => f.write_str("It's a tie!"),
        }
    }
}
