use crate::hand::{Hand, Participant};
use crate::result::{Outcome, Reason};

use super::{Round, RoundState};

/// Checks the conditions that end a round before the player stays.
///
/// Checked in order: player bust, dealer bust, both blackjack, player
/// blackjack, dealer blackjack. Scores are read as last recomputed.
#[must_use]
pub fn early_outcome(player: &Hand, dealer: &Hand) -> Option<Outcome> {
    let player_blackjack = player.points() == 21 && player.len() == 2;
    let dealer_blackjack = dealer.points() == 21 && dealer.len() == 2;

    if player.points() > 21 {
        Some(Outcome::DealerWins(Reason::PlayerBust))
    } else if dealer.points() > 21 {
        Some(Outcome::PlayerWins(Reason::DealerBust))
    } else if player_blackjack && dealer_blackjack {
        Some(Outcome::Tie(Reason::BothBlackjack))
    } else if player_blackjack {
        Some(Outcome::PlayerWins(Reason::Blackjack))
    } else if dealer_blackjack {
        Some(Outcome::DealerWins(Reason::Blackjack))
    } else {
        None
    }
}

/// Compares totals once the player has stayed.
#[must_use]
pub const fn final_outcome(player: &Hand, dealer: &Hand) -> Outcome {
    match player.points() {
        p if p > dealer.points() => Outcome::PlayerWins(Reason::HigherScore),
        p if p < dealer.points() => Outcome::DealerWins(Reason::HigherScore),
        _ => Outcome::Tie(Reason::EqualScore),
    }
}

impl Round {
    fn rescore(&mut self) {
        self.player.score();
        self.dealer.score();
    }

    pub(super) fn finish(&mut self, outcome: Outcome) -> Outcome {
        tracing::info!(
            ?outcome,
            player = self.player.points(),
            dealer = self.dealer.points(),
            "round decided"
        );
        self.state = RoundState::Finished(outcome);
        outcome
    }

    /// Rescores both hands and checks the early win conditions.
    ///
    /// Returns the outcome if the round is (or already was) decided. While the
    /// round is in the player's turn and nothing applies, returns `None`.
    pub fn evaluate(&mut self) -> Option<Outcome> {
        if let RoundState::Finished(outcome) = self.state {
            return Some(outcome);
        }

        self.rescore();
        early_outcome(self.player.hand(), self.dealer.hand()).map(|outcome| self.finish(outcome))
    }

    /// Rescores both hands and compares totals.
    pub(super) fn resolve(&mut self) -> Outcome {
        self.state = RoundState::Resolving;
        self.rescore();
        let outcome = final_outcome(self.player.hand(), self.dealer.hand());
        self.finish(outcome)
    }
}
