//! A single-player blackjack round engine with optional `no_std` support.
//!
//! The crate provides a configurable deck builder ([`DeckOptions`]) and a
//! [`Round`] type that deals two cards each to a player and a dealer, runs
//! the hit/stay loop, and decides the outcome. The dealer never draws past
//! its initial two cards.
//!
//! # Example
//!
//! ```
//! use bjlite::{Decision, Participant, Round};
//!
//! let mut round = Round::new(42).unwrap();
//! let outcome = round
//!     .play_player_turn(|round| {
//!         if round.player().points() < 17 {
//!             Ok(Decision::Hit)
//!         } else {
//!             Ok(Decision::Stay)
//!         }
//!     })
//!     .unwrap();
//! assert_eq!(round.outcome(), Some(outcome));
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod game;
pub mod hand;
pub mod options;
pub mod result;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use deck::Deck;
pub use error::{ActionError, ConfigError, DealError, DrawError, InvalidDecision};
pub use game::{Decision, Round, RoundState, Table};
pub use hand::{DealerHand, Hand, HIDDEN_CARD, Participant, PlayerHand};
pub use options::{DeckOptions, RoundOptions};
pub use result::{Outcome, Reason};
