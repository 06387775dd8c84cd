//! A single-round blackjack engine with optional `no_std` support.
//!
//! The crate provides a [`Round`] type that owns a multi-deck [`Shoe`], the
//! dealer's and players' [`Hand`]s, and the phase of play. The round moves
//! only in response to a [`Signal`]: dealing, player turns, the dealer's
//! automatic play and scoring all run to completion inside one call, and the
//! caller reads the outcome back through [`Round::snapshot`].
//!
//! # Example
//!
//! ```
//! use bjround::{Phase, Round, RoundOptions, Signal};
//!
//! let options = RoundOptions::default().with_players(["Dan", "Juan"]);
//! let mut round = Round::new(options, 42).unwrap();
//!
//! round.send(Signal::BeginRound).unwrap();
//! while matches!(round.phase(), Phase::PlayerTurn(_)) {
//!     round.send(Signal::Stand).unwrap();
//! }
//! assert_eq!(round.phase(), Phase::EndRound);
//! assert!(round.last_result().is_some());
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
pub mod event;
pub mod game;
pub mod hand;
pub mod options;
pub mod result;
pub mod shoe;
pub mod snapshot;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use deck::Deck;
pub use error::{ConfigError, ShoeError, SignalError};
pub use event::Event;
pub use game::{DEALER_SEAT, FIRST_PLAYER_SEAT, Phase, Round, Signal, TurnState, transition};
pub use hand::{BLACKJACK, Hand, HandStatus};
pub use options::{RoundOptions, ShoePolicy};
pub use result::{HandOutcome, HandResult, RoundResult};
pub use shoe::{DEFAULT_DECKS, Shoe};
pub use snapshot::{HandView, Snapshot};
