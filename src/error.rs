//! Error types for engine operations.

use thiserror::Error;

use crate::game::{Phase, Signal};

/// Errors raised by the shoe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ShoeError {
    /// A shoe was requested with zero decks.
    #[error("a shoe needs at least one deck")]
    NoDecks,
    /// No cards left in the shoe.
    #[error("no cards left in the shoe")]
    Empty,
}

/// Errors that can occur while setting up a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The shoe could not be built.
    #[error(transparent)]
    Shoe(#[from] ShoeError),
    /// No player seats were configured.
    #[error("at least one player is required")]
    NoPlayers,
    /// A full shoe cannot cover the opening deal.
    #[error("too many players for the configured shoe")]
    TooManyPlayers,
}

/// Errors returned when a signal is rejected.
///
/// A rejected signal leaves the round untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SignalError {
    /// The signal is not accepted in the current phase.
    #[error("{signal} is not accepted during {phase}")]
    InvalidSignal {
        /// The rejected signal.
        signal: Signal,
        /// The phase the round was in.
        phase: Phase,
    },
    /// The shoe ran out of cards.
    #[error("no cards left in the shoe")]
    ShoeExhausted,
}
