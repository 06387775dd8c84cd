//! Round phases and the signals that drive them.

use core::fmt;

/// Sub-state of a single hand's turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TurnState {
    /// The hand may still draw.
    NotBusted,
    /// The hand stopped drawing.
    Stay,
    /// The hand went over 21.
    Bust,
}

impl TurnState {
    /// Returns whether the turn is over.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Stay | Self::Bust)
    }

    const fn name(self) -> &'static str {
        match self {
            Self::NotBusted => "notBusted",
            Self::Stay => "stay",
            Self::Bust => "bust",
        }
    }
}

/// Phase of a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Building the shoe and hands.
    Loading,
    /// Waiting for the round to begin.
    PlaceBets,
    /// Dealing the opening cards.
    DealingCards,
    /// A player seat is acting.
    PlayerTurn(TurnState),
    /// The dealer is drawing.
    DealerTurn(TurnState),
    /// The round is scored.
    EndRound,
}

impl Phase {
    /// Returns whether no further transition leaves this phase within the
    /// current round.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        match self {
            Self::PlayerTurn(turn) | Self::DealerTurn(turn) => turn.is_terminal(),
            Self::EndRound => true,
            Self::Loading | Self::PlaceBets | Self::DealingCards => false,
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Loading => f.write_str("loading"),
            Self::PlaceBets => f.write_str("placeBets"),
            Self::DealingCards => f.write_str("dealingCards"),
            Self::PlayerTurn(turn) => write!(f, "playerTurn.{}", turn.name()),
            Self::DealerTurn(turn) => write!(f, "dealerTurn.{}", turn.name()),
            Self::EndRound => f.write_str("endRound"),
        }
    }
}

/// External intents accepted by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Signal {
    /// Start dealing a round.
    BeginRound,
    /// Draw a card for the acting player.
    Hit,
    /// End the acting player's turn.
    Stand,
}

impl fmt::Display for Signal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::BeginRound => "BEGIN_ROUND",
            Self::Hit => "HIT",
            Self::Stand => "STAND",
        })
    }
}
