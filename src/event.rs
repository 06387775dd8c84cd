//! Effects reported by the engine for each accepted signal.

use crate::card::Card;
use crate::game::Phase;
use crate::result::HandOutcome;

/// Something that happened while handling a signal.
///
/// Seats index [`Round::hands`](crate::Round::hands); the dealer is seat 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// The round entered a new phase.
    PhaseEntered(Phase),
    /// The shoe was replaced by a freshly shuffled one.
    ShoeReplenished {
        /// Cards in the new shoe.
        remaining: usize,
    },
    /// An opening card was dealt.
    CardDealt {
        /// Receiving seat.
        seat: usize,
        /// The card.
        card: Card,
    },
    /// A card was drawn during a turn.
    CardDrawn {
        /// Receiving seat.
        seat: usize,
        /// The card.
        card: Card,
        /// Count after the draw.
        count: u8,
    },
    /// The turn moved to another seat.
    TurnPassed {
        /// Seat now acting.
        seat: usize,
    },
    /// A hand stopped drawing.
    HandStood {
        /// The seat.
        seat: usize,
        /// Final count.
        count: u8,
    },
    /// A hand went over 21.
    HandBusted {
        /// The seat.
        seat: usize,
        /// Count that busted.
        count: u8,
    },
    /// A player hand was scored against the dealer.
    HandSettled {
        /// The seat.
        seat: usize,
        /// The outcome.
        outcome: HandOutcome,
    },
}
