//! Round result types for scoring.

extern crate alloc;

use alloc::vec::Vec;

use crate::hand::HandStatus;

/// Result of a player hand against the dealer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandOutcome {
    /// Player wins (dealer busts or player has the higher count).
    Win,
    /// Player loses (player busts or dealer has the higher count).
    Lose,
    /// Push (tie).
    Push,
}

impl From<HandOutcome> for HandStatus {
    fn from(outcome: HandOutcome) -> Self {
        match outcome {
            HandOutcome::Win => Self::Win,
            HandOutcome::Lose => Self::Lose,
            HandOutcome::Push => Self::Push,
        }
    }
}

/// Result for a single player hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HandResult {
    /// The seat index in [`Round::hands`](crate::Round::hands).
    pub seat: usize,
    /// The outcome of the hand.
    pub outcome: HandOutcome,
    /// The player's count at scoring, or the count a busted hand went over with.
    pub count: u8,
    /// Whether the hand busted during its turn.
    pub busted: bool,
}

/// Result of the entire round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundResult {
    /// Results for each player hand, in seat order.
    pub hands: Vec<HandResult>,
    /// The dealer's final count.
    pub dealer_count: u8,
    /// Whether the dealer busted.
    pub dealer_bust: bool,
}

impl RoundResult {
    /// Returns the result for `seat`, if it is a player seat.
    #[must_use]
    pub fn hand(&self, seat: usize) -> Option<&HandResult> {
        self.hands.iter().find(|result| result.seat == seat)
    }
}
