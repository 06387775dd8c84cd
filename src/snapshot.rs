//! Read-only views of a round for the display layer.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use crate::card::Card;
use crate::game::Phase;
use crate::hand::{Hand, HandStatus};

/// A participant's hand as shown to the display layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandView {
    /// Participant name.
    pub name: String,
    /// Cards currently held.
    pub cards: Vec<Card>,
    /// Derived point count.
    pub count: u8,
    /// Terminal status, if assigned.
    pub status: Option<HandStatus>,
    /// Whether this is the dealer.
    pub is_dealer: bool,
}

impl From<&Hand> for HandView {
    fn from(hand: &Hand) -> Self {
        Self {
            name: String::from(hand.name()),
            cards: hand.cards().to_vec(),
            count: hand.count(),
            status: hand.status(),
            is_dealer: hand.is_dealer(),
        }
    }
}

/// The state of a round at one point in time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    /// Current phase.
    pub phase: Phase,
    /// Cards left in the shoe.
    pub remaining: usize,
    /// Seat whose turn it is, if any.
    pub current_player: Option<usize>,
    /// All hands, dealer first.
    pub hands: Vec<HandView>,
}
