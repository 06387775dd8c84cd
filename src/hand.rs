//! Participant hands and their point values.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use crate::card::Card;

/// Highest count that is not a bust.
pub const BLACKJACK: u8 = 21;

fn evaluate_cards(cards: &[Card]) -> (u8, bool) {
    let mut value: u8 = 0;
    let mut aces: u8 = 0;

    for card in cards {
        if card.is_ace() {
            aces += 1;
        }
        value = value.saturating_add(card.rank.points());
    }

    // Demote aces from 11 to 1 one at a time.
    while value > BLACKJACK && aces > 0 {
        value -= 10;
        aces -= 1;
    }

    (value, aces > 0)
}

/// Terminal status of a hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandStatus {
    /// Hand went over 21 during its turn.
    Busted,
    /// Hand beat the dealer.
    Win,
    /// Hand lost to the dealer.
    Lose,
    /// Hand tied the dealer.
    Push,
}

/// A participant's hand: the dealer or a player seat.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hand {
    name: String,
    cards: Vec<Card>,
    is_dealer: bool,
    status: Option<HandStatus>,
    bust_count: Option<u8>,
}

impl Hand {
    /// Creates an empty player hand.
    #[must_use]
    pub fn player(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            cards: Vec::new(),
            is_dealer: false,
            status: None,
            bust_count: None,
        }
    }

    /// Creates an empty dealer hand.
    #[must_use]
    pub fn dealer(name: impl Into<String>) -> Self {
        Self {
            is_dealer: true,
            ..Self::player(name)
        }
    }

    /// Returns the participant name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns whether this is the dealer's hand.
    #[must_use]
    pub const fn is_dealer(&self) -> bool {
        self.is_dealer
    }

    /// Returns the terminal status, if one has been assigned.
    #[must_use]
    pub const fn status(&self) -> Option<HandStatus> {
        self.status
    }

    /// Returns the count the hand busted with, kept after its cards are
    /// cleared.
    #[must_use]
    pub const fn bust_count(&self) -> Option<u8> {
        self.bust_count
    }

    /// Calculates the point count of the hand.
    ///
    /// Aces count 11 unless that would bust the hand, in which case as many
    /// aces as needed count 1.
    #[must_use]
    pub fn count(&self) -> u8 {
        evaluate_cards(&self.cards).0
    }

    /// Returns whether the hand is soft (an ace still counts 11).
    #[must_use]
    pub fn is_soft(&self) -> bool {
        evaluate_cards(&self.cards).1
    }

    /// Returns whether the count is over 21.
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.count() > BLACKJACK
    }

    /// Returns the number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand holds no cards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub(crate) fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    pub(crate) const fn set_status(&mut self, status: HandStatus) {
        self.status = Some(status);
    }

    pub(crate) fn clear_cards(&mut self) {
        self.cards.clear();
    }

    /// Marks the hand busted and clears its cards, returning the bust count.
    pub(crate) fn bust(&mut self) -> u8 {
        let count = self.count();
        self.bust_count = Some(count);
        self.status = Some(HandStatus::Busted);
        self.cards.clear();
        count
    }

    /// Empties the hand and forgets its status for a new round.
    pub(crate) fn reset(&mut self) {
        self.cards.clear();
        self.status = None;
        self.bust_count = None;
    }
}
