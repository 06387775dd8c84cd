//! The multi-deck draw pile.

extern crate alloc;

use alloc::vec::Vec;

use rand::Rng;

use crate::card::{Card, DECK_SIZE};
use crate::deck::Deck;
use crate::error::ShoeError;

/// Default number of decks in a shoe.
pub const DEFAULT_DECKS: u8 = 6;

/// A draw pile built from several independently shuffled decks.
///
/// Draws take the card at the end of the pile and never put cards back, so
/// [`Shoe::remaining`] only ever decreases.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shoe {
    cards: Vec<Card>,
    decks: u8,
}

impl Shoe {
    /// Creates a shoe of `decks` shuffled decks.
    ///
    /// # Errors
    ///
    /// Returns [`ShoeError::NoDecks`] if `decks` is zero.
    pub fn new<R: Rng>(decks: u8, rng: &mut R) -> Result<Self, ShoeError> {
        if decks == 0 {
            return Err(ShoeError::NoDecks);
        }

        let mut cards = Vec::with_capacity(decks as usize * DECK_SIZE);
        for _ in 0..decks {
            cards.extend(Deck::new(rng).into_cards());
        }

        Ok(Self { cards, decks })
    }

    /// Creates a stacked shoe that deals `draws` in order.
    ///
    /// The shoe reports one deck per started 52 cards.
    #[must_use]
    pub fn from_draws(draws: &[Card]) -> Self {
        let mut cards = draws.to_vec();
        cards.reverse();
        let decks = u8::try_from(draws.len().div_ceil(DECK_SIZE).max(1)).unwrap_or(u8::MAX);
        Self { cards, decks }
    }

    /// Draws the top card.
    ///
    /// # Errors
    ///
    /// Returns [`ShoeError::Empty`] if no cards remain.
    pub fn draw(&mut self) -> Result<Card, ShoeError> {
        self.cards.pop().ok_or(ShoeError::Empty)
    }

    /// Returns the number of cards left.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the shoe is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns the number of decks the shoe was built from.
    #[must_use]
    pub const fn decks(&self) -> u8 {
        self.decks
    }

    /// Returns the number of cards in a full shoe.
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.decks as usize * DECK_SIZE
    }

    /// Returns the fraction of the shoe already dealt.
    #[must_use]
    #[expect(
        clippy::cast_precision_loss,
        reason = "f64 has sufficient precision for card counts"
    )]
    pub fn penetration(&self) -> f64 {
        let capacity = self.capacity();
        let dealt = capacity.saturating_sub(self.remaining());
        dealt as f64 / capacity as f64
    }

    /// Returns the remaining cards, next draw last.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}
