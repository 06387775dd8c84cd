//! Round configuration options.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use crate::shoe::DEFAULT_DECKS;

/// What the engine does when the shoe runs dry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ShoePolicy {
    /// Reject the signal that needed a card and leave the round unchanged.
    #[default]
    Halt,
    /// Replace the empty shoe with a freshly shuffled one and keep dealing.
    Replenish,
}

/// Configuration options for a round.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use bjround::{RoundOptions, ShoePolicy};
///
/// let options = RoundOptions::default()
///     .with_decks(2)
///     .with_players(["Dan", "Juan"])
///     .with_exhausted(ShoePolicy::Replenish);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct RoundOptions {
    /// Number of decks in the shoe.
    pub decks: u8,
    /// Player seat names, in turn order.
    pub players: Vec<String>,
    /// Name shown for the dealer's hand.
    pub dealer_name: String,
    /// Whether the dealer stands on soft 17.
    pub stand_on_soft_17: bool,
    /// Behavior when a draw finds the shoe empty.
    pub exhausted: ShoePolicy,
    /// Fraction of the shoe dealt before it is replaced at the start of a
    /// round. 0 to keep the same shoe until it runs out.
    pub penetration: f64,
}

impl Default for RoundOptions {
    fn default() -> Self {
        Self {
            decks: DEFAULT_DECKS,
            players: alloc::vec![String::from("Player 1"), String::from("Player 2")],
            dealer_name: String::from("Dealer"),
            stand_on_soft_17: true,
            exhausted: ShoePolicy::Halt,
            penetration: 0.0,
        }
    }
}

impl RoundOptions {
    /// Sets the number of decks.
    ///
    /// # Example
    ///
    /// ```
    /// use bjround::RoundOptions;
    ///
    /// let options = RoundOptions::default().with_decks(8);
    /// assert_eq!(options.decks, 8);
    /// ```
    #[must_use]
    pub const fn with_decks(mut self, decks: u8) -> Self {
        self.decks = decks;
        self
    }

    /// Sets the player seats.
    ///
    /// # Example
    ///
    /// ```
    /// use bjround::RoundOptions;
    ///
    /// let options = RoundOptions::default().with_players(["A", "B", "C"]);
    /// assert_eq!(options.players.len(), 3);
    /// ```
    #[must_use]
    pub fn with_players<I, S>(mut self, players: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.players = players.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the dealer's display name.
    #[must_use]
    pub fn with_dealer_name(mut self, name: impl Into<String>) -> Self {
        self.dealer_name = name.into();
        self
    }

    /// Sets whether the dealer stands on soft 17.
    ///
    /// # Example
    ///
    /// ```
    /// use bjround::RoundOptions;
    ///
    /// let options = RoundOptions::default().with_stand_on_soft_17(false);
    /// assert!(!options.stand_on_soft_17);
    /// ```
    #[must_use]
    pub const fn with_stand_on_soft_17(mut self, stand: bool) -> Self {
        self.stand_on_soft_17 = stand;
        self
    }

    /// Sets the empty-shoe policy.
    #[must_use]
    pub const fn with_exhausted(mut self, policy: ShoePolicy) -> Self {
        self.exhausted = policy;
        self
    }

    /// Sets the reshuffle penetration.
    ///
    /// # Example
    ///
    /// ```
    /// use bjround::RoundOptions;
    ///
    /// let options = RoundOptions::default().with_penetration(0.75);
    /// assert_eq!(options.penetration, 0.75);
    /// ```
    #[must_use]
    pub const fn with_penetration(mut self, penetration: f64) -> Self {
        self.penetration = penetration;
        self
    }
}
