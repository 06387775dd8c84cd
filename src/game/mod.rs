//! Round engine and state management.

use alloc::vec::Vec;
use core::iter;

use log::{debug, warn};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::card::Card;
use crate::error::{ConfigError, ShoeError, SignalError};
use crate::event::Event;
use crate::hand::Hand;
use crate::options::{RoundOptions, ShoePolicy};
use crate::result::RoundResult;
use crate::shoe::Shoe;
use crate::snapshot::{HandView, Snapshot};

mod actions;
mod deal;
mod dealer;
pub mod state;

pub use state::{Phase, Signal, TurnState};

/// Seat of the dealer's hand in [`Round::hands`].
pub const DEALER_SEAT: usize = 0;

/// Seat of the first player, who acts first.
pub const FIRST_PLAYER_SEAT: usize = 1;

/// A single blackjack table running one round at a time.
///
/// The round owns the shoe, every hand and the random number generator.
/// It only changes in response to a [`Signal`], handled to completion by
/// [`Round::send`] or the pure [`transition`] function.
#[derive(Debug, Clone)]
pub struct Round {
    /// Round options.
    options: RoundOptions,
    /// Cards in the shoe.
    shoe: Shoe,
    /// Dealer first, then the players in turn order.
    hands: Vec<Hand>,
    /// Current phase.
    phase: Phase,
    /// Seat whose turn it is, only during turn phases.
    current_player: Option<usize>,
    /// Result of the last scored round.
    last_result: Option<RoundResult>,
    /// Random number generator.
    rng: ChaCha8Rng,
}

/// Applies `signal` to a copy of `round`.
///
/// Returns the new round together with the effects the signal caused. The
/// input round is never modified, so a rejected signal has no effect.
///
/// # Errors
///
/// Returns [`SignalError::InvalidSignal`] if the phase does not accept the
/// signal, or [`SignalError::ShoeExhausted`] if a required draw found the
/// shoe empty under [`ShoePolicy::Halt`].
pub fn transition(round: &Round, signal: Signal) -> Result<(Round, Vec<Event>), SignalError> {
    let mut next = round.clone();
    let mut events = Vec::new();
    next.dispatch(signal, &mut events)?;
    Ok((next, events))
}

impl Round {
    /// Loads a round: builds the shoe and hands, then waits in
    /// [`Phase::PlaceBets`].
    ///
    /// # Example
    ///
    /// ```
    /// use bjround::{Phase, Round, RoundOptions, Signal};
    ///
    /// let mut round = Round::new(RoundOptions::default(), 42).unwrap();
    /// assert_eq!(round.phase(), Phase::PlaceBets);
    ///
    /// round.send(Signal::BeginRound).unwrap();
    /// assert!(round.remaining() <= 312 - 6);
    /// assert_ne!(round.phase(), Phase::PlaceBets);
    /// ```
    ///
    /// # Errors
    ///
    /// Returns an error if the options ask for zero decks, no players, or
    /// more players than one shoe can deal to.
    pub fn new(options: RoundOptions, seed: u64) -> Result<Self, ConfigError> {
        if options.players.is_empty() {
            return Err(ConfigError::NoPlayers);
        }

        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let shoe = Shoe::new(options.decks, &mut rng)?;

        if (options.players.len() + 1) * 2 > shoe.capacity() {
            return Err(ConfigError::TooManyPlayers);
        }

        let hands: Vec<Hand> = iter::once(Hand::dealer(&options.dealer_name))
            .chain(options.players.iter().map(Hand::player))
            .collect();

        let mut round = Self {
            options,
            shoe,
            hands,
            phase: Phase::Loading,
            current_player: None,
            last_result: None,
            rng,
        };
        debug!(
            "Loaded round with {} decks and {} players",
            round.shoe.decks(),
            round.hands.len() - 1
        );

        round.enter(Phase::PlaceBets, &mut Vec::new());
        Ok(round)
    }

    /// Handles one signal to completion and commits the new state.
    ///
    /// Returns the effects of the signal in the order they happened.
    ///
    /// # Errors
    ///
    /// See [`transition`]. The round is unchanged when an error is returned.
    pub fn send(&mut self, signal: Signal) -> Result<Vec<Event>, SignalError> {
        let (next, events) = transition(self, signal).inspect_err(|err| {
            warn!("Rejected {signal} during {}: {err}", self.phase);
        })?;
        *self = next;
        Ok(events)
    }

    fn dispatch(&mut self, signal: Signal, events: &mut Vec<Event>) -> Result<(), SignalError> {
        match (self.phase, signal) {
            (Phase::PlaceBets, Signal::BeginRound) => self.begin_round(events),
            (Phase::EndRound, Signal::BeginRound) => {
                self.enter(Phase::PlaceBets, events);
                self.begin_round(events)
            }
            (Phase::PlayerTurn(TurnState::NotBusted), Signal::Hit) => self.hit(signal, events),
            (Phase::PlayerTurn(TurnState::NotBusted), Signal::Stand) => {
                self.stand(signal, events)
            }
            (phase, signal) => Err(SignalError::InvalidSignal { signal, phase }),
        }
    }

    fn enter(&mut self, phase: Phase, events: &mut Vec<Event>) {
        debug!("{} -> {phase}", self.phase);
        self.phase = phase;
        events.push(Event::PhaseEntered(phase));
    }

    /// Draws a card, replacing an empty shoe when the policy allows it.
    fn draw(&mut self, events: &mut Vec<Event>) -> Result<Card, SignalError> {
        match self.shoe.draw() {
            Ok(card) => Ok(card),
            Err(ShoeError::Empty) if self.options.exhausted == ShoePolicy::Replenish => {
                self.replenish(events)?;
                self.shoe.draw().map_err(|_| SignalError::ShoeExhausted)
            }
            Err(_) => Err(SignalError::ShoeExhausted),
        }
    }

    fn replenish(&mut self, events: &mut Vec<Event>) -> Result<(), SignalError> {
        self.reshuffle().map_err(|_| SignalError::ShoeExhausted)?;
        warn!("Shoe replenished with {} cards", self.shoe.remaining());
        events.push(Event::ShoeReplenished {
            remaining: self.shoe.remaining(),
        });
        Ok(())
    }

    /// Replaces the shoe with a freshly shuffled one of the configured size.
    ///
    /// # Errors
    ///
    /// Returns [`ShoeError::NoDecks`] if the configured deck count is zero,
    /// which [`Round::new`] already rules out.
    pub fn reshuffle(&mut self) -> Result<(), ShoeError> {
        self.shoe = Shoe::new(self.options.decks, &mut self.rng)?;
        Ok(())
    }

    /// Returns whether the shoe has been dealt past the configured
    /// penetration. Always `false` when penetration is 0.
    #[must_use]
    pub fn needs_reshuffle(&self) -> bool {
        self.options.penetration > 0.0 && self.shoe.penetration() >= self.options.penetration
    }

    /// Installs a specific shoe, e.g. a stacked one for replays.
    pub fn set_shoe(&mut self, shoe: Shoe) {
        self.shoe = shoe;
    }

    /// Returns the current phase.
    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// Returns the seat whose turn it is.
    ///
    /// Returns `None` outside player and dealer turns.
    #[must_use]
    pub const fn current_player(&self) -> Option<usize> {
        self.current_player
    }

    /// Returns every hand, dealer first.
    #[must_use]
    pub fn hands(&self) -> &[Hand] {
        &self.hands
    }

    /// Returns the hand at `seat`.
    #[must_use]
    pub fn hand(&self, seat: usize) -> Option<&Hand> {
        self.hands.get(seat)
    }

    /// Returns the dealer's hand.
    #[must_use]
    pub fn dealer(&self) -> &Hand {
        &self.hands[DEALER_SEAT]
    }

    /// Returns the player hands in turn order.
    #[must_use]
    pub fn players(&self) -> &[Hand] {
        &self.hands[FIRST_PLAYER_SEAT..]
    }

    /// Returns the shoe.
    #[must_use]
    pub const fn shoe(&self) -> &Shoe {
        &self.shoe
    }

    /// Returns the number of cards remaining in the shoe.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.shoe.remaining()
    }

    /// Returns the round options.
    #[must_use]
    pub const fn options(&self) -> &RoundOptions {
        &self.options
    }

    /// Returns the result of the last scored round.
    ///
    /// Cleared when the next round begins.
    #[must_use]
    pub const fn last_result(&self) -> Option<&RoundResult> {
        self.last_result.as_ref()
    }

    /// Returns a read-only view of the round for the display layer.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            phase: self.phase,
            remaining: self.shoe.remaining(),
            current_player: self.current_player,
            hands: self.hands.iter().map(HandView::from).collect(),
        }
    }
}
