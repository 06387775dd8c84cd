//! Opening deal for `BEGIN_ROUND`.

use alloc::vec::Vec;
use core::iter;

use log::{debug, info};

use crate::error::SignalError;
use crate::event::Event;
use crate::options::ShoePolicy;

use super::{DEALER_SEAT, FIRST_PLAYER_SEAT, Phase, Round};

impl Round {
    /// Clears the table and deals two cards to every hand.
    ///
    /// Cards go out in two passes, players in seat order and then the
    /// dealer, one card per hand per pass.
    pub(super) fn begin_round(&mut self, events: &mut Vec<Event>) -> Result<(), SignalError> {
        for hand in &mut self.hands {
            hand.reset();
        }
        self.current_player = None;
        self.last_result = None;

        if self.needs_reshuffle() {
            self.replenish(events)?;
        }

        let cards_needed = self.hands.len() * 2;
        if self.options.exhausted == ShoePolicy::Halt && self.shoe.remaining() < cards_needed {
            return Err(SignalError::ShoeExhausted);
        }

        info!(
            "Dealing to {} players, {} cards in the shoe",
            self.hands.len() - 1,
            self.shoe.remaining()
        );
        self.enter(Phase::DealingCards, events);

        let seats = self.hands.len();
        for _ in 0..2 {
            for seat in (FIRST_PLAYER_SEAT..seats).chain(iter::once(DEALER_SEAT)) {
                let card = self.draw(events)?;
                self.hands[seat].push(card);
                debug!("Dealt {card} to {}", self.hands[seat].name());
                events.push(Event::CardDealt { seat, card });
            }
        }

        self.current_player = Some(FIRST_PLAYER_SEAT);
        self.start_player_turn(events)
    }
}
