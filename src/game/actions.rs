//! Player actions and turn hand-off.

use alloc::vec::Vec;

use log::debug;

use crate::error::SignalError;
use crate::event::Event;
use crate::hand::BLACKJACK;

use super::{Phase, Round, Signal, TurnState};

impl Round {
    fn acting_seat(&self, signal: Signal) -> Result<usize, SignalError> {
        self.current_player.ok_or(SignalError::InvalidSignal {
            signal,
            phase: self.phase,
        })
    }

    /// Starts the turn of the current seat and waits for its first action.
    pub(super) fn start_player_turn(&mut self, events: &mut Vec<Event>) -> Result<(), SignalError> {
        let seat = self.acting_seat(Signal::BeginRound)?;
        self.enter(Phase::PlayerTurn(TurnState::NotBusted), events);
        events.push(Event::TurnPassed { seat });
        Ok(())
    }

    /// Player action: Hit (draw a card).
    ///
    /// Guards run in order after the draw: over 21 busts, exactly 21 stays,
    /// anything else keeps the turn open.
    pub(super) fn hit(&mut self, signal: Signal, events: &mut Vec<Event>) -> Result<(), SignalError> {
        let seat = self.acting_seat(signal)?;
        let card = self.draw(events)?;

        let hand = &mut self.hands[seat];
        hand.push(card);
        let count = hand.count();
        debug!("{} hits {card}, count {count}", hand.name());
        events.push(Event::CardDrawn { seat, card, count });

        if count > BLACKJACK {
            self.bust(seat, events)
        } else if count == BLACKJACK {
            self.stay(seat, events)
        } else {
            Ok(())
        }
    }

    /// Player action: Stand (keep current hand).
    pub(super) fn stand(&mut self, signal: Signal, events: &mut Vec<Event>) -> Result<(), SignalError> {
        let seat = self.acting_seat(signal)?;
        self.stay(seat, events)
    }

    fn stay(&mut self, seat: usize, events: &mut Vec<Event>) -> Result<(), SignalError> {
        let count = self.hands[seat].count();
        events.push(Event::HandStood { seat, count });
        self.enter(Phase::PlayerTurn(TurnState::Stay), events);
        self.finish_player_turn(seat, events)
    }

    fn bust(&mut self, seat: usize, events: &mut Vec<Event>) -> Result<(), SignalError> {
        let count = self.hands[seat].bust();
        events.push(Event::HandBusted { seat, count });
        self.enter(Phase::PlayerTurn(TurnState::Bust), events);
        self.finish_player_turn(seat, events)
    }

    /// Passes the turn to the next player, or to the dealer after the last.
    fn finish_player_turn(&mut self, seat: usize, events: &mut Vec<Event>) -> Result<(), SignalError> {
        let next = seat + 1;
        if next < self.hands.len() {
            self.current_player = Some(next);
            self.start_player_turn(events)
        } else {
            self.dealer_turn(events)
        }
    }
}
