//! Dealer auto-play and end-of-round scoring.

use alloc::vec::Vec;
use core::cmp::Ordering;

use log::{debug, info};

use crate::error::SignalError;
use crate::event::Event;
use crate::hand::{BLACKJACK, Hand, HandStatus};
use crate::result::{HandOutcome, HandResult, RoundResult};

use super::{DEALER_SEAT, FIRST_PLAYER_SEAT, Phase, Round, TurnState};

/// Dealer stands at or above this count.
const DEALER_STANDS_ON: u8 = 17;

impl Round {
    fn dealer_stands(&self, dealer: &Hand) -> bool {
        let count = dealer.count();
        count > DEALER_STANDS_ON
            || (count == DEALER_STANDS_ON && (!dealer.is_soft() || self.options.stand_on_soft_17))
    }

    /// Dealer plays their hand according to the house rules.
    ///
    /// The dealer draws until reaching 17 or higher. If `stand_on_soft_17`
    /// is false, the dealer also draws on soft 17.
    pub(super) fn dealer_turn(&mut self, events: &mut Vec<Event>) -> Result<(), SignalError> {
        self.current_player = Some(DEALER_SEAT);
        self.enter(Phase::DealerTurn(TurnState::NotBusted), events);
        events.push(Event::TurnPassed { seat: DEALER_SEAT });

        loop {
            let dealer = &self.hands[DEALER_SEAT];
            let count = dealer.count();

            if count > BLACKJACK {
                events.push(Event::HandBusted {
                    seat: DEALER_SEAT,
                    count,
                });
                self.enter(Phase::DealerTurn(TurnState::Bust), events);
                break;
            }
            if self.dealer_stands(dealer) {
                events.push(Event::HandStood {
                    seat: DEALER_SEAT,
                    count,
                });
                self.enter(Phase::DealerTurn(TurnState::Stay), events);
                break;
            }

            let card = self.draw(events)?;
            let dealer = &mut self.hands[DEALER_SEAT];
            dealer.push(card);
            let count = dealer.count();
            debug!("Dealer draws {card}, count {count}");
            events.push(Event::CardDrawn {
                seat: DEALER_SEAT,
                card,
                count,
            });
        }

        self.end_round(events);
        Ok(())
    }

    /// Scores every player hand against the dealer.
    fn end_round(&mut self, events: &mut Vec<Event>) {
        self.enter(Phase::EndRound, events);
        self.current_player = None;

        let dealer_count = self.hands[DEALER_SEAT].count();
        let dealer_bust = dealer_count > BLACKJACK;
        let mut hands = Vec::with_capacity(self.hands.len() - 1);

        for (seat, hand) in self.hands.iter_mut().enumerate().skip(FIRST_PLAYER_SEAT) {
            let busted = hand.status() == Some(HandStatus::Busted);
            let count = hand.bust_count().unwrap_or_else(|| hand.count());

            let outcome = if busted {
                HandOutcome::Lose
            } else if dealer_bust {
                HandOutcome::Win
            } else {
                match count.cmp(&dealer_count) {
                    Ordering::Greater => HandOutcome::Win,
                    Ordering::Equal => HandOutcome::Push,
                    Ordering::Less => HandOutcome::Lose,
                }
            };

            hand.set_status(outcome.into());
            events.push(Event::HandSettled { seat, outcome });
            hands.push(HandResult {
                seat,
                outcome,
                count,
                busted,
            });
        }

        self.hands[DEALER_SEAT].clear_cards();
        info!(
            "Round over, dealer {dealer_count}{}",
            if dealer_bust { " (bust)" } else { "" }
        );

        self.last_result = Some(RoundResult {
            hands,
            dealer_count,
            dealer_bust,
        });
    }
}
