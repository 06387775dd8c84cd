use bjround::{
    Card, Event, HandOutcome, HandStatus, HandView, Rank, Round, RoundOptions, RoundResult,
    Signal, Snapshot, Suit,
};
use serde::Serialize;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub struct WasmRound {
    round: Round,
}

#[wasm_bindgen]
impl WasmRound {
    #[wasm_bindgen(constructor)]
    pub fn new(seed: u32, decks: u8) -> Result<WasmRound, JsValue> {
        let options = RoundOptions::default().with_decks(decks);
        let round = Round::new(options, seed as u64).map_err(js_err)?;
        Ok(Self { round })
    }

    pub fn reset(&mut self, seed: u32) -> Result<(), JsValue> {
        self.round = Round::new(self.round.options().clone(), seed as u64).map_err(js_err)?;
        Ok(())
    }

    pub fn begin_round(&mut self) -> Result<JsValue, JsValue> {
        self.send(Signal::BeginRound)
    }

    pub fn hit(&mut self) -> Result<JsValue, JsValue> {
        self.send(Signal::Hit)
    }

    pub fn stand(&mut self) -> Result<JsValue, JsValue> {
        self.send(Signal::Stand)
    }

    pub fn snapshot(&self) -> Result<JsValue, JsValue> {
        to_js_value(&JsSnapshot::from(self.round.snapshot()))
    }

    pub fn result(&self) -> Result<JsValue, JsValue> {
        let result = self.round.last_result().map(JsRoundResult::from);
        to_js_value(&result)
    }
}

impl WasmRound {
    fn send(&mut self, signal: Signal) -> Result<JsValue, JsValue> {
        let events = self.round.send(signal).map_err(js_err)?;
        let events: Vec<JsEvent> = events.into_iter().map(JsEvent::from).collect();
        to_js_value(&events)
    }
}

#[derive(Serialize)]
struct JsSnapshot {
    state: String,
    cards_remaining: u32,
    current_player: Option<u32>,
    hands: Vec<JsHand>,
}

impl From<Snapshot> for JsSnapshot {
    fn from(snapshot: Snapshot) -> Self {
        Self {
            state: snapshot.phase.to_string(),
            cards_remaining: snapshot.remaining as u32,
            current_player: snapshot.current_player.map(|seat| seat as u32),
            hands: snapshot.hands.into_iter().map(JsHand::from).collect(),
        }
    }
}

#[derive(Serialize)]
struct JsCard {
    suit: &'static str,
    rank: &'static str,
}

#[derive(Serialize)]
struct JsHand {
    name: String,
    cards: Vec<JsCard>,
    count: u8,
    status: Option<&'static str>,
    is_dealer: bool,
}

impl From<HandView> for JsHand {
    fn from(hand: HandView) -> Self {
        Self {
            name: hand.name,
            cards: hand.cards.into_iter().map(card_to_js).collect(),
            count: hand.count,
            status: hand.status.map(status_to_str),
            is_dealer: hand.is_dealer,
        }
    }
}

#[derive(Serialize)]
#[serde(tag = "type")]
enum JsEvent {
    PhaseEntered { state: String },
    ShoeReplenished { remaining: u32 },
    CardDealt { seat: u32, card: JsCard },
    CardDrawn { seat: u32, card: JsCard, count: u8 },
    TurnPassed { seat: u32 },
    HandStood { seat: u32, count: u8 },
    HandBusted { seat: u32, count: u8 },
    HandSettled { seat: u32, outcome: &'static str },
}

impl From<Event> for JsEvent {
    fn from(event: Event) -> Self {
        match event {
            Event::PhaseEntered(phase) => Self::PhaseEntered {
                state: phase.to_string(),
            },
            Event::ShoeReplenished { remaining } => Self::ShoeReplenished {
                remaining: remaining as u32,
            },
            Event::CardDealt { seat, card } => Self::CardDealt {
                seat: seat as u32,
                card: card_to_js(card),
            },
            Event::CardDrawn { seat, card, count } => Self::CardDrawn {
                seat: seat as u32,
                card: card_to_js(card),
                count,
            },
            Event::TurnPassed { seat } => Self::TurnPassed { seat: seat as u32 },
            Event::HandStood { seat, count } => Self::HandStood {
                seat: seat as u32,
                count,
            },
            Event::HandBusted { seat, count } => Self::HandBusted {
                seat: seat as u32,
                count,
            },
            Event::HandSettled { seat, outcome } => Self::HandSettled {
                seat: seat as u32,
                outcome: outcome_to_str(outcome),
            },
        }
    }
}

#[derive(Serialize)]
struct JsRoundResult {
    hands: Vec<JsHandResult>,
    dealer_count: u8,
    dealer_bust: bool,
}

impl From<&RoundResult> for JsRoundResult {
    fn from(result: &RoundResult) -> Self {
        Self {
            hands: result
                .hands
                .iter()
                .map(|hand| JsHandResult {
                    seat: hand.seat as u32,
                    outcome: outcome_to_str(hand.outcome),
                    count: hand.count,
                    busted: hand.busted,
                })
                .collect(),
            dealer_count: result.dealer_count,
            dealer_bust: result.dealer_bust,
        }
    }
}

#[derive(Serialize)]
struct JsHandResult {
    seat: u32,
    outcome: &'static str,
    count: u8,
    busted: bool,
}

fn card_to_js(card: Card) -> JsCard {
    JsCard {
        suit: suit_to_str(card.suit),
        rank: rank_to_str(card.rank),
    }
}

fn suit_to_str(suit: Suit) -> &'static str {
    match suit {
        Suit::Hearts => "Hearts",
        Suit::Diamonds => "Diamonds",
        Suit::Clubs => "Clubs",
        Suit::Spades => "Spades",
    }
}

fn rank_to_str(rank: Rank) -> &'static str {
    match rank {
        Rank::Ace => "ACE",
        Rank::Two => "TWO",
        Rank::Three => "THREE",
        Rank::Four => "FOUR",
        Rank::Five => "FIVE",
        Rank::Six => "SIX",
        Rank::Seven => "SEVEN",
        Rank::Eight => "EIGHT",
        Rank::Nine => "NINE",
        Rank::Ten => "TEN",
        Rank::Jack => "JACK",
        Rank::Queen => "QUEEN",
        Rank::King => "KING",
    }
}

fn status_to_str(status: HandStatus) -> &'static str {
    match status {
        HandStatus::Busted => "Busted",
        HandStatus::Win => "Win",
        HandStatus::Lose => "Lose",
        HandStatus::Push => "Push",
    }
}

fn outcome_to_str(outcome: HandOutcome) -> &'static str {
    status_to_str(outcome.into())
}

fn js_err<E: core::fmt::Display>(err: E) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn to_js_value<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|err| JsValue::from_str(&err.to_string()))
}
