//! Round engine integration tests.

use bjround::{
    Card, ConfigError, DEALER_SEAT, Event, HandOutcome, HandStatus, Phase, Rank, Round,
    RoundOptions, ShoeError, ShoePolicy, Shoe, Signal, SignalError, Suit, TurnState, transition,
};

const NOT_BUSTED: Phase = Phase::PlayerTurn(TurnState::NotBusted);

const fn card(rank: Rank) -> Card {
    Card::new(rank, Suit::Spades)
}

fn set_shoe_from_draws(round: &mut Round, ranks: &[Rank]) {
    let draws: Vec<Card> = ranks.iter().copied().map(card).collect();
    round.set_shoe(Shoe::from_draws(&draws));
}

fn round_with(players: &[&str]) -> Round {
    let options = RoundOptions::default().with_players(players.iter().copied());
    Round::new(options, 7).unwrap()
}

fn drawn_by(events: &[Event], seat: usize) -> usize {
    events
        .iter()
        .filter(|event| matches!(event, Event::CardDrawn { seat: s, .. } if *s == seat))
        .count()
}

#[test]
fn new_round_waits_for_begin() {
    let round = round_with(&["A", "B"]);
    assert_eq!(round.phase(), Phase::PlaceBets);
    assert_eq!(round.current_player(), None);
    assert_eq!(round.remaining(), 312);
    assert_eq!(round.hands().len(), 3);
    assert!(round.dealer().is_dealer());
    assert_eq!(round.dealer().name(), "Dealer");
    assert!(round.hands().iter().all(|hand| hand.is_empty()));
}

#[test]
fn config_errors() {
    assert_eq!(
        Round::new(RoundOptions::default().with_decks(0), 1).unwrap_err(),
        ConfigError::Shoe(ShoeError::NoDecks)
    );

    let no_players: [&str; 0] = [];
    assert_eq!(
        Round::new(RoundOptions::default().with_players(no_players), 1).unwrap_err(),
        ConfigError::NoPlayers
    );

    let crowd: Vec<String> = (0..26).map(|i| format!("P{i}")).collect();
    assert_eq!(
        Round::new(
            RoundOptions::default().with_decks(1).with_players(crowd),
            1
        )
        .unwrap_err(),
        ConfigError::TooManyPlayers
    );
}

#[test]
fn deal_takes_two_passes_players_first() {
    let mut round = round_with(&["A", "B"]);
    set_shoe_from_draws(
        &mut round,
        &[
            Rank::Two,   // A
            Rank::Three, // B
            Rank::Four,  // dealer
            Rank::Five,  // A
            Rank::Six,   // B
            Rank::Seven, // dealer
        ],
    );

    let events = round.send(Signal::BeginRound).unwrap();

    let dealt: Vec<(usize, Rank)> = events
        .iter()
        .filter_map(|event| match event {
            Event::CardDealt { seat, card } => Some((*seat, card.rank)),
            _ => None,
        })
        .collect();
    assert_eq!(
        dealt,
        vec![
            (1, Rank::Two),
            (2, Rank::Three),
            (0, Rank::Four),
            (1, Rank::Five),
            (2, Rank::Six),
            (0, Rank::Seven),
        ]
    );

    assert_eq!(round.phase(), NOT_BUSTED);
    assert_eq!(round.current_player(), Some(1));
    assert_eq!(round.remaining(), 0);
    assert_eq!(round.players()[0].count(), 7);
    assert_eq!(round.dealer().count(), 11);
}

#[test]
fn remaining_drops_by_one_per_draw() {
    let mut round = round_with(&["A", "B"]);
    round.send(Signal::BeginRound).unwrap();
    assert!(round.remaining() <= 312 - 6);

    while round.phase() == NOT_BUSTED {
        let before = round.remaining();
        let events = round.send(Signal::Hit).unwrap();
        let drawn = events
            .iter()
            .filter(|event| matches!(event, Event::CardDrawn { .. }))
            .count();
        assert_eq!(round.remaining(), before - drawn);
    }
}

#[test]
fn stand_advances_and_bust_clears_hand() {
    let mut round = round_with(&["A", "B", "C"]);
    set_shoe_from_draws(
        &mut round,
        &[
            Rank::Ten,  // A
            Rank::Ten,  // B
            Rank::Ten,  // C
            Rank::Ten,  // dealer
            Rank::Nine, // A
            Rank::Six,  // B
            Rank::Five, // C
            Rank::Nine, // dealer
            Rank::King, // B hit
        ],
    );

    round.send(Signal::BeginRound).unwrap();
    assert_eq!(round.current_player(), Some(1));

    round.send(Signal::Stand).unwrap();
    assert_eq!(round.current_player(), Some(2));
    assert_eq!(round.phase(), NOT_BUSTED);

    let events = round.send(Signal::Hit).unwrap();
    assert!(events.contains(&Event::HandBusted { seat: 2, count: 26 }));
    assert!(events.contains(&Event::PhaseEntered(Phase::PlayerTurn(TurnState::Bust))));

    let busted = round.hand(2).unwrap();
    assert!(busted.is_empty());
    assert_eq!(busted.status(), Some(HandStatus::Busted));
    assert_eq!(round.current_player(), Some(3));
    assert_eq!(round.phase(), NOT_BUSTED);
}

#[test]
fn last_bust_moves_to_dealer_turn() {
    let mut round = round_with(&["A", "B"]);
    set_shoe_from_draws(
        &mut round,
        &[
            Rank::Ten,   // A
            Rank::Ten,   // B
            Rank::Ten,   // dealer
            Rank::Seven, // A
            Rank::Five,  // B
            Rank::Seven, // dealer
            Rank::Queen, // B hit
        ],
    );

    round.send(Signal::BeginRound).unwrap();
    round.send(Signal::Stand).unwrap();
    let events = round.send(Signal::Hit).unwrap();

    let bust_at = events
        .iter()
        .position(|event| *event == Event::HandBusted { seat: 2, count: 25 })
        .unwrap();
    let dealer_at = events
        .iter()
        .position(|event| *event == Event::PhaseEntered(Phase::DealerTurn(TurnState::NotBusted)))
        .unwrap();
    assert!(bust_at < dealer_at);

    assert_eq!(round.phase(), Phase::EndRound);
    let result = round.last_result().unwrap();
    assert_eq!(result.hand(1).unwrap().outcome, HandOutcome::Push);
    let b = result.hand(2).unwrap();
    assert!(b.busted);
    assert_eq!(b.count, 25);
    assert_eq!(b.outcome, HandOutcome::Lose);
    assert_eq!(round.hand(2).unwrap().status(), Some(HandStatus::Lose));
}

#[test]
fn hitting_to_21_stays_automatically() {
    let mut round = round_with(&["A", "B"]);
    set_shoe_from_draws(
        &mut round,
        &[
            Rank::Ten,  // A
            Rank::Ten,  // B
            Rank::Ten,  // dealer
            Rank::Five, // A
            Rank::Two,  // B
            Rank::Ten,  // dealer
            Rank::Six,  // A hit
        ],
    );

    round.send(Signal::BeginRound).unwrap();
    let events = round.send(Signal::Hit).unwrap();

    assert!(events.contains(&Event::HandStood { seat: 1, count: 21 }));
    assert_eq!(round.current_player(), Some(2));
    assert_eq!(round.phase(), NOT_BUSTED);
}

#[test]
fn dealt_21_still_waits_for_an_action() {
    let mut round = round_with(&["A", "B"]);
    set_shoe_from_draws(
        &mut round,
        &[
            Rank::Ace,  // A
            Rank::Ten,  // B
            Rank::Ten,  // dealer
            Rank::King, // A
            Rank::Five, // B
            Rank::Ten,  // dealer
        ],
    );

    let events = round.send(Signal::BeginRound).unwrap();
    assert!(
        !events
            .iter()
            .any(|event| matches!(event, Event::HandStood { .. }))
    );
    assert_eq!(round.current_player(), Some(1));
    assert_eq!(round.phase(), NOT_BUSTED);
    assert_eq!(round.players()[0].count(), 21);

    let events = round.send(Signal::Stand).unwrap();
    assert!(events.contains(&Event::HandStood { seat: 1, count: 21 }));
    assert_eq!(round.current_player(), Some(2));
}

#[test]
fn dealer_draws_without_signals() {
    let mut round = round_with(&["A"]);
    set_shoe_from_draws(
        &mut round,
        &[
            Rank::Ten,   // A
            Rank::Two,   // dealer
            Rank::Eight, // A
            Rank::Three, // dealer
            Rank::Four,  // dealer 9
            Rank::Five,  // dealer 14
            Rank::Two,   // dealer 16
            Rank::Three, // dealer 19
        ],
    );

    round.send(Signal::BeginRound).unwrap();
    let events = round.send(Signal::Stand).unwrap();

    assert_eq!(drawn_by(&events, DEALER_SEAT), 4);
    assert!(events.contains(&Event::PhaseEntered(Phase::DealerTurn(TurnState::Stay))));
    assert_eq!(round.phase(), Phase::EndRound);
    assert_eq!(round.current_player(), None);
    assert_eq!(round.remaining(), 0);

    let result = round.last_result().unwrap();
    assert_eq!(result.dealer_count, 19);
    assert_eq!(result.hand(1).unwrap().outcome, HandOutcome::Lose);
    assert!(round.dealer().is_empty());
}

#[test]
fn dealer_stands_on_soft_17_by_default() {
    let mut round = round_with(&["A"]);
    set_shoe_from_draws(
        &mut round,
        &[Rank::Ten, Rank::Ace, Rank::Eight, Rank::Six, Rank::Three],
    );

    round.send(Signal::BeginRound).unwrap();
    let events = round.send(Signal::Stand).unwrap();

    assert_eq!(drawn_by(&events, DEALER_SEAT), 0);
    let result = round.last_result().unwrap();
    assert_eq!(result.dealer_count, 17);
    assert_eq!(result.hand(1).unwrap().outcome, HandOutcome::Win);
}

#[test]
fn dealer_hits_soft_17_when_configured() {
    let options = RoundOptions::default()
        .with_players(["A"])
        .with_stand_on_soft_17(false);
    let mut round = Round::new(options, 3).unwrap();
    set_shoe_from_draws(
        &mut round,
        &[Rank::Ten, Rank::Ace, Rank::Eight, Rank::Six, Rank::Three],
    );

    round.send(Signal::BeginRound).unwrap();
    let events = round.send(Signal::Stand).unwrap();

    assert_eq!(drawn_by(&events, DEALER_SEAT), 1);
    let result = round.last_result().unwrap();
    assert_eq!(result.dealer_count, 20);
    assert_eq!(result.hand(1).unwrap().outcome, HandOutcome::Lose);
}

#[test]
fn scoring_against_dealer_20() {
    let mut round = round_with(&["A", "B", "C"]);
    set_shoe_from_draws(
        &mut round,
        &[
            Rank::Ten,   // A
            Rank::Ten,   // B
            Rank::Ten,   // C
            Rank::King,  // dealer
            Rank::Nine,  // A
            Rank::Eight, // B
            Rank::Queen, // C
            Rank::Queen, // dealer
            Rank::Two,   // A hit to 21
        ],
    );

    round.send(Signal::BeginRound).unwrap();
    round.send(Signal::Hit).unwrap();
    round.send(Signal::Stand).unwrap();
    let events = round.send(Signal::Stand).unwrap();

    assert!(events.contains(&Event::HandSettled {
        seat: 1,
        outcome: HandOutcome::Win
    }));
    let result = round.last_result().unwrap();
    assert_eq!(result.dealer_count, 20);
    assert!(!result.dealer_bust);
    assert_eq!(result.hand(1).unwrap().outcome, HandOutcome::Win);
    assert_eq!(result.hand(2).unwrap().outcome, HandOutcome::Lose);
    assert_eq!(result.hand(3).unwrap().outcome, HandOutcome::Push);

    assert_eq!(round.hand(1).unwrap().status(), Some(HandStatus::Win));
    assert_eq!(round.hand(2).unwrap().status(), Some(HandStatus::Lose));
    assert_eq!(round.hand(3).unwrap().status(), Some(HandStatus::Push));
    assert_eq!(round.hand(2).unwrap().count(), 18);
}

#[test]
fn dealer_bust_pays_every_standing_player() {
    let mut round = round_with(&["A", "B"]);
    set_shoe_from_draws(
        &mut round,
        &[
            Rank::Ten,   // A
            Rank::Ten,   // B
            Rank::Ten,   // dealer
            Rank::Two,   // A
            Rank::Five,  // B
            Rank::Six,   // dealer
            Rank::Ten,   // B hit, bust
            Rank::Seven, // dealer 23
        ],
    );

    round.send(Signal::BeginRound).unwrap();
    round.send(Signal::Stand).unwrap();
    let events = round.send(Signal::Hit).unwrap();

    assert!(events.contains(&Event::HandBusted {
        seat: DEALER_SEAT,
        count: 23
    }));
    let result = round.last_result().unwrap();
    assert!(result.dealer_bust);
    assert_eq!(result.dealer_count, 23);
    assert_eq!(result.hand(1).unwrap().outcome, HandOutcome::Win);
    assert_eq!(result.hand(2).unwrap().outcome, HandOutcome::Lose);
}

#[test]
fn dealer_plays_out_even_when_every_player_busted() {
    let mut round = round_with(&["A"]);
    set_shoe_from_draws(
        &mut round,
        &[
            Rank::Ten,  // A
            Rank::Ten,  // dealer
            Rank::Six,  // A
            Rank::Six,  // dealer 16
            Rank::King, // A hit, bust
            Rank::Five, // dealer 21
        ],
    );

    round.send(Signal::BeginRound).unwrap();
    let events = round.send(Signal::Hit).unwrap();

    assert_eq!(drawn_by(&events, DEALER_SEAT), 1);
    assert_eq!(round.remaining(), 0);
    assert_eq!(round.phase(), Phase::EndRound);

    let result = round.last_result().unwrap();
    assert_eq!(result.dealer_count, 21);
    assert!(!result.dealer_bust);
    let a = result.hand(1).unwrap();
    assert!(a.busted);
    assert_eq!(a.count, 26);
    assert_eq!(a.outcome, HandOutcome::Lose);
}

#[test]
fn signals_in_wrong_phase_are_rejected() {
    let mut round = round_with(&["A"]);
    let before = round.snapshot();

    assert_eq!(
        round.send(Signal::Hit).unwrap_err(),
        SignalError::InvalidSignal {
            signal: Signal::Hit,
            phase: Phase::PlaceBets
        }
    );
    assert_eq!(round.snapshot(), before);

    set_shoe_from_draws(
        &mut round,
        &[Rank::Ten, Rank::Ten, Rank::Eight, Rank::Seven],
    );
    round.send(Signal::BeginRound).unwrap();
    let during_turn = round.snapshot();
    assert_eq!(
        round.send(Signal::BeginRound).unwrap_err(),
        SignalError::InvalidSignal {
            signal: Signal::BeginRound,
            phase: NOT_BUSTED
        }
    );
    assert_eq!(round.snapshot(), during_turn);

    round.send(Signal::Stand).unwrap();
    assert_eq!(round.phase(), Phase::EndRound);
    assert!(round.send(Signal::Stand).is_err());
    assert!(round.send(Signal::Hit).is_err());
}

#[test]
fn begin_round_after_end_resets_hands() {
    let mut round = round_with(&["A"]);
    set_shoe_from_draws(
        &mut round,
        &[
            Rank::Ten,
            Rank::Ten,
            Rank::Eight,
            Rank::Seven,
            // second round
            Rank::Two,
            Rank::Three,
            Rank::Four,
            Rank::Five,
        ],
    );

    round.send(Signal::BeginRound).unwrap();
    round.send(Signal::Stand).unwrap();
    assert_eq!(round.players()[0].status(), Some(HandStatus::Win));

    let events = round.send(Signal::BeginRound).unwrap();
    assert_eq!(events[0], Event::PhaseEntered(Phase::PlaceBets));
    assert_eq!(events[1], Event::PhaseEntered(Phase::DealingCards));
    assert!(round.last_result().is_none());
    assert_eq!(round.players()[0].status(), None);
    assert_eq!(round.players()[0].count(), 6);
    assert_eq!(round.dealer().count(), 8);
    assert_eq!(round.remaining(), 0);
}

#[test]
fn halt_policy_rejects_deal_without_enough_cards() {
    let mut round = round_with(&["A"]);
    set_shoe_from_draws(&mut round, &[Rank::Two, Rank::Three, Rank::Four]);

    assert_eq!(
        round.send(Signal::BeginRound).unwrap_err(),
        SignalError::ShoeExhausted
    );
    assert_eq!(round.phase(), Phase::PlaceBets);
    assert_eq!(round.remaining(), 3);
}

#[test]
fn halt_policy_rejects_hit_on_empty_shoe_then_recovers() {
    let mut round = round_with(&["A"]);
    set_shoe_from_draws(
        &mut round,
        &[Rank::Five, Rank::Ten, Rank::Six, Rank::Seven],
    );
    round.send(Signal::BeginRound).unwrap();
    let before = round.snapshot();

    assert_eq!(
        round.send(Signal::Hit).unwrap_err(),
        SignalError::ShoeExhausted
    );
    assert_eq!(round.snapshot(), before);

    set_shoe_from_draws(&mut round, &[Rank::Ten]);
    round.send(Signal::Hit).unwrap();
    assert_eq!(round.phase(), Phase::EndRound);
    assert_eq!(
        round.last_result().unwrap().hand(1).unwrap().outcome,
        HandOutcome::Win
    );
}

#[test]
fn replenish_policy_replaces_empty_shoe() {
    let options = RoundOptions::default()
        .with_decks(1)
        .with_players(["A"])
        .with_exhausted(ShoePolicy::Replenish);
    let mut round = Round::new(options, 9).unwrap();
    set_shoe_from_draws(
        &mut round,
        &[Rank::Five, Rank::Ten, Rank::Six, Rank::Seven],
    );

    round.send(Signal::BeginRound).unwrap();
    let events = round.send(Signal::Hit).unwrap();

    assert!(events.contains(&Event::ShoeReplenished { remaining: 52 }));
    assert_eq!(round.remaining(), 51);
}

#[test]
fn penetration_reshuffles_between_rounds() {
    let options = RoundOptions::default()
        .with_decks(1)
        .with_players(["A"])
        .with_penetration(0.5);
    let mut round = Round::new(options, 1).unwrap();
    round.set_shoe(Shoe::from_draws(&[card(Rank::Two); 20]));
    assert!(round.needs_reshuffle());

    let events = round.send(Signal::BeginRound).unwrap();
    assert!(events.contains(&Event::ShoeReplenished { remaining: 52 }));
    assert!(round.remaining() <= 48);
}

#[test]
fn transition_leaves_input_untouched() {
    let mut round = round_with(&["A", "B"]);
    set_shoe_from_draws(
        &mut round,
        &[Rank::Ten, Rank::Ten, Rank::Ten, Rank::Five, Rank::Five, Rank::Seven],
    );
    round.send(Signal::BeginRound).unwrap();
    let before = round.snapshot();

    let (next, events) = transition(&round, Signal::Stand).unwrap();
    assert_eq!(round.snapshot(), before);
    assert!(!events.is_empty());
    assert_ne!(next.snapshot(), before);
}

fn play_scripted(seed: u64) -> (Round, Vec<Event>) {
    let options = RoundOptions::default().with_players(["Dan", "Juan"]);
    let mut round = Round::new(options, seed).unwrap();
    let mut log = Vec::new();

    for _ in 0..10 {
        log.extend(round.send(Signal::BeginRound).unwrap());
        while round.phase() == NOT_BUSTED {
            let seat = round.current_player().unwrap();
            let signal = if round.hand(seat).unwrap().count() < 15 {
                Signal::Hit
            } else {
                Signal::Stand
            };
            log.extend(round.send(signal).unwrap());
        }
        assert_eq!(round.phase(), Phase::EndRound);
    }

    (round, log)
}

#[test]
fn replaying_signals_from_same_seed_is_identical() {
    let (first, first_log) = play_scripted(2024);
    let (second, second_log) = play_scripted(2024);

    assert_eq!(first.snapshot(), second.snapshot());
    assert_eq!(first.shoe(), second.shoe());
    assert_eq!(first.last_result(), second.last_result());
    assert_eq!(first_log, second_log);
}

#[test]
fn phase_names() {
    assert_eq!(Phase::PlaceBets.to_string(), "placeBets");
    assert_eq!(NOT_BUSTED.to_string(), "playerTurn.notBusted");
    assert_eq!(
        Phase::DealerTurn(TurnState::Bust).to_string(),
        "dealerTurn.bust"
    );
    assert!(Phase::EndRound.is_terminal());
    assert!(Phase::PlayerTurn(TurnState::Stay).is_terminal());
    assert!(!NOT_BUSTED.is_terminal());
    assert_eq!(Signal::BeginRound.to_string(), "BEGIN_ROUND");
}
