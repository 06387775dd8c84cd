//! CLI round example.
//!
//! Run with `RUST_LOG=debug` to trace every phase change.

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use bjround::{
    Card, Event, Hand, HandStatus, Phase, Round, RoundOptions, ShoePolicy, Signal, Suit,
    TurnState,
};

fn main() {
    env_logger::init();
    println!("Blackjack round example (type 'q' to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let options = RoundOptions::default()
        .with_players(["Dan", "Juan"])
        .with_exhausted(ShoePolicy::Replenish)
        .with_penetration(0.75);

    let mut round = match Round::new(options, seed) {
        Ok(round) => round,
        Err(err) => {
            println!("Setup error: {err}");
            return;
        }
    };

    loop {
        if matches!(
            prompt_line("Press enter to begin a round: ").as_str(),
            "q" | "quit"
        ) {
            break;
        }

        if !send(&mut round, Signal::BeginRound) {
            continue;
        }

        while round.phase() == Phase::PlayerTurn(TurnState::NotBusted) {
            print_table(&round, false);

            let signal = match prompt_line("[h]it [s]tand: ").as_str() {
                "h" | "hit" => Signal::Hit,
                "s" | "stand" => Signal::Stand,
                "q" | "quit" => return,
                _ => {
                    println!("Unknown action.");
                    continue;
                }
            };
            send(&mut round, signal);
        }

        print_table(&round, true);
        if let Some(result) = round.last_result() {
            let bust = if result.dealer_bust { " (bust)" } else { "" };
            println!("Dealer finished on {}{bust}", result.dealer_count);
        }
    }
}

fn send(round: &mut Round, signal: Signal) -> bool {
    match round.send(signal) {
        Ok(events) => {
            for event in events {
                describe(round, event);
            }
            true
        }
        Err(err) => {
            println!("Rejected: {err}");
            false
        }
    }
}

fn describe(round: &Round, event: Event) {
    let name = |seat: usize| round.hand(seat).map_or("?", Hand::name).to_string();
    match event {
        Event::ShoeReplenished { remaining } => println!("New shoe: {remaining} cards."),
        Event::CardDrawn { seat, card, count } => {
            println!("{} draws {} ({count})", name(seat), format_card(&card));
        }
        Event::HandBusted { seat, count } => println!("{} busts with {count}.", name(seat)),
        Event::HandStood { seat, count } => println!("{} stays on {count}.", name(seat)),
        Event::PhaseEntered(_)
        | Event::CardDealt { .. }
        | Event::TurnPassed { .. }
        | Event::HandSettled { .. } => {}
    }
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return String::from("q");
    }
    input.trim().to_lowercase()
}

fn print_table(round: &Round, reveal: bool) {
    println!("\nShoe: {} cards remaining", round.remaining());

    let dealer = round.dealer();
    if !dealer.is_empty() {
        let view = if reveal {
            format_hand(dealer)
        } else {
            // The first dealer card stays face down.
            let mut parts = vec![String::from("??")];
            parts.extend(dealer.cards().iter().skip(1).map(format_card));
            parts.join(" ")
        };
        println!("Dealer: {view}");
    }

    for (index, hand) in round.hands().iter().enumerate().skip(1) {
        let marker = if round.current_player() == Some(index) {
            "*"
        } else {
            " "
        };
        println!(
            "{marker} {}: {} | count {} | {}",
            hand.name(),
            format_hand(hand),
            hand.count(),
            format_status(hand.status())
        );
    }
    println!();
}

const fn format_status(status: Option<HandStatus>) -> &'static str {
    match status {
        None => "playing",
        Some(HandStatus::Busted) => "busted",
        Some(HandStatus::Win) => "win",
        Some(HandStatus::Lose) => "lose",
        Some(HandStatus::Push) => "push",
    }
}

fn format_hand(hand: &Hand) -> String {
    if hand.is_empty() {
        return "(empty)".to_string();
    }
    hand.cards()
        .iter()
        .map(format_card)
        .collect::<Vec<_>>()
        .join(" ")
}

fn format_card(card: &Card) -> String {
    let color_code = match card.suit {
        Suit::Hearts | Suit::Diamonds => "31",
        Suit::Clubs => "32",
        Suit::Spades => "34",
    };
    format!("\u{1b}[{color_code}m{card}\u{1b}[0m")
}
