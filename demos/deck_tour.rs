//! Tour of the deck: every sequence operation, printed.
//!
//! Run with `RUST_LOG=frenchdeck=trace` to see the library's events.

use std::time::{SystemTime, UNIX_EPOCH};

use frenchdeck::{Card, Dealer, DeckOptions, Rank, Suit, Vector, spades_high};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "frenchdeck=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let dealer = Dealer::new(DeckOptions::default(), seed);
    let deck = dealer.deck();

    section("length");
    println!("{}", deck.len());

    section("random card");
    println!("{:?}", dealer.choice());

    section("first three");
    println!("{:?}", deck.slice(..3));

    section("every card");
    for card in deck {
        println!("{card:?}");
    }

    section("every card, reversed");
    for card in deck.reversed() {
        println!("{card:?}");
    }

    section("spades high");
    for card in deck.sorted_by_key(spades_high) {
        println!("{card:?}");
    }

    section("representations");
    let seven = Card::new(Rank::Seven, Suit::Hearts);
    println!("debug:   {seven:?}");
    println!("display: {seven}");
    println!("in a list: {:?}", vec![seven]);

    section("out of range");
    match deck.get(52) {
        Ok(card) => println!("{card}"),
        Err(err) => println!("{err}"),
    }

    section("numbers");
    let v = Vector::new(3.0, 4.0);
    println!("{v:?} + {:?} = {:?}", Vector::new(1.0, 1.0), v + Vector::new(1.0, 1.0));
    println!("abs({v:?}) = {}", v.abs());
    println!("{v:?} * 3 = {:?}", v * 3.0);
    println!("zero? {}", Vector::default().is_zero());
}

fn section(title: &str) {
    println!("\n## {title}");
}
