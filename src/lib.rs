//! A French deck of playing cards that behaves like a native sequence, with
//! optional `no_std` support.
//!
//! [`FrenchDeck`] holds the 52 cards in a fixed order and never changes. It
//! answers the questions a sequence answers: its length, the card at a
//! position (negative positions count from the end), a contiguous slice,
//! forward and reverse iteration, a sorted copy, and a random pick.
//!
//! [`Card`] prints two ways: `{:?}` gives `Card("7", "hearts")` and `{}` gives
//! `7 of hearts`.
//!
//! # Example
//!
//! ```
//! use frenchdeck::{FrenchDeck, spades_high};
//!
//! let deck = FrenchDeck::new();
//! assert_eq!(deck.len(), 52);
//! assert_eq!(format!("{:?}", &deck[..1]), r#"[Card("2", "spades")]"#);
//!
//! let sorted = deck.sorted_by_key(spades_high);
//! assert_eq!(sorted.last().map(ToString::to_string).as_deref(), Some("A of spades"));
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod dealer;
pub mod deck;
pub mod error;
pub mod options;
pub mod ranking;
mod sync;
pub mod vector;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use dealer::Dealer;
pub use deck::FrenchDeck;
pub use error::{IndexError, ParseCardError};
pub use options::{DealOrder, DeckOptions};
pub use ranking::{SuitRanking, spades_high};
pub use vector::Vector;
