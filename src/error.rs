//! Error types for deck operations.

use thiserror::Error;

/// Errors that can occur when reading a position of the deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum IndexError {
    /// The position lies outside the deck after counting negatives from the end.
    #[error("position {position} out of range for deck of {len} cards")]
    OutOfRange {
        /// The position as requested by the caller.
        position: isize,
        /// Number of cards in the deck.
        len: usize,
    },
}

/// Errors that can occur when parsing a card, rank, or suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseCardError {
    /// Rank symbol not recognized.
    #[error("unknown rank")]
    UnknownRank,
    /// Suit name not recognized.
    #[error("unknown suit")]
    UnknownSuit,
    /// Text is not of the form `<rank> of <suit>`.
    #[error("expected `<rank> of <suit>`")]
    Malformed,
}
