//! Deck configuration options.

/// Order in which the cross product of suits and ranks is laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[non_exhaustive]
pub enum DealOrder {
    /// Suits outer, ranks inner: all spades, then all diamonds, and so on.
    #[default]
    SuitMajor,
    /// Ranks outer, suits inner: every 2, then every 3, and so on.
    RankMajor,
}

/// Configuration options for building a deck.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use frenchdeck::{DealOrder, DeckOptions};
///
/// let options = DeckOptions::default().with_order(DealOrder::RankMajor);
/// assert_eq!(options.order, DealOrder::RankMajor);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DeckOptions {
    /// Layout of the cards.
    pub order: DealOrder,
}

impl DeckOptions {
    /// Sets the layout of the cards.
    #[must_use]
    pub const fn with_order(mut self, order: DealOrder) -> Self {
        self.order = order;
        self
    }
}
