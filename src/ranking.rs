//! Sort keys for cards.

use crate::card::{Card, Suit};

/// Relative value of each suit, used to break ties between cards of the
/// same rank.
///
/// The default is "spades high": spades 3, hearts 2, diamonds 1, clubs 0.
///
/// ```
/// use frenchdeck::{Card, Rank, Suit, SuitRanking};
///
/// let bridge = SuitRanking::default()
///     .with_value(Suit::Hearts, 3)
///     .with_value(Suit::Spades, 2);
/// let ace_of_hearts = Card::new(Rank::Ace, Suit::Hearts);
/// let ace_of_spades = Card::new(Rank::Ace, Suit::Spades);
/// assert!(bridge.key(&ace_of_hearts) > bridge.key(&ace_of_spades));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SuitRanking {
    spades: usize,
    diamonds: usize,
    clubs: usize,
    hearts: usize,
}

impl Default for SuitRanking {
    fn default() -> Self {
        Self {
            spades: 3,
            hearts: 2,
            diamonds: 1,
            clubs: 0,
        }
    }
}

impl SuitRanking {
    /// Sets the value of `suit`.
    #[must_use]
    pub const fn with_value(mut self, suit: Suit, value: usize) -> Self {
        match suit {
            Suit::Spades => self.spades = value,
            Suit::Diamonds => self.diamonds = value,
            Suit::Clubs => self.clubs = value,
            Suit::Hearts => self.hearts = value,
        }
        self
    }

    /// Returns the value of `suit`.
    #[must_use]
    pub const fn value(&self, suit: Suit) -> usize {
        match suit {
            Suit::Spades => self.spades,
            Suit::Diamonds => self.diamonds,
            Suit::Clubs => self.clubs,
            Suit::Hearts => self.hearts,
        }
    }

    /// Sort key for `card`: rank first, then suit value.
    ///
    /// Assumes suit values are below the number of suits; larger values let a
    /// suit outrank the next rank up.
    #[must_use]
    pub const fn key(&self, card: &Card) -> usize {
        card.rank.index() * Suit::ALL.len() + self.value(card.suit)
    }
}

/// Sort key ordering cards by rank, then by suit with spades highest.
#[must_use]
pub fn spades_high(card: &Card) -> usize {
    SuitRanking::default().key(card)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::Rank;

    #[test]
    fn default_table() {
        let ranking = SuitRanking::default();
        assert_eq!(ranking.value(Suit::Spades), 3);
        assert_eq!(ranking.value(Suit::Hearts), 2);
        assert_eq!(ranking.value(Suit::Diamonds), 1);
        assert_eq!(ranking.value(Suit::Clubs), 0);
    }

    #[test]
    fn spades_high_keys() {
        assert_eq!(spades_high(&Card::new(Rank::Two, Suit::Clubs)), 0);
        assert_eq!(spades_high(&Card::new(Rank::Two, Suit::Spades)), 3);
        assert_eq!(spades_high(&Card::new(Rank::Three, Suit::Clubs)), 4);
        assert_eq!(spades_high(&Card::new(Rank::Ace, Suit::Spades)), 51);
    }
}
