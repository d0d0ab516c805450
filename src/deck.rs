//! The fixed, ordered deck.

use alloc::vec::Vec;
use core::cmp::Ordering;
use core::fmt;
use core::iter::Rev;
use core::ops::{Bound, Index, RangeBounds};
use core::slice::{self, SliceIndex};

use rand::Rng;
use tracing::{debug, trace};

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::error::IndexError;
use crate::options::{DealOrder, DeckOptions};

/// A complete French deck of 52 cards.
///
/// The deck is built once and never changes: its length is always
/// [`DECK_SIZE`] and the card at a given position is the same for the whole
/// lifetime of the value. Every operation is a read.
///
/// Besides the named operations, the deck supports the usual sequence sugar:
/// `deck[0]`, `deck[..3]`, `for card in &deck` and `deck.iter().rev()`.
///
/// # Example
///
/// ```
/// use frenchdeck::{Card, FrenchDeck, Rank, Suit};
///
/// let deck = FrenchDeck::new();
/// assert_eq!(deck.len(), 52);
/// assert_eq!(deck[0], Card::new(Rank::Two, Suit::Spades));
/// assert_eq!(deck.get(-1), Ok(&Card::new(Rank::Ace, Suit::Hearts)));
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct FrenchDeck {
    cards: [Card; DECK_SIZE],
    order: DealOrder,
}

impl FrenchDeck {
    /// Creates a deck laid out suit by suit, ranks ascending within each suit.
    #[must_use]
    pub fn new() -> Self {
        Self::with_options(DeckOptions::default())
    }

    /// Creates a deck with the given options.
    #[must_use]
    pub fn with_options(options: DeckOptions) -> Self {
        let ranks = Rank::ALL.len();
        let suits = Suit::ALL.len();
        let cards = core::array::from_fn(|i| match options.order {
            DealOrder::SuitMajor => Card::new(Rank::ALL[i % ranks], Suit::ALL[i / ranks]),
            DealOrder::RankMajor => Card::new(Rank::ALL[i / suits], Suit::ALL[i % suits]),
        });

        debug!(order = ?options.order, len = DECK_SIZE, "built deck");

        Self {
            cards,
            order: options.order,
        }
    }

    /// Returns the layout the deck was built with.
    #[must_use]
    pub const fn order(&self) -> DealOrder {
        self.order
    }

    /// Returns the number of cards, which is always [`DECK_SIZE`].
    #[must_use]
    pub const fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck has no cards. A built deck is never empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns the card at `position`.
    ///
    /// Negative positions count from the end, so `-1` is the last card.
    ///
    /// # Errors
    ///
    /// Returns [`IndexError::OutOfRange`] if the position, after counting
    /// negatives from the end, is not in `0..len`.
    pub fn get(&self, position: isize) -> Result<&Card, IndexError> {
        self.normalize(position)
            .and_then(|i| self.cards.get(i))
            .ok_or(IndexError::OutOfRange {
                position,
                len: self.len(),
            })
    }

    /// Returns a contiguous view of the deck.
    ///
    /// Bounds may be negative to count from the end and are clamped to the
    /// deck, so this never fails: a range that selects nothing gives an
    /// empty slice.
    ///
    /// ```
    /// use frenchdeck::FrenchDeck;
    ///
    /// let deck = FrenchDeck::new();
    /// assert_eq!(deck.slice(0..3), &deck[..3]);
    /// assert_eq!(deck.slice(-2..).len(), 2);
    /// assert!(deck.slice(40..10).is_empty());
    /// ```
    #[must_use]
    pub fn slice<R: RangeBounds<isize>>(&self, range: R) -> &[Card] {
        let start = match range.start_bound() {
            Bound::Included(&start) => self.clamp(self.offset(start)),
            Bound::Excluded(&start) => self.clamp(self.offset(start).saturating_add(1)),
            Bound::Unbounded => 0,
        };
        let end = match range.end_bound() {
            Bound::Included(&end) => self.clamp(self.offset(end).saturating_add(1)),
            Bound::Excluded(&end) => self.clamp(self.offset(end)),
            Bound::Unbounded => self.len(),
        };

        self.cards.get(start..end).unwrap_or_default()
    }

    /// Returns the cards as a slice.
    #[must_use]
    pub const fn as_slice(&self) -> &[Card] {
        &self.cards
    }

    /// Returns an iterator over the cards in deck order.
    pub fn iter(&self) -> slice::Iter<'_, Card> {
        self.cards.iter()
    }

    /// Returns an iterator over the cards from last to first.
    pub fn reversed(&self) -> Rev<slice::Iter<'_, Card>> {
        self.cards.iter().rev()
    }

    /// Returns whether the deck holds `card`.
    #[must_use]
    pub fn contains(&self, card: &Card) -> bool {
        self.cards.contains(card)
    }

    /// Returns the position of `card` in the deck.
    #[must_use]
    pub fn position(&self, card: &Card) -> Option<usize> {
        self.cards.iter().position(|c| c == card)
    }

    /// Returns the cards ordered by `key`, leaving the deck untouched.
    ///
    /// The sort is stable: cards with equal keys keep their deck order.
    ///
    /// ```
    /// use frenchdeck::{FrenchDeck, spades_high};
    ///
    /// let deck = FrenchDeck::new();
    /// let sorted = deck.sorted_by_key(spades_high);
    /// assert_eq!(sorted[0].to_string(), "2 of clubs");
    /// assert_eq!(sorted[51].to_string(), "A of spades");
    /// ```
    #[must_use]
    pub fn sorted_by_key<K, F>(&self, key: F) -> Vec<Card>
    where
        K: Ord,
        F: FnMut(&Card) -> K,
    {
        let mut cards = self.cards.to_vec();
        cards.sort_by_key(key);
        cards
    }

    /// Returns the cards ordered by `compare`, leaving the deck untouched.
    ///
    /// The sort is stable.
    #[must_use]
    pub fn sorted_by<F>(&self, compare: F) -> Vec<Card>
    where
        F: FnMut(&Card, &Card) -> Ordering,
    {
        let mut cards = self.cards.to_vec();
        cards.sort_by(compare);
        cards
    }

    /// Returns a card chosen uniformly at random.
    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> &Card {
        let i = rng.random_range(0..self.len());
        trace!(position = i, "chose card");
        &self.cards[i]
    }

    const fn normalize(&self, position: isize) -> Option<usize> {
        if position < 0 {
            self.len().checked_sub(position.unsigned_abs())
        } else {
            Some(position.unsigned_abs())
        }
    }

    /// Turns a negative bound into an offset from the start; the result may
    /// still lie outside the deck.
    fn offset(&self, bound: isize) -> isize {
        if bound < 0 {
            isize::try_from(self.len()).map_or(bound, |len| len.saturating_add(bound))
        } else {
            bound
        }
    }

    fn clamp(&self, offset: isize) -> usize {
        if offset < 0 {
            0
        } else {
            offset.unsigned_abs().min(self.len())
        }
    }
}

impl Default for FrenchDeck {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for FrenchDeck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("FrenchDeck").field(&self.cards.as_slice()).finish()
    }
}

impl<I: SliceIndex<[Card]>> Index<I> for FrenchDeck {
    type Output = I::Output;

    fn index(&self, index: I) -> &Self::Output {
        &self.cards[index]
    }
}

impl AsRef<[Card]> for FrenchDeck {
    fn as_ref(&self) -> &[Card] {
        &self.cards
    }
}

impl<'a> IntoIterator for &'a FrenchDeck {
    type Item = &'a Card;
    type IntoIter = slice::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}

impl IntoIterator for FrenchDeck {
    type Item = Card;
    type IntoIter = core::array::IntoIter<Card, DECK_SIZE>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use alloc::format;

    use super::*;

    #[test]
    fn normalize_counts_from_end() {
        let deck = FrenchDeck::new();
        assert_eq!(deck.normalize(0), Some(0));
        assert_eq!(deck.normalize(-1), Some(51));
        assert_eq!(deck.normalize(-52), Some(0));
        assert_eq!(deck.normalize(-53), None);
    }

    #[test]
    fn offset_then_clamp() {
        let deck = FrenchDeck::new();
        assert_eq!(deck.offset(-3), 49);
        assert_eq!(deck.offset(-100), -48);
        assert_eq!(deck.offset(isize::MIN), isize::MIN + 52);
        assert_eq!(deck.clamp(deck.offset(100)), 52);
        assert_eq!(deck.clamp(deck.offset(-100)), 0);
        assert_eq!(deck.clamp(deck.offset(-53) + 1), 0);
    }

    #[test]
    fn debug_lists_cards_with_their_debug_form() {
        let deck = FrenchDeck::new();
        let text = format!("{deck:?}");
        assert!(text.starts_with(r#"FrenchDeck([Card("2", "spades"), Card("3", "spades")"#));
        assert!(text.ends_with(r#"Card("A", "hearts")])"#));
    }

    #[test]
    fn rank_major_layout() {
        let deck = FrenchDeck::with_options(DeckOptions::default().with_order(DealOrder::RankMajor));
        assert_eq!(deck.order(), DealOrder::RankMajor);
        assert_eq!(deck[0], Card::new(Rank::Two, Suit::Spades));
        assert_eq!(deck[1], Card::new(Rank::Two, Suit::Diamonds));
        assert_eq!(deck[51], Card::new(Rank::Ace, Suit::Hearts));
    }
}
