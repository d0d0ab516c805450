//! Card types.
//!
//! A [`Card`] has two faces when printed: [`Debug`] gives the unambiguous
//! developer form (`Card("7", "hearts")`) and [`Display`] gives the form meant
//! for people (`7 of hearts`). Containers such as `Vec<Card>` and
//! [`FrenchDeck`](crate::FrenchDeck) print their cards with the former.
//!
//! [`Display`]: core::fmt::Display

use core::fmt;
use core::str::FromStr;

use crate::error::ParseCardError;

/// Card rank, ordered from deuce to ace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Rank {
    /// 2.
    Two,
    /// 3.
    Three,
    /// 4.
    Four,
    /// 5.
    Five,
    /// 6.
    Six,
    /// 7.
    Seven,
    /// 8.
    Eight,
    /// 9.
    Nine,
    /// 10.
    Ten,
    /// J.
    Jack,
    /// Q.
    Queen,
    /// K.
    King,
    /// A.
    Ace,
}

impl Rank {
    /// Every rank, in deck order.
    pub const ALL: [Self; 13] = [
        Self::Two,
        Self::Three,
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Seven,
        Self::Eight,
        Self::Nine,
        Self::Ten,
        Self::Jack,
        Self::Queen,
        Self::King,
        Self::Ace,
    ];

    /// Returns the printed symbol of the rank (`"2"` to `"10"`, `"J"`, `"Q"`, `"K"`, `"A"`).
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Two => "2",
            Self::Three => "3",
            Self::Four => "4",
            Self::Five => "5",
            Self::Six => "6",
            Self::Seven => "7",
            Self::Eight => "8",
            Self::Nine => "9",
            Self::Ten => "10",
            Self::Jack => "J",
            Self::Queen => "Q",
            Self::King => "K",
            Self::Ace => "A",
        }
    }

    /// Returns the zero-based position of the rank in [`Rank::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Rank {
    type Err = ParseCardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|rank| rank.symbol() == s)
            .ok_or(ParseCardError::UnknownRank)
    }
}

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    /// Spades.
    Spades,
    /// Diamonds.
    Diamonds,
    /// Clubs.
    Clubs,
    /// Hearts.
    Hearts,
}

impl Suit {
    /// Every suit, in deck order.
    pub const ALL: [Self; 4] = [Self::Spades, Self::Diamonds, Self::Clubs, Self::Hearts];

    /// Returns the lowercase name of the suit.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Spades => "spades",
            Self::Diamonds => "diamonds",
            Self::Clubs => "clubs",
            Self::Hearts => "hearts",
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Suit {
    type Err = ParseCardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|suit| suit.name() == s)
            .ok_or(ParseCardError::UnknownSuit)
    }
}

/// A playing card.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    /// The rank of the card.
    pub rank: Rank,
    /// The suit of the card.
    pub suit: Suit,
}

impl Card {
    /// Creates a new card.
    #[must_use]
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }
}

impl fmt::Debug for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Card({:?}, {:?})", self.rank.symbol(), self.suit.name())
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} of {}", self.rank, self.suit)
    }
}

impl FromStr for Card {
    type Err = ParseCardError;

    /// Parses the display form, e.g. `"7 of hearts"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (rank, suit) = s.trim().split_once(" of ").ok_or(ParseCardError::Malformed)?;
        Ok(Self::new(rank.parse()?, suit.parse()?))
    }
}

/// Number of cards per deck.
pub const DECK_SIZE: usize = Rank::ALL.len() * Suit::ALL.len();

#[cfg(test)]
mod tests {
    use alloc::format;
    use alloc::vec;

    use super::*;

    #[test]
    fn debug_and_display_differ() {
        let card = Card::new(Rank::Seven, Suit::Hearts);
        assert_eq!(format!("{card:?}"), r#"Card("7", "hearts")"#);
        assert_eq!(format!("{card}"), "7 of hearts");
    }

    #[test]
    fn containers_use_debug_form() {
        let cards = vec![Card::new(Rank::Seven, Suit::Hearts)];
        assert_eq!(format!("{cards:?}"), r#"[Card("7", "hearts")]"#);
    }

    #[test]
    fn parse_display_form() {
        assert_eq!(
            "10 of clubs".parse::<Card>(),
            Ok(Card::new(Rank::Ten, Suit::Clubs))
        );
        assert_eq!("1 of clubs".parse::<Card>(), Err(ParseCardError::UnknownRank));
        assert_eq!("A of cups".parse::<Card>(), Err(ParseCardError::UnknownSuit));
        assert_eq!("A-spades".parse::<Card>(), Err(ParseCardError::Malformed));
    }

    #[test]
    fn rank_index_follows_deck_order() {
        for (i, rank) in Rank::ALL.into_iter().enumerate() {
            assert_eq!(rank.index(), i);
        }
        assert_eq!(DECK_SIZE, 52);
    }
}
