//! A deck paired with its own seeded random source.

use alloc::vec::Vec;

use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, trace};

use crate::card::Card;
use crate::deck::FrenchDeck;
use crate::options::DeckOptions;
use crate::sync::Shared;

/// Owns a deck and a deterministic random number generator.
///
/// Random picks go through `&self`; the generator sits behind a mutex so a
/// `Dealer` can be shared between threads. The deck itself is never reordered.
///
/// # Example
///
/// ```
/// use frenchdeck::{Dealer, DeckOptions};
///
/// let dealer = Dealer::new(DeckOptions::default(), 42);
/// let card = dealer.choice();
/// assert!(dealer.deck().contains(&card));
/// ```
pub struct Dealer {
    deck: FrenchDeck,
    rng: Shared<ChaCha8Rng>,
}

impl Dealer {
    /// Creates a dealer with the given seed.
    #[must_use]
    pub fn new(options: DeckOptions, seed: u64) -> Self {
        debug!(seed, "seeding dealer");

        Self {
            deck: FrenchDeck::with_options(options),
            rng: Shared::new(ChaCha8Rng::seed_from_u64(seed)),
        }
    }

    /// Returns the deck.
    #[must_use]
    pub const fn deck(&self) -> &FrenchDeck {
        &self.deck
    }

    /// Returns a card chosen uniformly at random.
    pub fn choice(&self) -> Card {
        self.rng.with(|rng| *self.deck.choose(rng))
    }

    /// Returns the cards in a random order.
    pub fn shuffled(&self) -> Vec<Card> {
        let mut cards = self.deck.as_slice().to_vec();
        self.rng.with(|rng| cards.shuffle(rng));
        trace!(len = cards.len(), "shuffled copy of deck");
        cards
    }
}

impl core::fmt::Debug for Dealer {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Dealer").field("deck", &self.deck).finish_non_exhaustive()
    }
}
