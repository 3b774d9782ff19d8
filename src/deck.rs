//! The 52-card deck, its shuffle, and the two-ended draw cursor.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, DECK_SIZE};
use crate::error::{DeckError, DrawError};

/// Shuffles `items` in place with a forward Fisher–Yates pass.
///
/// For each index `i` except the last, a uniform index `j` in `i..len` is
/// picked and the two elements are swapped. The last element is fixed by
/// construction.
pub fn fisher_yates<T, R: Rng + ?Sized>(items: &mut [T], rng: &mut R) {
    let len = items.len();
    if len < 2 {
        return;
    }
    for i in 0..len - 1 {
        let j = rng.random_range(i..len);
        items.swap(i, j);
    }
}

/// An ordered deck of all 52 sprite-sheet cards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: [Card; DECK_SIZE],
}

impl Deck {
    /// Creates a deck in sprite-sheet order (region 0 first).
    #[must_use]
    pub fn new() -> Self {
        Self {
            cards: core::array::from_fn(|i| Card::from_region(i as u8)),
        }
    }

    /// Creates a deck in the given region order.
    ///
    /// # Errors
    ///
    /// Returns an error if a region is outside the sheet or appears twice.
    pub fn from_regions(order: [u8; DECK_SIZE]) -> Result<Self, DeckError> {
        let mut seen = [false; DECK_SIZE];
        for &region in &order {
            let slot = seen
                .get_mut(region as usize)
                .ok_or(DeckError::InvalidRegion(region))?;
            if *slot {
                return Err(DeckError::DuplicateCard(region));
            }
            *slot = true;
        }

        Ok(Self {
            cards: order.map(Card::from_region),
        })
    }

    /// Returns the cards in deck order.
    #[must_use]
    pub const fn cards(&self) -> &[Card; DECK_SIZE] {
        &self.cards
    }

    /// Returns the card at `index`, if any.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<Card> {
        self.cards.get(index).copied()
    }

    /// Shuffles the deck in place.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        fisher_yates(&mut self.cards, rng);
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

/// Source of the per-round deck order.
pub trait Shuffler {
    /// Reorders the deck for a new round.
    fn shuffle(&mut self, deck: &mut Deck);
}

/// Shuffles with a seeded `ChaCha8` generator.
#[derive(Debug, Clone)]
pub struct RandomShuffler {
    rng: ChaCha8Rng,
}

impl RandomShuffler {
    /// Creates a shuffler from a seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl Shuffler for RandomShuffler {
    fn shuffle(&mut self, deck: &mut Deck) {
        deck.shuffle(&mut self.rng);
    }
}

/// Leaves the deck as it is. Used to replay a stacked deck.
#[derive(Debug, Clone, Copy, Default)]
pub struct Unshuffled;

impl Shuffler for Unshuffled {
    fn shuffle(&mut self, _deck: &mut Deck) {}
}

/// Two-ended cursor over a [`Deck`].
///
/// The player draws from the front (index 0 upward); the dealer draws from
/// the back (index 51 downward). The deck is exhausted once the two ends
/// cross.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrawCursor {
    front: usize,
    back: usize,
    exhausted: bool,
}

impl DrawCursor {
    /// Creates a cursor over a full deck.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            front: 0,
            back: DECK_SIZE - 1,
            exhausted: false,
        }
    }

    /// Rewinds both ends.
    pub const fn reset(&mut self) {
        *self = Self::new();
    }

    /// Draws the next player card.
    ///
    /// # Errors
    ///
    /// Returns [`DrawError::DeckExhausted`] if no cards remain.
    pub fn draw_front(&mut self, deck: &Deck) -> Result<Card, DrawError> {
        if self.exhausted {
            return Err(DrawError::DeckExhausted);
        }
        let card = deck.get(self.front).ok_or(DrawError::DeckExhausted)?;
        self.advance_front();
        Ok(card)
    }

    /// Draws the next dealer card.
    ///
    /// # Errors
    ///
    /// Returns [`DrawError::DeckExhausted`] if no cards remain.
    pub fn draw_back(&mut self, deck: &Deck) -> Result<Card, DrawError> {
        if self.exhausted {
            return Err(DrawError::DeckExhausted);
        }
        let card = deck.get(self.back).ok_or(DrawError::DeckExhausted)?;
        self.advance_back();
        Ok(card)
    }

    /// Returns the number of cards left between the two ends.
    #[must_use]
    pub const fn remaining(&self) -> usize {
        if self.exhausted {
            0
        } else {
            self.back - self.front + 1
        }
    }

    const fn advance_front(&mut self) {
        if self.front == self.back {
            self.exhausted = true;
        } else {
            self.front += 1;
        }
    }

    const fn advance_back(&mut self) {
        if self.front == self.back {
            self.exhausted = true;
        } else {
            self.back -= 1;
        }
    }
}

impl Default for DrawCursor {
    fn default() -> Self {
        Self::new()
    }
}
