//! Player and dealer hand representations and scoring.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::Card;
use crate::options::AceRule;

/// Highest total that does not bust.
pub const BLACKJACK: u8 = 21;

fn score_greedy(values: impl IntoIterator<Item = u8>) -> u8 {
    let mut total: u8 = 0;
    for value in values {
        let counted = if value == 1 && total.saturating_add(11) <= BLACKJACK {
            11
        } else {
            value
        };
        total = total.saturating_add(counted);
    }
    total
}

fn score_demoting(values: impl IntoIterator<Item = u8>) -> u8 {
    let mut total: u8 = 0;
    let mut aces: u8 = 0;

    for value in values {
        if value == 1 {
            aces = aces.saturating_add(1);
            total = total.saturating_add(11);
        } else {
            total = total.saturating_add(value);
        }
    }

    while total > BLACKJACK && aces > 0 {
        total -= 10;
        aces -= 1;
    }

    total
}

/// Scores card values (ace = 1) in hand order under the given ace rule.
///
/// ```
/// use bjtable::{AceRule, hand::score};
///
/// assert_eq!(score([1, 5, 6], AceRule::Demoting), 12);
/// assert_eq!(score([1, 5, 6], AceRule::Greedy), 22);
/// ```
pub fn score(values: impl IntoIterator<Item = u8>, rule: AceRule) -> u8 {
    match rule {
        AceRule::Demoting => score_demoting(values),
        AceRule::Greedy => score_greedy(values),
    }
}

fn evaluate_cards(cards: &[Card], rule: AceRule) -> u8 {
    score(cards.iter().map(Card::value), rule)
}

/// The player's hand.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    /// Cards in draw order.
    cards: Vec<Card>,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Calculates the value of the hand.
    #[must_use]
    pub fn value(&self, rule: AceRule) -> u8 {
        evaluate_cards(&self.cards, rule)
    }

    /// Returns whether the hand is bust.
    #[must_use]
    pub fn is_bust(&self, rule: AceRule) -> bool {
        self.value(rule) > BLACKJACK
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Clears the hand for a new round.
    pub fn clear(&mut self) {
        self.cards.clear();
    }
}

/// The dealer's hand.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DealerHand {
    /// Cards in the hand; the first is the up-card.
    cards: Vec<Card>,
    /// Whether the hole position is revealed.
    hole_revealed: bool,
}

impl DealerHand {
    /// Creates a new empty dealer hand.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cards: Vec::new(),
            hole_revealed: false,
        }
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns all cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the visible card (first card).
    #[must_use]
    pub fn up_card(&self) -> Option<&Card> {
        self.cards.first()
    }

    /// Returns the cards drawn after the up-card.
    #[must_use]
    pub fn drawn(&self) -> &[Card] {
        self.cards.get(1..).unwrap_or_default()
    }

    /// Returns whether the hole position is revealed.
    #[must_use]
    pub const fn is_hole_revealed(&self) -> bool {
        self.hole_revealed
    }

    /// Reveals the hole position.
    pub const fn reveal_hole(&mut self) {
        self.hole_revealed = true;
    }

    /// Calculates the full value of the hand.
    #[must_use]
    pub fn value(&self, rule: AceRule) -> u8 {
        evaluate_cards(&self.cards, rule)
    }

    /// Returns whether the hand is bust.
    #[must_use]
    pub fn is_bust(&self, rule: AceRule) -> bool {
        self.value(rule) > BLACKJACK
    }

    /// Returns the number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Clears the hand for a new round.
    pub fn clear(&mut self) {
        self.cards.clear();
        self.hole_revealed = false;
    }
}
