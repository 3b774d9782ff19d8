//! Table engine and round state management.

use core::time::Duration;

use crate::card::{Card, DECK_SIZE};
use crate::deck::{Deck, DrawCursor, RandomShuffler, Shuffler};
use crate::error::ActionError;
use crate::hand::{DealerHand, Hand};
use crate::options::TableOptions;
use crate::result::RoundResult;
use crate::sync::RoundLock;

mod actions;
mod dealer;
pub mod state;

pub use state::Phase;

/// Number of cards the player receives on the deal.
pub const INITIAL_PLAYER_CARDS: usize = 2;

/// Everything that changes during a round, guarded by one lock.
#[derive(Debug)]
struct Round<S> {
    deck: Deck,
    cursor: DrawCursor,
    player: Hand,
    dealer: DealerHand,
    phase: Phase,
    result: Option<RoundResult>,
    display_remaining: Duration,
    shuffler: S,
}

impl<S: Shuffler> Round<S> {
    fn new(shuffler: S) -> Self {
        Self {
            deck: Deck::new(),
            cursor: DrawCursor::new(),
            player: Hand::new(),
            dealer: DealerHand::new(),
            phase: Phase::Dealing,
            result: None,
            display_remaining: Duration::ZERO,
            shuffler,
        }
    }

    fn deal(&mut self) -> Result<(), ActionError> {
        self.shuffler.shuffle(&mut self.deck);
        self.cursor.reset();
        self.player.clear();
        self.dealer.clear();
        self.result = None;
        self.display_remaining = Duration::ZERO;

        for _ in 0..INITIAL_PLAYER_CARDS {
            let card = self.cursor.draw_front(&self.deck)?;
            self.player.add_card(card);
        }
        let up_card = self.cursor.draw_back(&self.deck)?;
        self.dealer.add_card(up_card);

        self.phase = Phase::PlayerTurn;
        Ok(())
    }

    fn resolve(&mut self, result: RoundResult, options: &TableOptions) {
        self.result = Some(result);
        self.display_remaining = options.outcome_display;
        self.phase = Phase::Resolved;
    }

    fn showing_outcome(&self) -> bool {
        self.phase == Phase::Resolved && !self.display_remaining.is_zero()
    }
}

/// A read-only copy of the table, taken under a single lock.
///
/// Render code works from a snapshot so it never holds the round lock while
/// drawing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableSnapshot {
    /// Current phase.
    pub phase: Phase,
    /// The player's hand.
    pub player: Hand,
    /// The dealer's hand.
    pub dealer: DealerHand,
    /// The player's current value.
    pub player_value: u8,
    /// The dealer's current value.
    pub dealer_value: u8,
    /// Result of the last resolved round, if any.
    pub result: Option<RoundResult>,
    /// Whether the outcome banner is still on screen.
    pub showing_outcome: bool,
}

impl TableSnapshot {
    /// Returns whether a round is laid out on the table.
    ///
    /// Nothing is on the table before the first deal, and the cards are
    /// cleared once the outcome banner has been shown.
    #[must_use]
    pub fn round_visible(&self) -> bool {
        match self.phase {
            Phase::Dealing => false,
            Phase::PlayerTurn | Phase::DealerTurn => true,
            Phase::Resolved => self.showing_outcome,
        }
    }
}

/// A single-player blackjack table.
///
/// The table owns the deck, the draw cursor, both hands, and the round
/// phase. All of it sits behind one lock, so a table can be shared between an
/// input thread and a render thread.
pub struct Table<S = RandomShuffler> {
    /// Table options.
    pub options: TableOptions,
    round: RoundLock<Round<S>>,
}

impl Table {
    /// Creates a table whose deck is shuffled from the given seed.
    ///
    /// # Example
    ///
    /// ```
    /// use bjtable::{Phase, Table, TableOptions};
    ///
    /// let table = Table::new(TableOptions::default(), 42);
    /// assert_eq!(table.phase(), Phase::Dealing);
    /// ```
    #[must_use]
    pub fn new(options: TableOptions, seed: u64) -> Self {
        Self::with_shuffler(options, RandomShuffler::new(seed))
    }
}

impl<S: Shuffler> Table<S> {
    /// Creates a table with a custom shuffler.
    #[must_use]
    pub fn with_shuffler(options: TableOptions, shuffler: S) -> Self {
        Self {
            options,
            round: RoundLock::new(Round::new(shuffler)),
        }
    }

    /// Creates a table that starts from the given deck order.
    ///
    /// With [`Unshuffled`](crate::deck::Unshuffled) the order is replayed on
    /// every deal.
    #[must_use]
    pub fn with_deck(options: TableOptions, deck: Deck, shuffler: S) -> Self {
        let mut round = Round::new(shuffler);
        round.deck = deck;
        Self {
            options,
            round: RoundLock::new(round),
        }
    }

    /// Shuffles and deals a new round.
    ///
    /// Allowed from any phase. The player gets exactly two cards from the
    /// front of the deck, the dealer gets the up-card from the back, and the
    /// previous outcome is cleared.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::DeckExhausted`] if the deck cannot cover the
    /// deal.
    pub fn deal(&self) -> Result<(), ActionError> {
        self.round.lock().deal()
    }

    /// Advances the outcome-display timer by `elapsed`.
    ///
    /// Call once per frame. Has no effect outside [`Phase::Resolved`]. The
    /// countdown starts when the round resolves, so `elapsed` should only
    /// cover time since then: a loop that blocks on input must restart its
    /// frame clock after applying the input, or the time spent waiting eats
    /// the banner.
    pub fn tick(&self, elapsed: Duration) {
        let mut round = self.round.lock();
        if round.phase == Phase::Resolved {
            round.display_remaining = round.display_remaining.saturating_sub(elapsed);
        }
    }

    /// Returns whether the outcome banner is on screen.
    pub fn is_showing_outcome(&self) -> bool {
        self.round.lock().showing_outcome()
    }

    /// Returns how long the outcome banner stays on screen.
    pub fn display_remaining(&self) -> Duration {
        self.round.lock().display_remaining
    }

    /// Returns the current phase.
    pub fn phase(&self) -> Phase {
        self.round.lock().phase
    }

    /// Returns the result of the last resolved round.
    ///
    /// Cleared by the next deal.
    pub fn result(&self) -> Option<RoundResult> {
        self.round.lock().result
    }

    /// Returns a clone of the player's hand.
    pub fn player_hand(&self) -> Hand {
        self.round.lock().player.clone()
    }

    /// Returns a clone of the dealer's hand.
    pub fn dealer_hand(&self) -> DealerHand {
        self.round.lock().dealer.clone()
    }

    /// Returns the number of cards in the player's hand.
    pub fn player_count(&self) -> usize {
        self.round.lock().player.len()
    }

    /// Returns the player's current value.
    pub fn player_value(&self) -> u8 {
        self.round.lock().player.value(self.options.ace_rule)
    }

    /// Returns the dealer's current value.
    pub fn dealer_value(&self) -> u8 {
        self.round.lock().dealer.value(self.options.ace_rule)
    }

    /// Returns the number of cards left between the player and dealer ends.
    pub fn cards_remaining(&self) -> usize {
        self.round.lock().cursor.remaining()
    }

    /// Returns the current deck order.
    pub fn deck_order(&self) -> [Card; DECK_SIZE] {
        *self.round.lock().deck.cards()
    }

    /// Takes a snapshot of the table for rendering.
    pub fn snapshot(&self) -> TableSnapshot {
        let round = self.round.lock();
        let rule = self.options.ace_rule;
        TableSnapshot {
            phase: round.phase,
            player: round.player.clone(),
            dealer: round.dealer.clone(),
            player_value: round.player.value(rule),
            dealer_value: round.dealer.value(rule),
            result: round.result,
            showing_outcome: round.showing_outcome(),
        }
    }
}
