use alloc::vec::Vec;

use crate::card::Card;
use crate::deck::Shuffler;
use crate::error::ActionError;
use crate::hand::BLACKJACK;
use crate::options::TableOptions;
use crate::result::{Outcome, RoundResult};

use super::{Phase, Round, Table};

/// Decides the outcome once the dealer has stopped drawing.
///
/// The first matching rule wins: a dealer bust pays the player, equal totals
/// push, anything else goes to the dealer.
const fn decide(player_value: u8, dealer_value: u8) -> Outcome {
    if dealer_value > BLACKJACK {
        Outcome::PlayerWin
    } else if dealer_value == player_value {
        Outcome::Push
    } else {
        Outcome::DealerWin
    }
}

impl<S: Shuffler> Round<S> {
    pub(super) fn dealer_play(&mut self, options: &TableOptions) -> Result<Vec<Card>, ActionError> {
        if self.phase != Phase::DealerTurn {
            return Err(ActionError::InvalidState);
        }

        let rule = options.ace_rule;
        let player_value = self.player.value(rule);
        let mut drawn_cards = Vec::new();

        // Draw from the back until level with or above the player.
        while self.dealer.value(rule) < player_value {
            let card = self.cursor.draw_back(&self.deck)?;
            self.dealer.add_card(card);
            drawn_cards.push(card);
        }

        let dealer_value = self.dealer.value(rule);
        let result = RoundResult {
            outcome: decide(player_value, dealer_value),
            player_value,
            dealer_value,
            player_bust: false,
            dealer_bust: dealer_value > BLACKJACK,
        };
        self.resolve(result, options);

        Ok(drawn_cards)
    }
}

impl<S: Shuffler> Table<S> {
    /// Dealer plays their hand.
    ///
    /// The dealer draws from the back of the deck, one card at a time, while
    /// their total is below the player's. The round then resolves: dealer
    /// bust is a player win, equal totals push, otherwise the dealer wins.
    ///
    /// Returns the cards drawn by the dealer.
    ///
    /// # Errors
    ///
    /// Returns an error if the table is not in [`Phase::DealerTurn`] or the
    /// deck is exhausted while the dealer must draw. On exhaustion the phase
    /// stays [`Phase::DealerTurn`] and the round is left unresolved.
    pub fn dealer_play(&self) -> Result<Vec<Card>, ActionError> {
        self.round.lock().dealer_play(&self.options)
    }
}
