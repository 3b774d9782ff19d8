use crate::card::Card;
use crate::deck::Shuffler;
use crate::error::ActionError;
use crate::input::Input;
use crate::options::TableOptions;
use crate::result::{Outcome, RoundResult};

use super::{Phase, Round, Table};

impl<S: Shuffler> Round<S> {
    fn ensure_player_turn(&self) -> Result<(), ActionError> {
        if self.phase != Phase::PlayerTurn {
            return Err(ActionError::InvalidState);
        }
        Ok(())
    }

    pub(super) fn hit(&mut self, options: &TableOptions) -> Result<Card, ActionError> {
        self.ensure_player_turn()?;

        let card = self.cursor.draw_front(&self.deck)?;
        self.player.add_card(card);

        // A bust ends the round before the dealer draws.
        let rule = options.ace_rule;
        if self.player.is_bust(rule) {
            let result = RoundResult {
                outcome: Outcome::DealerWin,
                player_value: self.player.value(rule),
                dealer_value: self.dealer.value(rule),
                player_bust: true,
                dealer_bust: false,
            };
            self.resolve(result, options);
        }

        Ok(card)
    }

    pub(super) fn stand(&mut self) -> Result<(), ActionError> {
        self.ensure_player_turn()?;

        self.dealer.reveal_hole();
        self.phase = Phase::DealerTurn;
        Ok(())
    }
}

impl<S: Shuffler> Table<S> {
    /// Player action: Hit (draw the next card from the front of the deck).
    ///
    /// If the hand busts, the dealer wins and the round resolves immediately.
    ///
    /// # Errors
    ///
    /// Returns an error if the table is not in [`Phase::PlayerTurn`] or the
    /// deck is exhausted.
    pub fn hit(&self) -> Result<Card, ActionError> {
        self.round.lock().hit(&self.options)
    }

    /// Player action: Stand (reveal the hole and hand over to the dealer).
    ///
    /// # Errors
    ///
    /// Returns an error if the table is not in [`Phase::PlayerTurn`].
    pub fn stand(&self) -> Result<(), ActionError> {
        self.round.lock().stand()
    }

    /// Applies an input.
    ///
    /// [`Input::Stand`] also plays the dealer's turn, so the round is resolved
    /// when this returns. In [`Phase::DealerTurn`] (after a bare
    /// [`Table::stand`], or a dealer turn that failed part way) it resumes the
    /// dealer's turn instead.
    ///
    /// # Errors
    ///
    /// Returns the error of the underlying action. If the dealer's turn fails
    /// the table stays in [`Phase::DealerTurn`] with the cards drawn so far;
    /// [`Input::Deal`] always starts over.
    pub fn apply(&self, input: Input) -> Result<(), ActionError> {
        let mut round = self.round.lock();
        match input {
            Input::Deal => round.deal(),
            Input::Hit => round.hit(&self.options).map(|_| ()),
            Input::Stand => {
                if round.phase != Phase::DealerTurn {
                    round.stand()?;
                }
                round.dealer_play(&self.options).map(|_| ())
            }
        }
    }
}
