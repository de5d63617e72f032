use tracing::debug;

use crate::card::Card;
use crate::error::ActionError;
use crate::result::RoundOutcome;

use super::{RoundState, Table};

impl Table {
    fn ensure_player_turn(&self) -> Result<(), ActionError> {
        if self.state == RoundState::PlayerTurn {
            Ok(())
        } else {
            Err(ActionError::InvalidState)
        }
    }

    /// Player action: Hit (draw a card).
    ///
    /// Busting ends the round as a loss and reaching exactly 21 ends it as a
    /// 1:1 win; the dealer does not act in either case.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn or the deck is empty.
    pub fn hit(&mut self) -> Result<Card, ActionError> {
        self.ensure_player_turn()?;

        let card = self.draw()?;
        self.player.receive(card);
        debug!(%card, total = self.player.total(), "player hits");

        if self.player.is_bust() {
            self.finish(RoundOutcome::PlayerBust);
        } else if self.player.is_blackjack() {
            self.finish(RoundOutcome::TwentyOne);
        }

        Ok(card)
    }

    /// Player action: Stand (keep current hand).
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn.
    pub fn stand(&mut self) -> Result<(), ActionError> {
        self.ensure_player_turn()?;

        debug!(total = self.player.total(), "player stands");
        self.state = RoundState::DealerTurn;
        Ok(())
    }
}
