use tracing::debug;

use crate::error::{BetError, DealError};
use crate::result::RoundOutcome;

use super::{RoundState, Table};

impl Table {
    /// Stakes a wager for the next round.
    ///
    /// Betting again before the deal replaces the previous wager.
    ///
    /// # Errors
    ///
    /// Returns an error if a round is in progress or the amount is not a
    /// positive number within the bankroll.
    pub fn bet(&mut self, amount: f64) -> Result<(), BetError> {
        if !matches!(self.state, RoundState::Idle | RoundState::Betting) {
            return Err(BetError::InvalidState);
        }

        self.pot.place_bet(amount)?;
        self.state = RoundState::Betting;
        Ok(())
    }

    /// Deals the opening hands and checks for a player natural.
    ///
    /// Cards go out in a fixed order: player, player, dealer, dealer. If the
    /// player's two cards total 21 the dealer's hand is shown and the round is
    /// over: a push against a dealer natural, otherwise a natural win. The
    /// dealer never draws in that case.
    ///
    /// # Errors
    ///
    /// Returns an error if the table is not in betting state, no wager is
    /// staked, or the deck runs out.
    pub fn deal(&mut self) -> Result<(), DealError> {
        if self.state != RoundState::Betting {
            return Err(DealError::InvalidState);
        }
        if !self.pot.has_bet() {
            return Err(DealError::NoBet);
        }

        self.player.clear();
        self.dealer.clear();
        self.dealer_revealed = false;
        self.outcome = None;

        for _ in 0..2 {
            let card = self.draw()?;
            self.player.receive(card);
        }
        for _ in 0..2 {
            let card = self.draw()?;
            self.dealer.receive(card);
        }

        debug!(
            player = %self.player,
            dealer_shows = ?self.dealer.visible_card(),
            remaining = self.deck.remaining(),
            "opening hands dealt"
        );

        if self.player.is_natural() {
            let outcome = if self.dealer.is_natural() {
                RoundOutcome::NaturalPush
            } else {
                RoundOutcome::Natural
            };
            self.finish(outcome);
        } else {
            self.state = RoundState::PlayerTurn;
        }

        Ok(())
    }
}
