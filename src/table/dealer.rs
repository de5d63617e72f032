use core::cmp::Ordering;

use tracing::{debug, info};

use crate::card::Card;
use crate::error::{ActionError, SettleError};
use crate::result::{RoundOutcome, RoundResult};

use super::{RoundState, Table};

impl Table {
    /// Dealer plays their hand according to the house rules.
    ///
    /// The dealer reveals their hidden card and draws while their total is
    /// below `dealer_stands_on`. Aces have already been folded down by the
    /// hand, so there is no separate soft-17 rule. The round outcome is then
    /// decided by comparing totals.
    ///
    /// Returns the cards drawn by the dealer.
    ///
    /// # Errors
    ///
    /// Returns an error if the table is not in dealer turn state or the deck
    /// is empty while the dealer must draw.
    pub fn dealer_play(&mut self) -> Result<Vec<Card>, ActionError> {
        if self.state != RoundState::DealerTurn {
            return Err(ActionError::InvalidState);
        }

        self.dealer_revealed = true;

        let mut drawn = Vec::new();
        while self.dealer.total() < self.options.dealer_stands_on {
            let card = self.draw()?;
            self.dealer.receive(card);
            debug!(%card, total = self.dealer.total(), "dealer draws");
            drawn.push(card);
        }

        let outcome = if self.dealer.is_bust() {
            RoundOutcome::DealerBust
        } else {
            match self.player.total().cmp(&self.dealer.total()) {
                Ordering::Greater => RoundOutcome::Win,
                Ordering::Less => RoundOutcome::Lose,
                Ordering::Equal => RoundOutcome::Push,
            }
        };
        self.finish(outcome);

        Ok(drawn)
    }

    /// Applies the round outcome to the pot.
    ///
    /// Naturals pay `blackjack_pays` times the wager, every other win pays
    /// 1:1, losses collect the wager, and pushes leave the bankroll alone.
    /// The table returns to [`RoundState::Idle`]; hands stay visible until the
    /// next deal or [`Table::clear_round`].
    ///
    /// # Errors
    ///
    /// Returns an error if the table is not in round-over state.
    pub fn settle(&mut self) -> Result<RoundResult, SettleError> {
        if self.state != RoundState::RoundOver {
            return Err(SettleError::InvalidState);
        }
        let outcome = self.outcome.ok_or(SettleError::InvalidState)?;

        let wager = self.pot.wager();
        let before = self.pot.bankroll();

        match outcome {
            RoundOutcome::Natural => self.pot.settle_blackjack_win(self.options.blackjack_pays),
            RoundOutcome::TwentyOne | RoundOutcome::DealerBust | RoundOutcome::Win => {
                self.pot.settle_win();
            }
            RoundOutcome::PlayerBust | RoundOutcome::Lose => self.pot.settle_loss(),
            RoundOutcome::NaturalPush | RoundOutcome::Push => self.pot.settle_tie(),
        }

        let bankroll = self.pot.bankroll();
        let result = RoundResult {
            outcome,
            wager,
            net: bankroll - before,
            player_total: self.player.total(),
            dealer_total: self.dealer.total(),
            bankroll,
        };

        info!(
            ?outcome,
            wager,
            net = result.net,
            bankroll,
            "round settled"
        );

        self.state = RoundState::Idle;
        Ok(result)
    }
}
