//! The player's bankroll and per-round wager.

use core::fmt;

use crate::error::{BankrollError, BetError};

/// Player money that persists across rounds, plus the wager for the current
/// round.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pot {
    /// Money the player owns.
    bankroll: f64,
    /// Amount staked on the current round (0 between rounds).
    wager: f64,
}

impl Pot {
    /// Opens a pot with the given bankroll.
    ///
    /// # Errors
    ///
    /// Returns an error if the bankroll is not a finite positive number.
    pub fn new(bankroll: f64) -> Result<Self, BankrollError> {
        if !bankroll.is_finite() {
            return Err(BankrollError::NotFinite);
        }
        if bankroll <= 0.0 {
            return Err(BankrollError::NotPositive);
        }

        Ok(Self {
            bankroll,
            wager: 0.0,
        })
    }

    /// Stakes `amount` on the current round.
    ///
    /// The bankroll is only adjusted on settlement.
    ///
    /// # Errors
    ///
    /// Returns an error if the amount is not finite, not positive, or larger
    /// than the bankroll.
    pub fn place_bet(&mut self, amount: f64) -> Result<(), BetError> {
        if !amount.is_finite() {
            return Err(BetError::NotFinite);
        }
        if amount <= 0.0 {
            return Err(BetError::NotPositive);
        }
        if amount > self.bankroll {
            return Err(BetError::InsufficientFunds {
                available: self.bankroll,
            });
        }

        self.wager = amount;
        Ok(())
    }

    /// Pays the wager at 1:1.
    pub fn settle_win(&mut self) {
        self.bankroll += self.wager;
        self.wager = 0.0;
    }

    /// Pays a natural at `pays` times the wager (1.5 for 3:2).
    pub fn settle_blackjack_win(&mut self, pays: f64) {
        self.bankroll += pays * self.wager;
        self.wager = 0.0;
    }

    /// Collects the wager.
    pub fn settle_loss(&mut self) {
        self.bankroll -= self.wager;
        self.wager = 0.0;
    }

    /// Returns the wager untouched.
    pub const fn settle_tie(&mut self) {
        self.wager = 0.0;
    }

    /// Returns the current bankroll.
    #[must_use]
    pub const fn bankroll(&self) -> f64 {
        self.bankroll
    }

    /// Returns the current wager.
    #[must_use]
    pub const fn wager(&self) -> f64 {
        self.wager
    }

    /// Returns whether a bet is currently staked.
    #[must_use]
    pub fn has_bet(&self) -> bool {
        self.wager > 0.0
    }

    /// Returns whether the player can no longer play.
    #[must_use]
    pub fn is_broke(&self) -> bool {
        self.bankroll <= 0.0
    }
}

impl fmt::Display for Pot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Your remaining pot is {}", self.bankroll)
    }
}
