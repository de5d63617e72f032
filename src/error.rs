//! Error types for table operations.

use thiserror::Error;

/// Errors that can occur when drawing from the deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeckError {
    /// No cards left in the deck.
    #[error("no cards left in the deck")]
    Empty,
}

/// Errors that can occur when opening a pot.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum BankrollError {
    /// Bankroll is NaN or infinite.
    #[error("bankroll must be a finite number")]
    NotFinite,
    /// Bankroll is zero or negative.
    #[error("bankroll must be greater than zero")]
    NotPositive,
}

/// Errors that can occur during betting.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum BetError {
    /// Bet amount is NaN or infinite.
    #[error("bet amount must be a finite number")]
    NotFinite,
    /// Bet amount is zero or negative.
    #[error("bet amount must be greater than zero")]
    NotPositive,
    /// Bet exceeds the bankroll.
    #[error("insufficient funds, only {available} available")]
    InsufficientFunds {
        /// Current bankroll.
        available: f64,
    },
    /// Invalid table state for betting.
    #[error("invalid table state for betting")]
    InvalidState,
}

/// Errors that can occur during dealing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// Invalid table state for dealing.
    #[error("invalid table state for dealing")]
    InvalidState,
    /// No bet has been placed.
    #[error("no bet has been placed")]
    NoBet,
    /// The deck ran out mid-deal.
    #[error(transparent)]
    Deck(#[from] DeckError),
}

/// Errors that can occur during player and dealer actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// Invalid table state for this action.
    #[error("invalid table state for this action")]
    InvalidState,
    /// The deck ran out mid-round.
    #[error(transparent)]
    Deck(#[from] DeckError),
}

/// Errors that can occur during settlement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SettleError {
    /// Invalid table state for settlement.
    #[error("invalid table state for settlement")]
    InvalidState,
}

/// Fatal errors that end a session.
#[derive(Debug, Error)]
pub enum SessionError {
    /// Reading input or writing output failed.
    #[error("terminal i/o failed: {0}")]
    Io(#[from] std::io::Error),
    /// Dealing failed.
    #[error("deal failed: {0}")]
    Deal(#[from] DealError),
    /// A player or dealer action failed.
    #[error("action failed: {0}")]
    Action(#[from] ActionError),
    /// Settlement failed.
    #[error("settlement failed: {0}")]
    Settle(#[from] SettleError),
    /// The table options are invalid.
    #[error("invalid table options: {0}")]
    Options(#[from] OptionsError),
    /// The deck could not be refilled.
    #[error("refill failed: {0}")]
    Refill(#[from] RefillError),
}

/// Errors that can occur when validating table options.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum OptionsError {
    /// Natural payout ratio is NaN, infinite, zero or negative.
    #[error("blackjack payout ratio must be a finite number greater than zero, got {0}")]
    BlackjackPays(f64),
}

/// Errors that can occur when refilling the deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RefillError {
    /// A round is in progress.
    #[error("cannot refill the deck while a round is in progress")]
    InvalidState,
}

/// Error returned when a hit-or-stand command is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("command not recognised: {0:?}")]
pub struct ParseDecisionError(pub String);
