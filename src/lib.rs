//! A single-player blackjack table with a betting pot that persists across
//! rounds.
//!
//! The crate provides a [`Table`] type that runs the round flow (betting,
//! dealing, naturals, player turn, dealer turn, settlement) and a [`Session`]
//! that drives a table from line-based input.
//!
//! # Example
//!
//! ```
//! use bjpot::{Pot, RoundState, Table, TableOptions};
//!
//! let pot = Pot::new(100.0).unwrap();
//! let mut table = Table::new(TableOptions::default(), pot, 42).unwrap();
//!
//! table.bet(10.0).unwrap();
//! table.deal().unwrap();
//! if table.state() == RoundState::PlayerTurn {
//!     table.stand().unwrap();
//!     table.dealer_play().unwrap();
//! }
//! let result = table.settle().unwrap();
//! assert_eq!(result.bankroll, table.pot().bankroll());
//! ```

pub mod card;
pub mod deck;
pub mod error;
pub mod hand;
pub mod options;
pub mod pot;
pub mod result;
pub mod session;
pub mod table;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use deck::Deck;
pub use error::{
    ActionError, BankrollError, BetError, DealError, DeckError, OptionsError, ParseDecisionError,
    RefillError, SessionError, SettleError,
};
pub use hand::Hand;
pub use options::TableOptions;
pub use pot::Pot;
pub use result::{RoundOutcome, RoundResult};
pub use session::{Decision, Session, SessionSummary, StopReason};
pub use table::{RoundState, Table};
