//! Table engine and round state management.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use crate::card::Card;
use crate::deck::Deck;
use crate::error::{DeckError, OptionsError, RefillError};
use crate::hand::Hand;
use crate::options::TableOptions;
use crate::pot::Pot;
use crate::result::RoundOutcome;

mod actions;
mod bet;
mod dealer;
pub mod state;

pub use state::RoundState;

/// A single-player blackjack table.
///
/// The table owns the deck, the player's pot, and both hands for the round in
/// progress. A round runs [`Table::bet`], [`Table::deal`], then
/// [`Table::hit`]/[`Table::stand`] while in [`RoundState::PlayerTurn`],
/// [`Table::dealer_play`] while in [`RoundState::DealerTurn`], and finally
/// [`Table::settle`].
#[derive(Debug)]
pub struct Table {
    /// House rules, validated when the table opens.
    options: TableOptions,
    /// Cards left to deal.
    deck: Deck,
    /// Player money.
    pot: Pot,
    /// Current round state.
    state: RoundState,
    /// Player's hand for the current round.
    player: Hand,
    /// Dealer's hand for the current round.
    dealer: Hand,
    /// Whether the dealer's hidden card has been turned over.
    dealer_revealed: bool,
    /// Outcome decided for the current round, pending settlement.
    outcome: Option<RoundOutcome>,
    /// Random number generator used for every shuffle.
    rng: ChaCha8Rng,
}

impl Table {
    /// Opens a table with a freshly shuffled deck.
    ///
    /// # Errors
    ///
    /// Returns an error if the options fail [`TableOptions::validate`].
    ///
    /// # Example
    ///
    /// ```
    /// use bjpot::{Pot, Table, TableOptions};
    ///
    /// let pot = Pot::new(100.0).unwrap();
    /// let table = Table::new(TableOptions::default(), pot, 42).unwrap();
    /// assert_eq!(table.cards_remaining(), 52);
    /// ```
    pub fn new(options: TableOptions, pot: Pot, seed: u64) -> Result<Self, OptionsError> {
        options.validate()?;

        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let deck = Deck::shuffled(&mut rng);

        Ok(Self {
            options,
            deck,
            pot,
            state: RoundState::Idle,
            player: Hand::new(),
            dealer: Hand::new(),
            dealer_revealed: false,
            outcome: None,
            rng,
        })
    }

    /// Replaces the deck, e.g. with a [`Deck::stacked`] deck.
    ///
    /// # Errors
    ///
    /// Returns an error if a round is in progress.
    pub fn replace_deck(&mut self, deck: Deck) -> Result<(), RefillError> {
        self.ensure_between_rounds()?;
        self.deck = deck;
        Ok(())
    }

    /// Returns whether the deck is below the refill threshold.
    #[must_use]
    pub fn needs_refill(&self) -> bool {
        self.deck.remaining() < self.options.refill_below
    }

    /// Replaces the deck with a fresh shuffled one if it is running low.
    ///
    /// Call at the start of each round. Returns the number of cards that were
    /// left when a refill happened.
    ///
    /// # Errors
    ///
    /// Returns an error if a round is in progress.
    pub fn check_and_refill(&mut self) -> Result<Option<usize>, RefillError> {
        self.ensure_between_rounds()?;
        if !self.needs_refill() {
            return Ok(None);
        }

        let left = self.deck.remaining();
        self.deck = Deck::shuffled(&mut self.rng);
        debug!(left, "deck refilled and reshuffled");
        Ok(Some(left))
    }

    fn ensure_between_rounds(&self) -> Result<(), RefillError> {
        match self.state {
            RoundState::Idle | RoundState::Betting => Ok(()),
            _ => Err(RefillError::InvalidState),
        }
    }

    /// Draws the top card of the deck.
    fn draw(&mut self) -> Result<Card, DeckError> {
        self.deck.deal()
    }

    /// Ends the round with a decided outcome, turning the dealer's card over.
    fn finish(&mut self, outcome: RoundOutcome) {
        self.dealer_revealed = true;
        self.outcome = Some(outcome);
        self.state = RoundState::RoundOver;
    }

    /// Returns the house rules.
    #[must_use]
    pub const fn options(&self) -> &TableOptions {
        &self.options
    }

    /// Returns the number of cards remaining in the deck.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.deck.remaining()
    }

    /// Returns the current round state.
    #[must_use]
    pub const fn state(&self) -> RoundState {
        self.state
    }

    /// Returns the player's pot.
    #[must_use]
    pub const fn pot(&self) -> &Pot {
        &self.pot
    }

    /// Returns the player's hand.
    #[must_use]
    pub const fn player_hand(&self) -> &Hand {
        &self.player
    }

    /// Returns the dealer's hand, including the hidden card.
    #[must_use]
    pub const fn dealer_hand(&self) -> &Hand {
        &self.dealer
    }

    /// Returns the dealer card the player is allowed to see before acting.
    #[must_use]
    pub fn dealer_visible_card(&self) -> Option<&Card> {
        self.dealer.visible_card()
    }

    /// Returns whether the dealer's whole hand has been shown.
    #[must_use]
    pub const fn is_dealer_revealed(&self) -> bool {
        self.dealer_revealed
    }

    /// Returns the outcome decided for the current round, if any.
    #[must_use]
    pub const fn outcome(&self) -> Option<RoundOutcome> {
        self.outcome
    }

    /// Clears both hands and returns the table to [`RoundState::Idle`].
    ///
    /// An unsettled wager is returned to the player untouched.
    pub fn clear_round(&mut self) {
        self.pot.settle_tie();
        self.player.clear();
        self.dealer.clear();
        self.dealer_revealed = false;
        self.outcome = None;
        self.state = RoundState::Idle;
    }
}
