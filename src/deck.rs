//! The 52-card deck.

use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::error::DeckError;

/// A single deck dealt from the top without replacement.
///
/// Cards are stored so that the top of the deck is the end of the vector.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Builds a full deck and shuffles it with a uniform permutation.
    #[must_use]
    pub fn shuffled(rng: &mut ChaCha8Rng) -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);

        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push(Card::new(suit, rank));
            }
        }

        cards.shuffle(rng);
        Self { cards }
    }

    /// Builds a deck that deals exactly `draws`, first element first.
    #[must_use]
    pub fn stacked(draws: &[Card]) -> Self {
        let mut cards = draws.to_vec();
        cards.reverse();
        Self { cards }
    }

    /// Removes and returns the top card.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::Empty`] if no cards remain.
    pub fn deal(&mut self) -> Result<Card, DeckError> {
        self.cards.pop().ok_or(DeckError::Empty)
    }

    /// Returns the number of cards left to deal.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is exhausted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rand::SeedableRng;

    use super::*;

    #[test]
    fn full_deck_never_repeats_a_card() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let mut deck = Deck::shuffled(&mut rng);
        assert_eq!(deck.remaining(), DECK_SIZE);

        let mut seen = HashSet::new();
        while let Ok(card) = deck.deal() {
            assert!(seen.insert((card.suit, card.rank)), "{card} dealt twice");
        }
        assert_eq!(seen.len(), DECK_SIZE);
        assert!(deck.is_empty());
    }

    #[test]
    fn empty_deck_reports_error() {
        let mut deck = Deck::stacked(&[Card::new(Suit::Clubs, Rank::Two)]);
        assert_eq!(deck.deal().map(|c| c.rank), Ok(Rank::Two));
        assert_eq!(deck.deal(), Err(DeckError::Empty));
    }

    #[test]
    fn stacked_deck_deals_in_order() {
        let first = Card::new(Suit::Hearts, Rank::Ace);
        let second = Card::new(Suit::Spades, Rank::King);
        let mut deck = Deck::stacked(&[first, second]);
        assert_eq!(deck.deal(), Ok(first));
        assert_eq!(deck.deal(), Ok(second));
    }

    #[test]
    fn same_seed_same_order() {
        let mut a = Deck::shuffled(&mut ChaCha8Rng::seed_from_u64(9));
        let mut b = Deck::shuffled(&mut ChaCha8Rng::seed_from_u64(9));
        for _ in 0..DECK_SIZE {
            assert_eq!(a.deal(), b.deal());
        }
    }
}
