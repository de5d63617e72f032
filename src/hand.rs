//! Player and dealer hand representation.

use core::fmt;

use crate::card::Card;

/// Cards held by one party for a single round.
///
/// The running total counts every ace as 11 until [`Hand::adjust_for_aces`]
/// folds them down to 1, one at a time, while the hand is over 21.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    /// Cards in the order they were dealt.
    cards: Vec<Card>,
    /// Running total.
    total: u8,
    /// Aces still counted as 11.
    high_aces: u8,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cards: Vec::new(),
            total: 0,
            high_aces: 0,
        }
    }

    /// Adds a card to the hand without adjusting aces.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
        self.total = self.total.saturating_add(card.value());
        if card.is_ace() {
            self.high_aces += 1;
        }
    }

    /// Counts aces as 1 instead of 11 until the hand is 21 or under, or no
    /// high aces remain.
    pub const fn adjust_for_aces(&mut self) {
        while self.total > 21 && self.high_aces > 0 {
            self.total -= 10;
            self.high_aces -= 1;
        }
    }

    /// Adds a card and immediately adjusts aces.
    pub fn receive(&mut self, card: Card) {
        self.add_card(card);
        self.adjust_for_aces();
    }

    /// Returns the running total.
    #[must_use]
    pub const fn total(&self) -> u8 {
        self.total
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns whether the total is exactly 21, regardless of card count.
    #[must_use]
    pub const fn is_blackjack(&self) -> bool {
        self.total == 21
    }

    /// Returns whether the hand is a two-card 21.
    #[must_use]
    pub fn is_natural(&self) -> bool {
        self.cards.len() == 2 && self.is_blackjack()
    }

    /// Returns whether the hand is over 21.
    #[must_use]
    pub const fn is_bust(&self) -> bool {
        self.total > 21
    }

    /// Returns whether an ace is still counted as 11.
    #[must_use]
    pub const fn is_soft(&self) -> bool {
        self.high_aces > 0
    }

    /// Returns the dealer card shown before the player acts.
    ///
    /// This is the second card dealt (index 1); the first stays face down.
    #[must_use]
    pub fn visible_card(&self) -> Option<&Card> {
        self.cards.get(1)
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Clears the hand for a new round.
    pub fn clear(&mut self) {
        self.cards.clear();
        self.total = 0;
        self.high_aces = 0;
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.cards.is_empty() {
            return f.write_str("(no cards)");
        }
        for (index, card) in self.cards.iter().enumerate() {
            if index > 0 {
                f.write_str(" and ")?;
            }
            write!(f, "{card}")?;
        }
        write!(f, " with a value of {}", self.total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::{Rank, Suit};

    const fn card(rank: Rank) -> Card {
        Card::new(Suit::Spades, rank)
    }

    #[test]
    fn ace_king_is_natural() {
        let mut hand = Hand::new();
        hand.receive(card(Rank::Ace));
        hand.receive(Card::new(Suit::Hearts, Rank::King));
        assert_eq!(hand.total(), 21);
        assert!(hand.is_blackjack());
        assert!(hand.is_natural());
        assert!(hand.is_soft());
    }

    #[test]
    fn pair_of_aces_folds_once() {
        let mut hand = Hand::new();
        hand.add_card(card(Rank::Ace));
        hand.add_card(Card::new(Suit::Hearts, Rank::Ace));
        assert_eq!(hand.total(), 22);

        hand.adjust_for_aces();
        assert_eq!(hand.total(), 12);
        assert!(!hand.is_blackjack());
        assert!(!hand.is_bust());
        assert!(hand.is_soft());
    }

    #[test]
    fn adjusted_total_stays_in_range_with_aces() {
        // Every ace count and pre-adjustment total up to 31 lands at 21 or under.
        for aces in 1..=4u8 {
            for filler in [Rank::Two, Rank::Five, Rank::Nine, Rank::Ten] {
                let mut hand = Hand::new();
                for _ in 0..aces {
                    hand.add_card(card(Rank::Ace));
                }
                hand.add_card(card(filler));
                let raw = hand.total();
                hand.adjust_for_aces();
                if raw <= 31 {
                    assert!(hand.total() <= 21, "{aces} aces + {filler:?} -> {}", hand.total());
                }
            }
        }
    }

    #[test]
    fn hit_to_21_is_blackjack_but_not_natural() {
        let mut hand = Hand::new();
        hand.receive(card(Rank::Seven));
        hand.receive(card(Rank::Four));
        hand.receive(card(Rank::King));
        assert!(hand.is_blackjack());
        assert!(!hand.is_natural());
    }

    #[test]
    fn hard_hand_busts() {
        let mut hand = Hand::new();
        hand.receive(card(Rank::Ten));
        hand.receive(card(Rank::Nine));
        hand.receive(card(Rank::Five));
        assert_eq!(hand.total(), 24);
        assert!(hand.is_bust());
    }

    #[test]
    fn visible_card_is_second_dealt() {
        let mut hand = Hand::new();
        assert!(hand.visible_card().is_none());
        hand.receive(card(Rank::Three));
        hand.receive(card(Rank::Queen));
        assert_eq!(hand.visible_card().map(|c| c.rank), Some(Rank::Queen));
    }

    #[test]
    fn display_lists_cards_and_value() {
        let mut hand = Hand::new();
        hand.receive(card(Rank::Ace));
        hand.receive(Card::new(Suit::Hearts, Rank::Nine));
        assert_eq!(
            hand.to_string(),
            "Ace of Spades and 9 of Hearts with a value of 20"
        );
    }
}
