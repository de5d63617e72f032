//! Round result types for settlement.

use core::fmt;

/// How a round ended for the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundOutcome {
    /// Two-card 21 against a dealer without one; pays the natural ratio.
    Natural,
    /// Both sides were dealt a two-card 21.
    NaturalPush,
    /// Player hit to exactly 21; pays 1:1 and the dealer never acts.
    TwentyOne,
    /// Player went over 21; the dealer never acts.
    PlayerBust,
    /// Dealer went over 21.
    DealerBust,
    /// Player total beat the dealer's.
    Win,
    /// Dealer total beat the player's.
    Lose,
    /// Equal totals.
    Push,
}

impl RoundOutcome {
    /// Returns whether the player won money.
    #[must_use]
    pub const fn is_win(self) -> bool {
        matches!(
            self,
            Self::Natural | Self::TwentyOne | Self::DealerBust | Self::Win
        )
    }

    /// Returns whether the wager was returned untouched.
    #[must_use]
    pub const fn is_push(self) -> bool {
        matches!(self, Self::NaturalPush | Self::Push)
    }
}

impl fmt::Display for RoundOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::Natural => "Blackjack pays out",
            Self::NaturalPush => "Dealer also has blackjack! It's a draw",
            Self::TwentyOne => "You got 21",
            Self::PlayerBust => "You went bust",
            Self::DealerBust => "Dealer went bust",
            Self::Win => "You win",
            Self::Lose => "Dealer wins",
            Self::Push => "Tied game",
        };
        f.write_str(text)
    }
}

/// Result of a settled round.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoundResult {
    /// The outcome of the round.
    pub outcome: RoundOutcome,
    /// The amount that was staked.
    pub wager: f64,
    /// Change to the bankroll (positive = profit).
    pub net: f64,
    /// The player's final total.
    pub player_total: u8,
    /// The dealer's final total.
    pub dealer_total: u8,
    /// Bankroll after settlement.
    pub bankroll: f64,
}
